use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::catalogue::PhotoCatalogue;
use super::loader::{load_and_scale, Surface};
use super::pool::PickPool;
use crate::config::SlideshowConfig;

/// Alpha removed from the incoming photo's transparency each tick.
/// At 30 Hz a full fade takes 51 ticks, about 1.7s.
pub const FADE_STEP: u8 = 5;

/// Picks tried per transition before giving up until the next tick
pub const MAX_LOAD_ATTEMPTS: usize = 5;

/// A decoded photo, already scaled to the surface
#[derive(Debug, Clone)]
pub struct Photo {
    pub path: PathBuf,
    pub image: RgbaImage,
}

/// Cross-fade state. `alpha` is the transparency of the incoming photo:
/// 255 means fully transparent, 0 means the fade is complete.
#[derive(Debug)]
pub enum TransitionState {
    Idle,
    Transitioning { next: Photo, alpha: u8 },
}

/// One image to blit this tick, already positioned
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub image: &'a RgbaImage,
    pub x: i64,
    pub y: i64,
    /// 0 = invisible, 255 = opaque
    pub opacity: u8,
}

/// Background slideshow: owns the catalogue, the pick pool, and the
/// current/next photos, and advances the fade once per render tick.
pub struct PhotoRotator {
    surface: Surface,
    catalogue: PhotoCatalogue,
    pool: PickPool,
    rng: StdRng,
    transition_time: Duration,
    current: Option<Photo>,
    state: TransitionState,
    last_transition_end: Option<Instant>,
}

impl PhotoRotator {
    /// Create a rotator and load the first photo, if any
    pub fn new(config: &SlideshowConfig, surface: Surface) -> Self {
        Self::with_rng(config, surface, StdRng::from_os_rng())
    }

    pub fn with_rng(config: &SlideshowConfig, surface: Surface, rng: StdRng) -> Self {
        let mut rotator = PhotoRotator {
            surface,
            catalogue: PhotoCatalogue::new(&config.photos_dir, config.rescan_interval()),
            pool: PickPool::new(),
            rng,
            transition_time: config.transition_time(),
            current: None,
            state: TransitionState::Idle,
            last_transition_end: None,
        };

        let now = Instant::now();
        match rotator.load_next(now) {
            Some(photo) => {
                log::info!("🖼️  Initial photo: {}", photo.path.display());
                rotator.current = Some(photo);
                rotator.last_transition_end = Some(now);
            }
            None => log::warn!("⚠️  No initial photo in {}", config.photos_dir.display()),
        }

        rotator
    }

    pub fn catalogue(&self) -> &PhotoCatalogue {
        &self.catalogue
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    /// Transparency of the incoming photo; 255 while idle
    pub fn alpha(&self) -> u8 {
        match &self.state {
            TransitionState::Idle => u8::MAX,
            TransitionState::Transitioning { alpha, .. } => *alpha,
        }
    }

    pub fn current(&self) -> Option<&Photo> {
        self.current.as_ref()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current().map(|photo| photo.path.as_path())
    }

    pub fn next(&self) -> Option<&Photo> {
        match &self.state {
            TransitionState::Idle => None,
            TransitionState::Transitioning { next, .. } => Some(next),
        }
    }

    /// Pick a photo not yet shown in this cycle. Rescans first if due,
    /// and a rescan that runs starts a fresh cycle.
    pub fn pick_random_photo(&mut self, now: Instant) -> Option<PathBuf> {
        if self.catalogue.scan_if_due(now) {
            self.pool.reset();
        }
        self.pool.pick(self.catalogue.photos(), &mut self.rng)
    }

    /// Pick and decode, skipping undecodable files up to `MAX_LOAD_ATTEMPTS`
    fn load_next(&mut self, now: Instant) -> Option<Photo> {
        for attempt in 1..=MAX_LOAD_ATTEMPTS {
            // An empty catalogue will not get better within this tick
            let path = self.pick_random_photo(now)?;
            log::debug!(
                "Pick {}/{}: {} ({} left in cycle)",
                attempt,
                MAX_LOAD_ATTEMPTS,
                path.display(),
                self.pool.len()
            );

            match load_and_scale(&path, self.surface) {
                Ok(image) => return Some(Photo { path, image }),
                Err(e) => log::warn!("⚠️  Skipping photo: {}", e),
            }
        }

        log::warn!("⚠️  No decodable photo after {} attempts", MAX_LOAD_ATTEMPTS);
        None
    }

    fn is_due(&self, now: Instant) -> bool {
        match self.last_transition_end {
            None => true,
            Some(end) => now.saturating_duration_since(end) >= self.transition_time,
        }
    }

    /// Advance one render tick. Returns true when the composited frame changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if let TransitionState::Transitioning { alpha, .. } = &mut self.state {
            *alpha = alpha.saturating_sub(FADE_STEP);
            if *alpha == 0 {
                self.finish_transition(now);
            }
            return true;
        }

        if !self.is_due(now) {
            return false;
        }

        match self.load_next(now) {
            Some(next) => {
                log::info!("🔄 Fading to {}", next.path.display());
                self.state = TransitionState::Transitioning {
                    next,
                    alpha: u8::MAX,
                };
                true
            }
            None => false,
        }
    }

    /// Promote next to current; the previous current is dropped here
    fn finish_transition(&mut self, now: Instant) {
        let finished = std::mem::replace(&mut self.state, TransitionState::Idle);
        if let TransitionState::Transitioning { next, .. } = finished {
            self.current = Some(next);
        }
        self.last_transition_end = Some(now);
    }

    /// Images to composite this tick, bottom first.
    ///
    /// The current photo is always drawn opaque; the incoming photo is laid
    /// over it with opacity `255 - alpha`. The current photo never dims.
    pub fn layers(&self) -> Vec<Layer<'_>> {
        let mut layers = Vec::with_capacity(2);

        if let Some(current) = &self.current {
            layers.push(self.layer(&current.image, u8::MAX));
        }
        if let TransitionState::Transitioning { next, alpha } = &self.state {
            layers.push(self.layer(&next.image, u8::MAX - alpha));
        }

        layers
    }

    fn layer<'a>(&self, image: &'a RgbaImage, opacity: u8) -> Layer<'a> {
        let (x, y) = self.surface.centre(image.width(), image.height());
        Layer { image, x, y, opacity }
    }

    /// Composite all layers onto `target`
    pub fn draw(&self, target: &mut RgbaImage) {
        for layer in self.layers() {
            blend_onto(target, &layer);
        }
    }

    /// A black surface-sized frame with the photos composited on it
    pub fn render_frame(&self) -> RgbaImage {
        let mut frame = RgbaImage::from_pixel(
            self.surface.width,
            self.surface.height,
            Rgba([0, 0, 0, 255]),
        );
        self.draw(&mut frame);
        frame
    }
}

/// Source-over blend of `layer` onto `target`, clipped to the target.
/// Channel math is integer and truncates toward zero.
fn blend_onto(target: &mut RgbaImage, layer: &Layer<'_>) {
    let opacity = u32::from(layer.opacity);
    if opacity == 0 {
        return;
    }

    let (width, height) = (i64::from(target.width()), i64::from(target.height()));
    for (x, y, src) in layer.image.enumerate_pixels() {
        let tx = layer.x + i64::from(x);
        let ty = layer.y + i64::from(y);
        if tx < 0 || ty < 0 || tx >= width || ty >= height {
            continue;
        }

        let a = u32::from(src[3]) * opacity / 255;
        let dst = target.get_pixel_mut(tx as u32, ty as u32);
        for c in 0..3 {
            dst[c] = ((u32::from(src[c]) * a + u32::from(dst[c]) * (255 - a)) / 255) as u8;
        }
        dst[3] = (a + u32::from(dst[3]) * (255 - a) / 255) as u8;
    }
}

impl std::fmt::Debug for PhotoRotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoRotator")
            .field("surface", &self.surface)
            .field("catalogue", &self.catalogue)
            .field("current", &self.current_path())
            .field("next", &self.next().map(|photo| &photo.path))
            .field("transitioning", &self.is_transitioning())
            .field("alpha", &self.alpha())
            .finish()
    }
}
