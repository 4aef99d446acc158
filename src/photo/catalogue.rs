use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

use crate::error::PhotoError;

/// Image extensions the slideshow will try to show (compared lowercase)
pub const PHOTO_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// The full set of photo paths found under the photo directory.
///
/// The list is rebuilt wholesale on each scan and never patched in place.
/// Scans are rate-limited so a 30 Hz render loop does not hammer the disk.
pub struct PhotoCatalogue {
    root: PathBuf,
    photos: Vec<PathBuf>,
    last_scan: Option<Instant>,
    last_scan_failed: bool,
    rescan_interval: Duration,
}

impl PhotoCatalogue {
    /// Create an empty catalogue for `root`. Nothing is read until the first scan.
    pub fn new(root: impl Into<PathBuf>, rescan_interval: Duration) -> Self {
        PhotoCatalogue {
            root: root.into(),
            photos: Vec::new(),
            last_scan: None,
            last_scan_failed: false,
            rescan_interval,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn photos(&self) -> &[PathBuf] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// A rescan is due when nothing is known yet or the interval has passed.
    /// An empty result rescans at once, unless the last scan failed.
    pub fn is_scan_due(&self, now: Instant) -> bool {
        match self.last_scan {
            None => true,
            Some(_) if self.photos.is_empty() && !self.last_scan_failed => true,
            Some(last) => now.saturating_duration_since(last) >= self.rescan_interval,
        }
    }

    /// Rescan the directory if due. Returns true when a scan actually ran.
    ///
    /// Failures never propagate: a missing directory is created, unreadable
    /// entries are skipped, and a failure at the root leaves the catalogue
    /// empty until the next scan window.
    pub fn scan_if_due(&mut self, now: Instant) -> bool {
        if !self.is_scan_due(now) {
            return false;
        }

        self.last_scan = Some(now);
        match self.scan() {
            Ok(photos) => {
                if photos.len() != self.photos.len() {
                    log::info!("📁 Photo catalogue: {} photos in {}", photos.len(), self.root.display());
                }
                self.photos = photos;
                self.last_scan_failed = false;
            }
            Err(e) => {
                log::warn!("⚠️  {}, retrying in {}s", e, self.rescan_interval.as_secs());
                self.photos.clear();
                self.last_scan_failed = true;
            }
        }
        true
    }

    /// Walk the root and collect every supported image, sorted and de-duplicated
    fn scan(&self) -> Result<Vec<PathBuf>, PhotoError> {
        if !self.root.exists() {
            log::warn!(
                "⚠️  Photo directory {} does not exist, creating it",
                self.root.display()
            );
            fs::create_dir_all(&self.root).map_err(|source| PhotoError::CreateDir {
                root: self.root.clone(),
                source,
            })?;
            return Ok(Vec::new());
        }

        // Resolve once so every catalogued path is absolute
        let root = fs::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());

        let mut found = BTreeSet::new();
        for entry in WalkDir::new(&root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                // The root itself is unreadable: nothing below it can be listed
                Err(source) if source.depth() == 0 => {
                    return Err(PhotoError::Scan {
                        root: self.root.clone(),
                        source,
                    });
                }
                Err(e) => {
                    log::warn!("⚠️  Skipping entry under {}: {}", self.root.display(), e);
                    continue;
                }
            };
            let path = entry.path();

            if entry.file_type().is_file() && is_photo(path) {
                found.insert(path.to_path_buf());
            }
        }

        Ok(found.into_iter().collect())
    }
}

/// Check a path's extension against `PHOTO_EXTENSIONS`, ignoring case
pub fn is_photo(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| PHOTO_EXTENSIONS.contains(&ext.as_str()))
}

impl std::fmt::Debug for PhotoCatalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoCatalogue")
            .field("root", &self.root)
            .field("photos", &self.photos.len())
            .field("last_scan", &self.last_scan)
            .field("last_scan_failed", &self.last_scan_failed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const INTERVAL: Duration = Duration::from_secs(300);

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"not really an image").unwrap();
    }

    #[test]
    fn test_is_photo_ignores_case() {
        assert!(is_photo(Path::new("/a/b.JPG")));
        assert!(is_photo(Path::new("/a/b.jpeg")));
        assert!(is_photo(Path::new("/a/b.Png")));
        assert!(is_photo(Path::new("b.gif")));
        assert!(is_photo(Path::new("b.bmp")));
        assert!(!is_photo(Path::new("b.txt")));
        assert!(!is_photo(Path::new("jpg")));
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.png");
        touch(dir.path(), "a.JPG");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "c.bmp");

        let mut catalogue = PhotoCatalogue::new(dir.path(), INTERVAL);
        assert!(catalogue.scan_if_due(Instant::now()));

        let names: Vec<String> = catalogue
            .photos()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.bmp"]);
        assert!(catalogue.photos().iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_missing_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("photos");

        let mut catalogue = PhotoCatalogue::new(&root, INTERVAL);
        assert!(catalogue.scan_if_due(Instant::now()));
        assert!(catalogue.is_empty());
        assert!(root.is_dir());
    }

    #[test]
    fn test_rescan_is_rate_limited() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.jpg");

        let start = Instant::now();
        let mut catalogue = PhotoCatalogue::new(dir.path(), INTERVAL);
        assert!(catalogue.scan_if_due(start));
        assert_eq!(catalogue.len(), 1);

        touch(dir.path(), "b.jpg");
        assert!(!catalogue.scan_if_due(start + Duration::from_secs(10)));
        assert_eq!(catalogue.len(), 1);

        assert!(catalogue.scan_if_due(start + INTERVAL));
        assert_eq!(catalogue.len(), 2);
    }

    #[test]
    fn test_empty_catalogue_always_rescans() {
        let dir = TempDir::new().unwrap();
        let start = Instant::now();
        let mut catalogue = PhotoCatalogue::new(dir.path(), INTERVAL);
        assert!(catalogue.scan_if_due(start));
        assert!(catalogue.is_empty());

        touch(dir.path(), "late.gif");
        assert!(catalogue.scan_if_due(start + Duration::from_secs(1)));
        assert_eq!(catalogue.len(), 1);
    }

    #[test]
    fn test_failed_scan_waits_for_next_window() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "blocker");
        // A directory cannot be created below a regular file
        let root = dir.path().join("blocker").join("photos");

        let start = Instant::now();
        let mut catalogue = PhotoCatalogue::new(&root, INTERVAL);
        assert!(catalogue.scan_if_due(start));
        assert!(catalogue.is_empty());

        assert!(!catalogue.scan_if_due(start + Duration::from_millis(33)));
        assert!(!catalogue.scan_if_due(start + Duration::from_secs(299)));
        assert!(catalogue.scan_if_due(start + INTERVAL));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_keeps_other_photos() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "good.jpg");
        fs::create_dir(dir.path().join("sub")).unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub").join("loop")).unwrap();

        let start = Instant::now();
        let mut catalogue = PhotoCatalogue::new(dir.path(), INTERVAL);
        assert!(catalogue.scan_if_due(start));

        let names: Vec<String> = catalogue
            .photos()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["good.jpg"]);
        assert!(!catalogue.scan_if_due(start + Duration::from_millis(33)));
    }
}
