/// Clock configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/hiragana-clock/config.json
/// - macOS: ~/Library/Application Support/hiragana-clock/config.json
/// - Windows: %APPDATA%\hiragana-clock\config.json
///
/// Every field has a default, so a missing file or a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub slideshow: SlideshowConfig,
    pub render: RenderConfig,
    pub text: TextConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window (and photo surface) width in pixels
    pub width: u32,
    /// Window (and photo surface) height in pixels
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SlideshowConfig {
    pub enabled: bool,
    /// Directory of already-downloaded photos (read-only)
    pub photos_dir: PathBuf,
    /// Seconds a photo stays on screen before the next fade starts
    pub transition_time_secs: u64,
    /// Minimum seconds between directory rescans
    pub rescan_interval_secs: u64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            photos_dir: default_photos_dir(),
            transition_time_secs: 60,
            rescan_interval_secs: 300,
        }
    }
}

impl SlideshowConfig {
    pub fn transition_time(&self) -> Duration {
        Duration::from_secs(self.transition_time_secs)
    }

    pub fn rescan_interval(&self) -> Duration {
        Duration::from_secs(self.rescan_interval_secs)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Render ticks per second. The fade advances one step per tick.
    pub tick_rate_hz: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { tick_rate_hz: 30 }
    }
}

impl RenderConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz.max(1)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    /// Draw a dark border around each glyph so text stays readable on photos
    pub outline: bool,
    /// Wrap long phrases over several lines instead of shrinking the font
    pub wrap: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            outline: true,
            wrap: false,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hiragana-clock").join("config.json"))
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("⚙️  Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject values the render loop cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "display size {}x{} must be non-zero",
                self.display.width, self.display.height
            )));
        }
        if self.render.tick_rate_hz == 0 {
            return Err(ConfigError::Invalid("tick_rate_hz must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn default_photos_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hiragana-clock")
}
