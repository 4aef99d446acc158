use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::ConfigError;

/// Always-on clock that reads the date and time aloud in hiragana.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory of photos for the background slideshow
    #[arg(long)]
    pub photos_dir: Option<PathBuf>,

    /// Seconds each photo stays on screen
    #[arg(long, value_name = "SECS")]
    pub transition_time: Option<u64>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in fullscreen mode
    #[arg(long)]
    pub fullscreen: bool,

    /// Show the clock on plain black, without photos
    #[arg(long)]
    pub no_slideshow: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Load the config file, apply command-line overrides, and validate
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.config.clone().or_else(Config::default_path) {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.photos_dir {
            config.slideshow.photos_dir = dir.clone();
        }
        if let Some(secs) = self.transition_time {
            config.slideshow.transition_time_secs = secs;
        }
        if let Some(width) = self.width {
            config.display.width = width;
        }
        if let Some(height) = self.height {
            config.display.height = height;
        }
        if self.fullscreen {
            config.display.fullscreen = true;
        }
        if self.no_slideshow {
            config.slideshow.enabled = false;
        }
    }
}
