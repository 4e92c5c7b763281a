//! Code-level configuration for the demos.
//!
//! The demos have no configuration file. Each binary starts from [`WindowConfig::default`] and
//! overrides the title, and the log level can be raised with the `SPINNINGCUBE_LOG` environment
//! variable.

use glam::Vec4;
use log::LevelFilter;

/// Environment variable read by [`log_level_from_env`].
pub const LOG_ENV: &str = "SPINNINGCUBE_LOG";

/// Window and context options consumed by [`crate::abs::App::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// When set, `width` and `height` are ignored and the desktop resolution is used.
    pub fullscreen: bool,
    pub vsync: bool,
    pub clear_color: Vec4,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "spinningcube".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
            clear_color: Vec4::new(0.2, 0.2, 0.4, 1.0),
        }
    }
}

impl WindowConfig {
    /// Returns the default configuration with the given window title.
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

/// Parses a log level name, falling back to `info` for anything unrecognised.
pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Reads the log level from [`LOG_ENV`].
pub fn log_level_from_env() -> LevelFilter {
    parse_log_level(std::env::var(LOG_ENV).ok().as_deref())
}
