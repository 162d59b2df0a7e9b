// Chunk: docs/chunks/launcher_config - Configuration file
//!
//! Launcher configuration.
//!
//! The configuration fixes the page size, the query display width, the query
//! capacity, the shell used to run commands and the colors. It is loaded once
//! before the launcher starts and never changes afterwards.
//!
//! ## File Location
//!
//! - `$ARUN_CONFIG`, if set
//! - otherwise `<config_dir>/arun/config.json` (e.g. `~/.config/arun/config.json`)
//!
//! A missing file means defaults. Every field is optional; unknown fields are
//! rejected so typos surface instead of being silently ignored.
//!
//! ```json
//! {
//!   "page_size": 10,
//!   "display_width": 25,
//!   "capacity": 256,
//!   "shell": "/bin/sh",
//!   "colors": { "selected_background": "#ff0000" }
//! }
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application name used for the config directory.
const APP_NAME: &str = "arun";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "ARUN_CONFIG";

// =============================================================================
// Configuration Types
// =============================================================================

/// The launcher's fixed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Number of candidate rows shown at once (K)
    pub page_size: usize,
    /// Number of query characters shown at once (D)
    pub display_width: usize,
    /// Maximum query length in characters (C)
    pub capacity: usize,
    /// Shell that runs the committed command as `<shell> -c <command>`
    pub shell: PathBuf,
    pub colors: ColorConfig,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            display_width: 25,
            capacity: 256,
            shell: PathBuf::from("/bin/sh"),
            colors: ColorConfig::default(),
        }
    }
}

/// Colors as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub foreground: String,
    pub background: String,
    pub selected_foreground: String,
    pub selected_background: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            foreground: "#ffffff".to_owned(),
            background: "#000000".to_owned(),
            selected_foreground: "#ffffff".to_owned(),
            selected_background: "#ff0000".to_owned(),
        }
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn parse(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

/// Parsed colors, ready for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb,
    pub background: Rgb,
    pub selected_foreground: Rgb,
    pub selected_background: Rgb,
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Loading
// =============================================================================

/// Returns the path the configuration is read from.
///
/// Returns `None` if `$ARUN_CONFIG` is unset and the platform config directory
/// cannot be determined.
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILENAME))
}

impl LauncherConfig {
    /// Loads the configuration from its default location.
    pub fn load() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the configuration from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Checks that the sizes are non-zero and the colors parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("page_size", self.page_size),
            ("display_width", self.display_width),
            ("capacity", self.capacity),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be greater than zero")));
            }
        }
        if self.shell.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("shell must not be empty".to_owned()));
        }
        self.palette().map(|_| ())
    }

    /// Parses the configured colors.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let parse = |name: &str, value: &str| {
            Rgb::parse(value).ok_or_else(|| {
                ConfigError::Invalid(format!("colors.{name}: expected #rrggbb, got {value:?}"))
            })
        };
        let colors = &self.colors;
        Ok(Palette {
            foreground: parse("foreground", &colors.foreground)?,
            background: parse("background", &colors.background)?,
            selected_foreground: parse("selected_foreground", &colors.selected_foreground)?,
            selected_background: parse("selected_background", &colors.selected_background)?,
        })
    }
}
