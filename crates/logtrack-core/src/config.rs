//! Configuration types for logtrack.
//!
//! [`Config::load`] layers an optional user file (default
//! `~/.config/logtrack/config.toml`) over built-in defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[transform]
separator    = "|"
time_format  = "%d/%b/%Y:%H:%M:%S %z"
event        = "PageView"
skip_markers = ["favicon.ico"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/logtrack/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transform: TransformConfig,
}

/// `[transform]` section of `config.toml` — the transformer's read-only knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformConfig {
    /// Literal field separator. Split as a plain string, never as a pattern.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// chrono format string for `$time_local` (brackets already stripped).
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Name given to every emitted event.
    #[serde(default = "default_event")]
    pub event: String,
    /// Substrings of the decoded request line that mark a line as noise to
    /// skip — no event, no error.
    #[serde(default = "default_skip_markers")]
    pub skip_markers: Vec<String>,
}

fn default_separator() -> String { "|".to_string() }
fn default_time_format() -> String { "%d/%b/%Y:%H:%M:%S %z".to_string() }
fn default_event() -> String { "PageView".to_string() }
fn default_skip_markers() -> Vec<String> { vec!["favicon.ico".to_string()] }

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            time_format: default_time_format(),
            event: default_event(),
            skip_markers: default_skip_markers(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load configuration, layering `path` (or the default location) on top
    /// of the built-in defaults. A missing file is fine; defaults apply.
    pub fn load(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let path = path.unwrap_or_else(config_path);

        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("logtrack")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
