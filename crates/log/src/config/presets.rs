//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

/// Filter directive variable, checked before `RUST_LOG`.
pub const LEVEL_VAR: &str = "MOJI_LOG";
/// Fallback filter directive variable.
pub const RUST_LOG_VAR: &str = "RUST_LOG";
/// Output format variable (`pretty`, `compact` or `json`).
pub const FORMAT_VAR: &str = "MOJI_LOG_FORMAT";

impl Config {
    /// Overlays `MOJI_LOG` (or `RUST_LOG`) and `MOJI_LOG_FORMAT` onto `self`.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Overlays variables resolved through `var` onto `self`.
    ///
    /// An unrecognized format name leaves the format unchanged.
    #[must_use]
    pub fn with_vars<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = var(LEVEL_VAR).or_else(|| var(RUST_LOG_VAR)) {
            self.level = level;
        }

        if let Some(format) = var(FORMAT_VAR).as_deref().and_then(Format::parse) {
            self.format = format;
        }

        self
    }

    /// Picks a configuration the way [`crate::auto_init`] does.
    #[must_use]
    pub fn auto() -> Self {
        Self::auto_with(|key| std::env::var(key).ok())
    }

    /// [`Config::auto`] with variables resolved through `var`.
    ///
    /// A level in `MOJI_LOG` or `RUST_LOG` selects the default config with
    /// the variables overlaid; otherwise the build profile picks
    /// [`Config::development`] or [`Config::production`].
    #[must_use]
    pub fn auto_with<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if var(LEVEL_VAR).is_some() || var(RUST_LOG_VAR).is_some() {
            Self::default().with_vars(var)
        } else if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
        }
    }

    /// Command-line configuration: warnings only, one terse line each.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            level: "warn".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                time: false,
                target: false,
                ..DisplayConfig::default()
            },
        }
    }
}
