//! # moji-log
//!
//! Logging bootstrap shared by the moji binaries. Libraries in the
//! workspace only emit events through the `tracing` facade; a binary calls
//! one of the init functions here once, early in `main`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moji_log::prelude::*;
//!
//! fn main() -> Result<(), LogError> {
//!     // Honors MOJI_LOG / RUST_LOG, otherwise picks a preset by build profile
//!     let _guard = moji_log::auto_init()?;
//!
//!     info!(policy = "name", "validating");
//!     Ok(())
//! }
//! ```
//!
//! All output goes to stderr so that stdout stays free for program output.

mod builder;
mod config;
mod error;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Format, LogError, LogResult, LoggerGuard, auto_init, debug, error, info,
        init_with, trace, warn,
    };
}

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

// ============================================================================
// Initialization Functions
// ============================================================================

/// Auto-detect and initialize the best logging configuration.
///
/// An explicit filter in `MOJI_LOG` or `RUST_LOG` wins; otherwise debug
/// builds get [`Config::development`] and release builds
/// [`Config::production`].
///
/// # Errors
///
/// See [`init_with`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    init_with(Config::auto())
}

/// Initialize with a custom configuration.
///
/// # Errors
///
/// Returns [`LogError::Filter`] when `config.level` is not a valid filter
/// directive and [`LogError::AlreadyInitialized`] when a global subscriber
/// is already installed.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
