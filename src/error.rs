//! Error types for bilge-pump.
//!
//! This module defines the error types used at the edges of bilge-pump, using
//! a combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - Per-entry failures while measuring or removing junk are never errors:
//!   they are recovered locally and surface as
//!   [`Measurement`](crate::sweep::Measurement) and
//!   [`RemoveOutcome`](crate::sweep::RemoveOutcome) values
//! - [`BilgeError`] covers the few conditions that stop a run: no home
//!   directory, a broken CLI configuration, or a failed privilege escalation
//! - Errors are automatically converted to `miette::Result` for CLI output
//!
//! # Example
//!
//! ```no_run
//! use bilge_pump::error::{BilgeError, Result};
//!
//! fn home() -> Result<std::path::PathBuf> {
//!     home::home_dir().ok_or(BilgeError::HomeNotFound)
//! }
//! ```

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in bilge-pump operations
#[derive(Error, Debug, Diagnostic)]
pub enum BilgeError {
    /// The invoking user's home directory could not be determined.
    ///
    /// The default junk roots (`~/.cache`, `~/.local/share/Trash`, `~/snap`)
    /// and the home entry of the safety deny-list are derived from it, so no
    /// cleaning can happen without one.
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(bilge_pump::config::home_not_found),
        help("Set the HOME environment variable and try again.")
    )]
    HomeNotFound,

    /// Invalid configuration passed to a builder.
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(bilge_pump::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError(
        /// Description of the configuration error
        String,
    ),

    /// Re-running under the elevation helper failed.
    ///
    /// Aggressive cleaning needs root. When the process is not privileged
    /// it replaces itself with `sudo <self> <args>`; this variant is only
    /// ever returned when that replacement could not happen. It is the one
    /// condition that exits non-zero.
    #[error("Failed to elevate privileges with '{program}'")]
    #[diagnostic(
        code(bilge_pump::elevate::failed),
        help("Run bilge-pump as root, or make sure sudo is installed and on PATH.")
    )]
    ElevationFailed {
        /// The elevation helper that was invoked
        program: String,
        /// The underlying exec error
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, BilgeError>;
