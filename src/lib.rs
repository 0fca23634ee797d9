//! # bilge-pump
//!
//! A junk cleaner for Linux desktops and servers. It pumps out the places
//! where disposable files pile up: user and system caches, temp files, the
//! trash, thumbnails, rotated logs and leftover package folders.
//!
//! ## Key Features
//!
//! - **Safety first**: every deletion goes through a deny-list guard that
//!   protects `/`, the home directory and the system trees
//! - **List and dry-run modes**: see exactly what would go, with sizes,
//!   before anything is removed
//! - **Best-effort removal**: permission errors and files that vanish
//!   mid-run are counted, never fatal
//! - **Single-target cleaning**: point `--target` at any file or directory
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Turns parsed flags into a [`sweep::Sweep`] and runs it
//! - [`sweep`]: Classification, measurement, guarded removal and reporting
//! - [`elevate`]: Root checks and re-execution under sudo
//! - [`error`]: Error types and handling with thiserror + miette
//! - [`logging`]: Console output helpers
//!
//! ## Usage
//!
//! ```bash
//! # See what is taking up space
//! bilge-pump --list
//!
//! # Clean, showing each removed item
//! bilge-pump -v
//!
//! # Also remove active logs and every leftover package folder
//! bilge-pump --aggressive
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use bilge_pump::sweep::{JunkRoots, Sweep, SweepOptions};
//!
//! let sweep = Sweep::builder()
//!     .roots(JunkRoots::builder().standard("/srv/scratch").build())
//!     .options(SweepOptions::builder().dry_run(true).build())
//!     .build()?;
//!
//! let report = sweep.clean_standard();
//! println!("{} bytes would be freed", report.total().bytes);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod commands;
pub mod elevate;
pub mod error;
pub mod logging;
pub mod sweep;
