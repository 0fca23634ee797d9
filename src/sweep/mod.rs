//! The classification-and-safe-deletion engine.
//!
//! This module finds junk in a fixed set of roots, measures it, and removes
//! it behind a safety guard:
//! - Standard roots (`~/.cache`, `/var/cache`, `/tmp`, trash, thumbnails):
//!   every immediate child, with extensionless files tallied separately
//! - The log root (`/var/log`): rotated and archived logs only, or every log
//!   except `lastlog` in aggressive mode
//! - The package-leftover root (`~/snap`): empty per-package folders, or all
//!   of them in aggressive mode
//!
//! # Safety
//!
//! Nothing is deleted unless [`SafetyGuard::approve`] accepts the path. The
//! guard protects `/` and the home directory themselves, and the whole of
//! `/bin`, `/sbin`, `/usr`, `/etc`, `/lib*`, `/boot`, `/proc`, `/sys` and
//! `/dev`.
//!
//! # Example
//!
//! ```no_run
//! use bilge_pump::sweep::{Sweep, SweepOptions};
//!
//! let sweep = Sweep::builder()
//!     .options(SweepOptions::builder().list_only(true).build())
//!     .build()?;
//!
//! for report in sweep.pump() {
//!     println!("{:?}: {} bytes", report.operation(), report.total().bytes);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod classify;
pub mod config;
mod guard;
mod measure;
mod remove;
mod report;
mod roots;
mod size;

pub use classify::{
    Candidate, Category, PROTECTED_LOG, classify_leftovers, classify_logs, classify_standard,
    is_rotated_log,
};
pub use config::{
    Operation, RunMode, Sweep, SweepBuilder, SweepOptions, SweepOptionsBuilder, TargetOutcome,
};
pub use guard::{Protection, ProtectedPath, SafetyGuard};
pub(crate) use guard::normalize_path;
pub use measure::{Measurement, measure};
pub use remove::{RemoveOutcome, remove};
pub use report::{CleanReport, Tally, listing_line};
pub use roots::{JunkRoot, JunkRoots, JunkRootsBuilder, RootKind};
