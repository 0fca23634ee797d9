//! Implementation of bilge-pump subcommands.
//!
//! The main entry point is [`execute`], which resolves the home directory,
//! turns the parsed flags into [`SweepOptions`] and dispatches to the
//! matching [`Sweep`] operation. A `--target` flag overrides the subcommand.
//!
//! # Example
//!
//! ```no_run
//! use bilge_pump::cli::{Cli, Commands};
//! use bilge_pump::commands;
//!
//! let cli = Cli::builder()
//!     .list(true)
//!     .command(Commands::Swab)
//!     .build()?;
//!
//! commands::execute(&cli)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::Path;

use crate::cli::{Cli, Commands, resolve_target};
use crate::elevate::{running_under_sudo, sudo_user_home};
use crate::error::{BilgeError, Result};
use crate::logging::Logger;
use crate::sweep::{CleanReport, JunkRoots, SafetyGuard, Sweep, SweepOptions};


/// Execute commands based on the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<()> {
    let home = home::home_dir().ok_or(BilgeError::HomeNotFound)?;
    let roots = JunkRoots::for_home(&home);
    execute_in(cli, &home, roots).map(drop)
}

/// Execute commands against an explicit home directory and root set.
///
/// Returns the reports of the operations that ran; a single-target clean
/// returns none.
pub fn execute_in(cli: &Cli, home: &Path, roots: JunkRoots) -> Result<Vec<CleanReport>> {
    let opts = cli.global_opts();
    let quiet = opts.quiet();
    let verbose = if quiet { 0 } else { opts.verbose() };
    let log = Logger::new(verbose, quiet);

    let target = opts.target().map(|raw| resolve_target(raw, home));
    let options = SweepOptions::builder()
        .dry_run(opts.dry_run())
        .aggressive(opts.aggressive())
        .list_only(opts.list())
        .verbose(verbose)
        .quiet(quiet)
        .target(target)
        .build();

    if running_under_sudo() {
        log.info(format!(
            "NOTICE: Running as root (sudo). Cleaning root's home directory ({}). \
             To clean your own home, run without sudo.",
            home.display()
        ));
    }

    let sweep = Sweep::builder()
        .roots(roots)
        .guard(guard_for(home, sudo_user_home().as_deref()))
        .options(options)
        .build()?;
    let list_only = sweep.options().list_only();

    log.report(if list_only { "Listing junk:" } else { "Cleaning..." });

    if let Some(target) = sweep.options().target() {
        log.verbose(1, format!("Single target: {}", target.display()));
        sweep.clean_target(target);
        return Ok(Vec::new());
    }

    let reports = match cli.command() {
        Commands::Pump => sweep.pump(),
        Commands::Swab => vec![sweep.clean_standard()],
        Commands::Logbook => vec![sweep.clean_logs()],
        Commands::Flotsam => vec![sweep.clean_leftovers()],
    };

    log.report(if list_only {
        "Listing finished."
    } else {
        "Bilge pumped."
    });

    Ok(reports)
}

/// The default guard, plus the invoking user's home when running under sudo.
pub(crate) fn guard_for(home: &Path, invoking_home: Option<&Path>) -> SafetyGuard {
    let guard = SafetyGuard::for_home(home);
    match invoking_home {
        Some(invoking_home) => guard.protect_lineage(invoking_home),
        None => guard,
    }
}
