//! # bilge-pump CLI
//!
//! The command-line interface for bilge-pump, a junk cleaner for Linux.
//!
//! ## Commands
//!
//! - **pump** (default): standard roots, then logs, then package leftovers
//! - **swab**: caches, temp files, trash and thumbnails only
//! - **logbook**: rotated logs only (all but `lastlog` with `--aggressive`)
//! - **flotsam**: leftover package folders only
//!
//! ## Environment Variables
//!
//! - `BILGE_DRY_RUN`: Simulate without deleting
//! - `BILGE_LIST`: List junk without deleting
//! - `BILGE_TARGET`: Clean a single path
//! - `BILGE_VERBOSE`: Enable verbose output
//! - `BILGE_QUIET`: Silence all output except errors

use std::io::IsTerminal;

use bilge_pump::cli::Cli;
use bilge_pump::elevate;
use clap::Parser;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse();

    if cli.global_opts().aggressive() && !elevate::is_privileged() {
        eprintln!(
            "WARNING: Root privileges are required for aggressive cleaning. \
             You will be prompted for your password. Proceed with caution!"
        );
        eprintln!("Re-running with sudo for aggressive cleaning...");
        let home = home::home_dir();
        elevate::reinvoke_elevated(cli.elevated_args(home.as_deref()))?;
    }

    bilge_pump::commands::execute(&cli).map_err(Into::into)
}
