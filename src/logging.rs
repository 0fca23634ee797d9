//! Console output shared by the engine and the commands.

use std::fmt::Display;

/// Console output for a single run.
///
/// Diagnostics go to stderr, listing lines and totals go to stdout so they
/// can be piped.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    verbose: u8,
    quiet: bool,
}

impl Logger {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn info(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    pub fn verbose(&self, level: u8, message: impl Display) {
        if !self.quiet && self.verbose >= level {
            eprintln!("{message}");
        }
    }

    pub fn report(&self, message: impl Display) {
        if !self.quiet {
            println!("{message}");
        }
    }
}
