//! Command-line interface definitions for bilge-pump.
//!
//! This module defines the CLI structure using clap. Every flag is global so
//! it can appear before or after the optional subcommand. Running without a
//! subcommand is the same as `bilge-pump pump`.
//!
//! # Example
//!
//! ```no_run
//! use bilge_pump::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//!
//! match cli.command() {
//!     Commands::Pump => println!("Full clean"),
//!     Commands::Logbook => println!("Logs only"),
//!     _ => {}
//! }
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{BilgeError, Result};
use crate::sweep::normalize_path;

/// Main command-line interface for bilge-pump.
#[derive(Debug, Parser)]
#[command(
    name = "bilge-pump",
    bin_name = "bilge-pump",
    author,
    version,
    about = "Pump the junk out of a Linux machine: caches, temp files, trash, rotated logs and package leftovers",
    long_about = None,
    propagate_version = true,
    after_help = "Examples:\n  bilge-pump -l                  List junk only\n  bilge-pump -a -v               Aggressive clean, verbose\n  bilge-pump -t ~/Downloads -l   List junk in Downloads"
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags that apply to every bilge-pump command.
#[derive(Debug, Parser)]
pub struct GlobalOpts {
    /// Show what would be deleted without deleting anything
    #[arg(short = 'n', long, global = true, env = "BILGE_DRY_RUN")]
    dry_run: bool,

    /// Also remove active logs and non-empty package leftovers (runs
    /// through sudo when not root)
    #[arg(short, long, global = true)]
    aggressive: bool,

    /// Clean a single file or directory instead of the junk roots
    #[arg(short, long, global = true, env = "BILGE_TARGET")]
    target: Option<PathBuf>,

    /// Show each file and folder as it is removed (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "BILGE_VERBOSE")]
    verbose: u8,

    /// List what is taking up space without deleting anything
    #[arg(short, long, global = true, env = "BILGE_LIST")]
    list: bool,

    /// Silence everything except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "BILGE_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Create a new builder for constructing `GlobalOpts` programmatically.
    pub fn builder() -> GlobalOptsBuilder {
        GlobalOptsBuilder::default()
    }

    /// Check if dry run mode is enabled
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Check if aggressive mode is enabled
    pub fn aggressive(&self) -> bool {
        self.aggressive
    }

    /// Get the raw `--target` value
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if list-only mode is enabled
    pub fn list(&self) -> bool {
        self.list
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Builder for constructing `GlobalOpts` without going through argument
/// parsing.
#[derive(Debug, Default)]
pub struct GlobalOptsBuilder {
    dry_run: bool,
    aggressive: bool,
    target: Option<PathBuf>,
    verbose: u8,
    list: bool,
    quiet: bool,
}

impl GlobalOptsBuilder {
    /// Enable dry run mode.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Enable aggressive mode.
    pub fn aggressive(mut self, enabled: bool) -> Self {
        self.aggressive = enabled;
        self
    }

    /// Set the single-target path.
    pub fn target(mut self, target: Option<impl Into<PathBuf>>) -> Self {
        self.target = target.map(Into::into);
        self
    }

    /// Set the verbosity level (0 = normal, 1+ = verbose).
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable list-only mode.
    pub fn list(mut self, enabled: bool) -> Self {
        self.list = enabled;
        self
    }

    /// Enable or disable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the `GlobalOpts` instance with the configured values.
    pub fn build(self) -> GlobalOpts {
        GlobalOpts {
            dry_run: self.dry_run,
            aggressive: self.aggressive,
            target: self.target,
            verbose: self.verbose,
            list: self.list,
            quiet: self.quiet,
        }
    }
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command, defaulting to [`Commands::Pump`]
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Pump)
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// Arguments that reproduce this invocation without any `BILGE_*`
    /// variables, for re-running under sudo.
    ///
    /// With `home`, the target is resolved first so `~` keeps meaning the
    /// invoking user's home.
    pub fn elevated_args(&self, home: Option<&Path>) -> Vec<OsString> {
        let opts = &self.global_opts;
        let mut args: Vec<OsString> = Vec::new();

        if opts.dry_run {
            args.push("--dry-run".into());
        }
        if opts.aggressive {
            args.push("--aggressive".into());
        }
        if opts.list {
            args.push("--list".into());
        }
        if opts.quiet {
            args.push("--quiet".into());
        }
        for _ in 0..opts.verbose {
            args.push("--verbose".into());
        }
        if let Some(target) = opts.target() {
            let target = match home {
                Some(home) => resolve_target(target, home),
                None => target.to_path_buf(),
            };
            args.push("--target".into());
            args.push(target.into_os_string());
        }
        args.push(self.command().name().into());

        args
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    opts: GlobalOptsBuilder,
    command: Option<Commands>,
}

impl CliBuilder {
    /// Enable dry run mode
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.opts = self.opts.dry_run(enabled);
        self
    }

    /// Enable aggressive mode
    pub fn aggressive(mut self, enabled: bool) -> Self {
        self.opts = self.opts.aggressive(enabled);
        self
    }

    /// Set the single-target path
    pub fn target(mut self, target: impl Into<PathBuf>) -> Self {
        self.opts = self.opts.target(Some(target));
        self
    }

    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.opts = self.opts.verbose(level);
        self
    }

    /// Enable list-only mode
    pub fn list(mut self, enabled: bool) -> Self {
        self.opts = self.opts.list(enabled);
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.opts = self.opts.quiet(enabled);
        self
    }

    /// Set the command
    pub fn command(mut self, command: Commands) -> Self {
        self.command = Some(command);
        self
    }

    /// Build the Cli instance
    ///
    /// Rejects the same quiet/verbose combination clap rejects.
    pub fn build(self) -> Result<Cli> {
        let global_opts = self.opts.build();
        if global_opts.quiet && global_opts.verbose > 0 {
            return Err(BilgeError::ConfigError(
                "--quiet cannot be combined with --verbose".to_string(),
            ));
        }

        Ok(Cli {
            global_opts,
            command: self.command,
        })
    }
}

/// Available bilge-pump subcommands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Pump the whole bilge (default)
    ///
    /// Cleans the standard junk roots, then the log root, then the
    /// package-leftover root. Each step prints its own totals.
    Pump,

    /// Swab the decks: caches, temp files, trash and thumbnails
    ///
    /// Every immediate child of `~/.cache`, `/var/cache`, `/tmp`,
    /// `~/.local/share/Trash` and `~/.cache/thumbnails` is removed.
    /// Extensionless files are tallied on their own line.
    Swab,

    /// Clear old entries from the logbook
    ///
    /// Removes rotated and archived logs (`*.1`, `*.old`, `*.gz`, ...) from
    /// `/var/log`. With `--aggressive`, active logs go too; `lastlog` never
    /// does.
    Logbook,

    /// Throw leftover package folders overboard
    ///
    /// Removes empty per-package folders under `~/snap`. With
    /// `--aggressive`, every folder there is removed.
    Flotsam,
}

impl Commands {
    /// The subcommand as typed on the command line
    pub fn name(self) -> &'static str {
        match self {
            Commands::Pump => "pump",
            Commands::Swab => "swab",
            Commands::Logbook => "logbook",
            Commands::Flotsam => "flotsam",
        }
    }
}

/// Turns a `--target` value into the absolute path that gets cleaned.
///
/// A leading `~` expands to `home`, relative paths resolve against the
/// working directory, and `.`/`..` are folded away. When the working
/// directory is unavailable the expanded path is returned as is.
pub fn resolve_target(raw: &Path, home: &Path) -> PathBuf {
    let expanded = match raw.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => raw.to_path_buf(),
    };

    normalize_path(&expanded).unwrap_or(expanded)
}
