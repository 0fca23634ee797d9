use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::classify::{
    Candidate, Category, classify_leftovers, classify_logs, classify_standard,
};
use super::guard::SafetyGuard;
use super::measure::{Measurement, measure};
use super::remove::{RemoveOutcome, remove};
use super::report::{CleanReport, listing_line};
use super::roots::{JunkRoots, RootKind};
use super::size::format_size;
use crate::error::{BilgeError, Result};
use crate::logging::Logger;

/// The cleaning operations that work on configured junk roots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Cache, temp, trash and thumbnail roots
    Standard,
    /// The log root
    Logs,
    /// The package-leftover root
    Leftovers,
}

impl Operation {
    pub fn root_kind(self) -> RootKind {
        match self {
            Operation::Standard => RootKind::Standard,
            Operation::Logs => RootKind::Log,
            Operation::Leftovers => RootKind::Leftover,
        }
    }
}

/// Whether candidates are deleted, simulated or only listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Clean,
    DryRun,
    List,
}

/// Resolved flags for one run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepOptions {
    dry_run: bool,
    aggressive: bool,
    list_only: bool,
    verbose: u8,
    quiet: bool,
    target: Option<PathBuf>,
}

impl SweepOptions {
    /// Creates a new builder for [`SweepOptions`]
    pub fn builder() -> SweepOptionsBuilder {
        SweepOptionsBuilder::default()
    }

    /// Check if dry run mode is enabled
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Check if aggressive mode is enabled
    pub fn aggressive(&self) -> bool {
        self.aggressive
    }

    /// Check if list-only mode is enabled
    pub fn list_only(&self) -> bool {
        self.list_only
    }

    /// Get the verbosity level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Get the single-target override
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// List-only wins over dry-run.
    pub fn mode(&self) -> RunMode {
        if self.list_only {
            RunMode::List
        } else if self.dry_run {
            RunMode::DryRun
        } else {
            RunMode::Clean
        }
    }
}

/// Builder for [`SweepOptions`]
#[derive(Debug, Default)]
pub struct SweepOptionsBuilder {
    dry_run: bool,
    aggressive: bool,
    list_only: bool,
    verbose: u8,
    quiet: bool,
    target: Option<PathBuf>,
}

impl SweepOptionsBuilder {
    /// Enable dry run mode
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Enable aggressive mode
    pub fn aggressive(mut self, enabled: bool) -> Self {
        self.aggressive = enabled;
        self
    }

    /// Enable list-only mode
    pub fn list_only(mut self, enabled: bool) -> Self {
        self.list_only = enabled;
        self
    }

    /// Set the verbosity level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Restrict the run to a single path
    pub fn target(mut self, target: Option<impl Into<PathBuf>>) -> Self {
        self.target = target.map(Into::into);
        self
    }

    /// Build the [`SweepOptions`]
    pub fn build(self) -> SweepOptions {
        SweepOptions {
            dry_run: self.dry_run,
            aggressive: self.aggressive,
            list_only: self.list_only,
            verbose: self.verbose,
            quiet: self.quiet,
            target: self.target,
        }
    }
}

/// Result of a single-target clean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetOutcome {
    /// Nothing exists at the target path
    Missing,
    /// The target could not be inspected
    Inaccessible(io::ErrorKind),
    /// The safety guard rejected the target
    Unsafe,
    /// List-only mode: measured, not removed
    Listed(Measurement),
    /// Handed to the remover
    Removed(Measurement, RemoveOutcome),
}

/// Junk removal over a fixed set of roots.
#[derive(Debug)]
pub struct Sweep {
    roots: JunkRoots,
    guard: SafetyGuard,
    options: SweepOptions,
}

impl Sweep {
    /// Creates a new builder for [`Sweep`]
    pub fn builder() -> SweepBuilder {
        SweepBuilder::default()
    }

    pub fn roots(&self) -> &JunkRoots {
        &self.roots
    }

    pub fn guard(&self) -> &SafetyGuard {
        &self.guard
    }

    pub fn options(&self) -> &SweepOptions {
        &self.options
    }

    fn logger(&self) -> Logger {
        Logger::new(self.options.verbose(), self.options.quiet())
    }

    /// Standard, log and leftover cleaning in sequence.
    ///
    /// Each operation prints its own totals; there is no combined total.
    pub fn pump(&self) -> Vec<CleanReport> {
        vec![
            self.clean_standard(),
            self.clean_logs(),
            self.clean_leftovers(),
        ]
    }

    /// Clean cache, temp, trash and thumbnail roots
    pub fn clean_standard(&self) -> CleanReport {
        self.run(Operation::Standard)
    }

    /// Clean rotated logs (and active ones in aggressive mode)
    pub fn clean_logs(&self) -> CleanReport {
        self.run(Operation::Logs)
    }

    /// Clean empty (or, in aggressive mode, all) package-leftover folders
    pub fn clean_leftovers(&self) -> CleanReport {
        self.run(Operation::Leftovers)
    }

    /// Run one operation over all of its roots.
    ///
    /// Roots that do not exist are skipped silently. A root nested inside
    /// one already scanned by the same operation is skipped too, so list
    /// mode reports the same totals a real run would.
    pub fn run(&self, operation: Operation) -> CleanReport {
        let log = self.logger();
        let mut report = CleanReport::new(operation, self.options.mode());
        let mut scanned: Vec<&Path> = Vec::new();

        for root in self.roots.of_kind(operation.root_kind()) {
            let path = root.path();
            if !path.is_dir() {
                log.verbose(2, format!("Skipping missing root: {}", path.display()));
                continue;
            }
            if let Some(outer) = scanned.iter().find(|outer| path.starts_with(outer)) {
                log.verbose(
                    2,
                    format!(
                        "Skipping {}: already covered by {}",
                        path.display(),
                        outer.display()
                    ),
                );
                continue;
            }
            scanned.push(path);
            report.root_scanned();

            log.verbose(1, format!("Scanning {}", path.display()));
            let aggressive = self.options.aggressive();
            let candidates = match operation {
                Operation::Standard => classify_standard(path, &self.guard, &log),
                Operation::Logs => classify_logs(path, &self.guard, aggressive, &log),
                Operation::Leftovers => classify_leftovers(path, &self.guard, aggressive, &log),
            };

            for candidate in &candidates {
                self.process(candidate, &mut report, &log);
            }
        }

        if report.roots_scanned() > 0 {
            for line in report.render() {
                log.report(line);
            }
        }

        report
    }

    fn process(&self, candidate: &Candidate, report: &mut CleanReport, log: &Logger) {
        if self.options.list_only() {
            log.report(listing_line(candidate));
            report.record(candidate);
            return;
        }

        if remove(candidate, self.options.dry_run(), log).is_success() {
            report.record(candidate);
        } else {
            report.record_failure();
        }
    }

    /// Clean one explicit path as a single unit.
    ///
    /// The path is checked for existence and against the safety guard
    /// before anything is measured. Category rules do not apply.
    pub fn clean_target(&self, target: &Path) -> TargetOutcome {
        let log = self.logger();

        let metadata = match fs::symlink_metadata(target) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log.report(format!("Target does not exist: {}", target.display()));
                return TargetOutcome::Missing;
            }
            Err(err) => {
                log.report(format!("Cannot access target: {} ({err})", target.display()));
                return TargetOutcome::Inaccessible(err.kind());
            }
        };

        if !self.guard.approve(target) {
            log.report(format!("Not safe to delete: {}", target.display()));
            return TargetOutcome::Unsafe;
        }

        let candidate = Candidate {
            path: target.to_path_buf(),
            is_dir: metadata.is_dir(),
            category: Category::Generic,
            measurement: measure(target),
        };
        let measurement = candidate.measurement;
        let summary = format!(
            "{} files, {}",
            measurement.entries,
            format_size(measurement.bytes)
        );

        if self.options.list_only() {
            log.report(listing_line(&candidate));
            log.report(format!("Target total: {summary}"));
            return TargetOutcome::Listed(measurement);
        }

        let outcome = remove(&candidate, self.options.dry_run(), &log);
        if outcome.is_success() {
            log.report(format!(
                "Target cleaned: {} ({summary})",
                target.display()
            ));
            if self.options.dry_run() {
                log.report("  (DRY RUN - no files were actually deleted)");
            }
        } else {
            log.report(format!("Failed to clean target: {}", target.display()));
        }

        TargetOutcome::Removed(measurement, outcome)
    }
}

/// Builder for [`Sweep`]
#[derive(Debug, Default)]
pub struct SweepBuilder {
    roots: Option<JunkRoots>,
    guard: Option<SafetyGuard>,
    home: Option<PathBuf>,
    options: SweepOptions,
}

impl SweepBuilder {
    /// Set the junk roots (defaults to [`JunkRoots::for_home`])
    pub fn roots(mut self, roots: JunkRoots) -> Self {
        self.roots = Some(roots);
        self
    }

    /// Set the safety guard (defaults to [`SafetyGuard::for_home`])
    pub fn guard(mut self, guard: SafetyGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the home directory the defaults are derived from (defaults to
    /// the invoking user's home)
    pub fn home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Set the run options
    pub fn options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the [`Sweep`]
    ///
    /// Fails only when a default has to be derived and no home directory
    /// can be found.
    pub fn build(self) -> Result<Sweep> {
        let home = || -> Result<PathBuf> {
            match &self.home {
                Some(home) => Ok(home.clone()),
                None => home::home_dir().ok_or(BilgeError::HomeNotFound),
            }
        };

        let roots = match self.roots {
            Some(roots) => roots,
            None => JunkRoots::for_home(home()?),
        };
        let guard = match self.guard {
            Some(guard) => guard,
            None => SafetyGuard::for_home(home()?),
        };

        Ok(Sweep {
            roots,
            guard,
            options: self.options,
        })
    }
}
