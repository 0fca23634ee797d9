use super::classify::{Candidate, Category};
use super::config::{Operation, RunMode};
use super::measure::Measurement;
use super::size::format_size;

/// Running totals for one bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Top-level candidates (an empty directory still counts as one)
    pub items: u64,
    /// Non-directory entries measured beneath them
    pub files: u64,
    /// Bytes measured beneath them
    pub bytes: u64,
}

impl Tally {
    fn add(&mut self, measurement: &Measurement) {
        self.items += 1;
        self.files += measurement.entries;
        self.bytes += measurement.bytes;
    }

    fn merge(&mut self, other: &Tally) {
        self.items += other.items;
        self.files += other.files;
        self.bytes += other.bytes;
    }
}

/// Per-category totals for one operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CleanReport {
    operation: Operation,
    mode: RunMode,
    roots_scanned: usize,
    extensionless: Tally,
    generic: Tally,
    logs: Tally,
    leftovers: Tally,
    failures: u64,
}

impl CleanReport {
    pub fn new(operation: Operation, mode: RunMode) -> Self {
        Self {
            operation,
            mode,
            roots_scanned: 0,
            extensionless: Tally::default(),
            generic: Tally::default(),
            logs: Tally::default(),
            leftovers: Tally::default(),
            failures: 0,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Number of roots of this operation that existed and were scanned.
    pub fn roots_scanned(&self) -> usize {
        self.roots_scanned
    }

    /// Candidates that were selected but could not be removed.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn tally(&self, category: Category) -> Tally {
        match category {
            Category::Extensionless => self.extensionless,
            Category::Generic => self.generic,
            Category::Log => self.logs,
            Category::Leftover => self.leftovers,
        }
    }

    /// Sum of every bucket.
    pub fn total(&self) -> Tally {
        let mut total = Tally::default();
        for tally in [&self.extensionless, &self.generic, &self.logs, &self.leftovers] {
            total.merge(tally);
        }
        total
    }

    pub(crate) fn root_scanned(&mut self) {
        self.roots_scanned += 1;
    }

    pub(crate) fn record(&mut self, candidate: &Candidate) {
        let tally = match candidate.category {
            Category::Extensionless => &mut self.extensionless,
            Category::Generic => &mut self.generic,
            Category::Log => &mut self.logs,
            Category::Leftover => &mut self.leftovers,
        };
        tally.add(&candidate.measurement);
    }

    pub(crate) fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Summary lines, in print order.
    pub fn render(&self) -> Vec<String> {
        let listing = self.mode == RunMode::List;
        let mut lines = Vec::new();

        match self.operation {
            Operation::Standard => {
                if self.extensionless.items > 0 {
                    let prefix = if listing {
                        "No-extension files"
                    } else {
                        "No-extension files cleaned"
                    };
                    lines.push(format!(
                        "{prefix}: {} files, {}",
                        self.extensionless.items,
                        format_size(self.extensionless.bytes)
                    ));
                }
                let prefix = if listing {
                    "Total (standard)"
                } else {
                    "Total cleaned (standard)"
                };
                lines.push(format!("{prefix}: {}", summarize(&self.generic)));
            }
            Operation::Logs => {
                let prefix = if listing {
                    "Total logs"
                } else {
                    "Total logs cleaned"
                };
                lines.push(format!("{prefix}: {}", summarize(&self.logs)));
            }
            Operation::Leftovers => {
                let prefix = if listing {
                    "Total package leftovers"
                } else {
                    "Total package leftovers cleaned"
                };
                lines.push(format!("{prefix}: {}", summarize(&self.leftovers)));
            }
        }

        if self.failures > 0 {
            lines.push(format!("  {} items could not be removed", self.failures));
        }
        if self.mode == RunMode::DryRun {
            lines.push("  (DRY RUN - no files were actually deleted)".to_string());
        }

        lines
    }
}

/// `"<items> items (<files> files), <size>"`
fn summarize(tally: &Tally) -> String {
    format!(
        "{} items ({} files), {}",
        tally.items,
        tally.files,
        format_size(tally.bytes)
    )
}

/// One line describing a candidate in list mode.
pub fn listing_line(candidate: &Candidate) -> String {
    let size = format_size(candidate.measurement.bytes);
    match candidate.category {
        Category::Extensionless => format!("[noext] {} - {size}", candidate.path.display()),
        Category::Log => format!("{} - {size}", candidate.path.display()),
        Category::Generic | Category::Leftover => format!(
            "{} - {size} - {} files",
            candidate.path.display(),
            candidate.measurement.entries
        ),
    }
}
