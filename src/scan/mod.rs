// src/scan/mod.rs
pub mod dataset;
pub mod max;

pub use dataset::{Dataset, Row};
pub use max::{column_max, ScanOutcome};

use anyhow::Result;
use std::path::Path;
use tracing::warn;

/// Load `path` eagerly and reduce column 0 to its maximum.
///
/// File-level failures (unreadable path, structurally broken CSV) are fatal
/// and returned as errors. Per-row integer-parse failures never are: they
/// are counted on the outcome and flagged in the log.
pub fn run<P: AsRef<Path>>(path: P) -> Result<ScanOutcome> {
    let rows = dataset::load(path)?;
    let outcome = max::column_max(&rows);

    if outcome.rows_skipped > 0 {
        warn!(
            skipped = outcome.rows_skipped,
            scanned = outcome.rows_scanned,
            "rows with unparseable column 0 excluded from maximum"
        );
    }

    Ok(outcome)
}
