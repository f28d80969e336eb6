use crate::scan::dataset::Dataset;
use tracing::trace;

/// Result of one scan: the running maximum plus skip accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    pub max: i64,
    pub rows_scanned: usize,
    pub rows_skipped: usize,
}

/// Max-reduce column 0 across all rows, in source order.
///
/// The accumulator starts at 0, so the result never drops below 0 even when
/// every parsed value is negative. Rows whose first field is missing or does
/// not parse as a base-10 integer are counted as skipped and contribute
/// nothing to the maximum.
pub fn column_max(rows: &Dataset) -> ScanOutcome {
    let mut max: i64 = 0;
    let mut skipped: usize = 0;

    for (idx, row) in rows.iter().enumerate() {
        match row.first().map(|field| field.parse::<i64>()) {
            Some(Ok(val)) => {
                if val > max {
                    max = val;
                }
            }
            Some(Err(_)) | None => {
                trace!(row = idx, "column 0 not an integer, skipping");
                skipped += 1;
            }
        }
    }

    ScanOutcome {
        max,
        rows_scanned: rows.len(),
        rows_skipped: skipped,
    }
}
