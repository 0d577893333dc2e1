//! Turns spreadsheet rows into presentation records

use std::sync::Arc;

use papersync_domain::{PresentationRecord, Result, RunReport};
use tracing::{debug, warn};

use super::ports::ScheduleSource;

/// Reads the schedule and keeps every row that parses.
pub struct ScheduleLoader {
    source: Arc<dyn ScheduleSource>,
}

impl ScheduleLoader {
    pub fn new(source: Arc<dyn ScheduleSource>) -> Self {
        Self { source }
    }

    /// Load records in file order.
    ///
    /// Rows without a date are dropped silently. Unreadable rows and rows
    /// with a malformed date are logged, recorded as skipped in `report`, and
    /// never stop the load.
    ///
    /// # Errors
    ///
    /// Propagates the source's error when it cannot be opened at all
    /// (`NotFound` for a missing file).
    pub fn load(&self, report: &mut RunReport) -> Result<Vec<PresentationRecord>> {
        let mut records = Vec::new();

        for (index, row) in self.source.rows()?.enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    let subject = format!("row #{}", index + 1);
                    warn!(row = index + 1, error = %err, "Unreadable spreadsheet row; skipping");
                    report.failed(subject, err);
                    continue;
                }
            };

            match PresentationRecord::from_row(&row) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => debug!(line = row.line, "Row has no date; skipping"),
                Err(err) => {
                    warn!(line = row.line, error = %err, "Skipping row");
                    report.skipped(format!("line {}", row.line), err.to_string());
                }
            }
        }

        debug!(source = %self.source.describe(), count = records.len(), "Schedule loaded");
        Ok(records)
    }
}
