use std::path::{Path, PathBuf};

use papersync_core::{RowIter, ScheduleSource};
use papersync_domain::{PaperSyncError, Result, ScheduleRow};

use crate::errors::InfraError;

/// Reads the presentation schedule from a CSV file with a header line.
///
/// Rows may be shorter or longer than the header; missing cells are treated
/// as absent columns and extra cells are ignored.
#[derive(Debug, Clone)]
pub struct CsvScheduleSource {
    path: PathBuf,
}

impl CsvScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleSource for CsvScheduleSource {
    fn rows(&self) -> Result<RowIter<'_>> {
        if !self.path.exists() {
            return Err(PaperSyncError::NotFound(format!(
                "schedule file {}",
                self.path.display()
            )));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|err| PaperSyncError::from(InfraError::from(err)))?;
        let headers =
            reader.headers().map_err(|err| PaperSyncError::from(InfraError::from(err)))?.clone();

        let rows = reader.into_records().enumerate().map(move |(index, record)| {
            let record = record.map_err(|err| PaperSyncError::from(InfraError::from(err)))?;
            // Header is line 1.
            let line = record.position().map_or(index as u64 + 2, |pos| pos.line());
            let mut row = ScheduleRow::new(line);
            for (column, value) in headers.iter().zip(record.iter()) {
                row.insert(column, value);
            }
            Ok(row)
        });

        Ok(Box::new(rows))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
