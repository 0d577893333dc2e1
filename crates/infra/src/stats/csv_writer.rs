use std::path::Path;

use papersync_domain::{AttendanceMatrix, PaperSyncError, Result};
use tracing::info;

use crate::errors::InfraError;

fn csv_error(err: csv::Error) -> PaperSyncError {
    InfraError::from(err).into()
}

/// Write the matrix as CSV: header row, then one row per identity.
///
/// Overwrites `path`; parent directories are created when missing.
pub fn write_attendance_csv(matrix: &AttendanceMatrix, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|err| PaperSyncError::from(InfraError::from(err)))?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(matrix.header()).map_err(csv_error)?;
    for (identity, cells) in matrix.rows() {
        let record = std::iter::once(identity.to_string())
            .chain(cells.iter().map(ToString::to_string));
        writer.write_record(record).map_err(csv_error)?;
    }
    writer.flush().map_err(|err| PaperSyncError::from(InfraError::from(err)))?;

    info!(
        path = %path.display(),
        identities = matrix.identities().len(),
        columns = matrix.columns().len(),
        "attendance written"
    );
    Ok(())
}
