//! Port interface for the presentation spreadsheet

use papersync_domain::{Result, ScheduleRow};

/// Lazily produced rows; an `Err` item is a row the source could not read.
pub type RowIter<'a> = Box<dyn Iterator<Item = Result<ScheduleRow>> + Send + 'a>;

/// Trait for reading header-keyed spreadsheet rows
pub trait ScheduleSource: Send + Sync {
    /// Open the source and iterate its rows in file order.
    ///
    /// Returns `NotFound` when the underlying file does not exist.
    fn rows(&self) -> Result<RowIter<'_>>;

    /// Human-readable location for diagnostics.
    fn describe(&self) -> String;
}
