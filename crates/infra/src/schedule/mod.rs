//! Spreadsheet-backed schedule source

mod csv_source;

pub use csv_source::CsvScheduleSource;
