//! Spreadsheet loading

pub mod ports;
pub mod service;

pub use service::ScheduleLoader;
