//! Stats mode

pub mod service;

pub use service::AttendanceService;
