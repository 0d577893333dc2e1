//! # papersync Domain
//!
//! Business domain types for papersync.
//!
//! This crate contains:
//! - Schedule rows and presentation records
//! - Naming conventions for categories and channels
//! - The pinned summary template and its date label
//! - Attendance keys and the attendance matrix
//! - Run reports, configuration, error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other papersync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::dates::{format_schedule_date, parse_schedule_date};
pub use utils::markup::strip_emphasis;
