//! Domain types and models

pub mod attendance;
pub mod mode;
pub mod naming;
pub mod report;
pub mod schedule;
pub mod summary;

// Re-export the types for convenience
pub use attendance::{AttendanceKey, AttendanceMatrix, ChannelAttendance, DateKeyAllocator};
pub use mode::RunMode;
pub use naming::{is_presentation_channel, CategoryKey, ChannelName};
pub use report::{Outcome, ReportAction, ReportEvent, RunReport};
pub use schedule::{PresentationRecord, ScheduleRow};
pub use summary::{extract_presentation_date, SummaryMessage};
