//! Attendance output: CSV file and console table

mod csv_writer;
mod table;

pub use csv_writer::write_attendance_csv;
pub use table::render_table;
