//! Shared test helpers for `papersync-core` integration tests.
//!
//! These helpers provide an in-memory guild and archive so the service tests
//! can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod archive;
pub mod platform;

use papersync_core::{BotIdentity, RunContext};
use papersync_domain::{PresentationRecord, RunMode, ScheduleRow};

pub fn context(mode: RunMode) -> RunContext {
    RunContext::new(BotIdentity { id: platform::BOT_ID, name: "papersync".to_string() }, mode)
}

/// A fully populated schedule row.
pub fn row(line: u64, date: &str, id: &str, label: &str) -> ScheduleRow {
    ScheduleRow::new(line)
        .with_field("Date", date)
        .with_field("ID", id)
        .with_field("Discord Channel Name", label)
        .with_field("Paper Title", "X")
        .with_field("Paper Link", "http://y")
        .with_field("Presenters", "A, B")
        .with_field("Topic", "NLP")
}

pub fn record(line: u64, date: &str, id: &str, label: &str) -> PresentationRecord {
    PresentationRecord::from_row(&row(line, date, id, label)).unwrap().unwrap()
}
