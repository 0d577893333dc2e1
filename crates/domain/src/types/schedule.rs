//! Spreadsheet rows and the presentation records parsed from them

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    COLUMN_CHANNEL_NAME, COLUMN_DATE, COLUMN_ID, COLUMN_LINK, COLUMN_PRESENTERS, COLUMN_TITLE,
    COLUMN_TOPIC, DEFAULT_LINK, DEFAULT_PRESENTERS, DEFAULT_TITLE, DEFAULT_TOPIC,
};
use crate::errors::RowError;
use crate::types::naming::{CategoryKey, ChannelName};
use crate::types::summary::SummaryMessage;
use crate::utils::dates::parse_schedule_date;

/// One spreadsheet row keyed by header name.
///
/// When a header appears twice the later column wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// 1-based line number in the source file, used in diagnostics
    pub line: u64,
    fields: BTreeMap<String, String>,
}

impl ScheduleRow {
    #[must_use]
    pub fn new(line: u64) -> Self {
        Self { line, fields: BTreeMap::new() }
    }

    /// Builder-style insert, mostly for tests and fixtures.
    #[must_use]
    pub fn with_field(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Trimmed cell value, or `None` when the column is absent.
    #[must_use]
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(|value| value.trim())
    }

    fn field_or_empty(&self, column: &str) -> &str {
        self.field(column).unwrap_or_default()
    }

    fn field_or(&self, column: &str, default: &str) -> String {
        self.field(column).unwrap_or(default).to_string()
    }
}

/// A scheduled presentation derived from one spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationRecord {
    pub line: u64,
    pub id: String,
    pub date: NaiveDate,
    /// Channel slug; empty means the row gets no channel.
    pub channel_label: String,
    pub title: String,
    pub link: String,
    pub presenters: String,
    pub topic: String,
}

impl PresentationRecord {
    /// Parse a record from a row.
    ///
    /// Returns `Ok(None)` for rows without a date, which are entries that
    /// have not been scheduled yet.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::InvalidDate`] when the `Date` cell is present but
    /// malformed.
    pub fn from_row(row: &ScheduleRow) -> Result<Option<Self>, RowError> {
        let date_cell = row.field_or_empty(COLUMN_DATE);
        if date_cell.is_empty() {
            return Ok(None);
        }

        let date = parse_schedule_date(date_cell)?;

        Ok(Some(Self {
            line: row.line,
            id: row.field_or_empty(COLUMN_ID).to_string(),
            date,
            channel_label: row.field_or_empty(COLUMN_CHANNEL_NAME).to_string(),
            title: row.field_or(COLUMN_TITLE, DEFAULT_TITLE),
            link: row.field_or(COLUMN_LINK, DEFAULT_LINK),
            presenters: row.field_or(COLUMN_PRESENTERS, DEFAULT_PRESENTERS),
            topic: row.field_or(COLUMN_TOPIC, DEFAULT_TOPIC),
        }))
    }

    #[must_use]
    pub fn category_key(&self) -> CategoryKey {
        CategoryKey::for_date(self.date)
    }

    /// Channel this record maps to.
    ///
    /// `Ok(None)` when the record has no channel label.
    ///
    /// # Errors
    ///
    /// Returns [`RowError::MissingId`] when a label is present without an id.
    pub fn channel_name(&self) -> Result<Option<ChannelName>, RowError> {
        if self.channel_label.is_empty() {
            return Ok(None);
        }
        if self.id.is_empty() {
            return Err(RowError::MissingId { label: self.channel_label.clone() });
        }
        Ok(Some(ChannelName::new(&self.id, &self.channel_label)))
    }

    #[must_use]
    pub fn summary(&self) -> SummaryMessage {
        SummaryMessage::render(self)
    }
}
