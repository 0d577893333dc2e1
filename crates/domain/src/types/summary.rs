//! The pinned summary message posted in every presentation channel

use serde::{Deserialize, Serialize};

use crate::constants::{LABEL_DATE, LABEL_LINK, LABEL_PRESENTERS, LABEL_TITLE, LABEL_TOPIC};
use crate::types::schedule::PresentationRecord;
use crate::utils::dates::format_schedule_date;

/// Expected body of a channel's pinned summary.
///
/// Comparison against the live message is exact: any difference, including
/// whitespace, means the pinned copy has drifted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMessage {
    body: String,
}

impl SummaryMessage {
    /// Render the five labeled lines for a record.
    #[must_use]
    pub fn render(record: &PresentationRecord) -> Self {
        let body = format!(
            "{LABEL_TITLE} {}\n{LABEL_LINK} {}\n{LABEL_DATE} {}\n{LABEL_PRESENTERS} {}\n{LABEL_TOPIC} {}",
            record.title,
            record.link,
            format_schedule_date(record.date),
            record.presenters,
            record.topic,
        );
        Self { body }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        self.body == content
    }
}

/// Pull the presentation date text out of a pinned summary body.
///
/// Returns the trimmed text after the date label on the first line that
/// starts with it, or `None` when no such line carries a value.
///
/// # Examples
///
/// ```
/// use papersync_domain::extract_presentation_date;
///
/// let body = "**📜 Paper being presented**: X\n**📅 Presentation Date**: Monday, April 07, 2025";
/// assert_eq!(extract_presentation_date(body).as_deref(), Some("Monday, April 07, 2025"));
/// assert_eq!(extract_presentation_date("hello"), None);
/// ```
#[must_use]
pub fn extract_presentation_date(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| line.trim_start().strip_prefix(LABEL_DATE))
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record() -> PresentationRecord {
        PresentationRecord {
            line: 2,
            id: "12".into(),
            date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
            channel_label: "test-paper".into(),
            title: "X".into(),
            link: "http://y".into(),
            presenters: "A, B".into(),
            topic: "NLP".into(),
        }
    }

    #[test]
    fn test_render_five_lines() {
        let summary = SummaryMessage::render(&record());
        let expected = "**📜 Paper being presented**: X\n\
                        **🌐 Paper Link**: http://y\n\
                        **📅 Presentation Date**: Monday, April 07, 2025\n\
                        **🗣️ Presenter(s)**: A, B\n\
                        **🗃️ Topic Category**: NLP";
        assert_eq!(summary.body(), expected);
        assert_eq!(summary.body().lines().count(), 5);
    }

    #[test]
    fn test_match_is_exact() {
        let summary = SummaryMessage::render(&record());
        assert!(summary.matches(summary.body()));
        assert!(!summary.matches(&format!("{} ", summary.body())));
    }

    #[test]
    fn test_extract_date_round_trips_render() {
        let summary = SummaryMessage::render(&record());
        assert_eq!(
            extract_presentation_date(summary.body()).as_deref(),
            Some("Monday, April 07, 2025")
        );
    }

    #[test]
    fn test_extract_date_ignores_empty_value() {
        assert_eq!(extract_presentation_date("**📅 Presentation Date**:   "), None);
    }
}
