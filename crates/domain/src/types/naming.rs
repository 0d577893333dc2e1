//! Naming conventions shared by every mode
//!
//! Categories are grouped by month (`"April Presentations"`) and channels
//! are named `p{id}-{label}`. Stats and archive runs discover presentation
//! channels purely through this convention.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{CATEGORY_SUFFIX, CHANNEL_PREFIX};
use crate::utils::dates::month_name;

/// Name of the monthly category a presentation belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// `"{MonthName} Presentations"` for the given date.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self(format!("{} {CATEGORY_SUFFIX}", month_name(date)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the discussion channel for one presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChannelName(String);

impl ChannelName {
    /// `"p{id}-{label}"`.
    #[must_use]
    pub fn new(id: &str, label: &str) -> Self {
        Self(format!("{CHANNEL_PREFIX}{id}-{label}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a channel name follows the presentation convention: `p` followed
/// immediately by at least one digit.
///
/// # Examples
///
/// ```
/// use papersync_domain::is_presentation_channel;
///
/// assert!(is_presentation_channel("p12-test-paper"));
/// assert!(!is_presentation_channel("general"));
/// assert!(!is_presentation_channel("p-x"));
/// ```
#[must_use]
pub fn is_presentation_channel(name: &str) -> bool {
    name.strip_prefix(CHANNEL_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}
