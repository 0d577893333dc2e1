//! Attendance keys and the user × presentation matrix

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::STATS_IDENTITY_COLUMN;
use crate::utils::dates::parse_schedule_date;

/// Column key of the attendance matrix: the presentation date text plus a
/// zero-based occurrence counter, rendered as `"{date}-{n}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceKey {
    pub date: String,
    pub occurrence: usize,
}

impl fmt::Display for AttendanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.date, self.occurrence)
    }
}

/// Hands out unique keys for date strings in scan order.
#[derive(Debug, Default)]
pub struct DateKeyAllocator {
    seen: HashMap<String, usize>,
}

impl DateKeyAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First call for a date yields occurrence 0, the next 1, and so on.
    pub fn allocate(&mut self, date: &str) -> AttendanceKey {
        let counter = self.seen.entry(date.to_string()).or_insert(0);
        let key = AttendanceKey { date: date.to_string(), occurrence: *counter };
        *counter += 1;
        key
    }
}

/// Distinct non-bot posters of one presentation channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAttendance {
    pub channel: String,
    pub key: AttendanceKey,
    pub attendees: BTreeSet<String>,
}

/// Binary attendance table: one row per identity, one column per
/// presentation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMatrix {
    identities: Vec<String>,
    columns: Vec<AttendanceKey>,
    cells: Vec<Vec<u8>>,
    sorted_by_date: bool,
}

impl AttendanceMatrix {
    /// Build the matrix from per-channel attendance.
    ///
    /// Identities are sorted lexicographically. Columns are sorted by their
    /// calendar date and then by occurrence; if any key's date fails to
    /// parse, every column keeps its insertion order instead.
    #[must_use]
    pub fn assemble(channels: &[ChannelAttendance]) -> Self {
        let identities: Vec<String> = channels
            .iter()
            .flat_map(|channel| channel.attendees.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let (order, sorted_by_date) = column_order(channels);

        let columns = order.iter().map(|&index| channels[index].key.clone()).collect();
        let cells = identities
            .iter()
            .map(|identity| {
                order
                    .iter()
                    .map(|&index| u8::from(channels[index].attendees.contains(identity)))
                    .collect()
            })
            .collect();

        Self { identities, columns, cells, sorted_by_date }
    }

    #[must_use]
    pub fn identities(&self) -> &[String] {
        &self.identities
    }

    #[must_use]
    pub fn columns(&self) -> &[AttendanceKey] {
        &self.columns
    }

    /// False when the date sort fell back to insertion order.
    #[must_use]
    pub const fn sorted_by_date(&self) -> bool {
        self.sorted_by_date
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header row: the identity column followed by every key.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        std::iter::once(STATS_IDENTITY_COLUMN.to_string())
            .chain(self.columns.iter().map(ToString::to_string))
            .collect()
    }

    /// Rows as `(identity, cells)` in identity order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[u8])> + '_ {
        self.identities.iter().map(String::as_str).zip(self.cells.iter().map(Vec::as_slice))
    }

    /// Cell value for an identity and a rendered key such as `"DATE-0"`.
    #[must_use]
    pub fn cell(&self, identity: &str, key: &str) -> Option<u8> {
        let row = self.identities.iter().position(|candidate| candidate == identity)?;
        let column = self.columns.iter().position(|candidate| candidate.to_string() == key)?;
        Some(self.cells[row][column])
    }
}

fn column_order(channels: &[ChannelAttendance]) -> (Vec<usize>, bool) {
    let insertion: Vec<usize> = (0..channels.len()).collect();

    let parsed: Option<Vec<_>> = channels
        .iter()
        .map(|channel| parse_schedule_date(&channel.key.date).ok())
        .collect();

    match parsed {
        Some(dates) => {
            let mut order = insertion;
            order.sort_by_key(|&index| (dates[index], channels[index].key.occurrence));
            (order, true)
        }
        None => (insertion, false),
    }
}
