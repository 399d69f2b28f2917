use crate::calendar::DateWarning;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Message used for every synthesized commit.
pub const COMMIT_MESSAGE: &str = "Private contribution";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub id: String,
    pub author_name: String,
    pub author_email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub parent_ids: Vec<String>,
}

/// Calendar shape returned by a contribution source, weeks in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    #[serde(default)]
    pub total_contributions: Option<u64>,
    pub weeks: Vec<CalendarWeek>,
}

impl ContributionCalendar {
    /// Total reported by the source, or the sum of day counts when absent.
    pub fn total(&self) -> u64 {
        self.total_contributions
            .unwrap_or_else(|| self.raw_days().map(|d| d.contribution_count as u64).sum())
    }

    /// All days across all weeks, in source order.
    pub fn raw_days(&self) -> impl Iterator<Item = &RawDay> + '_ {
        self.weeks.iter().flat_map(|w| w.contribution_days.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek {
    pub contribution_days: Vec<RawDay>,
}

/// One unparsed `(date, count)` entry as delivered by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDay {
    pub contribution_count: u32,
    pub date: String,
}

impl RawDay {
    pub fn new(date: impl Into<String>, contribution_count: u32) -> Self {
        Self {
            contribution_count,
            date: date.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// Author and committer identity; both roles share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOutcome {
    pub date: NaiveDate,
    pub requested: u32,
    pub committed: u32,
    pub error: Option<String>,
}

impl DayOutcome {
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total_contributions: u64,
    pub days: Vec<DayOutcome>,
    /// Entries replayed on the placeholder date because their date was malformed.
    pub warnings: Vec<DateWarning>,
}

impl RunReport {
    pub fn commits_made(&self) -> u64 {
        self.days.iter().map(|d| d.committed as u64).sum()
    }

    pub fn failed_days(&self) -> usize {
        self.days.iter().filter(|d| d.is_failed()).count()
    }
}
