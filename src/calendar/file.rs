use super::{CalendarSource, DATE_FORMAT};
use crate::error::{Result, SynthError};
use crate::model::{CalendarWeek, ContributionCalendar};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Calendar stored as JSON on disk, in the same shape GitHub returns it.
#[derive(Debug, Clone)]
pub struct FileCalendar {
    path: PathBuf,
}

impl FileCalendar {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CalendarSource for FileCalendar {
    fn fetch(&self, _login: &str, from: NaiveDate, to: NaiveDate) -> Result<ContributionCalendar> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            SynthError::Calendar(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        let calendar: ContributionCalendar = serde_json::from_str(&text)?;

        let before = calendar.raw_days().count();
        // Unparsable dates are kept so the filter can report them.
        let weeks: Vec<CalendarWeek> = calendar
            .weeks
            .into_iter()
            .map(|week| CalendarWeek {
                contribution_days: week
                    .contribution_days
                    .into_iter()
                    .filter(|day| match NaiveDate::parse_from_str(&day.date, DATE_FORMAT) {
                        Ok(date) => date >= from && date <= to,
                        Err(_) => true,
                    })
                    .collect(),
            })
            .filter(|week| !week.contribution_days.is_empty())
            .collect();

        // A stored total no longer applies once days were clipped away.
        let kept: usize = weeks.iter().map(|w| w.contribution_days.len()).sum();
        let total_contributions = if kept == before {
            calendar.total_contributions
        } else {
            None
        };

        Ok(ContributionCalendar {
            total_contributions,
            weeks,
        })
    }
}
