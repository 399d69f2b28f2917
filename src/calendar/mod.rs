pub mod file;
pub mod filter;
pub mod github;

pub use file::FileCalendar;
pub use filter::{filter, placeholder_date, DateWarning, Filtered, DATE_FORMAT};
pub use github::GithubCalendar;

use crate::error::Result;
use crate::model::ContributionCalendar;
use chrono::NaiveDate;

/// Somewhere a day-by-day contribution record can be read from.
///
/// Any error is fatal to the run; there is no retry.
pub trait CalendarSource {
    fn fetch(&self, login: &str, from: NaiveDate, to: NaiveDate) -> Result<ContributionCalendar>;
}
