use crate::model::{ContributionDay, RawDay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A non-zero day whose date could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWarning {
    /// Position of the entry in the raw input.
    pub index: usize,
    pub raw: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filtered {
    pub days: Vec<ContributionDay>,
    pub warnings: Vec<DateWarning>,
}

/// Date substituted for unparsable entries (1970-01-01).
pub fn placeholder_date() -> NaiveDate {
    NaiveDate::default()
}

/// Drop zero-count entries and parse the rest, keeping input order.
///
/// A malformed date does not drop the entry: it is kept with
/// [`placeholder_date`] and reported in `warnings`.
pub fn filter<'a, I>(raw: I) -> Filtered
where
    I: IntoIterator<Item = &'a RawDay>,
{
    let mut out = Filtered::default();

    for (index, day) in raw.into_iter().enumerate() {
        if day.contribution_count == 0 {
            continue;
        }

        let date = match NaiveDate::parse_from_str(&day.date, DATE_FORMAT) {
            Ok(date) => date,
            Err(e) => {
                warn!("Failed to parse date {:?}: {e}", day.date);
                out.warnings.push(DateWarning {
                    index,
                    raw: day.date.clone(),
                    reason: e.to_string(),
                });
                placeholder_date()
            }
        };

        out.days.push(ContributionDay::new(date, day.contribution_count));
    }

    out
}
