use super::sampler::{RandomSource, Sampler};
use chrono::{DateTime, NaiveDate, Utc};

/// Sample `count` timestamps on `date` and return them in ascending order.
///
/// Equal timestamps are kept; their relative order is unspecified.
pub fn schedule<R: RandomSource>(
    sampler: &mut Sampler<R>,
    date: NaiveDate,
    count: u32,
) -> Vec<DateTime<Utc>> {
    let mut slots: Vec<DateTime<Utc>> = (0..count).map(|_| sampler.sample(date).at).collect();
    slots.sort_unstable();
    slots
}
