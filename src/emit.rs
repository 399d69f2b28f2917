use crate::error::SynthError;
use crate::git::CommitSink;
use crate::model::{ContributionDay, DayOutcome, Identity, COMMIT_MESSAGE};
use crate::schedule::{schedule, RandomSource, Sampler};
use tracing::info;

/// Result of replaying one day: how far it got and why it stopped, if it did.
#[derive(Debug)]
pub struct Emission {
    pub committed: u32,
    pub error: Option<SynthError>,
}

impl Emission {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_outcome(self, day: &ContributionDay) -> DayOutcome {
        DayOutcome {
            date: day.date,
            requested: day.count,
            committed: self.committed,
            error: self.error.map(|e| e.to_string()),
        }
    }
}

/// Write one empty commit per scheduled timestamp of `day`, oldest first.
///
/// Stops at the first failing commit. Commits already written for the day
/// stay in the history.
pub fn emit<S, R>(
    sink: &mut S,
    sampler: &mut Sampler<R>,
    day: &ContributionDay,
    identity: &Identity,
) -> Emission
where
    S: CommitSink + ?Sized,
    R: RandomSource,
{
    let slots = schedule(sampler, day.date, day.count);
    let mut committed = 0u32;

    for when in slots {
        if let Err(e) = sink.commit_empty(COMMIT_MESSAGE, identity, when) {
            return Emission {
                committed,
                error: Some(e),
            };
        }
        committed += 1;
        info!("Committed {committed} of {} for {} at {when}", day.count, day.date);
    }

    Emission {
        committed,
        error: None,
    }
}
