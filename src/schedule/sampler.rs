use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::warn;

/// First hour of the working-hours window.
pub const BASE_HOUR: u32 = 8;
/// Number of hours in the window, so the last possible hour is 19.
pub const HOUR_SPAN: u32 = 12;

/// A fallible source of uniformly distributed integers in `[0, bound)`.
pub trait RandomSource {
    fn draw(&mut self, bound: u32) -> Result<u32, rand::Error>;
}

/// Operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn draw(&mut self, bound: u32) -> Result<u32, rand::Error> {
        if bound <= 1 {
            return Ok(0);
        }
        // Reject the tail so every residue is equally likely.
        let limit = (u32::MAX / bound) * bound;
        loop {
            let mut buf = [0u8; 4];
            OsRng.try_fill_bytes(&mut buf)?;
            let value = u32::from_le_bytes(buf);
            if value < limit {
                return Ok(value % bound);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub at: DateTime<Utc>,
    /// Set when at least one draw failed and was replaced by zero.
    pub fallback: bool,
}

pub struct Sampler<R> {
    rng: R,
}

impl Sampler<OsRandom> {
    pub fn os() -> Self {
        Self::new(OsRandom)
    }
}

impl<R: RandomSource> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a time of day in `[08:00:00, 19:59:59]` UTC on `date`.
    ///
    /// Never fails: a failed draw degrades to 0 for that component and
    /// the returned sample is flagged.
    pub fn sample(&mut self, date: NaiveDate) -> Sample {
        let mut fallback = false;
        let hour = self.draw_or_zero("hour", HOUR_SPAN, &mut fallback);
        let minute = self.draw_or_zero("minute", 60, &mut fallback);
        let second = self.draw_or_zero("second", 60, &mut fallback);

        let time = NaiveTime::from_hms_opt(BASE_HOUR + hour, minute, second)
            .unwrap_or(NaiveTime::MIN);
        Sample {
            at: Utc.from_utc_datetime(&date.and_time(time)),
            fallback,
        }
    }

    fn draw_or_zero(&mut self, unit: &str, bound: u32, fallback: &mut bool) -> u32 {
        match self.rng.draw(bound) {
            // Clamp so a misbehaving source cannot leave the window.
            Ok(value) => value % bound,
            Err(e) => {
                warn!("Failed to generate random {unit}: {e}");
                *fallback = true;
                0
            }
        }
    }
}
