pub mod day;
pub mod sampler;

pub use day::schedule;
pub use sampler::{OsRandom, RandomSource, Sample, Sampler, BASE_HOUR, HOUR_SPAN};
