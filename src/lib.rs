pub mod calendar;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod git;
pub mod model;
pub mod output;
pub mod run;
pub mod schedule;
