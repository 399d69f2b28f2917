use crate::calendar::{filter, CalendarSource, DateWarning, FileCalendar, GithubCalendar};
use crate::config::{Config, Query, Source};
use crate::emit::emit;
use crate::error::Result;
use crate::git::{CommitSink, GitRepo};
use crate::model::{ContributionDay, DayOutcome, Identity, RunReport, SCHEMA_VERSION};
use crate::schedule::{schedule, OsRandom, RandomSource, Sampler};
use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

/// Replay every day in order. A failing day is recorded and skipped.
pub fn run<S, R>(
    sink: &mut S,
    sampler: &mut Sampler<R>,
    days: &[ContributionDay],
    identity: &Identity,
) -> Vec<DayOutcome>
where
    S: CommitSink + ?Sized,
    R: RandomSource,
{
    run_with_progress(sink, sampler, days, identity, &ProgressBar::hidden())
}

pub fn run_with_progress<S, R>(
    sink: &mut S,
    sampler: &mut Sampler<R>,
    days: &[ContributionDay],
    identity: &Identity,
    pb: &ProgressBar,
) -> Vec<DayOutcome>
where
    S: CommitSink + ?Sized,
    R: RandomSource,
{
    let mut outcomes = Vec::with_capacity(days.len());
    pb.set_length(days.len() as u64);

    for day in days {
        pb.set_message(day.date.to_string());
        let emission = emit(sink, sampler, day, identity);
        if let Some(e) = &emission.error {
            error!(
                "Failed to make commits for day {} ({} of {} made): {e}",
                day.date, emission.committed, day.count
            );
        }
        outcomes.push(emission.into_outcome(day));
        pb.inc(1);
    }

    pb.finish_and_clear();
    outcomes
}

pub fn open_source(query: &Query) -> Result<Box<dyn CalendarSource>> {
    Ok(match &query.source {
        Source::Github { token } => Box::new(GithubCalendar::new(token.clone())?),
        Source::File(path) => Box::new(FileCalendar::new(path)),
    })
}

/// Days to replay, with the source total and any date warnings.
#[derive(Debug, Clone)]
pub struct LoadedDays {
    pub total: u64,
    pub days: Vec<ContributionDay>,
    pub warnings: Vec<DateWarning>,
}

/// Fetch and filter the calendar, logging what was found.
pub fn load_days(query: &Query, source: &dyn CalendarSource) -> anyhow::Result<LoadedDays> {
    let calendar = source
        .fetch(&query.login, query.from, query.to)
        .context("Failed to get contributions")?;

    let total = calendar.total();
    info!(
        "Total contributions for user {:?} between {} and {}: {total}",
        query.login, query.from, query.to
    );

    let filtered = filter(calendar.raw_days());
    info!("Days contributed: {}", filtered.days.len());
    Ok(LoadedDays {
        total,
        days: filtered.days,
        warnings: filtered.warnings,
    })
}

/// Fetch, open the repository, and replay every day into it.
pub fn sync(
    config: &Config,
    source: &dyn CalendarSource,
    show_progress: bool,
) -> anyhow::Result<RunReport> {
    let LoadedDays {
        total,
        days,
        warnings,
    } = load_days(&config.query, source)?;

    let mut repo = GitRepo::init_or_open(&config.repo_dir).with_context(|| {
        format!("Failed to init or open repository {}", config.repo_dir.display())
    })?;
    let mut sampler = Sampler::new(OsRandom);

    let pb = if show_progress {
        let pb = ProgressBar::new(days.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes = run_with_progress(&mut repo, &mut sampler, &days, &config.identity, &pb);

    Ok(RunReport {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        from: config.query.from,
        to: config.query.to,
        total_contributions: total,
        days: outcomes,
        warnings,
    })
}

#[derive(Debug, Clone)]
pub struct PlannedDay {
    pub date: NaiveDate,
    pub slots: Vec<DateTime<Utc>>,
}

/// Schedule every day without touching a repository.
pub fn plan<R: RandomSource>(sampler: &mut Sampler<R>, days: &[ContributionDay]) -> Vec<PlannedDay> {
    days.iter()
        .map(|day| PlannedDay {
            date: day.date,
            slots: schedule(sampler, day.date, day.count),
        })
        .collect()
}
