use crate::calendar::DATE_FORMAT;
use crate::error::{Result, SynthError};
use crate::model::Identity;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_FROM: &str = "2021-01-01";
pub const DEFAULT_TO: &str = "2021-12-31";

/// Where the calendar comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Github { token: String },
    File(PathBuf),
}

/// Which calendar to read: source, account and inclusive date range.
#[derive(Debug, Clone)]
pub struct Query {
    pub source: Source,
    pub login: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Validated settings for one sync run, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub query: Query,
    pub identity: Identity,
    pub repo_dir: PathBuf,
}

/// Unvalidated calendar settings as collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RawQuery {
    pub token: Option<String>,
    pub calendar_file: Option<PathBuf>,
    pub login: String,
    pub from: String,
    pub to: String,
}

impl Query {
    pub fn new(raw: RawQuery) -> Result<Self> {
        let source = match raw.calendar_file {
            Some(path) => Source::File(path),
            None => {
                let token = raw.token.unwrap_or_default();
                require("token", &token)?;
                Source::Github { token }
            }
        };
        require("login", &raw.login)?;

        let from = parse_date("from", &raw.from)?;
        let to = parse_date("to", &raw.to)?;
        if from > to {
            return Err(SynthError::Config(format!(
                "Invalid range: from ({from}) is after to ({to})"
            )));
        }

        Ok(Self {
            source,
            login: raw.login,
            from,
            to,
        })
    }
}

impl Config {
    pub fn new(
        query: RawQuery,
        committer_name: String,
        committer_email: String,
        repo_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let query = Query::new(query)?;
        require("committer name", &committer_name)?;
        require("committer email", &committer_email)?;

        let repo_dir = repo_dir.unwrap_or_else(|| default_repo_dir(&query.login));
        Ok(Self {
            query,
            identity: Identity::new(committer_name, committer_email),
            repo_dir,
        })
    }
}

/// `./repo.<login>` relative to the working directory.
pub fn default_repo_dir(login: &str) -> PathBuf {
    PathBuf::from(format!("repo.{login}"))
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SynthError::Config(format!("{field} must be non-empty")));
    }
    Ok(())
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        SynthError::Config(format!(
            "{field} must be a date in format YYYY-MM-DD, got {value:?}: {e}"
        ))
    })
}
