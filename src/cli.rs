use crate::config::{Config, Query, RawQuery, DEFAULT_FROM, DEFAULT_TO};
use crate::output::{output_json, output_plan, output_summary};
use crate::run::{load_days, open_source, plan, sync};
use crate::schedule::Sampler;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::Term;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calsynth")]
#[command(about = "Replay a GitHub contribution calendar as empty commits in a local repository")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub access token")]
    pub token: Option<String>,

    #[arg(long, help = "GitHub login whose calendar is replayed")]
    pub login: String,

    #[arg(long, default_value = DEFAULT_FROM, help = "Starting date in format YYYY-MM-DD")]
    pub from: String,

    #[arg(long, default_value = DEFAULT_TO, help = "Ending date in format YYYY-MM-DD (inclusive)")]
    pub to: String,

    #[arg(long, help = "Read the calendar from a JSON file instead of GitHub")]
    pub calendar_file: Option<PathBuf>,
}

impl CommonArgs {
    fn raw_query(&self) -> RawQuery {
        RawQuery {
            token: self.token.clone(),
            calendar_file: self.calendar_file.clone(),
            login: self.login.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create one empty commit per contribution
    Sync {
        #[arg(long, help = r#"Commit author name in format "Name Surname""#)]
        committer_name: String,

        #[arg(long, help = r#"Commit author email in format "email@example.com""#)]
        committer_email: String,

        #[arg(long, help = "Target repository directory [default: ./repo.<login>]")]
        repo_dir: Option<PathBuf>,

        #[arg(long, help = "Output the run report as JSON")]
        json: bool,

        #[arg(long, help = "Show the scheduled commits without writing them")]
        dry_run: bool,
    },
    /// Show the commits a sync would create
    Plan,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Sync {
                committer_name,
                committer_email,
                repo_dir,
                json,
                dry_run,
            } => {
                let config = Config::new(
                    self.common.raw_query(),
                    committer_name,
                    committer_email,
                    repo_dir,
                )
                .context("Invalid arguments")?;

                if dry_run {
                    return exec_plan(&config.query);
                }

                let source = open_source(&config.query).context("Failed to set up calendar source")?;
                let show_progress = !json && Term::stderr().is_term();
                let report = sync(&config, source.as_ref(), show_progress)?;

                if json {
                    output_json(&report)
                } else {
                    output_summary(&report)
                }
            }
            Commands::Plan => {
                let query = Query::new(self.common.raw_query()).context("Invalid arguments")?;
                exec_plan(&query)
            }
        }
    }
}

fn exec_plan(query: &Query) -> Result<()> {
    let source = open_source(query).context("Failed to set up calendar source")?;
    let loaded = load_days(query, source.as_ref())?;
    let planned = plan(&mut Sampler::os(), &loaded.days);
    output_plan(&planned)
}
