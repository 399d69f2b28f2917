use super::CalendarSource;
use crate::error::{Result, SynthError};
use crate::model::ContributionCalendar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const CALENDAR_QUERY: &str = "\
query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        totalContributions
        weeks { contributionDays { contributionCount date } }
      }
    }
  }
}";

/// Contribution calendar fetched from the GitHub GraphQL API.
pub struct GithubCalendar {
    token: String,
    endpoint: String,
    http_client: reqwest::blocking::Client,
}

impl GithubCalendar {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(token, DEFAULT_GRAPHQL_URL)
    }

    pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SynthError::Config("token must be non-empty".to_string()));
        }

        let http_client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .user_agent(concat!("calsynth/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            token,
            endpoint: endpoint.into(),
            http_client,
        })
    }
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<UserNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserNode {
    contributions_collection: CollectionNode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionNode {
    contribution_calendar: ContributionCalendar,
}

impl CalendarSource for GithubCalendar {
    fn fetch(&self, login: &str, from: NaiveDate, to: NaiveDate) -> Result<ContributionCalendar> {
        let request = GraphqlRequest {
            query: CALENDAR_QUERY,
            variables: json!({
                "login": login,
                "from": format!("{}T00:00:00Z", from.format("%Y-%m-%d")),
                "to": format!("{}T23:59:59Z", to.format("%Y-%m-%d")),
            }),
        };
        debug!(endpoint = %self.endpoint, login, "Querying contribution calendar");

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(SynthError::CalendarStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body: GraphqlResponse = response.json()?;
        parse_response(body, login)
    }
}

fn parse_response(body: GraphqlResponse, login: &str) -> Result<ContributionCalendar> {
    if !body.errors.is_empty() {
        let messages: Vec<String> = body.errors.into_iter().map(|e| e.message).collect();
        return Err(SynthError::Calendar(messages.join("; ")));
    }

    body.data
        .and_then(|d| d.user)
        .map(|u| u.contributions_collection.contribution_calendar)
        .ok_or_else(|| SynthError::Calendar(format!("No user found for login {login:?}")))
}

/// Decode a raw GraphQL response body into a calendar.
pub fn decode_response(body: &str, login: &str) -> Result<ContributionCalendar> {
    let body: GraphqlResponse = serde_json::from_str(body)?;
    parse_response(body, login)
}
