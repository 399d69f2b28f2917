pub mod repo;

pub use repo::GitRepo;

use crate::error::Result;
use crate::model::Identity;
use chrono::{DateTime, Utc};

/// Anything that can record an empty commit.
pub trait CommitSink {
    /// Create an empty commit with `identity` as both author and committer at
    /// `when`, returning the new commit id.
    fn commit_empty(&mut self, message: &str, identity: &Identity, when: DateTime<Utc>)
        -> Result<String>;
}
