use super::CommitSink;
use crate::error::{Result, SynthError};
use crate::model::{CommitInfo, Identity};
use chrono::{DateTime, Utc};
use gix::date::parse::TimeBuf;
use gix::{ObjectId, Repository};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
    created: bool,
}

impl GitRepo {
    /// Open the repository at `path`, creating it first if it does not exist.
    pub fn init_or_open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let (repo, created) = if path.join(".git").exists() {
            let repo = gix::open(&path)?;
            info!("Opened repository {:?}", path.display());
            (repo, false)
        } else {
            std::fs::create_dir_all(&path)?;
            let repo = gix::init(&path)?;
            info!("Init repository {:?}", path.display());
            (repo, true)
        };

        Ok(Self { repo, path, created })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether [`GitRepo::init_or_open`] had to create the repository.
    pub fn was_created(&self) -> bool {
        self.created
    }

    fn head_commit_id(&self) -> Result<Option<ObjectId>> {
        let head = self.repo.head()?;
        Ok(head.id().map(|id| id.detach()))
    }

    /// First-parent history from `HEAD`, newest first.
    pub fn history(&self) -> Result<Vec<CommitInfo>> {
        let mut commits = Vec::new();
        let mut next = self.head_commit_id()?;

        while let Some(commit_id) = next {
            let commit = self.repo.find_commit(commit_id)?;
            let secs = commit.time()?.seconds;
            let timestamp = DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| SynthError::InvalidDate(format!("Invalid timestamp: {secs}")))?;
            let parent_ids: Vec<ObjectId> = commit.parent_ids().map(|id| id.detach()).collect();

            let author = commit.author()?;
            commits.push(CommitInfo {
                id: commit_id.to_string(),
                author_name: author.name.to_string(),
                author_email: author.email.to_string(),
                message: commit.message()?.title.to_string(),
                timestamp,
                parent_ids: parent_ids.iter().map(|id| id.to_string()).collect(),
            });

            next = parent_ids.first().copied();
        }

        Ok(commits)
    }

    pub fn commit_count(&self) -> Result<usize> {
        Ok(self.history()?.len())
    }
}

impl CommitSink for GitRepo {
    fn commit_empty(
        &mut self,
        message: &str,
        identity: &Identity,
        when: DateTime<Utc>,
    ) -> Result<String> {
        // Reuse the parent's tree so the commit records no changes.
        let parent = self.head_commit_id()?;
        let tree = match parent {
            Some(parent) => self.repo.find_commit(parent)?.tree_id()?.detach(),
            None => self.repo.write_object(&gix::objs::Tree::empty())?.detach(),
        };

        let actor = gix::actor::Signature {
            name: identity.name.as_str().into(),
            email: identity.email.as_str().into(),
            time: gix::date::Time::new(when.timestamp(), 0),
        };
        let mut time_buf = TimeBuf::default();
        let signature = actor.to_ref(&mut time_buf);

        let id = self
            .repo
            .commit_as(signature, signature, "HEAD", message, tree, parent)?;
        Ok(id.to_string())
    }
}
