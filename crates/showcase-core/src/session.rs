//! # Single-Session Showcase
//!
//! Bundles one [`ProjectStore`] with one [`VoteRecord`]. This is the shape
//! of a standalone client: its own project list, its own votes, both lost
//! when the session ends. The HTTP service instead shares one store across
//! many sessions and keeps a record per session.

use crate::error::StoreError;
use crate::project::{NewProject, Project, ProjectId};
use crate::store::ProjectStore;
use crate::votes::VoteRecord;

/// A store plus the votes of the one session that uses it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    store: ProjectStore,
    votes: VoteRecord,
}

impl Session {
    /// Start a session over `store` with no votes cast.
    pub fn new(store: ProjectStore) -> Self {
        Self {
            store,
            votes: VoteRecord::new(),
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn votes(&self) -> &VoteRecord {
        &self.votes
    }

    pub fn list(&self) -> &[Project] {
        self.store.list()
    }

    pub fn add(&mut self, submission: &NewProject) -> Result<&Project, StoreError> {
        self.store.add(submission)
    }

    /// Vote for `id` once. See [`ProjectStore::record_vote`].
    pub fn record_vote(&mut self, id: ProjectId) -> Result<&Project, StoreError> {
        self.store.record_vote(&mut self.votes, id)
    }

    pub fn ranked_by_votes(&self) -> Vec<&Project> {
        self.store.ranked_by_votes()
    }
}
