//! # Session Vote Record
//!
//! The set of projects one session has voted for. It only grows: there is
//! no way to withdraw a vote, and the record is dropped with its session.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::project::ProjectId;

/// Projects a session has already voted for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VoteRecord {
    voted: BTreeSet<ProjectId>,
}

impl VoteRecord {
    /// An empty record, as at session start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this session already voted for `id`.
    pub fn has_voted(&self, id: ProjectId) -> bool {
        self.voted.contains(&id)
    }

    /// Mark `id` as voted. Returns `false` if it was already present.
    pub(crate) fn mark(&mut self, id: ProjectId) -> bool {
        self.voted.insert(id)
    }

    /// Number of votes cast by this session.
    pub fn len(&self) -> usize {
        self.voted.len()
    }

    /// Whether this session has not voted yet.
    pub fn is_empty(&self) -> bool {
        self.voted.is_empty()
    }

    /// Voted identifiers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ProjectId> + '_ {
        self.voted.iter().copied()
    }
}
