//! # Project Store
//!
//! Ordered, append-only collection of [`Project`]s.
//!
//! ## Invariants
//!
//! - Identifiers are unique for the store's lifetime. A new project gets
//!   `max(existing) + 1`, or `1` in an empty store. Projects are never
//!   removed, so the next identifier only moves forward.
//! - Vote counts never decrease. The only mutation is
//!   [`ProjectStore::record_vote`], which adds exactly one.
//! - [`ProjectStore::list`] preserves insertion order, and
//!   [`ProjectStore::ranked_by_votes`] is a stable sort over it, so ties keep
//!   their insertion order on the leaderboard.

use chrono::Utc;
use serde::Serialize;

use crate::error::StoreError;
use crate::project::{NewProject, Project, ProjectId};
use crate::seed;
use crate::votes::VoteRecord;

/// Aggregate figures shown in the page header and on the results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_projects: usize,
    pub total_votes: u64,
    /// Title of the top-ranked project; `None` for an empty store.
    pub leader: Option<String>,
}

/// The ordered project collection.
#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
    /// `None` once an identifier of `u64::MAX` has been handed out.
    next_id: Option<ProjectId>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: Some(ProjectId::new(1)),
        }
    }

    /// A store holding the four demo projects.
    pub fn with_demo_projects() -> Self {
        Self::from_seed(seed::demo_projects(Utc::now()))
    }

    /// Like [`from_projects`](Self::from_projects), but a rejected seed is
    /// logged and leaves the store empty.
    fn from_seed(projects: Vec<Project>) -> Self {
        Self::from_projects(projects).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "seed projects rejected, starting empty");
            Self::new()
        })
    }

    /// Build a store from existing records, keeping their order.
    ///
    /// Fails if two records share an identifier.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, StoreError> {
        let mut seen = std::collections::HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id()) {
                return Err(StoreError::DuplicateId(project.id()));
            }
        }
        let next_id = projects
            .iter()
            .map(Project::id)
            .max()
            .map_or(Some(ProjectId::new(1)), ProjectId::next);
        Ok(Self { projects, next_id })
    }

    /// All projects in insertion order.
    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    /// Look up a project by identifier.
    pub fn get(&self, id: ProjectId) -> Result<&Project, StoreError> {
        self.projects
            .iter()
            .find(|p| p.id() == id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Validate a submission and append it with a fresh identifier and zero
    /// votes. On error the store is untouched.
    pub fn add(&mut self, submission: &NewProject) -> Result<&Project, StoreError> {
        let valid = submission.validate()?;
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = id.next();
        self.projects
            .push(Project::from_submission(id, valid, 0, Utc::now()));
        tracing::debug!(project_id = %id, "project added");
        let index = self.projects.len() - 1;
        Ok(&self.projects[index])
    }

    /// Record one vote from the session owning `votes`.
    ///
    /// The already-voted check runs first, then the lookup. On success the
    /// project's count goes up by one and `id` joins the vote record; on any
    /// error neither changes.
    pub fn record_vote(
        &mut self,
        votes: &mut VoteRecord,
        id: ProjectId,
    ) -> Result<&Project, StoreError> {
        if votes.has_voted(id) {
            return Err(StoreError::AlreadyVoted(id));
        }
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        project.add_vote();
        votes.mark(id);
        tracing::debug!(project_id = %id, votes = project.votes(), "vote recorded");
        Ok(project)
    }

    /// Projects by descending vote count, ties in insertion order.
    pub fn ranked_by_votes(&self) -> Vec<&Project> {
        rank_by_votes(&self.projects)
    }

    /// Totals and the current leader.
    pub fn stats(&self) -> Stats {
        Stats {
            total_projects: self.projects.len(),
            total_votes: self.projects.iter().map(Project::votes).sum(),
            leader: self.ranked_by_votes().first().map(|p| p.title().to_string()),
        }
    }
}

/// Stable descending sort by votes over any project slice.
pub fn rank_by_votes(projects: &[Project]) -> Vec<&Project> {
    let mut ranked: Vec<&Project> = projects.iter().collect();
    // `sort_by` is stable: equal counts keep their relative order.
    ranked.sort_by(|a, b| b.votes().cmp(&a.votes()));
    ranked
}
