//! # Project Records
//!
//! The [`Project`] record, its [`ProjectId`] newtype, and the
//! [`NewProject`] submission that is validated before a project enters the
//! store.
//!
//! ## Validation
//!
//! Text fields are trimmed first. A field that is empty after trimming is
//! missing. A blank link is treated as absent; a present link must be an
//! absolute `http` or `https` URL so that rendered `href`s can never carry
//! a `javascript:` scheme.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ValidationError;

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: usize = 120;
/// Maximum author length, in characters.
pub const MAX_AUTHOR_LEN: usize = 80;
/// Maximum description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 2000;
/// Maximum link length, in characters.
pub const MAX_LINK_LEN: usize = 2048;

/// Identifier of a project. Assigned by the store, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one, or `None` past `u64::MAX`.
    pub(crate) const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A submitted showcase entry.
///
/// Fields are read through accessors; the vote count only moves through
/// [`ProjectStore::record_vote`](crate::ProjectStore::record_vote), which
/// keeps it monotonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    author: String,
    votes: u64,
    submitted_at: DateTime<Utc>,
}

impl Project {
    /// Build a project from already-validated parts.
    pub(crate) fn from_submission(
        id: ProjectId,
        submission: ValidSubmission,
        votes: u64,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: submission.title,
            description: submission.description,
            link: submission.link,
            author: submission.author,
            votes,
            submitted_at,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub(crate) fn add_vote(&mut self) {
        self.votes = self.votes.saturating_add(1);
    }
}

/// A project submission as it arrives from a form or JSON body.
///
/// Absent fields deserialize as empty so that they fail validation with a
/// field-specific error rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub author: String,
    pub link: Option<String>,
}

impl NewProject {
    /// Convenience constructor used by seeds and tests.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        link: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            author: author.into(),
            link: link.map(str::to_string),
        }
    }

    /// Trim and check every field.
    ///
    /// Required fields are checked in form order (title, description,
    /// author) so the first reported error matches the first empty input.
    pub fn validate(&self) -> Result<ValidSubmission, ValidationError> {
        let title = required("title", &self.title, MAX_TITLE_LEN)?;
        let description = required("description", &self.description, MAX_DESCRIPTION_LEN)?;
        let author = required("author", &self.author, MAX_AUTHOR_LEN)?;
        let link = match self.link.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(valid_link(raw)?),
        };
        Ok(ValidSubmission {
            title,
            description,
            author,
            link,
        })
    }
}

/// A submission whose fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    title: String,
    description: String,
    author: String,
    link: Option<String>,
}

fn required(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    check_len(field, value, max)?;
    Ok(value.to_string())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

fn valid_link(raw: &str) -> Result<String, ValidationError> {
    check_len("link", raw, MAX_LINK_LEN)?;
    let parsed = Url::parse(raw).map_err(|_| ValidationError::InvalidLink(raw.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(raw.to_string()),
        _ => Err(ValidationError::InvalidLink(raw.to_string())),
    }
}
