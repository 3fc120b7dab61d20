//! # Error Hierarchy
//!
//! Structured errors for the project store, built with `thiserror`.
//! Every error here is recoverable at the UI boundary: none of them leave
//! the store in a partially written state, because every mutation is a
//! single in-memory step.

use thiserror::Error;

use crate::project::ProjectId;

/// Errors returned by [`ProjectStore`](crate::ProjectStore) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A submission failed field validation. Nothing was recorded.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// This session already voted for the project. The count is unchanged.
    #[error("already voted for project {0}")]
    AlreadyVoted(ProjectId),

    /// No project carries the requested identifier.
    #[error("project {0} not found")]
    NotFound(ProjectId),

    /// A seeded project list contained the same identifier twice.
    #[error("duplicate project identifier {0}")]
    DuplicateId(ProjectId),

    /// Every identifier up to `u64::MAX` is taken. Nothing was recorded.
    #[error("project identifiers exhausted")]
    IdsExhausted,
}

/// Field-level validation failures for a project submission.
///
/// Each variant names the offending field so the form can point at it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A text field exceeded its length limit.
    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        /// The field name.
        field: &'static str,
        /// Maximum permitted length in characters.
        max: usize,
        /// Length of the submitted value in characters.
        actual: usize,
    },

    /// The link was present but not an absolute http(s) URL.
    #[error("link must be an absolute http or https URL: \"{0}\"")]
    InvalidLink(String),
}

impl ValidationError {
    /// The submission field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
            Self::TooLong { field, .. } => field,
            Self::InvalidLink(_) => "link",
        }
    }
}
