//! # showcase-core — Project Store for the Showcase
//!
//! Holds the only stateful logic of the showcase: an ordered, append-only
//! list of submitted projects and the record of which projects a session
//! has voted for. Everything else in the workspace is a projection of this
//! state.
//!
//! ## Operations
//!
//! | Operation | Type |
//! |-----------|------|
//! | list projects in insertion order | [`ProjectStore::list`] |
//! | submit a project | [`ProjectStore::add`] |
//! | vote once per project per session | [`ProjectStore::record_vote`] |
//! | leaderboard order | [`ProjectStore::ranked_by_votes`] |
//! | header/results figures | [`ProjectStore::stats`] |
//!
//! ## Crate Policy
//!
//! - No I/O, no async, no locking. Callers own the store and decide how it
//!   is shared.
//! - Structured errors with `thiserror`; no `.unwrap()` outside tests.

pub mod error;
pub mod project;
pub mod seed;
pub mod session;
pub mod store;
pub mod votes;

pub use error::{StoreError, ValidationError};
pub use project::{NewProject, Project, ProjectId, ValidSubmission};
pub use session::Session;
pub use store::{rank_by_votes, ProjectStore, Stats};
pub use votes::VoteRecord;
