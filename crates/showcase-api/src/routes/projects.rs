//! # Projects JSON API
//!
//! The collaborator contract for a client that renders on its own:
//!
//! - `GET /api/projects`: projects in insertion order.
//! - `POST /api/projects`: submit; 201 with the project or 422.
//! - `POST /api/projects/:id/vote`: vote once per session; 409
//!   `already_voted`, 404 `not_found`.
//! - `GET /api/leaderboard`: ranked entries with tier and bar width.
//! - `GET /api/stats`: totals and leader.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use showcase_core::{NewProject, Project, ProjectId, StoreError};
use showcase_view::{leaderboard_rows, RankTier};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::{AppState, SessionId};

/// A project as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponse {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub author: String,
    pub votes: u64,
    pub submitted_at: DateTime<Utc>,
}

impl From<&Project> for ProjectResponse {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id().get(),
            title: p.title().to_string(),
            description: p.description().to_string(),
            link: p.link().map(str::to_string),
            author: p.author().to_string(),
            votes: p.votes(),
            submitted_at: p.submitted_at(),
        }
    }
}

/// Project submission request.
///
/// Absent fields read as empty and are reported by validation (422), the
/// same as an empty form field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    /// Absolute http(s) URL; blank or absent means no link.
    #[serde(default)]
    pub link: Option<String>,
}

impl From<SubmitProjectRequest> for NewProject {
    fn from(req: SubmitProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            author: req.author,
            link: req.link,
        }
    }
}

/// Result of a successful vote.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VoteResponse {
    pub id: u64,
    pub votes: u64,
}

/// One leaderboard position.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: usize,
    /// `gold`, `silver`, `bronze` or `other`.
    #[schema(value_type = String)]
    pub tier: RankTier,
    /// Progress-bar width in percent of the leader's votes.
    pub progress: f64,
    pub project: ProjectResponse,
}

/// Totals shown in the header and on the results page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub total_projects: usize,
    pub total_votes: u64,
    pub leader: Option<String>,
}

/// Build the JSON API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/:id/vote", post(vote_project))
        .route("/api/leaderboard", get(leaderboard))
        .route("/api/stats", get(stats))
}

/// Record a vote for `id` on behalf of `session`.
///
/// Takes the session table, then the store, so the check-increment-mark
/// sequence runs as one step for this session.
pub fn cast_vote(state: &AppState, session: SessionId, id: ProjectId) -> Result<u64, StoreError> {
    let outcome = state
        .sessions
        .update(session, |s| {
            state
                .store
                .write()
                .record_vote(&mut s.votes, id)
                .map(Project::votes)
        })
        // A session evicted mid-request votes with an empty record.
        .unwrap_or_else(|| {
            state
                .store
                .write()
                .record_vote(&mut showcase_core::VoteRecord::new(), id)
                .map(Project::votes)
        });
    if outcome.is_ok() {
        state.metrics.record_vote();
        tracing::info!(project_id = %id, "vote recorded");
    }
    outcome
}

/// GET /api/projects: All projects in insertion order.
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Projects in insertion order", body = Vec<ProjectResponse>),
    ),
    tag = "projects"
)]
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectResponse>> {
    let store = state.store.read();
    Json(store.list().iter().map(ProjectResponse::from).collect())
}

/// POST /api/projects: Submit a project.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = SubmitProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Malformed body", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed", body = crate::error::ErrorBody),
    ),
    tag = "projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    body: Result<Json<SubmitProjectRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectResponse>), AppError> {
    let submission = NewProject::from(extract_json(body)?);
    let created = {
        let mut store = state.store.write();
        ProjectResponse::from(store.add(&submission)?)
    };
    state.metrics.record_submission();
    tracing::info!(project_id = created.id, "project submitted");
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/projects/:id/vote: Vote once for a project.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/vote",
    params(("id" = u64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Vote recorded", body = VoteResponse),
        (status = 404, description = "No such project", body = crate::error::ErrorBody),
        (status = 409, description = "Session already voted", body = crate::error::ErrorBody),
    ),
    tag = "projects"
)]
pub async fn vote_project(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(id): Path<u64>,
) -> Result<Json<VoteResponse>, AppError> {
    let votes = cast_vote(&state, session, ProjectId::new(id))?;
    Ok(Json(VoteResponse { id, votes }))
}

/// GET /api/leaderboard: Projects ranked by votes.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Ranked projects, ties in insertion order", body = Vec<LeaderboardEntry>),
    ),
    tag = "projects"
)]
pub async fn leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    let store = state.store.read();
    Json(
        leaderboard_rows(store.list())
            .into_iter()
            .map(|row| LeaderboardEntry {
                rank: row.rank,
                tier: row.tier,
                progress: row.progress,
                project: ProjectResponse::from(row.project),
            })
            .collect(),
    )
}

/// GET /api/stats: Totals and the current leader.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Aggregate figures", body = StatsResponse),
    ),
    tag = "projects"
)]
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.store.read().stats();
    Json(StatsResponse {
        total_projects: stats.total_projects,
        total_votes: stats.total_votes,
        leader: stats.leader,
    })
}
