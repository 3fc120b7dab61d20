//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented JSON routes into a single OpenAPI spec,
//! served at `/openapi.json`. The HTML pages are not part of it.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the JSON API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Project Showcase API",
        version = "0.1.0",
        description = "Submit projects, vote once per project per session, and read the ranked leaderboard."
    ),
    paths(
        crate::routes::projects::list_projects,
        crate::routes::projects::create_project,
        crate::routes::projects::vote_project,
        crate::routes::projects::leaderboard,
        crate::routes::projects::stats,
    ),
    components(schemas(
        crate::routes::projects::ProjectResponse,
        crate::routes::projects::SubmitProjectRequest,
        crate::routes::projects::VoteResponse,
        crate::routes::projects::LeaderboardEntry,
        crate::routes::projects::StatsResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "projects", description = "Projects, votes, and rankings"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router serving the spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
