//! # HTML Pages
//!
//! Server-rendered pages and the form commands behind them.
//!
//! | Route            | Behavior                                            |
//! |------------------|-----------------------------------------------------|
//! | `GET /`          | project grid                                        |
//! | `GET /upload`    | submission form                                     |
//! | `POST /upload`   | submit; confirmation modal or 422 with the form kept |
//! | `GET /results`   | stats and leaderboard                               |
//! | `POST /vote/:id` | vote, then 303 back to `/` with a toast             |

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use showcase_core::{NewProject, ProjectId, StoreError, ValidationError, VoteRecord};
use showcase_view::{render_home, render_results, render_upload, Chrome, Navigator, Page, Toast};

use crate::error::AppError;
use crate::extractors::extract_form;
use crate::state::{AppState, SessionId};

const VOTE_RECORDED: &str = "Vote recorded!";
const ALREADY_VOTED: &str = "Already voted!";
const VOTE_FAILED: &str = "Failed to vote. Please try again.";
const MISSING_FIELDS: &str = "Please fill in all required fields";

/// Build the page router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(Page::Home.path(), get(home))
        .route(Page::Upload.path(), get(upload_form).post(submit_project))
        .route(Page::Results.path(), get(results))
        .route("/vote/:id", post(vote))
}

/// What a page view needs from the session.
struct SessionView {
    votes: VoteRecord,
    toasts: Vec<Toast>,
    nav: Navigator,
}

/// Navigate the session to `page` and take its pending toasts.
fn enter_page(state: &AppState, session: SessionId, page: Page) -> SessionView {
    state
        .sessions
        .update(session, |s| {
            let refresh = s.nav.navigate(page);
            tracing::trace!(page = page.name(), ?refresh, "page entered");
            SessionView {
                votes: s.votes.clone(),
                toasts: std::mem::take(&mut s.flash),
                nav: s.nav.clone(),
            }
        })
        .unwrap_or_else(|| {
            // The session was evicted mid-request; render as a fresh one.
            let mut nav = Navigator::new();
            nav.navigate(page);
            SessionView {
                votes: VoteRecord::new(),
                toasts: Vec::new(),
                nav,
            }
        })
}

fn push_flash(state: &AppState, session: SessionId, toast: Toast) {
    state.sessions.update(session, |s| s.flash.push(toast));
}

async fn home(State(state): State<AppState>, Extension(session): Extension<SessionId>) -> Html<String> {
    let view = enter_page(&state, session, Page::Home);
    let store = state.store.read();
    let stats = store.stats();
    Html(render_home(
        store.list(),
        &view.votes,
        Chrome {
            nav: &view.nav,
            stats: &stats,
            toasts: &view.toasts,
            modal_open: false,
        },
    ))
}

async fn upload_form(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Html<String> {
    let view = enter_page(&state, session, Page::Upload);
    let stats = state.store.read().stats();
    Html(render_upload(
        None,
        None,
        Chrome {
            nav: &view.nav,
            stats: &stats,
            toasts: &view.toasts,
            modal_open: false,
        },
    ))
}

async fn results(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Html<String> {
    let view = enter_page(&state, session, Page::Results);
    let store = state.store.read();
    let stats = store.stats();
    Html(render_results(
        store.list(),
        Chrome {
            nav: &view.nav,
            stats: &stats,
            toasts: &view.toasts,
            modal_open: false,
        },
    ))
}

/// POST /upload: submit the form.
///
/// On success the page comes back with the confirmation modal open; the
/// modal sends the browser home when it closes. On a validation failure the
/// form is re-rendered with the submitted values and an error toast.
async fn submit_project(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    body: Result<Form<NewProject>, FormRejection>,
) -> Result<Response, AppError> {
    let submission = extract_form(body)?;
    let view = enter_page(&state, session, Page::Upload);

    let mut store = state.store.write();
    let outcome = store.add(&submission).map(|p| p.id());
    let stats = store.stats();
    drop(store);

    match outcome {
        Ok(id) => {
            state.metrics.record_submission();
            tracing::info!(project_id = %id, "project submitted");
            let html = render_upload(
                None,
                None,
                Chrome {
                    nav: &view.nav,
                    stats: &stats,
                    toasts: &view.toasts,
                    modal_open: true,
                },
            );
            Ok((StatusCode::CREATED, Html(html)).into_response())
        }
        Err(StoreError::Validation(err)) => {
            tracing::debug!(error = %err, "submission rejected");
            let mut toasts = view.toasts;
            toasts.push(Toast::error(validation_message(&err)));
            let html = render_upload(
                Some(&submission),
                Some(err.field()),
                Chrome {
                    nav: &view.nav,
                    stats: &stats,
                    toasts: &toasts,
                    modal_open: false,
                },
            );
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(other) => Err(other.into()),
    }
}

fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingField(_) => MISSING_FIELDS.to_string(),
        other => other.to_string(),
    }
}

/// POST /vote/:id: vote from the grid.
///
/// Every outcome redirects home; the result travels as a flash toast. An
/// id that is not a number fails like an unknown project.
async fn vote(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(raw): Path<String>,
) -> Redirect {
    let toast = match raw.parse::<ProjectId>() {
        Ok(id) => match crate::routes::projects::cast_vote(&state, session, id) {
            Ok(_) => Toast::success(VOTE_RECORDED),
            Err(StoreError::AlreadyVoted(_)) => Toast::error(ALREADY_VOTED),
            Err(err) => {
                tracing::warn!(project_id = %id, error = %err, "vote failed");
                Toast::error(VOTE_FAILED)
            }
        },
        Err(err) => {
            tracing::warn!(project_id = %raw, error = %err, "vote for malformed id");
            Toast::error(VOTE_FAILED)
        }
    };
    push_flash(&state, session, toast);
    Redirect::to(Page::Home.path())
}
