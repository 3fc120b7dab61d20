//! # Session Cookie
//!
//! Resolves the `showcase_session` cookie to a live session, or starts a
//! new one and sets the cookie on the response. Handlers read the result
//! from request extensions as a [`SessionId`].

use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::state::{AppState, SessionId};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "showcase_session";

/// Find the session UUID among the request's cookies.
///
/// Malformed values are ignored, as if the cookie were absent.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
        .map(SessionId)
}

/// `Set-Cookie` value for a new session.
pub fn session_cookie(id: SessionId) -> String {
    format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", id.0)
}

/// Middleware that attaches a [`SessionId`] to every request.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let known = session_from_headers(request.headers()).filter(|id| state.sessions.touch(*id));
    let (id, fresh) = match known {
        Some(id) => (id, false),
        None => {
            let id = state.sessions.create();
            tracing::debug!(session = %id.0, "session started");
            (id, true)
        }
    };
    request.extensions_mut().insert(id);

    let mut response = next.run(request).await;
    if fresh {
        match HeaderValue::from_str(&session_cookie(id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(err) => tracing::error!(error = %err, "session cookie not encodable"),
        }
    }
    response
}
