//! # Integration Tests for showcase-api
//!
//! Drives the full router with `tower::ServiceExt::oneshot`: health probes,
//! the HTML pages and their form commands, session cookies and flash
//! toasts, the JSON API, and OpenAPI generation.

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use showcase_api::config::AppConfig;
use showcase_api::state::AppState;

/// Helper: build the test app seeded with the demo projects.
fn test_app() -> axum::Router {
    showcase_api::app(AppState::new())
}

/// Helper: build the test app with an empty store.
fn empty_app() -> axum::Router {
    let config = AppConfig {
        seed_demo: false,
        ..AppConfig::default()
    };
    showcase_api::app(AppState::with_config(config))
}

/// Helper: read response body as string.
async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: read response body as JSON.
async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = body_string(response).await;
    serde_json::from_str(&body).unwrap()
}

/// Helper: the `name=value` part of the session cookie a response sets.
fn session_cookie(response: &Response<Body>) -> String {
    let header = response
        .headers()
        .get(SET_COOKIE)
        .expect("session cookie set")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().to_string()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn post_json(uri: &str, cookie: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app()
        .oneshot(get("/health/liveness", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app()
        .oneshot(get("/health/readiness", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

#[tokio::test]
async fn test_metrics_count_requests_and_votes() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_json("/api/projects/1/vote", None, serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/health/metrics", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let metrics = body_json(response).await;
    assert_eq!(metrics["requests"], 1);
    assert_eq!(metrics["votes"], 1);
    assert_eq!(metrics["sessions"], 1);
    assert_eq!(metrics["projects"], 4);
}

// -- HTML Pages ---------------------------------------------------------------

#[tokio::test]
async fn test_home_page_lists_demo_projects() {
    let response = test_app().oneshot(get("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).starts_with("showcase_session="));
    let body = body_string(response).await;
    assert!(body.contains("AI-Powered Code Assistant"));
    assert!(body.contains("HealthSync - Medical Data Integration"));
    assert!(body.contains("4 Projects"));
    assert!(body.contains("317 Total Votes"));
    assert!(body.contains(r#"action="/vote/3""#));
}

#[tokio::test]
async fn test_known_session_gets_no_new_cookie() {
    let app = test_app();
    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let second = app.oneshot(get("/results", Some(&cookie))).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert!(second.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_empty_store_shows_empty_states() {
    let app = empty_app();
    let home = body_string(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert!(home.contains(r#"id="emptyState""#));

    let results = body_string(app.oneshot(get("/results", None)).await.unwrap()).await;
    assert!(results.contains(r#"id="resultsEmptyState""#));
    assert!(results.contains("N/A"));
}

#[tokio::test]
async fn test_results_page_ranks_by_votes() {
    let response = test_app().oneshot(get("/results", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let virtual_meet = body.find("VirtualMeet").unwrap();
    let assistant = body.rfind("AI-Powered Code Assistant").unwrap();
    let health = body.rfind("HealthSync").unwrap();
    assert!(virtual_meet < assistant);
    assert!(assistant < health);
}

#[tokio::test]
async fn test_upload_form_page() {
    let response = test_app().oneshot(get("/upload", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#"action="/upload""#));
    assert!(body.contains(r#"id="successModal""#));
    assert!(!body.contains(r#"class="modal show""#));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = test_app().oneshot(get("/nowhere", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Form Commands ------------------------------------------------------------

#[tokio::test]
async fn test_vote_form_redirects_with_flash() {
    let app = test_app();
    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let response = app
        .clone()
        .oneshot(post_form("/vote/2", Some(&cookie), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");

    let home = body_string(app.clone().oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(home.contains("Vote recorded!"));
    assert!(home.contains("<span>Voted</span>"));
    assert!(home.contains("318 Total Votes"));

    // The flash is shown once.
    let again = body_string(app.oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(!again.contains("Vote recorded!"));
}

#[tokio::test]
async fn test_second_form_vote_is_rejected() {
    let app = test_app();
    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_form("/vote/1", Some(&cookie), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let home = body_string(app.clone().oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(home.contains("Already voted!"));

    let projects = body_json(app.oneshot(get("/api/projects", None)).await.unwrap()).await;
    assert_eq!(projects[0]["votes"], 88);
}

#[tokio::test]
async fn test_form_vote_for_unknown_project() {
    let app = test_app();
    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let response = app
        .clone()
        .oneshot(post_form("/vote/99", Some(&cookie), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let home = body_string(app.oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(home.contains("Failed to vote. Please try again."));
}

#[tokio::test]
async fn test_form_vote_for_malformed_id_redirects() {
    let app = test_app();
    let first = app.clone().oneshot(get("/", None)).await.unwrap();
    let cookie = session_cookie(&first);

    let response = app
        .clone()
        .oneshot(post_form("/vote/abc", Some(&cookie), ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");

    let home = body_string(app.oneshot(get("/", Some(&cookie))).await.unwrap()).await;
    assert!(home.contains("Failed to vote. Please try again."));
    assert!(home.contains("317 Total Votes"));
}

#[tokio::test]
async fn test_upload_form_success_opens_modal() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_form(
            "/upload",
            None,
            "title=Rust+Showcase&description=Built+in+Rust&author=Ferris&link=",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_string(response).await;
    assert!(body.contains(r#"class="modal show""#));
    assert!(body.contains("5 Projects"));

    let projects = body_json(app.oneshot(get("/api/projects", None)).await.unwrap()).await;
    assert_eq!(projects[4]["id"], 5);
    assert_eq!(projects[4]["title"], "Rust Showcase");
    assert_eq!(projects[4]["votes"], 0);
    assert!(projects[4].get("link").is_none());
}

#[tokio::test]
async fn test_upload_form_missing_field_keeps_draft() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_form(
            "/upload",
            None,
            "title=Draft+Title&description=&author=Ferris",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("Please fill in all required fields"));
    assert!(body.contains(r#"value="Draft Title""#));
    assert!(!body.contains(r#"class="modal show""#));

    let projects = body_json(app.oneshot(get("/api/projects", None)).await.unwrap()).await;
    assert_eq!(projects.as_array().unwrap().len(), 4);
}

// -- JSON API -----------------------------------------------------------------

#[tokio::test]
async fn test_list_projects_in_insertion_order() {
    let response = test_app().oneshot(get("/api/projects", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let projects = body_json(response).await;
    let ids: Vec<u64> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(projects[2]["author"], "Elena Rodriguez");
    assert_eq!(projects[2]["link"], "https://github.com/demo/virtualmeet");
}

#[tokio::test]
async fn test_create_project_returns_201() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/projects",
            None,
            serde_json::json!({
                "title": "  Trimmed  ",
                "description": "A project",
                "author": "Ferris",
                "link": "https://example.com/project"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["id"], 5);
    assert_eq!(created["title"], "Trimmed");
    assert_eq!(created["votes"], 0);
    assert_eq!(created["link"], "https://example.com/project");

    let stats = body_json(app.oneshot(get("/api/stats", None)).await.unwrap()).await;
    assert_eq!(stats["total_projects"], 5);
}

#[tokio::test]
async fn test_create_project_validation_error() {
    let response = test_app()
        .oneshot(post_json(
            "/api/projects",
            None,
            serde_json::json!({
                "title": "   ",
                "description": "A project",
                "author": "Ferris"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_create_project_rejects_non_http_link() {
    let response = test_app()
        .oneshot(post_json(
            "/api/projects",
            None,
            serde_json::json!({
                "title": "T",
                "description": "D",
                "author": "A",
                "link": "javascript:alert(1)"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_project_missing_field_is_validation_error() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/projects",
            None,
            serde_json::json!({ "description": "d", "author": "a" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("title is required"));

    // The form route answers the same submission the same way.
    let response = app
        .oneshot(post_form("/upload", None, "description=d&author=a"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_project_malformed_body() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/projects")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from("{\"title\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "bad_request");

    let response = test_app()
        .oneshot(post_json(
            "/api/projects",
            None,
            serde_json::json!({ "title": 42, "description": "d", "author": "a" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_vote_once_per_session() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_json("/api/projects/3/vote", None, serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    let vote = body_json(response).await;
    assert_eq!(vote["id"], 3);
    assert_eq!(vote["votes"], 96);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/projects/3/vote",
            Some(&cookie),
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"]["code"], "already_voted");

    // A different session may still vote.
    let response = app
        .oneshot(post_json("/api/projects/3/vote", None, serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["votes"], 97);
}

#[tokio::test]
async fn test_vote_unknown_project_is_404() {
    let response = test_app()
        .oneshot(post_json("/api/projects/42/vote", None, serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_leaderboard_order_and_tiers() {
    let response = test_app()
        .oneshot(get("/api/leaderboard", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();
    let ids: Vec<u64> = entries
        .iter()
        .map(|e| e["project"]["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["tier"], "gold");
    assert_eq!(entries[0]["progress"], 100.0);
    assert_eq!(entries[1]["tier"], "silver");
    assert_eq!(entries[2]["tier"], "bronze");
    assert_eq!(entries[3]["tier"], "other");
}

#[tokio::test]
async fn test_stats() {
    let response = test_app().oneshot(get("/api/stats", None)).await.unwrap();
    let stats = body_json(response).await;
    assert_eq!(stats["total_projects"], 4);
    assert_eq!(stats["total_votes"], 317);
    assert_eq!(stats["leader"], "VirtualMeet - 3D Video Conferencing");

    let response = empty_app().oneshot(get("/api/stats", None)).await.unwrap();
    let stats = body_json(response).await;
    assert_eq!(stats["total_projects"], 0);
    assert!(stats["leader"].is_null());
}

#[tokio::test]
async fn test_submitted_markup_is_escaped() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/projects",
            None,
            serde_json::json!({
                "title": "<script>alert(1)</script>",
                "description": "Tom & Jerry",
                "author": "\"quoted\""
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let home = body_string(app.clone().oneshot(get("/", None)).await.unwrap()).await;
    assert!(!home.contains("<script>alert(1)</script>"));
    assert!(home.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(home.contains("Tom &amp; Jerry"));
    assert!(home.contains("&quot;quoted&quot;"));

    let results = body_string(app.oneshot(get("/results", None)).await.unwrap()).await;
    assert!(!results.contains("<script>alert(1)</script>"));
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_spec() {
    let response = test_app()
        .oneshot(get("/openapi.json", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let spec = body_json(response).await;
    assert!(spec["openapi"].as_str().unwrap().starts_with("3."));
    assert!(spec["paths"].get("/api/projects").is_some());
    assert!(spec["paths"].get("/api/projects/{id}/vote").is_some());
    assert!(spec["paths"].get("/api/leaderboard").is_some());
}
