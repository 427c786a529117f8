// tests/support/helpers.rs
use super::mocks;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{
    Request, StatusCode,
    header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
};
use axum::response::Response;
use chrono::Duration;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

use board_core::application::services::ApplicationServices;
use board_core::domain::{
    account::AccountRepository,
    article::{ArticleReadRepository, ArticleWriteRepository},
};
use board_core::infrastructure::security::session_store::InMemorySessionStore;
use board_core::presentation::http::{routes::build_router, state::HttpState};

/// Router backed by per-test in-memory stores, a real session store, and a
/// clock that steps one second per reading.
pub fn make_test_router() -> Router {
    let articles = Arc::new(mocks::InMemoryArticleStore::new());
    let accounts = Arc::new(mocks::InMemoryAccountRepo::new());

    let account_repo: Arc<dyn AccountRepository> = accounts;
    let article_write: Arc<dyn ArticleWriteRepository> = articles.clone();
    let article_read: Arc<dyn ArticleReadRepository> = articles;

    let services = Arc::new(ApplicationServices::new(
        account_repo,
        article_write,
        article_read,
        Arc::new(mocks::StubPasswordHasher),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(mocks::SteppingClock::starting_at(
            mocks::fixed_now(),
            Duration::seconds(1),
        )),
    ));

    build_router(HttpState { services })
}

pub async fn send_get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_form(app: &Router, uri: &str, form: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::from(form.to_owned())).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("expected a JSON body");
    (status, json)
}

/// Extract the `name=value` pair from a Set-Cookie header.
pub fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_owned)
        .expect("expected a Set-Cookie header")
}

pub async fn register_account(app: &Router, username: &str, email: &str) -> Value {
    let form = format!(
        "username={username}&password=password123&nickname={username}nick&name=Tester&mobileNumber=010-1234-5678&email={email}"
    );
    let response = send_form(app, "/accounts/new", &form, None).await;
    let (status, json) = read_json(response).await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {json}");
    json
}

/// Register (when needed) and log in; returns the session cookie pair.
pub async fn login(app: &Router, username: &str) -> String {
    let form = format!("username={username}&password=password123");
    let response = send_form(app, "/login", &form, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    let (_, json) = read_json(response).await;
    assert_eq!(json["resultCode"], "S-1", "login failed: {json}");
    cookie
}
