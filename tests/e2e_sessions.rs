// tests/e2e_sessions.rs
use axum::http::StatusCode;

mod support;

use support::helpers::{login, make_test_router, read_json, register_account, send_form};

#[tokio::test]
async fn a_stale_cookie_behaves_as_anonymous() {
    let app = make_test_router();
    register_account(&app, "member1", "member1@example.com").await;
    let cookie = login(&app, "member1").await;

    let (status, envelope) = read_json(send_form(&app, "/logout", "", Some(&cookie)).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["resultCode"], "S-2");

    // the destroyed session no longer authenticates anything
    let (status, error) = read_json(
        send_form(&app, "/articles/new", "title=제목&content=내용", Some(&cookie)).await,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["code"], "C-401");
}

#[tokio::test]
async fn each_login_issues_a_fresh_session_id() {
    let app = make_test_router();
    register_account(&app, "member1", "member1@example.com").await;

    let first = login(&app, "member1").await;
    let (_, envelope) = read_json(send_form(&app, "/logout", "", Some(&first)).await).await;
    assert_eq!(envelope["resultCode"], "S-2");

    let second = login(&app, "member1").await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn sessions_are_isolated_between_clients() {
    let app = make_test_router();
    register_account(&app, "alice", "alice@example.com").await;
    register_account(&app, "bob", "bob@example.com").await;

    let alice = login(&app, "alice").await;
    let bob = login(&app, "bob").await;

    let (status, envelope) = read_json(
        send_form(&app, "/articles/new", "title=제목&content=내용", Some(&alice)).await,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = envelope["body"]["id"].as_i64().expect("article id");

    // bob's session never inherits alice's identity
    let (status, error) = read_json(
        send_form(
            &app,
            &format!("/articles/{id}/edit"),
            "title=수정&content=수정",
            Some(&bob),
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error["code"], "C-403");

    let (status, envelope) = read_json(
        send_form(
            &app,
            &format!("/articles/{id}/edit"),
            "title=수정&content=수정",
            Some(&alice),
        )
        .await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope["body"]["accountId"].as_i64(), Some(1));
}
