// src/presentation/http/routes.rs
use crate::presentation::http::error::{ErrorCode, HttpError};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::controllers::{accounts, articles, auth};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/articles", get(articles::list_articles))
        .route("/articles/new", post(articles::create_article))
        .route("/articles/{id}", get(articles::get_article))
        .route("/articles/{id}/edit", post(articles::update_article))
        .route("/articles/{id}/delete", get(articles::delete_article))
        .route("/accounts", get(accounts::list_accounts))
        .route("/accounts/new", post(accounts::create_account))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

async fn method_not_allowed() -> HttpError {
    HttpError::new(ErrorCode::MethodNotAllowed)
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
