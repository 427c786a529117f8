// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::accounts::{LoginCommand, LoginOutcome, LogoutOutcome},
    dto::AccountDto,
    ports::session::SessionId,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{FormBody, MaybeAuthenticated, SESSION_COOKIE};
use crate::presentation::http::response::ResponseData;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login rejections are anticipated outcomes: they ride inside a 200
/// envelope with an `F-` code, never through the error payload.
pub async fn login(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(current): MaybeAuthenticated,
    FormBody(payload): FormBody<LoginRequest>,
) -> HttpResult<Response> {
    let command = LoginCommand {
        username: payload.username,
        password: payload.password,
    };

    let outcome = state
        .services
        .account_commands
        .login(current.as_ref(), command)
        .await
        .into_http()?;

    let response = match outcome {
        LoginOutcome::AlreadyAuthenticated => envelope("F-3", "You are already logged in."),
        LoginOutcome::UnknownUsername => envelope("F-1", "No account exists with that username."),
        LoginOutcome::InvalidCredentials => {
            envelope("F-2", "The username or password is incorrect.")
        }
        LoginOutcome::LoggedIn {
            session_id,
            account,
        } => (
            AppendHeaders([(SET_COOKIE, session_cookie(&session_id))]),
            Json(ResponseData::<AccountDto>::message_only(
                "S-1",
                format!("Welcome back, {}.", account.nickname),
            )),
        )
            .into_response(),
    };

    Ok(response)
}

pub async fn logout(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(current): MaybeAuthenticated,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .account_commands
        .logout(current.as_ref())
        .await
        .into_http()?;

    let response = match outcome {
        LogoutOutcome::NotLoggedIn => envelope("S-1", "You are not logged in."),
        LogoutOutcome::LoggedOut => (
            AppendHeaders([(SET_COOKIE, expired_session_cookie())]),
            Json(ResponseData::<AccountDto>::message_only(
                "S-2",
                "You have been logged out.",
            )),
        )
            .into_response(),
    };

    Ok(response)
}

fn envelope(result_code: &str, message: &str) -> Response {
    Json(ResponseData::<AccountDto>::message_only(result_code, message)).into_response()
}

fn session_cookie(session_id: &SessionId) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
