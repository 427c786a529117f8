// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAccount, error::ApplicationError, ports::session::SessionId},
    presentation::http::{
        error::{ErrorCode, HttpError},
        state::HttpState,
    },
};
use axum::{
    Extension,
    extract::{Form, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use headers::{Cookie, HeaderMapExt};
use serde::de::DeserializeOwned;

/// Cookie carrying the server-issued session id.
pub const SESSION_COOKIE: &str = "BOARD_SESSION";

/// The request's session, resolved to an account when one is logged in.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedAccount>);

/// Gate for routes that demand a logged-in account; rejects with the
/// Unauthorized condition before any handler logic runs.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAccount);

impl FromRequestParts<()> for MaybeAuthenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let Some(session_id) = session_cookie(parts) else {
            return Ok(Self(None));
        };

        let account = app_state
            .services
            .authenticate_session(&session_id)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(account))
    }
}

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let MaybeAuthenticated(account) =
            MaybeAuthenticated::from_request_parts(parts, state).await?;
        account.map(Self).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("login is required"))
        })
    }
}

fn session_cookie(parts: &Parts) -> Option<SessionId> {
    parts
        .headers
        .typed_get::<Cookie>()
        .and_then(|cookie| cookie.get(SESSION_COOKIE).map(SessionId::new))
}

/// `{id}` path segment. A non-numeric value is a type mismatch, reported
/// with a synthesized field error rather than the router's plain rejection.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl FromRequestParts<()> for IdPath {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::new(ErrorCode::InvalidInputValue))?;

        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| HttpError::type_mismatch("id", &raw, "expected a numeric identifier"))
    }
}

/// Form-encoded request body mapped onto `T`; bind failures surface as the
/// invalid-input condition instead of axum's default rejection.
pub struct FormBody<T>(pub T);

impl<T> FromRequest<()> for FormBody<T>
where
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &()) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!(error = %rejection, "failed to bind form body");
                Err(HttpError::new(ErrorCode::InvalidInputValue))
            }
        }
    }
}
