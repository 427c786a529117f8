use crate::application::{
    ApplicationResult,
    error::{ApplicationError, FieldViolation},
};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Every failure condition the boundary recognizes, with its machine code,
/// HTTP status, and client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidInputValue,
    InvalidTypeValue,
    Unauthorized,
    Forbidden,
    ArticleNotFound,
    ArticleNotCreated,
    MethodNotAllowed,
    InternalServerError,
}

impl ErrorCode {
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidInputValue | Self::InvalidTypeValue => "C-400",
            Self::Unauthorized => "C-401",
            Self::Forbidden => "C-403",
            Self::ArticleNotFound => "A-001",
            Self::ArticleNotCreated => "A-002",
            Self::MethodNotAllowed => "C-405",
            Self::InternalServerError => "C-500",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidInputValue | Self::InvalidTypeValue => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::ArticleNotFound | Self::ArticleNotCreated => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidInputValue => "The request contains invalid input values.",
            Self::InvalidTypeValue => "The request contains a value of the wrong type.",
            Self::Unauthorized => "Authentication is required.",
            Self::Forbidden => "You do not have permission for this request.",
            Self::ArticleNotFound => "The article does not exist.",
            Self::ArticleNotCreated => "The article could not be created.",
            Self::MethodNotAllowed => "The request method is not allowed.",
            Self::InternalServerError => "An internal server error occurred.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl From<FieldViolation> for FieldError {
    fn from(violation: FieldViolation) -> Self {
        Self {
            field: violation.field,
            value: violation.value,
            reason: violation.reason,
        }
    }
}

/// The wire shape for every mapped failure. `errors` is always present;
/// absence of field errors is an empty list, never a missing one.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: &'static str,
    pub status: u16,
    pub errors: Vec<FieldError>,
}

#[derive(Debug)]
pub struct HttpError {
    error_code: ErrorCode,
    errors: Vec<FieldError>,
}

impl HttpError {
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            error_code,
            errors: Vec::new(),
        }
    }

    pub fn with_field_errors(error_code: ErrorCode, errors: Vec<FieldError>) -> Self {
        Self { error_code, errors }
    }

    /// A synthesized entry for input that failed to parse into its expected
    /// shape before any validator could look at it.
    pub fn type_mismatch(field: &str, value: &str, reason: &str) -> Self {
        tracing::warn!(field, value, "type mismatch on request input");
        Self::with_field_errors(
            ErrorCode::InvalidTypeValue,
            vec![FieldError {
                field: field.to_owned(),
                value: value.to_owned(),
                reason: reason.to_owned(),
            }],
        )
    }

    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(violations) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                tracing::warn!(?fields, "request validation failed");
                Self::with_field_errors(
                    ErrorCode::InvalidInputValue,
                    violations.into_iter().map(Into::into).collect(),
                )
            }
            ApplicationError::Domain(DomainError::Validation(msg))
            | ApplicationError::Domain(DomainError::Conflict(msg)) => {
                tracing::warn!(reason = %msg, "domain rejected request input");
                Self::new(ErrorCode::InvalidInputValue)
            }
            ApplicationError::Domain(DomainError::NotFound(msg))
            | ApplicationError::NotFound(msg) => {
                tracing::warn!(reason = %msg, "requested article is missing");
                Self::new(ErrorCode::ArticleNotFound)
            }
            ApplicationError::NotCreated(msg) => {
                tracing::error!(reason = %msg, "article insert could not be read back");
                Self::new(ErrorCode::ArticleNotCreated)
            }
            ApplicationError::Unauthorized(msg) => {
                tracing::warn!(reason = %msg, "rejected unauthenticated request");
                Self::new(ErrorCode::Unauthorized)
            }
            ApplicationError::Forbidden(msg) => {
                tracing::warn!(reason = %msg, "rejected unentitled request");
                Self::new(ErrorCode::Forbidden)
            }
            ApplicationError::Domain(DomainError::Persistence(msg))
            | ApplicationError::Infrastructure(msg) => {
                tracing::error!(reason = %msg, "unclassified failure");
                Self::new(ErrorCode::InternalServerError)
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.error_code.status();
        let payload = ErrorResponse {
            message: self.error_code.message().to_owned(),
            code: self.error_code.code(),
            status: status.as_u16(),
            errors: self.errors,
        };
        (status, Json(payload)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
