// src/presentation/http/response.rs
use serde::Serialize;

const SUCCESS_PREFIX: &str = "S-";

/// Uniform wrapper around every successful API response. Whether the result
/// is a success is derived from the code prefix on read — it is never
/// stored alongside the code.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseData<T> {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    pub message: String,
    pub body: Option<T>,
}

impl<T> ResponseData<T> {
    pub fn of(result_code: impl Into<String>, message: impl Into<String>, body: T) -> Self {
        Self {
            result_code: result_code.into(),
            message: message.into(),
            body: Some(body),
        }
    }

    pub fn message_only(result_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            result_code: result_code.into(),
            message: message.into(),
            body: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result_code.starts_with(SUCCESS_PREFIX)
    }

    pub fn is_fail(&self) -> bool {
        !self.is_success()
    }
}
