// src/presentation/http/controllers/accounts.rs
use crate::application::{commands::accounts::RegisterAccountCommand, dto::AccountDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::FormBody;
use crate::presentation::http::response::ResponseData;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterAccountRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "mobileNumber", default)]
    pub mobile_number: String,
    #[serde(default)]
    pub email: String,
}

pub async fn create_account(
    Extension(state): Extension<HttpState>,
    FormBody(payload): FormBody<RegisterAccountRequest>,
) -> HttpResult<(StatusCode, Json<ResponseData<AccountDto>>)> {
    let command = RegisterAccountCommand {
        username: payload.username,
        password: payload.password,
        nickname: payload.nickname,
        name: payload.name,
        mobile_number: payload.mobile_number,
        email: payload.email,
    };

    let account = state
        .services
        .account_commands
        .register(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseData::of(
            "S-1",
            "Your registration is complete.",
            account,
        )),
    ))
}

pub async fn list_accounts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ResponseData<Vec<AccountDto>>>> {
    let accounts = state
        .services
        .account_queries
        .list_accounts()
        .await
        .into_http()?;

    Ok(Json(ResponseData::of("S-1", "Listing accounts.", accounts)))
}
