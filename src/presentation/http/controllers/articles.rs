// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, FormBody, IdPath};
use crate::presentation::http::response::ResponseData;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;

/// Missing form fields bind as empty strings so the validator can report
/// them field by field.
#[derive(Debug, Deserialize)]
pub struct SaveArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ResponseData<Vec<ArticleDto>>>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;

    Ok(Json(ResponseData::of("S-1", "Listing articles.", articles)))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Json<ResponseData<ArticleDto>>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(Json(ResponseData::of("S-1", format!("Article {id}."), article)))
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    FormBody(payload): FormBody<SaveArticleRequest>,
) -> HttpResult<(StatusCode, Json<ResponseData<ArticleDto>>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
    };

    let article = state
        .services
        .article_commands
        .create_article(&actor, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseData::of(
            "S-1",
            "The article has been created.",
            article,
        )),
    ))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    IdPath(id): IdPath,
    FormBody(payload): FormBody<SaveArticleRequest>,
) -> HttpResult<Json<ResponseData<ArticleDto>>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    let article = state
        .services
        .article_commands
        .update_article(&actor, command)
        .await
        .into_http()?;

    Ok(Json(ResponseData::of(
        "S-1",
        format!("Article {id} has been updated."),
        article,
    )))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Json<ResponseData<()>>> {
    state
        .services
        .article_commands
        .delete_article(&actor, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(ResponseData::message_only(
        "S-1",
        format!("Article {id} has been deleted."),
    )))
}
