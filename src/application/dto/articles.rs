use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "accountId")]
    pub account_id: i64,
    #[serde(rename = "regDate", with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updateDate", with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            account_id: article.account_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
