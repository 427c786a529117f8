// src/domain/article/entity.rs
use crate::domain::account::AccountId;
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub account_id: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(
        &mut self,
        title: ArticleTitle,
        content: ArticleContent,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.content = content;
        self.touch(now);
    }

    // The update timestamp must advance strictly even when the wall clock
    // stands still between two calls.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub account_id: AccountId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
            updated_at: article.updated_at,
        }
    }
}
