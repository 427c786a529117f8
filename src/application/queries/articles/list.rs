use super::ArticleQueryService;
use crate::application::{ApplicationResult, dto::ArticleDto};

impl ArticleQueryService {
    /// All articles in stable insertion order; an empty store is an empty
    /// list, never a failure.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
