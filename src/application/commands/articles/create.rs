// src/application/commands/articles/create.rs
use super::{ArticleCommandService, validate::validate_save};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedAccount},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedAccount,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        validate_save(&command.title, &command.content)?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            content,
            account_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let id = self.write_repo.insert(new_article).await?;

        // Re-read so the caller sees the record exactly as the store keeps
        // it, server-assigned fields included.
        let created = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_created("article vanished after insert"))?;

        Ok(created.into())
    }
}
