// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedAccount,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, specifications::CanEditArticleSpec},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedAccount,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanEditArticleSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the owner may delete this article",
            ));
        }

        self.write_repo.delete(id).await?;
        Ok(())
    }
}
