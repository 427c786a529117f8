use super::{ArticleCommandService, validate::validate_save};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedAccount},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleContent, ArticleId, ArticleTitle, ArticleUpdate,
        specifications::CanEditArticleSpec,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedAccount,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if !CanEditArticleSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the owner may update this article",
            ));
        }

        validate_save(&command.title, &command.content)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;

        article.set_content(title, content, self.clock.now());

        let updated = self.write_repo.update(ArticleUpdate::from(&article)).await?;
        Ok(updated.into())
    }
}
