use crate::domain::account::AccountId;
use crate::domain::article::entity::Article;

/// Edit and delete are reserved for the owning account.
pub struct CanEditArticleSpec<'a> {
    article: &'a Article,
    account_id: AccountId,
}

impl<'a> CanEditArticleSpec<'a> {
    pub fn new(article: &'a Article, account_id: AccountId) -> Self {
        Self {
            article,
            account_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.account_id == self.account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
    use chrono::Utc;

    fn article_owned_by(account_id: i64) -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            content: ArticleContent::new("content").unwrap(),
            account_id: AccountId::new(account_id).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn owner_may_edit() {
        let article = article_owned_by(5);
        let spec = CanEditArticleSpec::new(&article, AccountId::new(5).unwrap());
        assert!(spec.is_satisfied());
    }

    #[test]
    fn non_owner_may_not_edit() {
        let article = article_owned_by(5);
        let spec = CanEditArticleSpec::new(&article, AccountId::new(6).unwrap());
        assert!(!spec.is_satisfied());
    }
}
