// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{accounts::AccountCommandService, articles::ArticleCommandService},
        dto::AuthenticatedAccount,
        ports::{
            security::PasswordHasher,
            session::{SessionId, SessionStore},
            time::Clock,
        },
        queries::{accounts::AccountQueryService, articles::ArticleQueryService},
    },
    domain::{
        account::AccountRepository,
        article::{ArticleReadRepository, ArticleWriteRepository},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub account_commands: Arc<AccountCommandService>,
    pub account_queries: Arc<AccountQueryService>,
    account_repo: Arc<dyn AccountRepository>,
    session_store: Arc<dyn SessionStore>,
}

impl ApplicationServices {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let account_commands = Arc::new(AccountCommandService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&session_store),
            Arc::clone(&clock),
        ));
        let account_queries = Arc::new(AccountQueryService::new(Arc::clone(&account_repo)));

        Self {
            article_commands,
            article_queries,
            account_commands,
            account_queries,
            account_repo,
            session_store,
        }
    }

    /// Resolve a session cookie to the acting account. A session nobody
    /// knows about, or one pointing at a vanished account, is Anonymous —
    /// presence of the mapping is the sole authentication signal.
    pub async fn authenticate_session(
        &self,
        session_id: &SessionId,
    ) -> crate::application::ApplicationResult<Option<AuthenticatedAccount>> {
        let Some(account_id) = self.session_store.current_account(session_id).await? else {
            return Ok(None);
        };
        let Some(account) = self.account_repo.find_by_id(account_id).await? else {
            return Ok(None);
        };
        Ok(Some(AuthenticatedAccount::from_account(
            &account,
            session_id.clone(),
        )))
    }
}
