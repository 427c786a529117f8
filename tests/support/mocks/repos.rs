// tests/support/mocks/repos.rs
use async_trait::async_trait;
use board_core::domain::account::{
    Account, AccountId, AccountRepository, Email, NewAccount, Username,
};
use board_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use board_core::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/* -------------------------------- articles -------------------------------- */

/// Per-test in-memory article store; implements both repository traits so
/// one instance backs reads and writes.
pub struct InMemoryArticleStore {
    inner: Mutex<ArticleStoreInner>,
}

#[derive(Default)]
struct ArticleStoreInner {
    rows: BTreeMap<i64, Article>,
    last_id: i64,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ArticleStoreInner::default()),
        }
    }
}

impl Default for InMemoryArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let id = ArticleId::new(inner.last_id)?;
        let row = Article {
            id,
            title: article.title,
            content: article.content,
            account_id: article.account_id,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        let row_id = inner.last_id;
        inner.rows.insert(row_id, row);
        Ok(id)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut inner = self.inner.lock().unwrap();
        let row = inner
            .rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.title = update.title;
        row.content = update.content;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.rows.remove(&i64::from(id));
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().cloned().collect())
    }
}

/* -------------------------------- accounts -------------------------------- */

pub struct InMemoryAccountRepo {
    inner: Mutex<AccountRepoInner>,
}

#[derive(Default)]
struct AccountRepoInner {
    rows: BTreeMap<i64, Account>,
    last_id: i64,
}

impl InMemoryAccountRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(AccountRepoInner::default()),
        }
    }
}

impl Default for InMemoryAccountRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn insert(&self, account: NewAccount) -> DomainResult<AccountId> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let id = AccountId::new(inner.last_id)?;
        let row = Account {
            id,
            username: account.username,
            password_hash: account.password_hash,
            auth_level: account.auth_level,
            nickname: account.nickname,
            name: account.name,
            mobile_number: account.mobile_number,
            email: account.email,
            del_status: false,
            del_date: None,
            created_at: account.created_at,
            updated_at: account.updated_at,
        };
        let row_id = inner.last_id;
        inner.rows.insert(row_id, row);
        Ok(id)
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Account>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .find(|account| !account.del_status && account.username.as_str() == username.as_str())
            .cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .any(|account| !account.del_status && account.email.as_str() == email.as_str()))
    }

    async fn list(&self) -> DomainResult<Vec<Account>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().cloned().collect())
    }
}
