use crate::domain::account::entity::{Account, NewAccount};
use crate::domain::account::value_objects::{AccountId, Email, Username};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account and return the store-assigned identifier.
    async fn insert(&self, account: NewAccount) -> DomainResult<AccountId>;

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Account>>;

    /// Uniqueness checks consider non-deleted accounts only.
    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool>;

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool>;

    /// All accounts, in stable insertion order.
    async fn list(&self) -> DomainResult<Vec<Account>>;
}
