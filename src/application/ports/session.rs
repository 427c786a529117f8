// src/application/ports/session.rs
use crate::application::ApplicationResult;
use crate::domain::account::AccountId;
use async_trait::async_trait;
use std::fmt;

/// Opaque server-issued session identifier carried by the client cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-side session state. One session maps to at most one account;
/// whether a session resolves to an account is the only authentication
/// signal the rest of the system consults.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, account_id: AccountId) -> ApplicationResult<SessionId>;

    async fn current_account(&self, session_id: &SessionId)
    -> ApplicationResult<Option<AccountId>>;

    /// Destroying an unknown session is a no-op.
    async fn destroy(&self, session_id: &SessionId) -> ApplicationResult<()>;
}
