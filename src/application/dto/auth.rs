use crate::application::ports::session::SessionId;
use crate::domain::account::{Account, AccountId};

/// The account a resolved session is acting as.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub username: String,
    pub nickname: String,
    pub session_id: SessionId,
}

impl AuthenticatedAccount {
    pub fn from_account(account: &Account, session_id: SessionId) -> Self {
        Self {
            id: account.id,
            username: account.username.as_str().to_owned(),
            nickname: account.nickname.clone(),
            session_id,
        }
    }
}
