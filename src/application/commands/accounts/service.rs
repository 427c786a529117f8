// src/application/commands/accounts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{security::PasswordHasher, session::SessionStore, time::Clock},
    domain::account::AccountRepository,
};

pub struct AccountCommandService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) session_store: Arc<dyn SessionStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AccountCommandService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            session_store,
            clock,
        }
    }
}
