use crate::application::ApplicationResult;
use crate::application::ports::session::{SessionId, SessionStore};
use crate::domain::account::AccountId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Process-local session store. Sessions are ephemeral; a restart logs
/// every client out.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, AccountId>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, account_id: AccountId) -> ApplicationResult<SessionId> {
        let session_id = Uuid::new_v4().to_string();
        let mut guard = self.sessions.lock().unwrap();
        guard.insert(session_id.clone(), account_id);
        Ok(SessionId::new(session_id))
    }

    async fn current_account(
        &self,
        session_id: &SessionId,
    ) -> ApplicationResult<Option<AccountId>> {
        let guard = self.sessions.lock().unwrap();
        Ok(guard.get(session_id.as_str()).copied())
    }

    async fn destroy(&self, session_id: &SessionId) -> ApplicationResult<()> {
        let mut guard = self.sessions.lock().unwrap();
        guard.remove(session_id.as_str());
        Ok(())
    }
}
