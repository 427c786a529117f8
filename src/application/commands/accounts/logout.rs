use super::AccountCommandService;
use crate::application::{ApplicationResult, dto::AuthenticatedAccount};

/// Logging out while Anonymous is a no-op, not an error.
pub enum LogoutOutcome {
    NotLoggedIn,
    LoggedOut,
}

impl AccountCommandService {
    pub async fn logout(
        &self,
        current: Option<&AuthenticatedAccount>,
    ) -> ApplicationResult<LogoutOutcome> {
        match current {
            None => Ok(LogoutOutcome::NotLoggedIn),
            Some(actor) => {
                // The whole session dies with the mapping; a fresh login
                // always gets a fresh session id.
                self.session_store.destroy(&actor.session_id).await?;
                Ok(LogoutOutcome::LoggedOut)
            }
        }
    }
}
