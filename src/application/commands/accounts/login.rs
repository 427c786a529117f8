use super::AccountCommandService;
use crate::{
    application::{
        ApplicationResult,
        dto::{AccountDto, AuthenticatedAccount},
        ports::session::SessionId,
    },
    domain::account::Username,
};

pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// The Anonymous -> Authenticated transition. The three rejections are
/// anticipated business outcomes, not failures of the error taxonomy.
pub enum LoginOutcome {
    AlreadyAuthenticated,
    UnknownUsername,
    InvalidCredentials,
    LoggedIn {
        session_id: SessionId,
        account: AccountDto,
    },
}

impl AccountCommandService {
    pub async fn login(
        &self,
        current: Option<&AuthenticatedAccount>,
        command: LoginCommand,
    ) -> ApplicationResult<LoginOutcome> {
        if current.is_some() {
            return Ok(LoginOutcome::AlreadyAuthenticated);
        }

        // A name that cannot exist is indistinguishable from an unknown one.
        let Ok(username) = Username::new(command.username) else {
            return Ok(LoginOutcome::UnknownUsername);
        };
        let Some(account) = self.account_repo.find_by_username(&username).await? else {
            return Ok(LoginOutcome::UnknownUsername);
        };

        let matches = self
            .password_hasher
            .verify(&command.password, account.password_hash.as_str())
            .await?;
        if !matches {
            return Ok(LoginOutcome::InvalidCredentials);
        }

        let session_id = self.session_store.create(account.id).await?;
        Ok(LoginOutcome::LoggedIn {
            session_id,
            account: account.into(),
        })
    }
}
