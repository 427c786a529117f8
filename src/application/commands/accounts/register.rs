use super::{AccountCommandService, validate::validate_registration};
use crate::{
    application::{
        dto::AccountDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::account::{NewAccount, PasswordHash},
};

pub struct RegisterAccountCommand {
    pub username: String,
    pub password: String,
    pub nickname: String,
    pub name: String,
    pub mobile_number: String,
    pub email: String,
}

impl AccountCommandService {
    pub async fn register(&self, command: RegisterAccountCommand) -> ApplicationResult<AccountDto> {
        let (username, email) =
            validate_registration(self.account_repo.as_ref(), &command).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let now = self.clock.now();

        let new_account = NewAccount {
            username,
            password_hash,
            auth_level: 0,
            nickname: command.nickname,
            name: command.name,
            mobile_number: command.mobile_number,
            email,
            created_at: now,
            updated_at: now,
        };

        let id = self.account_repo.insert(new_account).await?;
        let account = self
            .account_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("account vanished after insert"))?;

        Ok(account.into())
    }
}
