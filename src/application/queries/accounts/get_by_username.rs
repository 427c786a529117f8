use super::AccountQueryService;
use crate::{
    application::{ApplicationResult, dto::AccountDto},
    domain::account::Username,
};

impl AccountQueryService {
    /// Absence is a value; the caller decides how to react to it.
    pub async fn get_account_by_username(
        &self,
        username: &str,
    ) -> ApplicationResult<Option<AccountDto>> {
        let Ok(username) = Username::new(username) else {
            return Ok(None);
        };
        let account = self.account_repo.find_by_username(&username).await?;
        Ok(account.map(Into::into))
    }
}
