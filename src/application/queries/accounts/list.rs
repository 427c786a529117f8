use super::AccountQueryService;
use crate::application::{ApplicationResult, dto::AccountDto};

impl AccountQueryService {
    pub async fn list_accounts(&self) -> ApplicationResult<Vec<AccountDto>> {
        let accounts = self.account_repo.list().await?;
        Ok(accounts.into_iter().map(Into::into).collect())
    }
}
