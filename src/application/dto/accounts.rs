use crate::domain::account::Account;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

/// Wire view of an account. Password material never leaves the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: i64,
    pub username: String,
    #[serde(rename = "authLevel")]
    pub auth_level: i64,
    pub nickname: String,
    pub name: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub email: String,
    #[serde(rename = "delStatus")]
    pub del_status: bool,
    #[serde(rename = "delDate", default, with = "serde_time::option")]
    pub del_date: Option<DateTime<Utc>>,
    #[serde(rename = "regDate", with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updateDate", with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.into(),
            username: account.username.into(),
            auth_level: account.auth_level,
            nickname: account.nickname,
            name: account.name,
            mobile_number: account.mobile_number,
            email: account.email.into(),
            del_status: account.del_status,
            del_date: account.del_date,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
