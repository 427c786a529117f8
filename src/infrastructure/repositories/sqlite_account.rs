use crate::domain::account::{
    Account, AccountId, AccountRepository, Email, NewAccount, PasswordHash, Username,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ACCOUNT_COLUMNS: &str = "id, username, password_hash, auth_level, nickname, name, mobile_number, email, del_status, del_date, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteAccountRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAccountRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password_hash: String,
    auth_level: i64,
    nickname: String,
    name: String,
    mobile_number: String,
    email: String,
    del_status: i64,
    del_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = DomainError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            auth_level: row.auth_level,
            nickname: row.nickname,
            name: row.name,
            mobile_number: row.mobile_number,
            email: Email::new(row.email)?,
            del_status: row.del_status != 0,
            del_date: row.del_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn insert(&self, account: NewAccount) -> DomainResult<AccountId> {
        let NewAccount {
            username,
            password_hash,
            auth_level,
            nickname,
            name,
            mobile_number,
            email,
            created_at,
            updated_at,
        } = account;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO accounts (username, password_hash, auth_level, nickname, name, mobile_number, email, del_status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, 0, ?, ?) RETURNING id",
        )
        .bind(username.as_str())
        .bind(password_hash.as_str())
        .bind(auth_level)
        .bind(&nickname)
        .bind(&name)
        .bind(&mobile_number)
        .bind(email.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        AccountId::new(id)
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE username = ? AND del_status = 0"
        ))
        .bind(username.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Account::try_from).transpose()
    }

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE username = ? AND del_status = 0)",
        )
        .bind(username.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found != 0)
    }

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = ? AND del_status = 0)",
        )
        .bind(email.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(found != 0)
    }

    async fn list(&self) -> DomainResult<Vec<Account>> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY id"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Account::try_from).collect()
    }
}
