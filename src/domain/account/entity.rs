// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountId, Email, PasswordHash, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub auth_level: i64,
    pub nickname: String,
    pub name: String,
    pub mobile_number: String,
    pub email: Email,
    pub del_status: bool,
    pub del_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub password_hash: PasswordHash,
    pub auth_level: i64,
    pub nickname: String,
    pub name: String,
    pub mobile_number: String,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
