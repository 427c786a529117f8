// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_account;
mod sqlite_article;

pub use sqlite_account::SqliteAccountRepository;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
