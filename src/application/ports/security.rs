// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// Whether `password` matches `expected_hash`. A mismatch is a value,
    /// not an error; login treats it as a soft business outcome.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}
