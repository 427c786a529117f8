// tests/support/mocks/security.rs
use async_trait::async_trait;
use board_core::application::{ApplicationResult, ports::security::PasswordHasher};

/// Test double with a recognizable marker format; not a real hasher.
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("stub${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        Ok(expected_hash == format!("stub${password}"))
    }
}
