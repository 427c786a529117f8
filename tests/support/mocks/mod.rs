// tests/support/mocks/mod.rs
mod repos;
mod security;
mod time;

pub use repos::{InMemoryAccountRepo, InMemoryArticleStore};
pub use security::StubPasswordHasher;
pub use time::{FixedClock, SteppingClock, fixed_now};
