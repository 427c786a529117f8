pub mod accounts;
pub mod articles;
pub mod auth;
pub mod serde_time;

pub use accounts::AccountDto;
pub use articles::ArticleDto;
pub use auth::AuthenticatedAccount;
