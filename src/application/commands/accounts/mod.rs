// src/application/commands/accounts/mod.rs
mod login;
mod logout;
mod register;
mod service;
mod validate;

pub use login::{LoginCommand, LoginOutcome};
pub use logout::LogoutOutcome;
pub use register::RegisterAccountCommand;
pub use service::AccountCommandService;
