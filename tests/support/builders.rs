// tests/support/builders.rs
use board_core::application::{
    commands::accounts::RegisterAccountCommand, dto::AuthenticatedAccount,
    ports::session::SessionId,
};
use board_core::domain::account::AccountId;

pub fn actor(id: i64) -> AuthenticatedAccount {
    AuthenticatedAccount {
        id: AccountId::new(id).unwrap(),
        username: format!("member{id}"),
        nickname: format!("nick{id}"),
        session_id: SessionId::new(format!("session-{id}")),
    }
}

pub fn register_command(username: &str, email: &str) -> RegisterAccountCommand {
    RegisterAccountCommand {
        username: username.to_owned(),
        password: "password123".to_owned(),
        nickname: "tester".to_owned(),
        name: "Tester".to_owned(),
        mobile_number: "010-1234-5678".to_owned(),
        email: email.to_owned(),
    }
}
