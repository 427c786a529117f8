use super::register::RegisterAccountCommand;
use crate::{
    application::error::{ApplicationError, ApplicationResult, FieldViolation},
    domain::{
        account::{AccountRepository, Email, Username},
        errors::DomainError,
    },
};

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 50;

fn domain_reason(err: DomainError) -> String {
    match err {
        DomainError::Validation(msg) => msg,
        other => other.to_string(),
    }
}

/// Runs every check and reports all violated fields at once, one entry per
/// field, in field order. Uniqueness is only consulted for fields that
/// passed their shape checks.
pub(super) async fn validate_registration(
    repo: &dyn AccountRepository,
    command: &RegisterAccountCommand,
) -> ApplicationResult<(Username, Email)> {
    let mut violations = Vec::new();

    let username = match Username::new(command.username.clone()) {
        Ok(username) => Some(username),
        Err(err) => {
            violations.push(FieldViolation::new(
                "username",
                &command.username,
                domain_reason(err),
            ));
            None
        }
    };

    validate_password(&command.password, &mut violations);

    for (field, value) in [
        ("nickname", &command.nickname),
        ("name", &command.name),
        ("mobileNumber", &command.mobile_number),
    ] {
        if value.trim().is_empty() {
            violations.push(FieldViolation::new(
                field,
                value,
                format!("{field} must not be blank"),
            ));
        }
    }

    let email = match Email::new(command.email.clone()) {
        Ok(email) => Some(email),
        Err(err) => {
            violations.push(FieldViolation::new(
                "email",
                &command.email,
                domain_reason(err),
            ));
            None
        }
    };

    if let Some(username) = &username {
        if repo.exists_by_username(username).await? {
            violations.push(FieldViolation::new(
                "username",
                username.as_str(),
                "username is already in use",
            ));
        }
    }
    if let Some(email) = &email {
        if repo.exists_by_email(email).await? {
            violations.push(FieldViolation::new(
                "email",
                email.as_str(),
                "email is already in use",
            ));
        }
    }

    match (username, email) {
        (Some(username), Some(email)) if violations.is_empty() => Ok((username, email)),
        _ => Err(ApplicationError::validation(violations)),
    }
}

// Credential material never becomes a value object; the policy check is
// all the application layer needs before hashing. The rejected value is
// never echoed back for this field.
fn validate_password(password: &str, violations: &mut Vec<FieldViolation>) {
    if password.trim().is_empty() {
        violations.push(FieldViolation::new(
            "password",
            "",
            "password must not be blank",
        ));
        return;
    }
    let length = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&length) {
        violations.push(FieldViolation::new(
            "password",
            "",
            format!("password must be {PASSWORD_MIN_LEN} to {PASSWORD_MAX_LEN} characters long"),
        ));
    }
}
