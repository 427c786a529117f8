use crate::domain::errors::DomainError;

// SQLite extended result codes for constraint violations.
const CODE_CONSTRAINT_UNIQUE: &str = "2067";
const CODE_CONSTRAINT_PRIMARY_KEY: &str = "1555";
const CODE_CONSTRAINT_FOREIGN_KEY: &str = "787";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if message.contains("accounts.username") {
                return DomainError::Conflict("username already exists".into());
            }
            if message.contains("accounts.email") {
                return DomainError::Conflict("email already exists".into());
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    CODE_CONSTRAINT_UNIQUE | CODE_CONSTRAINT_PRIMARY_KEY => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    CODE_CONSTRAINT_FOREIGN_KEY => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(message.to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
