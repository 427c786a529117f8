use crate::application::error::{ApplicationError, ApplicationResult, FieldViolation};

/// Collects one violation per blank field, in field order.
pub(super) fn validate_save(title: &str, content: &str) -> ApplicationResult<()> {
    let mut violations = Vec::new();

    if title.trim().is_empty() {
        violations.push(FieldViolation::new(
            "title",
            title,
            "title must not be blank",
        ));
    }
    if content.trim().is_empty() {
        violations.push(FieldViolation::new(
            "content",
            content,
            "content must not be blank",
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::validation(violations))
    }
}
