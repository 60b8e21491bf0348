//! JSON payloads accepted by the API and their validation rules.

use serde::Serialize;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

pub mod flashcards;
pub mod tags;

/// Result type returned by the form helpers.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while processing a payload.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

impl FormError {
    /// Flatten the error into a list of per-field violations.
    pub fn violations(&self) -> Vec<FieldViolation> {
        match self {
            FormError::Validation(errors) => FieldViolation::from_errors(errors),
        }
    }
}

/// A single rule broken by one field of a payload.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the offending field as it appears in the payload.
    pub field: String,
    /// Machine-readable rule identifier, e.g. `required` or `length`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Collect every field error, sorted by field then code.
    pub fn from_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut violations: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = field.to_string();
                field_errors.iter().map(move |error| Self {
                    field: field.clone(),
                    code: error.code.to_string(),
                    message: match &error.message {
                        Some(message) => message.to_string(),
                        None => default_message(&error.code),
                    },
                })
            })
            .collect();

        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
        violations
    }
}

fn default_message(code: &str) -> String {
    match code {
        "required" => "field is required".to_string(),
        "length" => "value has an invalid length".to_string(),
        "blank" => "value cannot be blank".to_string(),
        "range" => "value is out of range".to_string(),
        other => format!("invalid value ({other})"),
    }
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("value cannot be blank".into()));
    }
    Ok(())
}

pub(crate) fn validate_tag_ids(tag_ids: &[i32]) -> Result<(), ValidationError> {
    if tag_ids.iter().any(|id| *id < 1) {
        return Err(ValidationError::new("range")
            .with_message("tag identifiers must be positive integers".into()));
    }
    Ok(())
}

/// Trim the input and collapse internal whitespace runs into single spaces.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  Spanish \t verbs\n "), "Spanish verbs");
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        let err = validate_not_blank("  \n").expect_err("expected blank rejection");
        assert_eq!(err.code, "blank");
        assert!(validate_not_blank(" x ").is_ok());
    }

    #[test]
    fn tag_ids_must_be_positive() {
        assert!(validate_tag_ids(&[1, 2, 3]).is_ok());
        assert!(validate_tag_ids(&[]).is_ok());
        assert!(validate_tag_ids(&[4, 0]).is_err());
    }

    #[test]
    fn violations_are_sorted_and_carry_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));
        errors.add("back", ValidationError::new("required"));

        let violations = FieldViolation::from_errors(&errors);

        assert_eq!(
            violations,
            vec![
                FieldViolation::new("back", "required", "field is required"),
                FieldViolation::new("name", "length", "value has an invalid length"),
            ]
        );
    }
}
