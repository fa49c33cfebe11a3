/// Input validation for user records
///
/// Create and update requests pass through [`validate`] before anything is
/// written. A successful validation yields a [`ValidUser`], the only way to
/// obtain the [`NewUser`] the storage layer accepts from outside this module.
///
/// # Rules
///
/// - `first_name`: any string (presence is guaranteed by the caller's type)
/// - `salary`: must be >= 0
///
/// # Example
///
/// ```
/// use staffql_shared::validation::validate;
///
/// let valid = validate("Ana".to_string(), 50_000).unwrap();
/// assert_eq!(valid.salary(), 50_000);
///
/// let err = validate("Bob".to_string(), -5).unwrap_err();
/// assert_eq!(err.violations[0].field, "salary");
/// ```

use crate::models::user::NewUser;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Shape checked by the validator derive
#[derive(Debug, Validate)]
struct UserDraft {
    first_name: String,

    #[validate(range(min = 0, message = "Salary must be greater than or equal to 0"))]
    salary: i64,
}

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Field that failed validation
    pub field: String,

    /// Human-readable description of the broken constraint
    pub message: String,
}

/// Input rejected at the validation boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", describe(.violations))]
pub struct ValidationError {
    /// Violations, sorted by field name
    pub violations: Vec<FieldViolation>,
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldViolation {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Validation failed: {}", error.code)),
                })
            })
            .collect();
        violations.sort_by(|a, b| a.field.cmp(&b.field));

        Self { violations }
    }
}

/// User fields that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    first_name: String,
    salary: i64,
}

impl ValidUser {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }

    /// Maps the validated input onto the storage record, field by field
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            first_name: self.first_name,
            salary: self.salary,
        }
    }
}

/// Validates user fields for create and update
///
/// # Errors
///
/// Returns a [`ValidationError`] naming each offending field
pub fn validate(first_name: String, salary: i64) -> Result<ValidUser, ValidationError> {
    let draft = UserDraft { first_name, salary };
    draft.validate()?;

    Ok(ValidUser {
        first_name: draft.first_name,
        salary: draft.salary,
    })
}
