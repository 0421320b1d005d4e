//! Input validation support.
//!
//! Request DTOs derive [`validator::Validate`]. The raw [`ValidationErrors`]
//! map is unordered, so each DTO also declares its fields in declaration
//! order via [`ValidatedInput::FIELDS`]; [`ValidationFailure::from_errors`]
//! walks that list to produce a stable, ordered set of [`FieldViolation`]s.
//!
//! Rendering rules (first violation only):
//!
//! | Rule       | Message                                          |
//! |------------|--------------------------------------------------|
//! | `required` | `<Field> is required`                            |
//! | `max`      | `<Field> is should below than <N> characters`    |
//! | `min`      | `<Field> is should more than <N> characters`     |
//! | `gte`      | `<Field> is should greater than <N>`             |
//! | other      | empty string                                     |

use std::fmt;

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Maps a DTO field key (as reported by `validator`) to its display label.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
}

/// The constraint a field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    Min(u64),
    Max(u64),
    Gte(i64),
    Other(String),
}

/// A single failed constraint on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: Rule,
}

impl FieldViolation {
    pub fn message(&self) -> String {
        let field = self.field;
        match &self.rule {
            Rule::Required => format!("{field} is required"),
            Rule::Max(n) => format!("{field} is should below than {n} characters"),
            Rule::Min(n) => format!("{field} is should more than {n} characters"),
            Rule::Gte(n) => format!("{field} is should greater than {n}"),
            Rule::Other(_) => String::new(),
        }
    }
}

/// Ordered collection of field violations for one DTO.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Client-facing message, derived from the first violation.
    pub fn message(&self) -> String {
        self.violations
            .first()
            .map(FieldViolation::message)
            .unwrap_or_default()
    }

    /// Convert `validator` output into ordered violations.
    ///
    /// Fields are visited in the order of `fields`. When a field failed
    /// several constraints, `required` wins; otherwise the first reported
    /// constraint is used. Fields with errors but no matching `FieldSpec` are
    /// ignored.
    pub fn from_errors(errors: &ValidationErrors, fields: &[FieldSpec]) -> Self {
        let violations = fields
            .iter()
            .filter_map(|spec| match errors.errors().get(spec.key) {
                Some(ValidationErrorsKind::Field(list)) => {
                    let error = list
                        .iter()
                        .find(|e| e.code == "required")
                        .or_else(|| list.first())?;
                    Some(FieldViolation {
                        field: spec.label,
                        rule: classify(error),
                    })
                }
                _ => None,
            })
            .collect();
        Self { violations }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Implemented by request DTOs that carry `validator` constraints.
pub trait ValidatedInput: Validate {
    /// Validated fields in declaration order.
    const FIELDS: &'static [FieldSpec];

    fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|errors| {
            CoreError::Validation(ValidationFailure::from_errors(&errors, Self::FIELDS))
        })
    }
}

/// Reject the empty string (the zero value of a text field).
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Reject a zero id (the zero value of a reference field).
///
/// Declare the field as `DbId`: the derive passes a field spelled `i64` by
/// value, which does not match this signature.
pub fn required_id(value: &i64) -> Result<(), ValidationError> {
    if *value == 0 {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn classify(error: &ValidationError) -> Rule {
    match error.code.as_ref() {
        "required" => Rule::Required,
        "length" => classify_length(error),
        "range" => classify_range(error),
        other => Rule::Other(other.to_string()),
    }
}

fn classify_length(error: &ValidationError) -> Rule {
    let len = error
        .params
        .get("value")
        .and_then(Value::as_str)
        .map(|v| v.chars().count() as u64);
    let min = error.params.get("min").and_then(Value::as_u64);
    let max = error.params.get("max").and_then(Value::as_u64);

    match (len, min, max) {
        (Some(len), Some(min), _) if len < min => Rule::Min(min),
        (Some(len), _, Some(max)) if len > max => Rule::Max(max),
        _ => Rule::Other("length".into()),
    }
}

fn classify_range(error: &ValidationError) -> Rule {
    let value = error.params.get("value").and_then(as_integer);
    let min = error.params.get("min").and_then(as_integer);

    match (value, min) {
        (Some(value), Some(min)) if value < min => Rule::Gte(min),
        (None, Some(min)) => Rule::Gte(min),
        _ => Rule::Other("range".into()),
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}
