//! Field rule evaluation.
//!
//! # Responsibility
//! - Describe the constraints for one input value (`FieldRule`).
//! - Decide whether a value satisfies every configured constraint.
//!
//! # Invariants
//! - Absent constraints are vacuously satisfied.
//! - Length constraints apply only to text; range constraints only to numbers.
//! - Length is a character count of the untrimmed value.
//! - `validate(rule) == check(rule).is_ok()` for every rule.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Runtime value under validation. The variant selects which rules apply.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// Transient constraint set for one value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldRule {
    pub value: Option<FieldValue>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldRule {
    /// Starts a rule with no constraints for `value`.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// First constraint a value failed.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleViolation {
    /// Value is blank after trimming surrounding whitespace.
    Required,
    TooShort { min_length: usize, actual: usize },
    TooLong { max_length: usize, actual: usize },
    BelowMin { min: f64, actual: f64 },
    AboveMax { max: f64, actual: f64 },
}

impl Display for RuleViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::TooShort { min_length, actual } => {
                write!(f, "length {actual} is shorter than {min_length}")
            }
            Self::TooLong { max_length, actual } => {
                write!(f, "length {actual} is longer than {max_length}")
            }
            Self::BelowMin { min, actual } => write!(f, "value {actual} is below minimum {min}"),
            Self::AboveMax { max, actual } => write!(f, "value {actual} is above maximum {max}"),
        }
    }
}

impl Error for RuleViolation {}

/// Returns whether `rule.value` satisfies every configured constraint.
pub fn validate(rule: &FieldRule) -> bool {
    check(rule).is_ok()
}

/// Evaluates `rule` and reports the first failed constraint.
///
/// Constraints are checked in the order required, min_length, max_length,
/// min, max. A rule without a value only fails `required`.
pub fn check(rule: &FieldRule) -> Result<(), RuleViolation> {
    let Some(value) = rule.value.as_ref() else {
        return if rule.required {
            Err(RuleViolation::Required)
        } else {
            Ok(())
        };
    };

    if rule.required && is_blank(value) {
        return Err(RuleViolation::Required);
    }

    match value {
        FieldValue::Text(text) => {
            let length = text.chars().count();
            if let Some(min_length) = rule.min_length {
                if length < min_length {
                    return Err(RuleViolation::TooShort {
                        min_length,
                        actual: length,
                    });
                }
            }
            if let Some(max_length) = rule.max_length {
                if length > max_length {
                    return Err(RuleViolation::TooLong {
                        max_length,
                        actual: length,
                    });
                }
            }
        }
        FieldValue::Number(number) => {
            let number = *number;
            if let Some(min) = rule.min {
                if number.is_nan() || number < min {
                    return Err(RuleViolation::BelowMin {
                        min,
                        actual: number,
                    });
                }
            }
            if let Some(max) = rule.max {
                if number.is_nan() || number > max {
                    return Err(RuleViolation::AboveMax {
                        max,
                        actual: number,
                    });
                }
            }
        }
    }

    Ok(())
}

fn is_blank(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(text) => text.trim().is_empty(),
        FieldValue::Number(_) => false,
    }
}
