//! Business rule validation result

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Result of a business-rule check on a create or update payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BusinessValidation {
    Valid,
    Invalid { message: String, errors: Vec<String> },
}

impl BusinessValidation {
    pub fn invalid(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::Invalid {
            message: message.into(),
            errors,
        }
    }

    /// Single-rule failure where the message doubles as the only error
    pub fn rejected(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Invalid {
            errors: vec![message.clone()],
            message,
        }
    }

    /// Runs the payload's field rules
    pub fn check(payload: &impl Validate) -> Self {
        match payload.validate() {
            Ok(()) => Self::Valid,
            Err(errors) => Self::from_errors(&errors),
        }
    }

    /// Flattens field errors into `field: message` strings, ordered by field
    pub fn from_errors(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let errors = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let text = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, text)
                })
            })
            .collect();

        Self::invalid("Validation failed", errors)
    }

    /// Combines two results; errors accumulate and the first message wins
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::Valid, other) => other,
            (invalid, Self::Valid) => invalid,
            (
                Self::Invalid { message, mut errors },
                Self::Invalid {
                    errors: more_errors,
                    ..
                },
            ) => {
                errors.extend(more_errors);
                Self::Invalid { message, errors }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}
