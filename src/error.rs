//! Error types for quarry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuarryError {
    /// The builder chain was exhausted without any builder accepting the
    /// expression. With the standard chain this cannot happen (the catch-all
    /// is always applicable); a custom chain without one can get here.
    #[error("no builder applicable for expression: {expression}")]
    NoApplicableBuilder { expression: String },

    /// IN / NOT IN was handed something other than a list of values.
    #[error("{operator} requires a list of values, got {found}")]
    InOperand {
        operator: &'static str,
        found: String,
    },

    /// A LIKE-family operator was given a non-text right operand.
    #[error("{operator} requires a text pattern, got {found}")]
    PatternType {
        operator: &'static str,
        found: String,
    },

    /// Invalid compiler wiring (empty chain, list operand outside IN, ...).
    #[error("configuration error: {0}")]
    Config(String),
}

impl QuarryError {
    /// Create a chain-exhaustion error for the given expression.
    pub fn no_applicable_builder(expression: impl ToString) -> Self {
        Self::NoApplicableBuilder {
            expression: expression.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for quarry operations.
pub type QuarryResult<T> = Result<T, QuarryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuarryError::no_applicable_builder("a.x <=> 1");
        assert_eq!(
            err.to_string(),
            "no builder applicable for expression: a.x <=> 1"
        );

        let err = QuarryError::config("builder chain is empty");
        assert_eq!(err.to_string(), "configuration error: builder chain is empty");
    }
}
