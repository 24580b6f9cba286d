//! Error types for expression evaluation.

use crate::value::DataType;
use thiserror::Error;

/// Errors that can occur while evaluating a predicate against a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unknown field '{field}' on {element_type}")]
    UnknownField {
        field: String,
        element_type: &'static str,
    },

    #[error("Invalid operand types for operator {operator}: left={left_type:?}, right={right_type:?}")]
    InvalidOperandTypes {
        operator: &'static str,
        left_type: Option<DataType>,
        right_type: Option<DataType>,
    },

    #[error("Predicate did not evaluate to boolean: {expression}")]
    NonBooleanPredicate { expression: String },
}

/// Result type for expression operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpressionError::UnknownField {
            field: "Email".to_string(),
            element_type: "Person",
        };
        assert_eq!(err.to_string(), "Unknown field 'Email' on Person");

        let err = ExpressionError::InvalidOperandTypes {
            operator: ">",
            left_type: Some(DataType::Int32),
            right_type: Some(DataType::Varchar),
        };
        assert_eq!(
            err.to_string(),
            "Invalid operand types for operator >: left=Some(Int32), right=Some(Varchar)"
        );

        let err = ExpressionError::NonBooleanPredicate {
            expression: "Age".to_string(),
        };
        assert_eq!(err.to_string(), "Predicate did not evaluate to boolean: Age");
    }
}
