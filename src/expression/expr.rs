//! Expression AST definitions.

use crate::expression::operator::{BinaryOperator, UnaryOperator};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicate expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal constant value
    Literal(Value),

    /// Named record field
    Field(String),

    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
}

impl Expression {
    /// Create a literal expression
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    /// Create a field reference expression
    pub fn field(name: impl Into<String>) -> Self {
        Expression::Field(name.into())
    }

    /// Create a binary operation expression
    pub fn binary_op(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a unary operation expression
    pub fn unary_op(op: UnaryOperator, operand: Expression) -> Self {
        Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::And, left, right)
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Or, left, right)
    }

    pub fn not_expr(operand: Expression) -> Self {
        Self::unary_op(UnaryOperator::Not, operand)
    }

    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Eq, left, right)
    }

    pub fn ne(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Ne, left, right)
    }

    pub fn lt(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Lt, left, right)
    }

    pub fn le(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Le, left, right)
    }

    pub fn gt(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Gt, left, right)
    }

    pub fn ge(left: Expression, right: Expression) -> Self {
        Self::binary_op(BinaryOperator::Ge, left, right)
    }

    pub fn is_null(operand: Expression) -> Self {
        Self::unary_op(UnaryOperator::IsNull, operand)
    }

    pub fn is_not_null(operand: Expression) -> Self {
        Self::unary_op(UnaryOperator::IsNotNull, operand)
    }

    /// Shorthand for `field = literal`
    pub fn field_eq(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::eq(Self::field(name), Self::literal(value))
    }

    /// Match the exact shape `Field(field) = Literal(v)` and return `v`.
    ///
    /// A reversed comparison (`literal = field`) or any other operator does
    /// not match.
    pub fn as_field_equals(&self, field: &str) -> Option<&Value> {
        match self {
            Expression::BinaryOp {
                op: BinaryOperator::Eq,
                left,
                right,
            } => match (left.as_ref(), right.as_ref()) {
                (Expression::Field(name), Expression::Literal(value)) if name == field => {
                    Some(value)
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Field(name) => write!(f, "{}", name),
            Expression::BinaryOp { op, left, right } if op.is_comparison() => {
                write!(f, "{} {} {}", left, op.as_str(), right)
            }
            Expression::BinaryOp { op, left, right } => {
                write!(f, "({} {} {})", left, op.as_str(), right)
            }
            Expression::UnaryOp {
                op: UnaryOperator::Not,
                operand,
            } => write!(f, "NOT {}", operand),
            Expression::UnaryOp { op, operand } => write!(f, "{} {}", operand, op.as_str()),
        }
    }
}

/// Equality filter on a single field, as handed to a backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEquals {
    pub field: String,
    pub value: Value,
}

impl FieldEquals {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn to_expression(&self) -> Expression {
        Expression::field_eq(self.field.clone(), self.value.clone())
    }
}

impl fmt::Display for FieldEquals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_field_equals() {
        let expr = Expression::field_eq("Name", "Dan");
        assert_eq!(expr.as_field_equals("Name"), Some(&Value::from("Dan")));
        assert_eq!(expr.as_field_equals("Age"), None);

        // Reversed operands are not the recognized shape
        let reversed = Expression::eq(Expression::literal("Dan"), Expression::field("Name"));
        assert_eq!(reversed.as_field_equals("Name"), None);

        // Neither is a comparison against another field
        let field_to_field = Expression::eq(Expression::field("Name"), Expression::field("Alias"));
        assert_eq!(field_to_field.as_field_equals("Name"), None);

        let gt = Expression::gt(Expression::field("Name"), Expression::literal("Dan"));
        assert_eq!(gt.as_field_equals("Name"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Expression::field_eq("Name", "Dan").to_string(), "Name = 'Dan'");
        let expr = Expression::and(
            Expression::gt(Expression::field("Age"), Expression::literal(10)),
            Expression::not_expr(Expression::is_null(Expression::field("Name"))),
        );
        assert_eq!(expr.to_string(), "(Age > 10 AND NOT Name IS NULL)");
        assert_eq!(FieldEquals::new("Name", "Dan").to_string(), "Name = 'Dan'");
    }

    #[test]
    fn test_field_equals_to_expression() {
        let filter = FieldEquals::new("Name", "Dan");
        let expr = filter.to_expression();
        assert_eq!(expr.as_field_equals("Name"), Some(&filter.value));
    }
}
