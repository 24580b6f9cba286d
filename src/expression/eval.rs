//! Expression evaluation against a single record.

use crate::expression::{
    BinaryOperator, Expression, ExpressionError, ExpressionResult, UnaryOperator,
};
use crate::record::Record;
use crate::value::Value;
use std::cmp::Ordering;

/// Evaluator for expressions over one record
pub struct ExpressionEvaluator<'a, R: Record> {
    record: &'a R,
}

impl<'a, R: Record> ExpressionEvaluator<'a, R> {
    pub fn new(record: &'a R) -> Self {
        Self { record }
    }

    /// Evaluate an expression and return the result
    pub fn evaluate(&self, expr: &Expression) -> ExpressionResult<Value> {
        match expr {
            Expression::Literal(value) => Ok(value.clone()),

            Expression::Field(name) => {
                self.record
                    .field(name)
                    .ok_or_else(|| ExpressionError::UnknownField {
                        field: name.clone(),
                        element_type: R::element_type().name(),
                    })
            }

            Expression::BinaryOp { op, left, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                self.evaluate_binary_op(*op, left_val, right_val)
            }

            Expression::UnaryOp { op, operand } => {
                let operand_val = self.evaluate(operand)?;
                self.evaluate_unary_op(*op, operand_val)
            }
        }
    }

    fn evaluate_binary_op(
        &self,
        op: BinaryOperator,
        left: Value,
        right: Value,
    ) -> ExpressionResult<Value> {
        if matches!(left, Value::Null) || matches!(right, Value::Null) {
            // Three-valued logic: comparisons with NULL are NULL
            return Ok(match op {
                BinaryOperator::And => match (&left, &right) {
                    (Value::Boolean(false), _) | (_, Value::Boolean(false)) => {
                        Value::Boolean(false)
                    }
                    _ => Value::Null,
                },
                BinaryOperator::Or => match (&left, &right) {
                    (Value::Boolean(true), _) | (_, Value::Boolean(true)) => Value::Boolean(true),
                    _ => Value::Null,
                },
                _ => Value::Null,
            });
        }

        match op {
            BinaryOperator::Eq => self.compare_values(op, &left, &right, |o| o.is_eq()),
            BinaryOperator::Ne => self.compare_values(op, &left, &right, |o| o.is_ne()),
            BinaryOperator::Lt => self.compare_values(op, &left, &right, |o| o.is_lt()),
            BinaryOperator::Le => self.compare_values(op, &left, &right, |o| o.is_le()),
            BinaryOperator::Gt => self.compare_values(op, &left, &right, |o| o.is_gt()),
            BinaryOperator::Ge => self.compare_values(op, &left, &right, |o| o.is_ge()),

            BinaryOperator::And | BinaryOperator::Or => match (&left, &right) {
                (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(
                    if op == BinaryOperator::And { *a && *b } else { *a || *b },
                )),
                _ => Err(ExpressionError::InvalidOperandTypes {
                    operator: op.as_str(),
                    left_type: left.data_type(),
                    right_type: right.data_type(),
                }),
            },
        }
    }

    fn evaluate_unary_op(&self, op: UnaryOperator, operand: Value) -> ExpressionResult<Value> {
        match op {
            UnaryOperator::Not => match operand {
                Value::Null => Ok(Value::Null),
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                _ => Err(ExpressionError::InvalidOperandTypes {
                    operator: op.as_str(),
                    left_type: operand.data_type(),
                    right_type: None,
                }),
            },
            UnaryOperator::IsNull => Ok(Value::Boolean(matches!(operand, Value::Null))),
            UnaryOperator::IsNotNull => Ok(Value::Boolean(!matches!(operand, Value::Null))),
        }
    }

    fn compare_values<F>(
        &self,
        op: BinaryOperator,
        left: &Value,
        right: &Value,
        cmp_fn: F,
    ) -> ExpressionResult<Value>
    where
        F: FnOnce(Ordering) -> bool,
    {
        match left.compare(right) {
            Some(ordering) => Ok(Value::Boolean(cmp_fn(ordering))),
            None => Err(ExpressionError::InvalidOperandTypes {
                operator: op.as_str(),
                left_type: left.data_type(),
                right_type: right.data_type(),
            }),
        }
    }
}

/// Evaluate an expression against a record
pub fn evaluate_expression<R: Record>(expr: &Expression, record: &R) -> ExpressionResult<Value> {
    ExpressionEvaluator::new(record).evaluate(expr)
}

/// Evaluate an expression as a filter predicate.
///
/// NULL is treated as false. Any other non-boolean result is an error.
pub fn evaluate_predicate<R: Record>(expr: &Expression, record: &R) -> ExpressionResult<bool> {
    match evaluate_expression(expr, record)? {
        Value::Boolean(b) => Ok(b),
        Value::Null => Ok(false),
        _ => Err(ExpressionError::NonBooleanPredicate {
            expression: expr.to_string(),
        }),
    }
}
