//! Predicate expressions attached to filter nodes.
//!
//! This module provides:
//! - The expression AST (field references, literals, operators)
//! - Evaluation of an expression against a single record
//! - Shape matching for the `field = literal` form that can be pushed to a backend

pub mod error;
pub mod eval;
pub mod expr;
pub mod operator;

pub use error::{ExpressionError, ExpressionResult};
pub use eval::{evaluate_expression, evaluate_predicate, ExpressionEvaluator};
pub use expr::{Expression, FieldEquals};
pub use operator::{BinaryOperator, UnaryOperator};
