//! Query layer error types.

use crate::expression::ExpressionError;
use crate::record::ElementType;
use thiserror::Error;

/// Errors raised while building or evaluating a deferred query.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Cannot create a query for element {actual}: provider supports {expected}")]
    UnsupportedElementType {
        expected: ElementType,
        actual: ElementType,
    },

    #[error("No Source({0}) node to splice fetched rows into")]
    SpliceTargetNotFound(ElementType),

    #[error("Source({0}) is still unresolved at evaluation")]
    UnresolvedSource(ElementType),

    #[error("Predicate '{0}' cannot be sent to the backend and local filtering is disabled")]
    UnsupportedPredicate(String),

    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
