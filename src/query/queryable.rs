//! Builder surface for deferred queries.

use crate::expression::Expression;
use crate::query::error::QueryResult;
use crate::query::provider::QueryProvider;
use crate::query::tree::QueryNode;
use crate::record::{ElementType, Record};
use crate::value::Value;
use std::sync::Arc;

/// A query that has been described but not run.
///
/// Chaining methods consume the queryable and return a new one wrapping a
/// larger tree. Nothing touches the backend until [`Queryable::to_vec`] or
/// [`Queryable::iter`] is called, and each of those runs the query afresh.
#[derive(Clone)]
pub struct Queryable<T: Record> {
    provider: Arc<QueryProvider<T>>,
    expression: QueryNode<T>,
}

impl<T: Record> Queryable<T> {
    pub(crate) fn new(provider: Arc<QueryProvider<T>>, expression: QueryNode<T>) -> Self {
        Self {
            provider,
            expression,
        }
    }

    /// The tree built so far
    pub fn expression(&self) -> &QueryNode<T> {
        &self.expression
    }

    pub fn element_type(&self) -> ElementType {
        T::element_type()
    }

    pub fn filter(self, predicate: Expression) -> Self {
        Self {
            provider: self.provider,
            expression: self.expression.filter(predicate),
        }
    }

    /// Shorthand for `filter(field = value)`
    pub fn where_eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter(Expression::field_eq(field, value))
    }

    /// Run the query and collect the rows
    pub fn to_vec(&self) -> QueryResult<Vec<T>> {
        self.provider.evaluate(self.expression.clone())
    }

    /// Run the query and iterate over the rows
    pub fn iter(&self) -> QueryResult<std::vec::IntoIter<T>> {
        Ok(self.to_vec()?.into_iter())
    }
}
