//! Pulls the one backend-executable predicate out of a query tree.
//!
//! The only shape a backend understands is `key_field = literal`. The first
//! such filter met during the walk (inputs before their own predicate, so
//! the innermost chained filter) is removed from the tree and its value
//! returned. Every other filter, including a second equality on the key
//! field, is left in place for local evaluation.

use crate::expression::Expression;
use crate::query::error::QueryResult;
use crate::query::tree::QueryNode;
use crate::query::visitor::{PredicateVisit, QueryVisitor};
use crate::value::Value;
use log::trace;

pub struct PredicateExtractor {
    key_field: String,
    extracted: Option<Value>,
}

impl PredicateExtractor {
    pub fn new(key_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
            extracted: None,
        }
    }

    /// Rewrite `tree` without the extracted filter and return the extracted value
    pub fn extract<T>(mut self, tree: QueryNode<T>) -> QueryResult<(QueryNode<T>, Option<Value>)> {
        let rewritten = self.visit(tree)?;
        Ok((rewritten.node, self.extracted))
    }
}

impl<T> QueryVisitor<T> for PredicateExtractor {
    fn visit_predicate(&mut self, predicate: &Expression) -> QueryResult<PredicateVisit> {
        if self.extracted.is_some() {
            trace!("Keeping {}: a key filter was already extracted", predicate);
            return Ok(PredicateVisit::Keep);
        }
        match predicate.as_field_equals(&self.key_field) {
            Some(value) => {
                trace!("Extracted {}", predicate);
                self.extracted = Some(value.clone());
                Ok(PredicateVisit::Consumed)
            }
            None => {
                trace!("Keeping {} for local evaluation", predicate);
                Ok(PredicateVisit::Keep)
            }
        }
    }
}

/// Extract the `key_field = literal` filter from `tree`
pub fn extract<T>(
    tree: QueryNode<T>,
    key_field: &str,
) -> QueryResult<(QueryNode<T>, Option<Value>)> {
    PredicateExtractor::new(key_field).extract(tree)
}
