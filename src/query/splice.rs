//! Replaces the source placeholder of a tree with fetched rows.

use crate::query::error::{QueryError, QueryResult};
use crate::query::tree::QueryNode;
use crate::query::visitor::{QueryVisitor, Transformed};
use crate::record::ElementType;
use log::trace;

/// Visitor that swaps the first `Source` of a given element type for
/// `Materialized` rows. Tags must match exactly.
pub struct SourceSplicer<T> {
    element_type: ElementType,
    rows: Option<Vec<T>>,
}

impl<T> SourceSplicer<T> {
    pub fn new(element_type: ElementType, rows: Vec<T>) -> Self {
        Self {
            element_type,
            rows: Some(rows),
        }
    }

    pub fn splice(mut self, tree: QueryNode<T>) -> QueryResult<QueryNode<T>> {
        let spliced = self.visit(tree)?;
        if !spliced.transformed {
            return Err(QueryError::SpliceTargetNotFound(self.element_type));
        }
        Ok(spliced.node)
    }
}

impl<T> QueryVisitor<T> for SourceSplicer<T> {
    fn visit_source(
        &mut self,
        element_type: ElementType,
    ) -> QueryResult<Transformed<QueryNode<T>>> {
        if element_type == self.element_type {
            if let Some(rows) = self.rows.take() {
                trace!("Splicing {} rows into Source({})", rows.len(), element_type);
                return Ok(Transformed::yes(QueryNode::Materialized(rows)));
            }
        }
        Ok(Transformed::no(QueryNode::Source(element_type)))
    }
}

/// Replace the `Source(element_type)` node of `tree` with `rows`
pub fn splice<T>(
    tree: QueryNode<T>,
    element_type: ElementType,
    rows: Vec<T>,
) -> QueryResult<QueryNode<T>> {
    SourceSplicer::new(element_type, rows).splice(tree)
}
