//! Traversal and rewrite protocol for query trees.
//!
//! A visitor takes a tree by value and hands back a [`Transformed`] tree.
//! The default methods rebuild every node unchanged, so an implementation
//! only overrides the node kinds it cares about. The `transformed` flag is
//! how callers learn whether anything was rewritten; trees carry no
//! identity to compare.
//!
//! Filters are all-or-nothing: [`QueryVisitor::visit_predicate`] either
//! consumes the predicate completely, which drops the filter node, or keeps
//! it, which leaves the node exactly as it was.

use crate::expression::Expression;
use crate::query::error::QueryResult;
use crate::query::tree::QueryNode;
use crate::record::ElementType;

/// A node together with whether a visit changed it
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed<N> {
    pub node: N,
    pub transformed: bool,
}

impl<N> Transformed<N> {
    pub fn yes(node: N) -> Self {
        Self {
            node,
            transformed: true,
        }
    }

    pub fn no(node: N) -> Self {
        Self {
            node,
            transformed: false,
        }
    }
}

/// Outcome of visiting a filter predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateVisit {
    /// The predicate stays; the filter node is rebuilt around its visited input
    Keep,
    /// The visitor took over the predicate; the filter node is dropped
    Consumed,
}

pub trait QueryVisitor<T> {
    fn visit(&mut self, node: QueryNode<T>) -> QueryResult<Transformed<QueryNode<T>>> {
        walk_node(self, node)
    }

    fn visit_source(
        &mut self,
        element_type: ElementType,
    ) -> QueryResult<Transformed<QueryNode<T>>> {
        Ok(Transformed::no(QueryNode::Source(element_type)))
    }

    fn visit_filter(
        &mut self,
        input: QueryNode<T>,
        predicate: Expression,
    ) -> QueryResult<Transformed<QueryNode<T>>> {
        walk_filter(self, input, predicate)
    }

    /// Called after the filter's input has been visited.
    fn visit_predicate(&mut self, _predicate: &Expression) -> QueryResult<PredicateVisit> {
        Ok(PredicateVisit::Keep)
    }

    fn visit_materialized(&mut self, rows: Vec<T>) -> QueryResult<Transformed<QueryNode<T>>> {
        Ok(Transformed::no(QueryNode::Materialized(rows)))
    }
}

/// Dispatch a node to the visitor method for its kind
pub fn walk_node<T, V>(
    visitor: &mut V,
    node: QueryNode<T>,
) -> QueryResult<Transformed<QueryNode<T>>>
where
    V: QueryVisitor<T> + ?Sized,
{
    match node {
        QueryNode::Source(element_type) => visitor.visit_source(element_type),
        QueryNode::Filter { input, predicate } => visitor.visit_filter(*input, predicate),
        QueryNode::Materialized(rows) => visitor.visit_materialized(rows),
    }
}

/// Default filter handling: visit the input first, then the predicate.
pub fn walk_filter<T, V>(
    visitor: &mut V,
    input: QueryNode<T>,
    predicate: Expression,
) -> QueryResult<Transformed<QueryNode<T>>>
where
    V: QueryVisitor<T> + ?Sized,
{
    let input = visitor.visit(input)?;
    match visitor.visit_predicate(&predicate)? {
        PredicateVisit::Consumed => Ok(Transformed::yes(input.node)),
        PredicateVisit::Keep => Ok(Transformed {
            node: input.node.filter(predicate),
            transformed: input.transformed,
        }),
    }
}
