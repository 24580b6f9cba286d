//! Deferred query tree.
//!
//! A tree records the chain of operations applied to a source without
//! running any of them. Every chained operation wraps the previous tree by
//! value, so trees are never mutated in place.

use crate::expression::Expression;
use crate::record::{ElementType, Record};
use std::fmt;

/// Node of a deferred query tree
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode<T> {
    /// All records of an element type, not yet fetched
    Source(ElementType),

    /// Keep only the rows of `input` for which `predicate` holds
    Filter {
        input: Box<QueryNode<T>>,
        predicate: Expression,
    },

    /// Rows already fetched from a backend
    Materialized(Vec<T>),
}

impl<T: Record> QueryNode<T> {
    /// Source node for the record type `T`
    pub fn source() -> Self {
        QueryNode::Source(T::element_type())
    }
}

impl<T> QueryNode<T> {
    /// Wrap this tree in a filter. The new filter becomes the outermost node.
    pub fn filter(self, predicate: Expression) -> Self {
        QueryNode::Filter {
            input: Box::new(self),
            predicate,
        }
    }

    /// Source node with an explicit element type tag
    pub fn source_of(element_type: ElementType) -> Self {
        QueryNode::Source(element_type)
    }

    /// The element type of the unresolved source at the bottom of the chain,
    /// or `None` if the tree is already resolved.
    pub fn source_type(&self) -> Option<ElementType> {
        match self {
            QueryNode::Source(element_type) => Some(*element_type),
            QueryNode::Filter { input, .. } => input.source_type(),
            QueryNode::Materialized(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.source_type().is_none()
    }

    /// Number of filter nodes in the chain
    pub fn filter_count(&self) -> usize {
        match self {
            QueryNode::Filter { input, .. } => 1 + input.filter_count(),
            QueryNode::Source(_) | QueryNode::Materialized(_) => 0,
        }
    }

    /// Predicates from innermost to outermost
    pub fn predicates(&self) -> Vec<&Expression> {
        match self {
            QueryNode::Filter { input, predicate } => {
                let mut out = input.predicates();
                out.push(predicate);
                out
            }
            QueryNode::Source(_) | QueryNode::Materialized(_) => Vec::new(),
        }
    }
}

impl<T> fmt::Display for QueryNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryNode::Source(element_type) => write!(f, "Source({})", element_type),
            QueryNode::Filter { input, predicate } => {
                write!(f, "Filter({}) <- {}", predicate, input)
            }
            QueryNode::Materialized(rows) => write!(f, "Materialized({} rows)", rows.len()),
        }
    }
}
