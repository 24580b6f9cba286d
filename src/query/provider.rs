//! Query provider: turns a deferred tree into rows.
//!
//! Evaluation runs in four steps on the caller's thread:
//! 1. Extract the key-field equality filter from the tree
//! 2. Fetch from the backend once, with that filter or with none
//! 3. Splice the fetched rows in place of the source node
//! 4. Apply the remaining filters to the rows in memory

use crate::backend::Backend;
use crate::expression::{evaluate_predicate, FieldEquals};
use crate::query::config::ProviderConfig;
use crate::query::error::{QueryError, QueryResult};
use crate::query::extract::PredicateExtractor;
use crate::query::queryable::Queryable;
use crate::query::splice::splice;
use crate::query::tree::QueryNode;
use crate::record::{ElementType, Record};
use log::debug;
use std::sync::Arc;

/// Provider bound to one record type and one backend
pub struct QueryProvider<T: Record> {
    backend: Arc<dyn Backend<T>>,
    config: ProviderConfig,
}

impl<T: Record> QueryProvider<T> {
    pub fn new(backend: Arc<dyn Backend<T>>) -> Self {
        Self::with_config(backend, ProviderConfig::default())
    }

    pub fn with_config(backend: Arc<dyn Backend<T>>, config: ProviderConfig) -> Self {
        Self { backend, config }
    }

    pub fn element_type(&self) -> ElementType {
        T::element_type()
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Start a query over every record of `T`
    pub fn query(self: &Arc<Self>) -> Queryable<T> {
        Queryable::new(Arc::clone(self), QueryNode::source())
    }

    /// Wrap an existing tree in a queryable bound to this provider.
    ///
    /// Fails if the tree's source is tagged with a different element type.
    pub fn create_query(self: &Arc<Self>, tree: QueryNode<T>) -> QueryResult<Queryable<T>> {
        self.check_element_type(&tree)?;
        Ok(Queryable::new(Arc::clone(self), tree))
    }

    fn check_element_type(&self, tree: &QueryNode<T>) -> QueryResult<()> {
        match tree.source_type() {
            Some(actual) if actual != self.element_type() => {
                Err(QueryError::UnsupportedElementType {
                    expected: self.element_type(),
                    actual,
                })
            }
            _ => Ok(()),
        }
    }

    /// Run `tree` against the backend and return the matching rows.
    ///
    /// A tree the backend's rows could not be spliced into is rejected
    /// before anything is fetched.
    pub fn evaluate(&self, tree: QueryNode<T>) -> QueryResult<Vec<T>> {
        let element_type = self.element_type();
        debug!("Evaluating {}", tree);

        self.check_element_type(&tree)?;
        if tree.is_resolved() {
            return Err(QueryError::SpliceTargetNotFound(element_type));
        }

        let (rewritten, key) = PredicateExtractor::new(&self.config.key_field).extract(tree)?;
        if !self.config.local_filtering {
            if let Some(leftover) = rewritten.predicates().first() {
                return Err(QueryError::UnsupportedPredicate(leftover.to_string()));
            }
        }

        let filter = key.map(|value| FieldEquals::new(self.config.key_field.clone(), value));
        match &filter {
            Some(filter) => debug!("Fetching {} where {}", element_type, filter),
            None => debug!("Fetching all {}", element_type),
        }
        let rows = self.backend.fetch(&element_type, filter.as_ref())?;
        debug!("Backend returned {} rows", rows.len());

        let resolved = splice(rewritten, element_type, rows)?;
        debug!("Resolved tree: {}", resolved);
        let result = execute(resolved)?;
        debug!("Query produced {} rows", result.len());
        Ok(result)
    }
}

/// Evaluate a resolved tree, applying filters innermost first
fn execute<T: Record>(node: QueryNode<T>) -> QueryResult<Vec<T>> {
    match node {
        QueryNode::Source(element_type) => Err(QueryError::UnresolvedSource(element_type)),
        QueryNode::Materialized(rows) => Ok(rows),
        QueryNode::Filter { input, predicate } => {
            let rows = execute(*input)?;
            let mut kept = Vec::with_capacity(rows.len());
            for row in rows {
                if evaluate_predicate(&predicate, &row)? {
                    kept.push(row);
                }
            }
            Ok(kept)
        }
    }
}
