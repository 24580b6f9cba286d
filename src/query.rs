//! Deferred queries and their rewrite/execution pipeline.
//!
//! A [`Queryable`] records chained operations into a [`QueryNode`] tree.
//! When enumerated, the [`QueryProvider`]:
//! 1. runs the [`PredicateExtractor`] to pull out the filter a backend can run
//! 2. fetches from the [`Backend`](crate::backend::Backend) once
//! 3. runs the [`SourceSplicer`] to put the fetched rows where the source was
//! 4. applies whatever filters remain to those rows
//!
//! Both rewrite steps are [`QueryVisitor`] implementations.

pub mod config;
pub mod error;
pub mod extract;
pub mod provider;
pub mod queryable;
pub mod splice;
pub mod tree;
pub mod visitor;

pub use config::ProviderConfig;
pub use error::{QueryError, QueryResult};
pub use extract::{extract, PredicateExtractor};
pub use provider::QueryProvider;
pub use queryable::Queryable;
pub use splice::{splice, SourceSplicer};
pub use tree::QueryNode;
pub use visitor::{walk_filter, walk_node, PredicateVisit, QueryVisitor, Transformed};
