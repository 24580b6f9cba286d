//! Record stores a query provider fetches from.
//!
//! The provider calls [`Backend::fetch`] exactly once per evaluation, with
//! the single equality filter it could push down or with none. How records
//! are stored and transported is up to the backend.

use crate::expression::FieldEquals;
use crate::record::{ElementType, Record};
use anyhow::Result;

pub mod memory;

pub use memory::{FetchRecord, MemoryBackend};

/// Trait for record stores
pub trait Backend<T: Record>: Send + Sync {
    /// Fetch the records of `element_type`, narrowed by `filter` if given.
    fn fetch(&self, element_type: &ElementType, filter: Option<&FieldEquals>) -> Result<Vec<T>>;
}
