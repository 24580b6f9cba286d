//! Record types that queries range over.
//!
//! A record exposes its fields by name so predicates can be evaluated
//! against it, and names its element type so trees built for one record
//! type are never resolved with rows of another.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying the record type a query tree carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementType(&'static str);

impl ElementType {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Trait for values a query can return
pub trait Record: Clone + Send + Sync + 'static {
    /// The element type tag for this record type
    fn element_type() -> ElementType;

    /// Look up a field by name. Returns `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}

/// Sample record with a name and an age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub const ELEMENT_TYPE: ElementType = ElementType::new("Person");

    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Record for Person {
    fn element_type() -> ElementType {
        Self::ELEMENT_TYPE
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "Name" => Some(Value::String(self.name.clone())),
            "Age" => Some(Value::Int32(self.age)),
            _ => None,
        }
    }
}
