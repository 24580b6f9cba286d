//! In-memory backend.
//!
//! Holds a fixed set of records and answers fetches by scanning them. Every
//! fetch is recorded so callers can see what was pushed down. The record set
//! can be written to and read back from a bincode snapshot file.

use crate::backend::Backend;
use crate::expression::{evaluate_predicate, FieldEquals};
use crate::record::{ElementType, Record};
use anyhow::{bail, Context, Result};
use log::debug;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// One call to [`Backend::fetch`]
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRecord {
    pub element_type: ElementType,
    pub filter: Option<FieldEquals>,
}

pub struct MemoryBackend<T> {
    rows: Vec<T>,
    fetch_log: Mutex<Vec<FetchRecord>>,
}

impl<T: Record> MemoryBackend<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            fetch_log: Mutex::new(Vec::new()),
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_log.lock().len()
    }

    pub fn fetch_log(&self) -> Vec<FetchRecord> {
        self.fetch_log.lock().clone()
    }

    /// Rows satisfying `filter`, judged exactly as a local filter would be
    fn select(&self, filter: &FieldEquals) -> Result<Vec<T>> {
        let predicate = filter.to_expression();
        let mut selected = Vec::new();
        for row in &self.rows {
            if evaluate_predicate(&predicate, row)? {
                selected.push(row.clone());
            }
        }
        Ok(selected)
    }
}

impl<T: Record + Serialize + DeserializeOwned> MemoryBackend<T> {
    /// Write the record set to a snapshot file
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create snapshot at {:?}", path))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, &self.rows)
            .with_context(|| format!("Failed to write snapshot at {:?}", path))?;
        writer.flush()?;
        debug!("Saved {} {} records to {:?}", self.rows.len(), T::element_type(), path);
        Ok(())
    }

    /// Load a record set previously written by [`MemoryBackend::save`]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Snapshot file does not exist at {:?}", path);
        }
        let file =
            File::open(path).with_context(|| format!("Failed to open snapshot at {:?}", path))?;
        let rows: Vec<T> = bincode::deserialize_from(BufReader::new(file))
            .with_context(|| format!("Failed to read snapshot at {:?}", path))?;
        debug!("Loaded {} {} records from {:?}", rows.len(), T::element_type(), path);
        Ok(Self::new(rows))
    }
}

impl<T: Record> Backend<T> for MemoryBackend<T> {
    fn fetch(&self, element_type: &ElementType, filter: Option<&FieldEquals>) -> Result<Vec<T>> {
        self.fetch_log.lock().push(FetchRecord {
            element_type: *element_type,
            filter: filter.cloned(),
        });

        if *element_type != T::element_type() {
            bail!(
                "Backend holds {} records, cannot fetch {}",
                T::element_type(),
                element_type
            );
        }

        match filter {
            Some(filter) => self
                .select(filter)
                .with_context(|| format!("Failed to apply {} to {}", filter, element_type)),
            None => Ok(self.rows.clone()),
        }
    }
}
