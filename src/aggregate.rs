// src/aggregate.rs
//! Insertion-ordered registry map with last-write-wins folding.
//!
//! Re-inserting an existing registry number replaces its name list but keeps
//! the key's original position, so export order tracks the order keys were
//! first seen across the (sorted) input files. No collision diagnostics: a
//! repeated registry number silently overwrites the earlier name list.

use std::collections::HashMap;

use crate::record::CasRecord;

#[derive(Debug, Default, Clone)]
pub struct RefMap {
    order: Vec<String>,
    entries: HashMap<String, Vec<String>>,
}

impl RefMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed record in.
    pub fn insert(&mut self, rec: CasRecord) {
        if self
            .entries
            .insert(rec.registry_number.clone(), rec.names)
            .is_none()
        {
            self.order.push(rec.registry_number);
        }
    }

    /// Number of distinct registry numbers collected.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, registry_number: &str) -> Option<&[String]> {
        self.entries.get(registry_number).map(Vec::as_slice)
    }

    /// Iterate `(registry_number, names)` in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(|k| (k.as_str(), self.entries[k].as_slice()))
    }

    /// Total `(name, registry_number)` pairs across all keys — the row count
    /// of the synonyms table.
    pub fn synonym_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/* ================================== Tests ================================== */
