// src/record.rs
//! Per-substance record parsed from a tagged SciFinder dump.
//!
//! Invariants:
//! - `names[0]` is the primary (CA index) name, lower-cased, possibly empty.
//! - Everything after index 0 is a synonym: trimmed, lower-cased, non-empty,
//!   and not a duplicate of any name already in the list.
//! - `registry_number` is kept verbatim; records that never declared one get
//!   the `UNREGISTERED` sentinel.

use serde::{Deserialize, Serialize};

/// Sentinel registry number for records with no `Registry Number:` field.
pub const UNREGISTERED: &str = "Nope";

/// One chemical substance entry: registry number plus its ordered name list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CasRecord {
    pub registry_number: String,
    /// Primary name first, then unique synonyms in first-seen order.
    pub names: Vec<String>,
}

impl CasRecord {
    /// Build a record from the raw tagged values. The primary name always
    /// occupies slot 0 (even when empty), so synonym deduplication sees it.
    pub fn assemble<'a, I>(registry_number: Option<&str>, primary: &str, synonyms: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rec = Self {
            registry_number: registry_number.unwrap_or(UNREGISTERED).to_string(),
            names: vec![primary.to_lowercase()],
        };
        for raw in synonyms {
            rec.push_synonym(raw);
        }
        rec
    }

    /// Append one `Other Names:` entry. Trims and lower-cases; drops the
    /// entry if it comes out empty or duplicates anything already collected.
    pub fn push_synonym(&mut self, raw: &str) {
        let syn = raw.trim().to_lowercase();
        if syn.is_empty() {
            return;
        }
        if self.names.iter().any(|n| n == &syn) {
            return;
        }
        self.names.push(syn);
    }

    pub fn primary_name(&self) -> &str {
        self.names.first().map_or("", String::as_str)
    }

    pub fn is_registered(&self) -> bool {
        self.registry_number != UNREGISTERED
    }
}

impl Default for CasRecord {
    fn default() -> Self {
        Self::assemble(None, "", std::iter::empty())
    }
}

/* ================================== Tests ================================== */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_degenerate() {
        let r = CasRecord::default();
        assert_eq!(r.registry_number, UNREGISTERED);
        assert_eq!(r.names, vec![String::new()]);
        assert!(!r.is_registered());
    }

    #[test]
    fn assemble_lowercases_primary_only() {
        let r = CasRecord::assemble(Some("50-00-0"), "Formaldehyde", std::iter::empty());
        assert_eq!(r.registry_number, "50-00-0");
        assert_eq!(r.primary_name(), "formaldehyde");
        assert!(r.is_registered());
    }

    #[test]
    fn registry_number_is_verbatim() {
        // Leading whitespace after the colon survives; only names normalize.
        let r = CasRecord::assemble(Some(" 7732-18-5"), "water", std::iter::empty());
        assert_eq!(r.registry_number, " 7732-18-5");
    }

    #[test]
    fn synonyms_trim_dedup_and_skip_empty() {
        let r = CasRecord::assemble(
            Some("67-64-1"),
            "Acetone",
            ["  Dimethyl Ketone ", "", "2-Propanone", "dimethyl ketone", "ACETONE"],
        );
        assert_eq!(r.names, vec!["acetone", "dimethyl ketone", "2-propanone"]);
    }

    #[test]
    fn synonym_matching_primary_is_dropped() {
        let mut r = CasRecord::assemble(None, "water", std::iter::empty());
        r.push_synonym(" Water ");
        assert_eq!(r.names, vec!["water"]);
    }
}
