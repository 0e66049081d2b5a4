// src/parse.rs
//! Parser for the tagged SciFinder export format: records between
//! `START_RECORD`/`END_RECORD` markers, each carrying `FIELD ` sub-blocks of
//! which exactly three tags are interpreted. Plain marker splitting — the
//! format is flat, so no grammar or state machine is warranted.

use memchr::{memchr, memmem};

use crate::record::CasRecord;

pub const START_MARKER: &str = "START_RECORD";
pub const END_MARKER: &str = "END_RECORD";
const FIELD_MARKER: &str = "FIELD ";

const REGISTRY_TAG: &str = "Registry Number:";
const PRIMARY_TAG: &str = "CA Index Name:";
const SYNONYMS_TAG: &str = "Other Names:";

/// The only validation the pipeline performs: a well-formed dump begins with
/// the literal start marker. Anything else gets skipped by the caller.
pub fn is_tagged_format(text: &str) -> bool {
    text.starts_with(START_MARKER)
}

/// Split a whole file's text on `END_RECORD` and parse every segment.
///
/// The segment after the last marker is parsed too. It normally holds only
/// trailing whitespace and yields the degenerate unregistered record, which
/// downstream folding keeps as a harmless `"Nope"` entry.
pub fn parse_ref_text(text: &str) -> Vec<CasRecord> {
    split_on(text, END_MARKER)
        .into_iter()
        .map(parse_record)
        .collect()
}

/// One record segment: split on `FIELD ` and pull the three tagged values.
/// A tag appearing in several sub-fields keeps its last occurrence, an
/// artifact of how the dumps stack repeated manual searches.
fn parse_record(rec: &str) -> CasRecord {
    let mut registry: Option<&str> = None;
    let mut primary = "";
    let mut synonyms = "";

    for fld in split_on(rec, FIELD_MARKER) {
        if fld.contains(REGISTRY_TAG) {
            registry = Some(value_to_newline(fld));
        }
        if fld.contains(PRIMARY_TAG) {
            primary = value_to_newline(fld);
        }
        if fld.contains(SYNONYMS_TAG) {
            // Semicolon list; may span lines, runs to the end of the sub-field.
            synonyms = value_to_end(fld);
        }
    }

    CasRecord::assemble(registry, primary, synonyms.split(';'))
}

/* ----------------------------- helpers ----------------------------- */

/// `str::split` semantics (head, between-markers, trailing tail) driven by a
/// memmem search so long dumps scan fast.
fn split_on<'h>(hay: &'h str, marker: &str) -> Vec<&'h str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for hit in memmem::find_iter(hay.as_bytes(), marker.as_bytes()) {
        parts.push(&hay[start..hit]);
        start = hit + marker.len();
    }
    parts.push(&hay[start..]);
    parts
}

/// Text after the sub-field's first `:`, up to (not including) its first
/// newline, or to the end of the sub-field when no newline follows.
/// Verbatim — no trim, callers decide about case.
fn value_to_newline(fld: &str) -> &str {
    let rest = after_colon(fld);
    match memchr(b'\n', rest.as_bytes()) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Everything after the sub-field's first `:`.
fn value_to_end(fld: &str) -> &str {
    after_colon(fld)
}

fn after_colon(fld: &str) -> &str {
    match memchr(b':', fld.as_bytes()) {
        Some(i) => &fld[i + 1..],
        None => "",
    }
}

/* ================================== Tests ================================== */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::UNREGISTERED;

    #[test]
    fn tagged_format_check_is_a_prefix_check() {
        assert!(is_tagged_format("START_RECORD\nFIELD x"));
        assert!(!is_tagged_format(" START_RECORD"));
        assert!(!is_tagged_format("Copyright (C) 2019"));
        assert!(!is_tagged_format(""));
    }

    #[test]
    fn single_record_with_all_tags() {
        let text = "START_RECORD\n\
                    FIELD Registry Number:123-45-6\n\
                    FIELD CA Index Name:acetone\n\
                    FIELD Other Names:Dimethyl Ketone; 2-Propanone\n\
                    END_RECORD";
        let recs = parse_ref_text(text);
        // The real record plus the trailing-segment artifact.
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].registry_number, "123-45-6");
        assert_eq!(
            recs[0].names,
            vec!["acetone", "dimethyl ketone", "2-propanone"]
        );
        assert_eq!(recs[1].registry_number, UNREGISTERED);
        assert_eq!(recs[1].names, vec![String::new()]);
    }

    #[test]
    fn missing_registry_number_gets_sentinel() {
        let text = "START_RECORD\nFIELD CA Index Name:Benzene\nEND_RECORD";
        let recs = parse_ref_text(text);
        assert_eq!(recs[0].registry_number, UNREGISTERED);
        assert_eq!(recs[0].names, vec!["benzene"]);
    }

    #[test]
    fn values_keep_whitespace_after_colon() {
        let text = "START_RECORD\nFIELD Registry Number: 7732-18-5\nEND_RECORD";
        let recs = parse_ref_text(text);
        assert_eq!(recs[0].registry_number, " 7732-18-5");
    }

    #[test]
    fn trailing_empty_synonym_is_dropped() {
        let text = "START_RECORD\nFIELD Other Names: water;\nEND_RECORD";
        let recs = parse_ref_text(text);
        // Primary slot stays empty; the lone synonym survives the split.
        assert_eq!(recs[0].names, vec!["", "water"]);
    }

    #[test]
    fn repeated_tag_keeps_last_occurrence() {
        let text = "START_RECORD\n\
                    FIELD Registry Number:1-11-1\n\
                    FIELD Registry Number:2-22-2\n\
                    FIELD CA Index Name:first\n\
                    FIELD CA Index Name:second\n\
                    END_RECORD";
        let recs = parse_ref_text(text);
        assert_eq!(recs[0].registry_number, "2-22-2");
        assert_eq!(recs[0].primary_name(), "second");
    }

    #[test]
    fn tag_value_without_trailing_newline() {
        let text = "START_RECORD\nFIELD Registry Number:64-17-5";
        let recs = parse_ref_text(text);
        assert_eq!(recs[0].registry_number, "64-17-5");
    }

    #[test]
    fn synonym_list_spans_lines() {
        let text = "START_RECORD\n\
                    FIELD Other Names:Ethanol; Ethyl\n alcohol; Grain alcohol\n\
                    END_RECORD";
        let recs = parse_ref_text(text);
        assert_eq!(
            recs[0].names,
            vec!["", "ethanol", "ethyl\n alcohol", "grain alcohol"]
        );
    }

    #[test]
    fn multiple_records_in_one_file() {
        let text = "START_RECORD\n\
                    FIELD Registry Number:50-00-0\n\
                    FIELD CA Index Name:Formaldehyde\n\
                    END_RECORD\n\
                    START_RECORD\n\
                    FIELD Registry Number:64-17-5\n\
                    FIELD CA Index Name:Ethanol\n\
                    END_RECORD\n";
        let recs = parse_ref_text(text);
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].registry_number, "50-00-0");
        assert_eq!(recs[1].registry_number, "64-17-5");
        assert_eq!(recs[2].registry_number, UNREGISTERED);
    }

    #[test]
    fn split_on_matches_str_split() {
        assert_eq!(split_on("a;b;", ";"), vec!["a", "b", ""]);
        assert_eq!(split_on("nosep", ";"), vec!["nosep"]);
        assert_eq!(split_on("", ";"), vec![""]);
    }

    #[test]
    fn other_field_tags_are_ignored() {
        let text = "START_RECORD\n\
                    FIELD Molecular Formula:CH2O\n\
                    FIELD Registry Number:50-00-0\n\
                    FIELD Source of Registration:CAS\n\
                    END_RECORD";
        let recs = parse_ref_text(text);
        assert_eq!(recs[0].registry_number, "50-00-0");
        assert_eq!(recs[0].names, vec![String::new()]);
    }
}
