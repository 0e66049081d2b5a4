// src/export.rs
//! Delimited-table writers for the two lookup tables.
//!
//! Chemical names lean hard on commas, quotes, and brackets, so every field
//! of every row (headers included) is quoted with `$` instead of `"`; an
//! embedded `$` gets doubled. Row order is the map's first-insertion order.

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::{fs, io::Write, path::Path};

use crate::aggregate::RefMap;

pub const NAMES_FILE: &str = "CAS_ref_and_names.csv";
pub const SYNONYMS_FILE: &str = "CAS_synosyms.csv";

const QUOTE: u8 = b'$';

#[derive(Serialize)]
struct NameRow<'a> {
    cas_number: &'a str,
    ing_name: &'a str,
}

#[derive(Serialize)]
struct SynonymRow<'a> {
    synonym: &'a str,
    cas_number: &'a str,
}

/// One row per registry number, primary name in the second column.
/// Returns the data row count (header excluded).
pub fn write_names_table(map: &RefMap, out: &Path) -> Result<usize> {
    let f = fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_names(map, f)
}

/// One row per (name, registry number) pair, primary name included.
/// Returns the data row count (header excluded).
pub fn write_synonyms_table(map: &RefMap, out: &Path) -> Result<usize> {
    let f = fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_synonyms(map, f)
}

fn write_names<W: Write>(map: &RefMap, w: W) -> Result<usize> {
    let mut wtr = table_writer(w);
    // Explicit header so an empty map still yields a well-formed table.
    wtr.write_record(["cas_number", "ing_name"])
        .context("writing names header")?;
    let mut rows = 0usize;
    for (cas, names) in map.iter() {
        let primary = names.first().map_or("", String::as_str);
        wtr.serialize(NameRow {
            cas_number: cas,
            ing_name: primary,
        })
        .context("serializing names row")?;
        rows += 1;
    }
    wtr.flush().context("flushing names table")?;
    Ok(rows)
}

fn write_synonyms<W: Write>(map: &RefMap, w: W) -> Result<usize> {
    let mut wtr = table_writer(w);
    wtr.write_record(["synonym", "cas_number"])
        .context("writing synonyms header")?;
    let mut rows = 0usize;
    for (cas, names) in map.iter() {
        for name in names {
            wtr.serialize(SynonymRow {
                synonym: name,
                cas_number: cas,
            })
            .context("serializing synonyms row")?;
            rows += 1;
        }
    }
    wtr.flush().context("flushing synonyms table")?;
    Ok(rows)
}

fn table_writer<W: Write>(w: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote(QUOTE)
        .quote_style(QuoteStyle::Always)
        // Headers are written by hand above; keep serde from repeating them.
        .has_headers(false)
        .from_writer(w)
}

/* ================================== Tests ================================== */
