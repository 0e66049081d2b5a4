// src/pipeline.rs
//! End-to-end fold: scan the input directory, parse every tagged dump,
//! aggregate into one `RefMap`, write both lookup tables, report counts.
//! Strictly sequential; the map is the only state and it is owned here.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::{aggregate::RefMap, export, parse, scan};

/// How much of a non-tagged file to echo in the skip warning.
const SNIFF_CHARS: usize = 15;

/// Process every file in `input_dir` and write both tables under `out_dir`.
/// Returns the accumulated map for callers that want to keep querying it.
pub fn process_all(input_dir: &Path, out_dir: &Path) -> Result<RefMap> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut map = RefMap::new();
    for path in scan::list_input_files(input_dir)? {
        let text = scan::read_file_text(&path)?;
        if !parse::is_tagged_format(&text) {
            let head: String = text.chars().take(SNIFF_CHARS).collect();
            eprintln!(
                "[build] warn: {} does not look like tagged format (starts {head:?}); skipped",
                path.display()
            );
            continue;
        }
        for rec in parse::parse_ref_text(&text) {
            map.insert(rec);
        }
    }
    println!("Number of CAS references collected: {}", map.len());

    let names_path = out_dir.join(export::NAMES_FILE);
    export::write_names_table(&map, &names_path)
        .with_context(|| format!("writing {}", names_path.display()))?;

    let syn_path = out_dir.join(export::SYNONYMS_FILE);
    let syn_rows = export::write_synonyms_table(&map, &syn_path)
        .with_context(|| format!("writing {}", syn_path.display()))?;
    println!("Number of synonyms: {syn_rows}");

    Ok(map)
}
