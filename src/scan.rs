// src/scan.rs
//! Input-directory listing and whole-file reads. The ref dumps live flat in
//! one directory, so this walks exactly one level deep with no extension
//! filter (the format check in `parse` is the gatekeeper, not file names).

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// List the regular files directly inside `dir`, sorted by file name.
/// Deterministic order: OS directory listing order varies across platforms,
/// and last-write-wins folding downstream depends on processing order.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dent in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let dent = dent.with_context(|| format!("listing {}", dir.display()))?;
        if dent.file_type().is_file() {
            files.push(dent.into_path());
        }
    }
    Ok(files)
}

/// Full text of one ref file. Read failures are fatal to the run; only the
/// tagged-format check recovers per file.
pub fn read_file_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/* ================================== Tests ================================== */
