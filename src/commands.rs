// src/commands.rs

use anyhow::Result;
use std::{env, path::PathBuf};

use crate::pipeline;

const DEFAULT_INPUT_DIR: &str = "./sources/CAS_ref_files";
const OUTPUT_DIR: &str = "./out";

pub fn run_cli() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("build");

    match cmd {
        "build" => build(args.get(2).map(|s| s.as_str()))?,
        "help" | _ => print_help(),
    }
    Ok(())
}

/// Support: `casref build`, `casref build DIR`, or `casref build --input=DIR`.
fn build(arg: Option<&str>) -> Result<()> {
    let input = parse_input(arg).unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
    let out = PathBuf::from(OUTPUT_DIR);

    let map = pipeline::process_all(&input, &out)?;
    if map.is_empty() {
        println!("No records found in {}", input.display());
    }
    println!("Reference tables written to {}", out.display());
    Ok(())
}

fn parse_input(arg: Option<&str>) -> Option<PathBuf> {
    let a = arg?;
    let s = a.trim();
    if let Some(rest) = s.strip_prefix("--input=") {
        return Some(PathBuf::from(rest));
    }
    Some(PathBuf::from(s))
}

fn print_help() {
    println!(
        r#"
casref — CAS registry reference-table builder

USAGE:
    casref build              # Parse ./sources/CAS_ref_files, write ./out tables
    casref build DIR          # Parse ref dumps from DIR instead
    casref build --input=DIR  # Same, flag form
    casref help               # Show this message

Outputs (both in ./out, every field $-quoted):
    CAS_ref_and_names.csv     # cas_number,ing_name — one row per registry number
    CAS_synosyms.csv          # synonym,cas_number — one row per known name

Files that do not start with START_RECORD are reported and skipped.
"#
    );
}

/* ================================== Tests ================================== */
