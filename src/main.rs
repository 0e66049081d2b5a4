// src/main.rs

use anyhow::Result;

fn main() -> Result<()> {
    casref::commands::run_cli()
}
