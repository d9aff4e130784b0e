//! # Load Subcommand
//!
//! Resolves a reference and writes the decoded schema to stdout.

use anyhow::Result;
use clap::Args;

use mgs_schema::SchemaLoader;

/// Arguments for the `mgs load` subcommand.
#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Schema reference, e.g. `issue.json` or `https://host/schemas/issue.json`.
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// Print on a single line instead of pretty-printing.
    #[arg(long)]
    pub compact: bool,
}

/// Execute the load subcommand.
///
/// Returns exit code: 0 on success, 1 if the schema cannot be loaded.
pub fn run_load(args: &LoadArgs, loader: &SchemaLoader) -> Result<u8> {
    let schema = match loader.load(&args.reference) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("FAIL: {}: {e}", args.reference);
            return Ok(1);
        }
    };

    let rendered = if args.compact {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(0)
}
