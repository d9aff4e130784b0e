//! # Locate Subcommand
//!
//! Prints the candidate file a reference resolves to without reading it.
//! When nothing matches, this is the last directory of the search path.

use anyhow::Result;
use clap::Args;

use mgs_schema::SchemaLoader;

/// Arguments for the `mgs locate` subcommand.
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Schema reference to resolve.
    #[arg(value_name = "REFERENCE")]
    pub reference: String,
}

/// Execute the locate subcommand.
///
/// Returns exit code: 0 if the located file exists, 1 otherwise.
pub fn run_locate(args: &LocateArgs, loader: &SchemaLoader) -> Result<u8> {
    let path = match loader.locate(&args.reference) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("FAIL: {}: {e}", args.reference);
            return Ok(1);
        }
    };

    println!("{}", path.display());
    if path.exists() {
        Ok(0)
    } else {
        eprintln!("WARN: {} does not exist", path.display());
        Ok(1)
    }
}
