//! # Compile Subcommand
//!
//! Builds a validator for a schema with the local loader installed as the
//! `$ref` retriever. Succeeds only if every referenced schema resolves and
//! decodes.

use anyhow::Result;
use clap::Args;

use mgs_schema::SchemaLoader;

/// Arguments for the `mgs compile` subcommand.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Root schema references. Each is compiled independently.
    #[arg(value_name = "REFERENCE", required = true)]
    pub references: Vec<String>,
}

/// Execute the compile subcommand.
///
/// Returns exit code: 0 if all schemas compile, 1 otherwise.
pub fn run_compile(args: &CompileArgs, loader: &SchemaLoader) -> Result<u8> {
    let mut failed = 0usize;
    for reference in &args.references {
        match mgs_schema::compile(loader, reference) {
            Ok(_) => println!("OK: {reference}"),
            Err(e) => {
                failed += 1;
                println!("FAIL: {reference}: {e}");
            }
        }
    }

    tracing::info!(
        total = args.references.len(),
        failed,
        "compiled schemas"
    );

    Ok(if failed > 0 { 1 } else { 0 })
}
