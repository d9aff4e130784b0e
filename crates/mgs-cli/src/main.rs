//! # mgs CLI entry point
//!
//! Parses command-line arguments, builds the schema loader from the search
//! options, and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mgs_cli::compile::{run_compile, CompileArgs};
use mgs_cli::load::{run_load, LoadArgs};
use mgs_cli::locate::{run_locate, LocateArgs};
use mgs_cli::SearchArgs;

/// Migration schema toolkit.
///
/// Resolves schema references against a local search path, prints decoded
/// schemas, and checks that cross-schema references compile.
#[derive(Parser, Debug)]
#[command(name = "mgs", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    search: SearchArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a reference and print the decoded schema.
    Load(LoadArgs),

    /// Print the file a reference resolves to.
    Locate(LocateArgs),

    /// Compile schemas with all `$ref`s resolved from the search path.
    Compile(CompileArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let loader = match cli.search.build_loader() {
        Ok(loader) => loader,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let result = match cli.command {
        Commands::Load(args) => run_load(&args, &loader),
        Commands::Locate(args) => run_locate(&args, &loader),
        Commands::Compile(args) => run_compile(&args, &loader),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
