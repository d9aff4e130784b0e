//! # mgs-cli - CLI Tool for Migration Schemas
//!
//! Provides the `mgs` command-line interface over [`mgs_schema`].
//!
//! ## Subcommands
//!
//! - `mgs load` - Resolve a reference and print the decoded schema.
//! - `mgs locate` - Print the file a reference resolves to.
//! - `mgs compile` - Compile a schema with every `$ref` read from disk.
//!
//! ```bash
//! mgs load issue.json
//! mgs --root /srv/gitea locate https://example.com/schemas/comment.json
//! mgs --search-dir vendor/schemas --search-dir schemas compile release.json
//! ```
//!
//! ## Search Path
//!
//! Flags override the `--config` file, which overrides the built-in default
//! (`.`, `schemas/`, `modules/migration/schemas/`).

pub mod compile;
pub mod load;
pub mod locate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mgs_schema::{SchemaLoader, SearchConfig, SearchPath};

/// Options that shape the search path, shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct SearchArgs {
    /// YAML file with `root` and `search_dirs` keys.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory that relative search directories are joined onto.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Search directory, in probe order. Repeat to add more.
    #[arg(long = "search-dir", global = true, value_name = "DIR")]
    pub search_dirs: Vec<PathBuf>,
}

impl SearchArgs {
    /// Merge flags over the optional config file.
    pub fn to_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_yaml_file(path)
                .with_context(|| format!("loading search config {}", path.display()))?,
            None => SearchConfig::default(),
        };
        if let Some(root) = &self.root {
            config.root = Some(root.clone());
        }
        if !self.search_dirs.is_empty() {
            config.search_dirs = Some(self.search_dirs.clone());
        }
        Ok(config)
    }

    /// Build the loader these options describe.
    pub fn build_loader(&self) -> Result<SchemaLoader> {
        let config = self.to_config()?;
        let search_path = SearchPath::from_config(&config).context("invalid search path")?;
        tracing::debug!(
            root = ?search_path.root(),
            dirs = ?search_path.dirs(),
            "configured search path"
        );
        Ok(SchemaLoader::new(search_path))
    }
}
