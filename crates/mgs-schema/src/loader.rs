//! # Local Schema Loader
//!
//! Resolves a schema reference to a file in the [`SearchPath`] and decodes
//! it as JSON.
//!
//! Every candidate but the last is probed with `fs::metadata`; the first one
//! that stats successfully is opened. Any stat error, including permission
//! denied, counts as "not there" and moves on. The last candidate is opened
//! without probing, so a total miss reports its open error.
//!
//! Nothing is cached. Each call re-probes and re-decodes, and the file
//! handle never outlives the call.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::SchemaLoadError;
use crate::reference::SchemaReference;
use crate::search_path::SearchPath;

/// Loads schemas referenced by URI from the local filesystem.
///
/// Holds only its search path, so it is `Send + Sync` and cheap to clone
/// into a `jsonschema` retriever.
#[derive(Debug, Clone, Default)]
pub struct SchemaLoader {
    search_path: SearchPath,
}

impl SchemaLoader {
    pub fn new(search_path: SearchPath) -> Self {
        Self { search_path }
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Load and decode the schema behind `reference`.
    ///
    /// # Errors
    ///
    /// - [`SchemaLoadError::Reference`] if `reference` is not a valid URI.
    /// - [`SchemaLoadError::NotFound`] if the selected candidate cannot be opened.
    /// - [`SchemaLoadError::Decode`] if its contents are not valid JSON.
    pub fn load(&self, reference: &str) -> Result<Value, SchemaLoadError> {
        let path = self.locate(reference)?;
        let file = File::open(&path).map_err(|source| SchemaLoadError::NotFound {
            path: path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| SchemaLoadError::Decode { path, source })
    }

    /// The candidate [`load`](Self::load) would open for `reference`.
    ///
    /// Only probes; the returned path is not guaranteed to exist.
    pub fn locate(&self, reference: &str) -> Result<PathBuf, SchemaLoadError> {
        let reference = SchemaReference::parse(reference)?;
        Ok(self.probe(reference.basename()))
    }

    fn probe(&self, basename: &str) -> PathBuf {
        let mut candidates = self.search_path.candidates(basename);
        let last = candidates
            .pop()
            .unwrap_or_else(|| PathBuf::from(basename));
        candidates
            .into_iter()
            .find(|candidate| fs::metadata(candidate).is_ok())
            .unwrap_or(last)
    }
}
