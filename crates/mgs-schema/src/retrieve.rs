//! # Engine Integration
//!
//! Installs [`SchemaLoader`] as the `jsonschema` retriever so that every
//! external `$ref` the engine cannot resolve on its own is read from the
//! local search path. No network requests are made.
//!
//! Relative `$ref`s in a schema without `$id` arrive here resolved against
//! the engine's default base (`json-schema:///`); only the basename matters,
//! so they land on the same file either way.

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use crate::error::CompileError;
use crate::loader::SchemaLoader;

impl Retrieve for SchemaLoader {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri = uri.as_str();
        match self.load(uri) {
            Ok(value) => {
                tracing::debug!(uri, "retrieved schema reference");
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(uri, error = %e, "schema reference unresolved");
                Err(Box::new(e))
            }
        }
    }
}

/// Load `reference` through `loader` and compile it with `loader` installed
/// as the retriever for all cross-schema `$ref`s.
///
/// # Errors
///
/// [`CompileError::Load`] if the root schema cannot be loaded;
/// [`CompileError::Build`] if the engine rejects it or a `$ref` fails.
pub fn compile(loader: &SchemaLoader, reference: &str) -> Result<Validator, CompileError> {
    let schema = loader.load(reference)?;
    jsonschema::options()
        .with_retriever(loader.clone())
        .build(&schema)
        .map_err(|e| CompileError::Build {
            reference: reference.to_string(),
            reason: e.to_string(),
        })
}
