//! # mgs-schema - Local Schema Resolution
//!
//! Resolves the `$ref` URIs used by migration schemas to files on local disk
//! and decodes them as JSON.
//!
//! ## Loading (`loader`)
//!
//! [`SchemaLoader::load`] reduces a reference to its basename and tries each
//! directory of its [`SearchPath`] in order; the first file that exists is
//! decoded. The default search path is:
//!
//! 1. `<basename>`
//! 2. `schemas/<basename>`
//! 3. `modules/migration/schemas/<basename>`
//!
//! ## Engine Integration (`retrieve`)
//!
//! `SchemaLoader` implements `jsonschema::Retrieve`. [`compile`] loads a root
//! schema and builds a validator whose cross-schema references all go
//! through the loader.
//!
//! ## Crate Policy
//!
//! - Read-only filesystem access. No caching, no network.
//! - The search order is part of the compatibility contract for existing
//!   schema sets; change it only through [`SearchPath`] configuration.

pub mod error;
pub mod loader;
pub mod reference;
pub mod retrieve;
pub mod search_path;

pub use error::{CompileError, ConfigError, ReferenceError, SchemaLoadError};
pub use loader::SchemaLoader;
pub use reference::SchemaReference;
pub use retrieve::compile;
pub use search_path::{SearchConfig, SearchPath, DEFAULT_SEARCH_DIRS};
