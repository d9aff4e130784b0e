//! # Error Types
//!
//! One `thiserror` enum per concern. Nothing here retries or logs; every
//! error is handed to the immediate caller, which decides whether to abort
//! schema compilation or report and continue.

use std::path::PathBuf;

use thiserror::Error;

/// A schema reference that is not a well-formed URI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// The URL parser rejected the reference.
    #[error("invalid schema reference: {0}")]
    Url(#[from] url::ParseError),

    /// A `%` not followed by two hexadecimal digits.
    #[error("invalid URL escape {escape:?} at byte {offset}")]
    InvalidEscape {
        /// Byte offset of the `%` in the reference.
        offset: usize,
        /// The offending escape as written (at most three characters).
        escape: String,
    },

    /// An ASCII control character inside the reference.
    #[error("invalid control character in URL at byte {offset}")]
    ControlCharacter {
        /// Byte offset of the control character.
        offset: usize,
    },
}

/// Errors returned by [`SchemaLoader::load`](crate::SchemaLoader::load).
#[derive(Error, Debug)]
pub enum SchemaLoadError {
    /// The reference could not be parsed. Returned before any filesystem access.
    #[error(transparent)]
    Reference(#[from] ReferenceError),

    /// The selected candidate could not be opened. When no candidate exists
    /// this carries the error for the last one in the search path.
    #[error("schema not found at {}: {source}", path.display())]
    NotFound {
        /// The candidate that was opened.
        path: PathBuf,
        /// Error reported by the open call.
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but its contents are not a single JSON document.
    #[error("failed to decode schema {}: {source}", path.display())]
    Decode {
        /// The file that was decoded.
        path: PathBuf,
        /// Error reported by the JSON decoder.
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaLoadError {
    /// The filesystem path involved, if the error got that far.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Reference(_) => None,
            Self::NotFound { path, .. } | Self::Decode { path, .. } => Some(path),
        }
    }
}

/// Errors building a [`SearchPath`](crate::SearchPath) from configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// At least one search directory is required.
    #[error("search path must contain at least one directory")]
    EmptySearchPath,

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`SearchConfig`](crate::SearchConfig).
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors compiling a schema with the local loader installed as retriever.
#[derive(Error, Debug)]
pub enum CompileError {
    /// The root schema itself could not be loaded.
    #[error(transparent)]
    Load(#[from] SchemaLoadError),

    /// The engine rejected the schema, including unresolvable `$ref`s.
    #[error("failed to compile schema {reference}: {reason}")]
    Build {
        /// The reference that was compiled.
        reference: String,
        /// Engine error message.
        reason: String,
    },
}
