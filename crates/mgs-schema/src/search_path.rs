//! # Search Path
//!
//! The ordered directories a basename is probed in. The default order keeps
//! the same schema files loadable whether the process runs from the schema
//! directory itself, from its parent, or from the project root:
//!
//! 1. `<basename>`
//! 2. `schemas/<basename>`
//! 3. `modules/migration/schemas/<basename>`
//!
//! Directories are relative to the process working directory unless a root
//! is set. A [`SearchConfig`] YAML file can replace either part:
//!
//! ```yaml
//! root: /srv/app
//! search_dirs:
//!   - schemas
//!   - vendor/schemas
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Directories probed by [`SearchPath::default`], in order.
pub const DEFAULT_SEARCH_DIRS: [&str; 3] = ["", "schemas", "modules/migration/schemas"];

/// Ordered, non-empty list of candidate directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    root: Option<PathBuf>,
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Build a search path from an ordered list of directories.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySearchPath`] if `dirs` is empty.
    pub fn new<I, P>(dirs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let dirs: Vec<PathBuf> = dirs.into_iter().map(Into::into).collect();
        if dirs.is_empty() {
            return Err(ConfigError::EmptySearchPath);
        }
        Ok(Self { root: None, dirs })
    }

    /// Resolve relative directories against `root` instead of the working
    /// directory. Absolute directories are unaffected.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Build from a parsed [`SearchConfig`], falling back to the default
    /// directories when the config names none.
    pub fn from_config(config: &SearchConfig) -> Result<Self, ConfigError> {
        let path = match &config.search_dirs {
            Some(dirs) => Self::new(dirs.iter().cloned())?,
            None => Self::default(),
        };
        Ok(match &config.root {
            Some(root) => path.with_root(root.clone()),
            None => path,
        })
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Candidate file paths for `basename`, one per directory, in probe order.
    pub fn candidates(&self, basename: &str) -> Vec<PathBuf> {
        self.dirs
            .iter()
            .map(|dir| match &self.root {
                Some(root) => root.join(dir).join(basename),
                None => dir.join(basename),
            })
            .collect()
    }
}

impl Default for SearchPath {
    fn default() -> Self {
        Self {
            root: None,
            dirs: DEFAULT_SEARCH_DIRS.iter().map(PathBuf::from).collect(),
        }
    }
}

/// On-disk configuration for a [`SearchPath`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Directory that relative search directories are joined onto.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Ordered search directories. `None` means the default three.
    #[serde(default)]
    pub search_dirs: Option<Vec<PathBuf>>,
}

impl SearchConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Read and parse a YAML configuration file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order() {
        let candidates = SearchPath::default().candidates("issue.json");
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("issue.json"),
                PathBuf::from("schemas/issue.json"),
                PathBuf::from("modules/migration/schemas/issue.json"),
            ]
        );
    }

    #[test]
    fn root_prefixes_relative_dirs() {
        let path = SearchPath::new(["schemas", "/opt/shared"])
            .unwrap()
            .with_root("/srv/app");
        assert_eq!(
            path.candidates("label.json"),
            vec![
                PathBuf::from("/srv/app/schemas/label.json"),
                PathBuf::from("/opt/shared/label.json"),
            ]
        );
        assert_eq!(path.root(), Some(Path::new("/srv/app")));
    }

    #[test]
    fn empty_search_path_rejected() {
        let err = SearchPath::new(Vec::<PathBuf>::new()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySearchPath));
    }

    #[test]
    fn config_with_dirs_and_root() {
        let config = SearchConfig::from_yaml_str(
            "root: /data\nsearch_dirs:\n  - a\n  - b/c\n",
        )
        .unwrap();
        let path = SearchPath::from_config(&config).unwrap();
        assert_eq!(
            path.candidates("x.json"),
            vec![
                PathBuf::from("/data/a/x.json"),
                PathBuf::from("/data/b/c/x.json"),
            ]
        );
    }

    #[test]
    fn config_without_dirs_uses_default() {
        let config = SearchConfig::from_yaml_str("root: /data\n").unwrap();
        let path = SearchPath::from_config(&config).unwrap();
        assert_eq!(path.dirs().len(), 3);
        assert_eq!(
            path.candidates("x.json")[2],
            PathBuf::from("/data/modules/migration/schemas/x.json")
        );
    }

    #[test]
    fn config_with_empty_dir_list_rejected() {
        let config = SearchConfig::from_yaml_str("search_dirs: []\n").unwrap();
        assert!(matches!(
            SearchPath::from_config(&config),
            Err(ConfigError::EmptySearchPath)
        ));
    }

    #[test]
    fn unknown_config_key_rejected() {
        assert!(SearchConfig::from_yaml_str("dirs: [a]\n").is_err());
    }

    #[test]
    fn config_file_errors_carry_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        let err = SearchConfig::from_yaml_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { ref path, .. } if path == &missing));

        let bad = dir.path().join("bad.yaml");
        std::fs::write(&bad, "search_dirs: {").unwrap();
        let err = SearchConfig::from_yaml_file(&bad).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
