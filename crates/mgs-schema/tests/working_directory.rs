//! Integration test: the default search path resolves against the process
//! working directory.
//!
//! Changing the working directory is process-global, so this file holds a
//! single test that walks the three layouts one after another.

use std::fs;
use std::path::Path;

use mgs_schema::{SchemaLoadError, SchemaLoader};
use serde_json::json;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn default_loader_follows_working_directory() {
    let project = tempfile::tempdir().unwrap();
    write(
        project.path(),
        "modules/migration/schemas/issue.json",
        r#"{"title": "issue"}"#,
    );
    write(
        project.path(),
        "modules/migration/schemas/comment.json",
        r#"{"title": "comment"}"#,
    );

    let loader = SchemaLoader::default();
    let original = std::env::current_dir().unwrap();

    // Project root: only the third candidate exists.
    std::env::set_current_dir(project.path()).unwrap();
    assert_eq!(loader.load("issue.json").unwrap(), json!({"title": "issue"}));

    // Parent of the schema directory: second candidate.
    std::env::set_current_dir(project.path().join("modules/migration")).unwrap();
    assert_eq!(
        loader.load("https://example.com/comment.json").unwrap(),
        json!({"title": "comment"})
    );

    // Inside the schema directory: first candidate.
    std::env::set_current_dir(project.path().join("modules/migration/schemas")).unwrap();
    assert_eq!(loader.load("../x/issue.json").unwrap(), json!({"title": "issue"}));

    // Nowhere: error names the project-relative third candidate.
    let err = loader.load("missing.json").unwrap_err();
    match err {
        SchemaLoadError::NotFound { path, .. } => {
            assert_eq!(path, Path::new("modules/migration/schemas/missing.json"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }

    std::env::set_current_dir(original).unwrap();
}
