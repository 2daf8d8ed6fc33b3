//! Input loading.
//!
//! Stage 1 of the taplist pipeline: read the JSON data file fully into
//! memory, deserialize into records, and sort by name. Nothing is streamed
//! and nothing is written — a failure here leaves the filesystem untouched.

use crate::types::Record;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input file \"{0}\" does not exist")]
    Missing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and parse the input file in one full-file read.
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Sort records by display name, case-sensitive.
///
/// Sections never reorder: each one shows its matches in this global order.
/// A record with no name sorts as the empty string and then fails validation
/// on the first section pass, before anything is written.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| {
        a.name
            .as_deref()
            .unwrap_or_default()
            .cmp(b.name.as_deref().unwrap_or_default())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::record;
    use tempfile::TempDir;

    fn write_input(tmp: &TempDir, content: &str) -> PathBuf {
        let path = tmp.path().join("locations.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_record_list() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            r#"[
                {"name": "Saints Row Brewing", "slug": "saints-row", "types": ["craft_brewery"]},
                {"name": "Owen's Ordinary", "slug": "owens-ordinary", "types": ["bar", "restaurant"]}
            ]"#,
        );

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Saints Row Brewing"));
        assert!(records[1].has_tag("restaurant"));
    }

    #[test]
    fn missing_input_is_its_own_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_records(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(LoadError::Missing(_))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(&tmp, "[{\"name\": ");
        assert!(matches!(load_records(&path), Err(LoadError::Json(_))));
    }

    #[test]
    fn sort_is_alphabetical_by_name() {
        let mut records = vec![
            record("True Respite", "true-respite", &["craft_brewery"]),
            record("Astro Lab", "astro-lab", &["craft_brewery"]),
            record("Saints Row", "saints-row", &["craft_brewery"]),
        ];
        sort_records(&mut records);
        let names: Vec<_> = records.iter().map(|r| r.name.as_deref().unwrap()).collect();
        assert_eq!(names, vec!["Astro Lab", "Saints Row", "True Respite"]);
    }

    #[test]
    fn sort_is_case_sensitive() {
        // Byte order: uppercase sorts before lowercase
        let mut records = vec![
            record("astro lab", "astro-lab", &["bar"]),
            record("Zed's", "zeds", &["bar"]),
        ];
        sort_records(&mut records);
        assert_eq!(records[0].name.as_deref(), Some("Zed's"));
    }

    #[test]
    fn nameless_record_sorts_first() {
        let mut nameless = record("x", "nameless", &["bar"]);
        nameless.name = None;
        let mut records = vec![record("Astro Lab", "astro-lab", &["bar"]), nameless];
        sort_records(&mut records);
        assert_eq!(records[0].slug.as_deref(), Some("nameless"));
    }
}
