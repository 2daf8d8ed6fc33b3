//! Shared test utilities for the taplist test suite.

use crate::types::Record;

/// Minimal valid record: name, slug, and tags set, every optional field
/// absent. Tests mutate the fields they exercise.
pub fn record(name: &str, slug: &str, tags: &[&str]) -> Record {
    Record {
        name: Some(name.to_string()),
        slug: Some(slug.to_string()),
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        ..Record::default()
    }
}
