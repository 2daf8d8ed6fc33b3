//! Record types shared across the pipeline.
//!
//! A [`Record`] is one business entry (brewery, bottle shop, bar, restaurant)
//! deserialized from the input JSON. Every field is optional at the parse
//! layer, the three required ones included, so that a broken record is
//! reported by [`Record::validate`] with the whole offending entry attached,
//! instead of a bare serde "missing field" error pointing at a byte offset
//! in a file with hundreds of records.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A record lacks one of its required identifying fields.
///
/// `record` is the entry serialized back to compact JSON so it can be found
/// in the data file.
#[derive(Error, Debug)]
#[error("required field \"{field}\" missing in record {record}")]
pub struct MissingFieldError {
    pub field: &'static str,
    pub record: String,
}

/// One business entry from the input file.
///
/// Only `name`, `slug`, and `types` are required (see [`Record::validate`]).
/// Absence of any optional field suppresses just that fragment of the
/// rendered output, never the whole record. Unknown keys in the data file
/// are rejected at parse time to catch typos early.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Display name; also the global sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL-safe anchor id. Uniqueness across the file is the data file's
    /// responsibility, not checked here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Category tags; the record appears once in every matching section.
    #[serde(rename = "types", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Street address. Rendered only when `google_maps_url` is also present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_maps_url: Option<String>,
    /// Digit string, e.g. `"3015551234"`. Formatted for display by
    /// [`crate::format::phone_display`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Free text. Anything other than some spelling of "open" gets a badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yelp_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_advisor_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub untappd_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_advocate_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_beer_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brewery_db_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_url: Option<String>,

    /// `Some(false)` renders a "no food" fragment; `None` renders nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drink_on_premise: Option<bool>,

    /// Free-form notes, emitted literally (the data file may embed markup).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl Record {
    /// Check the required fields, in fixed order: name, slug, types.
    ///
    /// An empty `types` list counts as absent. Read-only and idempotent —
    /// the section renderer calls this once per record per section pass and
    /// every call agrees.
    pub fn validate(&self) -> Result<(), MissingFieldError> {
        if self.name.is_none() {
            return Err(self.missing("name"));
        }
        if self.slug.is_none() {
            return Err(self.missing("slug"));
        }
        if self.tags.as_ref().is_none_or(|tags| tags.is_empty()) {
            return Err(self.missing("types"));
        }
        Ok(())
    }

    /// Whether this record belongs to the given category.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    fn missing(&self, field: &'static str) -> MissingFieldError {
        let record = serde_json::to_string(self)
            .unwrap_or_else(|_| "<unprintable record>".to_string());
        MissingFieldError { field, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::record;

    #[test]
    fn valid_record_passes() {
        let rec = record("Saints Row Brewing", "saints-row", &["craft_brewery"]);
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn missing_name_reported_first() {
        let mut rec = record("x", "x", &["bar"]);
        rec.name = None;
        rec.slug = None;
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn missing_slug_reported_after_name() {
        let mut rec = record("Owen's Ordinary", "owens", &["bar"]);
        rec.slug = None;
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field, "slug");
    }

    #[test]
    fn missing_tags_reported_last() {
        let mut rec = record("Owen's Ordinary", "owens", &["bar"]);
        rec.tags = None;
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field, "types");
    }

    #[test]
    fn empty_tag_list_counts_as_missing() {
        let rec = record("Owen's Ordinary", "owens", &[]);
        let err = rec.validate().unwrap_err();
        assert_eq!(err.field, "types");
    }

    #[test]
    fn error_carries_record_representation() {
        let mut rec = record("Astro Lab", "astro-lab", &["craft_brewery"]);
        rec.name = None;
        let err = rec.validate().unwrap_err();
        assert!(err.record.contains("astro-lab"));
        assert!(err.to_string().contains("\"name\""));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut rec = record("x", "x", &["bar"]);
        rec.slug = None;
        for _ in 0..6 {
            assert_eq!(rec.validate().unwrap_err().field, "slug");
        }
    }

    #[test]
    fn has_tag_matches_any_membership() {
        let rec = record("Dawson's", "dawsons", &["bottle_shop", "restaurant"]);
        assert!(rec.has_tag("bottle_shop"));
        assert!(rec.has_tag("restaurant"));
        assert!(!rec.has_tag("bar"));
    }

    #[test]
    fn has_tag_false_without_tags() {
        let rec = Record::default();
        assert!(!rec.has_tag("bar"));
    }

    #[test]
    fn unknown_keys_rejected_at_parse() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "X", "slug": "x", "types": ["bar"], "fax_number": "1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn sparse_record_parses() {
        let rec: Record = serde_json::from_str(r#"{"name": "X", "slug": "x", "types": ["bar"]}"#).unwrap();
        assert!(rec.address.is_none());
        assert!(rec.food.is_none());
        assert!(rec.notes.is_none());
    }
}
