//! Catalog parsing at the data-source boundary
//!
//! Raw catalog documents are validated here, before any record reaches the
//! filter engine or a renderer. A malformed document normalizes to an empty
//! collection; "unable to load" presentation is the caller's concern.

use crate::types::ResourceRecord;

/// Parse a JSON catalog document into validated records.
///
/// Never panics and never errors: anything that fails to parse as a full
/// record array yields an empty collection, with a warning logged.
pub fn parse_catalog(json: &str) -> Vec<ResourceRecord> {
    match serde_json::from_str::<Vec<ResourceRecord>>(json) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "malformed catalog document, treating as empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Branch, Category};

    const VALID: &str = r#"[
        {
            "id": "v-1",
            "category": "video",
            "title": "Graph Theory Lecture 1",
            "subject": "Discrete Mathematics",
            "author": "Prof. Bose",
            "branch": "computer",
            "semester": 3,
            "status": "APPROVED",
            "durationMinutes": 48,
            "createdAt": "2026-02-01T10:00:00Z"
        }
    ]"#;

    #[test]
    fn test_valid_document_parses() {
        let records = parse_catalog(VALID);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, Category::Video);
        assert_eq!(records[0].branch, Branch::Computer);
        assert_eq!(records[0].duration_minutes, Some(48));
    }

    #[test]
    fn test_malformed_json_yields_empty() {
        assert!(parse_catalog("{ not json").is_empty());
    }

    #[test]
    fn test_wrong_shape_yields_empty() {
        // An object where an array is expected.
        assert!(parse_catalog(r#"{"records": []}"#).is_empty());
        // A record violating the closed schema (semester out of range).
        let bad = VALID.replace("\"semester\": 3", "\"semester\": 11");
        assert!(parse_catalog(&bad).is_empty());
    }

    #[test]
    fn test_empty_array_is_fine() {
        assert!(parse_catalog("[]").is_empty());
    }
}
