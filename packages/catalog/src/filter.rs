//! The resource filter engine
//!
//! Given an ordered collection of [`ResourceRecord`]s and a [`Criteria`] set,
//! produce the ordered subsequence of records satisfying every active
//! criterion. The computation is pure: no I/O, no errors, no re-sorting.
//! Callers re-invoke it on every criteria change; at the record volumes this
//! portal targets (tens to low hundreds) a linear scan per invocation is the
//! whole strategy.

use serde::{Deserialize, Serialize};

use crate::types::{Branch, Category, ResourceRecord, Semester};

/// Active filter selections for a browsing screen.
///
/// A criterion is active only when set away from its sentinel: `None` for the
/// selectors, an empty (or whitespace-only) string for the query. Inactive
/// criteria match everything. Criteria live for the duration of a screen and
/// are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub query: String,
    pub category: Option<Category>,
    pub branch: Option<Branch>,
    pub semester: Option<Semester>,
}

impl Criteria {
    /// True when no criterion constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty()
            && self.category.is_none()
            && self.branch.is_none()
            && self.semester.is_none()
    }

    /// Whether a record satisfies every active criterion.
    ///
    /// Selectors match by exact equality. The query matches case-insensitive
    /// substring containment against title, subject, and author; any one of
    /// the three suffices.
    pub fn matches(&self, record: &ResourceRecord) -> bool {
        if let Some(category) = self.category {
            if record.category != category {
                return false;
            }
        }

        if let Some(branch) = self.branch {
            if record.branch != branch {
                return false;
            }
        }

        if let Some(semester) = self.semester {
            if record.semester != semester {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        record.title.to_lowercase().contains(&query)
            || record.subject.to_lowercase().contains(&query)
            || record.author.to_lowercase().contains(&query)
    }
}

/// Stable filter over a record collection.
///
/// Output order is input order; an empty collection yields an empty result.
pub fn filter_records<'a>(
    records: &'a [ResourceRecord],
    criteria: &Criteria,
) -> Vec<&'a ResourceRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResourceContent, ReviewStatus};
    use chrono::Utc;

    fn record(
        id: &str,
        category: Category,
        title: &str,
        subject: &str,
        author: &str,
        branch: Branch,
        semester: u8,
    ) -> ResourceRecord {
        ResourceRecord {
            id: id.to_string(),
            category,
            title: title.to_string(),
            subject: subject.to_string(),
            author: author.to_string(),
            branch,
            semester: Semester::new(semester).unwrap(),
            status: ReviewStatus::Approved,
            views: None,
            rating: None,
            duration_minutes: None,
            content: Some(ResourceContent::Link("https://example.edu".into())),
            created_at: Utc::now(),
        }
    }

    fn sample_collection() -> Vec<ResourceRecord> {
        vec![
            record(
                "1",
                Category::Note,
                "Data Structures & Algorithms Unit 2",
                "Data Structures",
                "Prof. Mehta",
                Branch::Computer,
                3,
            ),
            record(
                "2",
                Category::Video,
                "DBMS Normalization Walkthrough",
                "Database Management",
                "Prof. Iyer",
                Branch::Computer,
                4,
            ),
            record(
                "3",
                Category::Paper,
                "Winter 2025 End-Sem Paper",
                "Thermodynamics",
                "Exam Cell",
                Branch::Mechanical,
                5,
            ),
            record(
                "4",
                Category::Video,
                "Computer Networks Crash Course",
                "Computer Networks",
                "Prof. Shah",
                Branch::InformationTechnology,
                5,
            ),
            record(
                "5",
                Category::Note,
                "Signals and Systems Summary",
                "Signals and Systems",
                "Prof. Kulkarni",
                Branch::Electronics,
                4,
            ),
            record(
                "6",
                Category::Paper,
                "Summer 2025 Mid-Sem Paper",
                "Operating Systems",
                "Exam Cell",
                Branch::Computer,
                4,
            ),
        ]
    }

    fn ids(filtered: &[&ResourceRecord]) -> Vec<String> {
        filtered.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_inactive_criteria_is_identity() {
        let records = sample_collection();
        let criteria = Criteria::default();
        assert!(criteria.is_unconstrained());

        let filtered = filter_records(&records, &criteria);
        assert_eq!(filtered.len(), records.len());
        for (original, kept) in records.iter().zip(filtered) {
            assert_eq!(original, kept);
        }
    }

    #[test]
    fn test_category_filter_is_exact() {
        let records = sample_collection();
        let criteria = Criteria {
            category: Some(Category::Video),
            ..Criteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["2", "4"]);
        assert!(filtered.iter().all(|r| r.category == Category::Video));

        // No false negatives: every video in the input made it through.
        let expected = records
            .iter()
            .filter(|r| r.category == Category::Video)
            .count();
        assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let records = sample_collection();
        let criteria = Criteria {
            branch: Some(Branch::Computer),
            ..Criteria::default()
        };

        // "1", "2", "6" appear in insertion order, never re-sorted.
        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["1", "2", "6"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = sample_collection();
        let criteria = Criteria {
            query: "prof".to_string(),
            semester: Some(Semester::new(4).unwrap()),
            ..Criteria::default()
        };

        let once: Vec<ResourceRecord> = filter_records(&records, &criteria)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_records(&once, &criteria);

        assert_eq!(ids(&twice), once.iter().map(|r| r.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let records = vec![record(
            "1",
            Category::Note,
            "Introduction to Algorithms",
            "Algorithm Design",
            "Prof. Mehta",
            Branch::Computer,
            3,
        )];

        for query in ["algorithms", "ALGORITHMS", "AlGoRiThMs"] {
            let criteria = Criteria {
                query: query.to_string(),
                ..Criteria::default()
            };
            assert_eq!(filter_records(&records, &criteria).len(), 1, "query {query:?}");
        }
    }

    #[test]
    fn test_query_matches_any_text_field() {
        let records = sample_collection();

        // Matches author only.
        let by_author = Criteria {
            query: "iyer".to_string(),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &by_author)), vec!["2"]);

        // Matches subject only.
        let by_subject = Criteria {
            query: "thermo".to_string(),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &by_subject)), vec!["3"]);
    }

    #[test]
    fn test_single_title_query_scenario() {
        let records = sample_collection();
        let criteria = Criteria {
            query: "data structures".to_string(),
            ..Criteria::default()
        };

        let filtered = filter_records(&records, &criteria);
        assert_eq!(ids(&filtered), vec!["1"]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let records = sample_collection();

        // Papers exist and Electronics records exist, but no record is both.
        let criteria = Criteria {
            category: Some(Category::Paper),
            branch: Some(Branch::Electronics),
            ..Criteria::default()
        };
        assert!(filter_records(&records, &criteria).is_empty());

        // And a pairing that does jointly match narrows to exactly it.
        let joint = Criteria {
            category: Some(Category::Paper),
            branch: Some(Branch::Mechanical),
            ..Criteria::default()
        };
        assert_eq!(ids(&filter_records(&records, &joint)), vec!["3"]);
    }

    #[test]
    fn test_whitespace_query_is_inactive() {
        let records = sample_collection();
        let criteria = Criteria {
            query: "   ".to_string(),
            ..Criteria::default()
        };
        assert!(criteria.is_unconstrained());
        assert_eq!(filter_records(&records, &criteria).len(), records.len());
    }

    #[test]
    fn test_empty_collection_yields_empty() {
        let records: Vec<ResourceRecord> = Vec::new();
        let criteria = Criteria {
            query: "anything".to_string(),
            category: Some(Category::Note),
            ..Criteria::default()
        };
        assert!(filter_records(&records, &criteria).is_empty());
    }
}
