//! Resource records and their closed enums
//!
//! The record schema is deliberately closed: every field the renderer or the
//! filter engine touches is an explicit type here, validated when raw data
//! crosses the data-source boundary (see [`crate::seed`]). Nothing downstream
//! duck-types a record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Kind of study content a record holds. Drives icon and badge rendering.
///
/// `Paper` is strictly a past exam question paper; lecture PDFs and slides
/// are `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Note,
    Video,
    Document,
    Paper,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Note => "Notes",
            Category::Video => "Video Lectures",
            Category::Document => "Documents",
            Category::Paper => "Question Papers",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Note => "\u{1F4DD}",     // 📝
            Category::Video => "\u{1F3AC}",    // 🎬
            Category::Document => "\u{1F4C4}", // 📄
            Category::Paper => "\u{1F4DC}",    // 📜
        }
    }

    pub fn variants() -> &'static [Category] {
        &[
            Category::Note,
            Category::Video,
            Category::Document,
            Category::Paper,
        ]
    }
}

/// Institution department a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Computer,
    InformationTechnology,
    Electronics,
    Mechanical,
    Civil,
    Electrical,
}

impl Branch {
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Computer => "Computer Engineering",
            Branch::InformationTechnology => "Information Technology",
            Branch::Electronics => "Electronics",
            Branch::Mechanical => "Mechanical",
            Branch::Civil => "Civil",
            Branch::Electrical => "Electrical",
        }
    }

    /// Stable token used in form values and URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            Branch::Computer => "computer",
            Branch::InformationTechnology => "information_technology",
            Branch::Electronics => "electronics",
            Branch::Mechanical => "mechanical",
            Branch::Civil => "civil",
            Branch::Electrical => "electrical",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Branch, CatalogError> {
        Branch::variants()
            .iter()
            .copied()
            .find(|b| b.slug() == slug)
            .ok_or_else(|| CatalogError::UnknownBranch(slug.to_string()))
    }

    pub fn variants() -> &'static [Branch] {
        &[
            Branch::Computer,
            Branch::InformationTechnology,
            Branch::Electronics,
            Branch::Mechanical,
            Branch::Civil,
            Branch::Electrical,
        ]
    }
}

/// Academic period, 1 through 8. Validated on construction and on
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Semester(u8);

impl Semester {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(number: u8) -> Option<Semester> {
        (Self::MIN..=Self::MAX).contains(&number).then_some(Semester(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Semester> {
        (Self::MIN..=Self::MAX).map(Semester)
    }
}

impl Default for Semester {
    fn default() -> Semester {
        Semester(Self::MIN)
    }
}

impl TryFrom<u8> for Semester {
    type Error = CatalogError;

    fn try_from(number: u8) -> Result<Semester, CatalogError> {
        Semester::new(number).ok_or(CatalogError::SemesterOutOfRange(number))
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> u8 {
        semester.0
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Semester {}", self.0)
    }
}

/// Curation state. Public screens only ever see `Approved` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        }
    }
}

/// Content payload: an external link or inline text/markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ResourceContent {
    Link(String),
    Inline(String),
}

/// A single piece of study content with its descriptive metadata.
///
/// `id` is unique and stable for the lifetime of the collection it belongs
/// to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub subject: String,
    pub author: String,
    pub branch: Branch,
    pub semester: Semester,
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ResourceContent>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_bounds() {
        assert!(Semester::new(0).is_none());
        assert!(Semester::new(1).is_some());
        assert!(Semester::new(8).is_some());
        assert!(Semester::new(9).is_none());
    }

    #[test]
    fn test_semester_serde_rejects_out_of_range() {
        let ok: Result<Semester, _> = serde_json::from_str("3");
        assert_eq!(ok.unwrap().number(), 3);

        let bad: Result<Semester, _> = serde_json::from_str("12");
        assert!(bad.is_err());
    }

    #[test]
    fn test_branch_slug_round_trip() {
        for branch in Branch::variants() {
            assert_eq!(Branch::from_slug(branch.slug()).unwrap(), *branch);
        }
        assert!(Branch::from_slug("astrology").is_err());
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{
            "id": "n-1",
            "category": "note",
            "title": "Operating Systems Unit 1",
            "subject": "Operating Systems",
            "author": "Prof. Rao",
            "branch": "computer",
            "semester": 4,
            "status": "APPROVED",
            "views": 120,
            "content": { "kind": "link", "value": "https://example.edu/os-u1.pdf" },
            "createdAt": "2026-01-10T08:00:00Z"
        }"#;

        let record: ResourceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Note);
        assert_eq!(record.branch, Branch::Computer);
        assert_eq!(record.semester.number(), 4);
        assert_eq!(record.status, ReviewStatus::Approved);
        assert_eq!(
            record.content,
            Some(ResourceContent::Link(
                "https://example.edu/os-u1.pdf".to_string()
            ))
        );
        assert_eq!(record.rating, None);
    }
}
