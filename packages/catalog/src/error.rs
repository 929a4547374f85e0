//! Error types for the catalog crate

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("semester out of range: {0} (expected 1-8)")]
    SemesterOutOfRange(u8),

    #[error("unknown branch: {0}")]
    UnknownBranch(String),

    #[error("bookmark storage error: {0}")]
    Storage(String),
}
