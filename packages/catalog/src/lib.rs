//! StudyVault Catalog
//!
//! Domain model and pure logic for a student-facing academic resource portal:
//! the closed resource record schema, the multi-criteria filter engine used by
//! the browsing screens, bookmark state with pluggable persistence, and
//! breadcrumb derivation from route paths.
//!
//! The crate performs no I/O of its own. Data loading, rendering, and timing
//! concerns (such as debouncing a search box) belong to the application layer;
//! everything here is a total function over in-memory values.
//!
//! # Modules
//!
//! - [`types`] - Resource records and their closed enums
//! - [`filter`] - The resource filter engine ([`Criteria`], [`filter_records`])
//! - [`bookmarks`] - Bookmark set with an injected storage adapter
//! - [`breadcrumbs`] - Route path to breadcrumb segments
//! - [`seed`] - Catalog JSON parsing at the data-source boundary

pub mod bookmarks;
pub mod breadcrumbs;
pub mod error;
pub mod filter;
pub mod seed;
pub mod types;

pub use bookmarks::{BookmarkStorage, BookmarkStore, MemoryStorage};
pub use breadcrumbs::{breadcrumbs, breadcrumbs_titled, Crumb};
pub use error::CatalogError;
pub use filter::{filter_records, Criteria};
pub use types::{
    Branch, Category, ResourceContent, ResourceRecord, ReviewStatus, Semester,
};
