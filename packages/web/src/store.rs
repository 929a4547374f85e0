//! In-memory catalog store (server side)
//!
//! The portal's dataset is a process-local collection seeded from an embedded
//! JSON document on first access. Deliberately no persistence engine: edits
//! live for the lifetime of the server process.

use std::sync::OnceLock;

use tokio::sync::RwLock;

use catalog::{seed, Category, ResourceRecord, ReviewStatus};

use crate::api::CatalogStats;

const SEED_CATALOG: &str = include_str!("../assets/catalog.json");

fn catalog_store() -> &'static RwLock<Vec<ResourceRecord>> {
    static STORE: OnceLock<RwLock<Vec<ResourceRecord>>> = OnceLock::new();
    STORE.get_or_init(|| {
        let records = seed::parse_catalog(SEED_CATALOG);
        tracing::info!(count = records.len(), "seeded catalog store");
        RwLock::new(records)
    })
}

/// Records visible to the public screens, in collection order
pub async fn approved() -> Vec<ResourceRecord> {
    catalog_store()
        .read()
        .await
        .iter()
        .filter(|r| r.status == ReviewStatus::Approved)
        .cloned()
        .collect()
}

/// Submissions awaiting review, in collection order
pub async fn pending() -> Vec<ResourceRecord> {
    catalog_store()
        .read()
        .await
        .iter()
        .filter(|r| r.status == ReviewStatus::Pending)
        .cloned()
        .collect()
}

pub async fn by_id(id: &str) -> Option<ResourceRecord> {
    catalog_store()
        .read()
        .await
        .iter()
        .find(|r| r.id == id)
        .cloned()
}

pub async fn insert(record: ResourceRecord) {
    catalog_store().write().await.push(record);
}

pub async fn set_status(id: &str, status: ReviewStatus) -> Option<ResourceRecord> {
    let mut records = catalog_store().write().await;
    let record = records.iter_mut().find(|r| r.id == id)?;
    record.status = status;
    Some(record.clone())
}

/// Bump a record's view count, returning the new total
pub async fn record_view(id: &str) -> Option<u32> {
    let mut records = catalog_store().write().await;
    let record = records.iter_mut().find(|r| r.id == id)?;
    let views = record.views.unwrap_or(0) + 1;
    record.views = Some(views);
    Some(views)
}

pub async fn stats() -> CatalogStats {
    let records = catalog_store().read().await;

    let by_status = |status: ReviewStatus| records.iter().filter(|r| r.status == status).count();
    let by_category =
        |category: Category| records.iter().filter(|r| r.category == category).count();

    CatalogStats {
        pending: by_status(ReviewStatus::Pending),
        approved: by_status(ReviewStatus::Approved),
        rejected: by_status(ReviewStatus::Rejected),
        notes: by_category(Category::Note),
        videos: by_category(Category::Video),
        documents: by_category(Category::Document),
        papers: by_category(Category::Paper),
    }
}
