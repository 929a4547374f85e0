//! Server functions for catalog data
//!
//! The filter engine runs client-side over the full approved collection;
//! these functions are the upstream data source and the admin mutations.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use catalog::{Branch, Category, ResourceContent, ResourceRecord, ReviewStatus, Semester};

/// A user-submitted resource before it becomes a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub category: Category,
    pub title: String,
    pub subject: String,
    pub author: String,
    pub branch: Branch,
    pub semester: Semester,
    pub link: Option<String>,
}

/// Counts shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub notes: usize,
    pub videos: usize,
    pub documents: usize,
    pub papers: usize,
}

/// Fetch the approved catalog, in collection order
#[server]
pub async fn fetch_approved() -> Result<Vec<ResourceRecord>, ServerFnError> {
    Ok(crate::store::approved().await)
}

/// Fetch a single approved resource for the public detail page
#[server]
pub async fn fetch_resource(id: String) -> Result<Option<ResourceRecord>, ServerFnError> {
    Ok(crate::store::by_id(&id)
        .await
        .filter(|r| r.status == ReviewStatus::Approved))
}

/// Count a view on a resource. Fire-and-forget from the caller's side.
#[server]
pub async fn record_view(id: String) -> Result<(), ServerFnError> {
    if crate::store::record_view(&id).await.is_none() {
        tracing::debug!(%id, "view recorded for unknown resource");
    }
    Ok(())
}

/// Submit a new resource for review
#[server]
pub async fn submit_resource(draft: ResourceDraft) -> Result<String, ServerFnError> {
    let title = draft.title.trim().to_string();
    let subject = draft.subject.trim().to_string();
    if title.is_empty() || subject.is_empty() {
        return Err(ServerFnError::new("Title and subject are required"));
    }

    let author = match draft.author.trim() {
        "" => "Anonymous".to_string(),
        author => author.to_string(),
    };
    let content = draft
        .link
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| ResourceContent::Link(l.to_string()));

    let record = ResourceRecord {
        id: uuid::Uuid::new_v4().to_string(),
        category: draft.category,
        title,
        subject,
        author,
        branch: draft.branch,
        semester: draft.semester,
        status: ReviewStatus::Pending,
        views: None,
        rating: None,
        duration_minutes: None,
        content,
        created_at: chrono::Utc::now(),
    };

    let id = record.id.clone();
    crate::store::insert(record).await;
    tracing::info!(%id, "resource submitted for review");
    Ok(id)
}

/// Submissions awaiting review (admin only)
#[server]
pub async fn fetch_pending() -> Result<Vec<ResourceRecord>, ServerFnError> {
    require_admin().await?;
    Ok(crate::store::pending().await)
}

/// A single submission, any status (admin only)
#[server]
pub async fn fetch_submission(id: String) -> Result<Option<ResourceRecord>, ServerFnError> {
    require_admin().await?;
    Ok(crate::store::by_id(&id).await)
}

/// Approve or reject a submission (admin only)
#[server]
pub async fn review_resource(id: String, approve: bool) -> Result<ResourceRecord, ServerFnError> {
    require_admin().await?;

    let status = if approve {
        ReviewStatus::Approved
    } else {
        ReviewStatus::Rejected
    };

    let record = crate::store::set_status(&id, status)
        .await
        .ok_or_else(|| ServerFnError::new("Resource not found"))?;

    tracing::info!(%id, status = status.label(), "resource reviewed");
    Ok(record)
}

/// Dashboard counts (admin only)
#[server]
pub async fn fetch_stats() -> Result<CatalogStats, ServerFnError> {
    require_admin().await?;
    Ok(crate::store::stats().await)
}

#[cfg(feature = "server")]
async fn require_admin() -> Result<(), ServerFnError> {
    match crate::auth::get_session_admin().await? {
        Some(_) => Ok(()),
        None => Err(ServerFnError::new("Admin session required")),
    }
}
