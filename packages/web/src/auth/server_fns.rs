//! Server functions for the admin session
//!
//! These run on the server and handle session management. The portal has a
//! single ambient admin credential configured through the environment; there
//! is deliberately no account system.

use dioxus::prelude::*;

use super::AdminUser;

/// Sign in with the configured admin password. Returns whether the session
/// was established.
#[server]
pub async fn login(username: String, password: String) -> Result<bool, ServerFnError> {
    let Some(expected) = admin_password() else {
        tracing::warn!("ADMIN_PASSWORD is not set, admin login disabled");
        return Ok(false);
    };

    if password != expected {
        tracing::info!(%username, "rejected admin login");
        return Ok(false);
    }

    let admin = AdminUser {
        id: uuid::Uuid::new_v4(),
        username,
    };
    set_session_admin(&admin).await?;

    tracing::info!(username = %admin.username, "admin signed in");
    Ok(true)
}

/// Get the current admin from the session
#[server]
pub async fn current_admin() -> Result<Option<AdminUser>, ServerFnError> {
    get_session_admin().await
}

/// Logout - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
fn admin_password() -> Option<String> {
    std::env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty())
}

#[cfg(feature = "server")]
async fn set_session_admin(admin: &AdminUser) -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .insert("admin", admin)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
pub(crate) async fn get_session_admin() -> Result<Option<AdminUser>, ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .get("admin")
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get admin from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}
