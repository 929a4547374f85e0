//! Authentication context provider

use dioxus::prelude::*;

use super::server_fns::current_admin;
use super::AdminUser;

/// Authentication context that provides admin session state to the app
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current signed-in admin (if any)
    pub admin: Signal<Option<AdminUser>>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    /// Check if an admin session is active
    pub fn is_admin(&self) -> bool {
        self.admin.read().is_some()
    }

    /// Refresh the auth state from the server session
    pub async fn refresh(&self) {
        let mut admin = self.admin;
        match current_admin().await {
            Ok(current) => {
                admin.set(current);
            }
            Err(_) => {
                admin.set(None);
            }
        }
        let mut loading = self.loading;
        loading.set(false);
    }

    /// Clear the auth state (logout)
    pub fn clear(&self) {
        let mut admin = self.admin;
        admin.set(None);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let admin = use_signal(|| None::<AdminUser>);
    let loading = use_signal(|| true);

    let auth = AuthContext { admin, loading };

    use_context_provider(|| auth.clone());

    // Load initial auth state
    use_effect(move || {
        let auth = auth.clone();
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
