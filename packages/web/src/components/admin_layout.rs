//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;
use super::{AdminNav, LoadingSpinner, Redirect};

/// Admin layout component that provides navigation and auth protection
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();

    // Check authentication
    if auth.loading.read().clone() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner {}
            }
        };
    }

    // Redirect if no admin session
    if !auth.is_admin() {
        return rsx! {
            Redirect { to: Route::AdminLogin {} }
        };
    }

    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            // Navigation
            AdminNav {}

            // Main content
            main {
                class: "p-6",
                Outlet::<Route> {}
            }
        }
    }
}
