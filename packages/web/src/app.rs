//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;
use crate::state::{use_theme, BookmarkProvider, ThemeProvider};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Ambient state wraps the entire app: theme, bookmarks, admin session
        ThemeProvider {
            BookmarkProvider {
                AuthProvider {
                    Shell {}
                }
            }
        }
    }
}

/// Applies the theme class around the router so every page inherits it
#[component]
fn Shell() -> Element {
    let theme = use_theme();

    rsx! {
        div {
            class: "{theme.root_class()} min-h-screen",
            Router::<Route> {}
        }
    }
}
