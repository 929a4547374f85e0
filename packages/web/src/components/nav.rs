//! Public site navigation

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{use_bookmarks, use_theme};

/// Top navigation for the public pages: brand, section links, bookmark
/// count, theme toggle
#[component]
pub fn SiteNav() -> Element {
    let theme = use_theme();
    let bookmarks = use_bookmarks();

    rsx! {
        nav {
            class: "bg-white dark:bg-gray-900 border-b border-gray-100 dark:border-gray-800 px-4 sm:px-6 py-3",
            div {
                class: "max-w-7xl mx-auto flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-indigo-700 dark:text-indigo-300",
                        "\u{1F393} StudyVault"
                    }

                    div {
                        class: "hidden md:flex items-center gap-1",
                        SiteNavLink { to: Route::StudyMaterials { q: String::new(), category: String::new() }, label: "Materials" }
                        SiteNavLink { to: Route::Syllabus {}, label: "Syllabus" }
                        SiteNavLink { to: Route::Submit {}, label: "Submit" }
                    }
                }

                div {
                    class: "flex items-center gap-3",

                    // Bookmark count
                    span {
                        class: "inline-flex items-center gap-1 text-sm text-gray-600 dark:text-gray-300",
                        "\u{1F516}"
                        "{bookmarks.count()}"
                    }

                    // Theme toggle
                    button {
                        class: "text-lg px-2 py-1 rounded hover:bg-gray-100 dark:hover:bg-gray-800",
                        onclick: move |_| theme.toggle(),
                        if theme.is_dark() { "\u{2600}" } else { "\u{1F319}" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SiteNavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn SiteNavLink(props: SiteNavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-indigo-100 text-indigo-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
            },
            "{props.label}"
        }
    }
}
