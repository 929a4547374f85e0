//! Breadcrumb trail component

use dioxus::prelude::*;

use crate::routes::Route;

/// Breadcrumb trail derived from the current route path.
///
/// Detail routes end in an opaque record id; they pass `current` so the
/// terminal crumb reads as the record's title instead.
#[component]
pub fn Breadcrumbs(#[props(default)] current: Option<String>) -> Element {
    let route = use_route::<Route>();
    // Crumbs come from the path alone, never the query string
    let full = route.to_string();
    let path = full.split('?').next().unwrap_or("/");
    let crumbs = match current.as_deref() {
        Some(label) => catalog::breadcrumbs_titled(path, label),
        None => catalog::breadcrumbs(path),
    };
    let last = crumbs.len().saturating_sub(1);

    rsx! {
        nav {
            class: "text-sm text-gray-500 dark:text-gray-400 mb-4",
            for (index, crumb) in crumbs.into_iter().enumerate() {
                if index > 0 {
                    span { class: "mx-2", "/" }
                }
                if index == last {
                    span { class: "text-gray-900 dark:text-gray-100 font-medium", "{crumb.label}" }
                } else {
                    Link {
                        to: "{crumb.path}",
                        class: "hover:text-indigo-600",
                        "{crumb.label}"
                    }
                }
            }
        }
    }
}
