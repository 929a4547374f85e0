//! Resource detail page

use dioxus::prelude::*;

use catalog::ResourceContent;

use crate::api::{fetch_resource, record_view};
use crate::components::{Breadcrumbs, SiteNav};
use crate::routes::Route;
use crate::state::use_bookmarks;

/// Full view of a single approved resource
#[component]
pub fn ResourceDetail(id: String) -> Element {
    let fetch_id = id.clone();
    let resource = use_server_future(move || fetch_resource(fetch_id.clone()))?;

    let bookmarks = use_bookmarks();

    // Count the visit; display doesn't wait on it
    use_effect({
        let id = id.clone();
        move || {
            let id = id.clone();
            spawn(async move {
                let _ = record_view(id).await;
            });
        }
    });

    // The route's terminal segment is the record id; label the crumb with
    // the title once it is known.
    let crumb_title = match resource.value().read().as_ref() {
        Some(Ok(Some(record))) => record.title.clone(),
        _ => "Resource".to_string(),
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-indigo-50 to-white dark:from-gray-950 dark:to-gray-900",

            SiteNav {}

            main {
                class: "max-w-3xl mx-auto px-4 py-8",
                Breadcrumbs { current: crumb_title }

                match resource.value().read().as_ref() {
                    Some(Ok(Some(record))) => {
                        let record = record.clone();
                        let record_id = record.id.clone();
                        let bookmarked = bookmarks.is_bookmarked(&record.id);
                        rsx! {
                            article {
                                class: "bg-white dark:bg-gray-900 rounded-xl border border-gray-200 dark:border-gray-700 p-8",

                                // Badges
                                div {
                                    class: "flex flex-wrap items-center gap-2 mb-4",
                                    span {
                                        class: "inline-flex items-center gap-1.5 px-2.5 py-1 rounded-full text-xs font-medium bg-indigo-100 text-indigo-700",
                                        span { "{record.category.icon()}" }
                                        "{record.category.label()}"
                                    }
                                    span {
                                        class: "px-2.5 py-1 rounded-full text-xs bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300",
                                        "{record.branch.label()}"
                                    }
                                    span {
                                        class: "px-2.5 py-1 rounded-full text-xs bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300",
                                        "{record.semester}"
                                    }
                                }

                                h1 {
                                    class: "text-3xl font-bold text-gray-900 dark:text-gray-50 mb-2",
                                    "{record.title}"
                                }
                                p {
                                    class: "text-gray-600 dark:text-gray-300 mb-1",
                                    "{record.subject}"
                                }
                                p {
                                    class: "text-sm text-gray-500 mb-6",
                                    "by {record.author}"
                                }

                                // Metrics
                                div {
                                    class: "flex items-center gap-6 text-sm text-gray-500 mb-6",
                                    if let Some(views) = record.views {
                                        span { "\u{1F441} {views} views" }
                                    }
                                    if let Some(rating) = record.rating {
                                        span { "\u{2B50} {rating:.1}" }
                                    }
                                    if let Some(minutes) = record.duration_minutes {
                                        span { "\u{23F1} {minutes} min" }
                                    }
                                }

                                // Content payload
                                match &record.content {
                                    Some(ResourceContent::Link(url)) => rsx! {
                                        a {
                                            href: "{url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            class: "inline-flex items-center gap-2 px-5 py-2.5 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors mb-6",
                                            "Open Resource \u{2197}"
                                        }
                                    },
                                    Some(ResourceContent::Inline(text)) => rsx! {
                                        div {
                                            class: "prose dark:prose-invert max-w-none bg-gray-50 dark:bg-gray-800 rounded-lg p-5 mb-6 whitespace-pre-wrap text-sm text-gray-700 dark:text-gray-200",
                                            "{text}"
                                        }
                                    },
                                    None => rsx! {
                                        p { class: "text-sm text-gray-400 mb-6", "No content attached to this resource." }
                                    }
                                }

                                // Bookmark
                                button {
                                    class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-200 rounded-lg hover:bg-gray-200 transition-colors",
                                    onclick: move |_| bookmarks.toggle(&record_id),
                                    if bookmarked { "\u{1F516} Bookmarked" } else { "\u{1F4CC} Bookmark" }
                                }
                            }
                        }
                    },
                    Some(Ok(None)) => rsx! {
                        div {
                            class: "text-center py-16",
                            h2 { class: "text-xl font-semibold text-gray-900 dark:text-gray-100 mb-2", "Resource not found" }
                            p { class: "text-gray-500 mb-6", "It may have been removed or is still under review." }
                            Link {
                                to: Route::StudyMaterials { q: String::new(), category: String::new() },
                                class: "text-indigo-600 hover:text-indigo-700",
                                "Browse study materials \u{2192}"
                            }
                        }
                    },
                    Some(Err(e)) => rsx! {
                        div {
                            class: "text-center py-16",
                            h2 { class: "text-xl font-semibold text-gray-900 dark:text-gray-100 mb-2", "Unable to load resources" }
                            p { class: "text-gray-500", "{e}" }
                        }
                    },
                    None => rsx! {
                        div { class: "text-center py-16 text-gray-500", "Loading..." }
                    }
                }
            }
        }
    }
}
