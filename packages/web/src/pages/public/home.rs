//! Home page component

use dioxus::prelude::*;

use catalog::ResourceRecord;

use crate::api::fetch_approved;
use crate::components::{ResourceCard, ResourceCardSkeleton, SiteNav};
use crate::routes::Route;
use crate::state::CategoryTab;

/// Home page - hero search, category tiles, recent resources
#[component]
pub fn Home() -> Element {
    let resources = use_server_future(fetch_approved)?;
    let navigator = use_navigator();

    let mut search_query = use_signal(String::new);

    let records = use_memo(move || match resources.value().read().as_ref() {
        Some(Ok(r)) => r.clone(),
        _ => Vec::<ResourceRecord>::new(),
    });

    // Count resources per category tile
    let tile_counts = use_memo(move || {
        let records = records();
        CategoryTab::variants()
            .iter()
            .map(|tab| {
                let count = match tab.as_criterion() {
                    None => records.len(),
                    Some(category) => records.iter().filter(|r| r.category == category).count(),
                };
                (*tab, count)
            })
            .collect::<Vec<_>>()
    });

    // Latest six approved uploads
    let recent = use_memo(move || {
        let mut records = records();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(6);
        records
    });

    let is_loading = resources.value().read().is_none();

    let handle_search = move |_| {
        let q = search_query().trim().to_string();
        navigator.push(Route::StudyMaterials {
            q,
            category: String::new(),
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-indigo-50 to-white dark:from-gray-950 dark:to-gray-900",

            SiteNav {}

            // Hero Section
            header {
                class: "bg-white dark:bg-gray-900 border-b border-gray-100 dark:border-gray-800",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12",
                    div {
                        class: "text-center max-w-3xl mx-auto",
                        h1 {
                            class: "text-4xl sm:text-5xl font-bold text-gray-900 dark:text-gray-50 mb-4",
                            "StudyVault"
                        }
                        p {
                            class: "text-lg sm:text-xl text-gray-600 dark:text-gray-300 mb-8",
                            "Notes, video lectures, syllabi, and past exam papers for every branch and semester, curated by your campus."
                        }

                        // Search Bar
                        form {
                            class: "relative max-w-xl mx-auto mb-6 flex gap-3",
                            onsubmit: handle_search,
                            input {
                                r#type: "text",
                                placeholder: "Search by title, subject, or author...",
                                value: "{search_query}",
                                oninput: move |e| search_query.set(e.value()),
                                class: "flex-1 px-4 py-3.5 bg-gray-50 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl text-gray-900 dark:text-gray-100 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            }
                            button {
                                r#type: "submit",
                                class: "px-6 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition-colors font-medium",
                                "Search"
                            }
                        }

                        Link {
                            to: Route::Submit {},
                            class: "inline-flex items-center gap-2 px-6 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition-colors font-medium shadow-sm hover:shadow-md",
                            "+ Share Study Material"
                        }
                    }
                }
            }

            // Category Tiles
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div {
                    class: "grid grid-cols-2 md:grid-cols-5 gap-4",
                    for (tab, count) in tile_counts() {
                        Link {
                            key: "{tab:?}",
                            to: Route::StudyMaterials {
                                q: String::new(),
                                category: tab.slug().to_string(),
                            },
                            class: "bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-700 rounded-xl p-5 text-center hover:shadow-md transition-shadow",
                            div { class: "text-3xl mb-2", "{tab.icon()}" }
                            p { class: "text-sm font-medium text-gray-900 dark:text-gray-100", "{tab.label()}" }
                            p { class: "text-xs text-gray-500", "{count} items" }
                        }
                    }
                }
            }

            // Recent Uploads
            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-12",
                h2 {
                    class: "text-xl font-semibold text-gray-900 dark:text-gray-100 mb-6",
                    "Recently Added"
                }

                if is_loading {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for i in 0..6 {
                            ResourceCardSkeleton { key: "{i}" }
                        }
                    }
                } else if recent().is_empty() {
                    p { class: "text-gray-500 text-center py-12", "No resources yet. Be the first to share!" }
                } else {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for record in recent() {
                            ResourceCard { key: "{record.id}", record: record.clone() }
                        }
                    }
                }
            }

            // Footer
            footer {
                class: "bg-white dark:bg-gray-900 border-t border-gray-100 dark:border-gray-800",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 text-center",
                    h2 { class: "text-lg font-semibold text-gray-900 dark:text-gray-100 mb-2", "StudyVault" }
                    p {
                        class: "text-gray-500 text-sm max-w-md mx-auto",
                        "Built by students, for students. Every upload is reviewed before it goes live."
                    }
                }
            }
        }
    }
}
