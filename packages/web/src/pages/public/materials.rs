//! Study materials page - the main filter/search screen

use dioxus::prelude::*;

use catalog::{filter_records, Branch, Criteria, ResourceRecord, Semester};

use crate::api::fetch_approved;
use crate::components::{Breadcrumbs, ResourceCard, ResourceCardSkeleton, SiteNav};
use crate::state::CategoryTab;

/// How long typing must settle before the filter recomputes. Purely a
/// responsiveness choice; the filter itself has no notion of time.
#[cfg(feature = "web")]
const DEBOUNCE_MS: u32 = 250;

/// Study materials page - filter the approved catalog by query, category,
/// branch, and semester. Both arrive as query params so the home screen's
/// search box and category tiles can deep-link a preselected view.
#[component]
pub fn StudyMaterials(q: String, category: String) -> Element {
    let resources = use_server_future(fetch_approved)?;

    // Raw input updates on every keystroke; the criteria only see the
    // debounced value.
    let mut raw_query = use_signal(|| q.clone());
    let mut query = use_signal(|| q.clone());
    let mut active_tab = use_signal(|| CategoryTab::from_slug(&category));
    let mut branch = use_signal(|| None::<Branch>);
    let mut semester = use_signal(|| None::<Semester>);

    // Delay-and-supersede: commit the input only if it is still current
    // after the debounce interval.
    use_effect(move || {
        let current = raw_query();
        spawn(async move {
            #[cfg(feature = "web")]
            gloo_timers::future::TimeoutFuture::new(DEBOUNCE_MS).await;
            if *raw_query.peek() == current {
                query.set(current);
            }
        });
    });

    let criteria = use_memo(move || Criteria {
        query: query(),
        category: active_tab().as_criterion(),
        branch: branch(),
        semester: semester(),
    });

    // Recomputed on every criteria change; a linear scan is plenty at this
    // catalog size.
    let filtered = use_memo(move || {
        let records = match resources.value().read().as_ref() {
            Some(Ok(r)) => r.clone(),
            _ => vec![],
        };
        let criteria = criteria();
        filter_records(&records, &criteria)
            .into_iter()
            .cloned()
            .collect::<Vec<ResourceRecord>>()
    });

    // Tab counts reflect the non-category criteria, so switching tabs never
    // surprises.
    let tab_counts = use_memo(move || {
        let records = match resources.value().read().as_ref() {
            Some(Ok(r)) => r.clone(),
            _ => vec![],
        };
        let base = Criteria {
            category: None,
            ..criteria()
        };
        CategoryTab::variants()
            .iter()
            .map(|tab| {
                let tab_criteria = Criteria {
                    category: tab.as_criterion(),
                    ..base.clone()
                };
                (*tab, filter_records(&records, &tab_criteria).len())
            })
            .collect::<std::collections::HashMap<_, _>>()
    });

    let is_loading = resources.value().read().is_none();
    let has_error = matches!(resources.value().read().as_ref(), Some(Err(_)));

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-indigo-50 to-white dark:from-gray-950 dark:to-gray-900",

            SiteNav {}

            // Header with search
            header {
                class: "bg-white dark:bg-gray-900 border-b border-gray-100 dark:border-gray-800",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6",
                    Breadcrumbs {}
                    h1 {
                        class: "text-3xl font-bold text-gray-900 dark:text-gray-50 mb-4",
                        "Study Materials"
                    }

                    div {
                        class: "flex flex-col sm:flex-row gap-3",

                        // Search input
                        input {
                            r#type: "text",
                            placeholder: "Search by title, subject, or author...",
                            value: "{raw_query}",
                            oninput: move |e| raw_query.set(e.value()),
                            class: "flex-1 px-4 py-3 bg-gray-50 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl text-gray-900 dark:text-gray-100 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                        }

                        // Branch selector
                        select {
                            class: "px-3 py-3 bg-gray-50 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl text-sm text-gray-900 dark:text-gray-100",
                            onchange: move |e| branch.set(Branch::from_slug(&e.value()).ok()),
                            option { value: "all", selected: branch().is_none(), "All Branches" }
                            for b in Branch::variants() {
                                option {
                                    key: "{b.slug()}",
                                    value: "{b.slug()}",
                                    selected: branch() == Some(*b),
                                    "{b.label()}"
                                }
                            }
                        }

                        // Semester selector
                        select {
                            class: "px-3 py-3 bg-gray-50 dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-xl text-sm text-gray-900 dark:text-gray-100",
                            onchange: move |e| semester.set(e.value().parse::<u8>().ok().and_then(Semester::new)),
                            option { value: "all", selected: semester().is_none(), "All Semesters" }
                            for s in Semester::all() {
                                option {
                                    key: "{s.number()}",
                                    value: "{s.number()}",
                                    selected: semester() == Some(s),
                                    "{s}"
                                }
                            }
                        }
                    }
                }
            }

            // Category Tabs
            div {
                class: "bg-white dark:bg-gray-900 border-b border-gray-100 dark:border-gray-800 sticky top-0 z-10",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div {
                        class: "flex items-center gap-1 overflow-x-auto py-3",
                        for tab in CategoryTab::variants() {
                            {
                                let tab = *tab;
                                let is_active = active_tab() == tab;
                                let count = tab_counts().get(&tab).copied().unwrap_or(0);
                                rsx! {
                                    button {
                                        key: "{tab:?}",
                                        class: if is_active {
                                            "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap transition-all bg-indigo-100 text-indigo-700"
                                        } else {
                                            "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap transition-all bg-gray-50 dark:bg-gray-800 text-gray-600 dark:text-gray-300 hover:bg-gray-100"
                                        },
                                        onclick: move |_| active_tab.set(tab),
                                        span { "{tab.icon()}" }
                                        "{tab.label()}"
                                        span {
                                            class: if is_active {
                                                "ml-1 px-2 py-0.5 rounded-full text-xs bg-indigo-200 text-indigo-800"
                                            } else {
                                                "ml-1 px-2 py-0.5 rounded-full text-xs bg-gray-200 dark:bg-gray-700 text-gray-600 dark:text-gray-300"
                                            },
                                            "{count}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Main Content
            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

                // Loading State
                if is_loading {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for i in 0..6 {
                            ResourceCardSkeleton { key: "{i}" }
                        }
                    }
                }

                // Error State
                else if has_error {
                    div {
                        class: "text-center py-12",
                        h3 { class: "text-lg font-medium text-gray-900 dark:text-gray-100 mb-2", "Unable to load resources" }
                        p { class: "text-gray-500", "Something went wrong fetching the catalog. Try refreshing the page." }
                    }
                }

                // Empty State
                else if filtered().is_empty() {
                    div {
                        class: "text-center py-16",
                        h3 { class: "text-xl font-semibold text-gray-900 dark:text-gray-100 mb-2", "No results found" }
                        p {
                            class: "text-gray-500 mb-6 max-w-md mx-auto",
                            "Nothing matches the current filters. Try a different search or clear them."
                        }
                        button {
                            class: "px-4 py-2 bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-200 rounded-lg hover:bg-gray-200 transition-colors",
                            onclick: move |_| {
                                raw_query.set(String::new());
                                query.set(String::new());
                                active_tab.set(CategoryTab::All);
                                branch.set(None);
                                semester.set(None);
                            },
                            "Clear Filters"
                        }
                    }
                }

                // Results Grid
                else {
                    div {
                        class: "mb-6",
                        p {
                            class: "text-sm text-gray-500",
                            "Showing "
                            span { class: "font-medium text-gray-900 dark:text-gray-100", "{filtered().len()}" }
                            " resource"
                            if filtered().len() != 1 { "s" }
                            if !query().is_empty() {
                                " for \""
                                span { class: "font-medium", "{query}" }
                                "\""
                            }
                        }
                    }

                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                        for record in filtered() {
                            ResourceCard { key: "{record.id}", record: record.clone() }
                        }
                    }
                }
            }
        }
    }
}
