//! Syllabus page - branch/semester filtered documents

use dioxus::prelude::*;

use catalog::{filter_records, Branch, Category, Criteria, ResourceRecord, Semester};

use crate::api::fetch_approved;
use crate::components::{Breadcrumbs, SiteNav};
use crate::routes::Route;

/// Syllabus page - course documents narrowed by branch and semester.
/// Same filter engine as the materials screen, category pinned to Document.
#[component]
pub fn Syllabus() -> Element {
    let resources = use_server_future(fetch_approved)?;

    let mut branch = use_signal(|| None::<Branch>);
    let mut semester = use_signal(|| None::<Semester>);

    let filtered = use_memo(move || {
        let records = match resources.value().read().as_ref() {
            Some(Ok(r)) => r.clone(),
            _ => vec![],
        };
        let criteria = Criteria {
            category: Some(Category::Document),
            branch: branch(),
            semester: semester(),
            ..Criteria::default()
        };
        filter_records(&records, &criteria)
            .into_iter()
            .cloned()
            .collect::<Vec<ResourceRecord>>()
    });

    let is_loading = resources.value().read().is_none();
    let has_error = matches!(resources.value().read().as_ref(), Some(Err(_)));

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-indigo-50 to-white dark:from-gray-950 dark:to-gray-900",

            SiteNav {}

            header {
                class: "bg-white dark:bg-gray-900 border-b border-gray-100 dark:border-gray-800",
                div {
                    class: "max-w-4xl mx-auto px-4 py-6",
                    Breadcrumbs {}
                    h1 {
                        class: "text-3xl font-bold text-gray-900 dark:text-gray-50 mb-2",
                        "Syllabus & Course Documents"
                    }
                    p {
                        class: "text-gray-600 dark:text-gray-300",
                        "Pick your branch and semester to see the matching documents."
                    }
                }
            }

            // Selectors
            div {
                class: "max-w-4xl mx-auto px-4 py-6 flex flex-col sm:flex-row gap-3",
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

            // Table
            main {
                class: "max-w-4xl mx-auto px-4 pb-12",

                if is_loading {
                    div { class: "text-center py-12 text-gray-500", "Loading..." }
                } else if has_error {
                    div {
                        class: "text-center py-12",
                        h3 { class: "text-lg font-medium text-gray-900 dark:text-gray-100 mb-2", "Unable to load resources" }
                        p { class: "text-gray-500", "Something went wrong fetching the catalog." }
                    }
                } else if filtered().is_empty() {
                    div {
                        class: "bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 p-12 text-center",
                        p { class: "text-gray-500", "No documents for this branch and semester yet." }
                    }
                } else {
                    div {
                        class: "bg-white dark:bg-gray-900 rounded-lg border border-gray-200 dark:border-gray-700 divide-y divide-gray-200 dark:divide-gray-700",
                        for record in filtered() {
                            div {
                                key: "{record.id}",
                                class: "p-4 hover:bg-gray-50 dark:hover:bg-gray-800 flex items-start justify-between gap-4",
                                div {
                                    class: "min-w-0",
                                    Link {
                                        to: Route::ResourceDetail { id: record.id.clone() },
                                        class: "text-sm font-medium text-indigo-600 hover:text-indigo-700",
                                        "{record.title}"
                                    }
                                    p { class: "text-sm text-gray-500", "{record.subject}" }
                                }
                                div {
                                    class: "text-right shrink-0",
                                    p { class: "text-xs text-gray-500", "{record.branch.label()}" }
                                    p { class: "text-xs text-gray-400", "{record.semester}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
