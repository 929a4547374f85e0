//! Resource card component

use dioxus::prelude::*;

use catalog::{Category, ResourceRecord};

use crate::routes::Route;
use crate::state::use_bookmarks;

/// Props for ResourceCard
#[derive(Props, Clone, PartialEq)]
pub struct ResourceCardProps {
    pub record: ResourceRecord,
}

/// Card displaying a single catalog resource
#[component]
pub fn ResourceCard(props: ResourceCardProps) -> Element {
    let record = &props.record;
    let bookmarks = use_bookmarks();

    let category_styles = get_category_styles(record.category);
    let bookmarked = bookmarks.is_bookmarked(&record.id);
    let id = record.id.clone();

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-900 p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            // Header: category badge + bookmark toggle
            div {
                class: "flex items-center justify-between mb-3",
                span {
                    class: "inline-flex items-center gap-1.5 px-2.5 py-1 rounded-full text-xs font-medium {category_styles.bg} {category_styles.text}",
                    span { "{category_styles.icon}" }
                    "{category_styles.label}"
                }
                button {
                    class: "text-lg hover:scale-110 transition-transform",
                    onclick: move |_| bookmarks.toggle(&id),
                    if bookmarked { "\u{1F516}" } else { "\u{1F4CC}" }
                }
            }

            // Title
            Link {
                to: Route::ResourceDetail { id: record.id.clone() },
                class: "text-lg font-semibold text-gray-900 dark:text-gray-100 mb-1 line-clamp-2 hover:text-indigo-600",
                "{record.title}"
            }

            // Subject + author
            p {
                class: "text-sm font-medium text-gray-600 dark:text-gray-300 mb-1",
                "{record.subject}"
            }
            p {
                class: "text-xs text-gray-500 mb-3",
                "by {record.author}"
            }

            // Branch + semester tags
            div {
                class: "flex flex-wrap items-center gap-2 text-xs text-gray-500 mb-4",
                span {
                    class: "bg-gray-100 dark:bg-gray-800 px-2 py-0.5 rounded",
                    "{record.branch.label()}"
                }
                span {
                    class: "bg-gray-100 dark:bg-gray-800 px-2 py-0.5 rounded",
                    "{record.semester}"
                }
            }

            // Metrics footer
            div {
                class: "mt-auto pt-3 border-t border-gray-200/60 dark:border-gray-700/60 flex items-center gap-4 text-xs text-gray-400",
                if let Some(views) = record.views {
                    span { "\u{1F441} {views}" }
                }
                if let Some(rating) = record.rating {
                    span { "\u{2B50} {rating:.1}" }
                }
                if let Some(minutes) = record.duration_minutes {
                    span { "\u{23F1} {minutes} min" }
                }
            }
        }
    }
}

/// Skeleton loader for resource cards
#[component]
pub fn ResourceCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-900 p-5 animate-pulse",
            div {
                class: "flex items-center justify-between mb-3",
                div { class: "h-6 w-24 bg-gray-200 dark:bg-gray-700 rounded-full" }
                div { class: "h-6 w-6 bg-gray-200 dark:bg-gray-700 rounded" }
            }
            div { class: "h-6 w-3/4 bg-gray-200 dark:bg-gray-700 rounded mb-2" }
            div { class: "h-4 w-1/2 bg-gray-200 dark:bg-gray-700 rounded mb-3" }
            div {
                class: "flex gap-2 mb-4",
                div { class: "h-5 w-20 bg-gray-200 dark:bg-gray-700 rounded" }
                div { class: "h-5 w-16 bg-gray-200 dark:bg-gray-700 rounded" }
            }
            div {
                class: "pt-3 border-t border-gray-100 dark:border-gray-800",
                div { class: "h-4 w-24 bg-gray-200 dark:bg-gray-700 rounded" }
            }
        }
    }
}

// Helper struct for styling
struct CategoryStyles {
    bg: &'static str,
    text: &'static str,
    icon: &'static str,
    label: &'static str,
}

fn get_category_styles(category: Category) -> CategoryStyles {
    match category {
        Category::Note => CategoryStyles {
            bg: "bg-blue-100",
            text: "text-blue-700",
            icon: Category::Note.icon(),
            label: "Notes",
        },
        Category::Video => CategoryStyles {
            bg: "bg-emerald-100",
            text: "text-emerald-700",
            icon: Category::Video.icon(),
            label: "Video",
        },
        Category::Document => CategoryStyles {
            bg: "bg-purple-100",
            text: "text-purple-700",
            icon: Category::Document.icon(),
            label: "Document",
        },
        Category::Paper => CategoryStyles {
            bg: "bg-amber-100",
            text: "text-amber-700",
            icon: Category::Paper.icon(),
            label: "Question Paper",
        },
    }
}
