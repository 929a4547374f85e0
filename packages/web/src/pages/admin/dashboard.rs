//! Admin dashboard page

use dioxus::prelude::*;

use crate::api::{fetch_stats, CatalogStats};
use crate::routes::Route;

/// Admin dashboard with catalog stats overview
#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_server_future(fetch_stats)?;

    let stats = match stats.value().read().as_ref() {
        Some(Ok(s)) => s.clone(),
        _ => CatalogStats::default(),
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Dashboard" }

            // Review Queue Stats
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",

                StatCard {
                    title: "Pending Review",
                    value: stats.pending,
                    icon: "\u{23F3}",
                    color: "amber"
                }
                StatCard {
                    title: "Approved",
                    value: stats.approved,
                    icon: "\u{2705}",
                    color: "green"
                }
                StatCard {
                    title: "Rejected",
                    value: stats.rejected,
                    icon: "\u{1F6AB}",
                    color: "red"
                }
            }

            // Catalog Breakdown
            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-6 mb-8",

                StatCard {
                    title: "Notes",
                    value: stats.notes,
                    icon: "\u{1F4DD}",
                    color: "blue"
                }
                StatCard {
                    title: "Videos",
                    value: stats.videos,
                    icon: "\u{1F3A5}",
                    color: "blue"
                }
                StatCard {
                    title: "Documents",
                    value: stats.documents,
                    icon: "\u{1F4C4}",
                    color: "blue"
                }
                StatCard {
                    title: "Past Papers",
                    value: stats.papers,
                    icon: "\u{1F4DC}",
                    color: "blue"
                }
            }

            // Quick Actions
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink {
                        to: Route::AdminReview {},
                        label: "Review Queue",
                        icon: "\u{1F4CB}"
                    }
                    QuickActionLink {
                        to: Route::StudyMaterials { q: String::new(), category: String::new() },
                        label: "Browse Catalog",
                        icon: "\u{1F4DA}"
                    }
                    QuickActionLink {
                        to: Route::Submit {},
                        label: "Add Resource",
                        icon: "\u{2795}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: usize,
    icon: &'static str,
    color: &'static str,
}

#[component]
fn StatCard(props: StatCardProps) -> Element {
    let bg_class = match props.color {
        "blue" => "bg-blue-50",
        "amber" => "bg-amber-50",
        "green" => "bg-green-50",
        "red" => "bg-red-50",
        _ => "bg-gray-50",
    };

    let text_class = match props.color {
        "blue" => "text-blue-700",
        "amber" => "text-amber-700",
        "green" => "text-green-700",
        "red" => "text-red-700",
        _ => "text-gray-700",
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{props.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{props.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {bg_class} {text_class} flex items-center justify-center text-2xl",
                    "{props.icon}"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QuickActionLinkProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[component]
fn QuickActionLink(props: QuickActionLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200 transition-colors",
            span { "{props.icon}" }
            "{props.label}"
        }
    }
}
