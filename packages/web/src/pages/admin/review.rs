//! Admin review queue pages

use dioxus::prelude::*;

use catalog::{ResourceContent, ResourceRecord, ReviewStatus};

use crate::api::{fetch_pending, fetch_submission, review_resource};
use crate::routes::Route;

/// Pending submissions list
#[component]
pub fn AdminReview() -> Element {
    let mut pending = use_server_future(fetch_pending)?;

    let handle_review = move |(id, approve): (String, bool)| {
        spawn(async move {
            if review_resource(id, approve).await.is_ok() {
                pending.restart();
            }
        });
    };

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Review Queue" }

            match pending.value().read().as_ref() {
                Some(Ok(records)) if !records.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                        for record in records.iter() {
                            SubmissionRow {
                                record: record.clone(),
                                on_review: handle_review
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No submissions waiting for review." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading submissions: {e}"
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", "Loading..." }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SubmissionRowProps {
    record: ResourceRecord,
    on_review: EventHandler<(String, bool)>,
}

#[component]
fn SubmissionRow(props: SubmissionRowProps) -> Element {
    let record = &props.record;

    rsx! {
        div {
            class: "p-4 hover:bg-gray-50",
            div {
                class: "flex items-start justify-between",
                div {
                    class: "flex-1 min-w-0",
                    div {
                        class: "flex items-center gap-2 mb-1",
                        span {
                            class: "text-xs px-2 py-0.5 rounded-full bg-indigo-100 text-indigo-700",
                            "{record.category.icon()} {record.category.label()}"
                        }
                        span {
                            class: "text-xs text-gray-500",
                            "{record.branch.label()} \u{00B7} {record.semester}"
                        }
                    }
                    Link {
                        to: Route::AdminReviewDetail { id: record.id.clone() },
                        class: "text-sm font-medium text-gray-900 hover:text-indigo-600 truncate block",
                        "{record.title}"
                    }
                    p { class: "text-sm text-gray-500", "{record.subject} \u{00B7} by {record.author}" }
                }
                div {
                    class: "flex items-center gap-2 ml-4",
                    button {
                        class: "px-3 py-1.5 bg-green-100 text-green-700 text-sm rounded hover:bg-green-200",
                        onclick: {
                            let id = record.id.clone();
                            move |_| props.on_review.call((id.clone(), true))
                        },
                        "Approve"
                    }
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: {
                            let id = record.id.clone();
                            move |_| props.on_review.call((id.clone(), false))
                        },
                        "Reject"
                    }
                }
            }
        }
    }
}

/// Full view of a single submission
#[component]
pub fn AdminReviewDetail(id: String) -> Element {
    let fetch_id = id.clone();
    let mut submission = use_server_future(move || fetch_submission(fetch_id.clone()))?;

    let review_id = id.clone();
    let handle_review = move |approve: bool| {
        let id = review_id.clone();
        spawn(async move {
            if review_resource(id, approve).await.is_ok() {
                submission.restart();
            }
        });
    };

    rsx! {
        div {
            div {
                class: "mb-6",
                Link {
                    to: Route::AdminReview {},
                    class: "text-indigo-600 hover:text-indigo-700 text-sm",
                    "\u{2190} Back to queue"
                }
            }

            match submission.value().read().as_ref() {
                Some(Ok(Some(record))) => {
                    let record = record.clone();
                    rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",

                            div {
                                class: "flex items-center gap-2 mb-4",
                                StatusBadge { status: record.status }
                                span {
                                    class: "text-xs px-2 py-0.5 rounded-full bg-indigo-100 text-indigo-700",
                                    "{record.category.icon()} {record.category.label()}"
                                }
                            }

                            h1 { class: "text-2xl font-bold text-gray-900 mb-1", "{record.title}" }
                            p { class: "text-gray-600 mb-1", "{record.subject}" }
                            p { class: "text-sm text-gray-500 mb-4", "by {record.author}" }

                            dl {
                                class: "grid grid-cols-2 gap-4 text-sm mb-6",
                                div {
                                    dt { class: "text-gray-500", "Branch" }
                                    dd { class: "text-gray-900 font-medium", "{record.branch.label()}" }
                                }
                                div {
                                    dt { class: "text-gray-500", "Semester" }
                                    dd { class: "text-gray-900 font-medium", "{record.semester}" }
                                }
                                div {
                                    dt { class: "text-gray-500", "Submitted" }
                                    dd { class: "text-gray-900 font-medium", {record.created_at.format("%Y-%m-%d %H:%M UTC").to_string()} }
                                }
                            }

                            match &record.content {
                                Some(ResourceContent::Link(url)) => rsx! {
                                    div {
                                        class: "mb-6",
                                        p { class: "text-sm text-gray-500 mb-1", "Linked content" }
                                        a {
                                            href: "{url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            class: "text-indigo-600 hover:text-indigo-700 text-sm break-all",
                                            "{url}"
                                        }
                                    }
                                },
                                Some(ResourceContent::Inline(text)) => rsx! {
                                    div {
                                        class: "mb-6",
                                        p { class: "text-sm text-gray-500 mb-1", "Inline content" }
                                        div {
                                            class: "bg-gray-50 rounded-lg p-4 text-sm text-gray-700 whitespace-pre-wrap",
                                            "{text}"
                                        }
                                    }
                                },
                                None => rsx! {
                                    p { class: "text-sm text-gray-400 mb-6", "No content attached." }
                                }
                            }

                            if record.status == ReviewStatus::Pending {
                                div {
                                    class: "flex gap-3",
                                    button {
                                        class: "px-4 py-2 bg-green-600 text-white text-sm rounded-lg hover:bg-green-700",
                                        onclick: {
                                            let handle = handle_review.clone();
                                            move |_| handle(true)
                                        },
                                        "Approve"
                                    }
                                    button {
                                        class: "px-4 py-2 bg-red-600 text-white text-sm rounded-lg hover:bg-red-700",
                                        onclick: {
                                            let handle = handle_review.clone();
                                            move |_| handle(false)
                                        },
                                        "Reject"
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Ok(None)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "Submission not found." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading submission: {e}"
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", "Loading..." }
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: ReviewStatus) -> Element {
    let class = match status {
        ReviewStatus::Pending => "bg-amber-100 text-amber-700",
        ReviewStatus::Approved => "bg-green-100 text-green-700",
        ReviewStatus::Rejected => "bg-red-100 text-red-700",
    };

    rsx! {
        span {
            class: "text-xs px-2 py-0.5 rounded-full {class}",
            "{status.label()}"
        }
    }
}
