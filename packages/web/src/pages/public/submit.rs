//! Submit resource page component

use dioxus::prelude::*;

use catalog::{Branch, Category, Semester};

use crate::api::{submit_resource, ResourceDraft};
use crate::components::SiteNav;
use crate::routes::Route;

/// Submit page - share a resource for review
#[component]
pub fn Submit() -> Element {
    let mut title = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut category = use_signal(|| Category::Note);
    let mut branch = use_signal(|| Branch::Computer);
    let mut semester = use_signal(Semester::default);
    let mut link = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| false);

    let is_valid = use_memo(move || {
        !title().trim().is_empty() && !subject().trim().is_empty()
    });

    let handle_submit = move |_| {
        if !is_valid() || is_submitting() {
            return;
        }

        let draft = ResourceDraft {
            category: category(),
            title: title().trim().to_string(),
            subject: subject().trim().to_string(),
            author: author().trim().to_string(),
            branch: branch(),
            semester: semester(),
            link: Some(link().trim().to_string()).filter(|l| !l.is_empty()),
        };

        spawn(async move {
            is_submitting.set(true);
            error.set(None);

            match submit_resource(draft).await {
                Ok(_) => {
                    success.set(true);
                    title.set(String::new());
                    subject.set(String::new());
                    author.set(String::new());
                    link.set(String::new());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-indigo-50 to-white dark:from-gray-950 dark:to-gray-900",

            SiteNav {}

            // Header
            header {
                class: "bg-white dark:bg-gray-900 border-b border-gray-100 dark:border-gray-800",
                div {
                    class: "max-w-2xl mx-auto px-4 py-8",
                    Link {
                        to: Route::Home {},
                        class: "text-indigo-600 hover:text-indigo-700 text-sm mb-4 inline-block",
                        "\u{2190} Back to Home"
                    }
                    h1 {
                        class: "text-3xl font-bold text-gray-900 dark:text-gray-50 mb-2",
                        "Share Study Material"
                    }
                    p {
                        class: "text-gray-600 dark:text-gray-300",
                        "Submissions are reviewed by a moderator before they appear in the catalog."
                    }
                }
            }

            // Form
            main {
                class: "max-w-2xl mx-auto px-4 py-8",

                if success() {
                    div {
                        class: "bg-green-50 border border-green-200 text-green-700 p-6 rounded-lg text-center",
                        h3 { class: "text-lg font-semibold mb-2", "Thank you!" }
                        p { class: "mb-4", "Your material has been submitted and is awaiting review." }
                        button {
                            class: "px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors",
                            onclick: move |_| success.set(false),
                            "Submit Another"
                        }
                    }
                } else {
                    form {
                        class: "bg-white dark:bg-gray-900 rounded-lg shadow-sm border border-gray-200 dark:border-gray-700 p-6 space-y-6",
                        onsubmit: handle_submit,

                        if let Some(err) = error() {
                            div {
                                class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                                "{err}"
                            }
                        }

                        // Title
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                                "Title "
                                span { class: "text-red-500", "*" }
                            }
                            input {
                                r#type: "text",
                                value: "{title}",
                                oninput: move |e| title.set(e.value()),
                                placeholder: "e.g. Operating Systems Unit 3 Notes",
                                class: "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500",
                                required: true
                            }
                        }

                        // Subject
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                                "Subject "
                                span { class: "text-red-500", "*" }
                            }
                            input {
                                r#type: "text",
                                value: "{subject}",
                                oninput: move |e| subject.set(e.value()),
                                placeholder: "e.g. Operating Systems",
                                class: "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500",
                                required: true
                            }
                        }

                        // Author
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                                "Author / Credit"
                            }
                            input {
                                r#type: "text",
                                value: "{author}",
                                oninput: move |e| author.set(e.value()),
                                placeholder: "Who made this? Leave blank for Anonymous",
                                class: "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            }
                        }

                        // Category / Branch / Semester
                        div {
                            class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                                    "Category"
                                }
                                select {
                                    class: "w-full px-3 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-lg text-sm",
                                    onchange: move |e| {
                                        let picked = Category::variants()
                                            .iter()
                                            .copied()
                                            .find(|c| c.label() == e.value())
                                            .unwrap_or(Category::Note);
                                        category.set(picked);
                                    },
                                    for c in Category::variants() {
                                        option {
                                            key: "{c.label()}",
                                            value: "{c.label()}",
                                            selected: category() == *c,
                                            "{c.label()}"
                                        }
                                    }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                                    "Branch"
                                }
                                select {
                                    class: "w-full px-3 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-lg text-sm",
                                    onchange: move |e| {
                                        if let Ok(picked) = Branch::from_slug(&e.value()) {
                                            branch.set(picked);
                                        }
                                    },
                                    for b in Branch::variants() {
                                        option {
                                            key: "{b.slug()}",
                                            value: "{b.slug()}",
                                            selected: branch() == *b,
                                            "{b.label()}"
                                        }
                                    }
                                }
                            }
                            div {
                                label {
                                    class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                                    "Semester"
                                }
                                select {
                                    class: "w-full px-3 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-lg text-sm",
                                    onchange: move |e| {
                                        if let Some(picked) = e.value().parse::<u8>().ok().and_then(Semester::new) {
                                            semester.set(picked);
                                        }
                                    },
                                    for s in Semester::all() {
                                        option {
                                            key: "{s.number()}",
                                            value: "{s.number()}",
                                            selected: semester() == s,
                                            "{s}"
                                        }
                                    }
                                }
                            }
                        }

                        // Link
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                                "Link (optional)"
                            }
                            input {
                                r#type: "url",
                                value: "{link}",
                                oninput: move |e| link.set(e.value()),
                                placeholder: "https://drive.example.com/my-notes.pdf",
                                class: "w-full px-4 py-3 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-lg focus:outline-none focus:ring-2 focus:ring-indigo-500"
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: is_submitting() || !is_valid(),
                            if is_submitting() { "Submitting..." } else { "Submit for Review" }
                        }
                    }
                }
            }
        }
    }
}
