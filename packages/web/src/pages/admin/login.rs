//! Admin login page

use dioxus::prelude::*;

use crate::auth::{login, use_auth};
use crate::components::Redirect;
use crate::routes::Route;

/// Admin login page
#[component]
pub fn AdminLogin() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_admin() {
        return rsx! {
            Redirect { to: Route::AdminDashboard {} }
        };
    }

    let handle_login = move |_| {
        let user = username().trim().to_string();
        let pass = password();

        if user.is_empty() || pass.is_empty() {
            error.set(Some("Please enter your username and password".to_string()));
            return;
        }

        let auth = auth.clone();
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match login(user, pass).await {
                Ok(true) => {
                    auth.refresh().await;
                    navigator.push(Route::AdminDashboard {});
                }
                Ok(false) => error.set(Some("Invalid username or password".to_string())),
                Err(e) => error.set(Some(e.to_string())),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 dark:bg-gray-950 flex items-center justify-center px-4",

            div {
                class: "bg-white dark:bg-gray-900 rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 dark:text-gray-50 mb-2", "Admin Login" }
                    p { class: "text-gray-600 dark:text-gray-300 text-sm", "StudyVault" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_login,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                            "Username"
                        }
                        input {
                            r#type: "text",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                            placeholder: "admin",
                            class: "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 dark:text-gray-200 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            class: "w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-800 dark:text-gray-100 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-indigo-600 text-white py-2 px-4 rounded-md hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign In" }
                    }
                }

                div {
                    class: "mt-6 text-center",
                    Link {
                        to: Route::Home {},
                        class: "text-sm text-gray-500 hover:text-gray-700",
                        "\u{2190} Back to site"
                    }
                }
            }
        }
    }
}
