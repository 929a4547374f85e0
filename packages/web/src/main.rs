//! StudyVault - Dioxus Fullstack Web Application
//!
//! Student-facing academic resource portal: browse notes, video lectures,
//! documents, and past exam papers by branch and semester, with an admin
//! back-office for reviewing submissions.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod auth;
mod components;
mod pages;
mod routes;
mod state;
mod storage;
#[cfg(feature = "server")]
mod store;

fn main() {
    // Environment first, so RUST_LOG and ADMIN_PASSWORD are visible
    #[cfg(feature = "server")]
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
