//! Techblog - Dioxus Web Frontend
//!
//! Single-page client for the Techblog platform. Talks to the identity
//! service and the application service through `techblog-client`.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! TECHBLOG_API_URL=http://localhost:8080 \
//! TECHBLOG_IDENTITY_URL=http://localhost:8180 \
//!     dx serve --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod config;
mod pages;
mod routes;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,techblog_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Techblog web frontend");

    dioxus::launch(app::App);
}
