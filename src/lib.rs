//! Buddy Chat
//!
//! A minimal web chat client and its server-side relay. The server renders a
//! single chat page and exposes one API endpoint that forwards each user
//! message to a downstream inference service, returning the reply verbatim.
//!
//! # Architecture
//!
//! - **Server**: Axum-based HTTP server serving the page and the relay route
//! - **Relay**: one `POST /api/chat` handler backed by a reqwest client
//! - **UI**: server-rendered HTML page with inline client-side behavior
//!
//! # Modules
//!
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`downstream`]: outbound client for the downstream chat service
//! - [`server`]: router construction and startup
//! - [`ui`]: page rendering and the client-side state model

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod downstream;
pub mod server;
pub mod ui;

use crate::downstream::DownstreamClient;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client for the downstream chat service.
    pub downstream: DownstreamClient,
}
