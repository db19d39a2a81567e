//! Placeholder check-in endpoint.
//!
//! Exposes an axum [`Router`] that accepts check-in records, assigns each an
//! id, and echoes it back. Receipts live in memory only. Auth, TLS, and
//! persistence are out of scope.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(moodcheck_api::api_router(Arc::new(CheckInJournal::new())))
//! ```

pub mod checkins;
pub mod error;
pub mod journal;

use std::sync::Arc;

use axum::{Router, routing::get};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use journal::CheckInJournal;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from the config file and
/// `MOODCHECK_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: "127.0.0.1".to_string(),
      port: 5280,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router around `journal`.
pub fn api_router(journal: Arc<CheckInJournal>) -> Router<()> {
  Router::new()
    .route("/checkins", get(checkins::list).post(checkins::create))
    .route("/checkins/{id}", get(checkins::get_one))
    .layer(TraceLayer::new_for_http())
    .with_state(journal)
}

// ─── Integration tests ────────────────────────────────────────────────────────
