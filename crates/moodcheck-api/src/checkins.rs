//! Handlers for `/checkins` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/checkins` | All receipts, oldest first |
//! | `POST` | `/checkins` | Body: [`CheckInRecord`]; returns 201 + receipt |
//! | `GET`  | `/checkins/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::DateTime;
use moodcheck_core::checkin::{CheckInReceipt, CheckInRecord, NOTES_MAX_CHARS};

use crate::{error::ApiError, journal::CheckInJournal};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /checkins`
pub async fn list(
  State(journal): State<Arc<CheckInJournal>>,
) -> Json<Vec<CheckInReceipt>> {
  Json(journal.list())
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /checkins` — returns 201 + the stored [`CheckInReceipt`].
pub async fn create(
  State(journal): State<Arc<CheckInJournal>>,
  Json(record): Json<CheckInRecord>,
) -> Result<impl IntoResponse, ApiError> {
  validate(&record)?;
  let receipt = journal.record(record);
  tracing::info!(id = receipt.id, emotion = %receipt.emotion, "check-in recorded");
  Ok((StatusCode::CREATED, Json(receipt)))
}

fn validate(record: &CheckInRecord) -> Result<(), ApiError> {
  if record.emotion.trim().is_empty() {
    return Err(ApiError::BadRequest("emotion must not be empty".into()));
  }
  let len = record.notes.chars().count();
  if len > NOTES_MAX_CHARS {
    return Err(ApiError::BadRequest(format!(
      "notes exceed {NOTES_MAX_CHARS} characters (got {len})"
    )));
  }
  DateTime::parse_from_rfc3339(&record.timestamp).map_err(|e| {
    ApiError::BadRequest(format!("timestamp {:?}: {e}", record.timestamp))
  })?;
  Ok(())
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /checkins/:id`
pub async fn get_one(
  State(journal): State<Arc<CheckInJournal>>,
  Path(id): Path<u64>,
) -> Result<Json<CheckInReceipt>, ApiError> {
  journal
    .get(id)
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("check-in {id} not found")))
}
