//! Check-in records and per-mood ratings.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maximum length of the free-text notes, in characters.
pub const NOTES_MAX_CHARS: usize = 280;

pub const INTENSITY_MIN: u8 = 1;
pub const INTENSITY_MAX: u8 = 10;
pub const INTENSITY_DEFAULT: u8 = 5;

// ─── Record ──────────────────────────────────────────────────────────────────

/// The unit submitted to the check-in endpoint. Built at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInRecord {
  pub emotion:   String,
  pub notes:     String,
  /// ISO-8601 UTC timestamp with millisecond precision.
  pub timestamp: String,
}

impl CheckInRecord {
  /// Build a record stamped with `at`. Notes are trimmed before the length
  /// check.
  pub fn new(
    emotion: impl Into<String>,
    notes: &str,
    at: DateTime<Utc>,
  ) -> Result<Self> {
    let notes = notes.trim();
    let len = notes.chars().count();
    if len > NOTES_MAX_CHARS {
      return Err(Error::NotesTooLong {
        len,
        max: NOTES_MAX_CHARS,
      });
    }
    Ok(Self {
      emotion:   emotion.into(),
      notes:     notes.to_owned(),
      timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
  }
}

/// A successfully submitted record together with the id the endpoint
/// assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInReceipt {
  pub id:        u64,
  pub emotion:   String,
  pub notes:     String,
  pub timestamp: String,
}

impl CheckInReceipt {
  pub fn new(id: u64, record: CheckInRecord) -> Self {
    Self {
      id,
      emotion: record.emotion,
      notes: record.notes,
      timestamp: record.timestamp,
    }
  }
}

// ─── Ratings ─────────────────────────────────────────────────────────────────

/// How strongly the user feels one of their selected moods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRating {
  pub mood_id:   u32,
  /// 1 (barely) to 10 (overwhelming).
  pub intensity: u8,
  /// Optional named stage, e.g. `"Frustrated"`.
  #[serde(default)]
  pub stage:     Option<String>,
}

impl MoodRating {
  pub fn new(mood_id: u32) -> Self {
    Self {
      mood_id,
      intensity: INTENSITY_DEFAULT,
      stage: None,
    }
  }
}

/// Move `intensity` by `delta`, clamped to the valid range.
pub fn step_intensity(intensity: u8, delta: i8) -> u8 {
  let next = i16::from(intensity) + i16::from(delta);
  next.clamp(i16::from(INTENSITY_MIN), i16::from(INTENSITY_MAX)) as u8
}

/// Replace the rating for `rating.mood_id`, or append it if none exists.
pub fn upsert_rating(
  mut ratings: Vec<MoodRating>,
  rating: MoodRating,
) -> Vec<MoodRating> {
  match ratings.iter_mut().find(|r| r.mood_id == rating.mood_id) {
    Some(existing) => *existing = rating,
    None => ratings.push(rating),
  }
  ratings
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  fn at() -> DateTime<Utc> { Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() }

  #[test]
  fn record_timestamp_is_iso8601() {
    let r = CheckInRecord::new("Happy", "", at()).unwrap();
    assert_eq!(r.timestamp, "2024-01-01T00:00:00.000Z");
    assert_eq!(r.notes, "");
  }

  #[test]
  fn record_trims_notes() {
    let r = CheckInRecord::new("Sad", "  rainy day \n", at()).unwrap();
    assert_eq!(r.notes, "rainy day");
  }

  #[test]
  fn record_rejects_long_notes() {
    let notes = "é".repeat(NOTES_MAX_CHARS + 1);
    let err = CheckInRecord::new("Sad", &notes, at()).unwrap_err();
    assert!(matches!(err, Error::NotesTooLong { len: 281, max: 280 }));

    // Exactly at the limit is fine, even for multi-byte characters.
    let notes = "é".repeat(NOTES_MAX_CHARS);
    assert!(CheckInRecord::new("Sad", &notes, at()).is_ok());
  }

  #[test]
  fn record_wire_shape() {
    let r = CheckInRecord::new("Happy", "ok", at()).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "emotion": "Happy",
        "notes": "ok",
        "timestamp": "2024-01-01T00:00:00.000Z",
      })
    );
  }

  #[test]
  fn intensity_is_clamped() {
    assert_eq!(step_intensity(5, 1), 6);
    assert_eq!(step_intensity(10, 1), 10);
    assert_eq!(step_intensity(1, -3), 1);
  }

  #[test]
  fn upsert_replaces_by_mood() {
    let ratings = upsert_rating(Vec::new(), MoodRating::new(1));
    let ratings = upsert_rating(ratings, MoodRating::new(2));
    let ratings = upsert_rating(ratings, MoodRating {
      mood_id:   1,
      intensity: 9,
      stage:     Some("Livid".into()),
    });
    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings[0].intensity, 9);
    assert_eq!(ratings[1].mood_id, 2);
  }
}
