//! Wizard state carrier: turns session state into URL-safe strings and back.
//!
//! Every value is JSON, then percent-escaped, so it can sit in a query
//! string without further quoting. Decoding is strict and returns
//! [`Error::MalformedState`]; screens that must not fail use the
//! `*_or_default` variants, which log and fall back to empty state.

use serde::{Serialize, de::DeserializeOwned};

use crate::{
  Error, Result,
  checkin::{MoodRating, step_intensity},
  mood::Mood,
  selection::{ActivityChoice, Selection},
};

// ─── Generic helpers ─────────────────────────────────────────────────────────

fn encode_json<T: Serialize + ?Sized>(value: &T) -> String {
  match serde_json::to_string(value) {
    Ok(json) => urlencoding::encode(&json).into_owned(),
    Err(e) => {
      // Unreachable for the plain structs carried here; an empty value
      // decodes as malformed and degrades to the default on the next screen.
      tracing::error!("failed to encode navigation state: {e}");
      String::new()
    }
  }
}

fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
  let json = urlencoding::decode(raw)
    .map_err(|e| Error::MalformedState(format!("bad percent-encoding: {e}")))?;
  serde_json::from_str(&json).map_err(|e| Error::MalformedState(e.to_string()))
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Encode `selection` as percent-escaped JSON (`[{"id":1,"name":"Angry",…}]`).
pub fn encode(selection: &Selection) -> String { encode_json(selection.moods()) }

/// Decode a selection produced by [`encode`]. Repeated ids keep their first
/// occurrence.
pub fn decode(raw: &str) -> Result<Selection> {
  let moods: Vec<Mood> = decode_json(raw)?;
  Ok(Selection::from_moods(moods))
}

/// [`decode`], falling back to an empty selection on malformed input.
pub fn decode_or_default(raw: &str) -> Selection {
  decode(raw).unwrap_or_else(|e| {
    tracing::warn!("ignoring mood selection: {e}");
    Selection::default()
  })
}

// ─── Activities ──────────────────────────────────────────────────────────────

pub fn encode_activities(choice: &ActivityChoice) -> String {
  encode_json(choice.as_slice())
}

/// Decode an activity choice. Oversized input is cut to the size limit.
pub fn decode_activities(raw: &str) -> Result<ActivityChoice> {
  let activities: Vec<String> = decode_json(raw)?;
  Ok(ActivityChoice::from_activities(activities))
}

pub fn decode_activities_or_default(raw: &str) -> ActivityChoice {
  decode_activities(raw).unwrap_or_else(|e| {
    tracing::warn!("ignoring activity choice: {e}");
    ActivityChoice::default()
  })
}

// ─── Ratings ─────────────────────────────────────────────────────────────────

pub fn encode_ratings(ratings: &[MoodRating]) -> String { encode_json(ratings) }

/// Decode ratings. Intensities outside `1..=10` are clamped into range.
pub fn decode_ratings(raw: &str) -> Result<Vec<MoodRating>> {
  let ratings: Vec<MoodRating> = decode_json(raw)?;
  Ok(
    ratings
      .into_iter()
      .map(|r| MoodRating {
        intensity: step_intensity(r.intensity, 0),
        ..r
      })
      .collect(),
  )
}

pub fn decode_ratings_or_default(raw: &str) -> Vec<MoodRating> {
  decode_ratings(raw).unwrap_or_else(|e| {
    tracing::warn!("ignoring mood ratings: {e}");
    Vec::new()
  })
}

// ─── Free text ───────────────────────────────────────────────────────────────

/// Percent-escape free text. Unlike the structured values, text is not
/// wrapped in JSON.
pub fn encode_text(text: &str) -> String { urlencoding::encode(text).into_owned() }

pub fn decode_text(raw: &str) -> Result<String> {
  urlencoding::decode(raw)
    .map(|s| s.into_owned())
    .map_err(|e| Error::MalformedState(format!("bad percent-encoding: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mood::{MoodKind, catalog};

  #[test]
  fn selection_round_trips_in_order() {
    let sel = Selection::from_moods([
      MoodKind::Happy.mood(),
      MoodKind::Angry.mood(),
      MoodKind::Awe.mood(),
    ]);
    let back = decode(&encode(&sel)).unwrap();
    assert_eq!(back, sel);
    assert_eq!(back.moods()[0].name, "Happy");
  }

  #[test]
  fn empty_selection_round_trips() {
    let sel = Selection::new();
    assert_eq!(encode(&sel), "%5B%5D");
    assert_eq!(decode(&encode(&sel)).unwrap(), sel);
  }

  #[test]
  fn unknown_mood_names_survive() {
    let sel = Selection::from_moods([Mood {
      id:   77,
      name: "Ennui & dread?".into(),
      icon: String::new(),
    }]);
    assert_eq!(decode(&encode(&sel)).unwrap(), sel);
  }

  #[test]
  fn encoding_is_url_safe() {
    let raw = encode(&Selection::from_moods(catalog()));
    assert!(
      raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "%-_.~".contains(c)),
      "unexpected character in {raw}"
    );
  }

  #[test]
  fn decodes_state_without_icons() {
    let raw = urlencoding::encode(r#"[{"id":2,"name":"Sad"}]"#).into_owned();
    let sel = decode(&raw).unwrap();
    assert_eq!(sel.len(), 1);
    assert_eq!(sel.moods()[0].icon, "");
  }

  #[test]
  fn not_json_is_malformed() {
    assert!(matches!(decode("not-json"), Err(Error::MalformedState(_))));
    assert!(decode_or_default("not-json").is_empty());
  }

  #[test]
  fn wrong_shape_is_malformed() {
    let raw = encode_text(r#"{"id":1}"#);
    assert!(matches!(decode(&raw), Err(Error::MalformedState(_))));
  }

  #[test]
  fn invalid_utf8_escape_is_malformed() {
    assert!(matches!(decode("%FF%FE"), Err(Error::MalformedState(_))));
  }

  #[test]
  fn activities_round_trip_and_cap() {
    let choice = ActivityChoice::from_activities(
      ["Yoga", "Nap"].into_iter().map(String::from),
    );
    assert_eq!(decode_activities(&encode_activities(&choice)).unwrap(), choice);

    let many = encode_text(
      r#"["a","b","c","d","e","f","g"]"#,
    );
    assert_eq!(decode_activities(&many).unwrap().len(), 5);
    assert!(decode_activities_or_default("%%").is_empty());
  }

  #[test]
  fn ratings_round_trip() {
    let ratings = vec![MoodRating {
      mood_id:   1,
      intensity: 8,
      stage:     Some("Furious".into()),
    }];
    assert_eq!(decode_ratings(&encode_ratings(&ratings)).unwrap(), ratings);
    assert!(decode_ratings_or_default("[").is_empty());
  }

  #[test]
  fn ratings_intensity_is_clamped() {
    let raw = encode_text(
      r#"[{"mood_id":1,"intensity":200},{"mood_id":2,"intensity":0}]"#,
    );
    let ratings = decode_ratings(&raw).unwrap();
    assert_eq!(ratings[0].intensity, 10);
    assert_eq!(ratings[1].intensity, 1);
    // Too large for the field at all: malformed, so it degrades to empty.
    let raw = encode_text(r#"[{"mood_id":1,"intensity":300}]"#);
    assert!(decode_ratings_or_default(&raw).is_empty());
  }

  #[test]
  fn text_round_trips() {
    let text = "work was a lot & I'm tired = 100%";
    let raw = encode_text(text);
    assert!(!raw.contains('&') && !raw.contains('='));
    assert_eq!(decode_text(&raw).unwrap(), text);
  }
}
