//! The mood catalog: the fixed set of moods a user can pick from.
//!
//! A [`Mood`] is the value that travels through navigation: it carries its
//! name as a plain string so that state decoded from an untrusted location
//! survives even when the name is not one the catalog knows. Catalog lookups
//! go through [`MoodKind::from_name`], which is case-insensitive.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

// ─── Kinds ───────────────────────────────────────────────────────────────────

/// One entry of the fixed mood catalog.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  EnumIter,
  IntoStaticStr,
)]
pub enum MoodKind {
  Angry,
  Sad,
  Neutral,
  Content,
  Happy,
  Awe,
}

impl MoodKind {
  /// Stable catalog id; never reused.
  pub fn id(self) -> u32 {
    match self {
      Self::Angry => 1,
      Self::Sad => 2,
      Self::Neutral => 3,
      Self::Content => 4,
      Self::Happy => 5,
      Self::Awe => 6,
    }
  }

  /// Display name, e.g. `"Angry"`.
  pub fn name(self) -> &'static str { self.into() }

  /// Opaque icon reference. The terminal renders it as-is.
  pub fn icon(self) -> &'static str {
    match self {
      Self::Angry => "😠",
      Self::Sad => "😢",
      Self::Neutral => "😐",
      Self::Content => "🙂",
      Self::Happy => "😄",
      Self::Awe => "🤩",
    }
  }

  /// Case-insensitive lookup by name. Surrounding whitespace is ignored.
  pub fn from_name(name: &str) -> Option<Self> {
    let name = name.trim();
    Self::iter().find(|k| k.name().eq_ignore_ascii_case(name))
  }

  pub fn from_id(id: u32) -> Option<Self> { Self::iter().find(|k| k.id() == id) }

  /// One-sentence description shown above the intensity slider.
  pub fn description(self) -> &'static str {
    match self {
      Self::Angry => {
        "Anger is a complex emotion that can range from mild irritation to \
         intense fury"
      }
      Self::Sad => {
        "Sadness is a natural emotion that helps us process loss and \
         disappointment"
      }
      Self::Neutral => "Neutral feelings represent a balanced emotional state",
      Self::Content => "Contentment is a peaceful state of satisfaction and ease",
      Self::Happy => "Happiness brings positive energy and feelings of joy",
      Self::Awe => {
        "Awe is the feeling of being in the presence of something vast that \
         transcends our understanding"
      }
    }
  }

  /// Named stages of this mood, mildest first.
  pub fn stages(self) -> &'static [&'static str] {
    match self {
      Self::Angry => &[
        "Irritated",
        "Frustrated",
        "Annoyed",
        "Aggravated",
        "Hostile",
        "Enraged",
        "Furious",
        "Livid",
        "Outraged",
      ],
      Self::Sad => &[
        "Disappointed",
        "Lonely",
        "Gloomy",
        "Miserable",
        "Heartbroken",
        "Despairing",
        "Grief-stricken",
        "Devastated",
      ],
      Self::Neutral => &[
        "Calm",
        "Balanced",
        "Composed",
        "Unemotional",
        "Detached",
        "Indifferent",
        "Apathetic",
      ],
      Self::Content => &[
        "Pleased",
        "Satisfied",
        "Comfortable",
        "At ease",
        "Serene",
        "Tranquil",
        "Peaceful",
      ],
      Self::Happy => &[
        "Cheerful",
        "Joyful",
        "Delighted",
        "Excited",
        "Elated",
        "Ecstatic",
        "Euphoric",
      ],
      Self::Awe => &[
        "Amazed",
        "Wonderstruck",
        "Inspired",
        "Overwhelmed",
        "Reverent",
        "Transfixed",
        "Humbled",
      ],
    }
  }

  /// Build the catalog [`Mood`] value for this kind.
  pub fn mood(self) -> Mood {
    Mood {
      id:   self.id(),
      name: self.name().to_owned(),
      icon: self.icon().to_owned(),
    }
  }
}

// ─── Mood ────────────────────────────────────────────────────────────────────

/// A named mood as chosen by the user. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
  pub id:   u32,
  pub name: String,
  /// Opaque icon reference; may be empty for moods decoded from old state.
  #[serde(default)]
  pub icon: String,
}

impl Mood {
  /// The catalog kind this mood's name refers to, if any.
  pub fn kind(&self) -> Option<MoodKind> { MoodKind::from_name(&self.name) }
}

/// The full mood catalog, in display order.
pub fn catalog() -> Vec<Mood> { MoodKind::iter().map(MoodKind::mood).collect() }

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn catalog_ids_are_unique_and_stable() {
    let moods = catalog();
    assert_eq!(moods.len(), 6);
    let ids: HashSet<u32> = moods.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 6);
    assert_eq!(moods[0].name, "Angry");
    assert_eq!(moods[0].id, 1);
    assert_eq!(moods[5].name, "Awe");
    assert_eq!(moods[5].id, 6);
  }

  #[test]
  fn from_name_ignores_case() {
    assert_eq!(MoodKind::from_name("happy"), Some(MoodKind::Happy));
    assert_eq!(MoodKind::from_name(" AWE "), Some(MoodKind::Awe));
    assert_eq!(MoodKind::from_name("Bored"), None);
  }

  #[test]
  fn from_id_matches_catalog() {
    for kind in MoodKind::iter() {
      assert_eq!(MoodKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(MoodKind::from_id(0), None);
  }

  #[test]
  fn every_kind_has_stages() {
    assert!(MoodKind::iter().all(|k| !k.stages().is_empty()));
    assert_eq!(MoodKind::Angry.stages().len(), 9);
  }
}
