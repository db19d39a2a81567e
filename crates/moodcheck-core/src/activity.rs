//! The activity catalog: generic activities plus the per-mood table.

use crate::mood::MoodKind;

/// Activities offered regardless of mood.
pub const GENERIC_ACTIVITIES: &[&str] = &[
  "Yoga",
  "Meditation",
  "Reading",
  "Journaling",
  "Running",
  "Cycling",
  "Swimming",
  "Painting",
  "Drawing",
  "Photography",
  "Cooking",
  "Baking",
  "Gardening",
  "Hiking",
  "Dancing",
  "Singing",
  "Playing music",
  "Writing",
  "Knitting",
  "Pottery",
  "Chess",
  "Board games",
  "Puzzles",
  "Volunteering",
  "Socializing",
  "Movie night",
  "Stargazing",
  "Museum visit",
  "Learning language",
  "Coding",
  "Woodworking",
  "Fishing",
  "Birdwatching",
  "Shopping",
  "Spa day",
  "Massage",
  "Nap",
  "Deep breathing",
  "Mindfulness",
];

impl MoodKind {
  /// Activities that tend to suit this mood.
  pub fn activities(self) -> &'static [&'static str] {
    match self {
      Self::Angry => &[
        "Boxing",
        "Running",
        "Screaming into pillow",
        "Intense workout",
      ],
      Self::Sad => &[
        "Calling a friend",
        "Watching comedy",
        "Pet therapy",
        "Baking cookies",
      ],
      Self::Happy => &[
        "Dancing",
        "Celebrating",
        "Sharing with friends",
        "Helping others",
      ],
      Self::Content => &["Reading", "Gardening", "Painting", "Journaling"],
      Self::Neutral => &[
        "Meditation",
        "Walking",
        "People watching",
        "Listening to music",
      ],
      Self::Awe => &["Stargazing", "Museum visit", "Nature walk", "Photography"],
    }
  }
}

/// Mapped activities for a mood name; unrecognised names map to nothing.
pub fn activities_for(name: &str) -> &'static [&'static str] {
  MoodKind::from_name(name)
    .map(MoodKind::activities)
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn generic_catalog_has_no_duplicates() {
    let set: HashSet<_> = GENERIC_ACTIVITIES.iter().collect();
    assert_eq!(set.len(), GENERIC_ACTIVITIES.len());
  }

  #[test]
  fn lookup_is_case_insensitive() {
    assert_eq!(activities_for("angry"), MoodKind::Angry.activities());
    assert!(activities_for("Bored").is_empty());
  }
}
