//! Selection rules: the toggle primitive and activity suggestions.
//!
//! Moods, activities, and reminder days all share one toggle rule, so it is
//! implemented once in [`toggle_with_limit`]. Suggestions are shuffled with
//! a caller-supplied random source so tests can seed it.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
  activity::{GENERIC_ACTIVITIES, activities_for},
  mood::Mood,
};

/// Upper bound on [`ActivityChoice`] size.
pub const MAX_ACTIVITIES: usize = 5;

/// Upper bound on the length of a suggestion set.
pub const MAX_SUGGESTIONS: usize = 15;

// ─── Toggle primitive ────────────────────────────────────────────────────────

/// Remove `item` if an equal one (per `same`) is present; otherwise append it
/// when `items` is below `limit`. At the limit, `items` is returned as-is.
pub fn toggle_with_limit<T>(
  mut items: Vec<T>,
  item: T,
  limit: Option<usize>,
  same: impl Fn(&T, &T) -> bool,
) -> Vec<T> {
  if let Some(pos) = items.iter().position(|existing| same(existing, &item)) {
    items.remove(pos);
  } else if limit.is_none_or(|max| items.len() < max) {
    items.push(item);
  }
  items
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// The moods chosen in the current session, unique by id, in pick order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
  moods: Vec<Mood>,
}

impl Selection {
  pub fn new() -> Self { Self::default() }

  /// Build a selection, keeping the first occurrence of each mood id.
  pub fn from_moods(moods: impl IntoIterator<Item = Mood>) -> Self {
    let mut seen = HashSet::new();
    Self {
      moods: moods.into_iter().filter(|m| seen.insert(m.id)).collect(),
    }
  }

  pub fn moods(&self) -> &[Mood] { &self.moods }

  pub fn into_moods(self) -> Vec<Mood> { self.moods }

  pub fn len(&self) -> usize { self.moods.len() }

  pub fn is_empty(&self) -> bool { self.moods.is_empty() }

  pub fn contains(&self, mood_id: u32) -> bool {
    self.moods.iter().any(|m| m.id == mood_id)
  }

  pub fn get(&self, index: usize) -> Option<&Mood> { self.moods.get(index) }

  /// Mood names joined with `", "`, e.g. `"Angry, Sad"`.
  pub fn joined_names(&self) -> String {
    self
      .moods
      .iter()
      .map(|m| m.name.as_str())
      .collect::<Vec<_>>()
      .join(", ")
  }
}

/// Add `mood` if absent, remove it if present. No upper bound.
pub fn toggle_mood(selection: Selection, mood: Mood) -> Selection {
  Selection {
    moods: toggle_with_limit(selection.moods, mood, None, |a, b| a.id == b.id),
  }
}

// ─── Activities ──────────────────────────────────────────────────────────────

/// Activities picked by the user; never more than [`MAX_ACTIVITIES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityChoice {
  activities: Vec<String>,
}

impl ActivityChoice {
  pub fn new() -> Self { Self::default() }

  /// Build a choice from arbitrary input, dropping duplicates and anything
  /// past the size limit.
  pub fn from_activities(
    activities: impl IntoIterator<Item = String>,
  ) -> Self {
    let mut seen = HashSet::new();
    Self {
      activities: activities
        .into_iter()
        .filter(|a| seen.insert(a.clone()))
        .take(MAX_ACTIVITIES)
        .collect(),
    }
  }

  pub fn as_slice(&self) -> &[String] { &self.activities }

  pub fn len(&self) -> usize { self.activities.len() }

  pub fn is_empty(&self) -> bool { self.activities.is_empty() }

  pub fn is_full(&self) -> bool { self.activities.len() >= MAX_ACTIVITIES }

  pub fn contains(&self, activity: &str) -> bool {
    self.activities.iter().any(|a| a == activity)
  }
}

/// Toggle `activity`. Adding a sixth activity is silently ignored.
pub fn toggle_activity(
  choice: ActivityChoice,
  activity: impl Into<String>,
) -> ActivityChoice {
  ActivityChoice {
    activities: toggle_with_limit(
      choice.activities,
      activity.into(),
      Some(MAX_ACTIVITIES),
      |a, b| a == b,
    ),
  }
}

/// Build the suggestion set for `selection`.
///
/// Mapped activities for each mood are merged with [`GENERIC_ACTIVITIES`],
/// deduplicated, shuffled uniformly, and cut to [`MAX_SUGGESTIONS`].
pub fn suggest_activities<R>(selection: &Selection, rng: &mut R) -> Vec<String>
where
  R: Rng + ?Sized,
{
  let mut seen = HashSet::new();
  let mut pool: Vec<&'static str> = selection
    .moods
    .iter()
    .flat_map(|m| activities_for(&m.name).iter().copied())
    .chain(GENERIC_ACTIVITIES.iter().copied())
    .filter(|a| seen.insert(*a))
    .collect();

  pool.shuffle(rng);
  pool.truncate(MAX_SUGGESTIONS);
  pool.into_iter().map(str::to_owned).collect()
}
