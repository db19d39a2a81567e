//! Reminder configuration produced by the time-and-day picker.
//!
//! Scheduling and storing reminders is up to whoever receives the
//! [`ReminderConfig`]; this module only models the picker's state.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result, selection::toggle_with_limit};

// ─── Days ────────────────────────────────────────────────────────────────────

/// A weekday, or `All` meaning every day.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
pub enum ReminderDay {
  Sun,
  Mon,
  Tue,
  Wed,
  Thu,
  Fri,
  Sat,
  All,
}

/// Toggle `day`. `All` is exclusive: choosing it clears every other day, and
/// choosing any other day clears `All`.
pub fn toggle_day(days: Vec<ReminderDay>, day: ReminderDay) -> Vec<ReminderDay> {
  if day == ReminderDay::All {
    return if days.contains(&ReminderDay::All) {
      Vec::new()
    } else {
      vec![ReminderDay::All]
    };
  }
  let days = days
    .into_iter()
    .filter(|d| *d != ReminderDay::All)
    .collect();
  toggle_with_limit(days, day, None, |a, b| a == b)
}

// ─── Time ────────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Period {
  Am,
  #[default]
  Pm,
}

impl Period {
  pub fn toggled(self) -> Self {
    match self {
      Self::Am => Self::Pm,
      Self::Pm => Self::Am,
    }
  }
}

/// A 12-hour clock time: hours 1–12, minutes 0–59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTime {
  hours:   u8,
  minutes: u8,
}

impl Default for ReminderTime {
  fn default() -> Self {
    Self {
      hours:   3,
      minutes: 0,
    }
  }
}

impl ReminderTime {
  pub fn new(hours: u8, minutes: u8) -> Result<Self> {
    if !(1..=12).contains(&hours) || minutes > 59 {
      return Err(Error::InvalidTime(format!("{hours}:{minutes}")));
    }
    Ok(Self { hours, minutes })
  }

  pub fn hours(self) -> u8 { self.hours }

  pub fn minutes(self) -> u8 { self.minutes }

  /// Move the hour hand, wrapping 12 → 1 and 1 → 12.
  pub fn step_hours(self, delta: i8) -> Self {
    let zero_based = i16::from(self.hours) - 1 + i16::from(delta);
    Self {
      hours: (zero_based.rem_euclid(12) + 1) as u8,
      ..self
    }
  }

  /// Move the minute hand, wrapping within the hour.
  pub fn step_minutes(self, delta: i8) -> Self {
    let next = i16::from(self.minutes) + i16::from(delta);
    Self {
      minutes: next.rem_euclid(60) as u8,
      ..self
    }
  }
}

impl fmt::Display for ReminderTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}:{:02}", self.hours, self.minutes)
  }
}

impl FromStr for ReminderTime {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let invalid = || Error::InvalidTime(s.to_owned());
    let (h, m) = s.split_once(':').ok_or_else(invalid)?;
    if h.len() != 2 || m.len() != 2 {
      return Err(invalid());
    }
    let hours = h.parse().map_err(|_| invalid())?;
    let minutes = m.parse().map_err(|_| invalid())?;
    Self::new(hours, minutes).map_err(|_| invalid())
  }
}

// ─── Config ──────────────────────────────────────────────────────────────────

/// What the picker hands to the save handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderConfig {
  /// `"HH:MM"` on a 12-hour clock.
  pub time:   String,
  pub period: Period,
  pub days:   Vec<ReminderDay>,
}

impl ReminderConfig {
  /// Build a config; if `All` is among `days` it becomes the only day.
  pub fn new(time: ReminderTime, period: Period, days: Vec<ReminderDay>) -> Self {
    let days = if days.contains(&ReminderDay::All) {
      vec![ReminderDay::All]
    } else {
      days
    };
    Self {
      time: time.to_string(),
      period,
      days,
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;
  use super::ReminderDay::*;

  #[test]
  fn toggle_day_adds_and_removes() {
    let days = toggle_day(Vec::new(), Mon);
    let days = toggle_day(days, Wed);
    assert_eq!(days, vec![Mon, Wed]);
    assert_eq!(toggle_day(days, Mon), vec![Wed]);
  }

  #[test]
  fn all_clears_other_days() {
    assert_eq!(toggle_day(vec![Mon, Tue], All), vec![All]);
    assert_eq!(toggle_day(vec![All], All), Vec::<ReminderDay>::new());
  }

  #[test]
  fn other_day_clears_all() {
    assert_eq!(toggle_day(vec![All], Fri), vec![Fri]);
  }

  #[test]
  fn all_is_never_mixed_with_other_days() {
    // Walk every two-step toggle sequence from every single-day start.
    for start in ReminderDay::iter() {
      for a in ReminderDay::iter() {
        for b in ReminderDay::iter() {
          let days = toggle_day(toggle_day(vec![start], a), b);
          assert!(
            days == vec![All] || !days.contains(&All),
            "{start} -> {a} -> {b} gave {days:?}"
          );
        }
      }
    }
  }

  #[test]
  fn day_names_match_picker_labels() {
    assert_eq!(Sun.to_string(), "Sun");
    assert_eq!("All".parse::<ReminderDay>().unwrap(), All);
    assert_eq!(serde_json::to_value(Thu).unwrap(), "Thu");
  }

  #[test]
  fn time_formats_and_parses() {
    let t = ReminderTime::default();
    assert_eq!(t.to_string(), "03:00");
    assert_eq!(
      "11:45".parse::<ReminderTime>().unwrap(),
      ReminderTime::new(11, 45).unwrap()
    );
    assert!("13:00".parse::<ReminderTime>().is_err());
    assert!("3:00".parse::<ReminderTime>().is_err());
    assert!("nope".parse::<ReminderTime>().is_err());
  }

  #[test]
  fn time_steps_wrap() {
    let t = ReminderTime::new(12, 59).unwrap();
    assert_eq!(t.step_hours(1).hours(), 1);
    assert_eq!(t.step_minutes(1).minutes(), 0);
    let t = ReminderTime::new(1, 0).unwrap();
    assert_eq!(t.step_hours(-1).hours(), 12);
    assert_eq!(t.step_minutes(-5).minutes(), 55);
  }

  #[test]
  fn config_wire_shape() {
    let cfg =
      ReminderConfig::new(ReminderTime::default(), Period::Pm, vec![Mon, All]);
    assert_eq!(
      serde_json::to_value(&cfg).unwrap(),
      serde_json::json!({ "time": "03:00", "period": "pm", "days": ["All"] })
    );
    assert_eq!(Period::Am.to_string(), "am");
    assert_eq!(Period::Am.toggled(), Period::Pm);
  }
}
