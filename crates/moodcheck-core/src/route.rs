//! Navigation locations for the wizard.
//!
//! Every screen is addressed by a location string such as
//! `/emotion-rate?currentIndex=1&moods=%5B…%5D`. Screens write their outgoing
//! state into the next location with [`Route::to_location`] and read it back
//! with [`Route::parse`], which never fails: unknown paths lead home, and
//! missing or malformed parameters degrade to empty values.

use std::fmt;

use crate::{
  carrier,
  checkin::MoodRating,
  selection::{ActivityChoice, Selection},
};

const HOME: &str = "/";
const MOOD_SELECTION: &str = "/mood-selection";
const EMOTION_RATE: &str = "/emotion-rate";
const EMOTION_DESCRIPTION: &str = "/emotion-description";
const ACTIVITY_PAGE: &str = "/activity-page";
const FINAL_PAGE: &str = "/final-page";

/// A wizard step together with the state it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
  Home,
  MoodSelection {
    moods: Selection,
  },
  /// Rate the mood at `index`; one visit per selected mood.
  EmotionRate {
    index:   usize,
    moods:   Selection,
    ratings: Vec<MoodRating>,
  },
  /// `notes` is only set when coming back from the activities step.
  EmotionDescription {
    moods:   Selection,
    ratings: Vec<MoodRating>,
    notes:   String,
  },
  ActivityPage {
    moods:   Selection,
    ratings: Vec<MoodRating>,
    notes:   String,
  },
  FinalPage {
    moods:      Selection,
    activities: ActivityChoice,
  },
}

impl Route {
  pub fn path(&self) -> &'static str {
    match self {
      Self::Home => HOME,
      Self::MoodSelection { .. } => MOOD_SELECTION,
      Self::EmotionRate { .. } => EMOTION_RATE,
      Self::EmotionDescription { .. } => EMOTION_DESCRIPTION,
      Self::ActivityPage { .. } => ACTIVITY_PAGE,
      Self::FinalPage { .. } => FINAL_PAGE,
    }
  }

  /// Render the location string for this route.
  pub fn to_location(&self) -> String {
    let mut query: Vec<(&str, String)> = Vec::new();
    match self {
      Self::Home => {}
      Self::MoodSelection { moods } => {
        if !moods.is_empty() {
          query.push(("moods", carrier::encode(moods)));
        }
      }
      Self::EmotionRate {
        index,
        moods,
        ratings,
      } => {
        query.push(("currentIndex", index.to_string()));
        query.push(("moods", carrier::encode(moods)));
        push_ratings(&mut query, ratings);
      }
      Self::EmotionDescription {
        moods,
        ratings,
        notes,
      }
      | Self::ActivityPage {
        moods,
        ratings,
        notes,
      } => {
        query.push(("moods", carrier::encode(moods)));
        push_ratings(&mut query, ratings);
        if !notes.is_empty() {
          query.push(("notes", carrier::encode_text(notes)));
        }
      }
      Self::FinalPage { moods, activities } => {
        query.push(("moods", carrier::encode(moods)));
        query.push(("activities", carrier::encode_activities(activities)));
      }
    }

    if query.is_empty() {
      return self.path().to_owned();
    }
    let query = query
      .iter()
      .map(|(k, v)| format!("{k}={v}"))
      .collect::<Vec<_>>()
      .join("&");
    format!("{}?{query}", self.path())
  }

  /// Parse a location. Never fails; see the module docs.
  pub fn parse(location: &str) -> Self {
    let (path, query) = location.split_once('?').unwrap_or((location, ""));
    let param = |key: &str| query_param(query, key);

    let moods = || {
      param("moods")
        .map(carrier::decode_or_default)
        .unwrap_or_default()
    };
    let ratings = || {
      param("ratings")
        .map(carrier::decode_ratings_or_default)
        .unwrap_or_default()
    };
    let notes = || {
      param("notes")
        .map(|raw| {
          carrier::decode_text(raw).unwrap_or_else(|e| {
            tracing::warn!("ignoring notes: {e}");
            String::new()
          })
        })
        .unwrap_or_default()
    };

    let path = match path.trim_end_matches('/') {
      "" => HOME,
      p => p,
    };
    match path {
      MOOD_SELECTION => Self::MoodSelection { moods: moods() },
      EMOTION_RATE => {
        let moods = moods();
        let index = param("currentIndex")
          .map(|raw| {
            raw.parse::<usize>().unwrap_or_else(|_| {
              tracing::warn!("ignoring currentIndex {raw:?}");
              0
            })
          })
          .unwrap_or(0)
          .min(moods.len().saturating_sub(1));
        Self::EmotionRate {
          index,
          moods,
          ratings: ratings(),
        }
      }
      EMOTION_DESCRIPTION => Self::EmotionDescription {
        moods:   moods(),
        ratings: ratings(),
        notes:   notes(),
      },
      ACTIVITY_PAGE => Self::ActivityPage {
        moods:   moods(),
        ratings: ratings(),
        notes:   notes(),
      },
      FINAL_PAGE => Self::FinalPage {
        moods:      moods(),
        activities: param("activities")
          .map(carrier::decode_activities_or_default)
          .unwrap_or_default(),
      },
      HOME => Self::Home,
      other => {
        tracing::warn!("unknown location {other:?}, going home");
        Self::Home
      }
    }
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_location())
  }
}

fn push_ratings(query: &mut Vec<(&str, String)>, ratings: &[MoodRating]) {
  if !ratings.is_empty() {
    query.push(("ratings", carrier::encode_ratings(ratings)));
  }
}

/// First value for `key` in a raw `a=1&b=2` query string.
fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
  query
    .split('&')
    .filter_map(|pair| pair.split_once('='))
    .find_map(|(k, v)| (k == key).then_some(v))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mood::MoodKind;

  fn two_moods() -> Selection {
    Selection::from_moods([MoodKind::Angry.mood(), MoodKind::Happy.mood()])
  }

  #[test]
  fn every_route_round_trips() {
    let ratings = vec![MoodRating {
      mood_id:   1,
      intensity: 7,
      stage:     Some("Annoyed".into()),
    }];
    let routes = [
      Route::Home,
      Route::MoodSelection { moods: Selection::new() },
      Route::MoodSelection { moods: two_moods() },
      Route::EmotionRate {
        index:   1,
        moods:   two_moods(),
        ratings: ratings.clone(),
      },
      Route::EmotionDescription {
        moods:   two_moods(),
        ratings: Vec::new(),
        notes:   String::new(),
      },
      Route::EmotionDescription {
        moods:   two_moods(),
        ratings: ratings.clone(),
        notes:   "kept on the way back".into(),
      },
      Route::ActivityPage {
        moods:   two_moods(),
        ratings: ratings.clone(),
        notes:   "long day & short temper".into(),
      },
      Route::FinalPage {
        moods:      two_moods(),
        activities: ActivityChoice::from_activities(["Boxing".to_string()]),
      },
    ];
    for route in routes {
      let location = route.to_location();
      assert_eq!(Route::parse(&location), route, "{location}");
    }
  }

  #[test]
  fn home_and_bare_paths() {
    assert_eq!(Route::Home.to_location(), "/");
    assert_eq!(
      Route::MoodSelection { moods: Selection::new() }.to_location(),
      "/mood-selection"
    );
    assert_eq!(Route::parse(""), Route::Home);
    assert_eq!(Route::parse("/mood-selection/"), Route::MoodSelection {
      moods: Selection::new(),
    });
  }

  #[test]
  fn unknown_path_goes_home() {
    assert_eq!(Route::parse("/analytics?x=1"), Route::Home);
  }

  #[test]
  fn malformed_moods_degrade_to_empty() {
    let route = Route::parse("/activity-page?moods=not-json&notes=hi");
    assert_eq!(route, Route::ActivityPage {
      moods:   Selection::new(),
      ratings: Vec::new(),
      notes:   "hi".into(),
    });
  }

  #[test]
  fn missing_state_degrades_to_empty() {
    assert_eq!(Route::parse("/final-page"), Route::FinalPage {
      moods:      Selection::new(),
      activities: ActivityChoice::new(),
    });
  }

  #[test]
  fn out_of_range_intensity_is_clamped() {
    let moods = carrier::encode(&two_moods());
    let ratings = carrier::encode_text(
      r#"[{"mood_id":1,"intensity":200},{"mood_id":5,"intensity":0}]"#,
    );
    let route = Route::parse(&format!(
      "/emotion-rate?currentIndex=0&moods={moods}&ratings={ratings}"
    ));
    let Route::EmotionRate { ratings, .. } = route else {
      panic!("expected emotion rate, got {route:?}");
    };
    let intensities: Vec<u8> = ratings.iter().map(|r| r.intensity).collect();
    assert_eq!(intensities, vec![10, 1]);
  }

  #[test]
  fn bad_index_is_clamped() {
    let moods = carrier::encode(&two_moods());
    let route = Route::parse(&format!("/emotion-rate?currentIndex=9&moods={moods}"));
    assert!(matches!(route, Route::EmotionRate { index: 1, .. }));

    let route = Route::parse(&format!("/emotion-rate?currentIndex=x&moods={moods}"));
    assert!(matches!(route, Route::EmotionRate { index: 0, .. }));

    let route = Route::parse("/emotion-rate?currentIndex=3");
    assert!(matches!(route, Route::EmotionRate { index: 0, .. }));
  }
}
