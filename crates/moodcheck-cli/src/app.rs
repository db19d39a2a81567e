//! Application state machine and event dispatcher.

use std::sync::Arc;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use moodcheck_core::{
  SubmissionError, SubmissionGateway,
  checkin::{
    CheckInReceipt, CheckInRecord, INTENSITY_DEFAULT, MoodRating, NOTES_MAX_CHARS,
    step_intensity, upsert_rating,
  },
  mood::{Mood, MoodKind, catalog},
  reminder::{Period, ReminderConfig, ReminderDay, ReminderTime, toggle_day},
  route::Route,
  selection::{
    ActivityChoice, Selection, suggest_activities, toggle_activity, toggle_mood,
  },
};
use rand::rngs::StdRng;
use strum::IntoEnumIterator;
use tokio::task::JoinHandle;

// ─── Screens ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MoodSelectScreen {
  pub catalog: Vec<Mood>,
  pub cursor:  usize,
  pub moods:   Selection,
}

#[derive(Debug, Clone)]
pub struct RateScreen {
  pub index:        usize,
  pub moods:        Selection,
  pub ratings:      Vec<MoodRating>,
  pub intensity:    u8,
  pub stage:        Option<String>,
  pub stage_cursor: usize,
}

impl RateScreen {
  pub fn current(&self) -> Option<&Mood> { self.moods.get(self.index) }

  pub fn is_last(&self) -> bool { self.index + 1 >= self.moods.len() }

  pub fn stages(&self) -> &'static [&'static str] {
    self
      .current()
      .and_then(Mood::kind)
      .map(MoodKind::stages)
      .unwrap_or_default()
  }

  /// The ratings with this screen's answer folded in.
  fn answered(&self) -> Vec<MoodRating> {
    let Some(mood) = self.current() else {
      return self.ratings.clone();
    };
    upsert_rating(self.ratings.clone(), MoodRating {
      mood_id:   mood.id,
      intensity: self.intensity,
      stage:     self.stage.clone(),
    })
  }
}

#[derive(Debug, Clone)]
pub struct DescribeScreen {
  pub moods:   Selection,
  pub ratings: Vec<MoodRating>,
  pub notes:   String,
}

impl DescribeScreen {
  pub fn remaining(&self) -> usize {
    NOTES_MAX_CHARS.saturating_sub(self.notes.chars().count())
  }
}

#[derive(Debug, Clone)]
pub struct ActivityScreen {
  pub moods:       Selection,
  pub ratings:     Vec<MoodRating>,
  pub notes:       String,
  pub suggestions: Vec<String>,
  pub cursor:      usize,
  pub choice:      ActivityChoice,
}

/// Which part of the reminder picker has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderField {
  Time,
  Days,
}

/// Unsaved state of the reminder picker.
#[derive(Debug, Clone)]
pub struct ReminderDraft {
  pub time:       ReminderTime,
  pub period:     Period,
  pub days:       Vec<ReminderDay>,
  pub field:      ReminderField,
  pub day_cursor: usize,
}

impl Default for ReminderDraft {
  fn default() -> Self {
    Self {
      time:       ReminderTime::default(),
      period:     Period::default(),
      days:       Vec::new(),
      field:      ReminderField::Time,
      day_cursor: 0,
    }
  }
}

#[derive(Debug, Clone)]
pub struct FinalScreen {
  pub moods:      Selection,
  pub activities: ActivityChoice,
  pub reminder:   Option<ReminderDraft>,
}

#[derive(Debug, Clone)]
pub enum Screen {
  Welcome,
  MoodSelection(MoodSelectScreen),
  EmotionRate(RateScreen),
  Description(DescribeScreen),
  Activities(ActivityScreen),
  Final(FinalScreen),
}

impl Screen {
  /// Build the screen for `route`, starting from its carried state.
  fn enter(route: Route, rng: &mut StdRng) -> Self {
    match route {
      Route::Home => Self::Welcome,
      Route::MoodSelection { moods } => Self::MoodSelection(MoodSelectScreen {
        catalog: catalog(),
        cursor: 0,
        moods,
      }),
      Route::EmotionRate {
        index,
        moods,
        ratings,
      } => {
        let previous = moods
          .get(index)
          .and_then(|m| ratings.iter().find(|r| r.mood_id == m.id))
          .cloned();
        let mut screen = RateScreen {
          index,
          moods,
          ratings,
          intensity: INTENSITY_DEFAULT,
          stage: None,
          stage_cursor: 0,
        };
        if let Some(previous) = previous {
          screen.intensity = step_intensity(previous.intensity, 0);
          screen.stage_cursor = previous
            .stage
            .as_deref()
            .and_then(|s| screen.stages().iter().position(|st| *st == s))
            .unwrap_or(0);
          screen.stage = previous.stage;
        }
        Self::EmotionRate(screen)
      }
      Route::EmotionDescription {
        moods,
        ratings,
        notes,
      } => Self::Description(DescribeScreen {
        moods,
        ratings,
        notes: notes.chars().take(NOTES_MAX_CHARS).collect(),
      }),
      Route::ActivityPage {
        moods,
        ratings,
        notes,
      } => {
        let suggestions = suggest_activities(&moods, rng);
        Self::Activities(ActivityScreen {
          moods,
          ratings,
          notes,
          suggestions,
          cursor: 0,
          choice: ActivityChoice::new(),
        })
      }
      Route::FinalPage { moods, activities } => Self::Final(FinalScreen {
        moods,
        activities,
        reminder: None,
      }),
    }
  }

  pub fn title(&self) -> &'static str {
    match self {
      Self::Welcome => "Welcome",
      Self::MoodSelection(_) => "How are you feeling?",
      Self::EmotionRate(_) => "Rate your emotion",
      Self::Description(_) => "Describe it",
      Self::Activities(_) => "What might help?",
      Self::Final(_) => "All done",
    }
  }
}

// ─── Submission ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
  Idle,
  Submitting,
  Success(CheckInReceipt),
  Error(SubmissionError),
}

type PendingSubmit = JoinHandle<Result<CheckInReceipt, SubmissionError>>;

/// Receives each saved reminder configuration.
pub type ReminderHandler = Box<dyn FnMut(&ReminderConfig) + Send>;

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<G> {
  pub screen: Screen,

  /// Location of the current screen, including its encoded state.
  pub location: String,

  pub submit_status: SubmitStatus,

  /// Receipt of the last successful submission.
  pub last_receipt: Option<CheckInReceipt>,

  /// Reminder most recently handed to the save handler.
  pub saved_reminder: Option<ReminderConfig>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  pending:     Option<PendingSubmit>,
  gateway:     Arc<G>,
  rng:         StdRng,
  on_reminder: ReminderHandler,
}

impl<G: SubmissionGateway + 'static> App<G> {
  /// Create an [`App`] on the welcome screen.
  pub fn new(gateway: G, rng: StdRng) -> Self {
    Self {
      screen: Screen::Welcome,
      location: Route::Home.to_location(),
      submit_status: SubmitStatus::Idle,
      last_receipt: None,
      saved_reminder: None,
      status_msg: String::new(),
      pending: None,
      gateway: Arc::new(gateway),
      rng,
      on_reminder: Box::new(|_| {}),
    }
  }

  /// Replace the reminder save handler.
  pub fn with_reminder_handler(
    mut self,
    handler: impl FnMut(&ReminderConfig) + Send + 'static,
  ) -> Self {
    self.on_reminder = Box::new(handler);
    self
  }

  // ── Navigation ────────────────────────────────────────────────────────────

  /// Move to `route`. Any in-flight submission is abandoned.
  pub fn navigate(&mut self, route: Route) {
    self.go_to(&route.to_location());
  }

  /// Move to a location string, as if it were opened directly. Malformed
  /// state degrades to empty defaults.
  pub fn go_to(&mut self, location: &str) {
    self.abandon_submission();
    tracing::debug!(%location, "navigate");
    self.location = location.to_owned();
    self.status_msg.clear();
    self.screen = Screen::enter(Route::parse(location), &mut self.rng);
  }

  // ── Submission ────────────────────────────────────────────────────────────

  pub fn is_submitting(&self) -> bool {
    self.submit_status == SubmitStatus::Submitting
  }

  /// Spawn the submission for the activities screen. Ignored while one is
  /// already in flight.
  pub fn start_submit(&mut self) {
    if self.is_submitting() {
      tracing::debug!("submit ignored; already submitting");
      return;
    }
    let Screen::Activities(screen) = &self.screen else {
      return;
    };
    if screen.moods.is_empty() {
      self.status_msg = "Select at least one mood before completing.".into();
      return;
    }
    let record = match CheckInRecord::new(
      screen.moods.joined_names(),
      &screen.notes,
      Utc::now(),
    ) {
      Ok(record) => record,
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        return;
      }
    };

    tracing::info!(emotion = %record.emotion, "submitting check-in");
    let gateway = Arc::clone(&self.gateway);
    self.pending = Some(tokio::spawn(async move { gateway.submit(record).await }));
    self.submit_status = SubmitStatus::Submitting;
    self.status_msg = "Submitting…".into();
  }

  /// Collect the submission result once it is ready.
  pub async fn poll_submission(&mut self) {
    if !self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
      return;
    }
    let Some(handle) = self.pending.take() else {
      return;
    };
    let outcome = match handle.await {
      Ok(outcome) => outcome,
      Err(e) => Err(SubmissionError::Transport(format!(
        "submission task failed: {e}"
      ))),
    };
    self.finish_submission(outcome);
  }

  fn finish_submission(&mut self, outcome: Result<CheckInReceipt, SubmissionError>) {
    match outcome {
      Ok(receipt) => {
        tracing::info!(id = receipt.id, "check-in submitted");
        self.last_receipt = Some(receipt.clone());
        if let Screen::Activities(screen) = &self.screen {
          let route = Route::FinalPage {
            moods:      screen.moods.clone(),
            activities: screen.choice.clone(),
          };
          self.navigate(route);
        }
        self.submit_status = SubmitStatus::Success(receipt);
      }
      Err(e) => {
        tracing::warn!(error = %e, "check-in submission failed");
        self.status_msg = format!("{e}  [r] retry");
        self.submit_status = SubmitStatus::Error(e);
      }
    }
  }

  fn abandon_submission(&mut self) {
    if let Some(handle) = self.pending.take() {
      tracing::debug!("abandoning in-flight submission");
      handle.abort();
    }
    self.submit_status = SubmitStatus::Idle;
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.screen {
      Screen::Welcome => self.handle_welcome_key(key),
      Screen::MoodSelection(_) => self.handle_mood_key(key),
      Screen::EmotionRate(_) => self.handle_rate_key(key),
      Screen::Description(_) => self.handle_describe_key(key),
      Screen::Activities(_) => self.handle_activity_key(key),
      Screen::Final(_) => self.handle_final_key(key),
    }
  }

  fn handle_welcome_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') | KeyCode::Esc => return false,
      KeyCode::Enter => self.navigate(Route::MoodSelection {
        moods: Selection::new(),
      }),
      _ => {}
    }
    true
  }

  fn handle_mood_key(&mut self, key: KeyEvent) -> bool {
    let Screen::MoodSelection(screen) = &mut self.screen else {
      return true;
    };
    let last = screen.catalog.len().saturating_sub(1);
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => {
        screen.cursor = (screen.cursor + 1).min(last);
      }
      KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
        screen.cursor = screen.cursor.saturating_sub(1);
      }
      KeyCode::Char(' ') => {
        if let Some(mood) = screen.catalog.get(screen.cursor).cloned() {
          screen.moods = toggle_mood(std::mem::take(&mut screen.moods), mood);
        }
      }
      KeyCode::Enter => {
        if screen.moods.is_empty() {
          self.status_msg = "Choose at least one mood to continue.".into();
        } else {
          let moods = screen.moods.clone();
          self.navigate(Route::EmotionRate {
            index: 0,
            moods,
            ratings: Vec::new(),
          });
        }
      }
      KeyCode::Esc => self.navigate(Route::Home),
      _ => {}
    }
    true
  }

  fn handle_rate_key(&mut self, key: KeyEvent) -> bool {
    let Screen::EmotionRate(screen) = &mut self.screen else {
      return true;
    };
    if screen.current().is_none() {
      match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => {
          self.navigate(Route::MoodSelection {
            moods: Selection::new(),
          })
        }
        _ => {}
      }
      return true;
    }

    let stage_count = screen.stages().len();
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Right | KeyCode::Char('l' | '+') => {
        screen.intensity = step_intensity(screen.intensity, 1);
      }
      KeyCode::Left | KeyCode::Char('h' | '-') => {
        screen.intensity = step_intensity(screen.intensity, -1);
      }
      KeyCode::Down | KeyCode::Char('j') => {
        screen.stage_cursor =
          (screen.stage_cursor + 1).min(stage_count.saturating_sub(1));
      }
      KeyCode::Up | KeyCode::Char('k') => {
        screen.stage_cursor = screen.stage_cursor.saturating_sub(1);
      }
      KeyCode::Char(' ') => {
        let picked = screen.stages().get(screen.stage_cursor).copied();
        screen.stage = match (picked, screen.stage.as_deref()) {
          (Some(p), Some(current)) if p == current => None,
          (picked, _) => picked.map(str::to_owned),
        };
      }
      KeyCode::Enter => {
        let ratings = screen.answered();
        let moods = screen.moods.clone();
        let route = if screen.is_last() {
          Route::EmotionDescription {
            moods,
            ratings,
            notes: String::new(),
          }
        } else {
          Route::EmotionRate {
            index: screen.index + 1,
            moods,
            ratings,
          }
        };
        self.navigate(route);
      }
      KeyCode::Esc | KeyCode::Backspace => {
        let ratings = screen.answered();
        let moods = screen.moods.clone();
        let route = match screen.index {
          0 => Route::MoodSelection { moods },
          i => Route::EmotionRate {
            index: i - 1,
            moods,
            ratings,
          },
        };
        self.navigate(route);
      }
      _ => {}
    }
    true
  }

  fn handle_describe_key(&mut self, key: KeyEvent) -> bool {
    let Screen::Description(screen) = &mut self.screen else {
      return true;
    };
    match key.code {
      KeyCode::Char(c) => {
        if screen.remaining() > 0 {
          screen.notes.push(c);
        }
      }
      KeyCode::Backspace => {
        screen.notes.pop();
      }
      KeyCode::Enter => {
        let route = Route::ActivityPage {
          moods:   screen.moods.clone(),
          ratings: screen.ratings.clone(),
          notes:   screen.notes.clone(),
        };
        self.navigate(route);
      }
      KeyCode::Esc => {
        let route = Route::EmotionRate {
          index:   screen.moods.len().saturating_sub(1),
          moods:   screen.moods.clone(),
          ratings: screen.ratings.clone(),
        };
        self.navigate(route);
      }
      _ => {}
    }
    true
  }

  fn handle_activity_key(&mut self, key: KeyEvent) -> bool {
    let submitting = self.is_submitting();
    let Screen::Activities(screen) = &mut self.screen else {
      return true;
    };
    let last = screen.suggestions.len().saturating_sub(1);
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Down | KeyCode::Right | KeyCode::Char('j' | 'l') => {
        screen.cursor = (screen.cursor + 1).min(last);
      }
      KeyCode::Up | KeyCode::Left | KeyCode::Char('k' | 'h') => {
        screen.cursor = screen.cursor.saturating_sub(1);
      }
      KeyCode::Char(' ') if !submitting => {
        if let Some(activity) = screen.suggestions.get(screen.cursor).cloned() {
          screen.choice =
            toggle_activity(std::mem::take(&mut screen.choice), activity);
        }
      }
      KeyCode::Enter => self.start_submit(),
      KeyCode::Char('r') if matches!(self.submit_status, SubmitStatus::Error(_)) => {
        self.start_submit()
      }
      KeyCode::Esc => {
        let route = Route::EmotionDescription {
          moods:   screen.moods.clone(),
          ratings: screen.ratings.clone(),
          notes:   screen.notes.clone(),
        };
        self.navigate(route);
      }
      _ => {}
    }
    true
  }

  fn handle_final_key(&mut self, key: KeyEvent) -> bool {
    let Screen::Final(screen) = &mut self.screen else {
      return true;
    };
    if screen.reminder.is_some() {
      self.handle_reminder_key(key);
      return true;
    }
    match key.code {
      KeyCode::Char('q') | KeyCode::Esc => return false,
      KeyCode::Char('r') => screen.reminder = Some(ReminderDraft::default()),
      KeyCode::Char('n') | KeyCode::Enter => self.navigate(Route::MoodSelection {
        moods: Selection::new(),
      }),
      _ => {}
    }
    true
  }

  fn handle_reminder_key(&mut self, key: KeyEvent) {
    let Screen::Final(FinalScreen {
      reminder: Some(draft),
      ..
    }) = &mut self.screen
    else {
      return;
    };
    let day_count = ReminderDay::iter().count();
    match key.code {
      KeyCode::Tab | KeyCode::BackTab => {
        draft.field = match draft.field {
          ReminderField::Time => ReminderField::Days,
          ReminderField::Days => ReminderField::Time,
        };
      }
      KeyCode::Char('p') => draft.period = draft.period.toggled(),
      KeyCode::Char(c @ '1'..='7') => {
        let offset = c as usize - '1' as usize;
        if let Some(day) = ReminderDay::iter().nth(offset) {
          draft.days = toggle_day(std::mem::take(&mut draft.days), day);
        }
      }
      KeyCode::Char('a') => {
        draft.days = toggle_day(std::mem::take(&mut draft.days), ReminderDay::All);
      }
      KeyCode::Up | KeyCode::Char('k') if draft.field == ReminderField::Time => {
        draft.time = draft.time.step_hours(1);
      }
      KeyCode::Down | KeyCode::Char('j') if draft.field == ReminderField::Time => {
        draft.time = draft.time.step_hours(-1);
      }
      KeyCode::Right | KeyCode::Char('l') if draft.field == ReminderField::Time => {
        draft.time = draft.time.step_minutes(1);
      }
      KeyCode::Left | KeyCode::Char('h') if draft.field == ReminderField::Time => {
        draft.time = draft.time.step_minutes(-1);
      }
      KeyCode::Right | KeyCode::Char('l') => {
        draft.day_cursor = (draft.day_cursor + 1).min(day_count - 1);
      }
      KeyCode::Left | KeyCode::Char('h') => {
        draft.day_cursor = draft.day_cursor.saturating_sub(1);
      }
      KeyCode::Char(' ') if draft.field == ReminderField::Days => {
        if let Some(day) = ReminderDay::iter().nth(draft.day_cursor) {
          draft.days = toggle_day(std::mem::take(&mut draft.days), day);
        }
      }
      KeyCode::Enter => {
        let config =
          ReminderConfig::new(draft.time, draft.period, draft.days.clone());
        (self.on_reminder)(&config);
        self.status_msg = format!(
          "Reminder set for {} {} on {}",
          config.time,
          config.period,
          day_list(&config.days)
        );
        self.saved_reminder = Some(config);
        if let Screen::Final(screen) = &mut self.screen {
          screen.reminder = None;
        }
      }
      KeyCode::Esc => {
        if let Screen::Final(screen) = &mut self.screen {
          screen.reminder = None;
        }
      }
      _ => {}
    }
  }
}

/// `"Mon, Wed"`, or `"no days"` when empty.
pub fn day_list(days: &[ReminderDay]) -> String {
  if days.is_empty() {
    return "no days".into();
  }
  days
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(", ")
}
