//! TUI rendering, one module per wizard screen.

pub mod activities;
pub mod complete;
pub mod describe;
pub mod mood_select;
pub mod rate;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Screen, SubmitStatus};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<G>(f: &mut Frame, app: &App<G>) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header<G>(f: &mut Frame, area: Rect, app: &App<G>) {
  let date = Local::now().format("%Y-%m-%d").to_string();
  let path = app.location.split('?').next().unwrap_or_default();

  let left = Span::styled(
    format!(" moodcheck  {}", app.screen.title()),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{path}  {date} "),
    Style::default().fg(Color::DarkGray),
  );

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body<G>(f: &mut Frame, area: Rect, app: &App<G>) {
  match &app.screen {
    Screen::Welcome => draw_welcome(f, area),
    Screen::MoodSelection(screen) => mood_select::draw(f, area, screen),
    Screen::EmotionRate(screen) => rate::draw(f, area, screen),
    Screen::Description(screen) => describe::draw(f, area, screen),
    Screen::Activities(screen) => {
      activities::draw(f, area, screen, &app.submit_status)
    }
    Screen::Final(screen) => complete::draw(
      f,
      area,
      screen,
      app.last_receipt.as_ref(),
      app.saved_reminder.as_ref(),
    ),
  }
}

fn draw_welcome(f: &mut Frame, area: Rect) {
  let block = panel(" Welcome ");
  let inner = block.inner(area);
  f.render_widget(block, area);

  let lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      "Take a moment to check in with yourself.",
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(""),
    Line::from("Pick the moods you feel, rate how strongly you feel them,"),
    Line::from("jot down what is going on, and choose something that might help."),
    Line::from(""),
    Line::from(Span::styled(
      "Press Enter to begin.",
      Style::default().fg(Color::Cyan),
    )),
  ];
  f.render_widget(
    Paragraph::new(lines)
      .alignment(Alignment::Center)
      .wrap(Wrap { trim: true }),
    inner,
  );
}

/// Bordered block with a dim border, shared by all screens.
pub(crate) fn panel(title: &str) -> Block<'_> {
  Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray))
}

/// Style for the row under the cursor.
pub(crate) fn cursor_style() -> Style {
  Style::default()
    .bg(Color::Blue)
    .fg(Color::White)
    .add_modifier(Modifier::BOLD)
}

/// A `width`×`height` rect centred in `area`, clamped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<G>(f: &mut Frame, area: Rect, app: &App<G>) {
  let (mode_label, hints) = match &app.screen {
    Screen::Welcome => ("WELCOME", "Enter start  q quit"),
    Screen::MoodSelection(_) => (
      "MOODS",
      "←→/hl move  Space toggle  Enter continue  Esc back  q quit",
    ),
    Screen::EmotionRate(_) => (
      "RATE",
      "←→ intensity  ↑↓ stage  Space pick stage  Enter next  Esc previous",
    ),
    Screen::Description(_) => ("NOTES", "Type your notes  Enter continue  Esc back"),
    Screen::Activities(_) => match app.submit_status {
      SubmitStatus::Submitting => ("SENDING", "Submitting…  Esc cancel"),
      SubmitStatus::Error(_) => ("ERROR", "r retry  Esc back  q quit"),
      _ => (
        "ACTIVITIES",
        "↑↓/jk move  Space toggle  Enter complete  Esc back  q quit",
      ),
    },
    Screen::Final(screen) if screen.reminder.is_some() => (
      "REMINDER",
      "Tab field  ↑↓ hour  ←→ minute/day  p am/pm  1-7 day  a all  Enter save  Esc cancel",
    ),
    Screen::Final(_) => ("DONE", "r set reminder  n new check-in  q quit"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_color = match app.submit_status {
    SubmitStatus::Error(_) => Color::Red,
    _ => Color::Cyan,
  };
  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(mode_color)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
