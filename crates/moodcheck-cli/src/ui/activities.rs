//! Activity suggestions and the submit outcome.

use moodcheck_core::selection::MAX_ACTIVITIES;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{List, ListItem, Paragraph, Wrap},
};

use super::{cursor_style, panel};
use crate::app::{ActivityScreen, SubmitStatus};

pub fn draw(
  f: &mut Frame,
  area: Rect,
  screen: &ActivityScreen,
  status: &SubmitStatus,
) {
  let title = format!(
    " Pick up to {MAX_ACTIVITIES} ({}/{MAX_ACTIVITIES}) ",
    screen.choice.len()
  );
  let block = panel(&title);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(2)])
    .split(inner);

  let items: Vec<ListItem> = screen
    .suggestions
    .iter()
    .enumerate()
    .map(|(i, activity)| {
      let chosen = screen.choice.contains(activity);
      let style = if i == screen.cursor {
        cursor_style()
      } else if chosen {
        Style::default().fg(Color::Green)
      } else if screen.choice.is_full() {
        Style::default().fg(Color::DarkGray)
      } else {
        Style::default()
      };
      let mark = if chosen { "[x] " } else { "[ ] " };
      ListItem::new(Line::from(vec![
        Span::styled(mark, style),
        Span::styled(activity.as_str(), style),
      ]))
    })
    .collect();
  f.render_widget(List::new(items), rows[0]);

  let footer = match status {
    SubmitStatus::Idle => Line::from(Span::styled(
      "Enter Complete",
      Style::default().fg(Color::Cyan),
    )),
    SubmitStatus::Submitting => Line::from(Span::styled(
      "Submitting your check-in…",
      Style::default().fg(Color::Yellow),
    )),
    SubmitStatus::Success(receipt) => Line::from(Span::styled(
      format!("Saved as #{}", receipt.id),
      Style::default().fg(Color::Green),
    )),
    SubmitStatus::Error(e) => Line::from(vec![
      Span::styled(
        format!("Could not save: {e}  "),
        Style::default().fg(Color::Red),
      ),
      Span::styled("r Retry", Style::default().add_modifier(Modifier::BOLD)),
    ]),
  };
  f.render_widget(Paragraph::new(footer).wrap(Wrap { trim: true }), rows[1]);
}
