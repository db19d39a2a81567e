//! Mood selection grid.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{List, ListItem, Paragraph},
};

use super::{cursor_style, panel};
use crate::app::MoodSelectScreen;

pub fn draw(f: &mut Frame, area: Rect, screen: &MoodSelectScreen) {
  let block = panel(" How are you feeling? ");
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(2)])
    .split(inner);

  let items: Vec<ListItem> = screen
    .catalog
    .iter()
    .enumerate()
    .map(|(i, mood)| {
      let selected = screen.moods.contains(mood.id);
      let mark = if selected { "[x] " } else { "[ ] " };
      let style = if i == screen.cursor {
        cursor_style()
      } else if selected {
        Style::default().fg(Color::Green)
      } else {
        Style::default()
      };
      ListItem::new(Line::from(vec![
        Span::styled(mark, style),
        Span::styled(format!("{} ", mood.icon), style),
        Span::styled(mood.name.clone(), style),
      ]))
    })
    .collect();
  f.render_widget(List::new(items), rows[0]);

  let footer = if screen.moods.is_empty() {
    Span::styled(
      "Select one or more moods to continue.",
      Style::default().fg(Color::DarkGray),
    )
  } else {
    Span::styled(
      format!("Selected: {}", screen.moods.joined_names()),
      Style::default().add_modifier(Modifier::BOLD),
    )
  };
  f.render_widget(Paragraph::new(Line::from(footer)), rows[1]);
}
