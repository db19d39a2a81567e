//! Free-text notes with a remaining-characters counter.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Style},
  text::{Line, Span},
  widgets::{Paragraph, Wrap},
};

use super::panel;
use crate::app::DescribeScreen;

pub fn draw(f: &mut Frame, area: Rect, screen: &DescribeScreen) {
  let block = panel(" Describe what's on your mind ");
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Min(3),
      Constraint::Length(1),
    ])
    .split(inner);

  f.render_widget(
    Paragraph::new(format!("Feeling: {}", screen.moods.joined_names()))
      .style(Style::default().fg(Color::DarkGray)),
    rows[0],
  );

  f.render_widget(
    Paragraph::new(format!("{}▏", screen.notes))
      .block(panel(" Notes (optional) "))
      .wrap(Wrap { trim: false }),
    rows[1],
  );

  let remaining = screen.remaining();
  let color = if remaining == 0 {
    Color::Red
  } else if remaining <= 20 {
    Color::Yellow
  } else {
    Color::DarkGray
  };
  f.render_widget(
    Paragraph::new(Line::from(Span::styled(
      format!("{remaining} characters remaining"),
      Style::default().fg(color),
    ))),
    rows[2],
  );
}
