//! Intensity and stage picker for one selected mood.

use moodcheck_core::{checkin::INTENSITY_MAX, mood::MoodKind};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Gauge, List, ListItem, Paragraph, Wrap},
};

use super::{cursor_style, panel};
use crate::app::RateScreen;

pub fn draw(f: &mut Frame, area: Rect, screen: &RateScreen) {
  let Some(mood) = screen.current() else {
    let block = panel(" Rate your emotion ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
      Paragraph::new("No moods selected. Press Enter to choose some."),
      inner,
    );
    return;
  };

  let title = format!(
    " {} {} ({}/{}) ",
    mood.icon,
    mood.name,
    screen.index + 1,
    screen.moods.len()
  );
  let block = panel(&title);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // description
      Constraint::Length(3), // intensity
      Constraint::Min(0),    // stages
      Constraint::Length(1), // navigation
    ])
    .split(inner);

  let description = mood.kind().map(MoodKind::description).unwrap_or_default();
  f.render_widget(
    Paragraph::new(description)
      .style(Style::default().fg(Color::DarkGray))
      .wrap(Wrap { trim: true }),
    rows[0],
  );

  f.render_widget(
    Gauge::default()
      .block(panel(" Intensity "))
      .gauge_style(Style::default().fg(Color::Magenta))
      .ratio(
        (f64::from(screen.intensity) / f64::from(INTENSITY_MAX)).clamp(0.0, 1.0),
      )
      .label(format!("{}/{INTENSITY_MAX}", screen.intensity)),
    rows[1],
  );

  draw_stages(f, rows[2], screen);

  let back = if screen.index == 0 {
    "Esc Change Moods"
  } else {
    "Esc Previous Mood"
  };
  let next = if screen.is_last() {
    "Enter Complete"
  } else {
    "Enter Next Mood"
  };
  f.render_widget(
    Paragraph::new(Line::from(vec![
      Span::styled(back, Style::default().fg(Color::DarkGray)),
      Span::raw("   "),
      Span::styled(next, Style::default().fg(Color::Cyan)),
    ])),
    rows[3],
  );
}

fn draw_stages(f: &mut Frame, area: Rect, screen: &RateScreen) {
  let stages = screen.stages();
  let items: Vec<ListItem> = stages
    .iter()
    .enumerate()
    .map(|(i, stage)| {
      let picked = screen.stage.as_deref() == Some(*stage);
      let style = if i == screen.stage_cursor {
        cursor_style()
      } else if picked {
        Style::default()
          .fg(Color::Green)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default()
      };
      let mark = if picked { "● " } else { "○ " };
      ListItem::new(Line::from(vec![
        Span::styled(mark, style),
        Span::styled(*stage, style),
      ]))
    })
    .collect();

  f.render_widget(
    List::new(items).block(panel(" Which best describes it? (optional) ")),
    area,
  );
}
