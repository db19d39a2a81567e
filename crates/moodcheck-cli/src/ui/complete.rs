//! Final summary and the reminder picker modal.

use moodcheck_core::{
  checkin::CheckInReceipt,
  reminder::{ReminderConfig, ReminderDay},
};
use ratatui::{
  Frame,
  layout::{Alignment, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Clear, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use super::{centered, cursor_style, panel};
use crate::app::{FinalScreen, ReminderDraft, ReminderField, day_list};

pub fn draw(
  f: &mut Frame,
  area: Rect,
  screen: &FinalScreen,
  receipt: Option<&CheckInReceipt>,
  reminder: Option<&ReminderConfig>,
) {
  let block = panel(" All done ");
  let inner = block.inner(area);
  f.render_widget(block, area);

  let bold = Style::default().add_modifier(Modifier::BOLD);
  let dim = Style::default().fg(Color::DarkGray);

  let mut lines = vec![
    Line::from(""),
    Line::from(Span::styled("Thanks for checking in.", bold)),
    Line::from(""),
    Line::from(vec![
      Span::styled("Moods: ", dim),
      Span::raw(screen.moods.joined_names()),
    ]),
  ];

  if screen.activities.is_empty() {
    lines.push(Line::from(Span::styled("No activities picked.", dim)));
  } else {
    lines.push(Line::from(Span::styled("Activities:", dim)));
    lines.extend(
      screen
        .activities
        .as_slice()
        .iter()
        .map(|a| Line::from(format!("  • {a}"))),
    );
  }

  if let Some(receipt) = receipt {
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
      Span::styled("Check-in id: ", dim),
      Span::raw(receipt.id.to_string()),
    ]));
  }

  lines.push(Line::from(""));
  lines.push(match reminder {
    Some(config) => Line::from(vec![
      Span::styled("Reminder: ", dim),
      Span::raw(format!(
        "{} {} on {}",
        config.time,
        config.period,
        day_list(&config.days)
      )),
    ]),
    None => Line::from(Span::styled("Press r to set a daily reminder.", dim)),
  });

  f.render_widget(
    Paragraph::new(lines).wrap(Wrap { trim: false }),
    inner,
  );

  if let Some(draft) = &screen.reminder {
    draw_reminder(f, area, draft);
  }
}

fn draw_reminder(f: &mut Frame, area: Rect, draft: &ReminderDraft) {
  let modal = centered(area, 56, 9);
  f.render_widget(Clear, modal);
  let block = panel(" Set reminder ");
  let inner = block.inner(modal);
  f.render_widget(block, modal);

  let focus = |field: ReminderField| {
    if draft.field == field {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    }
  };

  let time_line = Line::from(vec![
    Span::styled("Time  ", focus(ReminderField::Time)),
    Span::raw(format!("{} {}", draft.time, draft.period)),
  ]);

  let mut day_spans = vec![Span::styled("Days  ", focus(ReminderField::Days))];
  for (i, day) in ReminderDay::iter().enumerate() {
    let chosen = draft.days.contains(&day);
    let style = if draft.field == ReminderField::Days && i == draft.day_cursor {
      cursor_style()
    } else if chosen {
      Style::default().fg(Color::Green)
    } else {
      Style::default().fg(Color::DarkGray)
    };
    day_spans.push(Span::styled(format!(" {day} "), style));
  }

  let lines = vec![
    Line::from(""),
    time_line,
    Line::from(""),
    Line::from(day_spans),
    Line::from(""),
    Line::from(Span::styled(
      "Enter save  Esc cancel",
      Style::default().fg(Color::DarkGray),
    )),
  ];
  f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
