//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn label_style(is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn value_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

const PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);

/// Lines for one form field: a label line followed by its value lines.
///
/// `option_cursor` is the highlighted option of an active checkbox group.
pub fn field_lines(field: &FormField, is_active: bool, option_cursor: usize) -> Vec<Line<'static>> {
    let marker = if is_active { "▸ " } else { "  " };
    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(field.label(), label_style(is_active)),
    ])];

    match field.kind() {
        FieldKind::Text | FieldKind::Number => {
            let value = field.as_text();
            let mut spans = vec![Span::raw("    ")];
            if value.is_empty() && !is_active {
                spans.push(Span::styled("(empty)", PLACEHOLDER));
            } else {
                spans.push(Span::styled(value.to_string(), value_style(is_active)));
            }
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            lines.push(Line::from(spans));
        }
        FieldKind::Select(_) => {
            let value = field.display_value();
            let style = if field.as_text().is_empty() {
                PLACEHOLDER
            } else {
                value_style(is_active)
            };
            let line = if is_active {
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                    Span::styled(value, style),
                    Span::styled(" ▶", Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(vec![Span::raw("    "), Span::styled(value, style)])
            };
            lines.push(line);
        }
        FieldKind::Radio(options) => {
            let mut spans = vec![Span::raw("    ")];
            for option in options {
                let chosen = field.as_text() == *option;
                let mark = if chosen { "(•) " } else { "( ) " };
                let style = if chosen {
                    value_style(is_active)
                } else {
                    Style::default().fg(Color::Gray)
                };
                spans.push(Span::styled(format!("{mark}{option}  "), style));
            }
            lines.push(Line::from(spans));
        }
        FieldKind::Checkboxes(options) => {
            for (idx, option) in options.iter().enumerate() {
                let checked = field.selected().iter().any(|s| s == option);
                let mark = if checked { "[x] " } else { "[ ] " };
                let highlighted = is_active && idx == option_cursor;
                let style = if highlighted {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                } else if checked {
                    value_style(is_active)
                } else {
                    Style::default().fg(Color::Gray)
                };
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{mark}{option}"), style),
                ]));
            }
        }
    }

    lines
}

/// Dimmed key hint line
pub fn help_line(hints: &str) -> Line<'static> {
    Line::from(Span::styled(
        hints.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}
