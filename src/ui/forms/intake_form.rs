//! Intake form page: visible fields on the left, submit panel on the right

use super::field_renderer::{field_lines, help_line};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldId, FormRow, FormState, Section};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const NO_CHILD_NOTICE: &str = "No Child, No Pregnant";

/// Rendered form body plus the line span of the focused field
pub struct FormBody {
    pub lines: Vec<Line<'static>>,
    pub focused: Option<(usize, usize)>,
}

/// Build the lines for every visible field, in schema order
pub fn form_body(form: &FormState, focus: Option<FormRow>, option_cursor: usize) -> FormBody {
    let sections = form.visible_sections();
    let mut lines = Vec::new();
    let mut focused = None;

    for field in form.visible_fields() {
        let is_active = focus == Some(FormRow::Field(field.id()));
        let start = lines.len();
        lines.extend(field_lines(field, is_active, option_cursor));
        if is_active {
            focused = Some((start, lines.len() - start));
        }

        if field.id() == FieldId::ChildStatus && sections.contains(&Section::NoChildNotice) {
            lines.push(Line::from(Span::styled(
                format!("    {NO_CHILD_NOTICE}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
    }

    FormBody { lines, focused }
}

/// First line to show so the focused span fits in `height` rows
fn scroll_for(focused: Option<(usize, usize)>, height: usize) -> usize {
    match focused {
        Some((start, len)) if start + len > height => (start + len).saturating_sub(height).min(start),
        _ => 0,
    }
}

/// Draw the open form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = &app.state.form else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(24), // Action panel
        ])
        .split(area);

    let form_focused = !app.state.is_submit_focused();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} ", form.variant().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let body = form_body(form, app.state.focus, app.state.option_cursor);
    let offset = scroll_for(body.focused, inner.height as usize);
    let paragraph = Paragraph::new(body.lines).scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, inner);

    draw_action_panel(frame, chunks[1], app);
}

/// Draw the submit panel
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.is_submit_focused();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),
            Constraint::Min(0), // Hints
        ])
        .split(inner);

    let label = if app.state.loading {
        "Submitting..."
    } else {
        "Submit"
    };
    render_button(frame, chunks[0], label, is_focused, !app.state.loading);

    let hints = vec![
        help_line("↑/↓ Tab: move"),
        help_line("←/→: choose"),
        help_line("Space: check"),
        help_line(&format!("{SUBMIT_SHORTCUT}: submit")),
        help_line(if app.state.loading {
            "Esc: cancel request"
        } else {
            "Esc: back"
        }),
    ];
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldInput, FormVariant};
    use pretty_assertions::assert_eq;

    fn text(body: &FormBody) -> Vec<String> {
        body.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_hidden_sections_are_not_rendered() {
        let form = FormState::new(FormVariant::HealthCheck);
        let lines = text(&form_body(&form, None, 0));
        assert!(!lines.iter().any(|l| l.contains("Heart Condition")));
        assert!(!lines.iter().any(|l| l.contains("Symptoms")));
    }

    #[test]
    fn test_no_child_notice_follows_child_status() {
        let mut form = FormState::new(FormVariant::HealthCheck);
        form.apply(FieldId::Pregnant, FieldInput::scalar("No")).unwrap();
        form.apply(FieldId::ChildStatus, FieldInput::scalar("No Child"))
            .unwrap();
        let lines = text(&form_body(&form, None, 0));
        let status = lines
            .iter()
            .position(|l| l.contains("Do you have a child?"))
            .unwrap();
        assert_eq!(lines[status + 2], "    No Child, No Pregnant");
        assert!(!lines.iter().any(|l| l.contains("Child Issues")));
    }

    #[test]
    fn test_focused_span_is_tracked() {
        let form = FormState::new(FormVariant::HealthCheck);
        let body = form_body(&form, Some(FormRow::Field(FieldId::Address)), 0);
        // Name label, value, spacer, then Address
        assert_eq!(body.focused, Some((3, 2)));
    }

    #[test]
    fn test_scroll_keeps_focus_in_view() {
        assert_eq!(scroll_for(None, 10), 0);
        assert_eq!(scroll_for(Some((2, 2)), 10), 0);
        assert_eq!(scroll_for(Some((20, 2)), 10), 12);
        // A span taller than the viewport starts at its label
        assert_eq!(scroll_for(Some((5, 12)), 10), 5);
    }
}
