//! Form variant selection page

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::FormVariant;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the list of form variants
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Nutri Intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(64)])
        .flex(Flex::Center)
        .split(inner)[0];

    // Heading, then one button and one summary line per variant
    let mut constraints = vec![Constraint::Length(3)];
    for _ in FormVariant::ALL {
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Length(2));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .flex(Flex::Center)
        .split(column);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Choose a form",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "↑/↓ to move, Enter to open",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .centered();
    frame.render_widget(heading, rows[0]);

    for (idx, variant) in FormVariant::ALL.iter().enumerate() {
        let is_selected = idx == app.state.selected_index;
        render_button(frame, rows[1 + idx * 2], variant.title(), is_selected, true);

        let summary = Paragraph::new(Span::styled(
            variant.summary(),
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(summary, rows[2 + idx * 2]);
    }
}
