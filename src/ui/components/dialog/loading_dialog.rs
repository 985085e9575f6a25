//! Loading dialog shown while a submission is in flight

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the in-flight request overlay
pub fn render_loading_dialog(frame: &mut Frame) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to cancel"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitting",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: "Requesting your nutrition plan...",
            hint: Some(hint),
            ..Default::default()
        },
    );
}
