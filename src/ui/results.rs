//! Nutrition plan view

use crate::app::App;
use crate::recommend::NutritionPlan;
use crate::state::PLAN_HEADER_LINES;
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Style one line of the plan text, which usually arrives as light markdown
fn plan_line(line: &str) -> Line<'static> {
    if let Some(stripped) = line.strip_prefix("# ") {
        Line::from(Span::styled(
            stripped.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(stripped) = line.strip_prefix("## ") {
        Line::from(Span::styled(
            stripped.to_string(),
            Style::default().fg(Color::Cyan),
        ))
    } else if let Some(stripped) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Green)),
            Span::raw(stripped.to_string()),
        ])
    } else if let Some(stripped) = line.strip_prefix("**").and_then(|l| l.strip_suffix("**")) {
        Line::from(Span::styled(
            stripped.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(line.to_string())
    }
}

/// Header and styled plan text, one entry per scrollable line
fn plan_content(plan: &NutritionPlan) -> Vec<Line<'static>> {
    let received = plan.received_at.with_timezone(&Local);
    let mut content = vec![
        Line::from(vec![
            Span::styled("Received: ", Style::default().fg(Color::DarkGray)),
            Span::raw(received.format("%Y-%m-%d %H:%M").to_string()),
        ]),
        Line::from(Span::styled(
            "─".repeat(40),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    debug_assert_eq!(content.len(), PLAN_HEADER_LINES);
    content.extend(plan.meal_plan.lines().map(plan_line));
    content
}

/// Draw the received plan
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(plan) = &app.state.plan else {
        let message = Paragraph::new("No plan received")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .title(" Nutrition Plan ")
                    .borders(Borders::ALL),
            );
        frame.render_widget(message, area);
        return;
    };

    let paragraph = Paragraph::new(plan_content(plan))
        .block(
            Block::default()
                .title(" Nutrition Plan ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset, 0));

    frame.render_widget(paragraph, area);
}
