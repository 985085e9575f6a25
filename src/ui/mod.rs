//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod results;
mod selection;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::VariantSelect => selection::draw(frame, main_area, app),
        View::Form => forms::draw(frame, main_area, app),
        View::Results => results::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays, error last so it stays on top
    if app.state.loading {
        components::render_loading_dialog(frame);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.error_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::recommend::{MockRecommendClientTrait, NutritionPlan};
    use crate::state::{FieldId, FieldInput, FormRow, FormVariant};
    use chrono::Utc;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::new(TuiConfig::default(), Arc::new(MockRecommendClientTrait::new()))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_selection_page_lists_variants() {
        let screen = render(&app());
        for variant in FormVariant::ALL {
            assert!(screen.contains(variant.title()));
        }
        assert!(screen.contains("^C^C:quit"));
    }

    #[test]
    fn test_form_reveals_section_on_answer() {
        let mut app = app();
        app.state.open_form(FormVariant::HealthCheck);
        assert!(!render(&app).contains("Heart Condition"));

        app.state
            .form
            .as_mut()
            .unwrap()
            .apply(FieldId::Disease, FieldInput::scalar("Heart"))
            .unwrap();
        assert!(render(&app).contains("Heart Condition"));
    }

    #[test]
    fn test_loading_overlay_and_disabled_submit() {
        let mut app = app();
        app.state.open_form(FormVariant::NutritionPlan);
        app.state.focus = Some(FormRow::Submit);
        app.state.loading = true;
        let screen = render(&app);
        assert!(screen.contains("Submitting..."));
        assert!(screen.contains("Requesting your nutrition plan..."));
    }

    #[test]
    fn test_error_dialog_on_top() {
        let mut app = app();
        app.push_error("Failed to get recommendations");
        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Failed to get recommendations"));
    }

    #[test]
    fn test_results_show_plan() {
        let mut app = app();
        app.state.show_plan(NutritionPlan {
            meal_plan: "- Oats\n- Lentil soup".to_string(),
            received_at: Utc::now(),
        });
        let screen = render(&app);
        assert!(screen.contains("Nutrition Plan"));
        assert!(screen.contains("• Lentil soup"));
    }
}
