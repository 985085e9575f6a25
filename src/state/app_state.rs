//! Application state definitions

use super::forms::{FieldId, FormState, FormVariant};
use crate::recommend::NutritionPlan;
use std::collections::VecDeque;

/// Lines above the plan text in the results view: timestamp, rule, blank
pub const PLAN_HEADER_LINES: usize = 3;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Form variant selection page
    #[default]
    VariantSelect,
    Form,
    /// Nutrition plan returned by a successful submission
    Results,
}

/// A focusable row of the form page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Field(FieldId),
    Submit,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub selected_index: usize,

    // Form state, present while a form view is open
    pub form: Option<FormState>,
    pub focus: Option<FormRow>,
    /// Highlighted option inside a checkbox group
    pub option_cursor: usize,

    // Submission
    pub loading: bool,
    pub plan: Option<NutritionPlan>,

    // UI state
    pub scroll_offset: u16,
    errors: VecDeque<String>,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Variant highlighted on the selection page
    pub fn selected_variant(&self) -> FormVariant {
        FormVariant::ALL
            .get(self.selected_index)
            .copied()
            .unwrap_or_default()
    }

    /// Highlight a variant on the selection page
    pub fn select_variant(&mut self, variant: FormVariant) {
        self.selected_index = FormVariant::ALL
            .iter()
            .position(|v| *v == variant)
            .unwrap_or(0);
    }

    /// Scroll down, stopping once the last plan line reaches the top
    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll() {
            self.scroll_offset += 1;
        }
    }

    /// Largest scroll offset that still shows part of the plan
    pub fn max_scroll(&self) -> u16 {
        let lines = self
            .plan
            .as_ref()
            .map_or(0, |plan| PLAN_HEADER_LINES + plan.meal_plan.lines().count());
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Open a fresh, schema-seeded form
    pub fn open_form(&mut self, variant: FormVariant) {
        self.form = Some(FormState::new(variant));
        self.current_view = View::Form;
        self.option_cursor = 0;
        self.focus = self.form_rows().first().copied();
    }

    /// Discard the open form and return to the selection page
    pub fn close_form(&mut self) {
        self.form = None;
        self.focus = None;
        self.option_cursor = 0;
        self.loading = false;
        self.current_view = View::VariantSelect;
    }

    /// Show a received plan; the form that produced it is discarded
    pub fn show_plan(&mut self, plan: NutritionPlan) {
        self.form = None;
        self.focus = None;
        self.plan = Some(plan);
        self.scroll_offset = 0;
        self.current_view = View::Results;
    }

    /// Focusable rows of the open form: visible fields, then the submit button
    pub fn form_rows(&self) -> Vec<FormRow> {
        let Some(form) = &self.form else {
            return Vec::new();
        };
        form.visible_fields()
            .into_iter()
            .map(|f| FormRow::Field(f.id()))
            .chain(std::iter::once(FormRow::Submit))
            .collect()
    }

    /// Field under the cursor, if the cursor is on a field
    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            Some(FormRow::Field(id)) => Some(id),
            _ => None,
        }
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focus == Some(FormRow::Submit)
    }

    /// Move to next form row (wraps around)
    pub fn next_form_row(&mut self) {
        self.step_focus(true);
    }

    /// Move to previous form row (wraps around)
    pub fn prev_form_row(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let rows = self.form_rows();
        if rows.is_empty() {
            self.focus = None;
            return;
        }
        let current = self
            .focus
            .and_then(|focus| rows.iter().position(|r| *r == focus));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % rows.len(),
            (Some(0), false) => rows.len() - 1,
            (Some(i), false) => i - 1,
        };
        self.focus = Some(rows[next]);
        self.option_cursor = 0;
    }

    /// Keep the cursor on a row that still renders after answers changed
    pub fn ensure_focus_visible(&mut self) {
        let rows = self.form_rows();
        if self.focus.is_some_and(|focus| rows.contains(&focus)) {
            return;
        }
        self.focus = rows.first().copied();
        self.option_cursor = 0;
    }

    /// Move the highlighted checkbox option, clamped to the group
    pub fn move_option_cursor(&mut self, forward: bool) {
        let option_count = self
            .focused_field()
            .and_then(|id| self.form.as_ref()?.field(id))
            .map(|f| f.kind().options().len())
            .unwrap_or(0);
        if option_count == 0 {
            self.option_cursor = 0;
            return;
        }
        self.option_cursor = if forward {
            (self.option_cursor + 1).min(option_count - 1)
        } else {
            self.option_cursor.saturating_sub(1)
        };
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
