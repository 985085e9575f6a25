//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_submit_modifier;
use crate::recommend::{NutritionPlan, RecommendClientTrait, SubmissionError};
use crate::state::{AppState, FieldKind, FormError, FormVariant, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Window in which a second Ctrl+C quits
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// Submission running on the runtime while the UI keeps handling input
struct PendingSubmission {
    handle: JoinHandle<()>,
    result: oneshot::Receiver<Result<NutritionPlan, SubmissionError>>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Where the configuration is persisted (None keeps it in memory)
    config_path: Option<PathBuf>,
    /// Submission adapter for the nutrition plan form
    recommender: Arc<dyn RecommendClientTrait>,
    /// In-flight submission, at most one
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
    /// Transient status bar message
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, recommender: Arc<dyn RecommendClientTrait>) -> Self {
        let mut state = AppState::default();
        state.select_variant(config.preferred_variant());

        Self {
            state,
            config,
            config_path: None,
            recommender,
            pending: None,
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        }
    }

    /// Persist configuration changes to `path`
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.state.loading
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::VariantSelect => self.handle_variant_select_key(key),
            View::Form => {
                if let Err(e) = self.handle_form_key(key) {
                    warn!("Form input rejected: {e}");
                }
            }
            View::Results => self.handle_results_key(key)?,
        }

        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        if self
            .last_ctrl_c
            .is_some_and(|last| now.duration_since(last) <= DOUBLE_CTRL_C_WINDOW)
        {
            self.quit = true;
        } else {
            self.last_ctrl_c = Some(now);
            self.status_message = Some("Press Ctrl+C again to quit".to_string());
        }
    }

    /// Handle keys on the variant selection page
    fn handle_variant_select_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.move_selection_down(FormVariant::ALL.len())
            }
            KeyCode::Enter => self.open_variant(self.state.selected_variant()),
            _ => {}
        }
    }

    /// Open a fresh form and remember the choice for next launch
    pub fn open_variant(&mut self, variant: FormVariant) {
        info!("Opening {}", variant.title());
        self.state.open_form(variant);

        self.config.remember_variant(variant);
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!("Failed to save config: {e}");
            }
        }
    }

    /// Handle keys in the form view
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<(), FormError> {
        let focused = self.state.focused_field();
        let kind = focused
            .and_then(|id| self.state.form.as_ref()?.field(id))
            .map(|f| f.kind());

        match key.code {
            KeyCode::Esc if self.state.loading => self.cancel_submission(),
            KeyCode::Esc => {
                debug!("Leaving form, answers discarded");
                self.state.close_form();
            }
            KeyCode::Char('s') if is_submit_modifier(key.modifiers) => {
                self.submit_form();
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_form_row(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_row(),
            KeyCode::Enter if self.state.is_submit_focused() => self.submit_form(),
            KeyCode::Enter => self.state.next_form_row(),
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match (focused, kind) {
                    (Some(_), Some(FieldKind::Checkboxes(_))) => {
                        self.state.move_option_cursor(forward)
                    }
                    (Some(id), Some(FieldKind::Select(_) | FieldKind::Radio(_))) => {
                        if let Some(form) = self.state.form.as_mut() {
                            form.cycle_option(id, forward)?;
                        }
                    }
                    _ => {}
                }
            }
            KeyCode::Char(' ') if matches!(kind, Some(FieldKind::Checkboxes(_))) => {
                if let (Some(id), Some(FieldKind::Checkboxes(options))) = (focused, kind) {
                    if let (Some(option), Some(form)) =
                        (options.get(self.state.option_cursor), self.state.form.as_mut())
                    {
                        form.toggle_option(id, option)?;
                    }
                }
            }
            KeyCode::Char(c) => {
                if let (Some(id), Some(form)) = (focused, self.state.form.as_mut()) {
                    if kind.is_some_and(|k| k.is_typed()) {
                        form.push_char(id, c)?;
                    }
                }
            }
            KeyCode::Backspace => {
                if let (Some(id), Some(form)) = (focused, self.state.form.as_mut()) {
                    form.pop_char(id)?;
                }
            }
            _ => {}
        }

        self.state.ensure_focus_visible();
        Ok(())
    }

    /// Handle keys on the results page
    fn handle_results_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Char('y') => {
                if let Some(plan) = &self.state.plan {
                    match copy_to_clipboard(&plan.meal_plan) {
                        Ok(()) => self.status_message = Some("Plan copied".to_string()),
                        Err(e) => {
                            warn!("Clipboard unavailable: {e}");
                            self.push_error("Failed to copy plan to clipboard");
                        }
                    }
                }
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.state.plan = None;
                self.state.scroll_offset = 0;
                self.state.current_view = View::VariantSelect;
            }
            _ => {}
        }
        Ok(())
    }

    /// Submit the open form.
    ///
    /// Only the nutrition plan variant talks to the endpoint; the others just acknowledge.
    /// A submit while one is already in flight is ignored.
    pub fn submit_form(&mut self) {
        let Some(form) = &self.state.form else {
            return;
        };

        if !form.variant().submits() {
            debug!(payload = %form.to_payload(), "Responses recorded locally");
            self.status_message = Some("Responses recorded".to_string());
            return;
        }

        if self.state.loading {
            debug!("Submission already in flight, ignoring");
            return;
        }

        let payload = form.to_payload();
        let client = Arc::clone(&self.recommender);
        let (tx, rx) = oneshot::channel();

        self.state.loading = true;
        info!("Requesting nutrition plan");

        let handle = tokio::spawn(async move {
            let result = client.submit(&payload).await;
            // Receiver is gone only if the submission was cancelled
            let _ = tx.send(result);
        });

        self.pending = Some(PendingSubmission { handle, result: rx });
    }

    /// Check whether the in-flight submission finished; returns true when it did
    pub fn poll_submission(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        let result = match pending.result.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(SubmissionError::Transport(
                "submission task ended without a result".into(),
            )),
        };

        self.pending = None;
        self.finish_submission(result);
        true
    }

    /// Abort the in-flight submission, keeping the form as it is
    pub fn cancel_submission(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            info!("Submission cancelled");
            self.status_message = Some("Submission cancelled".to_string());
        }
        self.state.loading = false;
    }

    fn finish_submission(&mut self, result: Result<NutritionPlan, SubmissionError>) {
        self.state.loading = false;

        match result {
            Ok(plan) => {
                info!("Nutrition plan received");
                self.state.show_plan(plan);
                self.status_message = Some("Nutrition plan ready".to_string());
            }
            Err(e) => {
                warn!("Submission failed: {e:?}");
                self.push_error(e.to_string());
            }
        }
    }

    /// Wait for the in-flight submission and apply its outcome
    #[cfg(test)]
    async fn settle_submission(&mut self) {
        if let Some(pending) = self.pending.take() {
            let result = pending.result.await.unwrap_or_else(|_| {
                Err(SubmissionError::Transport(
                    "submission task ended without a result".into(),
                ))
            });
            self.finish_submission(result);
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
