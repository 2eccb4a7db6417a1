//! Application state and core logic

use crate::state::{AppState, FlowEffect, Form, FormVariant, SubmitEvent, SubmitPhase, View};
use crate::submission::{spawn_submission, FlowMessage, SubmissionSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

/// Acknowledgment shown by the first variant after submit
pub const ALERT_MESSAGE: &str =
    "Thank you for your interest! Your form has been submitted successfully.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submissions are emitted
    sink: Arc<dyn SubmissionSink>,
    flow_tx: UnboundedSender<FlowMessage>,
    flow_rx: UnboundedReceiver<FlowMessage>,
    /// Cancelled on teardown; every flow token is a child of it
    lifetime: CancellationToken,
    /// Token of the flow currently in progress
    flow_cancel: Option<CancellationToken>,
    /// Whether the app should quit
    quit: bool,
    /// Frame counter driving the busy spinner
    pub tick: usize,
}

impl App {
    /// Create a new App instance
    pub fn new(view: View, sink: Arc<dyn SubmissionSink>) -> Self {
        let (flow_tx, flow_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(view),
            sink,
            flow_tx,
            flow_rx,
            lifetime: CancellationToken::new(),
            flow_cancel: None,
            quit: false,
            tick: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while something on screen is animating
    pub fn is_animating(&self) -> bool {
        self.state.submit_phase == SubmitPhase::Submitting
    }

    /// Advance animation frames
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Cancel pending submission timers
    pub fn shutdown(&mut self) {
        self.lifetime.cancel();
        self.flow_cancel = None;
    }

    /// Handle key events
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The alert blocks every other interaction until dismissed
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }

        let Some(form) = self.state.form.as_mut() else {
            return Ok(());
        };
        let on_submit = form.is_submit_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('u') if ctrl => {
                if let Some(field) = form.get_active_field_mut() {
                    field.clear();
                }
            }
            KeyCode::Enter if on_submit => self.submit().await,
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = form.get_active_field_mut() {
                    if !field.push_char(c) {
                        tracing::debug!(field = field.name, "input rejected");
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a bracketed paste into the active field
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_alert() {
            return;
        }
        if let Some(field) = self
            .state
            .form
            .as_mut()
            .and_then(|form| form.get_active_field_mut())
        {
            if !field.push_str(text) {
                tracing::debug!(field = field.name, "paste rejected");
            }
        }
    }

    /// Submit the form the way the current variant does
    pub async fn submit(&mut self) {
        match self.state.current_view {
            View::Version1 => self.submit_version1().await,
            View::Version2 => self.apply_submit_event(SubmitEvent::SubmitRequested),
            View::NotFound => {}
        }
    }

    /// Emit right away and show the blocking alert; the form is left as is
    async fn submit_version1(&mut self) {
        let Some(form) = self.state.form.as_ref() else {
            return;
        };
        let submission = form.to_submission();
        if submission.is_empty() {
            tracing::debug!("submitting an empty form");
        }
        if let Err(err) = self.sink.submit(FormVariant::Version1, &submission).await {
            tracing::warn!("failed to record submission: {err}");
        }
        self.state.alert = Some(ALERT_MESSAGE.to_string());
    }

    /// Feed an event through the submit lifecycle and run its effect
    fn apply_submit_event(&mut self, event: SubmitEvent) {
        let current = self.state.submit_phase;
        let (next, effect) = current.transition(event);
        if next != current {
            tracing::debug!(?current, ?next, ?event, "submit phase changed");
        }
        self.state.submit_phase = next;

        match effect {
            Some(FlowEffect::StartSubmission) => self.start_flow(),
            Some(FlowEffect::ResetForm) => {
                if let Some(form) = self.state.form.as_mut() {
                    form.reset();
                }
            }
            None => {}
        }
    }

    /// Spawn a new timed submission, superseding the pending one
    fn start_flow(&mut self) {
        let Some(form) = self.state.form.as_ref() else {
            return;
        };
        let snapshot = form.to_submission();
        let variant = form.variant;

        if let Some(previous) = self.flow_cancel.take() {
            previous.cancel();
        }

        self.state.flow_generation += 1;
        let token = self.lifetime.child_token();
        spawn_submission(
            self.state.flow_generation,
            variant,
            snapshot,
            Arc::clone(&self.sink),
            self.flow_tx.clone(),
            token.clone(),
        );
        self.flow_cancel = Some(token);
    }

    /// Apply an event coming back from a flow task
    pub fn handle_flow_message(&mut self, message: FlowMessage) {
        if message.generation != self.state.flow_generation {
            tracing::debug!(
                generation = message.generation,
                current = self.state.flow_generation,
                "ignoring event from superseded submission"
            );
            return;
        }
        self.apply_submit_event(message.event);
        if self.state.submit_phase == SubmitPhase::Idle {
            self.flow_cancel = None;
        }
    }

    /// Apply every flow event that has arrived since the last call
    pub fn drain_flow_events(&mut self) {
        while let Ok(message) = self.flow_rx.try_recv() {
            self.handle_flow_message(message);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
