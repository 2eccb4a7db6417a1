//! Application state definitions

use super::forms::{FormVariant, InterestForm};
use super::submit_phase::SubmitPhase;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Version1,
    Version2,
    /// No page mounted at the requested path
    NotFound,
}

impl View {
    /// Form design rendered by this view, if any
    pub fn form_variant(&self) -> Option<FormVariant> {
        match self {
            Self::Version1 => Some(FormVariant::Version1),
            Self::Version2 => Some(FormVariant::Version2),
            Self::NotFound => None,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: Option<InterestForm>,
    pub submit_phase: SubmitPhase,
    /// Blocking acknowledgment shown by the first variant
    pub alert: Option<String>,
    /// Identifies the submission flow whose events are still current
    pub flow_generation: u64,
}

impl AppState {
    pub fn new(view: View) -> Self {
        Self {
            current_view: view,
            form: view.form_variant().map(InterestForm::new),
            ..Default::default()
        }
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_matching_form() {
        let state = AppState::new(View::Version2);
        assert_eq!(state.current_view, View::Version2);
        assert_eq!(
            state.form.as_ref().map(|f| f.variant),
            Some(FormVariant::Version2)
        );
        assert_eq!(state.submit_phase, SubmitPhase::Idle);
        assert!(!state.has_alert());
    }

    #[test]
    fn test_not_found_has_no_form() {
        let state = AppState::new(View::NotFound);
        assert!(state.form.is_none());
    }

    #[test]
    fn test_dismiss_alert() {
        let mut state = AppState::new(View::Version1);
        state.alert = Some("hi".to_string());
        assert!(state.has_alert());
        state.dismiss_alert();
        assert!(!state.has_alert());
    }
}
