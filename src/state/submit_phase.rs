//! Submission lifecycle of the second form variant

/// Where the simulated submission currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// Waiting on the simulated latency; submit button disabled
    Submitting,
    /// Success banner visible until the reset delay elapses
    Submitted,
}

/// Inputs to the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEvent {
    /// The user pressed submit
    SubmitRequested,
    /// The simulated latency elapsed and the submission was emitted
    SubmissionRecorded,
    /// The banner delay elapsed
    BannerExpired,
}

/// Side effects the caller must carry out after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEffect {
    /// Snapshot the form and start a new timed submission, superseding any pending one
    StartSubmission,
    /// Empty every form field
    ResetForm,
}

impl SubmitPhase {
    /// Pure transition function.
    ///
    /// Events that do not apply to the current phase leave it unchanged and
    /// produce no effect.
    pub fn transition(self, event: SubmitEvent) -> (SubmitPhase, Option<FlowEffect>) {
        match (self, event) {
            (Self::Idle | Self::Submitted, SubmitEvent::SubmitRequested) => {
                (Self::Submitting, Some(FlowEffect::StartSubmission))
            }
            (Self::Submitting, SubmitEvent::SubmissionRecorded) => (Self::Submitted, None),
            (Self::Submitted, SubmitEvent::BannerExpired) => {
                (Self::Idle, Some(FlowEffect::ResetForm))
            }
            (phase, _) => (phase, None),
        }
    }

    /// Whether the submit control accepts input
    pub fn is_submit_enabled(&self) -> bool {
        !matches!(self, Self::Submitting)
    }

    pub fn is_banner_visible(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}
