//! Timed submission task for the second form variant

use super::sink::SubmissionSink;
use crate::state::{FormSubmission, FormVariant, SubmitEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Simulated latency before the submission is recorded
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1200);

/// How long the success banner stays up before the form resets
pub const BANNER_DURATION: Duration = Duration::from_millis(4000);

/// Event produced by a flow task, tagged with the flow it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowMessage {
    pub generation: u64,
    pub event: SubmitEvent,
}

/// Spawn the simulated submission.
///
/// After [`SUBMIT_LATENCY`] the snapshot goes to `sink` and
/// `SubmissionRecorded` is sent; after a further [`BANNER_DURATION`]
/// `BannerExpired` follows. Cancelling `cancel` stops the task at whichever
/// wait it is in, without emitting anything further.
pub fn spawn_submission(
    generation: u64,
    variant: FormVariant,
    snapshot: FormSubmission,
    sink: Arc<dyn SubmissionSink>,
    events: UnboundedSender<FlowMessage>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        run_submission(generation, variant, snapshot, sink, events, cancel).await;
    })
}

async fn run_submission(
    generation: u64,
    variant: FormVariant,
    snapshot: FormSubmission,
    sink: Arc<dyn SubmissionSink>,
    events: UnboundedSender<FlowMessage>,
    cancel: CancellationToken,
) {
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!(generation, "submission cancelled before it was recorded");
            return;
        }
        _ = tokio::time::sleep(SUBMIT_LATENCY) => {}
    }

    if let Err(err) = sink.submit(variant, &snapshot).await {
        tracing::warn!(generation, "failed to record submission: {err}");
    }

    let recorded = FlowMessage {
        generation,
        event: SubmitEvent::SubmissionRecorded,
    };
    if events.send(recorded).is_err() {
        return;
    }

    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!(generation, "banner timer cancelled");
            return;
        }
        _ = tokio::time::sleep(BANNER_DURATION) => {}
    }

    // Receiver may be gone during shutdown; nothing left to do either way
    let _ = events.send(FlowMessage {
        generation,
        event: SubmitEvent::BannerExpired,
    });
}
