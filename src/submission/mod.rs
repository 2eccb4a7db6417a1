//! Submission delivery: the diagnostic sink and the timed flow task

mod flow;
mod sink;

pub use flow::{spawn_submission, FlowMessage};
pub use sink::{SubmissionSink, TracingSink};

#[cfg(test)]
pub use flow::{BANNER_DURATION, SUBMIT_LATENCY};
#[cfg(test)]
pub use sink::MockSubmissionSink;
