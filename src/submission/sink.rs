//! Diagnostic channel for submitted forms

use crate::state::{FormSubmission, FormVariant};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Tracing target carrying submitted forms
const SUBMISSION_TARGET: &str = "spidr_form::submission";

/// Errors raised while handing a submission to a sink
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Destination for submitted forms, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Record one submission
    async fn submit(
        &self,
        variant: FormVariant,
        submission: &FormSubmission,
    ) -> Result<(), SubmissionError>;
}

/// One emitted submission with correlation metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord<'a> {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub variant: &'static str,
    pub submission: &'a FormSubmission,
}

impl<'a> DiagnosticRecord<'a> {
    pub fn new(variant: FormVariant, submission: &'a FormSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            variant: variant.label(),
            submission,
        }
    }

    pub fn to_json(&self) -> Result<String, SubmissionError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Writes submissions to the log; nothing is sent anywhere
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[async_trait]
impl SubmissionSink for TracingSink {
    async fn submit(
        &self,
        variant: FormVariant,
        submission: &FormSubmission,
    ) -> Result<(), SubmissionError> {
        let record = DiagnosticRecord::new(variant, submission);
        let json = record.to_json()?;
        tracing::info!(
            target: SUBMISSION_TARGET,
            id = %record.id,
            variant = record.variant,
            "Spidr Air Fryer Interest Form Submission: {json}"
        );
        Ok(())
    }
}
