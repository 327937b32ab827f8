// File: src/status.rs
// Purpose: Submission lifecycle states

use serde::{Deserialize, Serialize};

/// Where one form session currently stands.
///
/// `Idle → Submitting` on a valid submit attempt, `Submitting → Success`
/// when the transport completes, `Success → Idle` when the banner timer
/// fires or the banner is cancelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}
