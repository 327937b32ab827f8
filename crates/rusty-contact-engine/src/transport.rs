// File: src/transport.rs
// Purpose: Boundary to whatever persists an accepted submission

use anyhow::Result;
use async_trait::async_trait;
use rusty_contact_validation::FieldSet;

/// Destination for accepted submissions.
///
/// The engine calls `send` once per accepted submit and awaits completion.
/// There is no retry: a returned error is logged and the session still
/// completes its success path, matching the behavior of the shipped form
/// (see `SubmissionController::attempt_submit`).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver one snapshot of the field values.
    async fn send(&self, fields: FieldSet) -> Result<()>;
}
