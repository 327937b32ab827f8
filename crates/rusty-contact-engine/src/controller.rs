// File: src/controller.rs
// Purpose: Submission lifecycle orchestration around the field validator

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use rusty_contact_validation::{validate, Field, FieldSet, ValidationResult};

use crate::status::SubmissionStatus;
use crate::transport::Transport;

/// Tunables for the submission controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// How long the success banner stays up before reverting to idle.
    pub success_banner: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            success_banner: Duration::from_millis(3000),
        }
    }
}

struct ControllerState {
    fields: FieldSet,
    errors: ValidationResult,
    status: SubmissionStatus,
    /// Pending banner dismissal, if any.
    dismiss: Option<JoinHandle<()>>,
    /// Identity of the latest success event; a stale timer must not fire.
    generation: u64,
}

/// Orchestrates one form session: raw input changes, full validation at
/// submit time, the transport hand-off, and the timed success banner.
///
/// Cheap to clone; clones share the same session. State sits behind a
/// mutex that is never held across an await, so field edits interleave
/// freely with an in-flight send.
#[derive(Clone)]
pub struct SubmissionController {
    inner: Arc<Inner>,
}

struct Inner {
    config: ControllerConfig,
    state: Mutex<ControllerState>,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                state: Mutex::new(ControllerState {
                    fields: FieldSet::default(),
                    errors: ValidationResult::success(),
                    status: SubmissionStatus::Idle,
                    dismiss: None,
                    generation: 0,
                }),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ControllerState> {
        // Mutations are plain data writes; a poisoned lock still holds a
        // consistent state, so recover instead of propagating the panic.
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the current field values.
    pub fn fields(&self) -> FieldSet {
        self.state().fields.clone()
    }

    /// Last-known error map. Only `attempt_submit` replaces it wholesale;
    /// edits clear single entries.
    pub fn errors(&self) -> ValidationResult {
        self.state().errors.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state().status
    }

    /// Submit stays disabled while a send is in flight or while the
    /// last-known error map is non-empty. The map is not re-validated
    /// here, so after an optimistic clear the button can enable even
    /// though the field is still invalid; `attempt_submit` re-checks.
    pub fn is_submit_enabled(&self) -> bool {
        let state = self.state();
        !state.status.is_submitting() && state.errors.is_empty()
    }

    /// Records an edited value and optimistically clears that field's
    /// displayed error without re-running its rule.
    pub fn on_field_change(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state();
        state.fields.set_value(field, value);
        if state.errors.clear_field(field) {
            debug!(field = field.as_str(), "cleared error on edit");
        }
    }

    /// Validates the entire field set and, if it passes, runs one
    /// submission through the transport.
    ///
    /// On validation failure the error map is replaced wholesale and the
    /// transport is never called; the status is left as it was, so an up
    /// success banner survives a failed submit and its timer. A second
    /// call while a send is in flight is a no-op. Field edits arriving
    /// during the send mutate the live fields; the wholesale reset on
    /// success overwrites them, exactly as the shipped form does.
    pub async fn attempt_submit<T: Transport + ?Sized>(&self, transport: &T) {
        let snapshot = {
            let mut state = self.state();
            if state.status.is_submitting() {
                debug!("submit ignored, a submission is already in flight");
                return;
            }
            let result = validate(&state.fields);
            if result.has_errors() {
                warn!(errors = result.len(), "submission rejected by validation");
                state.errors = result;
                return;
            }
            state.errors = ValidationResult::success();
            state.status = SubmissionStatus::Submitting;
            state.fields.clone()
        };

        info!(subject = snapshot.subject.as_str(), "submitting form");
        if let Err(err) = transport.send(snapshot).await {
            // The shipped form does not distinguish a transport rejection
            // from success; log it and finish the success path anyway.
            warn!(error = %err, "transport rejected the submission");
        }

        let mut state = self.state();
        state.fields.clear();
        state.errors = ValidationResult::success();
        state.status = SubmissionStatus::Success;
        self.schedule_dismiss(&mut state);
        info!("submission completed");
    }

    /// Drops the success banner ahead of its timer, e.g. when a new
    /// interaction starts.
    pub fn cancel_success_banner(&self) {
        let mut state = self.state();
        if let Some(pending) = state.dismiss.take() {
            pending.abort();
        }
        if state.status == SubmissionStatus::Success {
            debug!("success banner cancelled");
            state.status = SubmissionStatus::Idle;
        }
    }

    /// Schedules the automatic `Success → Idle` transition. A newer
    /// success event replaces any pending dismissal rather than stacking;
    /// the generation check keeps an aborted-but-already-running timer
    /// from touching a later success.
    fn schedule_dismiss(&self, state: &mut ControllerState) {
        if let Some(pending) = state.dismiss.take() {
            pending.abort();
        }
        state.generation += 1;
        let generation = state.generation;
        let delay = self.inner.config.success_banner;
        let controller = self.clone();
        state.dismiss = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = controller.state();
            if state.generation == generation && state.status == SubmissionStatus::Success {
                debug!("success banner dismissed");
                state.status = SubmissionStatus::Idle;
                state.dismiss = None;
            }
        }));
    }
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}
