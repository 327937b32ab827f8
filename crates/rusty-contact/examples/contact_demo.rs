// File: examples/contact_demo.rs
// Purpose: Drive one form session end to end with a simulated transport

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use rusty_contact::{Field, FieldSet, SubmissionController, Subject, Transport};

/// Stands in for the real API call: waits a moment, then logs the payload.
struct SimulatedTransport;

#[async_trait]
impl Transport for SimulatedTransport {
    async fn send(&self, fields: FieldSet) -> anyhow::Result<()> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        info!(payload = %serde_json::to_string(&fields)?, "form submitted");
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let controller = SubmissionController::new();
    let transport = SimulatedTransport;

    // First attempt: nothing filled in yet.
    controller.attempt_submit(&transport).await;
    for (field, message) in controller.errors().iter() {
        info!(field = field.as_str(), message, "validation error");
    }

    // Type the form in, one event per field.
    controller.on_field_change(Field::FullName, "Ada Lovelace");
    controller.on_field_change(Field::Email, "ada@analytical.engine");
    controller.on_field_change(Field::Phone, "123-456-7890");
    controller.on_field_change(Field::Subject, Subject::Feedback.as_str());
    controller.on_field_change(Field::Message, "The engine weaves algebraic patterns.");

    controller.attempt_submit(&transport).await;
    info!(status = ?controller.status(), "after submit");

    // The success banner drops on its own after three seconds.
    tokio::time::sleep(Duration::from_millis(3100)).await;
    info!(status = ?controller.status(), "after banner timeout");
}
