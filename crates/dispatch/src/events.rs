//! Best-effort lifecycle events for external monitoring.
//!
//! Emission is a side channel: a failing sink is logged locally and never
//! propagated into the pipeline's success or failure.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Failure to deliver an event to the sink.
#[derive(Debug, thiserror::Error)]
#[error("event sink error: {0}")]
pub struct EventError(pub String);

/// A monitoring event tagged with the job it concerns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleEvent {
    /// Event kind, e.g. `consumer.dispatched`.
    pub kind: String,
    /// Job short name.
    pub job_name: String,
    /// When the event was created.
    pub at: DateTime<Utc>,
}

impl LifecycleEvent {
    /// Event emitted when a consumer pipeline is about to be enqueued.
    pub fn dispatched(job_name: &str) -> Self {
        Self {
            kind: "consumer.dispatched".to_string(),
            job_name: job_name.to_string(),
            at: Utc::now(),
        }
    }
}

/// Destination for lifecycle events (log, webhook, message bus).
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Deliver one event.
    async fn emit(&self, event: &LifecycleEvent) -> std::result::Result<(), EventError>;
}

/// Blanket implementation so `Arc<dyn EventSink>` can be used directly.
#[async_trait]
impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    async fn emit(&self, event: &LifecycleEvent) -> std::result::Result<(), EventError> {
        (**self).emit(event).await
    }
}

/// Sink that writes events to the process log. Never fails.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl EventSink for LogSink {
    async fn emit(&self, event: &LifecycleEvent) -> std::result::Result<(), EventError> {
        info!(kind = %event.kind, job = %event.job_name, "lifecycle event");
        Ok(())
    }
}

/// Emit an event, logging (never propagating) sink failures.
pub(crate) async fn emit_best_effort(sink: &dyn EventSink, event: &LifecycleEvent) {
    if let Err(e) = sink.emit(event).await {
        warn!(kind = %event.kind, job = %event.job_name, error = %e, "failed to emit lifecycle event");
    }
}
