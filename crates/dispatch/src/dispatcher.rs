//! [`ConsumerDispatcher`] — the per-job dispatch entry points.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::consumer::ConsumerRegistry;
use crate::error::Result;
use crate::events::{emit_best_effort, EventSink, LifecycleEvent};
use crate::pipeline::{PipelineExecutor, PipelineInvocation};

/// Lookback window applied when the caller does not supply one.
pub const DEFAULT_DAYS_BACK: u32 = 1;

/// Composes and enqueues the two-stage pipeline for scheduled jobs.
pub struct ConsumerDispatcher {
    registry: Arc<ConsumerRegistry>,
    events: Arc<dyn EventSink>,
    executor: Arc<dyn PipelineExecutor>,
}

impl ConsumerDispatcher {
    /// Create a dispatcher over a registry, event sink, and executor.
    pub fn new(
        registry: Arc<ConsumerRegistry>,
        events: Arc<dyn EventSink>,
        executor: Arc<dyn PipelineExecutor>,
    ) -> Self {
        Self {
            registry,
            events,
            executor,
        }
    }

    /// Dispatch a job with the default one-day lookback.
    pub async fn run_consumer(&self, name: &str) -> Result<()> {
        self.run_consumer_with_lookback(name, DEFAULT_DAYS_BACK).await
    }

    /// Dispatch a job, covering `days_back` days of history.
    ///
    /// Emits one lifecycle event, freezes the reference time, and hands the
    /// composed invocation to the executor. Does not wait for either stage;
    /// `days_back` is forwarded unchanged.
    pub async fn run_consumer_with_lookback(&self, name: &str, days_back: u32) -> Result<()> {
        emit_best_effort(self.events.as_ref(), &LifecycleEvent::dispatched(name)).await;

        // Both stages must see the same timestamp.
        let reference_time = Utc::now();

        let invocation = PipelineInvocation {
            job_name: name.to_string(),
            reference_time,
            days_back,
        };

        info!(job = %name, days_back, "enqueueing consumer pipeline");
        self.executor.enqueue(invocation).await
    }

    /// Ingest stage: resolve the consumer and forward the lookback window.
    ///
    /// Pure resolution plus forwarding; unknown names fail with
    /// [`DispatchError::ConsumerNotFound`](crate::error::DispatchError::ConsumerNotFound)
    /// and have no side effects.
    pub async fn consume(
        &self,
        name: &str,
        reference_time: DateTime<Utc>,
        days_back: u32,
    ) -> Result<()> {
        let consumer = self.registry.resolve(name)?;
        debug!(job = %name, days_back, "running ingest stage");
        consumer.consume(reference_time, days_back).await
    }
}
