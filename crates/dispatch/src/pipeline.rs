//! Pipeline invocation value and the executor hand-off seam.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use harvest_core::config::DispatchConfig;

use crate::error::{DispatchError, Result};

/// One run of the fetch-then-normalize sequence for a single job.
///
/// The reference time is frozen at composition time; both stages see the
/// same timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineInvocation {
    pub job_name: String,
    pub reference_time: DateTime<Utc>,
    /// How many days of history the ingest stage covers.
    pub days_back: u32,
}

/// Accepts composed pipeline invocations for asynchronous execution.
///
/// The dispatcher only constructs invocations; running the two stages (and
/// any retry or timeout policy) belongs to whatever sits behind this trait.
#[async_trait]
pub trait PipelineExecutor: Send + Sync {
    /// Enqueue an invocation. Must not block on stage completion.
    async fn enqueue(&self, invocation: PipelineInvocation) -> Result<()>;
}

/// Blanket implementation so `Arc<dyn PipelineExecutor>` can be used directly.
#[async_trait]
impl<T: PipelineExecutor + ?Sized> PipelineExecutor for Arc<T> {
    async fn enqueue(&self, invocation: PipelineInvocation) -> Result<()> {
        (**self).enqueue(invocation).await
    }
}

/// In-process executor backed by a bounded channel.
///
/// Pair with [`PipelineWorker`](crate::worker::PipelineWorker) for local
/// execution, or replace with a queue-backed implementation in production.
pub struct ChannelExecutor {
    tx: mpsc::Sender<PipelineInvocation>,
}

impl ChannelExecutor {
    /// Create an executor and the receiving end for a worker.
    pub fn bounded(depth: usize) -> (Self, mpsc::Receiver<PipelineInvocation>) {
        let (tx, rx) = mpsc::channel(depth.max(1));
        (Self { tx }, rx)
    }

    /// Create an executor sized from the dispatch configuration.
    pub fn from_config(config: &DispatchConfig) -> (Self, mpsc::Receiver<PipelineInvocation>) {
        Self::bounded(config.queue_depth)
    }
}

#[async_trait]
impl PipelineExecutor for ChannelExecutor {
    async fn enqueue(&self, invocation: PipelineInvocation) -> Result<()> {
        self.tx
            .send(invocation)
            .await
            .map_err(|e| DispatchError::Executor(e.to_string()))
    }
}
