//! In-process pipeline worker: ingest first, then normalization.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, Notify};
use tracing::{error, info};

use crate::dispatcher::ConsumerDispatcher;
use crate::error::Result;
use crate::pipeline::PipelineInvocation;

/// Normalization stage invoked after a successful ingest, with the job name
/// as its sole argument.
#[async_trait]
pub trait Normalizer: Send + Sync {
    async fn begin_normalization(&self, name: &str) -> Result<()>;
}

/// Drives queued pipeline invocations to completion.
///
/// For each invocation the ingest stage runs to completion before the
/// normalization stage starts; on ingest failure the normalization stage is
/// skipped. Failures are logged per invocation and never stop the loop, so
/// other invocations are unaffected. There is no per-job mutual exclusion
/// across invocations.
pub struct PipelineWorker {
    dispatcher: Arc<ConsumerDispatcher>,
    normalizer: Arc<dyn Normalizer>,
    rx: mpsc::Receiver<PipelineInvocation>,
    shutdown: Arc<Notify>,
}

impl PipelineWorker {
    /// Create a worker over the receiving end of a pipeline channel.
    pub fn new(
        dispatcher: Arc<ConsumerDispatcher>,
        normalizer: Arc<dyn Normalizer>,
        rx: mpsc::Receiver<PipelineInvocation>,
        shutdown: Arc<Notify>,
    ) -> Self {
        Self {
            dispatcher,
            normalizer,
            rx,
            shutdown,
        }
    }

    /// Run until the channel closes or shutdown is signalled.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                maybe = self.rx.recv() => {
                    match maybe {
                        Some(invocation) => self.handle(invocation).await,
                        None => {
                            info!("pipeline channel closed, worker exiting");
                            break;
                        }
                    }
                }
                _ = self.shutdown.notified() => {
                    info!("pipeline worker shutting down");
                    break;
                }
            }
        }
    }

    /// Run the two stages of one invocation in order.
    async fn handle(&self, invocation: PipelineInvocation) {
        let PipelineInvocation {
            job_name,
            reference_time,
            days_back,
        } = invocation;

        if let Err(e) = self
            .dispatcher
            .consume(&job_name, reference_time, days_back)
            .await
        {
            error!(job = %job_name, error = %e, "ingest stage failed");
            return;
        }

        if let Err(e) = self.normalizer.begin_normalization(&job_name).await {
            error!(job = %job_name, error = %e, "normalization stage failed");
        }
    }
}
