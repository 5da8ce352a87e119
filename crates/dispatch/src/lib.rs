//! Two-stage pipeline dispatch for scheduled harvest jobs.
//!
//! This crate provides:
//! - A [`Consumer`] trait and name-keyed registry (the ingest seam)
//! - Best-effort lifecycle event emission
//! - [`ConsumerDispatcher`] — composes the fetch-then-normalize pipeline
//! - An in-process [`PipelineWorker`] that runs the two stages in order

pub mod consumer;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod pipeline;
pub mod worker;

pub use consumer::{Consumer, ConsumerRegistry};
pub use dispatcher::{ConsumerDispatcher, DEFAULT_DAYS_BACK};
pub use error::{DispatchError, Result};
pub use events::{EventError, EventSink, LifecycleEvent, LogSink};
pub use pipeline::{ChannelExecutor, PipelineExecutor, PipelineInvocation};
pub use worker::{Normalizer, PipelineWorker};
