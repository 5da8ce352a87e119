//! Consumer trait and name-keyed registry.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{DispatchError, Result};

/// A per-job fetch implementation resolved by short name.
///
/// Implementations own the actual source-specific harvesting; this crate
/// only resolves names and forwards the lookback window.
#[async_trait]
pub trait Consumer: Send + Sync + std::fmt::Debug {
    /// Short name this consumer is registered under.
    fn name(&self) -> &str;

    /// Fetch `days_back` days of history ending at `reference_time`.
    async fn consume(&self, reference_time: DateTime<Utc>, days_back: u32) -> Result<()>;
}

/// Name → consumer mapping, built once at startup and read-only afterwards.
#[derive(Default)]
pub struct ConsumerRegistry {
    consumers: HashMap<String, Arc<dyn Consumer>>,
}

impl ConsumerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            consumers: HashMap::new(),
        }
    }

    /// Register a consumer under its own name.
    pub fn register(&mut self, consumer: Arc<dyn Consumer>) {
        self.consumers
            .insert(consumer.name().to_string(), consumer);
    }

    /// Resolve a job name to its consumer.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Consumer>> {
        self.consumers
            .get(name)
            .cloned()
            .ok_or_else(|| DispatchError::ConsumerNotFound(name.to_string()))
    }

    /// Number of registered consumers.
    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }
}
