//! Metrics collection for observability
//!
//! Prometheus metrics for the tangle façade. Each [`Metrics`] instance
//! owns its registry, so embedders can scrape several tangles from one
//! process without name collisions.
//!
//! # Metrics
//!
//! - `tangle_transactions_appended_total` - transactions forwarded to storage
//! - `tangle_solidity_passes_total` - solidity propagation passes run
//! - `tangle_missing_ancestors_total` - missing ancestors observed
//! - `tangle_solidity_walk_transactions` - histogram of walked node counts

use std::sync::Arc;

use prometheus::{Histogram, HistogramOpts, IntCounter, Registry};

use crate::error::{Error, Result};

/// Metrics collector
#[derive(Clone)]
pub struct Metrics {
    /// Transactions forwarded to storage
    pub transactions_appended: IntCounter,

    /// Solidity propagation passes run
    pub solidity_passes: IntCounter,

    /// Missing ancestors observed across all passes
    pub missing_ancestors: IntCounter,

    /// Histogram of nodes walked per solidity pass
    pub solidity_walk_size: Histogram,

    /// Prometheus registry
    registry: Arc<Registry>,
}

impl Metrics {
    /// Create a collector with its own registry.
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());

        let transactions_appended = IntCounter::new(
            "tangle_transactions_appended_total",
            "Transactions forwarded to storage",
        )
        .map_err(|e| Error::Config(e.to_string()))?;
        registry
            .register(Box::new(transactions_appended.clone()))
            .map_err(|e| Error::Config(e.to_string()))?;

        let solidity_passes = IntCounter::new(
            "tangle_solidity_passes_total",
            "Solidity propagation passes run",
        )
        .map_err(|e| Error::Config(e.to_string()))?;
        registry
            .register(Box::new(solidity_passes.clone()))
            .map_err(|e| Error::Config(e.to_string()))?;

        let missing_ancestors = IntCounter::new(
            "tangle_missing_ancestors_total",
            "Missing ancestors observed during solidity passes",
        )
        .map_err(|e| Error::Config(e.to_string()))?;
        registry
            .register(Box::new(missing_ancestors.clone()))
            .map_err(|e| Error::Config(e.to_string()))?;

        let solidity_walk_size = Histogram::with_opts(
            HistogramOpts::new(
                "tangle_solidity_walk_transactions",
                "Nodes walked per solidity pass",
            )
            .buckets(vec![1.0, 5.0, 10.0, 50.0, 100.0, 500.0, 1000.0, 5000.0]),
        )
        .map_err(|e| Error::Config(e.to_string()))?;
        registry
            .register(Box::new(solidity_walk_size.clone()))
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            transactions_appended,
            solidity_passes,
            missing_ancestors,
            solidity_walk_size,
            registry,
        })
    }

    /// Record a forwarded transaction.
    pub fn record_append(&self) {
        self.transactions_appended.inc();
    }

    /// Record one solidity pass.
    pub fn record_solidity_pass(&self, walked: usize, missing: usize) {
        self.solidity_passes.inc();
        self.missing_ancestors.inc_by(missing as u64);
        self.solidity_walk_size.observe(walked as f64);
    }

    /// The backing registry, for scrape endpoints.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
