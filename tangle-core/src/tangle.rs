//! Tangle façade and solidity propagation
//!
//! The tangle is a thin façade over a [`Storage`] backend: lookups and
//! writes delegate directly. What it owns is the solidity algorithm - a
//! transaction is *solid* once every transitive ancestor reachable via
//! trunk/branch is locally present - implemented as a two-phase walk:
//!
//! 1. **Discovery**: breadth-first over parent references, one worklist
//!    entry at a time. The two parent lookups of an entry run
//!    concurrently and are both awaited before the next entry; lookups
//!    are deduplicated globally by hash. Absent parents accumulate as
//!    missing; present-but-unsolid parents join the worklist.
//! 2. **Resolution**: the worklist is replayed from the last-appended
//!    entry back to the first, which is topological (parents precede
//!    children). A node becomes solid when each parent reference is
//!    null, known solid, or was marked earlier in the same pass. Newly
//!    solid nodes are persisted concurrently at the end.
//!
//! A backend exposing [`SolidityStore`] takes over both operations
//! entirely.

use std::collections::HashSet;
use std::sync::Arc;

use crate::bundle::Bundle;
use crate::config::Config;
use crate::crypto::CryptoSuite;
use crate::error::{Error, Result};
use crate::metrics::Metrics;
use crate::storage::Storage;
use crate::transaction::{is_null_hash, Transaction};

/// Façade over a storage backend, owning the solidity algorithm.
pub struct Tangle {
    storage: Arc<dyn Storage>,
    crypto: Arc<dyn CryptoSuite>,
    config: Config,
    metrics: Metrics,
}

impl std::fmt::Debug for Tangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tangle").field("config", &self.config).finish()
    }
}

impl Tangle {
    /// Create a tangle over the given backend and crypto suite.
    pub fn new(
        storage: Arc<dyn Storage>,
        crypto: Arc<dyn CryptoSuite>,
        config: Config,
    ) -> Result<Self> {
        Ok(Self {
            storage,
            crypto,
            config,
            metrics: Metrics::new()?,
        })
    }

    /// The metrics collector, for scrape endpoints.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Fetch a transaction by hash.
    pub async fn get_transaction(&self, hash: &str) -> Result<Option<Arc<Transaction>>> {
        self.storage.get_transaction(hash).await
    }

    /// Fetch a bundle by bundle hash.
    pub async fn get_bundle(&self, hash: &str) -> Result<Option<Bundle>> {
        self.storage.get_bundle(hash).await
    }

    /// Transactions referencing `hash` via trunk or branch.
    pub async fn get_approvers(&self, hash: &str) -> Result<Vec<Arc<Transaction>>> {
        self.storage.get_approvers(hash).await
    }

    /// Forward a new transaction to storage.
    pub async fn append_transaction(&self, transaction: Arc<Transaction>) -> Result<bool> {
        let appended = self.storage.append_transaction(transaction).await?;
        if appended {
            self.metrics.record_append();
        }
        Ok(appended)
    }

    /// Forward a transaction update to storage.
    pub async fn update_transaction(&self, transaction: Arc<Transaction>) -> Result<bool> {
        self.storage.update_transaction(transaction).await
    }

    /// Check whether a transaction is solid, without walking ancestors.
    ///
    /// A transaction already flagged solid answers true without I/O.
    /// Otherwise the stored copy is consulted: when present, its flag is
    /// adopted onto `transaction`; when absent, the answer is false and
    /// nothing is mutated.
    pub async fn check_transaction_solidity(&self, transaction: &Transaction) -> Result<bool> {
        if let Some(native) = self.storage.solidity() {
            return native.check_transaction_solidity(transaction).await;
        }

        if transaction.is_solid() {
            return Ok(true);
        }

        let hash = transaction.hash(self.crypto.as_ref());
        match self.storage.get_transaction(hash).await? {
            None => Ok(false),
            Some(stored) => {
                let flag = stored.solid_flag();
                transaction.set_solid_flag(flag);
                Ok(flag.unwrap_or(false))
            }
        }
    }

    /// Walk the ancestry of `transaction`, mark every node whose full
    /// ancestor set is present as solid, and return the hashes of
    /// ancestors that are locally missing.
    ///
    /// Nodes already solid are neither re-marked nor re-persisted, so
    /// repeated calls are monotone. A stalled storage lookup stalls the
    /// walk; callers own timeout policy.
    pub async fn update_transaction_solidity(
        &self,
        transaction: Arc<Transaction>,
    ) -> Result<Vec<String>> {
        if let Some(native) = self.storage.solidity() {
            return native.update_transaction_solidity(transaction).await;
        }

        let mut worklist: Vec<Arc<Transaction>> =
            Vec::with_capacity(self.config.solidity.worklist_capacity.min(1024));
        worklist.push(transaction);

        let mut requested: HashSet<String> = HashSet::new();
        let mut known_solid: HashSet<String> = HashSet::new();
        let mut missing: Vec<String> = Vec::new();

        // discovery: the worklist grows while a cursor advances over it;
        // indices are never invalidated
        let mut cursor = 0;
        while cursor < worklist.len() {
            let current = worklist[cursor].clone();
            cursor += 1;

            let trunk = current.trunk().to_string();
            let branch = current.branch().to_string();

            let fetch_trunk = !is_null_hash(&trunk) && requested.insert(trunk.clone());
            let fetch_branch = !is_null_hash(&branch) && requested.insert(branch.clone());

            let (trunk_parent, branch_parent) = tokio::join!(
                async {
                    if fetch_trunk {
                        Some(self.storage.get_transaction(&trunk).await)
                    } else {
                        None
                    }
                },
                async {
                    if fetch_branch {
                        Some(self.storage.get_transaction(&branch).await)
                    } else {
                        None
                    }
                },
            );

            for (hash, outcome) in [(trunk, trunk_parent), (branch, branch_parent)] {
                let Some(fetched) = outcome else { continue };
                match fetched? {
                    None => {
                        tracing::debug!(parent = %hash, "ancestor missing");
                        missing.push(hash);
                    }
                    Some(parent) if parent.is_solid() => {
                        known_solid.insert(hash);
                    }
                    Some(parent) => {
                        worklist.push(parent);
                    }
                }
            }
        }

        // resolution: last-appended first is parents-before-children
        let mut newly_solid: Vec<Arc<Transaction>> = Vec::new();
        for node in worklist.iter().rev() {
            if node.is_solid() {
                continue;
            }

            let trunk_ok = is_null_hash(node.trunk()) || known_solid.contains(node.trunk());
            let branch_ok = is_null_hash(node.branch()) || known_solid.contains(node.branch());
            if trunk_ok && branch_ok {
                node.mark_solid();
                known_solid.insert(node.hash(self.crypto.as_ref()).to_string());
                newly_solid.push(node.clone());
            }
        }

        // persist every newly solid node concurrently, await all
        let mut updates = Vec::with_capacity(newly_solid.len());
        for node in &newly_solid {
            let storage = self.storage.clone();
            let node = node.clone();
            updates.push(tokio::spawn(async move {
                storage.update_transaction(node).await
            }));
        }
        for update in updates {
            update
                .await
                .map_err(|e| Error::Concurrency(format!("update task failed: {}", e)))??;
        }

        self.metrics.record_solidity_pass(worklist.len(), missing.len());
        tracing::info!(
            walked = worklist.len(),
            newly_solid = newly_solid.len(),
            missing = missing.len(),
            "solidity pass complete"
        );

        Ok(missing)
    }
}
