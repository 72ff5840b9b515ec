//! Storage abstraction layer
//!
//! The tangle never owns transaction persistence; it talks to a backend
//! through the async [`Storage`] trait. A backend may additionally carry
//! its own solidity bookkeeping by exposing a [`SolidityStore`], in
//! which case the tangle defers to it instead of running the default
//! walk. "Not found" is a domain outcome (`Ok(None)`), never an error.
//!
//! [`MemoryStorage`] is the in-memory reference backend used by tests
//! and embedders; durable backends live outside this crate.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::bundle::Bundle;
use crate::crypto::CryptoSuite;
use crate::error::Result;
use crate::transaction::Transaction;

/// Asynchronous transaction store keyed by the 81-tryte hash.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch a transaction by hash, `None` when absent.
    async fn get_transaction(&self, hash: &str) -> Result<Option<Arc<Transaction>>>;

    /// Fetch the bundle with the given bundle hash, `None` when absent.
    async fn get_bundle(&self, hash: &str) -> Result<Option<Bundle>>;

    /// Transactions referencing `hash` via trunk or branch.
    async fn get_approvers(&self, hash: &str) -> Result<Vec<Arc<Transaction>>>;

    /// Store a new transaction. Returns false when the hash is already
    /// present.
    async fn append_transaction(&self, transaction: Arc<Transaction>) -> Result<bool>;

    /// Replace a stored transaction (typically after a metadata change).
    /// Returns false when the hash is not present.
    async fn update_transaction(&self, transaction: Arc<Transaction>) -> Result<bool>;

    /// Native solidity bookkeeping, if this backend implements its own.
    /// When `Some`, the tangle defers both solidity operations to it.
    fn solidity(&self) -> Option<&dyn SolidityStore> {
        None
    }
}

/// Backend-native solidity operations.
#[async_trait]
pub trait SolidityStore: Send + Sync {
    /// Backend-native counterpart of
    /// [`crate::Tangle::check_transaction_solidity`].
    async fn check_transaction_solidity(&self, transaction: &Transaction) -> Result<bool>;

    /// Backend-native counterpart of
    /// [`crate::Tangle::update_transaction_solidity`]. Returns the
    /// hashes of missing ancestors.
    async fn update_transaction_solidity(
        &self,
        transaction: Arc<Transaction>,
    ) -> Result<Vec<String>>;
}

/// In-memory reference backend.
///
/// Bundle and approver lookups scan the transaction map; that is
/// adequate for the test and embedding scenarios this backend serves.
pub struct MemoryStorage {
    transactions: DashMap<String, Arc<Transaction>>,
    crypto: Arc<dyn CryptoSuite>,
}

impl MemoryStorage {
    /// Create an empty store. The crypto suite must match the one used
    /// by the rest of the node, since transaction hashes key the store.
    pub fn new(crypto: Arc<dyn CryptoSuite>) -> Self {
        Self {
            transactions: DashMap::new(),
            crypto,
        }
    }

    /// Number of stored transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl std::fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStorage")
            .field("transactions", &self.transactions.len())
            .finish()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_transaction(&self, hash: &str) -> Result<Option<Arc<Transaction>>> {
        Ok(self.transactions.get(hash).map(|entry| entry.value().clone()))
    }

    async fn get_bundle(&self, hash: &str) -> Result<Option<Bundle>> {
        let mut members: Vec<Arc<Transaction>> = self
            .transactions
            .iter()
            .filter(|entry| entry.value().bundle() == hash)
            .map(|entry| entry.value().clone())
            .collect();

        if members.is_empty() {
            return Ok(None);
        }

        members.sort_by_key(|tx| tx.current_index());
        Ok(Some(Bundle::from_transactions(members)))
    }

    async fn get_approvers(&self, hash: &str) -> Result<Vec<Arc<Transaction>>> {
        Ok(self
            .transactions
            .iter()
            .filter(|entry| entry.value().trunk() == hash || entry.value().branch() == hash)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn append_transaction(&self, transaction: Arc<Transaction>) -> Result<bool> {
        let hash = transaction.hash(self.crypto.as_ref()).to_string();

        match self.transactions.entry(hash) {
            dashmap::mapref::entry::Entry::Occupied(_) => Ok(false),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(transaction);
                Ok(true)
            }
        }
    }

    async fn update_transaction(&self, transaction: Arc<Transaction>) -> Result<bool> {
        let hash = transaction.hash(self.crypto.as_ref()).to_string();

        match self.transactions.entry(hash) {
            dashmap::mapref::entry::Entry::Occupied(mut slot) => {
                slot.insert(transaction);
                Ok(true)
            }
            dashmap::mapref::entry::Entry::Vacant(_) => Ok(false),
        }
    }
}
