//! Ordered transaction groups sharing one chained hash
//!
//! A bundle wraps an existing transaction list without mutating or
//! validating it; validation is the [`crate::validator`]'s job. The
//! bundle hash chains every member's 486-trit essence through a single
//! bundle-sponge instance.

use std::sync::Arc;

use ternary::Trit;

use crate::crypto::CryptoSuite;
use crate::transaction::{Field, Transaction, HASH_TRITS};

/// An ordered group of transactions representing one logical transfer.
#[derive(Debug, Clone)]
pub struct Bundle {
    transactions: Vec<Arc<Transaction>>,
}

impl Bundle {
    /// Wrap an ordered transaction list. Performs no validation.
    pub fn from_transactions(transactions: Vec<Arc<Transaction>>) -> Self {
        Self { transactions }
    }

    /// The wrapped transactions, in bundle order.
    pub fn transactions(&self) -> &[Arc<Transaction>] {
        &self.transactions
    }

    /// Number of transactions in the bundle.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the bundle holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The declared bundle hash: the first member's bundle field.
    pub fn hash(&self) -> Option<&str> {
        self.transactions.first().map(|tx| tx.bundle())
    }

    /// The bundle's trunk reference: the last member's trunk field.
    pub fn trunk(&self) -> Option<&str> {
        self.transactions.last().map(|tx| tx.trunk())
    }

    /// The bundle's branch reference: the last member's branch field.
    pub fn branch(&self) -> Option<&str> {
        self.transactions.last().map(|tx| tx.branch())
    }

    /// Compute the canonical bundle hash: absorb each member's essence
    /// in sequence order into one fresh bundle sponge, squeeze 243
    /// trits. Every member's bundle field must equal this value for the
    /// bundle to validate.
    pub fn calculate_hash(&self, crypto: &dyn CryptoSuite) -> Vec<Trit> {
        let mut sponge = crypto.bundle_sponge();

        for transaction in &self.transactions {
            sponge.absorb(transaction.field_trits(Field::Essence));
        }

        let mut hash = vec![0 as Trit; HASH_TRITS];
        sponge.squeeze(&mut hash);
        hash
    }
}
