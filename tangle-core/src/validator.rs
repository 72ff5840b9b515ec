//! Pure validation rules for transactions and bundles
//!
//! Validators never mutate anything and report domain-level invalidity
//! as outcome values; errors are reserved for infrastructure failures
//! (a crypto collaborator refusing its input). Checks run in a fixed
//! order and short-circuit on the first failure.

use std::sync::Arc;

use ternary::{trits_to_trytes, Trit};

use crate::bundle::Bundle;
use crate::crypto::CryptoSuite;
use crate::error::Result;
use crate::transaction::{Field, Transaction, HASH_TRITS, SUPPLY};

/// Lowest acceptable issuance timestamp, seconds.
pub const EPOCH_FLOOR: i64 = 1_508_760_000;

/// Tryte values per signature fragment of the normalized bundle hash.
const FRAGMENT_TRYTES: usize = 27;

/// Outcome of single-transaction validation, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TransactionValidation {
    /// All checks passed
    Valid = 0,
    /// Timestamp below the protocol epoch floor
    InvalidTimestamp,
    /// Value outside `[-SUPPLY, SUPPLY]`
    InvalidValue,
    /// Hash has fewer trailing zero trits than required
    InvalidWeightMagnitude,
    /// Non-zero value with an address ending in trit 0
    InvalidAddress,
}

/// Outcome of bundle validation, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BundleValidation {
    /// All checks passed
    Valid = 0,
    /// Out-of-sequence current index or disagreeing last index
    InvalidTransactionIndex,
    /// Running value sum left `[-SUPPLY, SUPPLY]`
    InvalidTransactionValue,
    /// Non-zero value with an address ending in a non-zero trit
    InvalidTransactionAddress,
    /// Bundle field disagreeing with the first transaction's
    InvalidTransactionBundleHash,
    /// One-time-signature verification failed for a spend
    InvalidTransactionSignature,
    /// Total value sum is not zero
    InvalidValue,
    /// Recomputed bundle hash disagrees with the declared one
    InvalidHash,
}

/// Pure rule-checker for transactions and bundles.
pub struct Validator {
    crypto: Arc<dyn CryptoSuite>,
    min_weight_magnitude: usize,
    epoch_floor: i64,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("min_weight_magnitude", &self.min_weight_magnitude)
            .field("epoch_floor", &self.epoch_floor)
            .finish()
    }
}

impl Validator {
    /// Create a validator requiring `min_weight_magnitude` trailing zero
    /// trits of every transaction hash, with the default epoch floor.
    pub fn new(crypto: Arc<dyn CryptoSuite>, min_weight_magnitude: usize) -> Self {
        Self {
            crypto,
            min_weight_magnitude,
            epoch_floor: EPOCH_FLOOR,
        }
    }

    /// Create a validator from configuration.
    pub fn from_config(crypto: Arc<dyn CryptoSuite>, config: &crate::Config) -> Self {
        Self {
            crypto,
            min_weight_magnitude: config.validation.min_weight_magnitude,
            epoch_floor: config.validation.epoch_floor,
        }
    }

    /// Validate a single transaction.
    ///
    /// Checks, in order: timestamp not below the epoch floor; value in
    /// `[-SUPPLY, SUPPLY]`; weight magnitude at least the configured
    /// minimum; and for value-moving transactions, an address whose
    /// last trit is not zero.
    pub fn validate_transaction(&self, transaction: &Transaction) -> TransactionValidation {
        if transaction.timestamp() < self.epoch_floor {
            return TransactionValidation::InvalidTimestamp;
        }

        let value = transaction.value();
        if !(-SUPPLY..=SUPPLY).contains(&value) {
            return TransactionValidation::InvalidValue;
        }

        if transaction.weight_magnitude(self.crypto.as_ref()) < self.min_weight_magnitude {
            return TransactionValidation::InvalidWeightMagnitude;
        }

        let address = transaction.field_trits(Field::Address);
        if value != 0 && address[address.len() - 1] == 0 {
            return TransactionValidation::InvalidAddress;
        }

        TransactionValidation::Valid
    }

    /// Validate a whole bundle.
    ///
    /// Pass A walks the members in order: sequential current index with
    /// a shared last index, running value sum within `[-SUPPLY, SUPPLY]`,
    /// value-moving addresses ending in trit 0, and a bundle field equal
    /// to the first member's. Pass B requires the total value sum to be
    /// exactly zero, pass C the recomputed bundle hash to match the
    /// declared one, and pass D verifies the one-time signature of every
    /// spend.
    ///
    /// Errors are infrastructure only (crypto collaborator failures);
    /// every domain-level verdict is a [`BundleValidation`] value.
    pub fn validate_bundle(&self, bundle: &Bundle) -> Result<BundleValidation> {
        let transactions = bundle.transactions();

        let Some(first) = transactions.first() else {
            // no member can carry index 0
            return Ok(BundleValidation::InvalidTransactionIndex);
        };
        let declared_hash = first.bundle();
        let last_index = transactions.len() as i64 - 1;

        // pass A: per-member structure
        let mut sum: i128 = 0;
        for (index, transaction) in transactions.iter().enumerate() {
            if transaction.current_index() != index as i64
                || transaction.last_index() != last_index
            {
                return Ok(BundleValidation::InvalidTransactionIndex);
            }

            let value = transaction.value();
            sum += value as i128;
            if sum.unsigned_abs() > SUPPLY as u128 {
                return Ok(BundleValidation::InvalidTransactionValue);
            }

            let address = transaction.field_trits(Field::Address);
            if value != 0 && address[address.len() - 1] != 0 {
                return Ok(BundleValidation::InvalidTransactionAddress);
            }

            if transaction.bundle() != declared_hash {
                return Ok(BundleValidation::InvalidTransactionBundleHash);
            }
        }

        // pass B: value conservation
        if sum != 0 {
            return Ok(BundleValidation::InvalidValue);
        }

        // pass C: chained hash
        let computed = bundle.calculate_hash(self.crypto.as_ref());
        let computed_trytes = trits_to_trytes(&computed)
            .map_err(|e| crate::Error::Crypto(format!("bundle sponge output: {}", e)))?;
        if computed_trytes != declared_hash {
            return Ok(BundleValidation::InvalidHash);
        }

        // pass D: one-time signatures of every spend
        self.validate_signatures(transactions, &computed)
    }

    /// Verify the one-time signature of every negative-value member.
    ///
    /// A spend's signature may span several transactions: the spend
    /// itself plus every immediately following zero-value transaction
    /// sharing its address, one fragment each. Fragment k digests the
    /// k-th 27-value slice of the normalized bundle hash together with
    /// the fragment's message; all digests are absorbed into one fresh
    /// bundle sponge whose squeeze must reproduce the spend's address.
    /// The grouping is order-dependent by bundle construction
    /// convention and is preserved exactly.
    fn validate_signatures(
        &self,
        transactions: &[Arc<Transaction>],
        bundle_hash: &[Trit],
    ) -> Result<BundleValidation> {
        let normalized = self.crypto.normalize_bundle_hash(bundle_hash);

        let mut index = 0;
        while index < transactions.len() {
            let spend = &transactions[index];
            if spend.value() >= 0 {
                index += 1;
                continue;
            }

            let address = spend.address();
            let mut fragments: Vec<&Arc<Transaction>> = vec![spend];
            let mut next = index + 1;
            while next < transactions.len()
                && transactions[next].value() == 0
                && transactions[next].address() == address
            {
                fragments.push(&transactions[next]);
                next += 1;
            }

            let mut sponge = self.crypto.bundle_sponge();
            for (fragment_index, fragment) in fragments.iter().enumerate() {
                let offset = (fragment_index * FRAGMENT_TRYTES) % normalized.len();
                let digest = self.crypto.fragment_digest(
                    &normalized[offset..offset + FRAGMENT_TRYTES],
                    fragment.field_trits(Field::Message),
                )?;
                sponge.absorb(&digest);
            }

            let mut recovered = vec![0 as Trit; HASH_TRITS];
            sponge.squeeze(&mut recovered);
            if recovered != spend.field_trits(Field::Address) {
                return Ok(BundleValidation::InvalidTransactionSignature);
            }

            // advance past the consumed fragment transactions
            index = next;
        }

        Ok(BundleValidation::Valid)
    }
}
