//! Tangle Ledger Core
//!
//! In-memory primitives of a ternary-encoded, DAG-based distributed
//! ledger: the fixed-width transaction codec, bundle hash chaining,
//! solidity propagation over parent references, and the validation
//! rules enforcing value conservation and signature integrity.
//!
//! # Architecture
//!
//! - **Transaction codec**: one 8019-trit record, three lazily derived
//!   encodings, memoized field access
//! - **Bundle**: ordered transaction group chained by one essence hash
//! - **Tangle**: façade over an async [`Storage`] backend, owning the
//!   two-phase solidity walk
//! - **Validator**: pure rule-checker for transactions and bundles
//!
//! Persistence, transport and the raw ternary crypto primitives are
//! external collaborators behind the [`Storage`] and [`CryptoSuite`]
//! traits.
//!
//! # Invariants
//!
//! - Encodings are mutually exact: derived bytes/trits/trytes always
//!   round-trip
//! - Bundle value conservation: member values sum to zero, partial sums
//!   stay within the supply
//! - Solidity is monotone: once marked solid, never unmarked

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod bundle;
pub mod config;
pub mod crypto;
pub mod error;
pub mod metrics;
pub mod storage;
pub mod tangle;
pub mod transaction;
pub mod validator;

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports
pub use bundle::Bundle;
pub use config::Config;
pub use crypto::{CryptoSuite, Sponge};
pub use error::{Error, Result};
pub use metrics::Metrics;
pub use storage::{MemoryStorage, SolidityStore, Storage};
pub use tangle::Tangle;
pub use transaction::{
    Field, Metadata, Transaction, TransactionFields, HASH_TRITS, HASH_TRYTES, NULL_HASH, SUPPLY,
    TRANSACTION_BYTES, TRANSACTION_TRITS, TRANSACTION_TRYTES,
};
pub use validator::{BundleValidation, TransactionValidation, Validator, EPOCH_FLOOR};
