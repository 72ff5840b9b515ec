//! Cryptographic collaborator interfaces
//!
//! The ledger core consumes ternary cryptography through the narrow
//! interfaces below and never implements the primitives itself. Two
//! sponge variants are in play - one hashes whole transaction records,
//! the other chains bundle essences and signature digests - and they are
//! not interchangeable.

use crate::error::Result;
use ternary::Trit;

/// A ternary sponge hash.
///
/// Implementations absorb an arbitrary number of trit slices and squeeze
/// output trits on demand. `reset` returns the sponge to its initial
/// state so an instance can be reused.
pub trait Sponge: Send {
    /// Return the sponge to its initial state.
    fn reset(&mut self);

    /// Absorb a slice of trits into the sponge state.
    fn absorb(&mut self, trits: &[Trit]);

    /// Squeeze output trits, filling `out` completely.
    fn squeeze(&mut self, out: &mut [Trit]);
}

/// Supplier of the cryptographic primitives the ledger core depends on.
///
/// Implementations live outside this repository; the core only requires
/// that the two sponge variants stay distinct and that
/// `normalize_bundle_hash` / `fragment_digest` agree with whatever
/// one-time-signature scheme produced the transactions being checked.
pub trait CryptoSuite: Send + Sync {
    /// Fresh sponge instance for per-transaction hashing.
    fn transaction_sponge(&self) -> Box<dyn Sponge>;

    /// Fresh sponge instance for bundle and signature hashing.
    fn bundle_sponge(&self) -> Box<dyn Sponge>;

    /// Normalize a 243-trit bundle hash into 81 tryte values, each in
    /// -13..=13, as consumed by the signature scheme.
    fn normalize_bundle_hash(&self, hash: &[Trit]) -> Vec<i8>;

    /// One-time-signature digest for a single fragment: 27 normalized
    /// tryte values plus the fragment transaction's 6561-trit message,
    /// producing 243 trits.
    fn fragment_digest(&self, normalized_fragment: &[i8], message: &[Trit]) -> Result<Vec<Trit>>;
}
