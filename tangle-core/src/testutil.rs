//! Shared helpers for unit tests
//!
//! The crypto stand-in below is deterministic but has no cryptographic
//! strength; it exists so codec, bundle and tangle behavior can be
//! exercised without the external sponge implementations.

use rand::Rng;
use ternary::{Trit, TRYTE_ALPHABET};

use crate::crypto::{CryptoSuite, Sponge};
use crate::error::Result;
use crate::transaction::TransactionFields;

/// Deterministic sponge stand-in. The `variant` seed keeps the
/// transaction and bundle instances from ever producing the same output
/// for the same input.
pub struct StubSponge {
    state: [i64; 243],
    variant: i64,
    absorbed: usize,
}

impl StubSponge {
    pub fn new(variant: i64) -> Self {
        Self {
            state: [0; 243],
            variant,
            absorbed: 0,
        }
    }

    pub fn mix(&mut self, value: i64) {
        let slot = self.absorbed % 243;
        self.state[slot] = self.state[slot]
            .wrapping_mul(6364136223846793005)
            .wrapping_add(value)
            .wrapping_add(self.variant)
            .wrapping_add(self.absorbed as i64)
            .wrapping_add(1442695040888963407);
        self.absorbed += 1;
    }
}

impl Sponge for StubSponge {
    fn reset(&mut self) {
        self.state = [0; 243];
        self.absorbed = 0;
    }

    fn absorb(&mut self, trits: &[Trit]) {
        for &trit in trits {
            self.mix(trit as i64);
        }
    }

    fn squeeze(&mut self, out: &mut [Trit]) {
        for (i, slot) in out.iter_mut().enumerate() {
            let mixed = self.state[i % 243]
                .wrapping_mul(2862933555777941757)
                .wrapping_add(i as i64)
                .wrapping_add(self.variant);
            *slot = (mixed.rem_euclid(3) - 1) as Trit;
        }
    }
}

const TRANSACTION_VARIANT: i64 = 1;
const BUNDLE_VARIANT: i64 = 2;
const DIGEST_VARIANT: i64 = 3;

/// Deterministic [`CryptoSuite`] stand-in.
///
/// The fragment digest depends only on the message fragment, which lets
/// fixtures derive a matching address after composing their messages.
pub struct StubCrypto;

impl StubCrypto {
    pub fn new() -> Self {
        Self
    }
}

impl CryptoSuite for StubCrypto {
    fn transaction_sponge(&self) -> Box<dyn Sponge> {
        Box::new(StubSponge::new(TRANSACTION_VARIANT))
    }

    fn bundle_sponge(&self) -> Box<dyn Sponge> {
        Box::new(StubSponge::new(BUNDLE_VARIANT))
    }

    fn normalize_bundle_hash(&self, hash: &[Trit]) -> Vec<i8> {
        hash.chunks(3)
            .map(|group| {
                group
                    .iter()
                    .enumerate()
                    .map(|(i, &trit)| trit * 3i8.pow(i as u32))
                    .sum()
            })
            .collect()
    }

    fn fragment_digest(&self, _normalized_fragment: &[i8], message: &[Trit]) -> Result<Vec<Trit>> {
        let mut sponge = StubSponge::new(DIGEST_VARIANT);
        sponge.absorb(message);

        let mut digest = vec![0 as Trit; 243];
        sponge.squeeze(&mut digest);
        Ok(digest)
    }
}

/// Random trits in {-1, 0, 1}.
pub fn random_trits(count: usize) -> Vec<Trit> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(-1i8..=1)).collect()
}

/// Random tryte string drawn from the alphabet.
pub fn random_trytes(count: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| TRYTE_ALPHABET[rng.gen_range(0..27)] as char)
        .collect()
}

/// Representative structured-field input for codec tests.
pub fn sample_fields() -> TransactionFields {
    TransactionFields {
        hash: None,
        message: random_trytes(100),
        address: random_trytes(81),
        value: 123_456,
        obsolete_tag: random_trytes(27),
        timestamp: 1_600_000_000,
        current_index: 0,
        last_index: 3,
        bundle: random_trytes(81),
        trunk: random_trytes(81),
        branch: random_trytes(81),
        tag: random_trytes(27),
        attachment_timestamp: 1_600_000_000_000,
        attachment_timestamp_lower_bound: 0,
        attachment_timestamp_upper_bound: 12,
        nonce: random_trytes(27),
    }
}
