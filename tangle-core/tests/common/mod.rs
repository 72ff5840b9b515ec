//! Shared fixtures for the integration suites
//!
//! Carries a deterministic crypto stand-in (the real sponge and
//! signature primitives live outside this repository) plus builders for
//! DAG transactions and signed bundles.

#![allow(dead_code)]

use std::sync::Arc;

use tangle_core::{
    Bundle, CryptoSuite, Metadata, Result, Sponge, Transaction, TransactionFields, Field,
    HASH_TRITS, NULL_HASH,
};
use ternary::{trits_to_trytes, trytes_to_trits, Trit, TRYTE_ALPHABET};

/// Deterministic sponge stand-in; the variant seed keeps the
/// transaction and bundle instances from producing equal output for
/// equal input.
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

    fn mix(&mut self, value: i64) {
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

/// Deterministic crypto suite stand-in.
///
/// The fragment digest depends only on the message fragment, which lets
/// the signed-bundle builder derive a matching address after composing
/// its messages.
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

/// Deterministic tryte filler of the given length.
pub fn filler_trytes(seed: usize, count: usize) -> String {
    (0..count)
        .map(|i| TRYTE_ALPHABET[(seed + i * 7) % 27] as char)
        .collect()
}

/// Baseline structured fields; every value is deterministic.
pub fn base_fields() -> TransactionFields {
    TransactionFields {
        hash: None,
        message: String::new(),
        address: filler_trytes(3, 81),
        value: 0,
        obsolete_tag: "OBSOLETETAG".to_string(),
        timestamp: 1_600_000_000,
        current_index: 0,
        last_index: 0,
        bundle: filler_trytes(5, 81),
        trunk: NULL_HASH.to_string(),
        branch: NULL_HASH.to_string(),
        tag: "TAG".to_string(),
        attachment_timestamp: 1_600_000_000_000,
        attachment_timestamp_lower_bound: 0,
        attachment_timestamp_upper_bound: 12,
        nonce: "NONCE".to_string(),
    }
}

/// A zero-value transaction for DAG fixtures, distinguishable by tag,
/// referencing the given parents.
pub fn dag_transaction(tag: &str, trunk: &str, branch: &str) -> Arc<Transaction> {
    let mut fields = base_fields();
    fields.tag = tag.to_string();
    fields.trunk = trunk.to_string();
    fields.branch = branch.to_string();
    Arc::new(Transaction::from_fields(fields, Metadata::default()).unwrap())
}

/// Pad a tryte string to the message field width and return its trits,
/// exactly as the validator will extract them from the record.
fn message_field_trits(message: &str) -> Vec<Trit> {
    let width = Field::Message.width() / 3;
    let mut padded = message.to_string();
    while padded.len() < width {
        padded.push('9');
    }
    trytes_to_trits(&padded).unwrap()
}

/// Structured fields for a correctly signed three-member bundle:
/// a spend carrying two signature fragments plus one output.
///
/// The signature scheme is forged through the stand-in digest: the
/// spend address is derived from the fragment messages, retrying with a
/// different message suffix until the address ends in a zero trit (the
/// bundle address rule for value-moving members).
pub fn signed_bundle_fields(crypto: &StubCrypto) -> Vec<TransactionFields> {
    let mut counter = 0i64;
    let (address, message0, message1) = loop {
        let message0 = format!("SIGNATUREFRAGMENTA{}", filler_trytes(counter as usize, 9));
        let message1 = "SIGNATUREFRAGMENTB".to_string();

        let digest0 = crypto
            .fragment_digest(&[0; 27], &message_field_trits(&message0))
            .unwrap();
        let digest1 = crypto
            .fragment_digest(&[0; 27], &message_field_trits(&message1))
            .unwrap();

        let mut sponge = crypto.bundle_sponge();
        sponge.absorb(&digest0);
        sponge.absorb(&digest1);
        let mut recovered = vec![0 as Trit; HASH_TRITS];
        sponge.squeeze(&mut recovered);

        if recovered[HASH_TRITS - 1] == 0 {
            break (trits_to_trytes(&recovered).unwrap(), message0, message1);
        }
        counter += 1;
    };

    // output address ends in 'A' = [1, 0, 0]: final trit zero
    let output_address = format!("{}A", filler_trytes(11, 80));

    let mut spend = base_fields();
    spend.message = message0;
    spend.address = address.clone();
    spend.value = -100;
    spend.current_index = 0;
    spend.last_index = 2;

    let mut fragment = base_fields();
    fragment.message = message1;
    fragment.address = address;
    fragment.value = 0;
    fragment.current_index = 1;
    fragment.last_index = 2;

    let mut output = base_fields();
    output.address = output_address;
    output.value = 100;
    output.current_index = 2;
    output.last_index = 2;

    let mut members = vec![spend, fragment, output];

    // chain the bundle hash: essence-only, so the declared field can be
    // filled in afterwards without disturbing it
    let computed = build_bundle(&members).calculate_hash(crypto);
    let bundle_hash = trits_to_trytes(&computed).unwrap();
    for member in &mut members {
        member.bundle = bundle_hash.clone();
    }

    members
}

/// Structured fields for a signed bundle whose spend carries a single
/// signature fragment; the zero-value member in between has an
/// unrelated address, so fragment grouping must stop at the spend.
pub fn single_fragment_bundle_fields(crypto: &StubCrypto) -> Vec<TransactionFields> {
    let mut counter = 0i64;
    let (address, message) = loop {
        let message = format!("LONESIGNATURE{}", filler_trytes(counter as usize, 9));
        let digest = crypto
            .fragment_digest(&[0; 27], &message_field_trits(&message))
            .unwrap();

        let mut sponge = crypto.bundle_sponge();
        sponge.absorb(&digest);
        let mut recovered = vec![0 as Trit; HASH_TRITS];
        sponge.squeeze(&mut recovered);

        if recovered[HASH_TRITS - 1] == 0 {
            break (trits_to_trytes(&recovered).unwrap(), message);
        }
        counter += 1;
    };

    let mut spend = base_fields();
    spend.message = message;
    spend.address = address;
    spend.value = -50;
    spend.current_index = 0;
    spend.last_index = 2;

    // unrelated zero-value member: must not be consumed as a fragment
    let mut bystander = base_fields();
    bystander.value = 0;
    bystander.current_index = 1;
    bystander.last_index = 2;

    let mut output = base_fields();
    output.address = format!("{}A", filler_trytes(17, 80));
    output.value = 50;
    output.current_index = 2;
    output.last_index = 2;

    let mut members = vec![spend, bystander, output];

    let computed = build_bundle(&members).calculate_hash(crypto);
    let bundle_hash = trits_to_trytes(&computed).unwrap();
    for member in &mut members {
        member.bundle = bundle_hash.clone();
    }

    members
}

/// Build a bundle from structured fields.
pub fn build_bundle(members: &[TransactionFields]) -> Bundle {
    Bundle::from_transactions(
        members
            .iter()
            .map(|fields| {
                Arc::new(Transaction::from_fields(fields.clone(), Metadata::default()).unwrap())
            })
            .collect(),
    )
}
