//! Fixed-width ternary transaction codec
//!
//! A transaction is a fixed 8019-trit record with three equivalent
//! encodings (1604 bytes, 2673 trytes, 8019 trits) and a published table
//! of field offsets. Whichever encoding a transaction is built from, the
//! other two are derived lazily and cached; field values decode on first
//! access and are cached as well. The canonical encoding is immutable
//! after construction - only the metadata flags mutate.

use std::sync::OnceLock;

use parking_lot::RwLock;
use ternary::{
    bytes_to_trits, number_to_trytes, trits_to_bytes, trits_to_number, trits_to_trytes,
    trytes_to_trits, Trit,
};

use crate::crypto::CryptoSuite;
use crate::error::{Error, Result};

/// Total token supply; values outside `[-SUPPLY, SUPPLY]` are invalid.
pub const SUPPLY: i64 = 2_779_530_283_277_761;

/// Transaction record size in trits.
pub const TRANSACTION_TRITS: usize = 8019;

/// Transaction record size in trytes.
pub const TRANSACTION_TRYTES: usize = 2673;

/// Transaction record size in bytes.
pub const TRANSACTION_BYTES: usize = 1604;

/// Hash size in trits.
pub const HASH_TRITS: usize = 243;

/// Hash size in trytes.
pub const HASH_TRYTES: usize = 81;

/// Usable window of the value field; trits beyond it are zero in
/// canonical records.
pub const VALUE_USABLE_TRITS: usize = 33;

/// The all-`9` hash, denoting an absent parent reference.
pub const NULL_HASH: &str =
    "999999999999999999999999999999999999999999999999999999999999999999999999999999999";

/// True when `hash` is the null (all-`9`) reference.
pub fn is_null_hash(hash: &str) -> bool {
    !hash.is_empty() && hash.bytes().all(|b| b == b'9')
}

/// A declared field of the transaction record, plus the `Essence`
/// pseudo-field spanning address through last index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Message / signature fragment
    Message,
    /// Address (spend source or output target)
    Address,
    /// Transferred value, balanced ternary
    Value,
    /// Obsolete tag (legacy, still part of the essence)
    ObsoleteTag,
    /// Issuance timestamp, seconds
    Timestamp,
    /// Index of this transaction within its bundle
    CurrentIndex,
    /// Last index shared by every transaction of the bundle
    LastIndex,
    /// Bundle hash
    Bundle,
    /// Trunk parent reference
    Trunk,
    /// Branch parent reference
    Branch,
    /// Tag
    Tag,
    /// Attachment timestamp
    AttachmentTimestamp,
    /// Attachment timestamp lower bound
    AttachmentTimestampLowerBound,
    /// Attachment timestamp upper bound
    AttachmentTimestampUpperBound,
    /// Proof-of-work nonce
    Nonce,
    /// Signed portion: address through last index
    Essence,
}

impl Field {
    /// Offset of the field in trits.
    pub const fn offset(self) -> usize {
        match self {
            Field::Message => 0,
            Field::Address => 6561,
            Field::Value => 6804,
            Field::ObsoleteTag => 6885,
            Field::Timestamp => 6966,
            Field::CurrentIndex => 6993,
            Field::LastIndex => 7020,
            Field::Bundle => 7047,
            Field::Trunk => 7290,
            Field::Branch => 7533,
            Field::Tag => 7776,
            Field::AttachmentTimestamp => 7857,
            Field::AttachmentTimestampLowerBound => 7884,
            Field::AttachmentTimestampUpperBound => 7911,
            Field::Nonce => 7938,
            Field::Essence => 6561,
        }
    }

    /// Width of the field in trits.
    pub const fn width(self) -> usize {
        match self {
            Field::Message => 6561,
            Field::Address => 243,
            Field::Value => 81,
            Field::ObsoleteTag => 81,
            Field::Timestamp => 27,
            Field::CurrentIndex => 27,
            Field::LastIndex => 27,
            Field::Bundle => 243,
            Field::Trunk => 243,
            Field::Branch => 243,
            Field::Tag => 81,
            Field::AttachmentTimestamp => 27,
            Field::AttachmentTimestampLowerBound => 27,
            Field::AttachmentTimestampUpperBound => 27,
            Field::Nonce => 81,
            Field::Essence => 486,
        }
    }

    /// Field name as it appears in the published table.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Message => "message",
            Field::Address => "address",
            Field::Value => "value",
            Field::ObsoleteTag => "obsoleteTag",
            Field::Timestamp => "timestamp",
            Field::CurrentIndex => "currentIndex",
            Field::LastIndex => "lastIndex",
            Field::Bundle => "bundle",
            Field::Trunk => "trunk",
            Field::Branch => "branch",
            Field::Tag => "tag",
            Field::AttachmentTimestamp => "attachmentTimestamp",
            Field::AttachmentTimestampLowerBound => "attachmentTimestampLowerBound",
            Field::AttachmentTimestampUpperBound => "attachmentTimestampUpperBound",
            Field::Nonce => "nonce",
            Field::Essence => "essence",
        }
    }

    /// Parse a field name. Names outside the published table fail with
    /// [`Error::UnknownField`].
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "message" => Ok(Field::Message),
            "address" => Ok(Field::Address),
            "value" => Ok(Field::Value),
            "obsoleteTag" => Ok(Field::ObsoleteTag),
            "timestamp" => Ok(Field::Timestamp),
            "currentIndex" => Ok(Field::CurrentIndex),
            "lastIndex" => Ok(Field::LastIndex),
            "bundle" => Ok(Field::Bundle),
            "trunk" => Ok(Field::Trunk),
            "branch" => Ok(Field::Branch),
            "tag" => Ok(Field::Tag),
            "attachmentTimestamp" => Ok(Field::AttachmentTimestamp),
            "attachmentTimestampLowerBound" => Ok(Field::AttachmentTimestampLowerBound),
            "attachmentTimestampUpperBound" => Ok(Field::AttachmentTimestampUpperBound),
            "nonce" => Ok(Field::Nonce),
            "essence" => Ok(Field::Essence),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

/// Structured field input for [`Transaction::from_fields`].
///
/// Tryte fields may be given shorter than their width; composition
/// right-pads them with the zero symbol `9`.
#[derive(Debug, Clone)]
pub struct TransactionFields {
    /// Pre-computed hash, if the caller already knows it
    pub hash: Option<String>,
    /// Message / signature fragment, up to 2187 trytes
    pub message: String,
    /// Address, up to 81 trytes
    pub address: String,
    /// Transferred value
    pub value: i64,
    /// Obsolete tag, up to 27 trytes
    pub obsolete_tag: String,
    /// Issuance timestamp, seconds
    pub timestamp: i64,
    /// Index within the bundle
    pub current_index: i64,
    /// Last index of the bundle
    pub last_index: i64,
    /// Bundle hash, up to 81 trytes
    pub bundle: String,
    /// Trunk parent reference, up to 81 trytes
    pub trunk: String,
    /// Branch parent reference, up to 81 trytes
    pub branch: String,
    /// Tag, up to 27 trytes
    pub tag: String,
    /// Attachment timestamp
    pub attachment_timestamp: i64,
    /// Attachment timestamp lower bound
    pub attachment_timestamp_lower_bound: i64,
    /// Attachment timestamp upper bound
    pub attachment_timestamp_upper_bound: i64,
    /// Proof-of-work nonce, up to 27 trytes
    pub nonce: String,
}

/// Node-local transaction state, orthogonal to the canonical encoding.
///
/// This replaces the open attribute map of earlier revisions with a fixed
/// shape, so the solidity algorithm's reads and writes are checked at
/// compile time. Metadata is never part of the ternary record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Whether every transitive ancestor is locally present. `None`
    /// means the solidity of this transaction has not been computed.
    pub is_solid: Option<bool>,
    /// Gossip origin of the transaction, when known.
    pub sender: Option<String>,
}

/// A fixed-width ternary transaction record.
///
/// Built from exactly one of bytes, trytes, trits or structured fields;
/// the remaining representations and decoded field values materialize
/// lazily, each exactly once.
#[derive(Debug)]
pub struct Transaction {
    bytes: OnceLock<Vec<u8>>,
    trits: OnceLock<Vec<Trit>>,
    trytes: OnceLock<String>,

    // structured-field seed, present only for `from_fields`
    fields: Option<Box<TransactionFields>>,

    address: OnceLock<String>,
    value: OnceLock<i64>,
    obsolete_tag: OnceLock<String>,
    timestamp: OnceLock<i64>,
    current_index: OnceLock<i64>,
    last_index: OnceLock<i64>,
    bundle: OnceLock<String>,
    trunk: OnceLock<String>,
    branch: OnceLock<String>,
    tag: OnceLock<String>,
    attachment_timestamp: OnceLock<i64>,
    attachment_timestamp_lower_bound: OnceLock<i64>,
    attachment_timestamp_upper_bound: OnceLock<i64>,
    nonce: OnceLock<String>,
    message: OnceLock<String>,

    hash: OnceLock<String>,
    weight_magnitude: OnceLock<usize>,

    metadata: RwLock<Metadata>,
}

impl Transaction {
    fn empty(metadata: Metadata) -> Self {
        Self {
            bytes: OnceLock::new(),
            trits: OnceLock::new(),
            trytes: OnceLock::new(),
            fields: None,
            address: OnceLock::new(),
            value: OnceLock::new(),
            obsolete_tag: OnceLock::new(),
            timestamp: OnceLock::new(),
            current_index: OnceLock::new(),
            last_index: OnceLock::new(),
            bundle: OnceLock::new(),
            trunk: OnceLock::new(),
            branch: OnceLock::new(),
            tag: OnceLock::new(),
            attachment_timestamp: OnceLock::new(),
            attachment_timestamp_lower_bound: OnceLock::new(),
            attachment_timestamp_upper_bound: OnceLock::new(),
            nonce: OnceLock::new(),
            message: OnceLock::new(),
            hash: OnceLock::new(),
            weight_magnitude: OnceLock::new(),
            metadata: RwLock::new(metadata),
        }
    }

    /// Build a transaction from its 1604-byte encoding.
    pub fn from_bytes(bytes: Vec<u8>, metadata: Metadata) -> Result<Self> {
        if bytes.len() != TRANSACTION_BYTES {
            return Err(Error::InvalidLength {
                kind: "byte",
                expected: TRANSACTION_BYTES,
                actual: bytes.len(),
            });
        }
        for &byte in &bytes {
            if !(-121..=121).contains(&(byte as i8)) {
                return Err(Error::Ternary(ternary::Error::InvalidByte(byte as i8)));
            }
        }

        let transaction = Self::empty(metadata);
        let _ = transaction.bytes.set(bytes);
        Ok(transaction)
    }

    /// Build a transaction from its 2673-tryte encoding.
    pub fn from_trytes(trytes: String, metadata: Metadata) -> Result<Self> {
        if trytes.len() != TRANSACTION_TRYTES {
            return Err(Error::InvalidLength {
                kind: "tryte",
                expected: TRANSACTION_TRYTES,
                actual: trytes.len(),
            });
        }
        check_tryte_chars(&trytes)?;

        let transaction = Self::empty(metadata);
        let _ = transaction.trytes.set(trytes);
        Ok(transaction)
    }

    /// Build a transaction from its 8019-trit encoding.
    pub fn from_trits(trits: Vec<Trit>, metadata: Metadata) -> Result<Self> {
        if trits.len() != TRANSACTION_TRITS {
            return Err(Error::InvalidLength {
                kind: "trit",
                expected: TRANSACTION_TRITS,
                actual: trits.len(),
            });
        }
        for &trit in &trits {
            if !(-1..=1).contains(&trit) {
                return Err(Error::Ternary(ternary::Error::InvalidTrit(trit)));
            }
        }

        let transaction = Self::empty(metadata);
        let _ = transaction.trits.set(trits);
        Ok(transaction)
    }

    /// Build a transaction from structured fields.
    ///
    /// Tryte fields are right-padded with `9` to their width, numeric
    /// fields are balanced-ternary encoded; the canonical trytes are
    /// composed on first demand. Over-width input fails fast.
    pub fn from_fields(mut fields: TransactionFields, metadata: Metadata) -> Result<Self> {
        check_tryte_field(&fields.message, Field::Message)?;
        check_tryte_field(&fields.address, Field::Address)?;
        check_tryte_field(&fields.obsolete_tag, Field::ObsoleteTag)?;
        check_tryte_field(&fields.bundle, Field::Bundle)?;
        check_tryte_field(&fields.trunk, Field::Trunk)?;
        check_tryte_field(&fields.branch, Field::Branch)?;
        check_tryte_field(&fields.tag, Field::Tag)?;
        check_tryte_field(&fields.nonce, Field::Nonce)?;
        check_number_field(fields.value, Field::Value)?;
        check_number_field(fields.timestamp, Field::Timestamp)?;
        check_number_field(fields.current_index, Field::CurrentIndex)?;
        check_number_field(fields.last_index, Field::LastIndex)?;
        check_number_field(fields.attachment_timestamp, Field::AttachmentTimestamp)?;
        check_number_field(
            fields.attachment_timestamp_lower_bound,
            Field::AttachmentTimestampLowerBound,
        )?;
        check_number_field(
            fields.attachment_timestamp_upper_bound,
            Field::AttachmentTimestampUpperBound,
        )?;
        if let Some(hash) = &fields.hash {
            if hash.len() != HASH_TRYTES {
                return Err(Error::InvalidLength {
                    kind: "hash tryte",
                    expected: HASH_TRYTES,
                    actual: hash.len(),
                });
            }
            check_tryte_chars(hash)?;
        }

        // the message is padded up-front; its accessor reflects the
        // padded form, as does the composed record
        pad_trytes(&mut fields.message, Field::Message);

        let transaction = Self::empty(metadata);
        if let Some(hash) = fields.hash.clone() {
            let _ = transaction.hash.set(hash);
        }
        let _ = transaction.message.set(fields.message.clone());
        let _ = transaction.address.set(fields.address.clone());
        let _ = transaction.value.set(fields.value);
        let _ = transaction.obsolete_tag.set(fields.obsolete_tag.clone());
        let _ = transaction.timestamp.set(fields.timestamp);
        let _ = transaction.current_index.set(fields.current_index);
        let _ = transaction.last_index.set(fields.last_index);
        let _ = transaction.bundle.set(fields.bundle.clone());
        let _ = transaction.trunk.set(fields.trunk.clone());
        let _ = transaction.branch.set(fields.branch.clone());
        let _ = transaction.tag.set(fields.tag.clone());
        let _ = transaction
            .attachment_timestamp
            .set(fields.attachment_timestamp);
        let _ = transaction
            .attachment_timestamp_lower_bound
            .set(fields.attachment_timestamp_lower_bound);
        let _ = transaction
            .attachment_timestamp_upper_bound
            .set(fields.attachment_timestamp_upper_bound);
        let _ = transaction.nonce.set(fields.nonce.clone());

        let mut transaction = transaction;
        transaction.fields = Some(Box::new(fields));
        Ok(transaction)
    }

    /// The full 8019-trit representation.
    pub fn trits(&self) -> &[Trit] {
        self.trits.get_or_init(|| {
            if let Some(trytes) = self.trytes.get() {
                trytes_to_trits(trytes).expect("tryte representation validated at construction")
            } else if let Some(bytes) = self.bytes.get() {
                let mut trits =
                    bytes_to_trits(bytes).expect("byte representation validated at construction");
                trits.truncate(TRANSACTION_TRITS);
                trits
            } else {
                // composed from structured fields via the tryte form
                trytes_to_trits(self.trytes())
                    .expect("composed trytes are drawn from the alphabet")
            }
        })
    }

    /// The full 2673-tryte representation.
    pub fn trytes(&self) -> &str {
        self.trytes.get_or_init(|| {
            if let Some(trits) = self.trits.get() {
                trits_to_trytes(trits).expect("trit representation validated at construction")
            } else if self.bytes.get().is_some() {
                // derives and caches the trit form on the way
                trits_to_trytes(self.trits())
                    .expect("byte representation validated at construction")
            } else {
                let fields = self
                    .fields
                    .as_deref()
                    .expect("a construction source is always present");
                compose_trytes(fields)
            }
        })
    }

    /// The full 1604-byte representation.
    pub fn bytes(&self) -> &[u8] {
        self.bytes.get_or_init(|| trits_to_bytes(self.trits()))
    }

    /// Trits of one field at its published offset.
    pub fn field_trits(&self, field: Field) -> &[Trit] {
        &self.trits()[field.offset()..field.offset() + field.width()]
    }

    /// Trytes of one field at its published offset.
    pub fn field_trytes(&self, field: Field) -> &str {
        &self.trytes()[field.offset() / 3..(field.offset() + field.width()) / 3]
    }

    /// Address trytes.
    pub fn address(&self) -> &str {
        self.address
            .get_or_init(|| self.field_trytes(Field::Address).to_string())
    }

    /// Transferred value.
    pub fn value(&self) -> i64 {
        *self
            .value
            .get_or_init(|| trits_to_number(self.field_trits(Field::Value)))
    }

    /// Obsolete tag trytes.
    pub fn obsolete_tag(&self) -> &str {
        self.obsolete_tag
            .get_or_init(|| self.field_trytes(Field::ObsoleteTag).to_string())
    }

    /// Issuance timestamp, seconds.
    pub fn timestamp(&self) -> i64 {
        *self
            .timestamp
            .get_or_init(|| trits_to_number(self.field_trits(Field::Timestamp)))
    }

    /// Index of this transaction within its bundle.
    pub fn current_index(&self) -> i64 {
        *self
            .current_index
            .get_or_init(|| trits_to_number(self.field_trits(Field::CurrentIndex)))
    }

    /// Last index shared by the bundle.
    pub fn last_index(&self) -> i64 {
        *self
            .last_index
            .get_or_init(|| trits_to_number(self.field_trits(Field::LastIndex)))
    }

    /// Bundle hash trytes.
    pub fn bundle(&self) -> &str {
        self.bundle
            .get_or_init(|| self.field_trytes(Field::Bundle).to_string())
    }

    /// Trunk parent reference.
    pub fn trunk(&self) -> &str {
        self.trunk
            .get_or_init(|| self.field_trytes(Field::Trunk).to_string())
    }

    /// Branch parent reference.
    pub fn branch(&self) -> &str {
        self.branch
            .get_or_init(|| self.field_trytes(Field::Branch).to_string())
    }

    /// Tag trytes.
    pub fn tag(&self) -> &str {
        self.tag
            .get_or_init(|| self.field_trytes(Field::Tag).to_string())
    }

    /// Attachment timestamp.
    pub fn attachment_timestamp(&self) -> i64 {
        *self
            .attachment_timestamp
            .get_or_init(|| trits_to_number(self.field_trits(Field::AttachmentTimestamp)))
    }

    /// Attachment timestamp lower bound.
    pub fn attachment_timestamp_lower_bound(&self) -> i64 {
        *self.attachment_timestamp_lower_bound.get_or_init(|| {
            trits_to_number(self.field_trits(Field::AttachmentTimestampLowerBound))
        })
    }

    /// Attachment timestamp upper bound.
    pub fn attachment_timestamp_upper_bound(&self) -> i64 {
        *self.attachment_timestamp_upper_bound.get_or_init(|| {
            trits_to_number(self.field_trits(Field::AttachmentTimestampUpperBound))
        })
    }

    /// Nonce trytes.
    pub fn nonce(&self) -> &str {
        self.nonce
            .get_or_init(|| self.field_trytes(Field::Nonce).to_string())
    }

    /// Message trytes.
    pub fn message(&self) -> &str {
        self.message
            .get_or_init(|| self.field_trytes(Field::Message).to_string())
    }

    /// Hash the full record: absorb all 8019 trits into a fresh
    /// transaction sponge and squeeze 243 trits. Pure function of the
    /// trit representation; use [`Transaction::hash`] for the memoized
    /// tryte form.
    pub fn calculate_hash(&self, crypto: &dyn CryptoSuite) -> Vec<Trit> {
        let mut sponge = crypto.transaction_sponge();
        sponge.absorb(self.trits());

        let mut hash = vec![0 as Trit; HASH_TRITS];
        sponge.squeeze(&mut hash);
        hash
    }

    /// The transaction hash as trytes, computed once and memoized.
    ///
    /// # Panics
    ///
    /// When the supplied suite violates the sponge contract and squeezes
    /// values outside {-1, 0, 1}.
    pub fn hash(&self, crypto: &dyn CryptoSuite) -> &str {
        self.hash.get_or_init(|| {
            trits_to_trytes(&self.calculate_hash(crypto)).expect("sponge output is valid trits")
        })
    }

    /// Count of trailing zero trits in the hash. Memoized on every call
    /// path; the hash itself is materialized first if needed.
    pub fn weight_magnitude(&self, crypto: &dyn CryptoSuite) -> usize {
        *self.weight_magnitude.get_or_init(|| {
            let hash_trits = trytes_to_trits(self.hash(crypto))
                .expect("memoized hash is drawn from the alphabet");
            hash_trits.iter().rev().take_while(|&&trit| trit == 0).count()
        })
    }

    /// Snapshot of the node-local metadata.
    pub fn metadata(&self) -> Metadata {
        self.metadata.read().clone()
    }

    /// The raw solidity flag: `None` when not yet computed.
    pub fn solid_flag(&self) -> Option<bool> {
        self.metadata.read().is_solid
    }

    /// Whether this transaction is known solid.
    pub fn is_solid(&self) -> bool {
        self.metadata.read().is_solid.unwrap_or(false)
    }

    /// Mark this transaction solid.
    pub fn mark_solid(&self) {
        self.metadata.write().is_solid = Some(true);
    }

    /// Overwrite the solidity flag, e.g. when adopting the flag of a
    /// stored copy.
    pub fn set_solid_flag(&self, is_solid: Option<bool>) {
        self.metadata.write().is_solid = is_solid;
    }

    /// Gossip origin, when known.
    pub fn sender(&self) -> Option<String> {
        self.metadata.read().sender.clone()
    }
}

fn check_tryte_chars(trytes: &str) -> Result<()> {
    for c in trytes.chars() {
        if c != '9' && !c.is_ascii_uppercase() {
            return Err(Error::Ternary(ternary::Error::InvalidTryte(c)));
        }
    }
    Ok(())
}

fn check_tryte_field(value: &str, field: Field) -> Result<()> {
    let width = field.width() / 3;
    if value.len() > width {
        return Err(Error::InvalidLength {
            kind: field.name(),
            expected: width,
            actual: value.len(),
        });
    }
    check_tryte_chars(value)
}

fn check_number_field(value: i64, field: Field) -> Result<()> {
    let width = field.width() / 3;
    let encoded = number_to_trytes(value);
    if encoded.len() > width {
        return Err(Error::InvalidLength {
            kind: field.name(),
            expected: width,
            actual: encoded.len(),
        });
    }
    Ok(())
}

fn pad_trytes(value: &mut String, field: Field) {
    let width = field.width() / 3;
    while value.len() < width {
        value.push('9');
    }
}

fn push_padded(out: &mut String, value: &str, field: Field) {
    out.push_str(value);
    for _ in value.len()..field.width() / 3 {
        out.push('9');
    }
}

fn push_padded_number(out: &mut String, value: i64, field: Field) {
    push_padded(out, &number_to_trytes(value), field);
}

/// Compose the canonical 2673-tryte record from structured fields, in
/// field order, right-padding each to its width.
fn compose_trytes(fields: &TransactionFields) -> String {
    let mut trytes = String::with_capacity(TRANSACTION_TRYTES);

    push_padded(&mut trytes, &fields.message, Field::Message);
    push_padded(&mut trytes, &fields.address, Field::Address);
    push_padded_number(&mut trytes, fields.value, Field::Value);
    push_padded(&mut trytes, &fields.obsolete_tag, Field::ObsoleteTag);
    push_padded_number(&mut trytes, fields.timestamp, Field::Timestamp);
    push_padded_number(&mut trytes, fields.current_index, Field::CurrentIndex);
    push_padded_number(&mut trytes, fields.last_index, Field::LastIndex);
    push_padded(&mut trytes, &fields.bundle, Field::Bundle);
    push_padded(&mut trytes, &fields.trunk, Field::Trunk);
    push_padded(&mut trytes, &fields.branch, Field::Branch);
    push_padded(&mut trytes, &fields.tag, Field::Tag);
    push_padded_number(&mut trytes, fields.attachment_timestamp, Field::AttachmentTimestamp);
    push_padded_number(
        &mut trytes,
        fields.attachment_timestamp_lower_bound,
        Field::AttachmentTimestampLowerBound,
    );
    push_padded_number(
        &mut trytes,
        fields.attachment_timestamp_upper_bound,
        Field::AttachmentTimestampUpperBound,
    );
    push_padded(&mut trytes, &fields.nonce, Field::Nonce);

    trytes
}
