use alloy_primitives::{Address, Bytes, B256, U256};

/// The kind of record requested from the registry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RecordKind {
    /// The Ethereum address of the name.
    #[display("addr")]
    Address,
    /// The address of the name for the given coin type.
    #[display("addr({coin_type})")]
    CoinAddress {
        /// The SLIP-44 derived coin type.
        coin_type: U256,
    },
    /// A text record under the given key.
    #[display("text({key})")]
    Text {
        /// The text record key, e.g. `avatar`.
        key: String,
    },
    /// The content hash of the name.
    #[display("contenthash")]
    ContentHash,
}

impl RecordKind {
    /// Returns a static label for the kind, suitable for metrics and logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Address => "addr",
            Self::CoinAddress { .. } => "coin_addr",
            Self::Text { .. } => "text",
            Self::ContentHash => "contenthash",
        }
    }
}

/// A fully decoded record query, pinned to a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    /// The namehash of the name.
    pub node: B256,
    /// The record kind.
    pub kind: RecordKind,
    /// The address the record was written under.
    pub owner: Address,
    /// The L2 block the query is answered against.
    pub block: u64,
}

impl RecordQuery {
    /// Returns a new [`RecordQuery`].
    pub const fn new(node: B256, kind: RecordKind, owner: Address, block: u64) -> Self {
        Self { node, kind, owner, block }
    }

    /// Returns the same query for a different record kind.
    pub fn with_kind(&self, kind: RecordKind) -> Self {
        Self { kind, ..self.clone() }
    }
}

/// A record value as returned by the registry view functions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum RecordValue {
    /// An `address` value.
    Address(Address),
    /// A `bytes` value.
    Bytes(Bytes),
    /// A `string` value.
    String(String),
}

impl RecordValue {
    /// Returns true if the value is the unset sentinel of its type: the zero address, empty
    /// bytes or the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Address(address) => address.is_zero(),
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::String(string) => string.is_empty(),
        }
    }
}

/// A record value read from the registry along with the optional timestamp reported by
/// timestamped registries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    /// The record value.
    pub value: RecordValue,
    /// The timestamp the record was last written at, if the registry reports one.
    pub timestamp: Option<U256>,
}

impl ResolvedRecord {
    /// Returns a record without timestamp.
    pub const fn new(value: RecordValue) -> Self {
        Self { value, timestamp: None }
    }

    /// Returns a record with a timestamp.
    pub const fn with_timestamp(value: RecordValue, timestamp: U256) -> Self {
        Self { value, timestamp: Some(timestamp) }
    }
}
