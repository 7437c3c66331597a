use crate::RecordValue;
use alloy_primitives::{Bytes, B256};

/// The verifiable response envelope returned for a non-empty record.
///
/// Encoded on the wire as `(bytes, bytes32, bytes, bytes32, bytes32, bytes32)`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// The record value, ABI encoded to its declared type.
    pub value: Bytes,
    /// The storage slot holding the record in the registry.
    pub slot: B256,
    /// The RLP encoded `[accountProof, storageProof]` pair for the registry.
    pub proof: Bytes,
    /// The state root of the anchoring block.
    pub state_root: B256,
    /// The storage root of the message passer at the anchoring block.
    pub bridge_storage_root: B256,
    /// The hash of the anchoring block.
    pub block_hash: B256,
}

/// The outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayResponse {
    /// The record is unset. No proof is attached.
    Empty(RecordValue),
    /// The record is set and comes with a proof envelope.
    Proven(ResponseEnvelope),
}

impl GatewayResponse {
    /// Returns true if the response carries no proof.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Returns the envelope if the record was proven.
    pub const fn envelope(&self) -> Option<&ResponseEnvelope> {
        match self {
            Self::Proven(envelope) => Some(envelope),
            Self::Empty(_) => None,
        }
    }
}
