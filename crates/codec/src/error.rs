use alloy_primitives::{FixedBytes, U256};

/// An error occurring while re-encoding trie nodes into the proof envelope.
#[derive(Debug, thiserror::Error)]
pub enum ProofEncodingError {
    /// A trie node is not valid RLP.
    #[error("malformed trie node: {0}")]
    MalformedNode(#[from] alloy_rlp::Error),
    /// A trie node has data after its RLP item.
    #[error("trie node has {0} trailing bytes")]
    TrailingBytes(usize),
    /// The encoded proof does not have the `[accountProof, storageProof]` shape.
    #[error("unexpected proof envelope shape")]
    UnexpectedShape,
}

/// An error occurring while decoding the request forwarded by the L1 resolver.
#[derive(Debug, thiserror::Error)]
pub enum RequestDecodeError {
    /// The payload is not a valid `(bytes4, bytes, address, uint256)` tuple.
    #[error("invalid request payload: {0}")]
    InvalidPayload(#[from] alloy_sol_types::Error),
    /// The call data does not match the arguments of its selector.
    #[error("invalid call data for selector {selector}: {source}")]
    InvalidCallData {
        /// The selector of the call.
        selector: FixedBytes<4>,
        /// The underlying decoding error.
        source: alloy_sol_types::Error,
    },
    /// The requested block number does not fit a `u64`.
    #[error("block number {0} out of range")]
    BlockNumberOverflow(U256),
}
