use alloy_json_rpc::RpcError;
use alloy_primitives::Address;
use alloy_transport::TransportErrorKind;

/// An error occurring at the [`crate::ChainProvider`].
#[derive(Debug, thiserror::Error)]
pub enum ChainProviderError {
    /// An error occurred at the transport layer.
    #[error("transport error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    /// The requested block does not exist.
    #[error("unknown block {0}")]
    MissingBlock(u64),
    /// The proof response did not include a storage proof for the requested slot.
    #[error("missing storage proof for account {0}")]
    MissingStorageProof(Address),
    /// The return data of a view call could not be decoded.
    #[error("failed to decode {call} return data: {source}")]
    Decode {
        /// The name of the view function.
        call: &'static str,
        /// The underlying decoding error.
        source: alloy_sol_types::Error,
    },
}
