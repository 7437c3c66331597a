use resolver_codec::ProofEncodingError;
use resolver_gateway_providers::ChainProviderError;

/// An error occurred while resolving a record.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// An error at the chain provider.
    #[error(transparent)]
    Provider(#[from] ChainProviderError),
    /// The proof nodes returned by the chain could not be re-encoded.
    #[error(transparent)]
    ProofEncoding(#[from] ProofEncodingError),
}
