use crate::ChainProviderError;

use alloy_eips::{BlockId, BlockNumberOrTag};
use alloy_network::TransactionBuilder;
use alloy_primitives::{Address, Bytes, B256};
use alloy_provider::Provider;
use alloy_rpc_types_eth::TransactionRequest;
use resolver_gateway_primitives::{AccountProof, BlockAnchor};

/// Implementers of the trait can read L2 state pinned at a block number.
///
/// Every method takes an explicit block number, the latest block is never queried.
#[async_trait::async_trait]
#[auto_impl::auto_impl(&, Arc)]
pub trait ChainProvider: Sync + Send {
    /// Executes a view call against `to` at `block` (`eth_call`).
    async fn call(&self, to: Address, input: Bytes, block: u64)
        -> Result<Bytes, ChainProviderError>;

    /// Returns the account proof of `address` and the storage proof of `slot` at `block`
    /// (`eth_getProof`).
    async fn account_proof(
        &self,
        address: Address,
        slot: B256,
        block: u64,
    ) -> Result<AccountProof, ChainProviderError>;

    /// Returns the state root and hash of `block` (`eth_getBlockByNumber`).
    async fn block_anchor(&self, block: u64) -> Result<BlockAnchor, ChainProviderError>;
}

/// The provider uses an alloy [`Provider`] internally to implement the [`ChainProvider`] trait.
#[derive(Default, Clone, Debug)]
pub struct AlloyChainProvider<P> {
    /// An alloy provider.
    provider: P,
}

impl<P: Provider> AlloyChainProvider<P> {
    /// Returns a new instance of a [`AlloyChainProvider`].
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait::async_trait]
impl<P: Provider> ChainProvider for AlloyChainProvider<P> {
    async fn call(
        &self,
        to: Address,
        input: Bytes,
        block: u64,
    ) -> Result<Bytes, ChainProviderError> {
        tracing::trace!(target: "resolver::providers", %to, block, "eth_call");

        let tx = TransactionRequest::default().with_to(to).with_input(input);
        Ok(self.provider.call(tx).block(BlockId::number(block)).await?)
    }

    async fn account_proof(
        &self,
        address: Address,
        slot: B256,
        block: u64,
    ) -> Result<AccountProof, ChainProviderError> {
        tracing::trace!(target: "resolver::providers", %address, %slot, block, "eth_getProof");

        let response =
            self.provider.get_proof(address, vec![slot]).block_id(BlockId::number(block)).await?;
        let storage_proof = response
            .storage_proof
            .into_iter()
            .next()
            .ok_or(ChainProviderError::MissingStorageProof(address))?
            .proof;

        Ok(AccountProof {
            address: response.address,
            storage_hash: response.storage_hash,
            account_proof: response.account_proof,
            storage_proof,
        })
    }

    async fn block_anchor(&self, block: u64) -> Result<BlockAnchor, ChainProviderError> {
        tracing::trace!(target: "resolver::providers", block, "eth_getBlockByNumber");

        let header = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Number(block))
            .await?
            .ok_or(ChainProviderError::MissingBlock(block))?
            .header;
        Ok(BlockAnchor::new(block, header.state_root, header.hash))
    }
}
