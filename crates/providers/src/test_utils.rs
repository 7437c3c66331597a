//! Test utils for providers.

use crate::{ChainProvider, ChainProviderError};
use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_sol_types::SolValue;
use alloy_transport::TransportErrorKind;
use resolver_gateway_primitives::{AccountProof, BlockAnchor, RecordValue};
use tokio::sync::Mutex;

/// In-memory implementation of the [`ChainProvider`] which records every request it serves.
#[derive(Debug, Default)]
pub struct MockChainProvider {
    calls: Mutex<HashMap<(Address, Bytes), Bytes>>,
    proofs: Mutex<HashMap<Address, AccountProof>>,
    blocks: Mutex<HashMap<u64, BlockAnchor>>,
    requested_call_blocks: Mutex<Vec<u64>>,
    requested_slots: Mutex<Vec<(Address, B256, u64)>>,
    call_count: AtomicUsize,
    proof_count: AtomicUsize,
    block_count: AtomicUsize,
    fail_proofs: AtomicBool,
}

impl MockChainProvider {
    /// Sets the return data of the view call `input` against `to`.
    pub async fn set_call(&self, to: Address, input: Bytes, output: Bytes) {
        self.calls.lock().await.insert((to, input), output);
    }

    /// Sets the proof returned for any slot of `proof.address`.
    pub async fn set_proof(&self, proof: AccountProof) {
        self.proofs.lock().await.insert(proof.address, proof);
    }

    /// Sets the block anchor returned for `anchor.number`.
    pub async fn set_block(&self, anchor: BlockAnchor) {
        self.blocks.lock().await.insert(anchor.number, anchor);
    }

    /// Makes every subsequent proof request fail with a transport error.
    pub fn fail_proofs(&self) {
        self.fail_proofs.store(true, Ordering::Relaxed);
    }

    /// Returns the number of view calls served.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Returns the number of proof requests served.
    pub fn proof_count(&self) -> usize {
        self.proof_count.load(Ordering::Relaxed)
    }

    /// Returns the number of block requests served.
    pub fn block_count(&self) -> usize {
        self.block_count.load(Ordering::Relaxed)
    }

    /// Returns the block numbers of all view calls, in request order.
    pub async fn requested_call_blocks(&self) -> Vec<u64> {
        self.requested_call_blocks.lock().await.clone()
    }

    /// Returns the `(address, slot, block)` of all proof requests, in request order.
    pub async fn requested_slots(&self) -> Vec<(Address, B256, u64)> {
        self.requested_slots.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ChainProvider for MockChainProvider {
    async fn call(
        &self,
        to: Address,
        input: Bytes,
        block: u64,
    ) -> Result<Bytes, ChainProviderError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.requested_call_blocks.lock().await.push(block);
        self.calls
            .lock()
            .await
            .get(&(to, input))
            .cloned()
            .ok_or_else(|| TransportErrorKind::custom_str("execution reverted").into())
    }

    async fn account_proof(
        &self,
        address: Address,
        slot: B256,
        block: u64,
    ) -> Result<AccountProof, ChainProviderError> {
        self.proof_count.fetch_add(1, Ordering::Relaxed);
        self.requested_slots.lock().await.push((address, slot, block));
        if self.fail_proofs.load(Ordering::Relaxed) {
            return Err(TransportErrorKind::custom_str("proof window exceeded").into());
        }
        self.proofs
            .lock()
            .await
            .get(&address)
            .cloned()
            .ok_or(ChainProviderError::MissingStorageProof(address))
    }

    async fn block_anchor(&self, block: u64) -> Result<BlockAnchor, ChainProviderError> {
        self.block_count.fetch_add(1, Ordering::Relaxed);
        self.blocks.lock().await.get(&block).copied().ok_or(ChainProviderError::MissingBlock(block))
    }
}

/// Returns the ABI encoded return data of a registry view, with the trailing timestamp of
/// timestamped registries if provided.
pub fn encode_return(value: &RecordValue, timestamp: Option<U256>) -> Bytes {
    match (value, timestamp) {
        (RecordValue::Address(v), None) => v.abi_encode(),
        (RecordValue::Bytes(v), None) => v.abi_encode(),
        (RecordValue::String(v), None) => v.abi_encode(),
        (RecordValue::Address(v), Some(ts)) => (*v, ts).abi_encode_params(),
        (RecordValue::Bytes(v), Some(ts)) => (v.clone(), ts).abi_encode_params(),
        (RecordValue::String(v), Some(ts)) => (v.clone(), ts).abi_encode_params(),
    }
    .into()
}
