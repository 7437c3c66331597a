//! Storage slot derivation for registry records.
//!
//! The registry stores records in nested Solidity mappings keyed by node, an optional
//! discriminant (coin type or text key hash) and the owner the record was written under. The
//! slot of `mapping[k]` at base slot `p` is `keccak256(abi.encode(k, p))`, applied once per
//! mapping level. These functions must agree bit for bit with the verifier on L1.

use crate::{ADDR_RECORDS_SLOT, CONTENTHASH_RECORDS_SLOT, TEXT_RECORDS_SLOT};

use alloy_primitives::{keccak256, Address, B256, U256};
use alloy_sol_types::SolValue;
use resolver_gateway_primitives::{AddrSlotLayout, RecordKind, ETH_COIN_TYPE};

/// Returns the slot of `mapping[key]` for a mapping at `slot`.
fn mapping_slot<K: SolValue>(key: K, slot: B256) -> B256 {
    keccak256((key, slot).abi_encode())
}

/// Returns the slot of the owner entry of a node mapping at the top level `index`, with an
/// optional discriminant level in between.
fn owner_slot<D: SolValue>(index: U256, node: B256, discriminant: Option<D>, owner: Address) -> B256 {
    let mut slot = mapping_slot(node, B256::from(index));
    if let Some(discriminant) = discriminant {
        slot = mapping_slot(discriminant, slot);
    }
    mapping_slot(owner, slot)
}

/// Returns the slot of the plain `addr` record of `node` written by `owner`.
pub fn addr_slot(node: B256, owner: Address) -> B256 {
    owner_slot::<U256>(ADDR_RECORDS_SLOT, node, None, owner)
}

/// Returns the slot of the `coin_type` address record of `node` written by `owner`.
pub fn coin_addr_slot(node: B256, coin_type: U256, owner: Address) -> B256 {
    owner_slot(ADDR_RECORDS_SLOT, node, Some(coin_type), owner)
}

/// Returns the slot of the `key` text record of `node` written by `owner`. The key only enters
/// the derivation through `keccak256(key)`.
pub fn text_slot(node: B256, key: &str, owner: Address) -> B256 {
    owner_slot(TEXT_RECORDS_SLOT, node, Some(keccak256(key.as_bytes())), owner)
}

/// Returns the slot of the content hash record of `node` written by `owner`.
pub fn contenthash_slot(node: B256, owner: Address) -> B256 {
    owner_slot::<U256>(CONTENTHASH_RECORDS_SLOT, node, None, owner)
}

/// Returns the slot of the record of `kind` for `node` written by `owner`.
pub fn record_slot(kind: &RecordKind, node: B256, owner: Address, layout: AddrSlotLayout) -> B256 {
    match kind {
        RecordKind::Address => match layout {
            AddrSlotLayout::Direct => addr_slot(node, owner),
            AddrSlotLayout::CoinType => coin_addr_slot(node, U256::from(ETH_COIN_TYPE), owner),
        },
        RecordKind::CoinAddress { coin_type } => coin_addr_slot(node, *coin_type, owner),
        RecordKind::Text { key } => text_slot(node, key, owner),
        RecordKind::ContentHash => contenthash_slot(node, owner),
    }
}
