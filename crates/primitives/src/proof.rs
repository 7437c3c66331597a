use alloy_primitives::{Address, Bytes, B256};

/// An account proof along with the storage proof for a single slot, as returned by
/// `eth_getProof`. Trie nodes are kept in the order provided by the node.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountProof {
    /// The proven account.
    pub address: Address,
    /// The storage root of the account.
    pub storage_hash: B256,
    /// The account proof nodes, root first.
    pub account_proof: Vec<Bytes>,
    /// The storage proof nodes for the requested slot, root first.
    pub storage_proof: Vec<Bytes>,
}
