use alloy_primitives::B256;

/// The subset of an L2 block header a response envelope is anchored to.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BlockAnchor {
    /// The block number.
    pub number: u64,
    /// The state root of the block.
    pub state_root: B256,
    /// The block hash.
    pub hash: B256,
}

impl BlockAnchor {
    /// Returns a new instance of [`BlockAnchor`].
    pub const fn new(number: u64, state_root: B256, hash: B256) -> Self {
        Self { number, state_root, hash }
    }
}
