use alloy_primitives::{B256, U256};

/// The registry storage index of `mapping(bytes32 => mapping(.. => mapping(address => ..)))`
/// holding `addr` and coin type address records.
pub const ADDR_RECORDS_SLOT: U256 = U256::from_limbs([1, 0, 0, 0]);

/// The registry storage index of the content hash records mapping.
pub const CONTENTHASH_RECORDS_SLOT: U256 = U256::from_limbs([2, 0, 0, 0]);

/// The registry storage index of the text records mapping.
pub const TEXT_RECORDS_SLOT: U256 = U256::from_limbs([3, 0, 0, 0]);

/// The message passer slot proven alongside the registry to retrieve its storage root.
pub const MESSAGE_PASSER_PROOF_SLOT: B256 = B256::ZERO;
