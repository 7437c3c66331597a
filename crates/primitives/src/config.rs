use alloy_primitives::{address, Address, U256};
use std::str::FromStr;

/// The address of the `L2ToL1MessagePasser` predeploy on OP stack chains.
pub const L2_TO_L1_MESSAGE_PASSER_ADDRESS: Address =
    address!("0x4200000000000000000000000000000000000016");

/// The coin type records fall back to when a coin type above it has no record (`2^31`).
pub const DEFAULT_COIN_TYPE: U256 = U256::from_limbs([0x8000_0000, 0, 0, 0]);

/// The SLIP-44 coin type of Ether.
pub const ETH_COIN_TYPE: u64 = 60;

/// The addresses of the contracts the gateway reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverAddressBook {
    /// The registry contract holding the records.
    pub registry: Address,
    /// The message passer contract whose storage root is attested to L1.
    pub message_passer: Address,
}

impl ResolverAddressBook {
    /// Returns an address book for the registry, using the message passer predeploy.
    pub const fn new(registry: Address) -> Self {
        Self { registry, message_passer: L2_TO_L1_MESSAGE_PASSER_ADDRESS }
    }

    /// Sets the message passer address.
    pub const fn with_message_passer(mut self, message_passer: Address) -> Self {
        self.message_passer = message_passer;
        self
    }
}

/// How the slot of a plain `addr` record is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddrSlotLayout {
    /// `mapping(bytes32 => mapping(address => address))` at slot 1.
    #[default]
    Direct,
    /// The record lives in the coin type mapping at slot 1 under [`ETH_COIN_TYPE`].
    CoinType,
}

/// Error returned when parsing an unknown [`AddrSlotLayout`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown addr slot layout {0}, expected `direct` or `coin-type`")]
pub struct UnknownAddrSlotLayout(pub String);

impl FromStr for AddrSlotLayout {
    type Err = UnknownAddrSlotLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "coin-type" | "coin_type" => Ok(Self::CoinType),
            other => Err(UnknownAddrSlotLayout(other.to_string())),
        }
    }
}

/// The immutable gateway configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// The address book of the contracts.
    pub address_book: ResolverAddressBook,
    /// The layout used to derive `addr` slots.
    pub addr_slot_layout: AddrSlotLayout,
    /// The coin type used as fallback for large coin types.
    pub default_coin_type: U256,
    /// Whether the registry view functions return `(value, timestamp)`.
    pub timestamped_records: bool,
}

impl GatewayConfig {
    /// Returns a configuration for the address book with default policies.
    pub const fn new(address_book: ResolverAddressBook) -> Self {
        Self {
            address_book,
            addr_slot_layout: AddrSlotLayout::Direct,
            default_coin_type: DEFAULT_COIN_TYPE,
            timestamped_records: false,
        }
    }

    /// Sets the `addr` slot layout.
    pub const fn with_addr_slot_layout(mut self, layout: AddrSlotLayout) -> Self {
        self.addr_slot_layout = layout;
        self
    }

    /// Sets the fallback coin type.
    pub const fn with_default_coin_type(mut self, coin_type: U256) -> Self {
        self.default_coin_type = coin_type;
        self
    }

    /// Sets whether records are timestamped.
    pub const fn with_timestamped_records(mut self, timestamped: bool) -> Self {
        self.timestamped_records = timestamped;
        self
    }
}
