//! Primitive types for the resolver gateway.

pub use block::BlockAnchor;
mod block;

pub use config::{
    AddrSlotLayout, GatewayConfig, ResolverAddressBook, UnknownAddrSlotLayout,
    DEFAULT_COIN_TYPE, ETH_COIN_TYPE, L2_TO_L1_MESSAGE_PASSER_ADDRESS,
};
mod config;

pub use envelope::{GatewayResponse, ResponseEnvelope};
mod envelope;

pub use proof::AccountProof;
mod proof;

pub use record::{RecordKind, RecordQuery, RecordValue, ResolvedRecord};
mod record;
