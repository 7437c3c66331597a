//! The crate exposes the chain providers used by the resolver gateway along with their
//! implementations.

pub use accessor::{
    PlainRecordAccessor, RecordAccessor, RegistryProvider, TimestampedRecordAccessor,
};
mod accessor;

pub use chain::{AlloyChainProvider, ChainProvider};
mod chain;

pub use error::ChainProviderError;
mod error;

#[cfg(any(test, feature = "test-utils"))]
/// Test utils for providers.
pub mod test_utils;
