//! A library containing the logic required to locate and read resolver records on the L2.

pub mod abi;

mod constants;
pub use constants::*;

pub mod slot;
