//! The codec implementation for the resolver gateway.
//!
//! Covers the three wire formats handled by the gateway: the ABI encoded request forwarded by
//! the L1 resolver, the RLP encoded proof pair and the ABI encoded response envelope.

pub use envelope::{decode_envelope, encode_envelope, encode_record_value};
mod envelope;

pub use error::{ProofEncodingError, RequestDecodeError};
mod error;

pub use proof::{decode_proofs, encode_proofs, RlpItem};
mod proof;

pub use request::{decode_record_call, decode_request, GatewayRequest, ResolverCall};
mod request;
