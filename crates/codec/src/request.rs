use crate::RequestDecodeError;

use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use resolver_gateway_primitives::{RecordKind, RecordQuery};
use resolver_l2::abi::IL1Resolver;

/// The request forwarded by the L1 resolver: `(bytes4, bytes, address, uint256)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayRequest {
    /// The selector of the resolver function called on L1.
    pub selector: FixedBytes<4>,
    /// The arguments of the call, without selector.
    pub call_data: Bytes,
    /// The address the record was written under.
    pub owner: Address,
    /// The L2 block to answer against.
    pub block: u64,
}

impl GatewayRequest {
    /// Decodes the call data into a [`ResolverCall`].
    pub fn into_call(self) -> Result<ResolverCall, RequestDecodeError> {
        decode_record_call(self.selector, &self.call_data, self.owner, self.block)
    }

    /// ABI encodes the request. Mostly useful to build requests in tests and tools.
    pub fn abi_encode(&self) -> Bytes {
        (self.selector, self.call_data.clone(), self.owner, U256::from(self.block))
            .abi_encode_params()
            .into()
    }
}

/// A resolver call, as dispatched on its selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverCall {
    /// A call for a supported record.
    Record(RecordQuery),
    /// A call for a selector the gateway does not serve.
    Unsupported(FixedBytes<4>),
}

/// Decodes the ABI encoded `(bytes4, bytes, address, uint256)` request payload.
pub fn decode_request(data: &[u8]) -> Result<GatewayRequest, RequestDecodeError> {
    let (selector, call_data, owner, block) =
        <(FixedBytes<4>, Bytes, Address, U256)>::abi_decode_params(data)?;
    let block = u64::try_from(block).map_err(|_| RequestDecodeError::BlockNumberOverflow(block))?;
    Ok(GatewayRequest { selector, call_data, owner, block })
}

/// Decodes the call data of a resolver call into a [`ResolverCall`] for the given owner and
/// block.
pub fn decode_record_call(
    selector: FixedBytes<4>,
    call_data: &[u8],
    owner: Address,
    block: u64,
) -> Result<ResolverCall, RequestDecodeError> {
    let invalid = |source| RequestDecodeError::InvalidCallData { selector, source };

    let (node, kind) = match selector.0 {
        IL1Resolver::addr_0Call::SELECTOR => {
            let call = IL1Resolver::addr_0Call::abi_decode_raw(call_data).map_err(invalid)?;
            (call.node, RecordKind::Address)
        }
        IL1Resolver::addr_1Call::SELECTOR => {
            let call = IL1Resolver::addr_1Call::abi_decode_raw(call_data).map_err(invalid)?;
            (call.node, RecordKind::CoinAddress { coin_type: call.coinType })
        }
        IL1Resolver::textCall::SELECTOR => {
            let call = IL1Resolver::textCall::abi_decode_raw(call_data).map_err(invalid)?;
            (call.node, RecordKind::Text { key: call.key })
        }
        IL1Resolver::contenthashCall::SELECTOR => {
            let call = IL1Resolver::contenthashCall::abi_decode_raw(call_data).map_err(invalid)?;
            (call.node, RecordKind::ContentHash)
        }
        _ => return Ok(ResolverCall::Unsupported(selector)),
    };

    Ok(ResolverCall::Record(RecordQuery::new(node, kind, owner, block)))
}
