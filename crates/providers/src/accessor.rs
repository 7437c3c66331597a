use crate::{ChainProvider, ChainProviderError};

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::SolCall;
use resolver_gateway_primitives::{RecordKind, RecordQuery, RecordValue, ResolvedRecord};
use resolver_l2::abi::{IL2Registry, IL2TimestampedRegistry};

/// Maps a [`RecordQuery`] to a registry view call and decodes its return data.
///
/// Registries come in two flavours which share their selectors but differ in the shape of the
/// returned data, see [`PlainRecordAccessor`] and [`TimestampedRecordAccessor`].
pub trait RecordAccessor: Send + Sync + std::fmt::Debug {
    /// Returns the calldata of the registry view for the query.
    fn encode_call(&self, query: &RecordQuery) -> Bytes;

    /// Decodes the return data of the registry view for the record kind.
    fn decode_return(
        &self,
        kind: &RecordKind,
        data: &[u8],
    ) -> Result<ResolvedRecord, ChainProviderError>;
}

fn encode_registry_call(query: &RecordQuery) -> Bytes {
    let (node, owner) = (query.node, query.owner);
    match query.kind.clone() {
        RecordKind::Address => IL2Registry::addr_0Call { node, owner }.abi_encode(),
        RecordKind::CoinAddress { coin_type } => {
            IL2Registry::addr_1Call { node, coinType: coin_type, owner }.abi_encode()
        }
        RecordKind::Text { key } => IL2Registry::textCall { node, key, owner }.abi_encode(),
        RecordKind::ContentHash => IL2Registry::contenthashCall { node, owner }.abi_encode(),
    }
    .into()
}

const fn call_name(kind: &RecordKind) -> &'static str {
    match kind {
        RecordKind::Address => "addr(bytes32,address)",
        RecordKind::CoinAddress { .. } => "addr(bytes32,uint256,address)",
        RecordKind::Text { .. } => "text(bytes32,string,address)",
        RecordKind::ContentHash => "contenthash(bytes32,address)",
    }
}

/// Accessor for registries returning the bare record value.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRecordAccessor;

impl RecordAccessor for PlainRecordAccessor {
    fn encode_call(&self, query: &RecordQuery) -> Bytes {
        encode_registry_call(query)
    }

    fn decode_return(
        &self,
        kind: &RecordKind,
        data: &[u8],
    ) -> Result<ResolvedRecord, ChainProviderError> {
        let value: RecordValue = match kind {
            RecordKind::Address => IL2Registry::addr_0Call::abi_decode_returns(data).map(Into::into),
            RecordKind::CoinAddress { .. } => {
                IL2Registry::addr_1Call::abi_decode_returns(data).map(Into::into)
            }
            RecordKind::Text { .. } => IL2Registry::textCall::abi_decode_returns(data).map(Into::into),
            RecordKind::ContentHash => {
                IL2Registry::contenthashCall::abi_decode_returns(data).map(Into::into)
            }
        }
        .map_err(|source| ChainProviderError::Decode { call: call_name(kind), source })?;

        Ok(ResolvedRecord::new(value))
    }
}

/// Accessor for registries returning a `(value, timestamp)` pair.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampedRecordAccessor;

impl RecordAccessor for TimestampedRecordAccessor {
    fn encode_call(&self, query: &RecordQuery) -> Bytes {
        encode_registry_call(query)
    }

    fn decode_return(
        &self,
        kind: &RecordKind,
        data: &[u8],
    ) -> Result<ResolvedRecord, ChainProviderError> {
        let (value, timestamp): (RecordValue, _) = match kind {
            RecordKind::Address => IL2TimestampedRegistry::addr_0Call::abi_decode_returns(data)
                .map(|ret| (ret.value.into(), ret.timestamp)),
            RecordKind::CoinAddress { .. } => {
                IL2TimestampedRegistry::addr_1Call::abi_decode_returns(data)
                    .map(|ret| (ret.value.into(), ret.timestamp))
            }
            RecordKind::Text { .. } => IL2TimestampedRegistry::textCall::abi_decode_returns(data)
                .map(|ret| (ret.value.into(), ret.timestamp)),
            RecordKind::ContentHash => {
                IL2TimestampedRegistry::contenthashCall::abi_decode_returns(data)
                    .map(|ret| (ret.value.into(), ret.timestamp))
            }
        }
        .map_err(|source| ChainProviderError::Decode { call: call_name(kind), source })?;

        Ok(ResolvedRecord::with_timestamp(value, timestamp))
    }
}

/// Reads records from the registry through a [`ChainProvider`].
#[async_trait::async_trait]
pub trait RegistryProvider: ChainProvider {
    /// Calls the registry view matching the query at the query's block and decodes the result.
    async fn read_record(
        &self,
        registry: Address,
        accessor: &dyn RecordAccessor,
        query: &RecordQuery,
    ) -> Result<ResolvedRecord, ChainProviderError> {
        let input = accessor.encode_call(query);
        let data = self.call(registry, input, query.block).await?;
        accessor.decode_return(&query.kind, &data)
    }
}

impl<T: ChainProvider + ?Sized> RegistryProvider for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{encode_return, MockChainProvider};

    use alloy_primitives::{b256, bytes, Address, B256, U256};
    use alloy_sol_types::SolValue;

    const NODE: B256 = b256!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const OWNER: Address = Address::repeat_byte(0xbb);
    const REGISTRY: Address = Address::repeat_byte(0x11);

    fn query(kind: RecordKind) -> RecordQuery {
        RecordQuery::new(NODE, kind, OWNER, 42)
    }

    #[test]
    fn test_encode_call_selectors() {
        let accessor = PlainRecordAccessor;
        let call = accessor.encode_call(&query(RecordKind::Address));
        assert_eq!(call[..4], IL2Registry::addr_0Call::SELECTOR);

        let call = accessor
            .encode_call(&query(RecordKind::CoinAddress { coin_type: U256::from(60) }));
        assert_eq!(call[..4], IL2Registry::addr_1Call::SELECTOR);

        let call = accessor.encode_call(&query(RecordKind::Text { key: "avatar".into() }));
        assert_eq!(call[..4], IL2Registry::textCall::SELECTOR);

        let call = TimestampedRecordAccessor.encode_call(&query(RecordKind::ContentHash));
        assert_eq!(call[..4], IL2Registry::contenthashCall::SELECTOR);
    }

    #[test]
    fn test_encode_call_arguments() {
        let call = PlainRecordAccessor.encode_call(&query(RecordKind::Text { key: "url".into() }));
        let decoded = IL2Registry::textCall::abi_decode(&call).unwrap();
        assert_eq!(decoded.node, NODE);
        assert_eq!(decoded.key, "url");
        assert_eq!(decoded.owner, OWNER);
    }

    #[test]
    fn test_decode_plain_returns() {
        let accessor = PlainRecordAccessor;
        let address = Address::repeat_byte(0xcc);

        let record = accessor.decode_return(&RecordKind::Address, &address.abi_encode()).unwrap();
        assert_eq!(record, ResolvedRecord::new(RecordValue::Address(address)));

        let text = "ipfs://avatar".to_string();
        let record = accessor
            .decode_return(&RecordKind::Text { key: "avatar".into() }, &text.abi_encode())
            .unwrap();
        assert_eq!(record.value, RecordValue::String(text));
        assert_eq!(record.timestamp, None);
    }

    #[test]
    fn test_decode_timestamped_returns() {
        let hash = bytes!("e3010170");
        let data = encode_return(&RecordValue::Bytes(hash.clone()), Some(U256::from(1_700_000_000)));

        let record = TimestampedRecordAccessor.decode_return(&RecordKind::ContentHash, &data).unwrap();
        assert_eq!(record.value, RecordValue::Bytes(hash));
        assert_eq!(record.timestamp, Some(U256::from(1_700_000_000)));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = PlainRecordAccessor.decode_return(&RecordKind::ContentHash, &[0x01, 0x02]);
        assert!(matches!(err, Err(ChainProviderError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_read_record_pins_block() -> eyre::Result<()> {
        let provider = MockChainProvider::default();
        let q = query(RecordKind::Address);
        let address = Address::repeat_byte(0xcc);
        provider.set_call(REGISTRY, PlainRecordAccessor.encode_call(&q), address.abi_encode().into()).await;

        let record = provider.read_record(REGISTRY, &PlainRecordAccessor, &q).await?;
        assert_eq!(record.value, RecordValue::Address(address));
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.requested_call_blocks().await, vec![42]);

        Ok(())
    }
}
