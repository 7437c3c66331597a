//! Integration tests of the record resolution against a mocked chain.

use std::sync::Arc;

use alloy_primitives::{b256, bytes, Address, Bytes, B256, U256};
use alloy_sol_types::SolValue;
use resolver_codec::{decode_proofs, encode_record_value, RlpItem};
use resolver_gateway::Gateway;
use resolver_gateway_primitives::{
    AccountProof, BlockAnchor, GatewayConfig, GatewayResponse, RecordKind, RecordQuery,
    RecordValue, ResolverAddressBook, DEFAULT_COIN_TYPE, L2_TO_L1_MESSAGE_PASSER_ADDRESS,
};
use resolver_gateway_providers::{
    test_utils::{encode_return, MockChainProvider},
    PlainRecordAccessor, RecordAccessor,
};
use resolver_l2::MESSAGE_PASSER_PROOF_SLOT;
use tracing::{subscriber::set_global_default, Level};

const REGISTRY: Address = Address::repeat_byte(0x11);
const NODE: B256 = B256::repeat_byte(0xaa);
const OWNER: Address = Address::repeat_byte(0xbb);
const BLOCK: u64 = 12345;

const STATE_ROOT: B256 = B256::repeat_byte(0x51);
const BLOCK_HASH: B256 = B256::repeat_byte(0xb4);
const BRIDGE_STORAGE_ROOT: B256 = B256::repeat_byte(0x5e);

fn setup() {
    let sub = tracing_subscriber::FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    let _ = set_global_default(sub);
}

fn leaf() -> Bytes {
    bytes!("c482200105")
}

fn branch() -> Bytes {
    bytes!("c6c482200105c0")
}

/// Returns a provider with the proofs and header at [`BLOCK`] set.
async fn provider() -> Arc<MockChainProvider> {
    let provider = Arc::new(MockChainProvider::default());
    provider
        .set_proof(AccountProof {
            address: REGISTRY,
            storage_hash: B256::repeat_byte(0x0f),
            account_proof: vec![branch(), leaf()],
            storage_proof: vec![leaf()],
        })
        .await;
    provider
        .set_proof(AccountProof {
            address: L2_TO_L1_MESSAGE_PASSER_ADDRESS,
            storage_hash: BRIDGE_STORAGE_ROOT,
            account_proof: vec![leaf()],
            storage_proof: vec![],
        })
        .await;
    provider.set_block(BlockAnchor::new(BLOCK, STATE_ROOT, BLOCK_HASH)).await;
    provider
}

async fn set_record(provider: &MockChainProvider, query: &RecordQuery, value: RecordValue) {
    provider
        .set_call(REGISTRY, PlainRecordAccessor.encode_call(query), encode_return(&value, None))
        .await;
}

fn gateway(provider: Arc<MockChainProvider>) -> Gateway<Arc<MockChainProvider>> {
    Gateway::new(provider, Arc::new(GatewayConfig::new(ResolverAddressBook::new(REGISTRY))))
}

#[tokio::test]
async fn test_resolve_addr_end_to_end() -> eyre::Result<()> {
    // Given
    setup();
    let provider = provider().await;
    let value = Address::repeat_byte(0xcc);
    let query = RecordQuery::new(NODE, RecordKind::Address, OWNER, BLOCK);
    set_record(&provider, &query, value.into()).await;

    // When
    let response = gateway(provider.clone()).resolve(query).await?;

    // Then
    let envelope = response.envelope().expect("record is set");
    assert_eq!(
        envelope.slot,
        b256!("0478e530ae95661f2e24c68c79000259e87d37e6eec8eef9bdf39e80ca32fad5")
    );
    assert_eq!(envelope.value, Bytes::from(value.abi_encode()));
    assert_eq!(envelope.state_root, STATE_ROOT);
    assert_eq!(envelope.block_hash, BLOCK_HASH);
    assert_eq!(envelope.bridge_storage_root, BRIDGE_STORAGE_ROOT);

    let (account, storage) = decode_proofs(&envelope.proof)?;
    assert_eq!(account.len(), 2);
    assert_eq!(storage.len(), 1);
    assert!(matches!(&storage[0], RlpItem::List(items) if items.len() == 2));

    let requested = provider.requested_slots().await;
    assert_eq!(requested.len(), 2);
    assert!(requested.contains(&(REGISTRY, envelope.slot, BLOCK)));
    assert!(requested.contains(&(L2_TO_L1_MESSAGE_PASSER_ADDRESS, MESSAGE_PASSER_PROOF_SLOT, BLOCK)));
    assert_eq!(provider.block_count(), 1);
    assert_eq!(provider.requested_call_blocks().await, vec![BLOCK]);

    Ok(())
}

#[tokio::test]
async fn test_unset_record_skips_proofs() -> eyre::Result<()> {
    // Given
    setup();
    let provider = provider().await;
    let query = RecordQuery::new(NODE, RecordKind::Address, OWNER, BLOCK);
    set_record(&provider, &query, Address::ZERO.into()).await;

    // When
    let response = gateway(provider.clone()).resolve(query).await?;

    // Then
    assert_eq!(response, GatewayResponse::Empty(RecordValue::Address(Address::ZERO)));
    assert_eq!(provider.proof_count(), 0);
    assert_eq!(provider.block_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_coin_type_fallback_uses_default_slot() -> eyre::Result<()> {
    // Given
    setup();
    let provider = provider().await;
    let requested = DEFAULT_COIN_TYPE + U256::from(5);
    let query =
        RecordQuery::new(NODE, RecordKind::CoinAddress { coin_type: requested }, OWNER, BLOCK);
    let fallback = query.with_kind(RecordKind::CoinAddress { coin_type: DEFAULT_COIN_TYPE });
    let value = RecordValue::Bytes(bytes!("76a91462e907b15cbf27d5425399ebf6f0fb50ebb88f1888ac"));
    set_record(&provider, &query, RecordValue::Bytes(Bytes::new())).await;
    set_record(&provider, &fallback, value.clone()).await;

    // When
    let response = gateway(provider.clone()).resolve(query).await?;

    // Then
    let envelope = response.envelope().expect("fallback record is set");
    assert_eq!(
        envelope.slot,
        b256!("a2ba2712f4fe90639378bf39ad0ca4cc436cb7acef36b0f8f2dab10db764df96")
    );
    assert_eq!(envelope.value, encode_record_value(&value));
    assert_eq!(provider.call_count(), 2);

    Ok(())
}

#[tokio::test]
async fn test_coin_type_fallback_unset_short_circuits() -> eyre::Result<()> {
    // Given
    setup();
    let provider = provider().await;
    let query = RecordQuery::new(
        NODE,
        RecordKind::CoinAddress { coin_type: DEFAULT_COIN_TYPE + U256::from(5) },
        OWNER,
        BLOCK,
    );
    let fallback = query.with_kind(RecordKind::CoinAddress { coin_type: DEFAULT_COIN_TYPE });
    set_record(&provider, &query, RecordValue::Bytes(Bytes::new())).await;
    set_record(&provider, &fallback, RecordValue::Bytes(Bytes::new())).await;

    // When
    let response = gateway(provider.clone()).resolve(query).await?;

    // Then
    assert!(response.is_empty());
    assert_eq!(provider.call_count(), 2);
    assert_eq!(provider.proof_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_resolve_text_avatar() -> eyre::Result<()> {
    // Given
    setup();
    let provider = provider().await;
    let query = RecordQuery::new(NODE, RecordKind::Text { key: "avatar".into() }, OWNER, BLOCK);
    let value = "ipfs://QmSrPmbaUKA3ZodhzPWZnpFgcPMFWF4QsxXbkWfEptTBJd".to_string();
    set_record(&provider, &query, value.clone().into()).await;

    // When
    let response = gateway(provider.clone()).resolve(query).await?;

    // Then
    let envelope = response.envelope().expect("record is set");
    assert_eq!(
        envelope.slot,
        b256!("ec8006f700deaf7a1c33903f2bbfadbcee8c03b78648f4f4bb2ad78099ad837c")
    );
    assert_eq!(envelope.value, Bytes::from(value.abi_encode()));

    Ok(())
}

#[tokio::test]
async fn test_proof_failure_fails_request() {
    // Given
    setup();
    let provider = provider().await;
    provider.fail_proofs();
    let query = RecordQuery::new(NODE, RecordKind::ContentHash, OWNER, BLOCK);
    set_record(&provider, &query, RecordValue::Bytes(bytes!("e30101701220"))).await;

    // When
    let response = gateway(provider.clone()).resolve(query).await;

    // Then
    assert!(response.is_err());
}

#[tokio::test]
async fn test_reverted_call_fails_request() {
    // Given
    setup();
    let provider = provider().await;
    let query = RecordQuery::new(NODE, RecordKind::ContentHash, OWNER, BLOCK);

    // When
    let response = gateway(provider.clone()).resolve(query).await;

    // Then
    assert!(response.is_err());
    assert_eq!(provider.proof_count(), 0);
}
