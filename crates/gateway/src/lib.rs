//! The storage proof resolution engine of the gateway.
//!
//! A [`Gateway`] reads a record from the L2 registry at a pinned block, and for set records
//! fetches the registry and message passer proofs along with the block header, packaging them
//! into a [`ResponseEnvelope`] the L1 resolver can verify.

mod error;
pub use error::GatewayError;

mod metrics;
pub use metrics::GatewayMetrics;

use std::{sync::Arc, time::Instant};

use alloy_primitives::B256;
use resolver_codec::{encode_proofs, encode_record_value};
use resolver_gateway_primitives::{
    AccountProof, BlockAnchor, GatewayConfig, GatewayResponse, RecordKind, RecordQuery,
    ResolvedRecord, ResponseEnvelope,
};
use resolver_gateway_providers::{
    ChainProvider, PlainRecordAccessor, RecordAccessor, RegistryProvider,
    TimestampedRecordAccessor,
};
use resolver_l2::{slot::record_slot, MESSAGE_PASSER_PROOF_SLOT};

/// The chain data backing a response envelope, all read at the same block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedProofs {
    /// The proof of the record slot in the registry.
    pub registry: AccountProof,
    /// The proof of slot zero in the message passer.
    pub message_passer: AccountProof,
    /// The anchoring block.
    pub anchor: BlockAnchor,
}

/// Resolves record queries into proven responses.
#[derive(Debug)]
pub struct Gateway<P> {
    /// The chain provider.
    provider: P,
    /// The gateway configuration.
    config: Arc<GatewayConfig>,
    /// Maps queries to registry calls.
    accessor: Box<dyn RecordAccessor>,
    /// The metrics of the gateway.
    metrics: GatewayMetrics,
}

impl<P: ChainProvider> Gateway<P> {
    /// Returns a new [`Gateway`], picking the record accessor matching the registry flavour.
    pub fn new(provider: P, config: Arc<GatewayConfig>) -> Self {
        let accessor: Box<dyn RecordAccessor> = if config.timestamped_records {
            Box::new(TimestampedRecordAccessor)
        } else {
            Box::new(PlainRecordAccessor)
        };
        Self { provider, config, accessor, metrics: GatewayMetrics::default() }
    }

    /// Returns the configuration of the gateway.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Resolves the query.
    ///
    /// Unset records are returned as [`GatewayResponse::Empty`] without touching any proof. Set
    /// records are returned with a [`ResponseEnvelope`] anchored at the query block.
    pub async fn resolve(&self, query: RecordQuery) -> Result<GatewayResponse, GatewayError> {
        let now = Instant::now();
        self.metrics.record_request(&query.kind);

        let res = self.resolve_inner(query).await;

        self.metrics.resolution_duration.record(now.elapsed().as_secs_f64());
        if let Err(err) = &res {
            self.metrics.failed_requests.increment(1);
            tracing::error!(target: "resolver::gateway", %err, "resolution failed");
        }
        res
    }

    async fn resolve_inner(&self, query: RecordQuery) -> Result<GatewayResponse, GatewayError> {
        let (query, record) = self.resolve_record(query).await?;
        if record.value.is_empty() {
            tracing::debug!(target: "resolver::gateway", node = %query.node, kind = %query.kind, "record unset");
            self.metrics.empty_records.increment(1);
            return Ok(GatewayResponse::Empty(record.value));
        }

        let slot = record_slot(&query.kind, query.node, query.owner, self.config.addr_slot_layout);
        let proofs = self.fetch_proofs(slot, query.block).await?;
        let proof =
            encode_proofs(&proofs.registry.account_proof, &proofs.registry.storage_proof)?;

        Ok(GatewayResponse::Proven(ResponseEnvelope {
            value: encode_record_value(&record.value),
            slot,
            proof,
            state_root: proofs.anchor.state_root,
            bridge_storage_root: proofs.message_passer.storage_hash,
            block_hash: proofs.anchor.hash,
        }))
    }

    /// Reads the record for the query at the query block.
    ///
    /// An unset coin type record with a coin type above the configured default is read once
    /// more under the default coin type. Returns the query the record was actually read for.
    pub async fn resolve_record(
        &self,
        query: RecordQuery,
    ) -> Result<(RecordQuery, ResolvedRecord), GatewayError> {
        let record = self.read_record(&query).await?;

        let default_coin_type = self.config.default_coin_type;
        match query.kind {
            RecordKind::CoinAddress { coin_type }
                if record.value.is_empty() && coin_type > default_coin_type =>
            {
                tracing::debug!(
                    target: "resolver::gateway",
                    node = %query.node,
                    %coin_type,
                    %default_coin_type,
                    "coin type unset, falling back to default"
                );
                self.metrics.coin_type_fallbacks.increment(1);

                let fallback =
                    query.with_kind(RecordKind::CoinAddress { coin_type: default_coin_type });
                let record = self.read_record(&fallback).await?;
                Ok((fallback, record))
            }
            _ => Ok((query, record)),
        }
    }

    async fn read_record(&self, query: &RecordQuery) -> Result<ResolvedRecord, GatewayError> {
        let record = self
            .provider
            .read_record(self.config.address_book.registry, self.accessor.as_ref(), query)
            .await?;
        if let Some(timestamp) = record.timestamp {
            tracing::debug!(target: "resolver::gateway", kind = %query.kind, %timestamp, "record timestamp");
        }
        Ok(record)
    }

    /// Fetches the registry proof for `slot`, the message passer proof and the block header at
    /// `block`. The three reads are issued concurrently.
    pub async fn fetch_proofs(&self, slot: B256, block: u64) -> Result<FetchedProofs, GatewayError> {
        let book = self.config.address_book;
        tracing::trace!(target: "resolver::gateway", %slot, block, "fetching proofs");

        let (registry, message_passer, anchor) = tokio::try_join!(
            self.provider.account_proof(book.registry, slot, block),
            self.provider.account_proof(book.message_passer, MESSAGE_PASSER_PROOF_SLOT, block),
            self.provider.block_anchor(block),
        )?;

        Ok(FetchedProofs { registry, message_passer, anchor })
    }
}
