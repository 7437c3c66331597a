use crate::constants;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use alloy_primitives::{Address, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_client::RpcClient;
use alloy_transport::layers::RetryBackoffLayer;
use resolver_gateway_primitives::{
    AddrSlotLayout, GatewayConfig, ResolverAddressBook, L2_TO_L1_MESSAGE_PASSER_ADDRESS,
};

/// The arguments of the resolver gateway.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "resolver-gateway", about = "CCIP-Read gateway serving storage proofs of L2 records")]
pub struct GatewayArgs {
    /// The L2 provider arguments.
    #[command(flatten)]
    pub rpc_args: RpcArgs,
    /// The registry arguments.
    #[command(flatten)]
    pub registry_args: RegistryArgs,
    /// The HTTP server arguments.
    #[command(flatten)]
    pub http_args: HttpArgs,
}

impl GatewayArgs {
    /// Returns the [`GatewayConfig`] described by the arguments.
    pub fn config(&self) -> GatewayConfig {
        let RegistryArgs { address, message_passer, timestamped, addr_layout, default_coin_type } =
            self.registry_args;
        GatewayConfig::new(ResolverAddressBook::new(address).with_message_passer(message_passer))
            .with_addr_slot_layout(addr_layout)
            .with_default_coin_type(default_coin_type)
            .with_timestamped_records(timestamped)
    }
}

/// The arguments for the L2 provider.
#[derive(Debug, Clone, clap::Args)]
pub struct RpcArgs {
    /// The URL for the L2 RPC.
    #[arg(long = "rpc.url", id = "rpc_url", value_name = "RPC_URL", env = "RPC")]
    pub url: reqwest::Url,
    /// The compute units per second for the provider.
    #[arg(long = "rpc.cups", id = "rpc_compute_units_per_second", value_name = "RPC_COMPUTE_UNITS_PER_SECOND", default_value_t = constants::PROVIDER_COMPUTE_UNITS_PER_SECOND)]
    pub compute_units_per_second: u64,
    /// The max amount of retries for the provider.
    #[arg(long = "rpc.max-retries", id = "rpc_max_retries", value_name = "RPC_MAX_RETRIES", default_value_t = constants::PROVIDER_MAX_RETRIES)]
    pub max_retries: u32,
    /// The initial backoff for the provider.
    #[arg(long = "rpc.initial-backoff", id = "rpc_initial_backoff", value_name = "RPC_INITIAL_BACKOFF", default_value_t = constants::PROVIDER_INITIAL_BACKOFF)]
    pub initial_backoff: u64,
}

impl RpcArgs {
    /// Returns a provider to the L2 RPC, retrying rate limited requests with backoff.
    pub fn provider(&self) -> impl Provider + Clone {
        let Self { url, max_retries, initial_backoff, compute_units_per_second } = self.clone();
        let client = RpcClient::builder()
            .layer(RetryBackoffLayer::new(max_retries, initial_backoff, compute_units_per_second))
            .http(url);
        ProviderBuilder::new().connect_client(client)
    }
}

/// The arguments for the registry.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct RegistryArgs {
    /// The address of the registry holding the records.
    #[arg(long = "registry.address", id = "registry_address", value_name = "REGISTRY_ADDRESS", env = "REGISTRY")]
    pub address: Address,
    /// The address of the message passer whose storage root is attested to L1.
    #[arg(long = "message-passer.address", id = "message_passer_address", value_name = "MESSAGE_PASSER_ADDRESS", env = "L2ToL1MessagePasser", default_value_t = L2_TO_L1_MESSAGE_PASSER_ADDRESS)]
    pub message_passer: Address,
    /// Whether the registry views return `(value, timestamp)`.
    #[arg(long = "registry.timestamped", id = "registry_timestamped")]
    pub timestamped: bool,
    /// The storage layout of `addr` records: `direct` or `coin-type`.
    #[arg(long = "registry.addr-layout", id = "registry_addr_layout", value_name = "REGISTRY_ADDR_LAYOUT", default_value = "direct")]
    pub addr_layout: AddrSlotLayout,
    /// The coin type unset records above it fall back to.
    #[arg(long = "registry.default-coin-type", id = "registry_default_coin_type", value_name = "REGISTRY_DEFAULT_COIN_TYPE", default_value = constants::DEFAULT_COIN_TYPE)]
    pub default_coin_type: U256,
}

/// The arguments for the HTTP server.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct HttpArgs {
    /// The address the server listens on.
    #[arg(long = "http.addr", id = "http_addr", value_name = "HTTP_ADDR", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub addr: IpAddr,
    /// The port the server listens on.
    #[arg(long = "http.port", id = "http_port", value_name = "HTTP_PORT", default_value_t = constants::DEFAULT_HTTP_PORT)]
    pub port: u16,
}

impl HttpArgs {
    /// Returns the socket address of the server.
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}
