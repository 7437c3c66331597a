//! Resolver gateway binary

use std::sync::Arc;

use clap::Parser;
use resolver_gateway::Gateway;
use resolver_gateway_node::{GatewayArgs, GatewayServer};
use resolver_gateway_providers::AlloyChainProvider;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing_subscriber()?;

    let args = GatewayArgs::parse();
    let config = args.config();
    info!(
        target: "resolver::node",
        registry = %config.address_book.registry,
        message_passer = %config.address_book.message_passer,
        addr_layout = ?config.addr_slot_layout,
        timestamped = config.timestamped_records,
        "Launching gateway"
    );

    let provider = AlloyChainProvider::new(args.rpc_args.provider());
    let gateway = Gateway::new(provider, Arc::new(config));

    GatewayServer::new(gateway)
        .bind(args.http_args.socket_addr(), async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
}

/// Initialize the tracing subscriber, filtered by `RUST_LOG` and defaulting to `info`.
fn init_tracing_subscriber() -> eyre::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(false)
                .with_ansi(true),
        )
        .with(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?)
        .try_init()?;
    Ok(())
}
