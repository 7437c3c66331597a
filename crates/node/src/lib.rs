//! The resolver gateway node: command line arguments and the CCIP-Read HTTP server.

pub use args::{GatewayArgs, HttpArgs, RegistryArgs, RpcArgs};
mod args;

mod constants;

pub use server::GatewayServer;
mod server;
