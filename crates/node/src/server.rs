//! The CCIP-Read HTTP server.
//!
//! Serves:
//! - `POST /`: resolves the `(bytes4, bytes, address, uint256)` request held in the `data` field of
//!   the body.
//! - `OPTIONS /`: CORS preflight.
//! - `GET /healthz`: liveness probe.

use std::{future::Future, net::SocketAddr, sync::Arc};

use alloy_primitives::{Bytes, FixedBytes};
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use resolver_codec::{decode_request, encode_envelope, RequestDecodeError, ResolverCall};
use resolver_gateway::{Gateway, GatewayError};
use resolver_gateway_primitives::{GatewayResponse, RecordValue};
use resolver_gateway_providers::ChainProvider;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// An error answered to the HTTP caller.
#[derive(Debug, thiserror::Error)]
enum ServerError {
    /// The body carries no hex `data` field.
    #[error("malformed request body")]
    MalformedBody,
    /// The `data` field could not be decoded.
    #[error(transparent)]
    Decode(#[from] RequestDecodeError),
    /// The selector is not served by the gateway.
    #[error("unsupported selector {0}")]
    Unsupported(FixedBytes<4>),
    /// The resolution failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::Unsupported(_) => (StatusCode::NOT_FOUND, "Record Not Supported").into_response(),
            Self::MalformedBody | Self::Decode(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Self::Gateway(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Extracts the hex payload from a body shaped as `{"data": "0x.."}`, `{"Data": "0x.."}` or a
/// JSON string holding either object.
fn request_payload(body: &str) -> Option<Bytes> {
    let mut value: Value = serde_json::from_str(body).ok()?;
    if let Value::String(inner) = &value {
        value = serde_json::from_str(inner).ok()?;
    }
    let data = value.get("data").or_else(|| value.get("Data"))?.as_str()?;
    data.parse().ok()
}

fn record_value_json(value: &RecordValue) -> Value {
    match value {
        RecordValue::Address(address) => Value::String(address.to_string()),
        RecordValue::Bytes(bytes) => Value::String(bytes.to_string()),
        RecordValue::String(string) => Value::String(string.clone()),
    }
}

/// `POST /`
async fn resolve<P: ChainProvider + 'static>(
    State(gateway): State<Arc<Gateway<P>>>,
    body: String,
) -> Result<Json<Value>, ServerError> {
    let payload = request_payload(&body).ok_or(ServerError::MalformedBody)?;
    let query = match decode_request(&payload)?.into_call()? {
        ResolverCall::Record(query) => query,
        ResolverCall::Unsupported(selector) => {
            tracing::debug!(target: "resolver::node", %selector, "unsupported selector");
            return Err(ServerError::Unsupported(selector));
        }
    };
    tracing::debug!(target: "resolver::node", node = %query.node, kind = %query.kind, block = query.block, "resolving");

    let body = match gateway.resolve(query).await? {
        GatewayResponse::Empty(value) => json!({ "data": { "value": record_value_json(&value) } }),
        GatewayResponse::Proven(envelope) => {
            json!({ "data": encode_envelope(&envelope).to_string() })
        }
    };
    Ok(Json(body))
}

/// `OPTIONS /`
async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(header::ACCESS_CONTROL_ALLOW_METHODS, "*"), (header::ACCESS_CONTROL_ALLOW_HEADERS, "*")],
    )
}

/// `GET /healthz`
async fn liveness() -> StatusCode {
    StatusCode::OK
}

async fn allow_any_origin(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

/// The HTTP server exposing a [`Gateway`].
#[derive(Debug)]
pub struct GatewayServer<P> {
    gateway: Arc<Gateway<P>>,
}

impl<P: ChainProvider + 'static> GatewayServer<P> {
    /// Returns a new server for the gateway.
    pub fn new(gateway: Gateway<P>) -> Self {
        Self { gateway: Arc::new(gateway) }
    }

    /// Returns the router of the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", post(resolve::<P>).options(preflight))
            .route("/healthz", get(liveness))
            .layer(middleware::map_response(allow_any_origin))
            .with_state(self.gateway.clone())
    }

    /// Binds to `addr` and serves until `shutdown` resolves.
    pub async fn bind<F>(self, addr: SocketAddr, shutdown: F) -> eyre::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serves on the listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> eyre::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(target: "resolver::node", %addr, "Gateway server started");

        axum::serve(listener, self.router()).with_graceful_shutdown(shutdown).await?;

        tracing::info!(target: "resolver::node", "Gateway server stopped");
        Ok(())
    }
}
