/// The max retries for the L2 provider.
pub(crate) const PROVIDER_MAX_RETRIES: u32 = 10;

/// The initial backoff for the L2 provider.
pub(crate) const PROVIDER_INITIAL_BACKOFF: u64 = 100;

/// The default provider compute units per second.
pub(crate) const PROVIDER_COMPUTE_UNITS_PER_SECOND: u64 = 10000;

/// The default port of the gateway HTTP server.
pub(crate) const DEFAULT_HTTP_PORT: u16 = 8080;

/// The default coin type fallback, `2^31`.
pub(crate) const DEFAULT_COIN_TYPE: &str = "2147483648";
