use metrics::{Counter, Histogram};
use metrics_derive::Metrics;
use resolver_gateway_primitives::RecordKind;

/// The metrics for the [`super::Gateway`].
#[derive(Metrics, Clone)]
#[metrics(scope = "gateway")]
pub struct GatewayMetrics {
    /// A counter on the `addr` records requested.
    pub addr_requests: Counter,
    /// A counter on the coin type `addr` records requested.
    pub coin_addr_requests: Counter,
    /// A counter on the text records requested.
    pub text_requests: Counter,
    /// A counter on the content hash records requested.
    pub contenthash_requests: Counter,
    /// A counter on the requests answered with an unset record.
    pub empty_records: Counter,
    /// A counter on the coin type reads retried against the default coin type.
    pub coin_type_fallbacks: Counter,
    /// A counter on the failed resolutions.
    pub failed_requests: Counter,
    /// The duration of a resolution, in seconds.
    pub resolution_duration: Histogram,
}

impl GatewayMetrics {
    /// Increments the request counter of the record kind.
    pub fn record_request(&self, kind: &RecordKind) {
        match kind {
            RecordKind::Address => self.addr_requests.increment(1),
            RecordKind::CoinAddress { .. } => self.coin_addr_requests.increment(1),
            RecordKind::Text { .. } => self.text_requests.increment(1),
            RecordKind::ContentHash => self.contenthash_requests.increment(1),
        }
    }
}
