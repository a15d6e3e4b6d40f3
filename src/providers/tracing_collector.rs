//! Collector that reports events through `tracing`.

use tracing::info;

use crate::analytics::EventData;
use crate::traits::Collector;

/// `tracing` target used for every forwarded event.
pub const ANALYTICS_TARGET: &str = "davinci_bridge::analytics";

/// Production collector that turns each event into an `info` level
/// `tracing` event on [`ANALYTICS_TARGET`].
///
/// Useful on hosts without a browser-side analytics script: any subscriber
/// (stdout, OpenTelemetry, a log shipper) becomes the analytics backend.
///
/// # Examples
///
/// ```rust
/// use davinci_bridge::providers::TracingCollector;
/// use davinci_bridge::Analytics;
///
/// let analytics = Analytics::new(TracingCollector::new());
/// analytics.track("custom_event", None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCollector;

impl TracingCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Collector for TracingCollector {
    fn track(&self, event_name: &str, event_data: Option<&EventData>) {
        let rendered = event_data
            .map(|data| serde_json::to_string(data).unwrap_or_default())
            .unwrap_or_default();

        info!(
            target: ANALYTICS_TARGET,
            event_name = event_name,
            event_data = %rendered,
            has_data = event_data.is_some()
        );
    }
}
