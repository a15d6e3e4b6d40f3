//! Collector that discards everything.

use crate::analytics::EventData;
use crate::traits::Collector;

/// Collector that drops every event.
///
/// This is the default collector type of [`Analytics`](crate::Analytics), used
/// when the host environment has no analytics backend.
///
/// # Examples
///
/// ```rust
/// use davinci_bridge::providers::NoopCollector;
/// use davinci_bridge::traits::Collector;
///
/// NoopCollector::new().track("bridge_initiated", None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCollector;

impl NoopCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Collector for NoopCollector {
    fn track(&self, _event_name: &str, _event_data: Option<&EventData>) {}
}
