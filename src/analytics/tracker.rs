use tracing::trace;

use super::config::AnalyticsConfig;
use super::event::{
    BridgeCompleted, BridgeFailed, BridgeInitiated, ChainSelected, EventData, TokenSelected,
    TrackingEvent, WalletConnected,
};
use crate::providers::NoopCollector;
use crate::spans;
use crate::traits::Collector;

/// Event emitter facade for the bridge UI.
///
/// Holds an optional [`Collector`]. Every tracking call funnels into
/// [`Analytics::track`], which forwards to the collector when one is present
/// and returns immediately otherwise. No call on this type can fail.
///
/// # Example
///
/// ```rust
/// use davinci_bridge::{Analytics, BridgeInitiated, WalletConnected};
/// use davinci_bridge::providers::TracingCollector;
///
/// // Without a collector every call is a no-op
/// let analytics = Analytics::disabled();
/// analytics.track_wallet_connected(
///     WalletConnected::builder()
///         .wallet_type("metamask")
///         .chain("optimism")
///         .build(),
/// );
///
/// // With one, events are forwarded as-is
/// let analytics = Analytics::new(TracingCollector::new());
/// analytics.track_bridge_initiated(
///     BridgeInitiated::builder()
///         .from_chain("davinci")
///         .to_chain("optimism")
///         .token("DCOIN")
///         .amount("100")
///         .build(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Analytics<C = NoopCollector> {
    collector: Option<C>,
}

impl Analytics<NoopCollector> {
    /// Creates a facade with no collector attached.
    pub fn disabled() -> Self {
        Self { collector: None }
    }
}

impl<C> Default for Analytics<C> {
    fn default() -> Self {
        Self { collector: None }
    }
}

impl<C: Collector> Analytics<C> {
    pub fn new(collector: C) -> Self {
        Self {
            collector: Some(collector),
        }
    }

    /// Wraps a collector that may or may not be available in this environment.
    pub fn from_option(collector: Option<C>) -> Self {
        Self { collector }
    }

    /// Attaches `collector` only if `config` has tracking enabled.
    pub fn from_config(config: &AnalyticsConfig, collector: C) -> Self {
        Self::from_option(config.enabled.then_some(collector))
    }

    /// Returns true if events will reach a collector.
    pub fn is_enabled(&self) -> bool {
        self.collector.is_some()
    }

    pub fn collector(&self) -> Option<&C> {
        self.collector.as_ref()
    }

    /// Dispatches one event by name.
    ///
    /// Forwards `name` and `data` untouched to the collector, if any. Without
    /// a collector this returns immediately.
    pub fn track(&self, name: &str, data: Option<&EventData>) {
        let Some(collector) = &self.collector else {
            trace!(event = "collector_absent", event_name = name);
            return;
        };

        let span = spans::track_event(name, data.is_some());
        let _guard = span.enter();
        collector.track(name, data);
    }

    /// Dispatches a typed event under its fixed name.
    pub fn emit(&self, event: &TrackingEvent) {
        self.track(event.name(), event.data().as_ref());
    }

    pub fn track_bridge_initiated(&self, data: BridgeInitiated) {
        self.emit(&data.into());
    }

    pub fn track_bridge_completed(&self, data: BridgeCompleted) {
        self.emit(&data.into());
    }

    pub fn track_bridge_failed(&self, data: BridgeFailed) {
        self.emit(&data.into());
    }

    pub fn track_wallet_connected(&self, data: WalletConnected) {
        self.emit(&data.into());
    }

    pub fn track_token_selected(&self, data: TokenSelected) {
        self.emit(&data.into());
    }

    pub fn track_chain_selected(&self, data: ChainSelected) {
        self.emit(&data.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingCollector;
    use crate::ChainDirection;
    use std::sync::Arc;

    #[test]
    fn test_disabled_is_noop() {
        let analytics = Analytics::disabled();
        assert!(!analytics.is_enabled());
        assert!(analytics.collector().is_none());

        analytics.track("custom_event", None);
        analytics.track_token_selected(
            TokenSelected::builder()
                .token("DCOIN")
                .chain("davinci")
                .build(),
        );
    }

    #[test]
    fn test_default_has_no_collector() {
        let analytics: Analytics<RecordingCollector> = Analytics::default();
        assert!(!analytics.is_enabled());
    }

    #[test]
    fn test_track_without_payload() {
        let recorder = RecordingCollector::new();
        let analytics = Analytics::new(recorder.clone());

        analytics.track("custom_event", None);

        let event = recorder.last().unwrap();
        assert_eq!(event.name, "custom_event");
        assert!(event.data.is_none());
        assert_eq!(recorder.call_count(), 1);
    }

    #[test]
    fn test_chain_selected_dispatch() {
        let recorder = RecordingCollector::new();
        let analytics = Analytics::new(recorder.clone());

        analytics.track_chain_selected(
            ChainSelected::builder()
                .chain("optimism")
                .direction(ChainDirection::Destination)
                .build(),
        );

        let event = recorder.last().unwrap();
        assert_eq!(event.name, "chain_selected");
        let data = event.data.unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data["chain"], "optimism");
        assert_eq!(data["direction"], "destination");
    }

    #[test]
    fn test_emit_matches_track() {
        let via_emit = RecordingCollector::new();
        let via_track = RecordingCollector::new();
        let event = TrackingEvent::from(
            TokenSelected::builder()
                .token("DCOIN")
                .chain("davinci")
                .build(),
        );

        Analytics::new(via_emit.clone()).emit(&event);
        Analytics::new(via_track.clone()).track(event.name(), event.data().as_ref());

        assert_eq!(via_emit.events(), via_track.events());
        assert_eq!(via_emit.call_count(), 1);

        Analytics::disabled().emit(&event);
    }

    #[test]
    fn test_from_config_disabled_drops_collector() {
        let recorder = RecordingCollector::new();
        let config = AnalyticsConfig::default().with_enabled(false);
        let analytics = Analytics::from_config(&config, recorder.clone());

        analytics.track("custom_event", None);

        assert!(!analytics.is_enabled());
        assert_eq!(recorder.call_count(), 0);
    }

    #[test]
    fn test_from_option() {
        let recorder = RecordingCollector::new();
        assert!(Analytics::from_option(Some(recorder.clone())).is_enabled());
        assert!(!Analytics::<RecordingCollector>::from_option(None).is_enabled());
    }

    #[test]
    fn test_shared_dyn_collector() {
        let recorder = RecordingCollector::new();
        let shared: Arc<dyn Collector> = Arc::new(recorder.clone());
        let analytics = Analytics::new(shared);

        analytics.track("custom_event", None);
        analytics.track("custom_event", None);

        assert_eq!(recorder.events_named("custom_event").len(), 2);
    }
}
