//! Integration tests for the analytics facade using the recording collector
//!
//! These walk the bridge UI flow end to end and check what the collector sees:
//! one call per tracked event, fixed names, payloads passed through untouched.

use davinci_bridge::testing::RecordingCollector;
use davinci_bridge::traits::Collector;
use davinci_bridge::{
    Analytics, AnalyticsConfig, BridgeChain, BridgeCompleted, BridgeFailed, BridgeInitiated,
    ChainDirection, ChainSelected, EventData, EventKind, TokenSelected, TrackingEvent,
    WalletConnected,
};
use rstest::rstest;
use serde_json::json;

/// Helper to create a facade wired to a fresh recorder
fn create_test_analytics() -> (Analytics<RecordingCollector>, RecordingCollector) {
    let recorder = RecordingCollector::new();
    (Analytics::new(recorder.clone()), recorder)
}

fn object(value: serde_json::Value) -> EventData {
    value.as_object().cloned().unwrap()
}

fn sample_events() -> Vec<TrackingEvent> {
    vec![
        BridgeInitiated::builder()
            .from_chain("davinci")
            .to_chain("optimism")
            .token("DCOIN")
            .amount("100")
            .build()
            .into(),
        BridgeCompleted::builder()
            .from_chain("davinci")
            .to_chain("optimism")
            .token("DCOIN")
            .amount("100")
            .tx_hash("0xfeed")
            .build()
            .into(),
        BridgeFailed::builder()
            .from_chain("optimism")
            .to_chain("davinci")
            .token("ETH")
            .error_message("insufficient funds")
            .build()
            .into(),
        WalletConnected::builder()
            .wallet_type("metamask")
            .chain("optimism")
            .build()
            .into(),
        TokenSelected::builder()
            .token("DCOIN")
            .chain("davinci")
            .build()
            .into(),
        ChainSelected::builder()
            .chain("optimism")
            .direction(ChainDirection::Destination)
            .build()
            .into(),
    ]
}

fn dispatch_via_wrapper<C: Collector>(analytics: &Analytics<C>, event: TrackingEvent) {
    match event {
        TrackingEvent::BridgeInitiated(data) => analytics.track_bridge_initiated(data),
        TrackingEvent::BridgeCompleted(data) => analytics.track_bridge_completed(data),
        TrackingEvent::BridgeFailed(data) => analytics.track_bridge_failed(data),
        TrackingEvent::WalletConnected(data) => analytics.track_wallet_connected(data),
        TrackingEvent::TokenSelected(data) => analytics.track_token_selected(data),
        TrackingEvent::ChainSelected(data) => analytics.track_chain_selected(data),
    }
}

#[test]
fn test_wallet_connected_without_collector() {
    let analytics = Analytics::disabled();

    analytics.track_wallet_connected(
        WalletConnected::builder()
            .wallet_type("metamask")
            .chain("optimism")
            .build(),
    );

    assert!(!analytics.is_enabled());
}

#[test]
fn test_every_wrapper_is_silent_without_collector() {
    let analytics = Analytics::disabled();
    for event in sample_events() {
        dispatch_via_wrapper(&analytics, event);
    }
}

#[test]
fn test_bridge_initiated_delivered_once() {
    let (analytics, recorder) = create_test_analytics();

    analytics.track_bridge_initiated(
        BridgeInitiated::builder()
            .from_chain("davinci")
            .to_chain("optimism")
            .token("DCOIN")
            .amount("100")
            .build(),
    );

    assert_eq!(recorder.call_count(), 1, "Collector should be called exactly once");
    let event = recorder.last().unwrap();
    assert_eq!(event.name, "bridge_initiated");
    assert_eq!(
        event.data,
        Some(object(json!({
            "fromChain": "davinci",
            "toChain": "optimism",
            "token": "DCOIN",
            "amount": "100",
        })))
    );
}

#[test]
fn test_chain_selected_destination() {
    let (analytics, recorder) = create_test_analytics();

    analytics.track_chain_selected(
        ChainSelected::builder()
            .chain("optimism")
            .direction(ChainDirection::Destination)
            .build(),
    );

    let event = recorder.last().unwrap();
    assert_eq!(event.name, "chain_selected");
    assert_eq!(
        event.data,
        Some(object(json!({ "chain": "optimism", "direction": "destination" })))
    );
}

#[test]
fn test_generic_track_without_payload() {
    let (analytics, recorder) = create_test_analytics();

    analytics.track("custom_event", None);

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "custom_event");
    assert_eq!(events[0].data, None);
}

#[test]
fn test_generic_track_passes_payload_unmodified() {
    let (analytics, recorder) = create_test_analytics();
    let data = object(json!({
        "nested": { "ignored": true },
        "count": 3,
        "label": "",
    }));

    analytics.track("", Some(&data));

    let event = recorder.last().unwrap();
    assert_eq!(event.name, "");
    assert_eq!(event.data, Some(data));
}

#[rstest]
#[case(0, EventKind::BridgeInitiated)]
#[case(1, EventKind::BridgeCompleted)]
#[case(2, EventKind::BridgeFailed)]
#[case(3, EventKind::WalletConnected)]
#[case(4, EventKind::TokenSelected)]
#[case(5, EventKind::ChainSelected)]
fn test_wrapper_uses_fixed_name_and_exact_payload(#[case] index: usize, #[case] kind: EventKind) {
    let (analytics, recorder) = create_test_analytics();
    let event = sample_events().remove(index);
    let expected_data = event.data();

    dispatch_via_wrapper(&analytics, event);

    assert_eq!(recorder.call_count(), 1);
    let recorded = recorder.last().unwrap();
    assert_eq!(recorded.name, kind.as_str());
    assert_eq!(recorded.data, expected_data);
}

#[test]
fn test_events_arrive_in_call_order() {
    let (analytics, recorder) = create_test_analytics();

    for event in sample_events() {
        analytics.emit(&event);
    }

    let names: Vec<String> = recorder.events().into_iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec![
            "bridge_initiated",
            "bridge_completed",
            "bridge_failed",
            "wallet_connected",
            "token_selected",
            "chain_selected",
        ]
    );
}

#[test]
fn test_repeated_events_are_not_coalesced() {
    let (analytics, recorder) = create_test_analytics();
    let selected = TokenSelected::builder()
        .token("DCOIN")
        .chain("davinci")
        .build();

    analytics.track_token_selected(selected.clone());
    analytics.track_token_selected(selected);

    assert_eq!(recorder.events_named("token_selected").len(), 2);
}

#[test]
fn test_full_transfer_flow_with_registry_names() {
    let (analytics, recorder) = create_test_analytics();
    let origin = BridgeChain::Davinci;
    let destination = BridgeChain::Optimism;

    analytics.track_wallet_connected(
        WalletConnected::builder()
            .wallet_type("walletconnect")
            .chain(origin.name())
            .build(),
    );
    analytics.track_chain_selected(
        ChainSelected::builder()
            .chain(origin.name())
            .direction(ChainDirection::Origin)
            .build(),
    );
    analytics.track_chain_selected(
        ChainSelected::builder()
            .chain(destination.name())
            .direction(ChainDirection::Destination)
            .build(),
    );
    analytics.track_token_selected(
        TokenSelected::builder()
            .token(origin.native_token_symbol())
            .chain(origin.name())
            .build(),
    );

    let transfer = BridgeInitiated::builder()
        .from_chain(origin.name())
        .to_chain(destination.name())
        .token(origin.native_token_symbol())
        .amount("2.5")
        .build();
    analytics.track_bridge_initiated(transfer.clone());
    analytics.track_bridge_completed(transfer.completed("0x1234"));

    assert_eq!(recorder.call_count(), 6);
    let completed = recorder.events_named("bridge_completed");
    let data = completed[0].data.as_ref().unwrap();
    assert_eq!(data["fromChain"], "davinci");
    assert_eq!(data["toChain"], "optimism");
    assert_eq!(data["token"], "DCOIN");
    assert_eq!(data["amount"], "2.5");
    assert_eq!(data["txHash"], "0x1234");
}

#[test]
fn test_disabled_config_suppresses_collector() {
    let recorder = RecordingCollector::new();
    let analytics = Analytics::from_config(
        &AnalyticsConfig::default().with_enabled(false),
        recorder.clone(),
    );

    for event in sample_events() {
        analytics.emit(&event);
    }

    assert_eq!(recorder.call_count(), 0);
}
