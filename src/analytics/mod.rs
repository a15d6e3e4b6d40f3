//! Analytics event emitter
//!
//! Typed tracking calls for the bridge UI flow, all routed through a single
//! dispatch primitive that talks to an optional injected collector.

mod config;
mod event;
mod tracker;

pub use config::{AnalyticsConfig, ANALYTICS_ENABLED_ENV};
pub use event::{
    BridgeCompleted, BridgeFailed, BridgeInitiated, ChainDirection, ChainSelected, EventData,
    EventKind, TokenSelected, TrackingEvent, WalletConnected,
};
pub use tracker::Analytics;
