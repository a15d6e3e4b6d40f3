//! # davinci-bridge
//!
//! Core of the DaVinci Bridge front-end: a typed analytics event facade and
//! the static registry of chains the bridge routes between.
//!
//! ## Quick Start
//!
//! ```rust
//! use davinci_bridge::{Analytics, BridgeChain, BridgeInitiated, ChainDirection, ChainSelected};
//! use davinci_bridge::providers::TracingCollector;
//!
//! // Inject a collector; `Analytics::disabled()` gives the no-op facade
//! let analytics = Analytics::new(TracingCollector::new());
//!
//! let destination = BridgeChain::Optimism;
//! analytics.track_chain_selected(
//!     ChainSelected::builder()
//!         .chain(destination.name())
//!         .direction(ChainDirection::Destination)
//!         .build(),
//! );
//!
//! analytics.track_bridge_initiated(
//!     BridgeInitiated::builder()
//!         .from_chain(BridgeChain::Davinci.name())
//!         .to_chain(destination.name())
//!         .token("DCOIN")
//!         .amount("100")
//!         .build(),
//! );
//! ```
//!
//! ## Testing
//!
//! ```rust
//! use davinci_bridge::testing::RecordingCollector;
//! use davinci_bridge::Analytics;
//!
//! let recorder = RecordingCollector::new();
//! let analytics = Analytics::new(recorder.clone());
//!
//! analytics.track("custom_event", None);
//! assert_eq!(recorder.last().unwrap().name, "custom_event");
//! ```
//!
//! ## Public API
//!
//! - [`Analytics`] - Event emitter facade over an optional [`traits::Collector`]
//! - [`TrackingEvent`] and its payload types - One variant per bridge event
//! - [`AnalyticsConfig`] - Enable/disable switch, readable from the environment
//! - [`BridgeChain`], [`ChainMetadata`] and [`chains`] - Supported chain registry
//! - [`BridgeError`] and [`Result`] - Error types for lookups and parsing

mod analytics;
mod chain;
mod error;

pub mod app;
pub mod providers;
pub mod testing;
pub mod traits;

pub use analytics::{
    Analytics, AnalyticsConfig, BridgeCompleted, BridgeFailed, BridgeInitiated, ChainDirection,
    ChainSelected, EventData, EventKind, TokenSelected, TrackingEvent, WalletConnected,
    ANALYTICS_ENABLED_ENV,
};
pub use chain::{
    chains, rent_estimate, rent_estimates, BlockConfig, BlockExplorer, BridgeChain, ChainMetadata,
    Deployer, ExplorerFamily, NativeToken, ProtocolType, RpcUrl, RENT_ESTIMATES,
};
pub use error::{BridgeError, Result};

// Public module for advanced users who need custom instrumentation
pub mod spans;
