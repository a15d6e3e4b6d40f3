//! Tracking event vocabulary and payload shapes.
//!
//! Every event the bridge UI reports is a [`TrackingEvent`] variant carrying a
//! payload struct with the fields that event requires. The collector backend
//! receives payloads as a flat JSON object with camelCase keys, which is what
//! [`TrackingEvent::data`] produces.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{BridgeError, Result};

/// Payload mapping handed to a [`Collector`](crate::traits::Collector).
pub type EventData = serde_json::Map<String, Value>;

/// The fixed vocabulary of bridge tracking events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    BridgeInitiated,
    BridgeCompleted,
    BridgeFailed,
    WalletConnected,
    TokenSelected,
    ChainSelected,
}

impl EventKind {
    /// All event kinds, in the order the bridge flow usually emits them.
    pub const ALL: [EventKind; 6] = [
        EventKind::WalletConnected,
        EventKind::ChainSelected,
        EventKind::TokenSelected,
        EventKind::BridgeInitiated,
        EventKind::BridgeCompleted,
        EventKind::BridgeFailed,
    ];

    /// Returns the wire name sent to the collector.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BridgeInitiated => "bridge_initiated",
            Self::BridgeCompleted => "bridge_completed",
            Self::BridgeFailed => "bridge_failed",
            Self::WalletConnected => "wallet_connected",
            Self::TokenSelected => "token_selected",
            Self::ChainSelected => "chain_selected",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownEvent(s.to_string()))
    }
}

/// Which side of a transfer a chain was picked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainDirection {
    Origin,
    Destination,
}

impl ChainDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Destination => "destination",
        }
    }
}

impl fmt::Display for ChainDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainDirection {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        [Self::Origin, Self::Destination]
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BridgeError::InvalidDirection(s.to_string()))
    }
}

/// Emitted after the user confirms a transfer.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct BridgeInitiated {
    from_chain: String,
    to_chain: String,
    token: String,
    amount: String,
}

impl BridgeInitiated {
    pub fn from_chain(&self) -> &str {
        &self.from_chain
    }

    pub fn to_chain(&self) -> &str {
        &self.to_chain
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Completes this transfer with the destination transaction hash.
    pub fn completed(self, tx_hash: impl Into<String>) -> BridgeCompleted {
        BridgeCompleted {
            from_chain: self.from_chain,
            to_chain: self.to_chain,
            token: self.token,
            amount: self.amount,
            tx_hash: tx_hash.into(),
        }
    }

    /// Marks this transfer as failed. The amount is not part of the failure payload.
    pub fn failed(self, error_message: impl Into<String>) -> BridgeFailed {
        BridgeFailed {
            from_chain: self.from_chain,
            to_chain: self.to_chain,
            token: self.token,
            error_message: error_message.into(),
        }
    }
}

/// Emitted once the transfer is confirmed on-chain.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct BridgeCompleted {
    from_chain: String,
    to_chain: String,
    token: String,
    amount: String,
    tx_hash: String,
}

impl BridgeCompleted {
    pub fn from_chain(&self) -> &str {
        &self.from_chain
    }

    pub fn to_chain(&self) -> &str {
        &self.to_chain
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn tx_hash(&self) -> &str {
        &self.tx_hash
    }
}

/// Emitted when a transfer fails at any stage.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct BridgeFailed {
    from_chain: String,
    to_chain: String,
    token: String,
    error_message: String,
}

impl BridgeFailed {
    pub fn from_chain(&self) -> &str {
        &self.from_chain
    }

    pub fn to_chain(&self) -> &str {
        &self.to_chain
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct WalletConnected {
    wallet_type: String,
    chain: String,
}

impl WalletConnected {
    pub fn wallet_type(&self) -> &str {
        &self.wallet_type
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct TokenSelected {
    token: String,
    chain: String,
}

impl TokenSelected {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct ChainSelected {
    chain: String,
    direction: ChainDirection,
}

impl ChainSelected {
    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn direction(&self) -> ChainDirection {
        self.direction
    }
}

/// A named bridge event together with its payload.
///
/// The variant fixes the event name; the payload can never change it.
///
/// # Example
///
/// ```rust
/// use davinci_bridge::{ChainDirection, ChainSelected, TrackingEvent};
///
/// let event = TrackingEvent::from(
///     ChainSelected::builder()
///         .chain("optimism")
///         .direction(ChainDirection::Destination)
///         .build(),
/// );
/// assert_eq!(event.name(), "chain_selected");
///
/// let data = event.data().unwrap();
/// assert_eq!(data["direction"], "destination");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingEvent {
    BridgeInitiated(BridgeInitiated),
    BridgeCompleted(BridgeCompleted),
    BridgeFailed(BridgeFailed),
    WalletConnected(WalletConnected),
    TokenSelected(TokenSelected),
    ChainSelected(ChainSelected),
}

impl TrackingEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::BridgeInitiated(_) => EventKind::BridgeInitiated,
            Self::BridgeCompleted(_) => EventKind::BridgeCompleted,
            Self::BridgeFailed(_) => EventKind::BridgeFailed,
            Self::WalletConnected(_) => EventKind::WalletConnected,
            Self::TokenSelected(_) => EventKind::TokenSelected,
            Self::ChainSelected(_) => EventKind::ChainSelected,
        }
    }

    /// Returns the wire name for this event.
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Renders the payload as the flat mapping the collector receives.
    pub fn data(&self) -> Option<EventData> {
        match self {
            Self::BridgeInitiated(payload) => to_event_data(payload),
            Self::BridgeCompleted(payload) => to_event_data(payload),
            Self::BridgeFailed(payload) => to_event_data(payload),
            Self::WalletConnected(payload) => to_event_data(payload),
            Self::TokenSelected(payload) => to_event_data(payload),
            Self::ChainSelected(payload) => to_event_data(payload),
        }
    }
}

// Payload structs only hold strings and unit enums, so serialization always
// yields an object. Anything else is dropped rather than surfaced.
fn to_event_data<T: Serialize>(payload: &T) -> Option<EventData> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            debug!(event = "payload_not_an_object", value = %other);
            None
        }
        Err(e) => {
            debug!(event = "payload_serialization_failed", error = %e);
            None
        }
    }
}

impl From<BridgeInitiated> for TrackingEvent {
    fn from(payload: BridgeInitiated) -> Self {
        Self::BridgeInitiated(payload)
    }
}

impl From<BridgeCompleted> for TrackingEvent {
    fn from(payload: BridgeCompleted) -> Self {
        Self::BridgeCompleted(payload)
    }
}

impl From<BridgeFailed> for TrackingEvent {
    fn from(payload: BridgeFailed) -> Self {
        Self::BridgeFailed(payload)
    }
}

impl From<WalletConnected> for TrackingEvent {
    fn from(payload: WalletConnected) -> Self {
        Self::WalletConnected(payload)
    }
}

impl From<TokenSelected> for TrackingEvent {
    fn from(payload: TokenSelected) -> Self {
        Self::TokenSelected(payload)
    }
}

impl From<ChainSelected> for TrackingEvent {
    fn from(payload: ChainSelected) -> Self {
        Self::ChainSelected(payload)
    }
}
