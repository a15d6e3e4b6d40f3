//! Tracing span helpers for analytics dispatch
//!
//! Static span names with structured attributes, kept apart from the dispatch
//! logic so callers can reuse them when wiring their own collectors.
//!
//! # Example
//!
//! ```rust
//! use davinci_bridge::spans;
//!
//! let span = spans::track_event("bridge_initiated", true);
//! let _guard = span.enter();
//! // Forward the event to your collector here
//! ```

use tracing::Span;

/// Create span around a single collector invocation.
///
/// Parent: Whatever UI or bridge operation span is current
/// Children: Spans emitted by the collector itself
#[inline]
pub fn track_event(event_name: &str, has_data: bool) -> Span {
    tracing::debug_span!(
        "davinci_bridge.track_event",
        event_name = event_name,
        has_data = has_data,
    )
}

