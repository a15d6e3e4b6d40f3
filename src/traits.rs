//! Core trait abstraction for analytics collection.
//!
//! The bridge front-end never looks up an ambient analytics object. Instead
//! the capability is handed to [`Analytics`](crate::Analytics) as a value
//! implementing [`Collector`], which makes the "no collector" path explicit
//! and lets tests swap in a recording fake.
//!
//! # Example: Implementing a Collector
//!
//! ```rust
//! use davinci_bridge::traits::Collector;
//! use davinci_bridge::EventData;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! #[derive(Default)]
//! struct CountingCollector {
//!     seen: AtomicUsize,
//! }
//!
//! impl Collector for CountingCollector {
//!     fn track(&self, _event_name: &str, _event_data: Option<&EventData>) {
//!         self.seen.fetch_add(1, Ordering::Relaxed);
//!     }
//! }
//! ```

use std::sync::Arc;

use crate::analytics::EventData;

/// Sink for named tracking events.
///
/// Implementations receive the event name and the optional payload exactly as
/// the caller supplied them. Collection is fire-and-forget: there is no return
/// value, and implementations must not block or panic. Anything that can fail
/// inside a collector (a full buffer, a closed channel) is the collector's own
/// business to swallow.
///
/// # Test Scenarios
///
/// Implementing this trait with fakes enables testing:
/// - Exactly-once delivery per tracked event
/// - Event names fixed per wrapper
/// - Payloads passed through unmodified
pub trait Collector: Send + Sync {
    /// Records one event.
    fn track(&self, event_name: &str, event_data: Option<&EventData>);
}

impl<C: Collector + ?Sized> Collector for &C {
    fn track(&self, event_name: &str, event_data: Option<&EventData>) {
        (**self).track(event_name, event_data)
    }
}

impl<C: Collector + ?Sized> Collector for Box<C> {
    fn track(&self, event_name: &str, event_data: Option<&EventData>) {
        (**self).track(event_name, event_data)
    }
}

impl<C: Collector + ?Sized> Collector for Arc<C> {
    fn track(&self, event_name: &str, event_data: Option<&EventData>) {
        (**self).track(event_name, event_data)
    }
}
