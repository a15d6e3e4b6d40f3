//! Production implementations of the [`Collector`](crate::traits::Collector) trait.
//!
//! Applications pick one of these, or bring their own collector, while test
//! code uses the recording fake in [`crate::testing`].

mod noop;
mod tracing_collector;

pub use self::noop::NoopCollector;
pub use self::tracing_collector::{TracingCollector, ANALYTICS_TARGET};
