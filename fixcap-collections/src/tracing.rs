//! Tracing support for the fixcap containers
//!
//! Wraps the `tracing` crate so the containers can report evictions and
//! rejected operations without depending on `std`. Only compiled with the
//! `tracing` feature.

#![cfg(feature = "tracing")]

pub use tracing::{debug, trace};

/// Trace events for container state changes
#[derive(Debug, Clone)]
pub struct ContainerTrace;

impl ContainerTrace {
    /// A full ring buffer overwrote its oldest element
    #[inline]
    pub fn evicted(capacity: usize, slot: usize) {
        trace!(capacity = capacity, slot = slot, "ring buffer evicted oldest element");
    }

    /// A push was refused because every slot is in use
    #[inline]
    pub fn push_rejected(container: &'static str, capacity: usize) {
        debug!(container = container, capacity = capacity, "push rejected: container full");
    }

    /// A pop was refused because the container holds no elements
    #[inline]
    pub fn pop_rejected(container: &'static str) {
        debug!(container = container, "pop rejected: container empty");
    }
}
