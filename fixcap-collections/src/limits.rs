// fixcap - fixcap-collections
// Module: Platform capacity profiles
//
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Platform-specific default capacities for the fixed-size containers.
//!
//! Capacities are compile-time constants selected by a platform profile
//! feature flag:
//!
//! - `embedded-small`: MCU targets with ~64KB RAM
//! - `embedded-medium`: Embedded Linux with ~1MB RAM
//! - Default: Desktop/Server with ample memory
//!
//! The [`DefaultQueue`](crate::collections::DefaultQueue) and
//! [`DefaultRingBuffer`](crate::collections::DefaultRingBuffer) aliases are
//! sized from these values. Containers declared with an explicit `N` are not
//! affected.
//!
//! # Usage
//!
//! ```rust
//! use fixcap_collections::{limits, DefaultQueue};
//!
//! let queue = DefaultQueue::<u8>::new();
//! assert_eq!(queue.capacity(), limits::QUEUE_CAPACITY);
//! ```

/// Platform profile for embedded microcontrollers (~64KB RAM)
#[cfg(feature = "embedded-small")]
pub mod platform {
    /// Default slot count of a bounded queue
    pub const QUEUE_CAPACITY: usize = 16;

    /// Default slot count of a ring buffer
    pub const RING_CAPACITY: usize = 32;
}

/// Platform profile for embedded Linux (~1MB RAM)
/// Note: embedded-small takes priority if both features are enabled
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
pub mod platform {
    /// Default slot count of a bounded queue
    pub const QUEUE_CAPACITY: usize = 128;

    /// Default slot count of a ring buffer
    pub const RING_CAPACITY: usize = 512;
}

/// Platform profile for desktop/server (default - ample memory)
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
pub mod platform {
    /// Default slot count of a bounded queue
    pub const QUEUE_CAPACITY: usize = 1024;

    /// Default slot count of a ring buffer
    pub const RING_CAPACITY: usize = 4096;
}

// Re-export platform limits at module level for convenience
pub use platform::*;

mod assertions {
    use super::platform::*;

    const _: () = assert!(QUEUE_CAPACITY > 0, "Queue capacity must be non-zero");
    const _: () = assert!(RING_CAPACITY > 0, "Ring capacity must be non-zero");
    const _: () = assert!(
        RING_CAPACITY >= QUEUE_CAPACITY,
        "Ring buffers hold at least a queue's worth of history"
    );
}
