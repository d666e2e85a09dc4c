// fixcap - fixcap-collections
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity containers for targets without dynamic allocation.
//!
//! Two independent containers are provided, both generic over the element
//! type and a compile-time capacity `N`, both storing their elements inline:
//!
//! - [`BoundedQueue`](collections::BoundedQueue): FIFO queue whose relocation
//!   cost is paid either on insert or on removal, chosen by a policy type.
//! - [`RingBuffer`](collections::RingBuffer): circular buffer that keeps the
//!   `N` most recent elements, overwriting the oldest when full, with pops
//!   from either end and indexed access.
//!
//! Neither container allocates, locks, or grows. Operations that cannot
//! proceed (push into a full queue, pop from an empty container) report a
//! [`fixcap_error::Error`] or `None` instead of touching invalid state.
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support
//! - `tracing`: Structured events for evictions and rejected operations
//! - `embedded-small` / `embedded-medium`: Platform capacity profiles
//! - Default: Pure `no_std` without allocation

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub mod prelude;

// Re-export error related types for convenience
pub use fixcap_error::{codes, Error, ErrorCategory};

/// Fixed-capacity containers
pub mod collections;
/// Platform capacity profiles
pub mod limits;
/// Structured tracing helpers
#[cfg(feature = "tracing")]
pub mod tracing;

pub use collections::{
    BoundedQueue, DefaultQueue, DefaultRingBuffer, QueueOptimization, RingBuffer,
    ShiftOnInsert, ShiftOnRemove, ShiftPolicy,
};
