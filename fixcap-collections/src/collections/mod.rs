// fixcap - fixcap-collections
// Module: Collections
//
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Inline-storage containers with compile-time capacity.
//!
//! | Type | Full behavior | Removal | Indexed access |
//! |------|---------------|---------|----------------|
//! | [`BoundedQueue`] | push rejected | front (FIFO) | front/back |
//! | [`RingBuffer`] | oldest overwritten | back or front | any logical slot |

pub mod bounded_queue;
pub mod ring_buffer;

pub use bounded_queue::{
    BoundedQueue, BoundedQueueIter, QueueOptimization, ShiftOnInsert, ShiftOnRemove, ShiftPolicy,
};
pub use ring_buffer::{RingBuffer, RingBufferIter};

use crate::limits;

/// Bounded queue sized by the active platform profile
pub type DefaultQueue<T, P = ShiftOnRemove> = BoundedQueue<T, { limits::QUEUE_CAPACITY }, P>;

/// Ring buffer sized by the active platform profile
pub type DefaultRingBuffer<T> = RingBuffer<T, { limits::RING_CAPACITY }>;
