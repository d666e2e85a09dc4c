// fixcap - fixcap-collections
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for fixcap-collections
//!
//! Re-exports the containers, their policies and the error types so that
//! callers can `use fixcap_collections::prelude::*;` in both `std` and
//! `no_std` builds.

pub use core::{
    fmt::{self, Debug},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

pub use fixcap_error::{codes, Error, ErrorCategory, Result};

pub use crate::collections::{
    BoundedQueue, BoundedQueueIter, DefaultQueue, DefaultRingBuffer, QueueOptimization,
    RingBuffer, RingBufferIter, ShiftOnInsert, ShiftOnRemove, ShiftPolicy,
};
