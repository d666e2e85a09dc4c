// fixcap - fixcap-error
// Module: Error Prelude
//
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for fixcap-error
//!
//! Re-exports the core items the error types are built from so that the
//! `std` and `no_std` builds share one import list.

pub use core::{
    cmp::{Eq, PartialEq},
    fmt,
    fmt::{Debug, Display},
};

pub use crate::{codes, Error, ErrorCategory, Result};
