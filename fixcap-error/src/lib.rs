// fixcap - fixcap-error
// Module: Error Handling
//
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the fixcap containers
//!
//! The containers in `fixcap-collections` never allocate and never grow, so
//! the only ways an operation can fail are running out of slots or removing
//! from an empty container. Each has its own category and error code:
//!
//! ## Capacity Errors (0x0100-0x01FF)
//! - Push into a full bounded queue
//!
//! ## Underflow Errors (0x0200-0x02FF)
//! - Pop from an empty container
//!
//! # Usage
//!
//! ```
//! use fixcap_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::capacity_exceeded("BoundedQueue is full");
//! assert_eq!(error.category, ErrorCategory::Capacity);
//! assert_eq!(error.code, codes::CAPACITY_EXCEEDED);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for fixcap
pub mod codes;
/// Error and error handling types
pub mod errors;

pub mod prelude;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for container operations.
///
/// Suitable for `no_std` targets: `Error` is `Copy` and carries only a
/// `&'static str` message.
pub type Result<T> = core::result::Result<T, Error>;
