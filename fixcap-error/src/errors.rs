// fixcap - fixcap-error
// Module: Error Types
//
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error types shared by the fixcap containers
//!
//! Errors are plain `Copy` values with a category, a numeric code and a
//! static message, so they can be created in `const` context and returned
//! on targets without an allocator.

use core::fmt;

use crate::codes;

/// `Error` categories for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Insert attempted with every slot in use
    Capacity  = 1,
    /// Removal or access attempted on an empty container
    Underflow = 2,
}

/// fixcap `Error` type
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Push into a full container
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "Container capacity exceeded",
    );
    /// Pop from an empty container
    pub const CONTAINER_EMPTY: Self = Self::new(
        ErrorCategory::Underflow,
        codes::CONTAINER_EMPTY,
        "Container is empty",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create a capacity exceeded error
    #[must_use]
    pub const fn capacity_exceeded(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
    }

    /// Create a container empty (underflow) error
    #[must_use]
    pub const fn container_empty(message: &'static str) -> Self {
        Self::new(ErrorCategory::Underflow, codes::CONTAINER_EMPTY, message)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub const fn is_capacity_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Capacity)
    }

    /// Check if this is an underflow error
    #[must_use]
    pub const fn is_underflow_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Underflow)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
