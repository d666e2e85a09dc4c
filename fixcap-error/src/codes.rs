// fixcap - fixcap-error
// Module: Error Codes
//
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for fixcap

// Capacity error codes (0x0100-0x01FF)
/// Insert into a container whose slots are all in use
pub const CAPACITY_EXCEEDED: u16 = 0x0100;

// Underflow error codes (0x0200-0x02FF)
/// Remove from a container holding no elements
pub const CONTAINER_EMPTY: u16 = 0x0200;
