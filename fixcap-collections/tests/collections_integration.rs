// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Scenario tests for the bounded queue and the ring buffer through their
//! public API.

use fixcap_collections::prelude::*;

// ============================================================================
// RingBuffer
// ============================================================================

#[test]
fn ring_buffer_stores_data() {
    let mut buffer = RingBuffer::<i32, 16>::new();
    buffer.push(5);

    assert_eq!(buffer.copy_and_pop(), Some(5));
}

#[test]
fn ring_buffer_reports_size() {
    let mut buffer = RingBuffer::<i32, 16>::new();
    buffer.push(5);

    assert_eq!(buffer.capacity(), 16);
    assert_eq!(buffer.len(), 1);

    buffer.push(92);
    assert_eq!(buffer.len(), 2);
}

#[test]
fn ring_buffer_pop_back_reduces_size() {
    let mut buffer = RingBuffer::<i32, 16>::new();
    buffer.push(5);
    buffer.copy_and_pop();

    assert!(buffer.is_empty());
}

#[test]
fn ring_buffer_pop_front_reduces_size() {
    let mut buffer = RingBuffer::<i32, 16>::new();
    buffer.push(5);
    buffer.copy_and_pop_front();

    assert!(buffer.is_empty());
}

#[test]
fn ring_buffer_pop_front_is_fifo() {
    let mut buffer = RingBuffer::<i32, 16>::new();
    buffer.push(5);
    buffer.push(15);
    buffer.push(25);

    assert_eq!(buffer[0], 5);
    assert_eq!(buffer.copy_and_pop_front(), Some(5));
    assert_eq!(buffer.copy_and_pop_front(), Some(15));
    assert_eq!(buffer[0], 25);
}

#[test]
fn ring_buffer_pop_front_shifts_logical_indices() {
    let mut buffer = RingBuffer::<i32, 16>::new();
    buffer.push(5);
    buffer.push(15);
    buffer.push(25);

    assert_eq!(buffer[0], 5);
    assert_eq!(buffer[1], 15);
    assert_eq!(buffer[2], 25);

    buffer.copy_and_pop_front();

    assert_eq!(buffer[0], 15);
    assert_eq!(buffer[1], 25);
}

#[test]
fn ring_buffer_full_and_reset() {
    let mut buffer = RingBuffer::<i32, 2>::new();
    buffer.push(5);
    buffer.push(18);

    assert!(buffer.is_full());

    buffer.reset();

    assert!(buffer.is_empty());
    assert_eq!(buffer.len(), 0);
}

#[test]
fn ring_buffer_overflow_evicts_oldest() {
    let mut buffer = RingBuffer::<i32, 2>::new();
    buffer.push(5);
    buffer.push(92);
    buffer.push(18);

    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.copy_and_pop(), Some(18));
    assert_eq!(buffer.copy_and_pop(), Some(92));
    assert_eq!(buffer.copy_and_pop(), None);
}

#[test]
fn ring_buffer_pop_front_rollover() {
    let mut buffer = RingBuffer::<i32, 2>::new();

    // Move tail to the end of the slots
    buffer.push(5);
    buffer.push(92);

    // Move head to the end of the slots and roll it over
    buffer.copy_and_pop_front();
    buffer.copy_and_pop_front();

    buffer.push(18);
    buffer.push(28);

    assert_eq!(buffer.copy_and_pop_front(), Some(18));
    assert_eq!(buffer.copy_and_pop_front(), Some(28));
}

#[test]
fn ring_buffer_index_after_wraparound() {
    let mut buffer = RingBuffer::<i32, 2>::new();
    buffer.push(5);
    buffer.push(92);

    assert_eq!(buffer[0], 5);
    assert_eq!(buffer[1], 92);

    buffer.push(18);

    assert_eq!(buffer[0], 92);
    assert_eq!(buffer[1], 18);
}

#[test]
fn ring_buffer_repeated_overflow_keeps_window() {
    let mut buffer = RingBuffer::<i32, 2>::new();
    for value in [5, 92, 18, 40] {
        buffer.push(value);
    }

    assert_eq!(buffer[0], 18);
    assert_eq!(buffer[1], 40);
    assert_eq!(buffer.copy_and_pop_front(), Some(18));
    assert_eq!(buffer.copy_and_pop_front(), Some(40));
}

#[test]
fn ring_buffer_emplace() {
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    struct Point {
        a: i32,
        b: i32,
    }

    impl From<(i32, i32)> for Point {
        fn from((a, b): (i32, i32)) -> Self {
            Self { a, b }
        }
    }

    let mut buffer = RingBuffer::<Point, 2>::new();
    let stored = buffer.emplace((2, 5));
    assert_eq!(*stored, Point { a: 2, b: 5 });

    assert_eq!(buffer[0].a, 2);
    assert_eq!(buffer[0].b, 5);
}

#[test]
fn ring_buffer_default_profile_alias() {
    let mut buffer = DefaultRingBuffer::<u8>::default();
    assert_eq!(buffer.capacity(), fixcap_collections::limits::RING_CAPACITY);
    buffer.push(1);
    assert_eq!(buffer.len(), 1);
}

// ============================================================================
// BoundedQueue
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq)]
struct Job {
    id: u32,
    name: &'static str,
}

fn stores_data<P: ShiftPolicy>() -> Result<()> {
    let mut queue = BoundedQueue::<Job, 16, P>::new();

    queue.push(Job { id: 3, name: "three" })?;
    queue.push(Job { id: 5, name: "five" })?;

    assert_eq!(queue.copy_and_pop()?.id, 3);
    assert_eq!(queue.copy_and_pop()?.id, 5);
    Ok(())
}

fn front_and_back<P: ShiftPolicy>() -> Result<()> {
    let mut queue = BoundedQueue::<i32, 16, P>::new();

    queue.push(12)?;
    queue.push(24)?;

    assert_eq!(queue.front(), Some(&12));
    assert_eq!(queue.back(), Some(&24));
    Ok(())
}

fn popping_empty_is_reported<P: ShiftPolicy>() {
    let mut queue = BoundedQueue::<i32, 2, P>::new();

    let error = queue.pop().unwrap_err();
    assert_eq!(error.code, codes::CONTAINER_EMPTY);
    assert!(queue.is_empty());
}

fn size_queries<P: ShiftPolicy>() -> Result<()> {
    let mut queue = BoundedQueue::<i32, 2, P>::new();

    queue.push(12)?;
    queue.push(24)?;

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.capacity(), 2);
    assert!(queue.is_full());

    queue.pop()?;
    queue.pop()?;

    assert!(queue.is_empty());
    Ok(())
}

#[test]
fn queue_stores_data() -> Result<()> {
    stores_data::<ShiftOnRemove>()?;
    stores_data::<ShiftOnInsert>()
}

#[test]
fn queue_front_and_back() -> Result<()> {
    front_and_back::<ShiftOnRemove>()?;
    front_and_back::<ShiftOnInsert>()
}

#[test]
fn queue_popping_empty() {
    popping_empty_is_reported::<ShiftOnRemove>();
    popping_empty_is_reported::<ShiftOnInsert>();
}

#[test]
fn queue_size_queries() -> Result<()> {
    size_queries::<ShiftOnRemove>()?;
    size_queries::<ShiftOnInsert>()
}

#[test]
fn queue_push_full_is_reported() -> Result<()> {
    let mut queue = BoundedQueue::<i32, 1>::new();
    queue.push(1)?;

    let error = queue.push(2).unwrap_err();
    assert_eq!(error.category, ErrorCategory::Capacity);
    assert_eq!(queue.copy_and_pop()?, 1);
    Ok(())
}

#[test]
fn queue_optimized_for() {
    let write = BoundedQueue::<i32, 2, ShiftOnRemove>::new();
    let read = BoundedQueue::<i32, 2, ShiftOnInsert>::new();

    assert_eq!(write.optimized_for(), QueueOptimization::Write);
    assert_eq!(read.optimized_for(), QueueOptimization::Read);
}

#[test]
fn queue_empty_after_clear() -> Result<()> {
    let mut queue = BoundedQueue::<i32, 5>::new();
    queue.push(10)?;
    queue.clear();

    assert!(queue.is_empty());
    Ok(())
}

#[test]
fn queue_clear_behaves_like_fresh() -> Result<()> {
    let mut used = BoundedQueue::<i32, 3, ShiftOnInsert>::new();
    used.push(1)?;
    used.push(2)?;
    used.push(3)?;
    used.clear();

    let mut fresh = BoundedQueue::<i32, 3, ShiftOnInsert>::new();
    for queue in [&mut used, &mut fresh] {
        queue.push(7)?;
        queue.push(8)?;
    }

    assert!(used.iter().eq(fresh.iter()));
    assert_eq!(used.copy_and_pop()?, fresh.copy_and_pop()?);
    assert_eq!(used.len(), fresh.len());
    Ok(())
}

#[test]
fn queue_push_then_copy_and_pop_round_trip() -> Result<()> {
    let job = Job { id: 9, name: "nine" };

    let mut write = BoundedQueue::<Job, 4, ShiftOnRemove>::new();
    write.push(job.clone())?;
    assert_eq!(write.copy_and_pop()?, job);

    let mut read = BoundedQueue::<Job, 4, ShiftOnInsert>::new();
    read.push(job.clone())?;
    assert_eq!(read.copy_and_pop()?, job);
    Ok(())
}

#[test]
fn queue_default_profile_alias() -> Result<()> {
    let mut queue = DefaultQueue::<u16, ShiftOnInsert>::new();
    assert_eq!(queue.capacity(), fixcap_collections::limits::QUEUE_CAPACITY);
    queue.push(4)?;
    assert_eq!(queue.front(), Some(&4));
    Ok(())
}
