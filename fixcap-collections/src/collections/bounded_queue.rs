// fixcap - fixcap-collections
// Module: BoundedQueue - Inline-storage FIFO queue with a shift policy
//
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded FIFO queue with inline storage and compile-time capacity.
//!
//! `BoundedQueue<T, N, P>` keeps its live elements packed from slot 0. Keeping
//! them packed means one of the two hot operations has to move elements, and
//! the policy type `P` decides which one:
//!
//! | Policy | `push` | `pop` | Optimized for |
//! |--------|--------|-------|---------------|
//! | [`ShiftOnRemove`] (default) | O(1) | O(len) | [`QueueOptimization::Write`] |
//! | [`ShiftOnInsert`] | O(len) | O(1) | [`QueueOptimization::Read`] |
//!
//! `front()` and `back()` are O(1) under both policies. The policy is a
//! zero-sized type, so the choice is resolved at compile time and never
//! branches at runtime.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All memory is inline `[T; N]`
//! - **Checked**: Push into a full queue or pop from an empty one returns an
//!   error and leaves the queue untouched
//! - **Lazy clear**: `clear()` is O(1) and does not erase slots

use core::marker::PhantomData;

use fixcap_error::{Error, Result};

/// The operation a [`ShiftPolicy`] keeps free of element relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueOptimization {
    /// `pop` is O(1), `push` shifts
    Read,
    /// `push` is O(1), `pop` shifts
    Write,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ShiftOnInsert {}
    impl Sealed for super::ShiftOnRemove {}
}

/// Relocation strategy of a [`BoundedQueue`].
///
/// Implemented only by [`ShiftOnInsert`] and [`ShiftOnRemove`]. All methods
/// operate on the full slot array with `count` live elements; the queue
/// guarantees `count < slots.len()` for `insert` and `count > 0` for
/// `remove`.
pub trait ShiftPolicy: sealed::Sealed {
    /// The operation this policy keeps O(1)
    const OPTIMIZED_FOR: QueueOptimization;

    /// Store `item` as the newest element.
    fn insert<T>(slots: &mut [T], count: usize, item: T);

    /// Drop the oldest element from the live range.
    fn remove<T>(slots: &mut [T], count: usize);

    /// Physical slot of logical position `index` (0 = oldest).
    fn slot_of(count: usize, index: usize) -> usize;
}

/// Newest element at slot 0; every push shifts the live range up by one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShiftOnInsert;

impl ShiftPolicy for ShiftOnInsert {
    const OPTIMIZED_FOR: QueueOptimization = QueueOptimization::Read;

    #[inline]
    fn insert<T>(slots: &mut [T], count: usize, item: T) {
        // The stale slot at `count` rotates into slot 0 and is overwritten.
        slots[..=count].rotate_right(1);
        slots[0] = item;
    }

    #[inline]
    fn remove<T>(_slots: &mut [T], _count: usize) {}

    #[inline]
    fn slot_of(count: usize, index: usize) -> usize {
        count - 1 - index
    }
}

/// Oldest element at slot 0; every pop shifts the live range down by one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShiftOnRemove;

impl ShiftPolicy for ShiftOnRemove {
    const OPTIMIZED_FOR: QueueOptimization = QueueOptimization::Write;

    #[inline]
    fn insert<T>(slots: &mut [T], count: usize, item: T) {
        slots[count] = item;
    }

    #[inline]
    fn remove<T>(slots: &mut [T], count: usize) {
        // The popped element ends up in the first stale slot.
        slots[..count].rotate_left(1);
    }

    #[inline]
    fn slot_of(_count: usize, index: usize) -> usize {
        index
    }
}

/// A FIFO queue with compile-time capacity, inline storage and a
/// compile-time relocation policy.
///
/// # Invariants
///
/// 1. `count <= N` always holds
/// 2. Live elements occupy slots `[0, count)`
/// 3. Under `ShiftOnRemove` the oldest element is in slot 0, under
///    `ShiftOnInsert` the newest is
/// 4. Slots at and beyond `count` hold stale or default values that are
///    never observable through the API
///
/// # Examples
///
/// ```
/// use fixcap_collections::{BoundedQueue, QueueOptimization, ShiftOnInsert};
///
/// let mut queue = BoundedQueue::<u32, 4, ShiftOnInsert>::new();
/// queue.push(1)?;
/// queue.push(2)?;
///
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.back(), Some(&2));
/// assert_eq!(queue.copy_and_pop()?, 1);
/// assert_eq!(queue.optimized_for(), QueueOptimization::Read);
/// # Ok::<(), fixcap_error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoundedQueue<T, const N: usize, P: ShiftPolicy = ShiftOnRemove> {
    /// Inline storage, live range is `[0, count)`
    slots: [T; N],

    /// Number of live elements
    /// Invariant: count <= N
    count: usize,

    _policy: PhantomData<P>,
}

impl<T, const N: usize, P: ShiftPolicy> BoundedQueue<T, N, P> {
    /// Pushes an element to the back of the queue.
    ///
    /// O(1) under `ShiftOnRemove`, O(len) under `ShiftOnInsert`.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if the queue is full. The queue is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixcap_collections::BoundedQueue;
    ///
    /// let mut queue = BoundedQueue::<u32, 2>::new();
    /// queue.push(1)?;
    /// queue.push(2)?;
    /// assert!(queue.push(3).is_err()); // Full
    /// # Ok::<(), fixcap_error::Error>(())
    /// ```
    #[inline]
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(Self::overflow());
        }

        P::insert(&mut self.slots, self.count, item);
        self.count += 1;

        Ok(())
    }

    /// Removes the oldest element.
    ///
    /// O(len) under `ShiftOnRemove`, O(1) under `ShiftOnInsert`. The removed
    /// value stays in its slot until overwritten.
    ///
    /// # Errors
    ///
    /// Returns an underflow error if the queue is empty. The queue is
    /// unchanged.
    #[inline]
    pub fn pop(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(Self::underflow());
        }

        P::remove(&mut self.slots, self.count);
        self.count -= 1;

        Ok(())
    }

    /// Returns a reference to the oldest element.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the oldest element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let slot = P::slot_of(self.count, 0);
        Some(&mut self.slots[slot])
    }

    /// Returns a reference to the newest element.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.count.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns a mutable reference to the newest element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.count.checked_sub(1)?;
        let slot = P::slot_of(self.count, last);
        Some(&mut self.slots[slot])
    }

    /// Returns the current length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if the queue is full.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count == N
    }

    /// Reports which operation the queue's policy keeps O(1).
    #[inline]
    #[must_use]
    pub const fn optimized_for(&self) -> QueueOptimization {
        P::OPTIMIZED_FOR
    }

    /// Empties the queue in O(1).
    ///
    /// Stored values are not dropped or overwritten; they become unreachable
    /// and are replaced by later pushes.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Returns an iterator over the queue.
    ///
    /// Elements are yielded in FIFO order (oldest to newest).
    #[inline]
    #[must_use]
    pub fn iter(&self) -> BoundedQueueIter<'_, T, N, P> {
        BoundedQueueIter {
            queue: self,
            index: 0,
        }
    }

    fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        Some(&self.slots[P::slot_of(self.count, index)])
    }

    fn overflow() -> Error {
        #[cfg(feature = "tracing")]
        crate::tracing::ContainerTrace::push_rejected("BoundedQueue", N);
        Error::capacity_exceeded("BoundedQueue capacity exceeded")
    }

    fn underflow() -> Error {
        #[cfg(feature = "tracing")]
        crate::tracing::ContainerTrace::pop_rejected("BoundedQueue");
        Error::container_empty("BoundedQueue is empty")
    }
}

impl<T: Default, const N: usize, P: ShiftPolicy> BoundedQueue<T, N, P> {
    /// Creates a new empty queue with every slot default-initialised.
    ///
    /// A zero capacity is rejected when this is instantiated.
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N > 0, "BoundedQueue capacity must be non-zero") };

        Self {
            slots: core::array::from_fn(|_| T::default()),
            count: 0,
            _policy: PhantomData,
        }
    }
}

impl<T: Clone, const N: usize, P: ShiftPolicy> BoundedQueue<T, N, P> {
    /// Copies the oldest element out, then pops it.
    ///
    /// # Errors
    ///
    /// Returns an underflow error if the queue is empty.
    #[inline]
    pub fn copy_and_pop(&mut self) -> Result<T> {
        let Some(item) = self.front().cloned() else {
            return Err(Self::underflow());
        };
        self.pop()?;
        Ok(item)
    }
}

impl<T: Default, const N: usize, P: ShiftPolicy> Default for BoundedQueue<T, N, P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`BoundedQueue`] in FIFO order.
#[derive(Debug)]
pub struct BoundedQueueIter<'a, T, const N: usize, P: ShiftPolicy> {
    queue: &'a BoundedQueue<T, N, P>,
    index: usize,
}

impl<'a, T, const N: usize, P: ShiftPolicy> Iterator for BoundedQueueIter<'a, T, N, P> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.queue.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize, P: ShiftPolicy> ExactSizeIterator for BoundedQueueIter<'_, T, N, P> {}

impl<'a, T, const N: usize, P: ShiftPolicy> IntoIterator for &'a BoundedQueue<T, N, P> {
    type Item = &'a T;
    type IntoIter = BoundedQueueIter<'a, T, N, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    fn fifo_order<P: ShiftPolicy>() {
        let mut queue: BoundedQueue<u8, 3, P> = BoundedQueue::new();

        let a: u8 = kani::any();
        let b: u8 = kani::any();
        queue.push(a).unwrap();
        queue.push(b).unwrap();

        assert!(queue.front() == Some(&a));
        assert!(queue.back() == Some(&b));
        assert!(queue.copy_and_pop().unwrap() == a);
        assert!(queue.copy_and_pop().unwrap() == b);
        assert!(queue.is_empty());
    }

    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_queue_fifo_order_both_policies() {
        fifo_order::<ShiftOnInsert>();
        fifo_order::<ShiftOnRemove>();
    }

    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_queue_capacity_enforcement() {
        let mut queue: BoundedQueue<u8, 3, ShiftOnInsert> = BoundedQueue::new();

        assert!(queue.push(1).is_ok());
        assert!(queue.push(2).is_ok());
        assert!(queue.push(3).is_ok());
        assert!(queue.push(4).is_err());

        assert!(queue.len() == 3);
        assert!(queue.back() == Some(&3));
    }
}

// ============================================================================
// Tests
// ============================================================================
