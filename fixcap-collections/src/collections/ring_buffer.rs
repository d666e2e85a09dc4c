// fixcap - fixcap-collections
// Module: RingBuffer - Inline-storage overwriting circular buffer
//
// Copyright (c) 2025 The fixcap Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Circular buffer with inline storage that keeps the `N` most recent
//! elements.
//!
//! Pushing into a full `RingBuffer<T, N>` overwrites the oldest element, so a
//! push never fails. Elements can be removed from the back (LIFO, with
//! [`RingBuffer::copy_and_pop`]) or from the front (FIFO, with
//! [`RingBuffer::copy_and_pop_front`]), and any live element can be read by
//! its logical index, 0 being the oldest.
//!
//! # Characteristics
//!
//! - **Zero allocation**: All memory is inline `[T; N]`
//! - **Const-time operations**: push, both pops and indexing are O(1)
//! - **Sliding window**: A full buffer always holds the last `N` pushes
//! - **Lazy reset**: `reset()` is O(1) and does not erase slots

use core::ops::{Index, IndexMut};

/// A circular buffer with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `used <= N` always holds
/// 2. `head < N`, `tail <= N` (`tail == N` is folded to 0 on the next push)
/// 3. Logical element `i < used` lives in slot `(head + i) % N`
/// 4. `tail % N == (head + used) % N`
///
/// # Examples
///
/// ```
/// use fixcap_collections::RingBuffer;
///
/// let mut window = RingBuffer::<u32, 2>::new();
/// window.push(5);
/// window.push(92);
/// window.push(18); // evicts 5
///
/// assert_eq!(window[0], 92);
/// assert_eq!(window[1], 18);
/// assert_eq!(window.copy_and_pop(), Some(18));
/// assert_eq!(window.copy_and_pop(), Some(92));
/// assert_eq!(window.copy_and_pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    /// Inline storage for elements (circular)
    slots: [T; N],

    /// Slot of the oldest element
    head: usize,

    /// One past the most recently written slot
    tail: usize,

    /// Number of live elements
    /// Invariant: used <= N
    used: usize,
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Stores `item` as the newest element and returns a reference to it.
    ///
    /// If the buffer is full the oldest element is overwritten.
    #[inline]
    pub fn push(&mut self, item: T) -> &mut T {
        let slot = self.next_slot();
        self.slots[slot] = item;
        &mut self.slots[slot]
    }

    /// Constructs the newest element from constructor arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixcap_collections::RingBuffer;
    ///
    /// #[derive(Debug, Default, Clone, Copy, PartialEq)]
    /// struct Sample {
    ///     channel: u8,
    ///     value: i16,
    /// }
    ///
    /// impl From<(u8, i16)> for Sample {
    ///     fn from((channel, value): (u8, i16)) -> Self {
    ///         Self { channel, value }
    ///     }
    /// }
    ///
    /// let mut samples = RingBuffer::<Sample, 4>::new();
    /// samples.emplace((2, -40));
    /// assert_eq!(samples[0], Sample { channel: 2, value: -40 });
    /// ```
    #[inline]
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.push(T::from(args))
    }

    /// Constructs the newest element with `f`.
    #[inline]
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.push(f())
    }

    /// Returns a reference to the element at logical `index`, or `None` if
    /// `index >= len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.used {
            return None;
        }
        Some(&self.slots[self.slot_of(index)])
    }

    /// Returns a mutable reference to the element at logical `index`, or
    /// `None` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.used {
            return None;
        }
        let slot = self.slot_of(index);
        Some(&mut self.slots[slot])
    }

    /// Returns a reference to the oldest element.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a reference to the newest element.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.used.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Empties the buffer in O(1).
    ///
    /// Stored values are not dropped or overwritten; they become unreachable
    /// and are replaced by later pushes.
    #[inline]
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.used = 0;
    }

    /// Returns the current length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.used
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if the buffer is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Returns `true` if the buffer is full; the next push evicts.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.used == N
    }

    /// Returns an iterator over the buffer.
    ///
    /// Elements are yielded oldest to newest.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> RingBufferIter<'_, T, N> {
        RingBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Picks the slot for the next write and advances the indices.
    fn next_slot(&mut self) -> usize {
        if self.tail >= N {
            self.tail = 0;
        }

        let slot = self.tail;
        self.tail += 1;

        if self.is_full() {
            // `slot == head` here: the oldest element is the one overwritten.
            #[cfg(feature = "tracing")]
            crate::tracing::ContainerTrace::evicted(N, slot);
            self.head = (self.head + 1) % N;
        } else {
            self.used += 1;
        }

        slot
    }

    #[inline]
    fn slot_of(&self, index: usize) -> usize {
        // head < N, so reducing `index` first keeps the sum from overflowing.
        (self.head + index % N) % N
    }
}

impl<T: Default, const N: usize> RingBuffer<T, N> {
    /// Creates a new empty buffer with every slot default-initialised.
    ///
    /// A zero capacity is rejected when this is instantiated.
    #[must_use]
    pub fn new() -> Self {
        const { assert!(N > 0, "RingBuffer capacity must be non-zero") };

        Self {
            slots: core::array::from_fn(|_| T::default()),
            head: 0,
            tail: 0,
            used: 0,
        }
    }
}

impl<T: Clone, const N: usize> RingBuffer<T, N> {
    /// Removes and returns the newest element.
    ///
    /// Returns `None` without touching the buffer if it is empty.
    #[inline]
    pub fn copy_and_pop(&mut self) -> Option<T> {
        if self.is_empty() {
            #[cfg(feature = "tracing")]
            crate::tracing::ContainerTrace::pop_rejected("RingBuffer");
            return None;
        }

        let slot = if self.tail == 0 { N - 1 } else { self.tail - 1 };
        let item = self.slots[slot].clone();

        self.used -= 1;
        self.tail = slot;

        Some(item)
    }

    /// Removes and returns the oldest element.
    ///
    /// Returns `None` without touching the buffer if it is empty.
    #[inline]
    pub fn copy_and_pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            #[cfg(feature = "tracing")]
            crate::tracing::ContainerTrace::pop_rejected("RingBuffer");
            return None;
        }

        let item = self.slots[self.head].clone();

        self.head += 1;
        if self.head == N {
            self.head = 0;
        }
        self.used -= 1;

        Some(item)
    }
}

impl<T: Default, const N: usize> Default for RingBuffer<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked logical indexing: `buffer[i]` reads slot `(head + i) % N`
/// whether or not `i < len()`. Any `usize` maps to a valid slot, so this
/// never panics. Use [`RingBuffer::get`] for a checked read.
impl<T, const N: usize> Index<usize> for RingBuffer<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[self.slot_of(index)]
    }
}

impl<T, const N: usize> IndexMut<usize> for RingBuffer<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let slot = self.slot_of(index);
        &mut self.slots[slot]
    }
}

/// Iterator over a [`RingBuffer`], oldest element first.
#[derive(Debug)]
pub struct RingBufferIter<'a, T, const N: usize> {
    buffer: &'a RingBuffer<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> Iterator for RingBufferIter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.used - self.index;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for RingBufferIter<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = RingBufferIter<'a, T, N>;

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

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_ring_buffer_sliding_window() {
        let mut buffer: RingBuffer<u8, 2> = RingBuffer::new();

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.push(4);

        assert!(buffer.len() == 2);
        assert!(buffer[0] == 3);
        assert!(buffer[1] == 4);
        assert!(buffer.copy_and_pop_front() == Some(3));
        assert!(buffer.copy_and_pop() == Some(4));
        assert!(buffer.is_empty());
    }

    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_ring_buffer_index_stays_in_bounds() {
        let mut buffer: RingBuffer<u8, 3> = RingBuffer::new();
        let pushes: u8 = kani::any();
        kani::assume(pushes < 5);

        for value in 0..pushes {
            buffer.push(value);
        }

        let index: usize = kani::any();
        // Raw indexing never leaves the slot array.
        let _ = buffer[index];
        assert!(buffer.len() <= 3);
    }
}

// ============================================================================
// Tests
// ============================================================================
