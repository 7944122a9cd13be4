/*! A FIFO queue stored in a [circular buffer](https://en.wikipedia.org/wiki/Circular_buffer).
 *
 * Removing from the front only advances the `head` index, so no element is ever shifted.
 * When a write would exceed the capacity, the buffer doubles and the live elements
 * are re-based to index 0, which keeps enqueueing amortized O(1).
 */

use crate::errors::{Result, StructureError};
use core::fmt;
use itertools::Itertools;
use tracing::debug;
use tracing_attributes::instrument;

/// Capacity of a queue created with [CircularQueue::new]
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable first-in-first-out queue backed by a circular array.
///
/// Live elements occupy the slots `head, head + 1, ..., head + len - 1` (modulo
/// the capacity) and `tail == (head + len) % capacity` holds at all times.
///
/// ```rust
/// use data_structures::CircularQueue;
///
/// let mut queue = CircularQueue::new();
/// queue.enqueue("first");
/// queue.enqueue("second");
///
/// assert_eq!(queue.dequeue()?, "first");
/// assert_eq!(queue.dequeue()?, "second");
/// assert!(queue.dequeue().is_err());
/// # Ok::<(), data_structures::StructureError>(())
/// ```
pub struct CircularQueue<T> {
    /// Slots of the ring. `None` marks a free slot
    elements: Box<[Option<T>]>,
    /// Index of the next element to remove
    head: usize,
    /// Index of the next free slot to write
    tail: usize,
    /// Number of live elements
    count: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue with [DEFAULT_CAPACITY] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty queue with room for `capacity` elements before the first growth.
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        CircularQueue {
            elements: Self::allocate(capacity.max(1)),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Returns `true` if no element is waiting to be dequeued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Number of slots currently allocated. Never shrinks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Appends `value` at the tail, doubling the buffer first if it is full.
    #[instrument(level = "trace", skip(self, value), fields(len = self.count))]
    pub fn enqueue(&mut self, value: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.elements[self.tail] = Some(value);
        self.tail = self.wrap(self.tail + 1);
        self.count += 1;
    }

    /// Removes and returns the element at the head.
    ///
    /// # Errors
    ///
    /// Returns [StructureError::EmptyContainer] if the queue is empty. The queue is left untouched.
    #[instrument(level = "trace", skip(self), fields(len = self.count))]
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            debug!("Dequeue on an empty queue");
            return Err(StructureError::EmptyContainer);
        }
        let value = self.elements[self.head]
            .take()
            .ok_or(StructureError::InvalidOperation("head slot of a non-empty queue is vacant"))?;
        self.head = self.wrap(self.head + 1);
        self.count -= 1;
        Ok(value)
    }

    /// Doubles the capacity and moves the live elements, in head-to-tail order, to the
    /// front of the new buffer.
    fn grow(&mut self) {
        let capacity = self.capacity();
        debug!(from = capacity, to = 2 * capacity, "Growing queue");

        let mut elements = Self::allocate(2 * capacity);
        for (offset, slot) in elements.iter_mut().take(self.count).enumerate() {
            let index = self.wrap(self.head + offset);
            *slot = self.elements[index].take();
        }

        self.elements = elements;
        self.head = 0;
        self.tail = self.count;
    }

    #[inline]
    fn wrap(&self, index: usize) -> usize {
        index % self.capacity()
    }

    fn allocate(capacity: usize) -> Box<[Option<T>]> {
        std::iter::repeat_with(|| None).take(capacity).collect()
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CircularQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live = (0..self.count)
            .filter_map(|offset| self.elements[self.wrap(self.head + offset)].as_ref())
            .collect_vec();
        f.debug_struct("CircularQueue")
            .field("elements", &live)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("capacity", &self.capacity())
            .finish()
    }
}
