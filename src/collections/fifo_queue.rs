//! Circular-buffer FIFO queue
//!
//! Starts with room for [`DEFAULT_CAPACITY`] elements and doubles when full,
//! compacting the live range to the start of the new buffer.

use super::CollectionError;

/// Initial number of slots in a new queue
pub const DEFAULT_CAPACITY: usize = 10;

/// First-in, first-out queue backed by a ring buffer
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
    len: usize,
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> FifoQueue<T> {
    /// Creates an empty queue with the default capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            front: 0,
            rear: 0,
            len: 0,
        }
    }

    /// Appends an element at the rear, growing the buffer if needed
    pub fn add(&mut self, element: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.rear] = Some(element);
        self.rear = (self.rear + 1) % self.slots.len();
        self.len += 1;
    }

    /// Removes and returns the front element
    pub fn remove(&mut self) -> Result<T, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::EmptyQueue);
        }
        let element = self.slots[self.front]
            .take()
            .ok_or(CollectionError::EmptyQueue)?;
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        Ok(element)
    }

    /// Returns the front element without removing it
    pub fn peek(&self) -> Result<&T, CollectionError> {
        if self.len == 0 {
            return Err(CollectionError::EmptyQueue);
        }
        self.slots[self.front]
            .as_ref()
            .ok_or(CollectionError::EmptyQueue)
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates front to rear without disturbing the queue
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.slots.len();
        (0..self.len).filter_map(move |offset| self.slots[(self.front + offset) % capacity].as_ref())
    }

    fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let mut slots: Vec<Option<T>> = std::iter::repeat_with(|| None)
            .take(old_capacity * 2)
            .collect();

        for (offset, slot) in slots.iter_mut().enumerate().take(self.len) {
            *slot = self.slots[(self.front + offset) % old_capacity].take();
        }

        self.slots = slots;
        self.front = 0;
        self.rear = self.len;
    }
}

impl<T: PartialEq> FifoQueue<T> {
    /// Returns true if an equal element is queued
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|queued| queued == element)
    }
}
