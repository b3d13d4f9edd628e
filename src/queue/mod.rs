use std::fmt::{self, Debug};

use self::slot::Slot;
use crate::error::{Error, Result};

mod slot;

/// Capacity of a queue created with [`BoundedQueue::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A fixed capacity first-in-first-out queue backed by a single allocation.
///
/// The front of the queue is always stored at index zero; dequeuing shifts
/// the remaining elements one slot toward the front.
/// ```
/// use array_queue::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(2).unwrap();
/// queue.enqueue(5).unwrap();
/// queue.enqueue(7).unwrap();
/// assert!(queue.enqueue(9).is_err());
///
/// assert_eq!(queue.dequeue().unwrap(), 5);
/// assert_eq!(*queue.peek_back().unwrap(), 7);
/// ```
pub struct BoundedQueue<T> {
    slots: Box<[Slot<T>]>,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue that holds at most `capacity` elements.
    ///
    /// Returns `Error::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument(0));
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        let slots = (0..capacity).map(|_| Slot::Vacant).collect();
        log::trace!("created queue with capacity {capacity}");
        Self { slots, len: 0 }
    }

    /// Push a value to the back of the queue.
    ///
    /// Returns `Error::QueueFull` without touching the queue if there is no room.
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::QueueFull);
        }
        self.slots[self.len].put(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front of the queue (the oldest value).
    ///
    /// This is `O(len)` as every remaining value moves one slot forward.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::QueueEmpty);
        }

        let Some(value) = self.slots[0].take() else {
            panic!("front of a non-empty queue is vacant")
        };
        // The vacated front slot ends up just past the new back
        self.slots[..self.len].rotate_left(1);
        self.len -= 1;
        Ok(value)
    }

    /// The most recently enqueued value.
    ///
    /// Note that this is the value that was inserted last, not the next one
    /// to be dequeued.
    pub fn peek_back(&self) -> Result<&T> {
        self.len
            .checked_sub(1)
            .and_then(|index| self.slots[index].get())
            .ok_or(Error::QueueEmpty)
    }

    /// Mutable access to the most recently enqueued value.
    ///
    /// Writes through the reference change the value stored in the queue.
    pub fn peek_back_mut(&mut self) -> Result<&mut T> {
        let index = self.len.checked_sub(1).ok_or(Error::QueueEmpty)?;
        self.slots[index].get_mut().ok_or(Error::QueueEmpty)
    }

    /// Number of values in the queue
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of values the queue can hold
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// `true` if there are no values in the queue
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` if the next `enqueue` would fail
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Forget every value in the queue.
    ///
    /// The backing storage is kept, and old values are only dropped once
    /// their slot is reused by `enqueue` or the queue itself is dropped.
    pub fn clear(&mut self) {
        log::trace!("clearing {} values from queue", self.len);
        self.len = 0;
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }
}

impl<T: Debug> Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.slots[..self.len]
            .iter()
            .filter_map(Slot::get)
            .collect::<Vec<_>>();

        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity())
            .field("values", &values)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn occupied<T>(queue: &BoundedQueue<T>) -> usize {
        queue.slots.iter().filter(|s| s.is_occupied()).count()
    }

    #[test]
    fn zero_capacity() {
        let err = BoundedQueue::<u8>::new(0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(0)));
    }

    #[test]
    fn default_capacity() {
        let queue = BoundedQueue::<u8>::default();
        assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
        assert!(queue.is_empty());
    }

    #[test]
    fn enqueue() {
        let mut queue = BoundedQueue::new(3).unwrap();
        for i in 0..3 {
            assert!(!queue.is_full());
            queue.enqueue(i).unwrap();
            assert_eq!(queue.len(), i + 1);
        }
        assert!(queue.is_full());
    }

    #[test]
    fn enqueue_full() {
        let mut queue = BoundedQueue::new(2).unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();

        assert!(matches!(queue.enqueue(3), Err(Error::QueueFull)));
        assert_eq!(queue.len(), 2);
        assert_eq!(*queue.peek_back().unwrap(), 2);
        assert_eq!(queue.dequeue().unwrap(), 1);
        assert_eq!(queue.dequeue().unwrap(), 2);
    }

    #[test]
    fn dequeue_compacts() {
        let mut queue = BoundedQueue::new(4).unwrap();
        queue.enqueue('a').unwrap();
        queue.enqueue('b').unwrap();
        queue.enqueue('c').unwrap();

        assert_eq!(queue.dequeue().unwrap(), 'a');
        assert_eq!(queue.slots[0].get(), Some(&'b'));
        assert_eq!(queue.slots[1].get(), Some(&'c'));
        assert!(queue.slots[2].get().is_none());
        assert_eq!(occupied(&queue), 2);
    }

    #[test]
    fn dequeue_empty() {
        let mut queue = BoundedQueue::<u8>::new(1).unwrap();
        assert!(matches!(queue.dequeue(), Err(Error::QueueEmpty)));
        assert!(queue.is_empty());
    }

    #[test]
    fn peek_back() {
        let mut queue = BoundedQueue::new(3).unwrap();
        assert!(matches!(queue.peek_back(), Err(Error::QueueEmpty)));

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        assert_eq!(*queue.peek_back().unwrap(), 2);
    }

    #[test]
    fn peek_back_mut() {
        let mut queue = BoundedQueue::new(2).unwrap();
        assert!(matches!(queue.peek_back_mut(), Err(Error::QueueEmpty)));

        queue.enqueue(String::from("a")).unwrap();
        queue.peek_back_mut().unwrap().push('b');
        assert_eq!(queue.dequeue().unwrap(), "ab");
    }

    #[test]
    fn clear_keeps_stale_slots() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(occupied(&queue), 2);
        assert!(matches!(queue.peek_back(), Err(Error::QueueEmpty)));

        queue.enqueue(9).unwrap();
        assert_eq!(queue.slots[0].get(), Some(&9));
        assert_eq!(*queue.peek_back().unwrap(), 9);
    }

    #[test]
    fn debug_hides_stale_slots() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.clear();
        queue.enqueue(3).unwrap();

        let output = format!("{queue:?}");
        assert_eq!(output, "BoundedQueue { capacity: 3, values: [3] }");
    }
}
