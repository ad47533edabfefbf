//! Fixed-capacity ring buffer, the sample window behind the median filter.

/// Ring buffer holding up to `N` elements of `T`.
///
/// Capacity is exactly `N`. Pushing into a full buffer evicts the oldest
/// element.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct CircularBuffer<T, const N: usize> {
    buffer: [T; N],
    head: usize,
    tail: usize,
    full: bool,
}

impl<T: Copy + Default, const N: usize> CircularBuffer<T, N> {
    pub fn new() -> Self {
        Self {
            buffer: [T::default(); N],
            head: 0,
            tail: 0,
            full: false,
        }
    }

    /// Append an element, evicting the oldest when already full.
    pub fn push(&mut self, item: T) {
        self.buffer[self.head] = item;
        self.head = (self.head + 1) % N;
        if self.full {
            self.tail = (self.tail + 1) % N;
        }
        self.full = self.head == self.tail;
    }

    /// Number of elements held: `N` when full, otherwise head minus tail
    /// modulo `N`.
    pub fn len(&self) -> usize {
        if self.full {
            N
        } else if self.head >= self.tail {
            self.head - self.tail
        } else {
            N + self.head - self.tail
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Element at `index` in insertion order, oldest first.
    pub fn get(&self, index: usize) -> Option<T> {
        if index < self.len() {
            Some(self.buffer[(self.tail + index) % N])
        } else {
            None
        }
    }

    /// The written slots in storage order.
    ///
    /// Writes fill the backing array front to back until the first wrap, so
    /// this is always exactly the live elements, though not ordered oldest
    /// first once wrapped.
    pub fn filled(&self) -> &[T] {
        &self.buffer[..self.len()]
    }
}

impl<T: Copy + Default, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::CircularBuffer;

    #[test]
    fn fills_to_capacity() {
        let mut buffer: CircularBuffer<i32, 3> = CircularBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 3);

        buffer.push(1);
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_full());

        buffer.push(2);
        buffer.push(3);
        assert_eq!(buffer.len(), 3);
        assert!(buffer.is_full());
    }

    #[test]
    fn overwrites_oldest_when_full() {
        let mut buffer: CircularBuffer<i32, 3> = CircularBuffer::new();
        for value in 1..=5 {
            buffer.push(value);
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get(0), Some(3));
        assert_eq!(buffer.get(1), Some(4));
        assert_eq!(buffer.get(2), Some(5));

        buffer.push(6);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get(0), Some(4));
        assert_eq!(buffer.get(2), Some(6));
    }

    #[test]
    fn get_out_of_range() {
        let mut buffer: CircularBuffer<i32, 3> = CircularBuffer::new();
        assert_eq!(buffer.get(0), None);
        buffer.push(7);
        assert_eq!(buffer.get(0), Some(7));
        assert_eq!(buffer.get(1), None);
    }

    #[test]
    fn filled_tracks_written_slots() {
        let mut buffer: CircularBuffer<i32, 3> = CircularBuffer::new();
        assert!(buffer.filled().is_empty());

        buffer.push(1);
        buffer.push(2);
        assert_eq!(buffer.filled(), &[1, 2]);

        buffer.push(3);
        buffer.push(4);
        // wrapped: storage order, not insertion order
        assert_eq!(buffer.filled(), &[4, 2, 3]);
    }
}
