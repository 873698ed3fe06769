//! Fixed-size lookback over the most recently fed bytes.

/// Ring buffer of the last `capacity` bytes.
///
/// Capacity is a power of two so wraparound is a mask. Slots never written
/// read as `0`, the end-of-stream boundary, which makes the start of input
/// look like a boundary to lookbacks that reach past it.
#[derive(Debug, Clone)]
pub(crate) struct History {
    slots: Box<[u8]>,
    mask: usize,
    head: usize,
}

impl History {
    /// Creates a ring that can look back at least `depth` bytes.
    pub(crate) fn with_depth(depth: usize) -> Self {
        let capacity = depth.max(1).next_power_of_two();
        Self {
            slots: vec![0u8; capacity].into_boxed_slice(),
            mask: capacity - 1,
            head: 0,
        }
    }

    /// Records `byte` as the newest entry, overwriting the oldest.
    #[inline]
    pub(crate) fn put(&mut self, byte: u8) {
        self.slots[self.head] = byte;
        self.head = (self.head + 1) & self.mask;
    }

    /// Returns the byte fed `n` steps ago: `back(1)` is the newest.
    ///
    /// `n` must be in `1..=capacity`.
    #[inline]
    pub(crate) fn back(&self, n: usize) -> u8 {
        debug_assert!(n >= 1 && n <= self.capacity());
        self.slots[self.head.wrapping_sub(n) & self.mask]
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.fill(0);
        self.head = 0;
    }
}
