//! The Chunk type - one bounded slice of input handed from source to consumer.

use std::fmt;
use std::ops::Deref;

/// A read-only view of one block of input bytes.
///
/// The bytes are owned by the [`Source`](crate::Source) that produced the
/// chunk. The lifetime ties the view to a mutable borrow of that source, so
/// the chunk cannot be held across the next pull: the source may unmap or
/// overwrite the storage as soon as another chunk is requested.
///
/// # Example
///
/// ```
/// use scanrs::Chunk;
///
/// let chunk = Chunk::new(b"hello world", 0);
///
/// assert_eq!(chunk.len(), 11);
/// assert_eq!(chunk.range(), 0..11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    data: &'a [u8],
    offset: u64,
}

impl<'a> Chunk<'a> {
    /// Creates a chunk over `data` that starts at `offset` in the stream.
    pub fn new(data: &'a [u8], offset: u64) -> Self {
        Self { data, offset }
    }

    /// Returns the chunk bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the offset of the first byte in the stream.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.offset + self.data.len() as u64
    }

    /// Returns the chunk as a range of stream offsets.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.offset..self.end()
    }
}

impl Deref for Chunk<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.data
    }
}

impl AsRef<[u8]> for Chunk<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl fmt::Display for Chunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes @ {})", self.len(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let chunk = Chunk::new(b"hello", 0);
        assert_eq!(chunk.len(), 5);
        assert!(!chunk.is_empty());
        assert_eq!(chunk.data(), b"hello");
    }

    #[test]
    fn test_empty() {
        let chunk = Chunk::new(b"", 7);
        assert!(chunk.is_empty());
        assert_eq!(chunk.range(), 7..7);
    }

    #[test]
    fn test_end_and_range() {
        let chunk = Chunk::new(b"hello", 100);
        assert_eq!(chunk.offset(), 100);
        assert_eq!(chunk.end(), 105);
        assert_eq!(chunk.range(), 100..105);
    }

    #[test]
    fn test_deref() {
        let chunk = Chunk::new(b"abc", 0);
        assert_eq!(&chunk[1..], b"bc");
        assert_eq!(chunk.iter().count(), 3);
    }

    #[test]
    fn test_display() {
        let chunk = Chunk::new(b"hello", 100);
        let s = format!("{}", chunk);
        assert!(s.contains("5 bytes"));
        assert!(s.contains("@ 100"));
    }
}
