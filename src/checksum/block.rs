//! Wrapping sum of native 32-bit words, folded chunk by chunk.
//!
//! # Chunk tails
//!
//! Each chunk is summed on its own. A trailing 1-3 bytes that do not fill a
//! word are zero-extended into one final word for that chunk; no bytes are
//! carried into the next chunk. The result is therefore independent of
//! chunking only when every chunk but the last is a multiple of 4 bytes,
//! which holds for both input sources. This matches the established output
//! of the tool and is kept bit-for-bit, quirk included.
//!
//! The sum is not collision resistant and is not meant as an integrity check.

use bytes::Buf;

use crate::config::WORD_BYTES;

/// Running block checksum.
///
/// # Example
///
/// ```
/// use scanrs::BlockChecksum;
///
/// let mut sum = BlockChecksum::new();
/// sum.update(&1u32.to_ne_bytes());
/// sum.update(&2u32.to_ne_bytes());
/// assert_eq!(sum.value(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockChecksum {
    sum: u32,
}

impl BlockChecksum {
    /// Creates an accumulator at zero.
    pub const fn new() -> Self {
        Self { sum: 0 }
    }

    /// Folds one chunk into the sum.
    pub fn update(&mut self, chunk: &[u8]) {
        let mut buf = chunk;
        while buf.remaining() >= WORD_BYTES {
            self.sum = self.sum.wrapping_add(buf.get_u32_ne());
        }

        if buf.has_remaining() {
            let mut tail = [0u8; WORD_BYTES];
            tail[..buf.len()].copy_from_slice(buf);
            self.sum = self.sum.wrapping_add(u32::from_ne_bytes(tail));
        }
    }

    /// Returns the current sum.
    pub fn value(&self) -> u32 {
        self.sum
    }

    /// Resets the sum to zero.
    pub fn reset(&mut self) {
        self.sum = 0;
    }
}
