//! Whole-input block checksum.
//!
//! - [`BlockChecksum`] - Wrapping 32-bit sum of native-endian words

mod block;

pub use block::BlockChecksum;
