//! Chunk types.
//!
//! - [`Chunk`] - Borrowed view of one block of input with its stream offset

mod data;

pub use data::Chunk;
