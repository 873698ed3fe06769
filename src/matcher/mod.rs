//! Whole-word occurrence counting.
//!
//! This module contains the byte-at-a-time matching automaton and the
//! structures it leans on:
//!
//! - [`WordMatcher`] - KMP automaton with boundary checks on both sides
//! - [`is_boundary`] - The fixed whitespace/punctuation boundary set
//! - `FailureTable` - KMP longest proper prefix-suffix table
//! - `History` - Power-of-two ring of the most recently fed bytes

mod boundary;
mod failure;
mod history;
mod word;

pub use boundary::{BOUNDARY_BYTES, END_OF_STREAM, is_boundary};
pub use word::WordMatcher;

pub(crate) use failure::FailureTable;
pub(crate) use history::History;
