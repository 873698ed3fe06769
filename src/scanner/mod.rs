//! Scan driver wiring a [`Source`](crate::Source) into one consumer.
//!
//! - [`Consume`] - Streaming `push()`/`finish()` interface of the consumers
//! - [`scan`] - Pulls every chunk from a source into a consumer
//! - [`run`] - Mode-selected scan producing a [`ScanOutcome`]
//! - [`checksum_bytes`], [`count_occurrences`] - One-shot helpers for in-memory data

mod engine;

pub use engine::{
    Consume, ScanOutcome, ScanSummary, checksum_bytes, count_occurrences, run, scan,
};
