//! Core scan loop.
//!
//! The loop is single-threaded and strictly sequential: a chunk is fully
//! consumed before the next one is requested, which is what lets sources
//! hand out borrowed views into storage they reuse.
//!
//! # Example
//!
//! ```
//! use scanrs::{BlockChecksum, ScanConfig, Source, scan};
//!
//! let mut source = Source::from_reader(&b"abcdabcd"[..], &ScanConfig::default())?;
//! let (sum, summary) = scan(&mut source, BlockChecksum::new())?;
//!
//! assert_eq!(summary.bytes, 8);
//! assert_eq!(sum, u32::from_ne_bytes(*b"abcd").wrapping_mul(2));
//! # Ok::<(), scanrs::ScanError>(())
//! ```

use std::fmt;

use tracing::debug;

use crate::checksum::BlockChecksum;
use crate::config::ScanMode;
use crate::error::ScanError;
use crate::matcher::WordMatcher;
use crate::source::Source;

/// A streaming consumer of chunks.
///
/// Implementations must not keep references into a pushed chunk; the bytes
/// are only valid for the duration of the call.
pub trait Consume {
    /// Result produced once the stream ends.
    type Output;

    /// Feeds the next chunk.
    fn push(&mut self, chunk: &[u8]);

    /// Ends the stream and returns the result.
    fn finish(self) -> Self::Output;
}

impl Consume for BlockChecksum {
    type Output = u32;

    fn push(&mut self, chunk: &[u8]) {
        self.update(chunk);
    }

    fn finish(self) -> u32 {
        self.value()
    }
}

impl Consume for WordMatcher {
    type Output = u64;

    fn push(&mut self, chunk: &[u8]) {
        self.update(chunk);
    }

    fn finish(self) -> u64 {
        WordMatcher::finish(self)
    }
}

/// Counters gathered while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of chunks pulled from the source.
    pub chunks: u64,
    /// Total bytes consumed.
    pub bytes: u64,
}

/// Drains `source` into `consumer` and returns its output.
///
/// Stops at the first I/O error; the consumer's partial state is discarded.
pub fn scan<C: Consume>(
    source: &mut Source,
    mut consumer: C,
) -> Result<(C::Output, ScanSummary), ScanError> {
    let mut summary = ScanSummary::default();

    while let Some(chunk) = source.next_chunk()? {
        summary.chunks += 1;
        summary.bytes += chunk.len() as u64;
        consumer.push(&chunk);
    }

    debug!(
        source = source.kind(),
        chunks = summary.chunks,
        bytes = summary.bytes,
        "scan complete"
    );

    Ok((consumer.finish(), summary))
}

/// Result of a mode-selected scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Block checksum of the input.
    Checksum(u32),
    /// Whole-word occurrence count.
    Words(u64),
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanOutcome::Checksum(sum) => write!(f, "{}", sum),
            ScanOutcome::Words(count) => write!(f, "{}", count),
        }
    }
}

/// Scans `source` in `mode`.
///
/// `word` is required and must be non-empty for [`ScanMode::Words`]; it is
/// ignored for [`ScanMode::Checksum`]. The word is validated before the
/// source is read.
pub fn run(source: &mut Source, mode: ScanMode, word: Option<&[u8]>) -> Result<ScanOutcome, ScanError> {
    match mode {
        ScanMode::Checksum => {
            let (sum, _) = scan(source, BlockChecksum::new())?;
            Ok(ScanOutcome::Checksum(sum))
        }
        ScanMode::Words => {
            let matcher = WordMatcher::new(word.unwrap_or_default())?;
            let (count, _) = scan(source, matcher)?;
            Ok(ScanOutcome::Words(count))
        }
    }
}

/// Checksums `data` as a single chunk.
pub fn checksum_bytes(data: &[u8]) -> u32 {
    let mut sum = BlockChecksum::new();
    sum.update(data);
    sum.value()
}

/// Counts whole-word occurrences of `word` in `haystack`.
///
/// Returns [`ScanError::Config`] if `word` is empty.
pub fn count_occurrences(haystack: impl AsRef<[u8]>, word: impl AsRef<[u8]>) -> Result<u64, ScanError> {
    let mut matcher = WordMatcher::new(word)?;
    matcher.update(haystack.as_ref());
    Ok(matcher.finish())
}
