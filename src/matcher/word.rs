//! Boundary-aware whole-word matcher.
//!
//! # Algorithm
//!
//! The matcher runs a KMP automaton over the input one byte at a time, so the
//! total work is linear in the input and independent of how the input is
//! split into chunks. A completed match is only counted once the byte after
//! it arrives: at the start of the next step the matcher checks that the
//! byte before the occurrence (read from the history ring) and the incoming
//! byte are both boundaries.
//!
//! A counted occurrence restarts the automaton from the empty state, so
//! counted occurrences never overlap. An occurrence that fails the boundary
//! check folds back through the failure table instead, so a boundary-delimited
//! occurrence overlapping it is still found.
//!
//! The end of input is a boundary: [`WordMatcher::finish`] feeds
//! [`END_OF_STREAM`] once. The start of input is a boundary because unwritten
//! history slots read as `0`.

use crate::error::ScanError;

use super::boundary::{END_OF_STREAM, is_boundary};
use super::{FailureTable, History};

/// Counts whole-word occurrences of a fixed word in a byte stream.
///
/// # Example
///
/// ```
/// use scanrs::WordMatcher;
///
/// let mut matcher = WordMatcher::new("small")?;
/// matcher.update(b"small ssmall fi");
/// matcher.update(b"x small");
/// assert_eq!(matcher.finish(), 2);
/// # Ok::<(), scanrs::ScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WordMatcher {
    word: Box<[u8]>,
    failure: FailureTable,
    /// Longest prefix of `word` that is a suffix of the bytes fed so far.
    /// Equal to `word.len()` while a completed match awaits its trailing
    /// boundary check.
    matched: usize,
    history: History,
    count: u64,
}

impl WordMatcher {
    /// Creates a matcher for `word`.
    ///
    /// Returns [`ScanError::Config`] if `word` is empty.
    pub fn new(word: impl AsRef<[u8]>) -> Result<Self, ScanError> {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(ScanError::Config {
                message: "word must not be empty",
            });
        }

        Ok(Self {
            word: word.into(),
            failure: FailureTable::new(word),
            matched: 0,
            history: History::with_depth(word.len() + 1),
            count: 0,
        })
    }

    /// Feeds one byte through the automaton.
    #[inline]
    pub fn step(&mut self, byte: u8) {
        let len = self.word.len();

        if self.matched == len {
            let before = self.history.back(len + 1);
            if is_boundary(before) && is_boundary(byte) {
                self.count += 1;
                self.matched = 0;
            } else {
                self.matched = self.failure.fallback(self.matched);
            }
        }

        while self.matched > 0 && self.word[self.matched] != byte {
            self.matched = self.failure.fallback(self.matched);
        }

        if self.word[self.matched] == byte {
            self.matched += 1;
        }

        self.history.put(byte);
    }

    /// Feeds a chunk of bytes.
    pub fn update(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            self.step(byte);
        }
    }

    /// Flushes a match ending at the last byte and returns the final count.
    pub fn finish(mut self) -> u64 {
        self.step(END_OF_STREAM);
        self.count
    }

    /// Returns occurrences counted so far.
    ///
    /// A match ending at the most recent byte is not included until another
    /// byte or [`finish`](WordMatcher::finish) confirms its trailing boundary.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns true if a completed match is waiting for its trailing byte.
    pub fn has_pending_match(&self) -> bool {
        self.matched == self.word.len()
    }

    /// Returns the target word.
    pub fn word(&self) -> &[u8] {
        &self.word
    }

    /// Resets the matcher for a new stream.
    pub fn reset(&mut self) {
        self.matched = 0;
        self.count = 0;
        self.history.clear();
    }
}
