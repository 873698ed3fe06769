//! Configuration for scanning behavior.
//!
//! - [`ScanConfig`] - I/O tuning knobs for the input sources
//! - [`ScanMode`] - Which consumer a scan feeds
//!
//! # Example
//!
//! ```
//! use scanrs::ScanConfig;
//!
//! // Custom sizes
//! let config = ScanConfig::new(16, 64 * 1024)?;
//!
//! // Builder pattern
//! let config = ScanConfig::default().with_block_factor(4);
//! assert!(config.validate().is_ok());
//!
//! # Ok::<(), scanrs::ScanError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ScanError;

/// Default multiplier applied to the preferred I/O size of a mapped file.
pub const DEFAULT_BLOCK_FACTOR: usize = 10;

/// Default capacity of the stream-backed read buffer (8 KiB).
pub const DEFAULT_STREAM_CAPACITY: usize = 8 * 1024;

/// Width of a checksum word in bytes.
pub(crate) const WORD_BYTES: usize = 4;

/// I/O configuration for the input sources.
///
/// The file-backed source maps `preferred I/O size * block_factor` bytes per
/// chunk, rounded up to whole OS pages. The stream-backed source reads into a
/// buffer of `stream_capacity` bytes, which must be a multiple of 4 so that
/// every chunk but the last holds whole checksum words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanConfig {
    block_factor: usize,
    stream_capacity: usize,
}

impl ScanConfig {
    /// Creates a new configuration.
    ///
    /// Returns error if either value is zero or `stream_capacity` is not a
    /// multiple of 4.
    pub fn new(block_factor: usize, stream_capacity: usize) -> Result<Self, ScanError> {
        if block_factor == 0 {
            return Err(ScanError::Config {
                message: "block factor must be non-zero",
            });
        }

        if stream_capacity == 0 {
            return Err(ScanError::Config {
                message: "stream capacity must be non-zero",
            });
        }

        if stream_capacity % WORD_BYTES != 0 {
            return Err(ScanError::Config {
                message: "stream capacity must be a multiple of 4",
            });
        }

        Ok(Self {
            block_factor,
            stream_capacity,
        })
    }

    /// Sets the block factor.
    ///
    /// Note: This does not validate the configuration. Use [`ScanConfig::validate`].
    pub fn with_block_factor(mut self, factor: usize) -> Self {
        self.block_factor = factor;
        self
    }

    /// Sets the stream buffer capacity.
    ///
    /// Note: This does not validate the configuration. Use [`ScanConfig::validate`].
    pub fn with_stream_capacity(mut self, capacity: usize) -> Self {
        self.stream_capacity = capacity;
        self
    }

    /// Returns the block factor.
    pub fn block_factor(&self) -> usize {
        self.block_factor
    }

    /// Returns the stream buffer capacity.
    pub fn stream_capacity(&self) -> usize {
        self.stream_capacity
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), ScanError> {
        Self::new(self.block_factor, self.stream_capacity).map(|_| ())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            block_factor: DEFAULT_BLOCK_FACTOR,
            stream_capacity: DEFAULT_STREAM_CAPACITY,
        }
    }
}

/// What a scan computes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// 32-bit block checksum of the whole input.
    #[default]
    Checksum,
    /// Count of whole-word occurrences of a target word.
    Words,
}

impl ScanMode {
    /// Returns the name used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScanMode::Checksum => "checksum",
            ScanMode::Words => "words",
        }
    }
}

impl FromStr for ScanMode {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checksum" => Ok(ScanMode::Checksum),
            "words" => Ok(ScanMode::Words),
            _ => Err(ScanError::Config {
                message: "unsupported mode, expected 'checksum' or 'words'",
            }),
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
