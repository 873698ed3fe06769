//! Error types for scanrs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or running a scan.
///
/// OS errors are exposed through [`std::error::Error::source`] rather than
/// repeated in the message; print the chain to see them.
///
/// Only the input source is fallible once a scan has started. The checksum
/// and word matcher are total over any byte stream.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Invalid configuration or flag combination. Nothing was scanned.
    #[error("invalid config: {message}")]
    Config {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// The input could not be opened or inspected.
    #[error("cannot open file \"{}\"", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A read or map call failed mid-scan.
    #[error("io error")]
    Io(#[from] io::Error),
}

impl ScanError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Open {
            path: path.into(),
            source,
        }
    }
}
