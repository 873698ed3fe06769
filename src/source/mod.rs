//! Input sources that hand out one bounded chunk at a time.
//!
//! - [`MappedSource`] - Maps a regular file block by block
//! - [`StreamSource`] - Fills a fixed buffer from any [`std::io::Read`]
//! - [`Source`] - Closed sum of the two, selected from a path
//!
//! Every source is a forward-only lending sequence: `next_chunk()` returns a
//! [`Chunk`] borrowed from the source, `Ok(None)` at end of input, and keeps
//! returning `Ok(None)` once exhausted or after an I/O error.

mod mapped;
mod stream;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::chunk::Chunk;
use crate::config::ScanConfig;
use crate::error::ScanError;

pub use mapped::MappedSource;
pub use stream::StreamSource;

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// A reader erased behind a box, used for stdin and non-regular files.
pub type DynReader = Box<dyn Read>;

/// A byte source, either a mapped file or a buffered stream.
///
/// # Example
///
/// ```
/// use scanrs::{ScanConfig, Source};
///
/// let mut source = Source::from_reader(&b"some bytes"[..], &ScanConfig::default())?;
/// while let Some(chunk) = source.next_chunk()? {
///     assert_eq!(chunk.data(), b"some bytes");
/// }
/// assert!(source.next_chunk()?.is_none());
/// # Ok::<(), scanrs::ScanError>(())
/// ```
pub enum Source {
    /// Regular file read through memory maps.
    Mapped(MappedSource),
    /// Anything else, read through a fixed-capacity buffer.
    Stream(StreamSource<DynReader>),
}

impl Source {
    /// Opens `path` as a source.
    ///
    /// `-` selects standard input. Regular files are memory-mapped; other
    /// file types (pipes, character devices) are read as streams since they
    /// cannot be mapped and report no meaningful size.
    pub fn open(path: impl AsRef<Path>, config: &ScanConfig) -> Result<Self, ScanError> {
        let path = path.as_ref();
        if path.as_os_str() == STDIN_PATH {
            return Self::stdin(config);
        }

        let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
        let metadata = file.metadata().map_err(|e| ScanError::open(path, e))?;

        if metadata.is_file() {
            MappedSource::from_file(file, path, &metadata, config).map(Source::Mapped)
        } else {
            debug!(path = %path.display(), "not a regular file, reading as stream");
            Self::from_reader(file, config)
        }
    }

    /// Creates a stream source over standard input.
    pub fn stdin(config: &ScanConfig) -> Result<Self, ScanError> {
        Self::from_reader(io::stdin().lock(), config)
    }

    /// Creates a stream source over any reader.
    ///
    /// Returns [`ScanError::Config`] if `config` does not validate.
    pub fn from_reader(
        reader: impl Read + 'static,
        config: &ScanConfig,
    ) -> Result<Self, ScanError> {
        let reader: DynReader = Box::new(reader);
        StreamSource::new(reader, config).map(Source::Stream)
    }

    /// Returns the next chunk, or `None` at end of input.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk<'_>>, ScanError> {
        match self {
            Source::Mapped(s) => s.next_chunk(),
            Source::Stream(s) => s.next_chunk(),
        }
    }

    /// Returns true once the source has returned end of input.
    pub fn is_exhausted(&self) -> bool {
        match self {
            Source::Mapped(s) => s.is_exhausted(),
            Source::Stream(s) => s.is_exhausted(),
        }
    }

    /// Returns the variant name, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Source::Mapped(_) => "mapped",
            Source::Stream(_) => "stream",
        }
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Mapped(s) => f.debug_tuple("Mapped").field(s).finish(),
            Source::Stream(s) => f
                .debug_struct("Stream")
                .field("capacity", &s.capacity())
                .field("offset", &s.offset())
                .field("exhausted", &s.is_exhausted())
                .finish(),
        }
    }
}
