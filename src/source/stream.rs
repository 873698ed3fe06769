//! Stream-backed source that fills a fixed buffer per chunk.

use std::io::{ErrorKind, Read};

use tracing::trace;

use crate::chunk::Chunk;
use crate::config::ScanConfig;
use crate::error::ScanError;

/// A reader consumed through a fixed-capacity buffer.
///
/// Each chunk is filled completely before it is returned, looping over short
/// reads, so every chunk except the last is exactly `capacity` bytes. A read
/// returning zero bytes ends the stream. Read errors are returned, never
/// treated as end of input.
pub struct StreamSource<R> {
    reader: R,
    buffer: Vec<u8>,
    offset: u64,
    exhausted: bool,
}

impl<R: Read> StreamSource<R> {
    /// Creates a stream source with the configured buffer capacity.
    ///
    /// Returns [`ScanError::Config`] if `config` does not validate.
    pub fn new(reader: R, config: &ScanConfig) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Self::with_capacity(reader, config.stream_capacity()))
    }

    /// Creates a stream source with an explicit buffer capacity.
    ///
    /// A zero capacity is raised to one byte. The capacity is not checked for
    /// word alignment, so checksums over a capacity that is not a multiple of
    /// 4 depend on chunking.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buffer: vec![0u8; capacity.max(1)],
            offset: 0,
            exhausted: false,
        }
    }

    /// Returns the next filled buffer, or `None` once the reader hits EOF.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk<'_>>, ScanError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut filled = 0;
        while filled < self.buffer.len() {
            match self.reader.read(&mut self.buffer[filled..]) {
                Ok(0) => {
                    self.exhausted = true;
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.exhausted = true;
                    return Err(ScanError::Io(e));
                }
            }
        }

        if filled == 0 {
            return Ok(None);
        }

        let offset = self.offset;
        self.offset += filled as u64;
        trace!(offset, len = filled, "filled stream buffer");

        Ok(Some(Chunk::new(&self.buffer[..filled], offset)))
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of bytes yielded so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns true once end of input or an error has been seen.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Consumes the source and returns the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
