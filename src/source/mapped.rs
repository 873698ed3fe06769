//! File-backed source that maps one block at a time.

#![allow(unsafe_code)]

use std::fs::{File, Metadata};
use std::path::{Path, PathBuf};

use memmap2::{Mmap, MmapOptions};
use tracing::{debug, trace};

use crate::chunk::Chunk;
use crate::config::ScanConfig;
use crate::error::ScanError;

/// Preferred I/O size used when the platform does not report one.
const FALLBACK_IO_SIZE: u64 = 4096;

/// A regular file read through a sliding memory map.
///
/// Each call to [`next_chunk`](MappedSource::next_chunk) drops the previous
/// mapping and maps the next `block_size` bytes at `cursor`. The final chunk
/// is shortened to the bytes that remain. Peak resident mapping is one block
/// regardless of file size.
#[derive(Debug)]
pub struct MappedSource {
    file: File,
    path: PathBuf,
    file_size: u64,
    block_size: u64,
    cursor: u64,
    current: Option<Mmap>,
    exhausted: bool,
}

impl MappedSource {
    /// Opens `path` read-only for block-wise mapping.
    pub fn open(path: impl AsRef<Path>, config: &ScanConfig) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
        let metadata = file.metadata().map_err(|e| ScanError::open(path, e))?;
        Self::from_file(file, path, &metadata, config)
    }

    pub(crate) fn from_file(
        file: File,
        path: &Path,
        metadata: &Metadata,
        config: &ScanConfig,
    ) -> Result<Self, ScanError> {
        config.validate()?;

        advise_sequential(&file);

        let file_size = metadata.len();
        let block_size = block_size_for(metadata, config.block_factor());

        debug!(
            path = %path.display(),
            file_size,
            block_size,
            "opened mapped source"
        );

        Ok(Self {
            file,
            path: path.to_path_buf(),
            file_size,
            block_size,
            cursor: 0,
            current: None,
            exhausted: false,
        })
    }

    /// Returns the next mapped block, or `None` at end of file.
    ///
    /// A failed map is reported once as [`ScanError::Io`]; the source is
    /// exhausted afterwards.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk<'_>>, ScanError> {
        // Unmap the previous block before mapping the next one.
        self.current = None;

        if self.exhausted || self.cursor >= self.file_size {
            self.exhausted = true;
            return Ok(None);
        }

        let len = self.block_size.min(self.file_size - self.cursor) as usize;

        // SAFETY: the file is opened read-only and the mapping is private to
        // this source. Truncation by another process while mapped is not
        // guarded against, as with any mmap-based reader.
        let map = unsafe {
            MmapOptions::new()
                .offset(self.cursor)
                .len(len)
                .map(&self.file)
        };

        let map = match map {
            Ok(map) => map,
            Err(e) => {
                self.exhausted = true;
                return Err(ScanError::Io(e));
            }
        };

        advise_mapping(&map);

        let offset = self.cursor;
        self.cursor += len as u64;
        trace!(offset, len, "mapped block");

        let map = self.current.insert(map);
        Ok(Some(Chunk::new(&map[..], offset)))
    }

    /// Returns the path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file size captured at open time.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Returns the number of bytes mapped per block.
    pub fn block_size(&self) -> u64 {
        self.block_size
    }

    /// Returns the offset of the next block to map.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Returns true once end of file has been returned.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Computes the block size: preferred I/O size times `factor`, rounded up to
/// a whole number of pages so every block offset is page-aligned.
fn block_size_for(metadata: &Metadata, factor: usize) -> u64 {
    let page = page_size();
    let raw = preferred_io_size(metadata).max(1) * factor as u64;
    raw.div_ceil(page) * page
}

#[cfg(unix)]
fn preferred_io_size(metadata: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    match metadata.blksize() {
        0 => FALLBACK_IO_SIZE,
        n => n,
    }
}

#[cfg(not(unix))]
fn preferred_io_size(_metadata: &Metadata) -> u64 {
    FALLBACK_IO_SIZE
}

#[cfg(unix)]
fn page_size() -> u64 {
    // SAFETY: sysconf has no preconditions.
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size > 0 { size as u64 } else { FALLBACK_IO_SIZE }
}

// Windows map offsets must be multiples of the allocation granularity.
#[cfg(not(unix))]
fn page_size() -> u64 {
    64 * 1024
}

#[cfg(target_os = "linux")]
fn advise_sequential(file: &File) {
    use std::os::fd::AsRawFd;

    // SAFETY: the descriptor is valid for the duration of the call. The call
    // is advisory only.
    let rc = unsafe { libc::posix_fadvise(file.as_raw_fd(), 0, 0, libc::POSIX_FADV_SEQUENTIAL) };
    if rc != 0 {
        tracing::warn!(
            error = %std::io::Error::from_raw_os_error(rc),
            "posix_fadvise(SEQUENTIAL) failed"
        );
    }
}

#[cfg(not(target_os = "linux"))]
fn advise_sequential(_file: &File) {}

#[cfg(unix)]
fn advise_mapping(map: &Mmap) {
    if let Err(e) = map.advise(memmap2::Advice::Sequential) {
        trace!(error = %e, "madvise(SEQUENTIAL) failed");
    }
}

#[cfg(not(unix))]
fn advise_mapping(_map: &Mmap) {}
