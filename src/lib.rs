//! scanrs
//!
//! Single-pass streaming scanner for Rust.
//!
//! `scanrs` reads a file or stream exactly once in bounded memory and computes
//! one of:
//!
//! - a 32-bit block checksum (wrapping sum of native 4-byte words)
//! - the number of whole-word occurrences of a target word
//!
//! The crate intentionally:
//! - does NOT load the input into memory
//! - does NOT use threads or async I/O
//! - does NOT segment Unicode words (boundaries are a fixed ASCII set)
//! - does NOT provide collision-resistant hashing
//!
//! It only does one thing: **Read bytes once → scalar result**
//!
//! # Checksum
//!
//! ```no_run
//! use scanrs::{BlockChecksum, ScanConfig, ScanError, Source, scan};
//!
//! fn main() -> Result<(), ScanError> {
//!     let mut source = Source::open("data.bin", &ScanConfig::default())?;
//!     let (sum, _) = scan(&mut source, BlockChecksum::new())?;
//!     println!("{}", sum);
//!     Ok(())
//! }
//! ```
//!
//! # Word count
//!
//! ```
//! use scanrs::count_occurrences;
//!
//! assert_eq!(count_occurrences("small ssmall fix small", "small")?, 2);
//! # Ok::<(), scanrs::ScanError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod checksum;
mod chunk;
mod config;
mod error;
mod matcher;
mod scanner;
mod source;

//
// Public surface (intentionally tiny)
//

pub use checksum::BlockChecksum;
pub use chunk::Chunk;
pub use config::{DEFAULT_BLOCK_FACTOR, DEFAULT_STREAM_CAPACITY, ScanConfig, ScanMode};
pub use error::ScanError;
pub use matcher::{BOUNDARY_BYTES, END_OF_STREAM, WordMatcher, is_boundary};
pub use scanner::{
    Consume, ScanOutcome, ScanSummary, checksum_bytes, count_occurrences, run, scan,
};
pub use source::{DynReader, MappedSource, STDIN_PATH, Source, StreamSource};
