//! Error types for see.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while concatenating sources, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Lifecycle | [`Error::Open`], [`Error::Close`] |
//! | Transfer | [`Error::Read`], [`Error::Write`] |
//! | Drain | [`Error::Flush`] |
//!
//! Broken pipe on output is deliberately absent: a downstream reader that
//! closes early is an expected, successful termination of a copy, not an
//! error (see [`crate::CopyStats::pipe_closed`]).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for see operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error means the downstream reader closed the pipe.
///
/// Broken pipe is the one write failure that is not a failure for a
/// concatenation tool: `see big.bin | head` closing its end is normal.
///
/// # Example
///
/// ```
/// use std::io;
/// use see::is_broken_pipe;
///
/// let error = io::Error::from(io::ErrorKind::BrokenPipe);
/// assert!(is_broken_pipe(&error));
/// ```
pub fn is_broken_pipe(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::BrokenPipe {
        return true;
    }

    #[cfg(unix)]
    {
        // EPIPE can surface with a generic kind when it comes back through
        // a flush of a buffered writer
        if let Some(raw_error) = error.raw_os_error() {
            return raw_error == libc::EPIPE;
        }
    }

    false
}

/// Check if an IO error is an interrupted system call (`EINTR`).
///
/// Interrupted reads, writes, and flushes are retried transparently and
/// never surface as user-visible errors.
#[inline]
pub fn is_interrupted(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::Interrupted
}

/// Errors that can occur while concatenating sources.
///
/// Every variant carries the path or stream name it applies to, so a
/// diagnostic can be produced without further context. All variants are
/// recoverable at the process level: the driver reports them and keeps
/// going with the remaining arguments.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A path could not be opened for reading
    #[error("{path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// A non-interrupted failure reading a source
    #[error("{name}: read error: {source}")]
    Read {
        /// Display name of the source (path or `stdin`)
        name: String,
        /// Underlying error
        source: io::Error,
    },

    /// A non-interrupted, non-broken-pipe failure writing output
    #[error("write error: {source}")]
    Write {
        /// Underlying error
        source: io::Error,
    },

    /// A file handle could not be released cleanly
    ///
    /// A close failure marks the path as failed even when the copy itself
    /// succeeded: data buffered in the kernel may not have reached the
    /// file's backing store.
    #[error("{path}: close error: {source}")]
    Close {
        /// Path whose handle failed to close
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Buffered output could not be flushed (broken pipe excluded)
    #[error("flush error on {stream}: {source}")]
    Flush {
        /// Stream name (`stdout`)
        stream: &'static str,
        /// Underlying error
        source: io::Error,
    },
}

impl Error {
    /// The underlying IO error.
    pub fn io_source(&self) -> &io::Error {
        match self {
            Self::Open { source, .. }
            | Self::Read { source, .. }
            | Self::Write { source }
            | Self::Close { source, .. }
            | Self::Flush { source, .. } => source,
        }
    }
}
