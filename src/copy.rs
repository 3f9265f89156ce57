//! The stream copier: chunked, binary-safe byte transfer.
//!
//! This module implements the one contract worth being precise about:
//! read a source in fixed-size chunks and write each chunk to the output
//! exactly, handling partial reads, partial writes, interrupted system
//! calls, and a downstream reader that closes the pipe early.
//!
//! # Behavior
//!
//! | Condition | Handling |
//! |-----------|----------|
//! | Partial write | Loop until the chunk is fully written |
//! | `EINTR` on read or write | Retry transparently |
//! | Broken pipe on write | Clean early success, [`CopyStats::pipe_closed`] set |
//! | Zero-byte write of a non-empty range | [`Error::Write`] (`WriteZero`) |
//! | Zero-byte read without error | End of input |
//!
//! No data transformation of any kind takes place: no line-ending
//! translation, no encoding assumptions, embedded NUL bytes pass through.

use crate::error::{Error, Result, is_broken_pipe, is_interrupted};
use crate::options::CopyOptions;
use std::io::{self, Read, Write};

/// Statistics from a single copy operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Bytes successfully handed to the writer.
    pub bytes_copied: u64,
    /// Whether the copy ended early because the downstream reader closed
    /// the pipe. This is a successful outcome, not an error.
    pub pipe_closed: bool,
}

/// Copy all bytes from `reader` to `writer`.
///
/// Reads successive chunks of up to `options.buffer_size` bytes and writes
/// each chunk in full before reading the next. The transfer buffer is
/// allocated once per invocation and reused across chunks; no state
/// persists between invocations.
///
/// `name` is the source's display name for diagnostics (a path, or
/// `stdin`).
///
/// # Errors
///
/// Returns [`Error::Read`] for a non-interrupted read failure and
/// [`Error::Write`] for a non-interrupted, non-broken-pipe write failure.
/// A broken pipe on write is not an error: the function returns `Ok` with
/// [`CopyStats::pipe_closed`] set and whatever bytes were transferred
/// counted.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use see::{CopyOptions, copy_stream};
///
/// let mut input = Cursor::new(b"hello".to_vec());
/// let mut output = Vec::new();
/// let stats = copy_stream(&mut input, &mut output, "input", &CopyOptions::default())?;
/// assert_eq!(output, b"hello");
/// assert_eq!(stats.bytes_copied, 5);
/// # Ok::<(), see::Error>(())
/// ```
pub fn copy_stream<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    name: &str,
    options: &CopyOptions,
) -> Result<CopyStats> {
    let mut buffer = vec![0u8; options.effective_buffer_size()];
    let mut stats = CopyStats::default();

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if is_interrupted(&e) => continue,
            Err(source) => {
                return Err(Error::Read {
                    name: name.to_owned(),
                    source,
                });
            }
        };

        let mut chunk_written = 0;
        while chunk_written < bytes_read {
            match writer.write(&buffer[chunk_written..bytes_read]) {
                Ok(0) => {
                    // The range is non-empty, so a zero-byte write means the
                    // writer can make no progress
                    return Err(Error::Write {
                        source: io::Error::new(
                            io::ErrorKind::WriteZero,
                            "writer accepted no bytes",
                        ),
                    });
                }
                Ok(n) => chunk_written += n,
                Err(e) if is_interrupted(&e) => continue,
                Err(e) if is_broken_pipe(&e) => {
                    stats.bytes_copied += chunk_written as u64;
                    stats.pipe_closed = true;
                    return Ok(stats);
                }
                Err(source) => return Err(Error::Write { source }),
            }
        }

        stats.bytes_copied += bytes_read as u64;

        #[cfg(feature = "tracing")]
        tracing::trace!(source = name, bytes = bytes_read, "chunk copied");
    }

    Ok(stats)
}
