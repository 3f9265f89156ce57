//! Input sources and the per-path copy lifecycle.
//!
//! A [`Source`] is either standard input or an opened file. Its lifecycle
//! is open → copy → close, owned exclusively by the caller for its
//! duration. [`process_path`] runs the full lifecycle for one path and
//! hands every failure to a caller-supplied report callback, so a copy
//! failure and a close failure on the same path are both surfaced.

use crate::copy::{CopyStats, copy_stream};
use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// An input source: standard input or an opened file.
#[derive(Debug)]
pub enum Source {
    /// The process's standard input. Never opened, never closed.
    Stdin,
    /// An opened file, kept together with its path for diagnostics.
    File {
        /// Open read handle
        file: File,
        /// Path the handle was opened from
        path: PathBuf,
    },
}

impl Source {
    /// Open a source for reading.
    ///
    /// `None` and the literal `-` map to standard input; anything else is
    /// opened as a file path. Rust's std I/O performs no text-mode
    /// translation on any platform, so the handle is binary-safe as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] tagged with the path if the file cannot be
    /// opened; the copier is never invoked in that case.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            None => Ok(Self::Stdin),
            Some(p) if p.as_os_str() == "-" => Ok(Self::Stdin),
            Some(p) => match File::open(p) {
                Ok(file) => Ok(Self::File {
                    file,
                    path: p.to_path_buf(),
                }),
                Err(source) => Err(Error::Open {
                    path: p.to_path_buf(),
                    source,
                }),
            },
        }
    }

    /// Display name used in diagnostics: the path, or `stdin`.
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Stdin => Cow::Borrowed("stdin"),
            Self::File { path, .. } => path.to_string_lossy(),
        }
    }

    /// Copy the entire source to `writer`.
    pub fn copy_to<W: Write + ?Sized>(
        &mut self,
        writer: &mut W,
        options: &CopyOptions,
    ) -> Result<CopyStats> {
        let name = self.name().into_owned();
        match self {
            Self::Stdin => copy_stream(&mut io::stdin().lock(), writer, &name, options),
            Self::File { file, .. } => copy_stream(file, writer, &name, options),
        }
    }

    /// Release the source.
    ///
    /// Standard input is left alone. For a file, the close(2) result is
    /// surfaced: dropping a [`File`] would swallow it, and a failed close
    /// can mean buffered data never reached the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Close`] tagged with the path.
    pub fn close(self) -> Result<()> {
        match self {
            Self::Stdin => Ok(()),
            Self::File { file, path } => {
                close_file(file).map_err(|source| Error::Close { path, source })
            }
        }
    }
}

#[cfg(unix)]
fn close_file(file: File) -> io::Result<()> {
    use std::os::fd::IntoRawFd;

    let fd = file.into_raw_fd();
    // SAFETY: the fd was just detached from the File, so this is the only
    // owner and the only close
    if unsafe { libc::close(fd) } == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn close_file(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}

/// Process a single path (or standard input) end to end.
///
/// Runs open → copy → close and reports every failure through `report`.
/// The close is always attempted once the open succeeded, regardless of
/// the copy outcome, and its failure is reported independently.
///
/// Returns `true` if the path was processed without any error.
///
/// # Example
///
/// ```no_run
/// use std::io;
/// use see::{CopyOptions, process_path};
///
/// let mut stdout = io::stdout().lock();
/// let ok = process_path(None, &mut stdout, &CopyOptions::default(), |error| {
///     eprintln!("see: {error}");
/// });
/// assert!(ok);
/// ```
pub fn process_path<W, F>(
    path: Option<&Path>,
    writer: &mut W,
    options: &CopyOptions,
    mut report: F,
) -> bool
where
    W: Write + ?Sized,
    F: FnMut(&Error),
{
    let mut source = match Source::open(path) {
        Ok(source) => source,
        Err(error) => {
            report(&error);
            return false;
        }
    };

    let mut ok = true;
    if let Err(error) = source.copy_to(writer, options) {
        report(&error);
        ok = false;
    }
    if let Err(error) = source.close() {
        report(&error);
        ok = false;
    }
    ok
}
