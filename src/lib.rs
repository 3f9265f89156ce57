//! # see
//!
//! Binary-safe stream concatenation: the engine behind the `see` command.
//!
//! ## Core Features
//!
//! - **Byte-identical copying**: output bytes equal input bytes, in order,
//!   with no transformation of any kind
//! - **Binary safe**: no line-ending translation, no encoding assumptions,
//!   embedded NUL bytes pass through
//! - **Partial-write aware**: every chunk is drained even when the writer
//!   accepts fewer bytes than requested
//! - **Interrupt tolerant**: `EINTR` on read or write is retried
//!   transparently, never surfaced
//! - **Broken-pipe friendly**: a downstream reader closing early is a
//!   clean, silent, successful termination of the copy, not an error
//! - **Stdin aware**: `-` and an absent path both select standard input
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::io;
//! use std::path::Path;
//! use see::{CopyOptions, Source};
//!
//! see::stdio::prepare();
//!
//! let mut source = Source::open(Some(Path::new("notes.txt")))?;
//! let mut stdout = io::stdout().lock();
//! let stats = source.copy_to(&mut stdout, &CopyOptions::default())?;
//! source.close()?;
//!
//! eprintln!("{} bytes", stats.bytes_copied);
//! # Ok::<(), see::Error>(())
//! ```
//!
//! ## Per-path processing
//!
//! [`process_path`] runs the whole open → copy → close lifecycle for one
//! path and reports each failure independently, so a close failure is
//! still surfaced after a copy failure:
//!
//! ```no_run
//! use std::io;
//! use std::path::Path;
//! use see::{CopyOptions, process_path};
//!
//! let mut stdout = io::stdout().lock();
//! let ok = process_path(
//!     Some(Path::new("notes.txt")),
//!     &mut stdout,
//!     &CopyOptions::default(),
//!     |error| eprintln!("see: {error}"),
//! );
//! std::process::exit(if ok { 0 } else { 1 });
//! ```
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Trace-level copy progress with the tracing crate |
//! | `full` | Enable all optional features |

mod copy;
mod error;
mod options;
mod source;

pub mod stdio;

pub use copy::{CopyStats, copy_stream};
pub use error::{Error, Result, is_broken_pipe, is_interrupted};
pub use options::{CopyOptions, DEFAULT_BUFFER_SIZE};
pub use source::{Source, process_path};
