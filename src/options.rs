//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for configuring the stream copier.
//! There is intentionally little to configure: the tool's contract is a
//! byte-identical copy, so the only knobs are performance-related.
//!
//! # Example
//!
//! ```
//! use see::CopyOptions;
//!
//! let options = CopyOptions::default().with_buffer_size(1 << 20);
//! ```

/// Default transfer buffer capacity: 64 KiB.
///
/// Large enough to amortize syscall overhead on regular files and pipes,
/// small enough to stay cache-friendly.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Options for copy operations.
///
/// Use [`Default::default()`] to get the standard configuration, then
/// customize with the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `buffer_size` | 64 KiB | Transfer buffer capacity per copy invocation |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    /// Capacity of the transfer buffer, in bytes.
    ///
    /// The buffer is allocated once per copy invocation and reused across
    /// chunks. A zero value is treated as one byte.
    pub buffer_size: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl CopyOptions {
    /// Set the transfer buffer capacity.
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Buffer capacity clamped to at least one byte.
    ///
    /// A zero-sized buffer would turn every read into a spurious EOF.
    pub(crate) fn effective_buffer_size(&self) -> usize {
        self.buffer_size.max(1)
    }
}
