//! One-shot preparation of the standard streams for raw binary transfer.
//!
//! Everything platform-specific about the process's I/O environment is
//! collapsed into [`prepare`], invoked once at startup. The copy logic
//! itself is platform-independent.

/// Prepare standard input/output for binary transfer.
///
/// - Unix: set `SIGPIPE` to ignore, so a downstream reader closing the
///   pipe is observed as an `EPIPE` write error instead of killing the
///   process. The Rust runtime already does this before `main`; the
///   explicit call keeps the guarantee for non-Rust entry points.
/// - Windows: switch the console output code page to UTF-8 so non-ASCII
///   bytes render where the console supports it.
///
/// Rust's std streams never perform newline translation, so no binary-mode
/// toggle is needed on any platform. Calling this more than once is
/// harmless.
pub fn prepare() {
    #[cfg(unix)]
    {
        // SAFETY: SIG_IGN is a valid disposition for SIGPIPE and this
        // races with nothing at startup
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_IGN);
        }
    }

    #[cfg(windows)]
    {
        use windows::Win32::System::Console::SetConsoleOutputCP;

        // 65001 = CP_UTF8. Best effort: a console-less process has no
        // code page to set.
        // SAFETY: no pointers involved, the call only touches console state
        let _ = unsafe { SetConsoleOutputCP(65001) };
    }
}
