//! see - Concatenate files to standard output, byte for byte.
//!
//! A minimal, binary-safe `cat` powered by the see library crate.
//!
//! Usage:
//!   see [FILE]...
//!   see            (copy standard input)
//!   see -- -file   (treat a leading-dash argument as a file name)

use see::{CopyOptions, DEFAULT_BUFFER_SIZE, Error, is_broken_pipe, is_interrupted, process_path};
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

const PROG_NAME: &str = "see";

/// What an argument list asks for.
///
/// Help and version short-circuit everything: no path is processed and no
/// file I/O happens, even when file arguments are present.
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Version,
    /// Literal paths to concatenate, in argument order. Empty means
    /// standard input, exactly once.
    Paths(Vec<OsString>),
}

/// Scan the argument list.
///
/// `-h`/`--help` and `-v`/`--version` are recognized anywhere before a
/// `--` marker and win over all path processing. `--` ends option
/// recognition; everything after it is a literal path even if it starts
/// with `-`. Every other argument is a path (including `-`, the stdin
/// alias, which the path processor resolves).
fn parse_args(args: &[OsString]) -> Invocation {
    for arg in args {
        if arg == "--" {
            break;
        }
        if arg == "-h" || arg == "--help" {
            return Invocation::Help;
        }
        if arg == "-v" || arg == "--version" {
            return Invocation::Version;
        }
    }

    let mut paths = Vec::with_capacity(args.len());
    let mut literal = false;
    for arg in args {
        if !literal && arg == "--" {
            literal = true;
            continue;
        }
        paths.push(arg.clone());
    }
    Invocation::Paths(paths)
}

fn usage_text() -> String {
    format!(
        "Usage: {PROG_NAME} [OPTION]... [FILE]...\n\
         Concatenate FILE(s) to standard output.\n\
         With no FILE, or when FILE is -, read standard input.\n\
         \n  -h, --help     display this help and exit\
         \n  -v, --version  output version information and exit\
         \n  --             treat all following arguments as file names\n"
    )
}

fn main() -> ExitCode {
    see::stdio::prepare();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    match parse_args(&args) {
        Invocation::Help => {
            let _ = io::stdout().write_all(usage_text().as_bytes());
            ExitCode::SUCCESS
        }
        Invocation::Version => {
            let _ = writeln!(io::stdout(), "{PROG_NAME} {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Invocation::Paths(paths) => run(&paths),
    }
}

/// Process every path (or stdin), then drain buffered output.
///
/// Failures never halt processing of later paths; they are reported as
/// they happen and folded into the exit status by logical OR.
fn run(paths: &[OsString]) -> ExitCode {
    let options = CopyOptions::default();
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, io::stdout().lock());
    let mut failed = false;

    fn report(error: &Error) {
        // A diagnostic that cannot be delivered is dropped; a broken
        // stderr is caught by the final flush
        let _ = writeln!(io::stderr(), "{PROG_NAME}: {error}");
    }

    if paths.is_empty() {
        failed |= !process_path(None, &mut writer, &options, report);
    } else {
        for path in paths {
            failed |= !process_path(Some(Path::new(path)), &mut writer, &options, report);
        }
    }

    if let Some(error) = flush_stdout(&mut writer) {
        report(&error);
        failed = true;
    }
    if !flush_stderr() {
        // Nowhere left to print a message; the exit status carries it
        failed = true;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Flush buffered standard output.
///
/// Interrupted flushes are retried; broken pipe is not an error (`see
/// file | head` is expected usage). Anything else is returned for
/// reporting.
fn flush_stdout<W: Write>(writer: &mut W) -> Option<Error> {
    loop {
        return match writer.flush() {
            Ok(()) => None,
            Err(e) if is_interrupted(&e) => continue,
            Err(e) if is_broken_pipe(&e) => None,
            Err(source) => Some(Error::Flush {
                stream: "stdout",
                source,
            }),
        };
    }
}

/// Flush standard error, retrying on interruption.
///
/// Returns whether the flush succeeded. A failure here cannot be
/// reported, since stderr itself is the failing stream.
fn flush_stderr() -> bool {
    let mut stderr = io::stderr();
    loop {
        return match stderr.flush() {
            Ok(()) => true,
            Err(e) if is_interrupted(&e) => continue,
            Err(_) => false,
        };
    }
}
