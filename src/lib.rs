//! Passgen library crate
//!
//! This crate provides the core functionality for the `passgen` CLI. It is
//! organized into small modules: `alphabet` (character classes and
//! exclusion filtering), `generate` (secure sampling), `cli` (argument
//! surface and help text) and `error` (error taxonomy). The binary
//! `src/main.rs` calls `passgen_lib::run()` and exits with its status.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `run_from()` — same, over explicit arguments and output streams.
//! - `generate::generate()` — the password generator itself.

pub mod alphabet;
pub mod cli;
pub mod error;
pub mod generate;

use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::Cli;
use crate::error::Error;

/// Run the passgen CLI against the process arguments and standard streams.
///
/// Returns the process exit status: `0` on success or when help is shown,
/// `1` on any error.
///
/// ```no_run
/// std::process::exit(passgen_lib::run());
/// ```
pub fn run() -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_from(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock())
}

/// Run the CLI over `args` (program name first), writing results to `out`
/// and diagnostics to `err`.
///
/// Behavior summary:
/// - `-h`/`--help` anywhere prints help to `out` and returns 0.
/// - Unknown arguments print the error to `err`, help to `out`, and return 1.
/// - Any other argument, range or generation error goes to `err` and
///   returns 1. Nothing is written to `out` in that case.
/// - Otherwise the password and a newline go to `out` and 0 is returned.
pub fn run_from<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let result = execute(&args, out).and_then(|()| out.flush().map_err(Error::from));
    match result {
        Ok(()) => 0,
        Err(e) => {
            report(&e, out, err);
            e.exit_code()
        }
    }
}

fn execute(args: &[OsString], out: &mut dyn Write) -> Result<(), Error> {
    if cli::wants_help(args) {
        write!(out, "{}", cli::help())?;
        return Ok(());
    }

    let parsed = Cli::try_parse_from(args)?;

    let length = parsed.length()?;
    let exclude = parsed.exclude();
    log::debug!(
        "length {} with {} excluded chars",
        length.get(),
        exclude.chars().count()
    );

    let password = generate::generate(length.get(), exclude)?;
    writeln!(out, "{password}")?;
    Ok(())
}

fn report(e: &Error, out: &mut dyn Write, err: &mut dyn Write) {
    // Diagnostics are best effort; a closed stderr leaves only the status.
    let _ = match e {
        Error::Usage(usage) => write!(err, "{usage}"),
        other => writeln!(err, "error: {other}"),
    };
    if let Error::Usage(usage) = e
        && usage.kind() == ErrorKind::UnknownArgument
    {
        let _ = write!(out, "{}", cli::help()).and_then(|()| out.flush());
    }
}
