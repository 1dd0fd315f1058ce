//! Command-line driver for the REBOL lexical scanner.
//!
//! Reads a source file, scans it, and prints the resulting value tree (or
//! reports a [`rebol_syntax::ScanError`] and exits non-zero). `--next`,
//! `--only`, `--relax` mirror `ScanOptions`' three fields (§6); there is no
//! CLI-parsing crate in this dependency tree to reach for, so flags are
//! parsed by hand over `std::env::args()`.

use std::process::ExitCode;

use rebol_lexer::{scan_header, transcode};
use rebol_syntax::ScanOptions;

struct Args {
    path: String,
    options: ScanOptions,
}

fn parse_args() -> Result<Args, String> {
    let mut options = ScanOptions::new();
    let mut path = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--next" => options = options.next(true),
            "--only" => options = options.only(true),
            "--relax" => options = options.relax(true),
            "-h" | "--help" => return Err(usage()),
            other if other.starts_with('-') => return Err(format!("unrecognised flag: {other}\n{}", usage())),
            other => path = Some(other.to_string()),
        }
    }

    let path = path.ok_or_else(usage)?;
    Ok(Args { path, options })
}

fn usage() -> String {
    "usage: rebol-scan [--next] [--only] [--relax] <file>".to_string()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let source = match std::fs::read(&args.path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("rebol-scan: cannot read {}: {err}", args.path);
            return ExitCode::FAILURE;
        }
    };

    if let Some(offset) = scan_header(&source) {
        tracing::info!(offset, "script header found");
    }

    match transcode(&source, args.options) {
        Ok((values, position)) => {
            for value in &values {
                println!("{value}");
            }
            if position < source.len() {
                eprintln!("rebol-scan: stopped at byte {position} of {}", source.len());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
