//! textcodex CLI: validate, convert, and measure text between Latin-1,
//! UTF-8, UTF-16 (LE/BE), and UTF-32.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use textcodex::{convert, length, validate, Backend, EncodingTag, ErrorKind, Policy};

#[derive(Debug, Parser)]
#[command(name = "textcodex")]
#[command(about = "Validate, measure, and convert between text encodings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that a file is well-formed in a given encoding
    Validate(ValidateArgs),
    /// Convert a file from one encoding to another
    Convert(ConvertArgs),
    /// Report how many code units the converted form would need
    Length(LengthArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EncodingArg {
    Latin1,
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32,
}

impl From<EncodingArg> for EncodingTag {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Latin1 => EncodingTag::Latin1,
            EncodingArg::Utf8 => EncodingTag::Utf8,
            EncodingArg::Utf16Le => EncodingTag::Utf16Le,
            EncodingArg::Utf16Be => EncodingTag::Utf16Be,
            EncodingArg::Utf32 => EncodingTag::Utf32,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum BackendArg {
    Scalar,
    Vector,
    #[default]
    Auto,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Scalar => Backend::Scalar,
            BackendArg::Vector => Backend::Vector,
            BackendArg::Auto => Backend::Auto,
        }
    }
}

/// Validate a file for well-formedness in a given encoding.
#[derive(Debug, Parser)]
struct ValidateArgs {
    /// File to validate (reads from stdin if omitted)
    file: Option<PathBuf>,

    /// Encoding the input is claimed to be
    #[arg(short, long)]
    encoding: EncodingArg,

    /// Backend to validate with
    #[arg(short, long, default_value = "auto")]
    backend: BackendArg,

    /// Exit code only, no diagnostic output
    #[arg(short, long)]
    quiet: bool,
}

/// Convert a file from one encoding to another.
#[derive(Debug, Parser)]
struct ConvertArgs {
    /// File to convert (reads from stdin if omitted)
    file: Option<PathBuf>,

    /// Encoding the input is in
    #[arg(long = "from")]
    from: EncodingArg,

    /// Encoding to produce
    #[arg(long = "to")]
    to: EncodingArg,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Report the code-unit length `--to` would need for already-valid input.
#[derive(Debug, Parser)]
struct LengthArgs {
    /// File to measure (reads from stdin if omitted)
    file: Option<PathBuf>,

    #[arg(long = "from")]
    from: EncodingArg,

    #[arg(long = "to")]
    to: EncodingArg,
}

mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INVALID: i32 = 1;
    pub const IO_ERROR: i32 = 2;
}

fn read_input(file: &Option<PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// A short piece of advice for each error kind, printed alongside the
/// diagnostic.
fn hint(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::None => None,
        ErrorKind::TooShort => Some("input ended mid code point"),
        ErrorKind::TooLong => Some("stray continuation byte where a lead byte was expected"),
        ErrorKind::TooLarge => Some("code point or declared sequence length out of range"),
        ErrorKind::Overlong => Some("use the shortest encoding for this code point"),
        ErrorKind::Surrogate => Some("U+D800..=U+DFFF are reserved for UTF-16 surrogate halves"),
        ErrorKind::HeaderBits => Some("lead byte's header bits do not match any valid form"),
    }
}

fn run_validate(args: ValidateArgs) -> Result<i32> {
    let input = read_input(&args.file)?;
    let result = validate(args.encoding.into(), &input, args.backend.into());

    if result.is_ok() {
        if !args.quiet {
            println!("ok: {} code units", result.input_consumed);
        }
        return Ok(exit_codes::SUCCESS);
    }

    if !args.quiet {
        eprint!(
            "error: {} at code unit {}",
            result.error, result.input_consumed
        );
        if let Some(h) = hint(result.error) {
            eprint!(" ({h})");
        }
        eprintln!();
    }
    Ok(exit_codes::INVALID)
}

fn run_convert(args: ConvertArgs) -> Result<i32> {
    let input = read_input(&args.file)?;
    let from: EncodingTag = args.from.into();
    let to: EncodingTag = args.to.into();

    let unit_count = length(from, to, &input);
    let mut output = vec![0u8; unit_count * to.unit_bytes()];
    let result = convert(from, to, Policy::Default, &input, &mut output);

    if !result.is_ok() {
        eprintln!(
            "error: {} at code unit {} ({} code units written)",
            result.error, result.input_consumed, result.output_written
        );
        return Ok(exit_codes::INVALID);
    }

    let bytes = &output[..result.output_written * to.unit_bytes()];
    match args.output {
        Some(path) => {
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            io::stdout()
                .write_all(bytes)
                .context("failed to write to stdout")?;
        }
    }
    Ok(exit_codes::SUCCESS)
}

fn run_length(args: LengthArgs) -> Result<i32> {
    let input = read_input(&args.file)?;
    let units = length(args.from.into(), args.to.into(), &input);
    println!("{units}");
    Ok(exit_codes::SUCCESS)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Convert(args) => run_convert(args),
        Command::Length(args) => run_length(args),
    };

    match code {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(exit_codes::IO_ERROR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_is_none_for_no_error() {
        assert!(hint(ErrorKind::None).is_none());
    }

    #[test]
    fn hint_present_for_every_error_kind() {
        for kind in [
            ErrorKind::TooShort,
            ErrorKind::TooLong,
            ErrorKind::TooLarge,
            ErrorKind::Overlong,
            ErrorKind::Surrogate,
            ErrorKind::HeaderBits,
        ] {
            assert!(hint(kind).is_some());
        }
    }
}
