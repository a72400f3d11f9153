//! zcount - Count zero-bytes in files to detect corruption
//!
//! Lost data chunks are usually replaced by zero-bytes (0x00) by filesystem
//! checkers, so corrupted files stand out by a large number of them. The exit
//! status is the number of suspicious inputs, which makes the tool easy to use
//! from scripts.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use zcount_core::{parse_limit, ReportSink, RunConfig, Session, StreamSink};

/// Exit status for command line usage errors (sysexits.h `EX_USAGE`)
const EX_USAGE: i32 = 64;

const LONG_ABOUT: &str = "\
zcount -- A program for counting zero bytes in given files.

Principal use of this program is to detect corrupt files: Lost data chunks are \
usually replaced by zero-bytes (0x00) by the filesystem checkers. Thus, \
corrupted files are easily identified by a large number of zero-bytes.

If no input files are given on the command line, then stdin is used. The return \
code of the program is the number of files containing zero-bytes (at most \
INT_MAX). WARNING: By default no output is produced, as the program is intended \
to be used in a script. Set at least one '-v' for human readable output.";

/// Count zero-bytes in files to detect corruption
#[derive(Parser, Debug)]
#[command(name = "zcount")]
#[command(author, version, about, long_about = LONG_ABOUT)]
#[command(after_help = concat!("Report bugs to ", env!("CARGO_PKG_AUTHORS"), "."))]
struct Cli {
    /// Produce verbose output, multiple flags allowed
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Stop after counting NUMBER1 zero-bytes (0 = no limit)
    #[arg(short, long, value_name = "NUMBER1", default_value = "0", value_parser = limit_arg)]
    upper: u64,

    /// Consider a file damaged after counting at least NUMBER2 zero-bytes
    /// (if NUMBER2 > NUMBER1 then NUMBER1 is used for both limits)
    #[arg(short, long, value_name = "NUMBER2", default_value = "1", value_parser = limit_arg)]
    lower: u64,

    /// Files to scan; stdin is read when none are given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig::new()
            .verbosity(self.verbose)
            .upper(self.upper)
            .lower(self.lower)
    }
}

fn limit_arg(arg: &str) -> zcount_core::Result<u64> {
    parse_limit(arg)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => exit_on_parse_error(e),
    };

    // Report lines are program output; logs stay off unless asked for.
    let level = match cli.verbose {
        0..=2 => LevelFilter::OFF,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    process::exit(run(&cli));
}

/// Help and version go to stdout with status 0; anything else is a usage error.
fn exit_on_parse_error(e: clap::Error) -> ! {
    if !e.use_stderr() {
        e.exit();
    }
    let _ = e.print();
    eprintln!("Argument parsing has been terminated due to an error!");
    process::exit(EX_USAGE);
}

/// Scan every input and return the number of flagged sources.
///
/// A broken output stream is reported once on stderr; it never changes the
/// exit code.
fn run(cli: &Cli) -> i32 {
    let config = cli.run_config();
    debug!(
        "verbosity {}, upper {}, lower {} (effective {})",
        config.verbosity,
        config.upper,
        config.lower,
        config.effective_lower()
    );

    let sink = StreamSink::new(io::stdout().lock(), io::stderr().lock());
    let mut session = Session::new(config, sink);
    let flagged = session.run(cli.files.as_slice(), &mut io::stdin().lock());
    debug!("{} source(s) flagged", flagged);

    if let Err(e) = finish(session) {
        let _ = writeln!(io::stderr(), "zcount: {:#}", e);
    }
    flagged
}

fn finish<S: ReportSink>(session: Session<S>) -> Result<()> {
    session.finish().context("Failed to report results")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("zcount").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.run_config(), RunConfig::new());
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_verbosity_accumulates() {
        assert_eq!(parse(&["-v"]).unwrap().verbose, 1);
        assert_eq!(parse(&["-vv", "--verbose"]).unwrap().verbose, 3);
    }

    #[test]
    fn test_verbosity_saturates() {
        let flags = vec!["-v"; 300];
        assert_eq!(parse(&flags).unwrap().verbose, u8::MAX);
    }

    #[test]
    fn test_limits_accept_c_literals() {
        let cli = parse(&["-u", "0x20", "--lower=010"]).unwrap();
        assert_eq!(cli.upper, 32);
        assert_eq!(cli.lower, 8);
    }

    #[test]
    fn test_options_interleaved_with_files() {
        let cli = parse(&["a.img", "-u", "5", "b.img", "-l", "10", "-v"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.img"), PathBuf::from("b.img")]);
        let config = cli.run_config();
        assert_eq!(config.effective_lower(), 5);
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn test_invalid_upper_is_usage_error() {
        let err = parse(&["--upper=abc", "disk.img"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.use_stderr());
        assert!(err.to_string().contains("'abc' is not a non-negative integer"));
    }

    #[test]
    fn test_partial_number_rejected() {
        let err = parse(&["-l", "12abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_help_is_not_an_error_stream() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }
}
