//! Classification of counted sources and the report lines they produce.
//!
//! | verbosity | below threshold              | at/above threshold               |
//! |-----------|------------------------------|----------------------------------|
//! | 0         | -                            | -                                |
//! | 1         | -                            | stderr: `... seems corrupted ...` |
//! | 2+        | stdout: `... counted`        | stderr: `... seems corrupted ...` |

use crate::config::RunConfig;
use crate::source::Source;
use std::fmt;
use std::io::{self, Write};

/// Outcome of comparing a zero-byte count with the effective threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Fewer zero-bytes than the threshold
    Clean,
    /// At least as many zero-bytes as the threshold
    Corrupted,
}

impl Verdict {
    /// Classifies `zeros` against the clamped threshold of `config`
    pub fn classify(config: &RunConfig, zeros: u64) -> Self {
        if zeros >= config.effective_lower() {
            Self::Corrupted
        } else {
            Self::Clean
        }
    }
}

/// Running count of flagged sources, which becomes the exit code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    flagged: i32,
}

impl Tally {
    /// Creates an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one counted source.
    ///
    /// Any source with at least one zero-byte is flagged; the count saturates
    /// at `i32::MAX`.
    pub fn record(&mut self, zeros: u64) {
        if zeros > 0 {
            self.flagged = self.flagged.saturating_add(1);
        }
    }

    /// Number of flagged sources so far
    pub fn flagged(&self) -> i32 {
        self.flagged
    }
}

/// Which stream a report line goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Standard output
    Out,
    /// Standard error
    Err,
}

/// A single line of per-source output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine<'a> {
    source: &'a Source,
    zeros: u64,
    verdict: Verdict,
}

impl<'a> ReportLine<'a> {
    /// Decides whether `source` produces a line at the configured verbosity
    pub fn for_source(
        config: &RunConfig,
        source: &'a Source,
        zeros: u64,
        verdict: Verdict,
    ) -> Option<Self> {
        let visible = match config.verbosity {
            0 => false,
            1 => verdict == Verdict::Corrupted,
            _ => true,
        };
        visible.then_some(Self {
            source,
            zeros,
            verdict,
        })
    }

    /// Stream this line is written to
    pub fn channel(&self) -> Channel {
        match self.verdict {
            Verdict::Clean => Channel::Out,
            Verdict::Corrupted => Channel::Err,
        }
    }
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zeros = self.zeros;
        match (self.source, self.verdict) {
            (Source::Stdin, Verdict::Clean) => {
                write!(f, "{zeros} zero-bytes in stdin counted")
            }
            (Source::Stdin, Verdict::Corrupted) => {
                write!(f, "data in stdin seems corrupted, {zeros} zero-bytes counted")
            }
            (Source::File(path), Verdict::Clean) => {
                write!(f, "{}: {zeros} zero-bytes counted", path.display())
            }
            (Source::File(path), Verdict::Corrupted) => {
                write!(f, "{}: seems corrupted, {zeros} zero-bytes counted", path.display())
            }
        }
    }
}

/// Destination for report lines.
///
/// The binary writes to the process's stdout and stderr; tests capture into
/// buffers.
pub trait ReportSink {
    /// Writes one complete line to `channel`
    fn emit(&mut self, channel: Channel, line: &dyn fmt::Display) -> io::Result<()>;
}

/// [`ReportSink`] over a pair of writers
#[derive(Debug)]
pub struct StreamSink<O, E> {
    /// Receives [`Channel::Out`] lines
    pub out: O,
    /// Receives [`Channel::Err`] lines
    pub err: E,
}

impl<O: Write, E: Write> StreamSink<O, E> {
    /// Creates a sink writing to `out` and `err`
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl<O: Write, E: Write> ReportSink for StreamSink<O, E> {
    fn emit(&mut self, channel: Channel, line: &dyn fmt::Display) -> io::Result<()> {
        match channel {
            Channel::Out => {
                writeln!(self.out, "{line}")?;
                self.out.flush()
            }
            Channel::Err => {
                writeln!(self.err, "{line}")?;
                self.err.flush()
            }
        }
    }
}
