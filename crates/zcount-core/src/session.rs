//! A single zcount run: scan every source in order, report, keep the tally.
//!
//! Per-source failures (a file that cannot be opened or read) are written to
//! the error channel and the run moves on. A failure to write a report line
//! mutes further output, but scanning and tallying continue so the exit code
//! stays the flagged count; [`Session::finish`] hands the write error back.

use crate::config::RunConfig;
use crate::counter::count_zero_bytes;
use crate::error::{Error, Result};
use crate::report::{Channel, ReportLine, ReportSink, Tally, Verdict};
use crate::source::Source;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Drives the scan of all sources of one invocation
#[derive(Debug)]
pub struct Session<S> {
    config: RunConfig,
    tally: Tally,
    sink: S,
    write_failure: Option<Error>,
}

impl<S: ReportSink> Session<S> {
    /// Creates a session reporting into `sink`
    pub fn new(config: RunConfig, sink: S) -> Self {
        Self {
            config,
            tally: Tally::new(),
            sink,
            write_failure: None,
        }
    }

    /// Scans `files` in order, or `stdin` when `files` is empty.
    ///
    /// Returns the exit code: the number of flagged sources.
    pub fn run<P: AsRef<Path>>(&mut self, files: &[P], stdin: &mut dyn BufRead) -> i32 {
        if files.is_empty() {
            debug!("no input files, reading stdin");
            self.scan_reader(&Source::Stdin, stdin);
        } else {
            for path in files {
                self.scan_path(path.as_ref());
            }
        }
        self.exit_code()
    }

    /// Opens, counts and reports a single file.
    ///
    /// Open and read failures are reported and yield `None`.
    pub fn scan_path(&mut self, path: &Path) -> Option<Verdict> {
        let source = Source::file(path);
        let counted = File::open(path)
            .map_err(|e| Error::open(path, e))
            .and_then(|file| {
                trace!("opened {}", source);
                let mut reader = BufReader::new(file);
                count_zero_bytes(&mut reader, self.config.upper)
                    .map_err(|e| Error::read(source.label(), e))
            });

        match counted {
            Ok(zeros) => Some(self.classify_and_report(&source, zeros)),
            Err(e) => {
                debug!("skipping {}: {}", source, e);
                self.emit(Channel::Err, &e);
                None
            }
        }
    }

    /// Counts and reports an already open stream.
    ///
    /// Read failures are reported and yield `None`.
    pub fn scan_reader(&mut self, source: &Source, reader: &mut dyn BufRead) -> Option<Verdict> {
        match count_zero_bytes(reader, self.config.upper) {
            Ok(zeros) => Some(self.classify_and_report(source, zeros)),
            Err(e) => {
                let err = Error::read(source.label(), e);
                debug!("skipping {}: {}", source, err);
                self.emit(Channel::Err, &err);
                None
            }
        }
    }

    /// Updates the tally for `zeros` and writes the line the verbosity asks for
    pub fn classify_and_report(&mut self, source: &Source, zeros: u64) -> Verdict {
        let verdict = Verdict::classify(&self.config, zeros);
        self.tally.record(zeros);

        debug!(
            "{}: {} zero-bytes, threshold {}, {:?}",
            source,
            zeros,
            self.config.effective_lower(),
            verdict
        );

        if let Some(line) = ReportLine::for_source(&self.config, source, zeros, verdict) {
            let channel = line.channel();
            self.emit(channel, &line);
        }
        verdict
    }

    /// Number of flagged sources so far
    pub fn exit_code(&self) -> i32 {
        self.tally.flagged()
    }

    /// Ends the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] for the first report line that could not be
    /// written; every line after it was dropped.
    pub fn finish(self) -> Result<()> {
        match self.write_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Consumes the session, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, channel: Channel, line: &dyn std::fmt::Display) {
        if self.write_failure.is_some() {
            return;
        }
        if let Err(e) = self.sink.emit(channel, line) {
            warn!("report output failed, muting further lines: {}", e);
            self.write_failure = Some(Error::Write(e));
        }
    }
}
