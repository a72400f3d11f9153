//! # zcount-core
//!
//! A library for counting zero-bytes in files and streams.
//!
//! Filesystem checkers usually replace lost data chunks with zero-bytes
//! (`0x00`), so a damaged file tends to carry an unusual number of them. This
//! crate counts those bytes and classifies each source against a threshold.
//!
//! ## Architecture
//!
//! - [`counter`]: the zero-byte counter over any [`std::io::BufRead`]
//! - [`limit`]: parsing of C-style integer limits (`10`, `012`, `0xa`)
//! - [`config`]: the per-run [`RunConfig`]
//! - [`report`]: classification, the exit-code [`Tally`] and report lines
//! - [`session`]: drives a whole run over files or stdin
//! - [`error`]: error types and handling
//!
//! ## Example
//!
//! ```no_run
//! use zcount_core::{RunConfig, Session, StreamSink};
//! use std::io;
//!
//! let config = RunConfig::new().verbosity(2).upper(4096);
//! let sink = StreamSink::new(io::stdout(), io::stderr());
//! let mut session = Session::new(config, sink);
//!
//! let flagged = session.run(&["disk.img", "backup.tar"], &mut io::stdin().lock());
//! session.finish()?;
//! println!("{flagged} suspicious file(s)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod config;
pub mod counter;
pub mod error;
pub mod limit;
pub mod report;
pub mod session;
pub mod source;

// Re-export primary types for convenience
pub use config::{RunConfig, DEFAULT_LOWER};
pub use counter::{count_zero_bytes, UNLIMITED};
pub use error::{Error, Result};
pub use limit::parse_limit;
pub use report::{Channel, ReportLine, ReportSink, StreamSink, Tally, Verdict};
pub use session::Session;
pub use source::Source;

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
