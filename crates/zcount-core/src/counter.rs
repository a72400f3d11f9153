//! Zero-byte counting over buffered byte streams.
//!
//! The counter walks the reader's internal buffer directly instead of copying
//! bytes out of it. When the cap is reached only the bytes up to and including
//! the capping zero-byte are consumed, so whatever follows stays in the stream.

use std::io::{self, BufRead};
use tracing::trace;

/// Sentinel cap meaning "count every zero-byte"
pub const UNLIMITED: u64 = 0;

/// Count the zero-bytes in `reader`, stopping once `cap` of them were seen.
///
/// A `cap` of [`UNLIMITED`] counts up to `u64::MAX`. The reader is neither
/// rewound nor closed.
///
/// # Errors
///
/// Returns any read error other than [`io::ErrorKind::Interrupted`], which is
/// retried.
pub fn count_zero_bytes<R: BufRead + ?Sized>(reader: &mut R, cap: u64) -> io::Result<u64> {
    let cap = if cap == UNLIMITED { u64::MAX } else { cap };
    let mut zeros: u64 = 0;
    let mut inspected: u64 = 0;

    while zeros < cap {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = buf.len();
        for (i, _) in buf.iter().enumerate().filter(|&(_, &b)| b == 0) {
            zeros += 1;
            if zeros == cap {
                used = i + 1;
                break;
            }
        }

        inspected += used as u64;
        reader.consume(used);
    }

    trace!(zeros, inspected, capped = zeros == cap, "count finished");
    Ok(zeros)
}
