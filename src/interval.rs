//! Timestamp parsing and interval computation.
//!
//! Both timestamps of a matched pair must conform to one fixed layout,
//! [`TIMESTAMP_LAYOUT`] (`%Y-%m-%d %H:%M:%S`): 24-hour clock, no timezone
//! offset, no sub-second precision. The computed interval is signed; a pair
//! in reverse order yields a negative interval rather than an error.
//!
//! ## Duration grammar
//!
//! [`Interval`] formats as one compact token string, largest applicable unit
//! down to seconds, with lower units zero-padded whenever a higher unit is
//! present:
//!
//! ```text
//! 0s   1s   59s   1m0s   59m59s   1h0m0s   25h0m1s   -1s   -2h3m4s
//! ```
//!
//! The grammar is deterministic: the same two instants always format to the
//! same string, so re-running the pipeline over already-augmented output
//! recomputes identical values.
//!
//! ## Examples
//!
//! ```rust
//! use durapend::Interval;
//!
//! let interval = Interval::between("2020-01-01 00:00:00", "2020-01-01 01:02:03").unwrap();
//! assert_eq!(interval.to_string(), "1h2m3s");
//! assert_eq!(interval.num_seconds(), 3723);
//! ```

use crate::error::{Error, Result};
use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// The one fixed timestamp layout accepted by the interval engine.
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// The signed elapsed time between two parsed instants.
///
/// # Examples
///
/// ```rust
/// use durapend::Interval;
///
/// let forward = Interval::between("2020-01-01 00:00:00", "2020-01-01 00:01:00").unwrap();
/// assert_eq!(forward.to_string(), "1m0s");
///
/// // Reversed pairs are returned as-is, not rejected.
/// let backward = Interval::between("2020-01-01 00:01:00", "2020-01-01 00:00:00").unwrap();
/// assert_eq!(backward.to_string(), "-1m0s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Interval(Duration);

impl Interval {
    /// Parses the two timestamps and computes `to - from`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timestamp`] when either string does not match
    /// [`TIMESTAMP_LAYOUT`].
    pub fn between(from: &str, to: &str) -> Result<Self> {
        let from = parse_timestamp(from)?;
        let to = parse_timestamp(to)?;
        Ok(Interval(to - from))
    }

    /// The interval's total length in whole seconds, signed.
    #[inline]
    #[must_use]
    pub fn num_seconds(&self) -> i64 {
        self.0.num_seconds()
    }
}

impl From<Duration> for Interval {
    fn from(duration: Duration) -> Self {
        Interval(duration)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.num_seconds();
        if total < 0 {
            f.write_str("-")?;
        }
        let total = total.unsigned_abs();
        let hours = total / 3600;
        let minutes = total % 3600 / 60;
        let seconds = total % 60;
        if hours > 0 {
            write!(f, "{}h{}m{}s", hours, minutes, seconds)
        } else if minutes > 0 {
            write!(f, "{}m{}s", minutes, seconds)
        } else {
            write!(f, "{}s", seconds)
        }
    }
}

fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, TIMESTAMP_LAYOUT).map_err(|e| {
        Error::timestamp(format!(
            "{:?} does not match layout {:?}: {}",
            input, TIMESTAMP_LAYOUT, e
        ))
    })
}
