//! # durapend
//!
//! Appends elapsed-duration fields to timestamp pairs in structured-text
//! documents.
//!
//! Given a JSON or YAML document, `durapend` finds every object node that
//! carries a configurable pair of timestamp fields (by default `created_at`
//! and `updated_at`), computes the elapsed interval between them, injects it
//! back into the node (by default under `duration`), and re-encodes the
//! document in its original format.
//!
//! ## Key Features
//!
//! - **Format-agnostic core**: one generic [`Value`] tree plus a two-method
//!   [`Format`] capability; JSON and YAML ship in the box, further formats
//!   are one trait impl away
//! - **Full-tree coverage**: every object node at every depth is inspected;
//!   a match never stops sibling or nested matches
//! - **Forgiving by design**: a missing key or an unparseable timestamp
//!   silently skips that one node, only malformed documents fail
//! - **Reproducible output**: both shipped formats encode object keys in
//!   lexicographic order, so output is deterministic and re-runs are
//!   idempotent
//!
//! ## Quick Start
//!
//! ```rust
//! use durapend::{append, Json, KeyFinder};
//!
//! let input = r#"[
//!   {
//!     "created_at": "2020-01-01 00:00:00",
//!     "updated_at": "2020-01-01 00:00:01"
//!   }
//! ]"#;
//!
//! let finder = KeyFinder::default();
//! let output = append(&finder, &Json, input).unwrap();
//! assert!(output.contains("\"duration\": \"1s\""));
//! ```
//!
//! ### Custom key names
//!
//! ```rust
//! use durapend::{append, KeyFinder, Yaml};
//!
//! let finder = KeyFinder::new("started", "finished", "elapsed");
//! let output = append(
//!     &finder,
//!     &Yaml,
//!     "started: 2020-01-01 00:00:00\nfinished: 2020-01-01 01:00:00\n",
//! )
//! .unwrap();
//! assert!(output.contains("elapsed: 1h0m0s"));
//! ```
//!
//! ## Timestamp layout
//!
//! Both sides of a pair must match one fixed layout,
//! [`TIMESTAMP_LAYOUT`] (`YYYY-MM-DD HH:MM:SS`, 24-hour, no timezone, no
//! sub-seconds). The computed interval is signed; reversed pairs yield a
//! negative duration rather than an error. See [`Interval`] for the exact
//! duration grammar.
//!
//! ## Error model
//!
//! - Malformed input aborts the call with [`Error::Decode`]; no partial
//!   output is ever returned
//! - A timestamp that fails to parse skips augmentation for that one node
//!   and the walk continues
//! - [`Error::Encode`] exists as a safety net but is not expected for trees
//!   built by this crate's own decode path

pub mod augment;
pub mod error;
pub mod finder;
pub mod format;
pub mod interval;
pub mod macros;
pub mod map;
pub mod value;

pub use augment::augment;
pub use error::{Error, Result};
pub use finder::{
    KeyFinder, MatchedPair, DEFAULT_FROM_KEY, DEFAULT_RESULT_KEY, DEFAULT_TO_KEY,
};
pub use format::{Format, Json, Yaml};
pub use interval::{Interval, TIMESTAMP_LAYOUT};
pub use map::Map;
pub use value::{Number, Value};

/// Runs the whole pipeline for one document: decode, augment, re-encode.
///
/// The same `finder` and `format` are plain immutable values and safe to
/// reuse across any number of calls, including concurrently; each call owns
/// its document tree for the duration of the call.
///
/// # Examples
///
/// ```rust
/// use durapend::{append, Json, KeyFinder};
///
/// let finder = KeyFinder::default();
/// let output = append(
///     &finder,
///     &Json,
///     r#"{"created_at": "2020-01-01 00:00:00", "updated_at": "2020-01-01 00:02:00"}"#,
/// )
/// .unwrap();
/// assert!(output.contains("\"duration\": \"2m0s\""));
/// ```
///
/// # Errors
///
/// Returns [`Error::Decode`] when the input is not well-formed in the given
/// format, and [`Error::Encode`] if the augmented tree cannot be re-encoded
/// (not expected in normal operation). Timestamp parse failures inside the
/// tree are absorbed, never surfaced here.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn append<F>(finder: &KeyFinder, format: &F, input: &str) -> Result<String>
where
    F: Format + ?Sized,
{
    let mut value = format.decode(input)?;
    augment(&mut value, finder);
    format.encode(&value)
}
