//! Key-pair matching configuration.
//!
//! A [`KeyFinder`] holds the names of the two timestamp fields to look for
//! in every object node and the name of the field the computed duration is
//! written under. It is constructed once and reused across any number of
//! [`append`](crate::append) calls; matching is a pure function of the node
//! and the configuration.
//!
//! ## Examples
//!
//! ```rust
//! use durapend::KeyFinder;
//!
//! // Empty strings fall back to the documented defaults.
//! let finder = KeyFinder::new("", "", "");
//! assert_eq!(finder.from_key(), "created_at");
//! assert_eq!(finder.to_key(), "updated_at");
//! assert_eq!(finder.result_key(), "duration");
//!
//! let custom = KeyFinder::new("started", "finished", "elapsed");
//! assert_eq!(custom.result_key(), "elapsed");
//! ```

use crate::Map;

/// Default name of the field holding the start timestamp.
pub const DEFAULT_FROM_KEY: &str = "created_at";

/// Default name of the field holding the end timestamp.
pub const DEFAULT_TO_KEY: &str = "updated_at";

/// Default name of the field the computed duration is written under.
pub const DEFAULT_RESULT_KEY: &str = "duration";

/// Immutable lookup configuration: the two timestamp key names and the
/// result key name.
///
/// Stateless between calls; a single `KeyFinder` is safe to share across
/// threads and reuse for any number of documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFinder {
    from_key: String,
    to_key: String,
    result_key: String,
}

/// The two string scalars found under the configured keys within one object
/// node. Borrowed from the node; exists only while that node is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPair<'a> {
    /// Value found under the from-key.
    pub from: &'a str,
    /// Value found under the to-key.
    pub to: &'a str,
}

impl KeyFinder {
    /// Creates a `KeyFinder` from the three configured key names.
    ///
    /// Any empty string falls back to the matching default:
    /// [`DEFAULT_FROM_KEY`], [`DEFAULT_TO_KEY`], [`DEFAULT_RESULT_KEY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use durapend::KeyFinder;
    ///
    /// let finder = KeyFinder::new("start", "", "");
    /// assert_eq!(finder.from_key(), "start");
    /// assert_eq!(finder.to_key(), "updated_at");
    /// ```
    #[must_use]
    pub fn new(
        from_key: impl Into<String>,
        to_key: impl Into<String>,
        result_key: impl Into<String>,
    ) -> Self {
        KeyFinder {
            from_key: non_empty_or(from_key.into(), DEFAULT_FROM_KEY),
            to_key: non_empty_or(to_key.into(), DEFAULT_TO_KEY),
            result_key: non_empty_or(result_key.into(), DEFAULT_RESULT_KEY),
        }
    }

    /// Name of the field holding the start timestamp.
    #[inline]
    #[must_use]
    pub fn from_key(&self) -> &str {
        &self.from_key
    }

    /// Name of the field holding the end timestamp.
    #[inline]
    #[must_use]
    pub fn to_key(&self) -> &str {
        &self.to_key
    }

    /// Name of the field the computed duration is written under.
    #[inline]
    #[must_use]
    pub fn result_key(&self) -> &str {
        &self.result_key
    }

    /// Looks for the configured key pair in one object node.
    ///
    /// Returns a [`MatchedPair`] only when both keys are present and both
    /// values are string scalars. Anything else is the normal "no match at
    /// this node" outcome, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use durapend::{KeyFinder, Map, Value};
    ///
    /// let mut node = Map::new();
    /// node.insert("created_at".to_string(), Value::from("2020-01-01 00:00:00"));
    /// node.insert("updated_at".to_string(), Value::from("2020-01-01 00:00:01"));
    ///
    /// let finder = KeyFinder::default();
    /// let pair = finder.find_pair(&node).unwrap();
    /// assert_eq!(pair.from, "2020-01-01 00:00:00");
    /// assert_eq!(pair.to, "2020-01-01 00:00:01");
    /// ```
    #[must_use]
    pub fn find_pair<'a>(&self, node: &'a Map) -> Option<MatchedPair<'a>> {
        let from = node.get(&self.from_key)?.as_str()?;
        let to = node.get(&self.to_key)?.as_str()?;
        Some(MatchedPair { from, to })
    }
}

impl Default for KeyFinder {
    fn default() -> Self {
        KeyFinder::new("", "", "")
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
