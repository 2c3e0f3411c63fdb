//! Error types for document decoding, encoding, and timestamp parsing.
//!
//! ## Error Categories
//!
//! - **Decode Errors**: the input text is not a well-formed document under
//!   the selected format; fatal to the whole [`append`](crate::append) call
//! - **Encode Errors**: the augmented tree could not be re-encoded; a safety
//!   net rather than an expected condition, since every tree handed to
//!   `encode` was built by this crate's own decode path
//! - **Timestamp Errors**: a matched field pair did not conform to the fixed
//!   timestamp layout; local to one object node and absorbed by the tree
//!   walker, never surfaced through `append`
//!
//! ## Examples
//!
//! ```rust
//! use durapend::{append, Error, Json, KeyFinder};
//!
//! let finder = KeyFinder::default();
//! let result = append(&finder, &Json, "not json");
//! assert!(matches!(result, Err(Error::Decode(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while appending durations to a document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input text is not well-formed under the selected format.
    #[error("decode error: {0}")]
    Decode(String),

    /// The augmented value tree could not be re-encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// A string did not match the fixed timestamp layout.
    #[error("timestamp parse error: {0}")]
    Timestamp(String),
}

impl Error {
    /// Creates a decode error from any displayable cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use durapend::Error;
    ///
    /// let err = Error::decode("expected value at line 1 column 1");
    /// assert!(err.to_string().starts_with("decode error"));
    /// ```
    pub fn decode<T: fmt::Display>(msg: T) -> Self {
        Error::Decode(msg.to_string())
    }

    /// Creates an encode error from any displayable cause.
    pub fn encode<T: fmt::Display>(msg: T) -> Self {
        Error::Encode(msg.to_string())
    }

    /// Creates a timestamp parse error from any displayable cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use durapend::Error;
    ///
    /// let err = Error::timestamp("\"hoge\" does not match %Y-%m-%d %H:%M:%S");
    /// assert!(err.to_string().contains("hoge"));
    /// ```
    pub fn timestamp<T: fmt::Display>(msg: T) -> Self {
        Error::Timestamp(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
