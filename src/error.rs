//! Error types for the relaxed-JSON transpiler and the canonical serializer.
//!
//! ## Error Categories
//!
//! - **Guard Errors**: input too large, nesting too deep, disallowed key —
//!   checked proactively and raised before or during the scan
//! - **Structural Errors**: malformed literals (unterminated string,
//!   unbalanced container), raised by the strict profile only
//! - **Canonicalization Errors**: values that cannot be represented as
//!   deterministic JSON text (e.g. non-string map keys)
//!
//! The lenient profile never raises for structural malformation: its contract
//! is to degrade to text a later JSON-parse step will reject, so guard errors
//! are the only failures it produces.
//!
//! ## Examples
//!
//! ```rust
//! use relaxed_json::{transpile_with_options, Error, TranspileOptions};
//!
//! let options = TranspileOptions::new().with_max_bytes(8);
//! let result = transpile_with_options("{a: 1, b: 2}", options);
//! assert!(matches!(result, Err(Error::InputTooLarge { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by [`transpile`](crate::transpile)
/// and [`canonicalize`](crate::canonicalize).
///
/// Guard errors carry the offending detail so callers can report it directly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Input byte length exceeds the configured `max_bytes` guard.
    #[error("input too large: {actual} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { actual: usize, limit: usize },

    /// Container nesting exceeds the configured `max_depth` guard.
    #[error("nesting too deep: more than {limit} open containers")]
    DepthExceeded { limit: usize },

    /// A key rejected by the configured key predicate (prototype-pollution guard).
    #[error("disallowed key: {key:?}")]
    DisallowedKey { key: String },

    /// Structurally malformed literal, raised by the strict profile only.
    #[error("malformed literal at byte {position}: {msg}")]
    MalformedLiteral { position: usize, msg: String },

    /// A value the canonical serializer cannot represent as JSON text.
    #[error("unstringifiable value: {0}")]
    Unstringifiable(String),

    /// Generic message (used by serde's `Error::custom`).
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an input-size guard error.
    pub fn input_too_large(actual: usize, limit: usize) -> Self {
        Error::InputTooLarge { actual, limit }
    }

    /// Creates a nesting-depth guard error.
    pub fn depth_exceeded(limit: usize) -> Self {
        Error::DepthExceeded { limit }
    }

    /// Creates a disallowed-key guard error.
    pub fn disallowed_key(key: &str) -> Self {
        Error::DisallowedKey {
            key: key.to_string(),
        }
    }

    /// Creates a malformed-literal error at the given byte position.
    ///
    /// Only the strict profile produces these; the lenient profile defers
    /// structural validation to the downstream JSON parse.
    pub fn malformed(position: usize, msg: &str) -> Self {
        Error::MalformedLiteral {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an unstringifiable-value error (canonical serializer only).
    pub fn unstringifiable(msg: &str) -> Self {
        Error::Unstringifiable(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
