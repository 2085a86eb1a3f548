//! # relaxed_json
//!
//! A single-pass transpiler from relaxed, JSON5-like notation to strict,
//! standard-parser-ready JSON text.
//!
//! ## What is relaxed notation?
//!
//! Values authored by non-programmers in spreadsheet-style cells — settings,
//! time-series drivers, function arguments — arrive as permissive text:
//! unquoted keys, unquoted words, bare numbers and dates, single quotes,
//! comments, trailing commas, and inline call-like expressions. This crate
//! rewrites that text into strict JSON in one left-to-right pass, so a
//! standard JSON parser can take it from there.
//!
//! ## Key Features
//!
//! - **Precision-Safe Numbers**: numeric tokens are emitted as quoted
//!   strings (after `_`-separator and leading-`+` cleanup), never as bare
//!   numeric literals, so arbitrary-precision values survive round-trips
//!   through double-precision downstream parsers
//! - **Unquoted-String Tagging**: a caller-chosen marker is prepended inside
//!   strings that were unquoted in the source, letting a downstream
//!   expression evaluator tell "candidate formula/identifier" apart from
//!   "author-quoted literal"
//! - **Context Aware**: a container stack and parse-mode automaton decide
//!   key vs. value handling; value spans balance nested `()`/`{}`/`[]` so
//!   `sum({x:1,y:"a,b"})` stays one token
//! - **Date Aware**: ISO-like date and datetime tokens are recognized
//!   textually (boundary rules, consistent separators) and quoted verbatim —
//!   never evaluated
//! - **Guarded**: input size, nesting depth and disallowed keys
//!   (`__proto__` and friends) fail fast with descriptive errors
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! relaxed_json = "0.1"
//! ```
//!
//! ### Basic Transpilation
//!
//! ```rust
//! use relaxed_json::transpile;
//!
//! let json = transpile("{a: 1_000, b: 'ciao', d: 2024-01-01, e: true}").unwrap();
//! assert_eq!(json, r#"{"a": "1000", "b": "ciao", "d": "2024-01-01", "e": true}"#);
//! ```
//!
//! ### Tagging Unquoted Strings
//!
//! ```rust
//! use relaxed_json::{transpile_with_options, TranspileOptions};
//!
//! let options = TranspileOptions::new().with_marker("#");
//! let json = transpile_with_options(r#"{a: hello, b: "hello"}"#, options).unwrap();
//! // unquoted `hello` is tagged, author-quoted `"hello"` is not
//! assert_eq!(json, r##"{"a": "#hello", "b": "hello"}"##);
//! ```
//!
//! ### Formula Pre-Wrapping
//!
//! ```rust
//! use relaxed_json::{transpile_with_options, TranspileOptions};
//!
//! let options = TranspileOptions::new()
//!     .with_marker("#")
//!     .with_formula_advanced_parsing(true);
//! let json = transpile_with_options(r#"{a: q({b:"mam ma"})}"#, options).unwrap();
//! assert_eq!(json, r##"{"a": "#q({b:\"mam ma\"})"}"##);
//! ```
//!
//! ### Canonical Serialization
//!
//! ```rust
//! use relaxed_json::canonicalize;
//! use serde_json::json;
//!
//! // key order does not matter: canonical text is deterministic
//! let a = canonicalize(&json!({"b": 1, "a": 2})).unwrap();
//! let b = canonicalize(&json!({"a": 2, "b": 1})).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! ## Profiles
//!
//! The default **lenient** profile never raises for structurally malformed
//! input — its contract is "never crash on unanalyzable text"; the output of
//! malformed input is text the downstream JSON parse will reject, and that
//! parse failure is the structural-validity signal. The **strict** profile
//! raises [`Error::MalformedLiteral`] for unterminated strings and
//! unbalanced containers. Guards (size, depth, keys) apply in both.
//!
//! ## Consumer Contract
//!
//! Feed the returned text to a standard JSON parser. Downstream, any string
//! beginning with the configured marker is "author-unquoted — candidate
//! expression/identifier"; absence of the marker means "author-quoted
//! literal". Keys, numbers, dates, `true`, `false` and `null` are never
//! marked.
//!
//! ## Performance Characteristics
//!
//! - **Transpilation**: O(n) amortized, single pass, with small bounded
//!   backtracking per token (a rejected date candidate is re-scanned as a
//!   bareword)
//! - **Purity**: no global state, no I/O, no locking — concurrent
//!   independent invocations need no coordination
//! - **Resource Bounds**: `max_bytes` is the only built-in limit; callers
//!   needing timeouts must bound input size externally

pub mod canonical;
mod chars;
pub mod date;
pub mod error;
mod formula;
pub mod number;
pub mod options;
mod transpile;

pub use canonical::canonicalize;
pub use error::{Error, Result};
pub use options::{default_key_allowed, Profile, TranspileOptions};

/// Transpiles relaxed notation to strict JSON text with default options.
///
/// Default options: lenient profile, no marker, 16 KiB input guard, depth 16,
/// prototype-pollution key guard. See [`TranspileOptions`] for the knobs.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::transpile;
///
/// assert_eq!(transpile("{a: 1_000}").unwrap(), r#"{"a": "1000"}"#);
/// assert_eq!(transpile("[1,2,]").unwrap(), r#"["1","2"]"#);
/// ```
///
/// # Errors
///
/// Returns an error if the input exceeds the size guard, nests too deep, or
/// contains a disallowed key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn transpile(source: &str) -> Result<String> {
    transpile_with_options(source, TranspileOptions::default())
}

/// Transpiles relaxed notation to strict JSON text with custom options.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::{transpile_with_options, TranspileOptions};
///
/// let options = TranspileOptions::new().with_radix_literals_as_numbers(true);
/// let json = transpile_with_options("{a: 0x1A}", options).unwrap();
/// assert_eq!(json, r#"{"a": "0x1A"}"#);
/// ```
///
/// # Errors
///
/// Returns an error if a guard trips, or — under
/// [`Profile::Strict`](Profile) — if the input contains an unterminated
/// string or unbalanced containers.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn transpile_with_options(source: &str, options: TranspileOptions) -> Result<String> {
    transpile::run(source, &options)
}
