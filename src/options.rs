//! Configuration options for the relaxed-JSON transpiler.
//!
//! This module provides the types that parameterize a transpile run:
//!
//! - [`TranspileOptions`]: main configuration struct (guards, marker, policy knobs)
//! - [`Profile`]: lenient vs. strict handling of structurally malformed input
//!
//! The two historically observed grammar variants (radix literals as numbers
//! vs. marker-tagged barewords; lenient vs. strict structural validation) are
//! policy knobs of one engine, not separate engines.
//!
//! ## Examples
//!
//! ```rust
//! use relaxed_json::{transpile_with_options, TranspileOptions};
//!
//! let options = TranspileOptions::new().with_marker("#");
//! let json = transpile_with_options("{a: hello}", options).unwrap();
//! assert_eq!(json, r##"{"a": "#hello"}"##);
//! ```

/// Structural-error handling profile.
///
/// - **Lenient**: never raises for unanalyzable text; malformed input
///   degrades to output the downstream JSON parse will reject. This is the
///   default and the contract the configuration-ingestion pipeline relies on.
/// - **Strict**: raises [`Error::MalformedLiteral`](crate::Error) for
///   unterminated strings and unbalanced containers.
///
/// Guards (input size, depth, disallowed keys) apply in both profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Lenient,
    Strict,
}

/// Default key predicate: rejects the prototype-pollution vectors
/// `__proto__`, `constructor` and `prototype`.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::default_key_allowed;
///
/// assert!(default_key_allowed("amount"));
/// assert!(!default_key_allowed("__proto__"));
/// ```
#[must_use]
pub fn default_key_allowed(key: &str) -> bool {
    !matches!(key, "__proto__" | "constructor" | "prototype")
}

/// Configuration options for a transpile run.
///
/// Controls the resource guards, the unquoted-strings marker and the policy
/// knobs of the engine. All fields are plain data; the options struct is
/// cheap to clone and carries no state across calls.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::{Profile, TranspileOptions};
///
/// // Defaults: lenient, no marker, 16 KiB / depth 16 guards
/// let options = TranspileOptions::new();
///
/// // Marker + formula pre-wrap, as used by the formula-evaluation pipeline
/// let options = TranspileOptions::new()
///     .with_marker("\u{1f}#")
///     .with_formula_advanced_parsing(true);
///
/// // Strict structural validation
/// let options = TranspileOptions::new().with_profile(Profile::Strict);
/// ```
#[derive(Clone, Debug)]
pub struct TranspileOptions {
    /// Maximum input size in bytes, checked before any scanning.
    pub max_bytes: usize,
    /// Maximum container nesting depth, checked at each opener.
    pub max_depth: usize,
    /// Key predicate; a `false` return aborts the whole transpile.
    pub key_allowed: fn(&str) -> bool,
    /// Marker prepended inside emitted strings that were unquoted in the
    /// source. Empty means "do not tag". Keys, numbers, dates and the bare
    /// literals `true`/`false`/`null` are never marked.
    pub unquoted_strings_marker: String,
    /// Pre-wrap `identifier(...)` call expressions in value position as one
    /// marker-prefixed string before the main pass.
    pub formula_advanced_parsing: bool,
    /// Classify `0x`/`0b`/`0o` literals as numbers (quoted, separators
    /// stripped). When false they are generic barewords, because the
    /// downstream expression grammar does not support those radixes.
    pub radix_literals_as_numbers: bool,
    /// Structural-error handling profile.
    pub profile: Profile,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        TranspileOptions {
            max_bytes: 16_384,
            max_depth: 16,
            key_allowed: default_key_allowed,
            unquoted_strings_marker: String::new(),
            formula_advanced_parsing: false,
            radix_literals_as_numbers: false,
            profile: Profile::default(),
        }
    }
}

impl TranspileOptions {
    /// Creates default options (lenient, no marker, 16 KiB input and
    /// 16-level depth guards, prototype-pollution key guard).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::TranspileOptions;
    ///
    /// let options = TranspileOptions::new();
    /// assert_eq!(options.max_depth, 16);
    /// assert!(options.unquoted_strings_marker.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum input size in bytes.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Sets the maximum container nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the key predicate checked against every emitted key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relaxed_json::TranspileOptions;
    ///
    /// fn no_dollar(key: &str) -> bool {
    ///     !key.starts_with('$')
    /// }
    ///
    /// let options = TranspileOptions::new().with_key_allowed(no_dollar);
    /// ```
    #[must_use]
    pub fn with_key_allowed(mut self, key_allowed: fn(&str) -> bool) -> Self {
        self.key_allowed = key_allowed;
        self
    }

    /// Sets the marker prepended to strings that were unquoted in the source.
    ///
    /// The marker is an opaque, caller-chosen value (a private-use Unicode
    /// character works well); it is never hard-coded so it cannot collide
    /// with real content.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.unquoted_strings_marker = marker.into();
        self
    }

    /// Enables or disables the formula pre-wrap pass.
    #[must_use]
    pub fn with_formula_advanced_parsing(mut self, enabled: bool) -> Self {
        self.formula_advanced_parsing = enabled;
        self
    }

    /// Enables or disables classifying `0x`/`0b`/`0o` literals as numbers.
    #[must_use]
    pub fn with_radix_literals_as_numbers(mut self, enabled: bool) -> Self {
        self.radix_literals_as_numbers = enabled;
        self
    }

    /// Sets the structural-error handling profile.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }
}
