//! The relaxed-notation to strict-JSON transpile engine.
//!
//! A single left-to-right pass over the source text drives four cooperating
//! pieces:
//!
//! - **Context tracker**: a stack of container frames (object / array / the
//!   implicit top-level slot), each carrying a parse mode
//!   (`expect key → expect colon → expect value → after value`). The mode
//!   decides whether a bare run of characters is a key or a value, and
//!   whether a date candidate may be attempted.
//! - **Literal readers**: double-quoted strings copied verbatim (escape
//!   pairs preserved uninterpreted), single-quoted strings rewritten to
//!   double-quoted JSON, comments elided entirely.
//! - **Value-span reader**: captures one bare value token, balancing nested
//!   `()`/`{}`/`[]` internally, so `sum({x:1,y:"a,b"})` stays one span
//!   despite internal commas and braces. At top level only a comment or
//!   end-of-input stops the span, which is how `10 + 1 * 1` survives whole.
//! - **Emission policy**: numbers and dates become quoted strings (numbers
//!   after `_`/`+` cleanup — precision safety is the point of this crate),
//!   `true`/`false`/`null` stay bare only when they are the entire span,
//!   every other bareword becomes a quoted string with the configured
//!   marker prepended, and trailing commas are dropped.
//!
//! The guards (input size, nesting depth, disallowed keys) fail fast in
//! both profiles; structural malformation raises only under
//! [`Profile::Strict`](crate::Profile) — the lenient profile's contract is
//! to never crash on unanalyzable text and let the downstream JSON parse be
//! the structural-validity signal.

use crate::chars;
use crate::date::{is_date_like, MAX_DATE_LEN, MIN_DATE_LEN};
use crate::error::{Error, Result};
use crate::formula::wrap_function_like_values;
use crate::number::{clean_number, is_decimal_number, is_radix_number};
use crate::options::{Profile, TranspileOptions};
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContainerKind {
    Top,
    Object,
    Array,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    ExpectKey,
    ExpectColon,
    ExpectValue,
    AfterValue,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    kind: ContainerKind,
    mode: Mode,
}

/// Transpiles relaxed text to strict JSON text under the given options.
///
/// Pure function of `(source, options)`: all mutable state (cursor,
/// container stack, output buffer) is created here and dropped at return.
pub(crate) fn run(source: &str, options: &TranspileOptions) -> Result<String> {
    if source.len() > options.max_bytes {
        return Err(Error::input_too_large(source.len(), options.max_bytes));
    }

    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let prewrapped;
    let source = if options.formula_advanced_parsing {
        prewrapped = wrap_function_like_values(source, &options.unquoted_strings_marker);
        prewrapped.as_str()
    } else {
        source
    };

    if source.is_empty() {
        return Ok(String::new());
    }

    let mut engine = Transpiler {
        src: source,
        bytes: source.as_bytes(),
        i: 0,
        out: String::with_capacity(source.len() + source.len() / 4),
        stack: vec![Frame {
            kind: ContainerKind::Top,
            mode: Mode::ExpectValue,
        }],
        options,
    };
    engine.scan()?;

    let out = engine.out;
    let trimmed = out.trim();
    if trimmed.len() == out.len() {
        Ok(out)
    } else {
        Ok(trimmed.to_string())
    }
}

struct Transpiler<'a> {
    src: &'a str,
    bytes: &'a [u8],
    i: usize,
    out: String,
    stack: Vec<Frame>,
    options: &'a TranspileOptions,
}

impl<'a> Transpiler<'a> {
    fn scan(&mut self) -> Result<()> {
        let n = self.bytes.len();
        while self.i < n {
            let b = self.bytes[self.i];

            if chars::is_ws(b) {
                self.copy_ws();
                continue;
            }

            if b == b'/' && matches!(self.peek(1), Some(b'/' | b'*')) {
                if self.peek(1) == Some(b'*') {
                    self.skip_block_comment();
                } else {
                    self.skip_line_comment();
                }
                continue;
            }

            match b {
                b'{' => {
                    self.push_frame(ContainerKind::Object, Mode::ExpectKey)?;
                    self.out.push('{');
                    self.i += 1;
                }
                b'[' => {
                    self.push_frame(ContainerKind::Array, Mode::ExpectValue)?;
                    self.out.push('[');
                    self.i += 1;
                }
                b'}' | b']' => self.close_container(b)?,
                b':' => {
                    self.out.push(':');
                    self.i += 1;
                    let top = self.top_mut();
                    if top.kind == ContainerKind::Object {
                        top.mode = Mode::ExpectValue;
                    }
                }
                b',' => self.handle_comma(),
                b'"' => self.read_dq_string()?,
                b'\'' => self.read_sq_string()?,
                _ => {
                    if chars::is_digit(b) && !self.expecting_key() && self.try_read_date() {
                        continue;
                    }
                    if self.expecting_key() {
                        self.read_bare_key()?;
                    } else {
                        self.read_bare_value();
                    }
                }
            }
        }

        if self.options.profile == Profile::Strict && self.stack.len() > 1 {
            return Err(Error::malformed(
                self.i,
                "unbalanced container: input ended with open containers",
            ));
        }
        Ok(())
    }

    // --- Context tracking ---

    #[inline]
    fn top_mut(&mut self) -> &mut Frame {
        // The top-level frame is pushed at construction and never popped.
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    #[inline]
    fn top(&self) -> Frame {
        self.stack[self.stack.len() - 1]
    }

    /// Number of open containers (the implicit top-level frame not counted).
    #[inline]
    fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    #[inline]
    fn expecting_key(&self) -> bool {
        let top = self.top();
        top.kind == ContainerKind::Object
            && matches!(top.mode, Mode::ExpectKey | Mode::ExpectColon)
    }

    fn push_frame(&mut self, kind: ContainerKind, mode: Mode) -> Result<()> {
        if self.depth() + 1 > self.options.max_depth {
            return Err(Error::depth_exceeded(self.options.max_depth));
        }
        self.stack.push(Frame { kind, mode });
        Ok(())
    }

    fn close_container(&mut self, b: u8) -> Result<()> {
        if self.stack.len() > 1 {
            let closed = self.stack.pop();
            if self.options.profile == Profile::Strict {
                let matches_opener = match closed {
                    Some(Frame {
                        kind: ContainerKind::Object,
                        ..
                    }) => b == b'}',
                    Some(Frame {
                        kind: ContainerKind::Array,
                        ..
                    }) => b == b']',
                    _ => false,
                };
                if !matches_opener {
                    return Err(Error::malformed(
                        self.i,
                        "unbalanced container: mismatched closing bracket",
                    ));
                }
            }
            self.top_mut().mode = Mode::AfterValue;
        } else if self.options.profile == Profile::Strict {
            return Err(Error::malformed(
                self.i,
                "unbalanced container: closing bracket with no open container",
            ));
        }
        self.out.push(b as char);
        self.i += 1;
        Ok(())
    }

    /// Emits the comma, unless it is a trailing comma: a comma followed
    /// (after whitespace and comments) by `}` or `]` is dropped entirely.
    fn handle_comma(&mut self) {
        let after = self.lookahead_ws_comments(self.i + 1);
        if matches!(self.bytes.get(after).copied(), Some(b'}' | b']')) {
            self.i = after;
            return;
        }
        self.out.push(',');
        self.i += 1;
        let top = self.top_mut();
        top.mode = match top.kind {
            ContainerKind::Object => Mode::ExpectKey,
            ContainerKind::Array | ContainerKind::Top => Mode::ExpectValue,
        };
    }

    #[inline]
    fn set_after_value(&mut self) {
        self.top_mut().mode = Mode::AfterValue;
    }

    #[inline]
    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.i + ahead).copied()
    }

    // --- Whitespace and comments ---

    fn copy_ws(&mut self) {
        let src = self.src;
        let start = self.i;
        while self.i < self.bytes.len() && chars::is_ws(self.bytes[self.i]) {
            self.i += 1;
        }
        self.out.push_str(&src[start..self.i]);
    }

    fn skip_line_comment(&mut self) {
        self.i += 2;
        // The newline is left in place and copied as ordinary whitespace.
        while self.i < self.bytes.len() && self.bytes[self.i] != b'\n' {
            self.i += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.i += 2;
        while self.i < self.bytes.len() {
            if self.bytes[self.i] == b'*' && self.peek(1) == Some(b'/') {
                self.i += 2;
                return;
            }
            self.i += 1;
        }
    }

    /// Index of the next byte that is neither whitespace nor part of a
    /// comment, starting at `from`. Pure lookahead; the cursor is untouched.
    fn lookahead_ws_comments(&self, from: usize) -> usize {
        let n = self.bytes.len();
        let mut k = from;
        loop {
            while k < n && chars::is_ws(self.bytes[k]) {
                k += 1;
            }
            if k + 1 < n && self.bytes[k] == b'/' {
                match self.bytes[k + 1] {
                    b'/' => {
                        k += 2;
                        while k < n && self.bytes[k] != b'\n' {
                            k += 1;
                        }
                        continue;
                    }
                    b'*' => {
                        k += 2;
                        loop {
                            if k + 1 >= n {
                                k = n;
                                break;
                            }
                            if self.bytes[k] == b'*' && self.bytes[k + 1] == b'/' {
                                k += 2;
                                break;
                            }
                            k += 1;
                        }
                        continue;
                    }
                    _ => {}
                }
            }
            break;
        }
        k
    }

    // --- String readers ---

    /// Copies a double-quoted string verbatim, escape pairs included and
    /// uninterpreted. In key position the raw content is checked against
    /// the key predicate.
    fn read_dq_string(&mut self) -> Result<()> {
        let src = self.src;
        let n = self.bytes.len();
        let start = self.i;
        let is_key = self.expecting_key();

        self.i += 1;
        let mut close = None;
        while self.i < n {
            match self.bytes[self.i] {
                b'\\' => {
                    // Skip the escape pair; continuation bytes of a
                    // multi-byte escaped char never match '"' below.
                    self.i += 2;
                }
                b'"' => {
                    close = Some(self.i);
                    self.i += 1;
                    break;
                }
                _ => self.i += 1,
            }
        }
        // A dangling backslash may have pushed the cursor past the end.
        if self.i > n {
            self.i = n;
        }

        match close {
            Some(close) => {
                if is_key {
                    self.check_key(&src[start + 1..close])?;
                }
                self.out.push_str(&src[start..=close]);
                self.finish_string_token(is_key);
            }
            None => {
                if self.options.profile == Profile::Strict {
                    return Err(Error::malformed(start, "unterminated string"));
                }
                // Flush what was seen; the downstream parse reports it.
                self.out.push_str(&src[start..]);
            }
        }
        Ok(())
    }

    /// Converts a single-quoted string to a double-quoted JSON string:
    /// embedded `"` escaped, `\'` unescaped to a literal `'`, any other
    /// escape pair preserved.
    fn read_sq_string(&mut self) -> Result<()> {
        let src = self.src;
        let n = self.bytes.len();
        let start = self.i;
        let is_key = self.expecting_key();

        self.i += 1;
        let mut buf = String::new();
        let mut run_start = self.i;
        let mut terminated = false;
        while self.i < n {
            match self.bytes[self.i] {
                b'\\' => {
                    buf.push_str(&src[run_start..self.i]);
                    self.i += 1;
                    if self.i < n {
                        match self.bytes[self.i] {
                            b'"' => {
                                buf.push_str("\\\"");
                                self.i += 1;
                            }
                            b'\'' => {
                                buf.push('\'');
                                self.i += 1;
                            }
                            _ => {
                                // Keep the escape pair; the escaped char is
                                // picked up by the next run.
                                buf.push('\\');
                            }
                        }
                    }
                    run_start = self.i;
                }
                b'\'' => {
                    buf.push_str(&src[run_start..self.i]);
                    self.i += 1;
                    terminated = true;
                    break;
                }
                b'"' => {
                    buf.push_str(&src[run_start..self.i]);
                    buf.push_str("\\\"");
                    self.i += 1;
                    run_start = self.i;
                }
                _ => self.i += 1,
            }
        }
        if !terminated {
            if self.options.profile == Profile::Strict {
                return Err(Error::malformed(start, "unterminated string"));
            }
            buf.push_str(&src[run_start..]);
        }

        if is_key {
            self.check_key(&buf)?;
        }
        self.out.push('"');
        self.out.push_str(&buf);
        self.out.push('"');
        self.finish_string_token(is_key);
        Ok(())
    }

    fn finish_string_token(&mut self, is_key: bool) {
        let top = self.top_mut();
        if is_key {
            top.mode = Mode::ExpectColon;
        } else if matches!(top.mode, Mode::ExpectValue) {
            top.mode = Mode::AfterValue;
        }
    }

    // --- Bare tokens ---

    /// Attempts a date candidate at the cursor (which sits on a digit at a
    /// valid left boundary, since every preceding token consumed its own
    /// characters). On success the exact substring is emitted quoted and
    /// unmarked; on failure the cursor is restored and the run is re-scanned
    /// as a generic value span.
    fn try_read_date(&mut self) -> bool {
        let src = self.src;
        let n = self.bytes.len();
        let start = self.i;
        if start + MIN_DATE_LEN > n {
            return false;
        }

        for k in 0..4 {
            if !chars::is_digit(self.bytes[start + k]) {
                return false;
            }
        }
        if !matches!(self.bytes[start + 4], b'-' | b'.' | b'/') {
            return false;
        }

        let mut j = start + 5;
        while j < n
            && matches!(self.bytes[j], b'0'..=b'9' | b'-' | b'.' | b'/' | b'T' | b':' | b'Z' | b'z' | b'+')
        {
            j += 1;
        }

        let candidate = &src[start..j];
        if candidate.len() > MAX_DATE_LEN || !is_date_like(candidate) {
            return false;
        }
        // Not glued to a following identifier character (2024-01-01X).
        if let Some(&next) = self.bytes.get(j) {
            if chars::is_ident_part(next) {
                return false;
            }
        }
        // The next non-space char must be a structural boundary or the end,
        // otherwise the whole run is one bareword (2024-01-01 and more).
        let mut check = j;
        while check < n && self.bytes[check] == b' ' {
            check += 1;
        }
        if check < n && !matches!(self.bytes[check], b',' | b'}' | b']' | b':') {
            return false;
        }

        self.out.push('"');
        self.out.push_str(candidate);
        self.out.push('"');
        self.i = j;
        self.set_after_value();
        true
    }

    /// Reads a bare key: a run of non-whitespace, non-structural, non-quote
    /// characters. Keys are always emitted quoted, never marked and never
    /// number-cleaned.
    fn read_bare_key(&mut self) -> Result<()> {
        let src = self.src;
        let n = self.bytes.len();
        let start = self.i;
        while self.i < n {
            let b = self.bytes[self.i];
            if chars::is_ws(b) || chars::is_structural(b) || chars::is_quote(b) {
                break;
            }
            if b == b'/' && matches!(self.peek(1), Some(b'/' | b'*')) {
                break;
            }
            self.i += 1;
        }
        if self.i == start {
            // Stray byte the dispatcher could not classify; copy it through.
            self.copy_char();
            return Ok(());
        }
        let key = &src[start..self.i];
        self.check_key(key)?;
        escape_json_into(&mut self.out, key);
        self.top_mut().mode = Mode::ExpectColon;
        Ok(())
    }

    /// Reads one bare value span, balancing `()`/`{}`/`[]` opened within the
    /// span. Stops, at zero local nesting, at: a comma while inside an
    /// enclosing container, the enclosing container's closer, the start of a
    /// quoted string, or the start of a comment. At top level commas and
    /// colons are ordinary span characters.
    fn read_bare_value(&mut self) {
        let src = self.src;
        let n = self.bytes.len();
        let start = self.i;
        let enclosed = self.depth() > 0;
        let mut brace: u32 = 0;
        let mut bracket: u32 = 0;
        let mut paren: u32 = 0;

        while self.i < n {
            let b = self.bytes[self.i];
            match b {
                b'{' => {
                    brace += 1;
                    self.i += 1;
                }
                b'[' => {
                    bracket += 1;
                    self.i += 1;
                }
                b'(' => {
                    paren += 1;
                    self.i += 1;
                }
                b'}' => {
                    if brace > 0 {
                        brace -= 1;
                        self.i += 1;
                    } else if bracket == 0 && paren == 0 {
                        break;
                    } else {
                        self.i += 1;
                    }
                }
                b']' => {
                    if bracket > 0 {
                        bracket -= 1;
                        self.i += 1;
                    } else if brace == 0 && paren == 0 {
                        break;
                    } else {
                        self.i += 1;
                    }
                }
                b')' => {
                    paren = paren.saturating_sub(1);
                    self.i += 1;
                }
                b',' if enclosed && brace == 0 && bracket == 0 && paren == 0 => break,
                b'"' | b'\'' => break,
                b'/' if matches!(self.peek(1), Some(b'/' | b'*')) => break,
                _ => self.i += 1,
            }
        }

        if self.i == start {
            self.copy_char();
            return;
        }

        let value = src[start..self.i].trim_start();
        if value.is_empty() {
            return;
        }
        let token = value.trim_end();
        let trailing_ws = &value[token.len()..];
        self.emit_bare_value(token, trailing_ws);
        self.set_after_value();
    }

    /// Emission policy for a classified bare token. Order matters: numbers
    /// win over dates (`2024` alone is a number), dates over literals, and
    /// anything left is a generic (marked) string.
    fn emit_bare_value(&mut self, token: &str, trailing_ws: &str) {
        let options = self.options;

        if is_decimal_number(token)
            || (options.radix_literals_as_numbers && is_radix_number(token))
        {
            let cleaned = clean_number(token);
            self.out.push('"');
            self.out.push_str(&cleaned);
            self.out.push('"');
        } else if token.len() >= MIN_DATE_LEN
            && token.len() <= MAX_DATE_LEN
            && is_date_like(token)
        {
            // A whole span with date shape (covers space-separated times the
            // character-level scanner cannot reach).
            escape_json_into(&mut self.out, token);
        } else if matches!(token, "true" | "false" | "null") {
            self.out.push_str(token);
        } else if options.unquoted_strings_marker.is_empty() {
            escape_json_into(&mut self.out, token);
        } else {
            let marker = &options.unquoted_strings_marker;
            let mut tagged = String::with_capacity(marker.len() + token.len());
            tagged.push_str(marker);
            tagged.push_str(token);
            escape_json_into(&mut self.out, &tagged);
        }
        self.out.push_str(trailing_ws);
    }

    // --- Guards and small helpers ---

    fn check_key(&self, key: &str) -> Result<()> {
        if (self.options.key_allowed)(key) {
            Ok(())
        } else {
            Err(Error::disallowed_key(key))
        }
    }

    /// Copies one full UTF-8 character from the cursor to the output.
    fn copy_char(&mut self) {
        let len = chars::utf8_len(self.bytes[self.i]);
        let end = (self.i + len).min(self.bytes.len());
        self.out.push_str(&self.src[self.i..end]);
        self.i = end;
    }
}

/// Writes `s` as a JSON string literal: wrapping quotes, `"`/`\` and
/// control characters escaped, everything else verbatim.
pub(crate) fn escape_json_into(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transpile(input: &str) -> String {
        run(input, &TranspileOptions::new()).unwrap()
    }

    fn transpile_marked(input: &str) -> String {
        run(input, &TranspileOptions::new().with_marker("#")).unwrap()
    }

    #[test]
    fn test_numbers_are_quoted_strings() {
        assert_eq!(transpile("123"), r#""123""#);
        assert_eq!(transpile("{a: 1_000}"), r#"{"a": "1000"}"#);
        assert_eq!(transpile("+7"), r#""7""#);
        assert_eq!(transpile("[1, 2.5, -3e2]"), r#"["1", "2.5", "-3e2"]"#);
    }

    #[test]
    fn test_keys_always_quoted() {
        assert_eq!(transpile("{a:1}"), r#"{"a":"1"}"#);
        assert_eq!(transpile("{123:45}"), r#"{"123":"45"}"#);
        assert_eq!(transpile("{0x1:2e3}"), r#"{"0x1":"2e3"}"#);
        assert_eq!(transpile(r#"{"a":1}"#), r#"{"a":"1"}"#);
    }

    #[test]
    fn test_marker_tags_unquoted_values_only() {
        assert_eq!(transpile_marked("{a: hello}"), r##"{"a": "#hello"}"##);
        assert_eq!(transpile_marked(r#"{a: "hello"}"#), r#"{"a": "hello"}"#);
        assert_eq!(transpile_marked("{a:mamma}"), r##"{"a":"#mamma"}"##);
    }

    #[test]
    fn test_reserved_literals_stay_bare() {
        assert_eq!(transpile("true"), "true");
        assert_eq!(transpile("false"), "false");
        assert_eq!(transpile("null"), "null");
        assert_eq!(
            transpile("{enabled: true, count: 0}"),
            r#"{"enabled": true, "count": "0"}"#
        );
    }

    #[test]
    fn test_trailing_commas_dropped() {
        assert_eq!(transpile("[1,2,]"), r#"["1","2"]"#);
        assert_eq!(transpile("{a:1,}"), r#"{"a":"1"}"#);
        assert_eq!(transpile("{a:1, /* x */ }"), r#"{"a":"1"}"#);
    }

    #[test]
    fn test_comments_elided() {
        assert_eq!(transpile("// 123\n123"), r#""123""#);
        assert_eq!(transpile("/* 1_2_3 */ 1_2_3"), r#""123""#);
        assert_eq!(transpile("{a:1/*x*/2}"), r#"{"a":"1""2"}"#);
    }

    #[test]
    fn test_dates() {
        assert_eq!(transpile("2024-01-01"), r#""2024-01-01""#);
        assert_eq!(transpile("{ a:2024-01-01 }"), r#"{ "a":"2024-01-01" }"#);
        assert_eq!(
            transpile("[2023-12-31, 2024-01-01]"),
            r#"["2023-12-31", "2024-01-01"]"#
        );
        assert_eq!(transpile_marked("foo2024-01-01"), r##""#foo2024-01-01""##);
        assert_eq!(transpile_marked("2025-12.11"), r##""#2025-12.11""##);
    }

    #[test]
    fn test_single_quotes_converted() {
        assert_eq!(transpile("'456'"), r#""456""#);
        assert_eq!(transpile(r#"{'a':'b c'}"#), r#"{"a":"b c"}"#);
        assert_eq!(transpile(r"'it\'s'"), r#""it's""#);
        assert_eq!(transpile(r#"'say "hi"'"#), r#""say \"hi\"""#);
    }

    #[test]
    fn test_value_span_balances_nesting() {
        assert_eq!(
            transpile_marked(r#"{a: q(mam ma)}"#),
            r##"{"a": "#q(mam ma)"}"##
        );
        assert_eq!(
            transpile_marked("{a: 10 + 1 * 1, b: mam ma}"),
            r##"{"a": "#10 + 1 * 1", "b": "#mam ma"}"##
        );
        assert_eq!(transpile_marked("x 123 y"), r##""#x 123 y""##);
    }

    #[test]
    fn test_guards() {
        let options = TranspileOptions::new().with_max_bytes(4);
        assert!(matches!(
            run("{a: 1}", &options),
            Err(Error::InputTooLarge { .. })
        ));

        let options = TranspileOptions::new().with_max_depth(2);
        assert!(matches!(
            run("[[[1]]]", &options),
            Err(Error::DepthExceeded { limit: 2 })
        ));

        for input in [
            "{__proto__: 1}",
            r#"{"__proto__": 1}"#,
            "{'__proto__': 1}",
            "{a: {constructor: 1}}",
        ] {
            assert!(matches!(
                run(input, &TranspileOptions::new()),
                Err(Error::DisallowedKey { .. })
            ));
        }
    }

    #[test]
    fn test_strict_profile() {
        let strict = TranspileOptions::new().with_profile(Profile::Strict);
        assert!(matches!(
            run(r#"{a: "unterminated"#, &strict),
            Err(Error::MalformedLiteral { .. })
        ));
        assert!(matches!(
            run("{a: 1", &strict),
            Err(Error::MalformedLiteral { .. })
        ));
        assert!(matches!(
            run("{a: 1]", &strict),
            Err(Error::MalformedLiteral { .. })
        ));
        // The same inputs produce text under the lenient profile.
        assert!(run(r#"{a: "unterminated"#, &TranspileOptions::new()).is_ok());
        assert!(run("{a: 1", &TranspileOptions::new()).is_ok());
    }

    #[test]
    fn test_bom_stripped() {
        assert_eq!(transpile("\u{feff}123"), r#""123""#);
    }

    #[test]
    fn test_whitespace_layout_preserved() {
        assert_eq!(
            transpile("{ \n  a : 1_2_3 ,\t b:\n-4.5e-6 \n}"),
            "{ \n  \"a\" : \"123\" ,\t \"b\":\n\"-4.5e-6\" \n}"
        );
    }
}
