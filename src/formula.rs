//! Formula pre-wrap pass.
//!
//! Spreadsheet authors write call-like expressions directly in value cells:
//! `{a: q({b:"mam ma"})}`. The main pass cannot keep such a span intact —
//! its value-span reader stops at the embedded quoted string — so when
//! `formula_advanced_parsing` is enabled this pass runs first and rewrites
//! every value span containing an `identifier(...)` call into ONE
//! marker-prefixed JSON string. The main pass then sees an already-quoted
//! value and leaves its interior alone.
//!
//! The pass keeps its own lightweight container/mode tracker and quote
//! state; everything that is not a call-bearing value span is copied
//! through verbatim.

use crate::chars;
use crate::transpile::escape_json_into;
use std::borrow::Cow;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Seg {
    Object,
    Array,
}

/// Rewrites call-bearing value spans as marker-prefixed JSON strings.
/// Spans without a function call, keys, quoted strings and all structural
/// characters pass through unchanged.
pub(crate) fn wrap_function_like_values(input: &str, marker: &str) -> String {
    let bytes = input.as_bytes();
    let n = bytes.len();
    let mut out = String::with_capacity(n + 16);
    let mut i = 0;

    let mut in_string: Option<u8> = None;
    let mut escape = false;
    let mut ctx: Vec<Seg> = Vec::new();
    let mut expecting_value = false;
    let mut expecting_key = false;

    while i < n {
        let b = bytes[i];

        if escape {
            push_char(&mut out, input, &mut i);
            escape = false;
            continue;
        }

        if let Some(quote) = in_string {
            if b == b'\\' {
                escape = true;
            } else if b == quote {
                in_string = None;
            }
            push_char(&mut out, input, &mut i);
            continue;
        }

        match b {
            b'"' | b'\'' => {
                in_string = Some(b);
                out.push(b as char);
                i += 1;
            }
            b'{' => {
                ctx.push(Seg::Object);
                expecting_key = true;
                expecting_value = false;
                out.push('{');
                i += 1;
            }
            b'[' => {
                ctx.push(Seg::Array);
                expecting_value = true;
                expecting_key = false;
                out.push('[');
                i += 1;
            }
            b'}' | b']' => {
                ctx.pop();
                expecting_key = false;
                expecting_value = false;
                out.push(b as char);
                i += 1;
            }
            b':' => {
                expecting_value = true;
                expecting_key = false;
                out.push(':');
                i += 1;
            }
            b',' => {
                out.push(',');
                match ctx.last() {
                    Some(Seg::Object) => {
                        expecting_key = true;
                        expecting_value = false;
                    }
                    Some(Seg::Array) => {
                        expecting_value = true;
                        expecting_key = false;
                    }
                    None => {}
                }
                i += 1;
            }
            _ if chars::is_ws(b) => {
                out.push(b as char);
                i += 1;
            }
            _ if expecting_key => {
                push_char(&mut out, input, &mut i);
            }
            _ if expecting_value => {
                let end = scan_balanced_segment(bytes, i);
                let segment = &input[i..end];
                let trimmed = segment.trim();

                if segment_has_fn_call(trimmed) {
                    let normalized = normalize_quotes(trimmed);
                    let mut tagged = String::with_capacity(marker.len() + normalized.len());
                    tagged.push_str(marker);
                    tagged.push_str(&normalized);
                    escape_json_into(&mut out, &tagged);
                } else {
                    out.push_str(segment);
                }

                expecting_value = false;
                expecting_key = matches!(ctx.last(), Some(Seg::Object));
                i = end;
            }
            _ => {
                push_char(&mut out, input, &mut i);
            }
        }
    }

    out
}

/// End index of the balanced segment starting at `start`: stops at the
/// first `,`, `}` or `]` found at zero local `()`/`{}`/`[]` nesting,
/// ignoring everything inside quoted substrings.
fn scan_balanced_segment(bytes: &[u8], start: usize) -> usize {
    let n = bytes.len();
    let mut k = start;
    let mut paren: u32 = 0;
    let mut brace: u32 = 0;
    let mut bracket: u32 = 0;
    let mut in_string: Option<u8> = None;
    let mut escape = false;

    while k < n {
        let b = bytes[k];
        if escape {
            escape = false;
            k += 1;
            continue;
        }
        if let Some(quote) = in_string {
            if b == b'\\' {
                escape = true;
            } else if b == quote {
                in_string = None;
            }
            k += 1;
            continue;
        }
        match b {
            b'"' | b'\'' => {
                in_string = Some(b);
                k += 1;
                continue;
            }
            b'(' => paren += 1,
            b')' => paren = paren.saturating_sub(1),
            b'{' => brace += 1,
            b'}' => brace = brace.saturating_sub(1),
            b'[' => bracket += 1,
            b']' => bracket = bracket.saturating_sub(1),
            _ => {}
        }
        if paren == 0 && brace == 0 && bracket == 0 && matches!(b, b',' | b'}' | b']') {
            break;
        }
        k += 1;
    }
    k
}

/// Whether the segment contains an `identifier(` call outside quoted
/// substrings (whitespace between the identifier and the paren allowed).
fn segment_has_fn_call(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let len = bytes.len();
    let mut j = 0;
    let mut in_string: Option<u8> = None;
    let mut escape = false;

    while j < len {
        let b = bytes[j];
        if escape {
            escape = false;
            j += 1;
            continue;
        }
        if let Some(quote) = in_string {
            if b == b'\\' {
                escape = true;
            } else if b == quote {
                in_string = None;
            }
            j += 1;
            continue;
        }
        if b == b'"' || b == b'\'' {
            in_string = Some(b);
            j += 1;
            continue;
        }
        if chars::is_ident_start(b) {
            let mut k = j + 1;
            while k < len && chars::is_ident_part(bytes[k]) {
                k += 1;
            }
            let mut look = k;
            while look < len && chars::is_ws(bytes[look]) {
                look += 1;
            }
            if bytes.get(look) == Some(&b'(') {
                return true;
            }
            j = k;
            continue;
        }
        j += 1;
    }
    false
}

/// Converts single quotes to double quotes, but only when the segment also
/// contains `{` or `[` — simple call arguments keep their author quoting.
fn normalize_quotes(segment: &str) -> Cow<'_, str> {
    if !segment.contains('{') && !segment.contains('[') {
        return Cow::Borrowed(segment);
    }

    let mut result = String::with_capacity(segment.len());
    let mut in_sq = false;
    let mut in_dq = false;
    let mut escape = false;
    for ch in segment.chars() {
        if escape {
            result.push(ch);
            escape = false;
            continue;
        }
        match ch {
            '\\' => {
                result.push(ch);
                escape = true;
            }
            '"' => {
                result.push(ch);
                if !in_sq {
                    in_dq = !in_dq;
                }
            }
            '\'' => {
                if in_dq {
                    result.push(ch);
                } else {
                    result.push('"');
                    in_sq = !in_sq;
                }
            }
            _ => result.push(ch),
        }
    }
    Cow::Owned(result)
}

/// Copies one full UTF-8 character from `input` at `*i`, advancing `*i`.
fn push_char(out: &mut String, input: &str, i: &mut usize) {
    let len = chars::utf8_len(input.as_bytes()[*i]);
    let end = (*i + len).min(input.len());
    out.push_str(&input[*i..end]);
    *i = end;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_call_in_object_value() {
        let out = wrap_function_like_values(r#"{a: q({b:"mam ma"})}"#, "#");
        assert_eq!(out, r##"{a: "#q({b:\"mam ma\"})"}"##);
    }

    #[test]
    fn test_plain_values_untouched() {
        assert_eq!(
            wrap_function_like_values("{a: 123, b: hello}", "#"),
            "{a: 123, b: hello}"
        );
        assert_eq!(
            wrap_function_like_values(r#"{a: "q(1)"}"#, "#"),
            r#"{a: "q(1)"}"#
        );
    }

    #[test]
    fn test_nested_calls_wrapped_whole() {
        let out = wrap_function_like_values("{b: q(20 + q(30 + q(50)))}", "#");
        assert_eq!(out, r##"{b: "#q(20 + q(30 + q(50)))"}"##);
    }

    #[test]
    fn test_single_quotes_normalized_only_with_containers() {
        let out = wrap_function_like_values("{a: q({b:'mam ma'})}", "#");
        assert_eq!(out, r##"{a: "#q({b:\"mam ma\"})"}"##);
        // no braces or brackets in the span: author quoting kept
        let out = wrap_function_like_values("{f: q('iii') + 1}", "#");
        assert_eq!(out, r##"{f: "#q('iii') + 1"}"##);
    }

    #[test]
    fn test_segment_has_fn_call() {
        assert!(segment_has_fn_call("q(1)"));
        assert!(segment_has_fn_call("9 * q (10) + 1"));
        assert!(segment_has_fn_call("sum({x: 1})"));
        assert!(!segment_has_fn_call("10 + 1 * 1"));
        assert!(!segment_has_fn_call(r#""q(1)""#));
        assert!(!segment_has_fn_call("(1 + 2)"));
    }

    #[test]
    fn test_top_level_not_prewrapped() {
        // top-level spans are left for the main pass to capture whole
        assert_eq!(wrap_function_like_values("q(1) + 2", "#"), "q(1) + 2");
    }
}
