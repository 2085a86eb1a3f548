//! Canonical serialization: deterministic JSON text for cache keys and
//! signatures.
//!
//! [`canonicalize`] turns an already-parsed value into JSON text with a
//! stable shape: object keys sorted lexicographically at every level, no
//! incidental whitespace, non-finite floats collapsed to `null`. Two values
//! that compare equal produce byte-identical text regardless of insertion
//! order, which is what makes the output usable as a content address.
//!
//! This module is independent of the transpiler — it consumes values a
//! standard JSON parser produced from the transpiler's output, never the
//! relaxed source text itself. It is used only for caching and signing,
//! never for execution.
//!
//! ## Usage
//!
//! ```rust
//! use relaxed_json::canonicalize;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Unsorted {
//!     b: u32,
//!     a: u32,
//! }
//!
//! let text = canonicalize(&Unsorted { b: 1, a: 2 }).unwrap();
//! assert_eq!(text, r#"{"a":2,"b":1}"#);
//! ```

use crate::error::{Error, Result};
use serde::{ser, Serialize};
use std::fmt::Write as _;

/// Serializes any `T: Serialize` to canonical JSON text.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::canonicalize;
///
/// let value: serde_json::Value = serde_json::from_str(r#"{"b": 1, "a": 2}"#).unwrap();
/// assert_eq!(canonicalize(&value).unwrap(), r#"{"a":2,"b":1}"#);
/// ```
///
/// # Errors
///
/// Returns [`Error::Unstringifiable`] for values with no canonical JSON
/// form, e.g. maps with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn canonicalize<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut out = String::with_capacity(128);
    value.serialize(CanonicalSerializer { out: &mut out })?;
    Ok(out)
}

/// The canonical JSON serializer.
///
/// Streams sequences directly; buffers map and struct entries so they can
/// be emitted in sorted key order.
struct CanonicalSerializer<'a> {
    out: &'a mut String,
}

impl<'a> CanonicalSerializer<'a> {
    fn write_string(&mut self, s: &str) {
        write_json_string(self.out, s);
    }
}

fn write_json_string(out: &mut String, s: &str) {
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

impl<'a> ser::Serializer for CanonicalSerializer<'a> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqWriter<'a>;
    type SerializeTuple = SeqWriter<'a>;
    type SerializeTupleStruct = SeqWriter<'a>;
    type SerializeTupleVariant = TupleVariantWriter<'a>;
    type SerializeMap = MapWriter<'a>;
    type SerializeStruct = MapWriter<'a>;
    type SerializeStructVariant = StructVariantWriter<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.out.push_str(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        let _ = write!(self.out, "{}", v);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        let _ = write!(self.out, "{}", v);
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        // Non-finite numbers have no JSON form; they collapse to null so
        // canonical text stays parseable.
        if v.is_finite() {
            let _ = write!(self.out, "{}", v);
        } else {
            self.out.push_str("null");
        }
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(mut self, v: &str) -> Result<()> {
        self.write_string(v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        use ser::SerializeSeq;
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.out.push_str("null");
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        mut self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.out.push('{');
        self.write_string(variant);
        self.out.push(':');
        value.serialize(CanonicalSerializer { out: self.out })?;
        self.out.push('}');
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.out.push('[');
        Ok(SeqWriter {
            out: self.out,
            first: true,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        mut self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.out.push('{');
        self.write_string(variant);
        self.out.push_str(":[");
        Ok(TupleVariantWriter {
            out: self.out,
            first: true,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapWriter {
            out: self.out,
            entries: Vec::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(MapWriter {
            out: self.out,
            entries: Vec::with_capacity(len),
            pending_key: None,
        })
    }

    fn serialize_struct_variant(
        mut self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.out.push('{');
        self.write_string(variant);
        self.out.push(':');
        Ok(StructVariantWriter {
            out: self.out,
            entries: Vec::with_capacity(len),
        })
    }
}

/// Streaming writer for sequences and tuples.
pub struct SeqWriter<'a> {
    out: &'a mut String,
    first: bool,
}

impl<'a> SeqWriter<'a> {
    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if !self.first {
            self.out.push(',');
        }
        self.first = false;
        value.serialize(CanonicalSerializer { out: self.out })
    }
}

impl<'a> ser::SerializeSeq for SeqWriter<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.out.push(']');
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for SeqWriter<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.out.push(']');
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for SeqWriter<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.out.push(']');
        Ok(())
    }
}

/// Writer for `Enum::Variant(a, b)` — an object wrapping a streamed array.
pub struct TupleVariantWriter<'a> {
    out: &'a mut String,
    first: bool,
}

impl<'a> ser::SerializeTupleVariant for TupleVariantWriter<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if !self.first {
            self.out.push(',');
        }
        self.first = false;
        value.serialize(CanonicalSerializer { out: self.out })
    }

    fn end(self) -> Result<()> {
        self.out.push_str("]}");
        Ok(())
    }
}

/// Buffering writer for maps and structs: entries are collected as
/// `(key, canonical value text)` pairs and emitted sorted by key.
pub struct MapWriter<'a> {
    out: &'a mut String,
    entries: Vec<(String, String)>,
    pending_key: Option<String>,
}

fn write_sorted_entries(out: &mut String, mut entries: Vec<(String, String)>) {
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    out.push('{');
    for (idx, (key, value)) in entries.iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        write_json_string(out, key);
        out.push(':');
        out.push_str(value);
    }
    out.push('}');
}

impl<'a> ser::SerializeMap for MapWriter<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match self.pending_key.take() {
            Some(key) => key,
            None => return Err(Error::unstringifiable("map value without a key")),
        };
        let mut text = String::new();
        value.serialize(CanonicalSerializer { out: &mut text })?;
        self.entries.push((key, text));
        Ok(())
    }

    fn end(self) -> Result<()> {
        write_sorted_entries(self.out, self.entries);
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for MapWriter<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let mut text = String::new();
        value.serialize(CanonicalSerializer { out: &mut text })?;
        self.entries.push((key.to_string(), text));
        Ok(())
    }

    fn end(self) -> Result<()> {
        write_sorted_entries(self.out, self.entries);
        Ok(())
    }
}

/// Writer for `Enum::Variant { .. }` — sorted fields inside the variant
/// wrapper object.
pub struct StructVariantWriter<'a> {
    out: &'a mut String,
    entries: Vec<(String, String)>,
}

impl<'a> ser::SerializeStructVariant for StructVariantWriter<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let mut text = String::new();
        value.serialize(CanonicalSerializer { out: &mut text })?;
        self.entries.push((key.to_string(), text));
        Ok(())
    }

    fn end(self) -> Result<()> {
        write_sorted_entries(self.out, self.entries);
        self.out.push('}');
        Ok(())
    }
}

/// Key serializer: canonical JSON object keys must be strings. Primitive
/// scalar keys are stringified; anything structural is unstringifiable.
struct MapKeySerializer;

impl MapKeySerializer {
    fn fail<T>(kind: &str) -> Result<T> {
        Err(Error::unstringifiable(&format!(
            "map key must be a string, got {kind}"
        )))
    }
}

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Self::fail("a float")
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Self::fail("a float")
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Self::fail("bytes")
    }

    fn serialize_none(self) -> Result<String> {
        Self::fail("null")
    }

    fn serialize_some<T>(self, _value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Self::fail("an option")
    }

    fn serialize_unit(self) -> Result<String> {
        Self::fail("null")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Self::fail("a unit struct")
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Self::fail("an enum variant")
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Self::fail("a sequence")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Self::fail("a tuple")
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Self::fail("a tuple struct")
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Self::fail("an enum variant")
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Self::fail("a map")
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Self::fail("a struct")
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Self::fail("an enum variant")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_scalars() {
        assert_eq!(canonicalize(&42i64).unwrap(), "42");
        assert_eq!(canonicalize(&true).unwrap(), "true");
        assert_eq!(canonicalize(&1.5f64).unwrap(), "1.5");
        assert_eq!(canonicalize("hi").unwrap(), r#""hi""#);
        assert_eq!(canonicalize(&Option::<i32>::None).unwrap(), "null");
    }

    #[test]
    fn test_non_finite_floats_collapse_to_null() {
        assert_eq!(canonicalize(&f64::NAN).unwrap(), "null");
        assert_eq!(canonicalize(&f64::INFINITY).unwrap(), "null");
        assert_eq!(canonicalize(&f64::NEG_INFINITY).unwrap(), "null");
    }

    #[test]
    fn test_map_keys_sorted() {
        let mut map = HashMap::new();
        map.insert("zeta".to_string(), 1);
        map.insert("alpha".to_string(), 2);
        map.insert("mid".to_string(), 3);
        assert_eq!(
            canonicalize(&map).unwrap(),
            r#"{"alpha":2,"mid":3,"zeta":1}"#
        );
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(canonicalize("a\"b\\c\nd").unwrap(), r#""a\"b\\c\nd""#);
        assert_eq!(canonicalize("\u{0001}").unwrap(), "\"\\u0001\"");
    }

    #[test]
    fn test_non_string_map_key_is_unstringifiable() {
        let mut map = HashMap::new();
        map.insert(vec![1, 2], "x");
        assert!(matches!(
            canonicalize(&map),
            Err(Error::Unstringifiable(_))
        ));
    }

    #[test]
    fn test_integer_map_keys_stringified() {
        let mut map = HashMap::new();
        map.insert(10u32, "x");
        map.insert(2u32, "y");
        // sorted lexicographically as strings
        assert_eq!(canonicalize(&map).unwrap(), r#"{"10":"x","2":"y"}"#);
    }
}
