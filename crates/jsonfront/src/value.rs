//! JSON value tree.
//!
//! A parsed document is a tree of [`Value`] nodes with a single owner per
//! node: an [`Array`] owns its elements, an [`Object`] owns a singly linked
//! chain of [`Member`]s kept in source order, and every member owns its key
//! and its value. Nothing is shared, so the tree has no cycles and no
//! cross-references.
//!
//! Strings and keys are byte strings. Escape markers are copied without being
//! decoded, so a string holds whatever bytes the input held.
use alloc::{boxed::Box, string::String, vec::Vec};
use core::{fmt, iter::FusedIterator, ops::Index};

use bstr::{BStr, BString, ByteSlice};

/// Backing capacity allocated for the first element of an [`Array`].
///
/// Once that storage is full it doubles, giving amortized constant-time
/// appends.
pub const INITIAL_ARRAY_CAPACITY: usize = 16;

/// The discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// [`Value::Object`]
    Object,
    /// [`Value::Array`]
    Array,
    /// [`Value::String`]
    String,
    /// [`Value::Integer`]
    Integer,
    /// [`Value::Float`]
    Float,
    /// [`Value::True`]
    True,
    /// [`Value::False`]
    False,
    /// [`Value::Null`]
    Null,
    /// [`Value::Error`]
    Error,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::Object => "object",
            Tag::Array => "array",
            Tag::String => "string",
            Tag::Integer => "integer",
            Tag::Float => "float",
            Tag::True => "true",
            Tag::False => "false",
            Tag::Null => "null",
            Tag::Error => "error",
        })
    }
}

/// A node of a parsed document.
///
/// # Examples
///
/// ```
/// use jsonfront::{Tag, Value, parse};
///
/// let v = parse(r#"{"key": [1, "two", null]}"#);
/// assert_eq!(v.tag(), Tag::Object);
/// assert_eq!(v.to_string(), r#"{"key":[1,"two",null]}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// An object with its members in source order.
    Object(Object),
    /// An array of owned elements.
    Array(Array),
    /// A string with escape markers removed but not decoded.
    String(BString),
    /// A signed 64-bit integer.
    Integer(i64),
    /// A floating point number. The parser never produces this variant.
    Float(f64),
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// The `null` literal.
    #[default]
    Null,
    /// The result of a failed parse.
    Error,
}

impl Value {
    /// Returns the discriminant of this value.
    #[must_use]
    pub fn tag(&self) -> Tag {
        match self {
            Value::Object(_) => Tag::Object,
            Value::Array(_) => Tag::Array,
            Value::String(_) => Tag::String,
            Value::Integer(_) => Tag::Integer,
            Value::Float(_) => Tag::Float,
            Value::True => Tag::True,
            Value::False => Tag::False,
            Value::Null => Tag::Null,
            Value::Error => Tag::Error,
        }
    }

    /// Returns `true` if the value is an [`Object`].
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is an [`Array`].
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is a [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is an [`Integer`](Value::Integer).
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`True`](Value::True) or
    /// [`False`](Value::False).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is the result of a failed parse.
    ///
    /// ```
    /// assert!(jsonfront::parse(r#""abc"#).is_error());
    /// assert!(!jsonfront::parse("[]").is_error());
    /// ```
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub(crate) fn is_container(&self) -> bool {
        matches!(self, Self::Object(..) | Self::Array(..))
    }

    /// Returns the object payload, if any.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the array payload, if any.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_bstr(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(s.as_bstr()),
            _ => None,
        }
    }

    /// Returns the string payload as raw bytes, if any.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Returns the string payload if it is valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|bytes| bytes.to_str().ok())
    }

    /// Returns the integer payload, if any.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the float payload, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(n) => Some(n),
            _ => None,
        }
    }

    /// Returns `Some(true)` for [`True`](Value::True), `Some(false)` for
    /// [`False`](Value::False) and `None` otherwise.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// Looks up the first member named `key`.
    ///
    /// Returns `None` if this is not an object or no member matches. Keys are
    /// compared byte for byte and the first occurrence of a duplicated key
    /// wins.
    ///
    /// ```
    /// let v = jsonfront::parse(r#"{"a": 1, "a": 2}"#);
    /// assert_eq!(v.get("a").and_then(jsonfront::Value::as_i64), Some(1));
    /// assert!(v.get("b").is_none());
    /// assert!(jsonfront::parse("[1]").get("a").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v.into())
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

// ------------------------------------------------------------------------------------------------
// Arrays
// ------------------------------------------------------------------------------------------------

/// An owned, growable sequence of values.
///
/// An empty array owns no backing storage. The first element allocates room
/// for [`INITIAL_ARRAY_CAPACITY`] values and the storage doubles whenever it
/// fills up.
#[derive(Clone, Default, PartialEq)]
pub struct Array {
    pub(crate) elements: Vec<Value>,
}

impl Array {
    /// Creates an empty array without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Appends `value`, doubling the backing storage when it is full.
    pub fn push(&mut self, value: Value) {
        let capacity = self.elements.capacity();
        if self.elements.len() == capacity {
            let additional = if capacity == 0 {
                INITIAL_ARRAY_CAPACITY
            } else {
                capacity
            };
            self.elements.reserve_exact(additional);
            if capacity != 0 {
                tracing::trace!(
                    from = capacity,
                    to = self.elements.capacity(),
                    "array storage doubled"
                );
            }
        }
        self.elements.push(value);
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements the backing storage can hold without growing.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Iterates over the elements in source order.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Borrows the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    /// Takes the elements out of the array.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<Value> {
        core::mem::take(&mut self.elements)
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Index<usize> for Array {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.elements[index]
    }
}

impl From<Vec<Value>> for Array {
    fn from(elements: Vec<Value>) -> Self {
        Self { elements }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut array = Array::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ------------------------------------------------------------------------------------------------
// Objects
// ------------------------------------------------------------------------------------------------

/// A key/value pair owned by an [`Object`], linked to the member that
/// followed it in the source.
pub struct Member {
    key: BString,
    pub(crate) value: Value,
    pub(crate) next: Option<Box<Member>>,
}

impl Member {
    pub(crate) fn new(key: BString, value: Value) -> Self {
        Self {
            key,
            value,
            next: None,
        }
    }

    /// The member's key, with escape markers removed but not decoded.
    #[must_use]
    pub fn key(&self) -> &BStr {
        self.key.as_bstr()
    }

    /// The member's value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The member that follows this one, if any.
    #[must_use]
    pub fn next(&self) -> Option<&Member> {
        self.next.as_deref()
    }

    fn has_key(&self, key: &[u8]) -> bool {
        let own: &[u8] = self.key.as_ref();
        own == key
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// An ordered collection of members.
///
/// Members form a singly linked chain in the order they appeared in the
/// source. An object without members owns nothing. Duplicate keys are kept;
/// lookups return the first one.
#[derive(Default)]
pub struct Object {
    pub(crate) head: Option<Box<Member>>,
    pub(crate) len: usize,
}

impl Object {
    /// Creates an object with no members.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of members, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first member in source order.
    #[must_use]
    pub fn first(&self) -> Option<&Member> {
        self.head.as_deref()
    }

    /// Iterates over the members in source order.
    pub fn iter(&self) -> Members<'_> {
        Members {
            next: self.first(),
            remaining: self.len,
        }
    }

    /// Iterates over the keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &BStr> {
        self.iter().map(Member::key)
    }

    /// Returns the value of the first member named `key`.
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        let key = key.as_ref();
        self.iter()
            .find(|member| member.has_key(key))
            .map(Member::value)
    }
}

impl Clone for Object {
    fn clone(&self) -> Self {
        self.iter()
            .map(|member| (member.key.clone(), member.value.clone()))
            .collect()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.key == b.key && a.value == b.value)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|member| (member.key(), member.value())))
            .finish()
    }
}

impl<K: Into<BString>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        let mut tail = &mut object.head;
        for (key, value) in iter {
            tail = &mut tail
                .insert(Box::new(Member::new(key.into(), value.into())))
                .next;
            object.len += 1;
        }
        object
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a Member;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of an [`Object`], in source order.
#[derive(Debug, Clone)]
pub struct Members<'a> {
    next: Option<&'a Member>,
    remaining: usize,
}

impl<'a> Iterator for Members<'a> {
    type Item = &'a Member;

    fn next(&mut self) -> Option<Self::Item> {
        let member = self.next?;
        self.next = member.next();
        self.remaining -= 1;
        Some(member)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Members<'_> {}

impl FusedIterator for Members<'_> {}

// ------------------------------------------------------------------------------------------------
// Text output
// ------------------------------------------------------------------------------------------------

/// Writes `src` as a quoted string. Valid UTF-8 reads back unchanged.
///
/// Only `"` and `\` need an escape marker, since the parser copies the byte
/// after a backslash verbatim. Invalid UTF-8 is replaced with U+FFFD.
pub(crate) fn write_quoted<W: fmt::Write>(src: &[u8], f: &mut W) -> fmt::Result {
    f.write_char('"')?;
    for chunk in src.utf8_chunks() {
        for c in chunk.valid().chars() {
            if matches!(c, '"' | '\\') {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        if !chunk.invalid().is_empty() {
            f.write_char(char::REPLACEMENT_CHARACTER)?;
        }
    }
    f.write_char('"')
}

/// Compact text form.
///
/// For trees the parser produces, the text parses back to the same tree as
/// long as every string and key is valid UTF-8. Invalid sequences are written
/// as U+FFFD, so they come back as that character. `Float` is written as a
/// decimal, which the parser reads back as a truncated `Integer`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Object(object) => fmt::Display::fmt(object, f),
            Value::Array(array) => fmt::Display::fmt(array, f),
            Value::String(s) => write_quoted(s.as_ref(), f),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::True => f.write_str("true"),
            Value::False => f.write_str("false"),
            Value::Null => f.write_str("null"),
            Value::Error => f.write_str("<error>"),
        }
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, member) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write_quoted(member.key.as_ref(), f)?;
            write!(f, ":{}", member.value)?;
        }
        f.write_str("}")
    }
}

// ------------------------------------------------------------------------------------------------
// serde
// ------------------------------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod serde_impls {
    use bstr::ByteSlice;
    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::{Array, Object, Value};

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Object(object) => object.serialize(serializer),
                Value::Array(array) => array.serialize(serializer),
                Value::String(s) => serializer.serialize_str(&s.to_str_lossy()),
                Value::Integer(n) => serializer.serialize_i64(*n),
                Value::Float(n) => serializer.serialize_f64(*n),
                Value::True => serializer.serialize_bool(true),
                Value::False => serializer.serialize_bool(false),
                Value::Null | Value::Error => serializer.serialize_unit(),
            }
        }
    }

    impl Serialize for Array {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl Serialize for Object {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for member in self {
                map.serialize_entry(&*member.key().to_str_lossy(), member.value())?;
            }
            map.end()
        }
    }
}
