//! Attribute values held by represented objects

use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;
use std::ops::Index;

use crate::item::ItemRef;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value, rendered as `nil="true"`
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Ordered sequence of values
    Array(Array),
    /// Nested attribute map
    Object(AttributeMap),
    /// Instance of a type that renders itself
    Item(ItemRef),
    /// Items rendered back-to-back without an enclosing tag
    Unwrapped(UnwrappedCollection),
}

impl Value {
    /// Returns true if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&AttributeMap> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&ItemRef> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Name of the `type` hint written for this value, if any
    pub(crate) fn type_hint(&self) -> Option<&'static str> {
        match self {
            Self::Integer(_) => Some("integer"),
            Self::Float(_) => Some("float"),
            Self::Bool(_) => Some("boolean"),
            Self::Array(_) => Some("array"),
            // Blank text reads back as null unless it is marked
            Self::String(s) if s.trim().is_empty() => Some("string"),
            _ => None,
        }
    }

    /// Text content of a scalar leaf
    pub(crate) fn leaf_text(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Integer(n) => Some(n.to_string()),
            Self::Float(n) => Some(n.to_string()),
            Self::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<AttributeMap> for Value {
    fn from(value: AttributeMap) -> Self {
        Self::Object(value)
    }
}

impl From<ItemRef> for Value {
    fn from(value: ItemRef) -> Self {
        Self::Item(value)
    }
}

impl From<UnwrappedCollection> for Value {
    fn from(value: UnwrappedCollection) -> Self {
        Self::Unwrapped(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(Array(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// An order-preserving map of attribute names to values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeMap(pub(crate) IndexMap<String, Value>);

impl AttributeMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Inserts a key-value pair, keeping the key's original position if it
    /// already existed. Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Chaining form of [`AttributeMap::insert`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes a key, preserving the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Position of a key in insertion order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.0.get_index_of(key)
    }

    /// Inserts at `index`, moving later entries back
    pub(crate) fn insert_at(&mut self, index: usize, key: String, value: Value) {
        let index = index.min(self.0.len());
        self.0.shift_insert(index, key, value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Index<&str> for AttributeMap {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, key: &str) -> &Self::Output {
        &self.0[key]
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<IndexMap<String, Value>> for AttributeMap {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for AttributeMap {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An ordered sequence of values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array(pub(crate) Vec<Value>);

impl Array {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl Index<usize> for Array {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Sequence rendered as sibling fragments with no wrapping element.
///
/// Only meaningful to the serializer: it lives for one render call and is
/// never produced by deserialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnwrappedCollection(Vec<Value>);

impl UnwrappedCollection {
    pub fn new(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self(items.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for UnwrappedCollection {
    fn from(items: Vec<Value>) -> Self {
        Self(items)
    }
}

impl From<Array> for UnwrappedCollection {
    fn from(items: Array) -> Self {
        Self(items.0)
    }
}

impl<'a> IntoIterator for &'a UnwrappedCollection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    use super::{Array, AttributeMap, UnwrappedCollection, Value};

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Null => serializer.serialize_unit(),
                Self::Bool(b) => serializer.serialize_bool(*b),
                Self::Integer(n) => serializer.serialize_i64(*n),
                Self::Float(n) => serializer.serialize_f64(*n),
                Self::String(s) => serializer.serialize_str(s),
                Self::Array(arr) => arr.serialize(serializer),
                Self::Object(map) => map.serialize(serializer),
                Self::Item(item) => serializer.serialize_str(&item.to_fragment()),
                Self::Unwrapped(items) => items.serialize(serializer),
            }
        }
    }

    impl Serialize for AttributeMap {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    impl Serialize for Array {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self {
                seq.serialize_element(value)?;
            }
            seq.end()
        }
    }

    impl Serialize for UnwrappedCollection {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self {
                seq.serialize_element(value)?;
            }
            seq.end()
        }
    }
}
