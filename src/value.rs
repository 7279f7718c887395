//! The document value model.
//!
//! [`Value`] is a closed tagged union over every kind of field content the
//! remote document service understands: nine scalar kinds plus the two
//! structural kinds (ordered arrays and keyed maps). Values are immutable
//! once constructed; mutation happens through
//! [`DocumentValueBuilder`](crate::DocumentValueBuilder), which rebuilds the
//! affected branch rather than touching shared values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A point in time, as whole seconds since the Unix epoch plus a
/// nanosecond remainder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Seconds since the Unix epoch.
    pub seconds: i64,
    /// Nanoseconds within the second, `0..=999_999_999`.
    pub nanos: i32,
}

impl Timestamp {
    /// Create a timestamp from seconds and a nanosecond remainder.
    #[inline]
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Create a timestamp from microseconds since the Unix epoch.
    ///
    /// The remainder is carried into the nanos field, so the conversion is
    /// exact: `nanos = (micros mod 1_000_000) * 1000`. Euclidean division
    /// keeps nanos non-negative for pre-epoch instants.
    #[inline]
    pub fn from_micros(micros: i64) -> Self {
        Self {
            seconds: micros.div_euclid(1_000_000),
            nanos: (micros.rem_euclid(1_000_000) * 1000) as i32,
        }
    }
}

/// A geographic point: latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, `-90.0..=90.0`.
    pub latitude: f64,
    /// Longitude in degrees, `-180.0..=180.0`.
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a geographic point.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// An ordered sequence of values. Order is significant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArrayValue {
    values: Vec<Value>,
}

impl ArrayValue {
    /// Create an array value from a vector of values.
    #[inline]
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Get the values in this array.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Get the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if this array is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<Value> for ArrayValue {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// A keyed mapping from field name to value.
///
/// Keys are unique; iteration order is deterministic (sorted) but carries no
/// document-level meaning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapValue {
    fields: BTreeMap<String, Value>,
}

impl MapValue {
    /// Create an empty map value.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map value from a field mapping.
    #[inline]
    pub fn from_fields(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Get the field mapping.
    #[inline]
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Consume the map and return the field mapping.
    #[inline]
    pub fn into_fields(self) -> BTreeMap<String, Value> {
        self.fields
    }

    /// Mutable access to the field mapping, for the builder's recursion.
    #[inline]
    pub(crate) fn fields_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.fields
    }

    /// Look up a field by name.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Check if a field is present.
    #[inline]
    pub fn contains_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Get the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if this map has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in key order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl FromIterator<(String, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A single document field value.
///
/// Every value is exactly one of these kinds; the tag and the payload are
/// inseparable, so a kind/payload mismatch cannot be constructed. Equality
/// is structural: kind first, then payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An explicit null. Present at its path, unlike an absent field.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit IEEE float.
    Double(f64),
    /// A point in time.
    Timestamp(Timestamp),
    /// A UTF-8 string.
    String(String),
    /// An opaque byte sequence.
    Bytes(Vec<u8>),
    /// A reference to another document, as a full resource name.
    Reference(String),
    /// A geographic point.
    GeoPoint(GeoPoint),
    /// An ordered sequence of values.
    Array(ArrayValue),
    /// A keyed mapping with unique string keys.
    Map(MapValue),
}

impl Value {
    /// Create an empty map value.
    #[inline]
    pub fn empty_map() -> Self {
        Value::Map(MapValue::new())
    }

    /// Get the name of this value's kind, for diagnostics.
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Double(_) => "double",
            Value::Timestamp(_) => "timestamp",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Reference(_) => "reference",
            Value::GeoPoint(_) => "geo_point",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }

    /// Check if this value is a map.
    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is an array.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this value is the explicit null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the map payload if this is a map value.
    #[inline]
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get the array payload if this is an array value.
    #[inline]
    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get the string payload if this is a string value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer payload if this is an integer value.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float payload if this is a double value.
    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the boolean payload if this is a boolean value.
    #[inline]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

impl From<GeoPoint> for Value {
    fn from(v: GeoPoint) -> Self {
        Value::GeoPoint(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<ArrayValue> for Value {
    fn from(v: ArrayValue) -> Self {
        Value::Array(v)
    }
}

impl From<MapValue> for Value {
    fn from(v: MapValue) -> Self {
        Value::Map(v)
    }
}
