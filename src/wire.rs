//! The typed wire representation of document values.
//!
//! The remote service exchanges values as JSON objects with exactly one key,
//! the kind tag: `{"integerValue": "42"}`, `{"mapValue": {"fields": {...}}}`,
//! and so on. [`Value`] serializes to and deserializes from that shape
//! losslessly. Integer payloads travel as decimal strings (the service's
//! JSON mapping for 64-bit integers) and byte payloads as standard base64.
//!
//! A payload that does not match its tag, or an unknown tag, fails
//! deserialization; the model layer then never sees a malformed value.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::value::{ArrayValue, GeoPoint, MapValue, Timestamp, Value};

/// Wire shape of an array payload: `{"values": [...]}`.
///
/// The service omits `values` entirely for an empty array.
#[derive(Serialize, Deserialize)]
struct WireArray {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    values: Vec<Value>,
}

/// Wire shape of a map payload: `{"fields": {...}}`.
///
/// The service omits `fields` entirely for an empty map.
#[derive(Serialize, Deserialize)]
struct WireMap {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    fields: BTreeMap<String, Value>,
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Value::Null => map.serialize_entry("nullValue", &())?,
            Value::Boolean(b) => map.serialize_entry("booleanValue", b)?,
            Value::Integer(i) => map.serialize_entry("integerValue", &i.to_string())?,
            Value::Double(d) => map.serialize_entry("doubleValue", d)?,
            Value::Timestamp(ts) => map.serialize_entry("timestampValue", ts)?,
            Value::String(s) => map.serialize_entry("stringValue", s)?,
            Value::Bytes(b) => map.serialize_entry("bytesValue", &BASE64.encode(b))?,
            Value::Reference(r) => map.serialize_entry("referenceValue", r)?,
            Value::GeoPoint(gp) => map.serialize_entry("geoPointValue", gp)?,
            Value::Array(arr) => map.serialize_entry(
                "arrayValue",
                &WireArray {
                    values: arr.values().to_vec(),
                },
            )?,
            Value::Map(m) => map.serialize_entry(
                "mapValue",
                &WireMap {
                    fields: m.fields().clone(),
                },
            )?,
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a wire value object with exactly one kind tag")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let tag: String = map
            .next_key()?
            .ok_or_else(|| de::Error::custom("wire value has no kind tag"))?;

        let value = match tag.as_str() {
            "nullValue" => {
                // The payload is null (or the NULL_VALUE enum name); either
                // way it carries no information.
                let _: IgnoredAny = map.next_value()?;
                Value::Null
            }
            "booleanValue" => Value::Boolean(map.next_value()?),
            "integerValue" => {
                let repr: String = map.next_value()?;
                let i = repr.parse::<i64>().map_err(|_| {
                    de::Error::custom(format_args!("invalid integerValue payload: {repr:?}"))
                })?;
                Value::Integer(i)
            }
            "doubleValue" => Value::Double(map.next_value()?),
            "timestampValue" => Value::Timestamp(map.next_value::<Timestamp>()?),
            "stringValue" => Value::String(map.next_value()?),
            "bytesValue" => {
                let repr: String = map.next_value()?;
                let bytes = BASE64.decode(&repr).map_err(|_| {
                    de::Error::custom(format_args!("invalid base64 in bytesValue: {repr:?}"))
                })?;
                Value::Bytes(bytes)
            }
            "referenceValue" => Value::Reference(map.next_value()?),
            "geoPointValue" => Value::GeoPoint(map.next_value::<GeoPoint>()?),
            "arrayValue" => {
                let arr: WireArray = map.next_value()?;
                Value::Array(arr.values.into_iter().collect())
            }
            "mapValue" => {
                let m: WireMap = map.next_value()?;
                Value::Map(MapValue::from_fields(m.fields))
            }
            other => {
                return Err(de::Error::custom(format_args!(
                    "unknown value kind tag `{other}`"
                )));
            }
        };

        if map.next_key::<String>()?.is_some() {
            return Err(de::Error::custom(
                "wire value has more than one kind tag",
            ));
        }
        Ok(value)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ValueVisitor)
    }
}

// ArrayValue's own serde goes through the payload shape so that a bare
// payload (`{"values": [...]}`) can be embedded where the service expects
// one, e.g. in query cursors.
impl Serialize for ArrayValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireArray {
            values: self.values().to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ArrayValue {
    fn deserialize<D>(deserializer: D) -> Result<ArrayValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr = WireArray::deserialize(deserializer)?;
        Ok(arr.values.into_iter().collect())
    }
}

impl Serialize for MapValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireMap {
            fields: self.fields().clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MapValue {
    fn deserialize<D>(deserializer: D) -> Result<MapValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        let m = WireMap::deserialize(deserializer)?;
        Ok(MapValue::from_fields(m.fields))
    }
}
