//! Immutable document values and the mutation builder.
//!
//! A [`DocumentValue`] wraps a [`Value`] that is guaranteed to be of map
//! kind: the document's root. It is never mutated in place; writes go
//! through a [`DocumentValueBuilder`], which stages set/delete operations
//! against a snapshot of the root mapping and produces a fresh
//! `DocumentValue` on [`build`](DocumentValueBuilder::build).

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{StoneError, StoneResult};
use crate::mask::FieldMask;
use crate::path::FieldPath;
use crate::value::{MapValue, Value};

/// Immutable document content: a map-kind [`Value`] at its root.
///
/// `DocumentValue` instances are safely shared across readers; no method
/// ever mutates one. Staging changes starts with
/// [`to_builder`](DocumentValue::to_builder).
///
/// # Examples
///
/// ```
/// use fieldstone::{field_path, DocumentValue, Value};
///
/// let mut builder = DocumentValue::empty().to_builder();
/// builder.set(&field_path!("owner", "name"), "Jonny").unwrap();
/// let doc = builder.build();
///
/// assert_eq!(
///     doc.get(&field_path!("owner", "name")),
///     Some(&Value::String("Jonny".into()))
/// );
/// assert_eq!(doc.get(&field_path!("owner", "age")), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentValue {
    root: Value,
}

impl DocumentValue {
    /// Create a document value from a root [`Value`].
    ///
    /// # Panics
    ///
    /// Panics if `root` is not of map kind. A non-map root indicates a
    /// caller bug or corrupted wire data, never a recoverable condition.
    pub fn new(root: Value) -> Self {
        assert!(
            root.is_map(),
            "document root must be a map value, got {}",
            root.kind_name()
        );
        Self { root }
    }

    /// Create a document value from a root mapping.
    #[inline]
    pub fn from_map(map: MapValue) -> Self {
        Self {
            root: Value::Map(map),
        }
    }

    /// Create an empty document.
    #[inline]
    pub fn empty() -> Self {
        Self::from_map(MapValue::new())
    }

    /// Get the root value (the whole document as a [`Value`]).
    #[inline]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Get the root mapping.
    #[inline]
    pub fn fields(&self) -> &MapValue {
        match &self.root {
            Value::Map(map) => map,
            // Construction enforces the map-root invariant.
            _ => unreachable!("document root is always a map"),
        }
    }

    /// Look up the value at `path`.
    ///
    /// The empty path returns the document's own root value. A path that
    /// runs through a missing key or through a non-map intermediate returns
    /// `None`; absence is a defined outcome, never an error. An explicit
    /// null leaf at the exact path is present and returns `Value::Null`.
    pub fn get(&self, path: &FieldPath) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.iter() {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Extract the set of leaf field paths assigned in this document.
    ///
    /// Non-empty nested maps contribute only their flattened leaf paths,
    /// never an intermediate path; an *empty* nested map contributes its own
    /// path, preserving the fact that an empty object was explicitly set
    /// there. This mask is exactly what a full-document overwrite sends as
    /// its update mask.
    pub fn field_mask(&self) -> FieldMask {
        FieldMask::from_paths(extract_mask(self.fields()))
    }

    /// Create a builder seeded with a snapshot of this document's root
    /// mapping.
    ///
    /// The builder holds no reference back to this document; neither can
    /// observe the other's changes.
    pub fn to_builder(&self) -> DocumentValueBuilder {
        DocumentValueBuilder {
            fields: self.fields().fields().clone(),
        }
    }
}

impl Default for DocumentValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for DocumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentValue({} fields)", self.fields().len())
    }
}

impl Serialize for DocumentValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DocumentValue {
    /// Deserialize a document from its wire value.
    ///
    /// A well-formed wire value of non-map kind trips the fatal map-root
    /// invariant in [`DocumentValue::new`], mirroring the wire format's own
    /// type-safety guarantee.
    fn deserialize<D>(deserializer: D) -> Result<DocumentValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(DocumentValue::new(Value::deserialize(deserializer)?))
    }
}

fn extract_mask(map: &MapValue) -> BTreeSet<FieldPath> {
    let mut fields = BTreeSet::new();
    for (key, child) in map.iter() {
        let current = FieldPath::from_single_segment(key);
        match child {
            Value::Map(nested) => {
                let nested_paths = extract_mask(nested);
                if nested_paths.is_empty() {
                    // Preserve the explicitly-set empty map.
                    fields.insert(current);
                } else {
                    for nested_path in nested_paths {
                        fields.insert(current.append(&nested_path));
                    }
                }
            }
            _ => {
                fields.insert(current);
            }
        }
    }
    fields
}

/// A mutable staging structure for document mutations.
///
/// A builder is exclusively owned by its creator: it stages any number of
/// [`set`](DocumentValueBuilder::set) and
/// [`delete`](DocumentValueBuilder::delete) calls against its private
/// working mapping, then [`build`](DocumentValueBuilder::build) consumes it
/// and yields a new immutable [`DocumentValue`]. Consuming on build makes
/// reuse after build a compile error; re-staging starts from
/// [`DocumentValue::to_builder`] again.
///
/// # Examples
///
/// ```
/// use fieldstone::{field_path, DocumentValue, Value};
///
/// let doc = DocumentValue::empty();
/// let mut builder = doc.to_builder();
/// builder.set(&field_path!("a", "b"), 1i64).unwrap();
/// builder.delete(&field_path!("a", "c")).unwrap();
/// let next = builder.build();
///
/// assert_eq!(next.get(&field_path!("a", "b")), Some(&Value::Integer(1)));
/// assert_eq!(doc.get(&field_path!("a", "b")), None); // original untouched
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentValueBuilder {
    fields: BTreeMap<String, Value>,
}

impl DocumentValueBuilder {
    /// Create a builder for an empty document.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field at `path` to `value`.
    ///
    /// A single-segment path replaces whatever entry exists, of any kind.
    /// A deeper path descends through existing nested maps and replaces any
    /// non-map intermediate with a fresh map, so `set` always succeeds.
    ///
    /// Fails with [`StoneError::EmptyPath`] if `path` is empty.
    pub fn set(&mut self, path: &FieldPath, value: impl Into<Value>) -> StoneResult<&mut Self> {
        if path.is_empty() {
            return Err(StoneError::empty_path("set"));
        }
        set_recursively(&mut self.fields, path.segments(), value.into());
        Ok(self)
    }

    /// Remove the field at `path`.
    ///
    /// Removing an absent field is a no-op, as is deleting *through* a
    /// non-map value (there is no nested structure to descend into). A
    /// nested map emptied by deletion is left in place, not pruned.
    ///
    /// Fails with [`StoneError::EmptyPath`] if `path` is empty.
    pub fn delete(&mut self, path: &FieldPath) -> StoneResult<&mut Self> {
        if path.is_empty() {
            return Err(StoneError::empty_path("delete"));
        }
        delete_recursively(&mut self.fields, path.segments());
        Ok(self)
    }

    /// Consume the builder and produce an immutable [`DocumentValue`].
    pub fn build(self) -> DocumentValue {
        DocumentValue::from_map(MapValue::from_fields(self.fields))
    }
}

fn set_recursively(fields: &mut BTreeMap<String, Value>, segments: &[String], value: Value) {
    match segments {
        // Entry points reject the empty path.
        [] => {}
        [last] => {
            fields.insert(last.clone(), value);
        }
        [first, rest @ ..] => {
            // Descend into an existing nested map; anything else (missing
            // entry or non-map value) is discarded for a fresh map.
            let mut nested = match fields.remove(first) {
                Some(Value::Map(map)) => map.into_fields(),
                _ => BTreeMap::new(),
            };
            set_recursively(&mut nested, rest, value);
            fields.insert(first.clone(), Value::Map(MapValue::from_fields(nested)));
        }
    }
}

fn delete_recursively(fields: &mut BTreeMap<String, Value>, segments: &[String]) {
    match segments {
        [] => {}
        [last] => {
            fields.remove(last);
        }
        [first, rest @ ..] => {
            if let Some(Value::Map(nested)) = fields.get_mut(first) {
                delete_recursively(nested.fields_mut(), rest);
            }
            // A non-map entry stays untouched: deletes never convert a
            // primitive into an object.
        }
    }
}
