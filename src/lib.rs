//! Immutable, path-addressable document values with field-mask derivation.
//!
//! `fieldstone` is the value model at the heart of an offline-capable
//! document-database client: documents are immutable trees of typed values,
//! writes are staged through a builder, and the set of assigned leaf fields
//! can be derived as a [`FieldMask`] to drive patch-style sync.
//!
//! # Core Concepts
//!
//! - **[`Value`]**: Closed tagged union over every field kind the remote
//!   service understands (scalars, arrays, maps)
//! - **[`FieldPath`]**: Ordered field-name segments locating a value in a
//!   document
//! - **[`DocumentValue`]**: Immutable document content, map-kind at its root
//! - **[`DocumentValueBuilder`]**: Single-owner staging structure for
//!   set/delete mutations
//! - **[`FieldMask`]**: The set of leaf paths a document has assigned
//!
//! # Stage/commit writes
//!
//! ```text
//! DocumentValue  --to_builder-->  Builder  --set/delete*-->  --build-->  DocumentValue'
//! ```
//!
//! Built documents are never retroactively altered: the builder owns a
//! private snapshot of the root mapping and `build` consumes the builder.
//!
//! # Quick Start
//!
//! ```
//! use fieldstone::{field_path, DocumentValue, FieldMask, Value};
//!
//! let mut builder = DocumentValue::empty().to_builder();
//! builder.set(&field_path!("owner", "name"), "Jonny").unwrap();
//! builder.set(&field_path!("sort"), 1i64).unwrap();
//! let doc = builder.build();
//!
//! // Reads descend by path; absence is a defined outcome, not an error.
//! assert_eq!(
//!     doc.get(&field_path!("owner", "name")),
//!     Some(&Value::String("Jonny".into()))
//! );
//! assert_eq!(doc.get(&field_path!("owner", "age")), None);
//!
//! // The mask names exactly the assigned leaf fields.
//! assert_eq!(
//!     doc.field_mask(),
//!     FieldMask::from_paths([field_path!("owner", "name"), field_path!("sort")])
//! );
//! ```
//!
//! # Wire interoperability
//!
//! [`Value`] round-trips losslessly through the service's typed wire format
//! via serde:
//!
//! ```
//! use fieldstone::Value;
//! use serde_json::json;
//!
//! let wire = serde_json::to_value(&Value::Integer(42)).unwrap();
//! assert_eq!(wire, json!({"integerValue": "42"}));
//! ```

mod error;
mod mask;
mod object;
mod path;
mod value;
mod wire;

pub use error::{StoneError, StoneResult};
pub use mask::FieldMask;
pub use object::{DocumentValue, DocumentValueBuilder};
pub use path::FieldPath;
pub use value::{ArrayValue, GeoPoint, MapValue, Timestamp, Value};
