//! Field masks: sets of field paths describing assigned leaf locations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::path::FieldPath;

/// A set of [`FieldPath`]s denoting exactly which leaf locations are assigned.
///
/// Masks drive patch-style sync: the paths in a mask are the fields the
/// server should consider written. Order is irrelevant; two masks are equal
/// iff their path sets are equal. Masks never contain the empty path.
///
/// # Examples
///
/// ```
/// use fieldstone::{field_path, FieldMask};
///
/// let mask = FieldMask::from_paths([field_path!("a", "b"), field_path!("d")]);
/// assert!(mask.contains(&field_path!("a", "b")));
/// assert_eq!(mask.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMask(BTreeSet<FieldPath>);

impl FieldMask {
    /// Create an empty mask.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mask from a collection of paths.
    #[inline]
    pub fn from_paths(paths: impl IntoIterator<Item = FieldPath>) -> Self {
        paths.into_iter().collect()
    }

    /// Get the underlying path set.
    #[inline]
    pub fn paths(&self) -> &BTreeSet<FieldPath> {
        &self.0
    }

    /// Check if the mask contains exactly this path.
    #[inline]
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.0.contains(path)
    }

    /// Check if the mask covers the given path.
    ///
    /// A path is covered when the mask contains it or any prefix of it: a
    /// mask entry at `a.b` covers writes anywhere under `a.b`. This is the
    /// question the sync layer asks when deciding whether a patch touches a
    /// field.
    pub fn covers(&self, path: &FieldPath) -> bool {
        self.0.iter().any(|masked| masked.is_prefix_of(path))
    }

    /// Get the number of paths in the mask.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the mask is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the paths in the mask.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FieldPath> {
        self.0.iter()
    }
}

impl FromIterator<FieldPath> for FieldMask {
    fn from_iter<I: IntoIterator<Item = FieldPath>>(iter: I) -> Self {
        FieldMask(iter.into_iter().filter(|p| !p.is_empty()).collect())
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{path}")?;
        }
        write!(f, "}}")
    }
}
