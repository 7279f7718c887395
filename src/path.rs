//! Field paths for navigating document structure.
//!
//! A [`FieldPath`] is an ordered sequence of field-name segments that locates
//! a value inside a document's nested map structure. The empty path denotes
//! the document root and is valid for reads only; mutation entry points
//! reject it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{StoneError, StoneResult};

/// An ordered sequence of field-name segments locating a value in a document.
///
/// Paths are immutable in spirit: the navigation methods (`append`,
/// `pop_first`, `child`) return new paths rather than mutating in place.
/// Equality, ordering, and hashing are segment-wise.
///
/// Segments are stored verbatim; escaping of separator characters inside a
/// segment is the concern of the path parser that produced it.
///
/// # Examples
///
/// ```
/// use fieldstone::FieldPath;
///
/// let path = FieldPath::root().child("users").child("alice");
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.first_segment(), Some("users"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Create an empty path (the document root).
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Create a single-segment path.
    #[inline]
    pub fn from_single_segment(segment: impl Into<String>) -> Self {
        Self(vec![segment.into()])
    }

    /// Append a segment and return the extended path (builder pattern).
    #[inline]
    pub fn child(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Push a segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Return a new path with `other`'s segments appended to this one.
    #[inline]
    pub fn append(&self, other: &FieldPath) -> FieldPath {
        let mut result = self.clone();
        result.0.extend(other.0.iter().cloned());
        result
    }

    /// Return a new path without the first segment.
    ///
    /// Fails with [`StoneError::EmptyPath`] if the path is empty.
    pub fn pop_first(&self) -> StoneResult<FieldPath> {
        if self.0.is_empty() {
            return Err(StoneError::empty_path("pop_first"));
        }
        Ok(FieldPath(self.0[1..].to_vec()))
    }

    /// Check if this path is empty (the root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the segment at `i`, if in bounds.
    #[inline]
    pub fn segment(&self, i: usize) -> Option<&str> {
        self.0.get(i).map(String::as_str)
    }

    /// Get the first segment.
    #[inline]
    pub fn first_segment(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Get the last segment.
    #[inline]
    pub fn last_segment(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Check if this path is a prefix of another path.
    ///
    /// A path is a prefix of itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldstone::field_path;
    ///
    /// let parent = field_path!("user");
    /// let child = field_path!("user", "name");
    ///
    /// assert!(parent.is_prefix_of(&child));
    /// assert!(!child.is_prefix_of(&parent));
    /// ```
    #[inline]
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "$")
        } else {
            write!(f, "{}", self.0.join("."))
        }
    }
}

impl FromIterator<String> for FieldPath {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        FieldPath(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldPath {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for FieldPath {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Construct a [`FieldPath`] from a sequence of segment expressions.
///
/// # Examples
///
/// ```
/// use fieldstone::field_path;
///
/// let p = field_path!("users", "alice", "email");
/// assert_eq!(p.len(), 3);
///
/// // Empty invocation yields the root path.
/// assert!(field_path!().is_empty());
/// ```
#[macro_export]
macro_rules! field_path {
    () => {
        $crate::FieldPath::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::FieldPath::root();
        $(
            p.push($seg);
        )+
        p
    }};
}
