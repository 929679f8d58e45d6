//! Error types for the alexandria library.
//!
//! Every failure is returned as data. The mapper reports exactly one error per call and always
//! names the path of the offending value, so a transport can log it, retry with a different
//! identifier or surface it to a user without inspecting the raw response again.
//!
//! # Examples
//!
//! ```
//! use alexandria::{entity::Work, error::MapperError, prelude::*};
//! use serde_json::json;
//!
//! let raw = json!({ "title": "Untitled" });
//! match Mapper::new().validate::<Work>(Some(&raw)) {
//!   Err(MapperError::MissingRequiredField { path }) => assert_eq!(path.to_string(), "id"),
//!   other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use thiserror::Error;

use super::*;

/// Error type alias used for the mapper and everything it touches.
pub type Result<T, E = MapperError> = core::result::Result<T, E>;

/// Errors produced while validating a raw JSON value against a schema.
///
/// The first four variants form the complete validation taxonomy. [`MapperError::Decode`] and
/// [`MapperError::Json`] only occur around validation, never inside it.
#[derive(Error, Debug)]
pub enum MapperError {
  /// A value was present but had the wrong JSON type or violated a shape constraint.
  ///
  /// This can occur when:
  /// - A string is found where a number is expected
  /// - An identifier is the empty string
  /// - A date is not in `YYYY-MM-DD` form
  /// - A bounded integer (such as a concept level) is out of range
  #[error("{path}: expected {expected}, got {actual}")]
  ShapeMismatch {
    /// Location of the offending value.
    path:     FieldPath,
    /// Description of the shape the schema demands.
    expected: String,
    /// JSON kind of the value actually found.
    actual:   ValueKind,
  },

  /// A field the schema requires was absent or `null`.
  #[error("{path}: missing required field")]
  MissingRequiredField {
    /// Location of the absent field.
    path: FieldPath,
  },

  /// A closed-enumeration field held a value outside its literal set.
  #[error("{path}: unknown value {value:?}")]
  UnknownEnumValue {
    /// Location of the offending value.
    path:  FieldPath,
    /// The rejected literal.
    value: String,
  },

  /// The transport handed over nothing to validate.
  ///
  /// Raised for an absent input and for a top-level JSON `null`.
  #[error("no input to validate")]
  EmptyOrMissingInput,

  /// A validated record could not be converted into its typed entity.
  ///
  /// Only reachable when a schema table disagrees with the struct it feeds.
  #[error("validated record does not fit its entity type: {0}")]
  Decode(#[source] serde_json::Error),

  /// Raw bytes handed to [`Mapper::from_slice`] were not JSON at all.
  #[error("response is not valid JSON: {0}")]
  Json(#[source] serde_json::Error),
}

impl MapperError {
  /// Builds a [`MapperError::ShapeMismatch`] for `value` at `path`.
  pub(crate) fn shape(path: impl Into<FieldPath>, expected: impl Into<String>, value: &Value) -> Self {
    Self::ShapeMismatch {
      path:     path.into(),
      expected: expected.into(),
      actual:   ValueKind::of(value),
    }
  }

  /// The path of the failing value, if the error concerns a specific value.
  pub fn path(&self) -> Option<&FieldPath> {
    match self {
      Self::ShapeMismatch { path, .. }
      | Self::MissingRequiredField { path }
      | Self::UnknownEnumValue { path, .. } => Some(path),
      Self::EmptyOrMissingInput | Self::Decode(_) | Self::Json(_) => None,
    }
  }
}

/// Errors produced while loading a [`QueryProfile`](crate::profile::QueryProfile).
#[derive(Error, Debug)]
pub enum ProfileError {
  /// The profile file could not be read.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The profile is not valid TOML or names an unknown entity or field.
  #[error(transparent)]
  Toml(#[from] toml::de::Error),

  /// A filter value cannot be expressed in the filter grammar.
  ///
  /// This occurs for tables, datetimes, nested arrays and arrays mixing primitive kinds.
  #[error("filter on '{field}' has an unsupported value: {reason}")]
  UnsupportedValue {
    /// Field the filter applies to.
    field:  String,
    /// What made the value unusable.
    reason: String,
  },
}

/// The JSON kind of a value, as reported in [`MapperError::ShapeMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
  /// JSON `null`
  Null,
  /// JSON `true` or `false`
  Boolean,
  /// Any JSON number
  Number,
  /// A JSON string
  String,
  /// A JSON array
  Array,
  /// A JSON object
  Object,
}

impl ValueKind {
  /// Classifies a JSON value.
  pub fn of(value: &Value) -> Self {
    match value {
      Value::Null => Self::Null,
      Value::Bool(_) => Self::Boolean,
      Value::Number(_) => Self::Number,
      Value::String(_) => Self::String,
      Value::Array(_) => Self::Array,
      Value::Object(_) => Self::Object,
    }
  }
}

impl Display for ValueKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Null => "null",
      Self::Boolean => "boolean",
      Self::Number => "number",
      Self::String => "string",
      Self::Array => "array",
      Self::Object => "object",
    })
  }
}

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// An object key, using the API's own (snake_case) name
  Key(String),
  /// An array index
  Index(usize),
}

/// Location of a value inside a raw response, e.g. `authorships[2].author.id`.
///
/// The empty path denotes the response root and displays as `<root>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
  /// The path of the response root.
  pub fn root() -> Self { Self::default() }

  /// The individual steps of this path, outermost first.
  pub fn segments(&self) -> &[Segment] { &self.0 }

  /// Whether this path denotes the response root.
  pub fn is_root(&self) -> bool { self.0.is_empty() }
}

impl Display for FieldPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.0.is_empty() {
      return f.write_str("<root>");
    }
    for (i, segment) in self.0.iter().enumerate() {
      match segment {
        Segment::Key(key) if i == 0 => f.write_str(key)?,
        Segment::Key(key) => write!(f, ".{key}")?,
        Segment::Index(index) => write!(f, "[{index}]")?,
      }
    }
    Ok(())
  }
}

/// A borrowed, allocation-free path used while walking a schema.
///
/// Each node points at its parent; it is only materialized into a [`FieldPath`] when an error is
/// actually raised.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PathNode<'a> {
  Root,
  Key(&'a PathNode<'a>, &'a str),
  Index(&'a PathNode<'a>, usize),
}

impl<'a> PathNode<'a> {
  pub(crate) fn key(&'a self, key: &'a str) -> Self { Self::Key(self, key) }

  pub(crate) fn index(&'a self, index: usize) -> Self { Self::Index(self, index) }

  fn collect_into(&self, segments: &mut Vec<Segment>) {
    match self {
      Self::Root => {},
      Self::Key(parent, key) => {
        parent.collect_into(segments);
        segments.push(Segment::Key((*key).to_string()));
      },
      Self::Index(parent, index) => {
        parent.collect_into(segments);
        segments.push(Segment::Index(*index));
      },
    }
  }
}

impl From<&PathNode<'_>> for FieldPath {
  fn from(node: &PathNode<'_>) -> Self {
    let mut segments = Vec::new();
    node.collect_into(&mut segments);
    Self(segments)
  }
}

impl From<PathNode<'_>> for FieldPath {
  fn from(node: PathNode<'_>) -> Self { Self::from(&node) }
}
