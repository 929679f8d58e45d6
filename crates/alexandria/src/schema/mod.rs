//! Declarative field-descriptor tables for every entity kind.
//!
//! A [`Schema`] is a `const` list of [`FieldDescriptor`]s. Each descriptor names the key used by
//! the API, the key used in the validated record, the [`Shape`] the value must have and whether it
//! may be absent. The [`Mapper`] interprets these tables; no entity kind has hand-written
//! validation code of its own.
//!
//! Tables are ordered. The order of a root schema is the canonical order of its fields, which the
//! [`registry`](crate::registry) reuses for `select=` fragments.
//!
//! # Examples
//!
//! ```
//! use alexandria::schema::{Presence, WORK};
//!
//! let id = WORK.field("id").unwrap();
//! assert_eq!(id.presence, Presence::Required);
//! assert_eq!(WORK.field("cited_by_count").unwrap().target, "citationCount");
//! ```

use super::*;

/// Builds a [`FieldDescriptor`] literal.
///
/// `field!("source" => "target", shape)` is required; a trailing `optional` makes it optional.
macro_rules! field {
  ($source:literal => $target:literal, $shape:expr) => {
    $crate::schema::FieldDescriptor {
      source:   $source,
      target:   $target,
      shape:    $shape,
      presence: $crate::schema::Presence::Required,
    }
  };
  ($source:literal => $target:literal, $shape:expr,optional) => {
    $crate::schema::FieldDescriptor {
      source:   $source,
      target:   $target,
      shape:    $shape,
      presence: $crate::schema::Presence::Optional,
    }
  };
}

mod author;
mod composite;
mod dehydrated;
mod work;

pub use author::*;
pub use composite::*;
pub use dehydrated::*;
pub use work::*;

/// Whether a field may be absent from the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
  /// The field must be present and non-null.
  Required,
  /// Absence and `null` are the same thing; either omits the field from the output.
  Optional,
}

/// The shape a raw JSON value must have, and how it is carried into the record.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
  /// Any JSON string.
  String,
  /// A non-empty JSON string naming an entity.
  Identifier,
  /// A JSON number without a fractional part.
  Integer,
  /// A non-negative integer: a count of works, citations, ...
  Count,
  /// An integer inside an inclusive range.
  BoundedInteger {
    /// Smallest accepted value
    min: i64,
    /// Largest accepted value
    max: i64,
  },
  /// Any JSON number.
  Float,
  /// `true` or `false`.
  Boolean,
  /// A `YYYY-MM-DD` string, carried as a calendar day.
  Date,
  /// A string from a closed literal set.
  Enum(&'static [&'static str]),
  /// A nested object validated against another schema.
  Object(&'static Schema),
  /// An array whose every element has the given shape.
  ArrayOf(&'static Shape),
  /// A word-to-positions mapping, reconstructed into plain text.
  InvertedIndex,
  /// A list of institution identifiers; an empty or absent list becomes the record's own `id`.
  Lineage,
}

impl Shape {
  /// Human-readable description used in [`MapperError::ShapeMismatch`].
  pub fn describe(&self) -> String {
    match self {
      Self::String => "string".into(),
      Self::Identifier => "non-empty identifier string".into(),
      Self::Integer => "integer".into(),
      Self::Count => "non-negative integer".into(),
      Self::BoundedInteger { min, max } => format!("integer in {min}..={max}"),
      Self::Float => "number".into(),
      Self::Boolean => "boolean".into(),
      Self::Date => "date (YYYY-MM-DD)".into(),
      Self::Enum(_) => "string".into(),
      Self::Object(schema) => format!("{} object", schema.name),
      Self::ArrayOf(inner) => format!("array of {}", inner.describe()),
      Self::InvertedIndex => "inverted index (object of position arrays)".into(),
      Self::Lineage => "array of non-empty identifier strings".into(),
    }
  }
}

/// A single row of a [`Schema`].
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
  /// Key in the raw API response (snake_case)
  pub source:   &'static str,
  /// Key in the validated record (camelCase)
  pub target:   &'static str,
  /// Required value shape
  pub shape:    Shape,
  /// Whether the field may be absent
  pub presence: Presence,
}

impl FieldDescriptor {
  /// Whether this field must be present.
  pub const fn is_required(&self) -> bool { matches!(self.presence, Presence::Required) }
}

/// An ordered field-descriptor table for one entity kind.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
  /// Short name of the entity kind, used in logs and error descriptions
  pub name:   &'static str,
  /// Field descriptors in canonical order
  pub fields: &'static [FieldDescriptor],
}

impl Schema {
  /// Looks up a descriptor by its API (source) name.
  pub fn field(&self, source: &str) -> Option<&FieldDescriptor> {
    self.fields.iter().find(|field| field.source == source)
  }

  /// API names of every field, in canonical order.
  pub fn source_names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.fields.iter().map(|field| field.source)
  }

  /// Whether the table contains a descriptor with the given API name.
  pub const fn has_source(&self, source: &str) -> bool {
    let mut i = 0;
    while i < self.fields.len() {
      if str_eq(self.fields[i].source, source) {
        return true;
      }
      i += 1;
    }
    false
  }

  /// Compile-time sanity check: a required, leading `id` and no duplicate source or target names.
  pub const fn is_well_formed(&self, keyed: bool) -> bool {
    if keyed {
      if self.fields.is_empty()
        || !str_eq(self.fields[0].source, "id")
        || !self.fields[0].is_required()
      {
        return false;
      }
    }
    let mut i = 0;
    while i < self.fields.len() {
      let mut j = i + 1;
      while j < self.fields.len() {
        if str_eq(self.fields[i].source, self.fields[j].source)
          || str_eq(self.fields[i].target, self.fields[j].target)
        {
          return false;
        }
        j += 1;
      }
      i += 1;
    }
    true
  }
}

/// `const` string equality.
pub(crate) const fn str_eq(a: &str, b: &str) -> bool {
  let (a, b) = (a.as_bytes(), b.as_bytes());
  if a.len() != b.len() {
    return false;
  }
  let mut i = 0;
  while i < a.len() {
    if a[i] != b[i] {
      return false;
    }
    i += 1;
  }
  true
}

const _: () = {
  assert!(DEHYDRATED_INSTITUTION.is_well_formed(true));
  assert!(DEHYDRATED_SOURCE.is_well_formed(true));
  assert!(DEHYDRATED_AUTHOR.is_well_formed(true));
  assert!(DEHYDRATED_CONCEPT.is_well_formed(false));
  assert!(WORK_CONCEPT.is_well_formed(false));
  assert!(AUTHORSHIP.is_well_formed(false));
  assert!(LOCATION.is_well_formed(false));
  assert!(OPEN_ACCESS.is_well_formed(false));
  assert!(WORK.is_well_formed(true));
  assert!(AUTHOR.is_well_formed(true));
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn descriptions_name_nested_schemas() {
    assert_eq!(Shape::ArrayOf(&Shape::Object(&AUTHORSHIP)).describe(), "array of authorship object");
    assert_eq!(Shape::BoundedInteger { min: 0, max: 5 }.describe(), "integer in 0..=5");
  }

  #[test]
  fn lookups_by_source_name() {
    assert!(WORK.has_source("abstract_inverted_index"));
    assert!(!WORK.has_source("abstract"));
    assert_eq!(WORK.field("has_fulltext").map(|f| f.target), Some("fullTextSearchable"));
    assert_eq!(AUTHOR.field("summary_stats").map(|f| f.presence), Some(Presence::Optional));
  }

  #[test]
  fn every_table_leads_with_id_where_keyed() {
    for schema in [&WORK, &AUTHOR, &DEHYDRATED_INSTITUTION, &DEHYDRATED_SOURCE, &DEHYDRATED_AUTHOR] {
      assert_eq!(schema.source_names().next(), Some("id"), "{}", schema.name);
    }
  }
}
