//! Typed records produced from validated input.
//!
//! Every type here is an immutable value produced by the [`Mapper`] from a single JSON value.
//! Optional fields are `None` when the API omitted them or sent `null`; the two cases are not
//! distinguished. Serializing a record uses the renamed (camelCase) field names and skips absent
//! fields.
//!
//! The link between a type and the table that validates it is the [`Entity`] trait. Root entities
//! (works and authors) additionally name the closed set of fields a request may exclude.

use super::*;

/// Declares a closed enumeration of API literals.
///
/// Generates the enum with serde renames, a `NAMES` table for schemas, `as_str`,
/// `from_api_name` and `Display`, so the literal set is written exactly once.
macro_rules! closed_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $($(#[$variant_meta:meta])* $variant:ident => $literal:literal),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub enum $name {
      $($(#[$variant_meta])* #[serde(rename = $literal)] $variant,)+
    }

    impl $name {
      /// Every accepted literal, in declaration order.
      pub const NAMES: &'static [&'static str] = &[$($literal),+];

      /// The literal the API uses for this value.
      pub const fn as_str(self) -> &'static str {
        match self {
          $(Self::$variant => $literal,)+
        }
      }

      /// Parses an API literal, returning `None` for anything outside the closed set.
      pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
          $($literal => Some(Self::$variant),)+
          _ => None,
        }
      }
    }

    impl Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
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

/// A typed record validated by a schema table.
///
/// The serde field names of the implementing type are exactly the `target` names of
/// [`Entity::SCHEMA`]; the mapper relies on that to convert a [`Record`] into `Self`.
pub trait Entity: DeserializeOwned {
  /// The table raw values are validated against.
  const SCHEMA: &'static Schema;
}

/// An entity the API serves directly and whose response fields can be narrowed with `select=`.
pub trait RootEntity: Entity {
  /// The closed set of fields a request may exclude.
  type Field: Selectable;

  /// Which kind this is, for dynamic dispatch.
  const KIND: EntityKind;
}

/// Every kind of record the mapper knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  /// [`Work`]
  Work,
  /// [`Author`]
  Author,
  /// [`DehydratedInstitution`]
  Institution,
  /// [`DehydratedSource`]
  Source,
  /// [`DehydratedAuthor`]
  DehydratedAuthor,
  /// [`DehydratedConcept`]
  Concept,
  /// [`Authorship`]
  Authorship,
  /// [`Location`]
  Location,
  /// [`OpenAccess`]
  OpenAccess,
}

impl EntityKind {
  /// Every kind, roots first.
  pub const ALL: &'static [EntityKind] = &[
    Self::Work,
    Self::Author,
    Self::Institution,
    Self::Source,
    Self::DehydratedAuthor,
    Self::Concept,
    Self::Authorship,
    Self::Location,
    Self::OpenAccess,
  ];

  /// The table records of this kind are validated against.
  pub fn schema(self) -> &'static Schema {
    match self {
      Self::Work => Work::SCHEMA,
      Self::Author => Author::SCHEMA,
      Self::Institution => DehydratedInstitution::SCHEMA,
      Self::Source => DehydratedSource::SCHEMA,
      Self::DehydratedAuthor => DehydratedAuthor::SCHEMA,
      Self::Concept => DehydratedConcept::SCHEMA,
      Self::Authorship => Authorship::SCHEMA,
      Self::Location => Location::SCHEMA,
      Self::OpenAccess => OpenAccess::SCHEMA,
    }
  }

  /// Short, kebab-case name, as accepted by [`EntityKind::from_name`].
  pub fn name(self) -> &'static str {
    match self {
      Self::Work => "work",
      Self::Author => "author",
      Self::Institution => "institution",
      Self::Source => "source",
      Self::DehydratedAuthor => "dehydrated-author",
      Self::Concept => "concept",
      Self::Authorship => "authorship",
      Self::Location => "location",
      Self::OpenAccess => "open-access",
    }
  }

  /// Parses a kind name. Plural forms of the root kinds (`works`, `authors`) are accepted too.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "works" => Some(Self::Work),
      "authors" => Some(Self::Author),
      _ => Self::ALL.iter().copied().find(|kind| kind.name() == name),
    }
  }

  /// Whether responses of this kind are served directly and support `select=`.
  pub fn is_root(self) -> bool { matches!(self, Self::Work | Self::Author) }
}

impl Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}
