//! Selectable fields and `select=` fragments.
//!
//! Each root entity has a closed enum of the fields a request may leave out: [`WorkField`] and
//! [`AuthorField`]. The identifier is deliberately not a variant, so a request without `id` cannot
//! be expressed:
//!
//! ```compile_fail
//! use alexandria::registry::{Exclusions, WorkField};
//!
//! let exclusions = Exclusions::from_iter([WorkField::Id]);
//! ```
//!
//! Variants are declared in the canonical order of their root schema, and a compile-time
//! assertion keeps the two in lockstep. An [`Exclusions`] set yields the complement in that order:
//!
//! ```
//! use alexandria::registry::{AuthorField, Exclusions, Selectable};
//!
//! let exclusions: Exclusions<AuthorField> = AuthorField::ALL
//!   .iter()
//!   .copied()
//!   .filter(|field| *field != AuthorField::DisplayName)
//!   .collect();
//! assert_eq!(exclusions.select_query(), "select=id,display_name");
//! ```
//!
//! The registry never changes how responses are validated; see
//! [`Mapper::validate_excluding`](crate::mapper::Mapper::validate_excluding).

use super::*;

/// A closed set of fields that may be left out of a root entity's response.
pub trait Selectable:
  Copy + Ord + fmt::Debug + Display + Serialize + DeserializeOwned + Send + Sync + 'static {
  /// API name of the identifier, which is always selected.
  const IDENTIFIER: &'static str = "id";

  /// Every excludable field, in canonical order.
  const ALL: &'static [Self];

  /// The API (snake_case) name of this field.
  fn api_name(self) -> &'static str;

  /// Parses an API name. The identifier is not a selectable field and yields `None`.
  fn from_api_name(name: &str) -> Option<Self>;
}

/// Declares a selectable-field enum for a root schema.
macro_rules! selectable {
  (
    $(#[$meta:meta])*
    pub enum $name:ident for $schema:ident {
      $($variant:ident => $literal:literal),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[allow(missing_docs)]
    pub enum $name {
      $(#[serde(rename = $literal)] $variant,)+
    }

    impl $name {
      /// API names of every variant, in canonical order.
      pub const NAMES: &'static [&'static str] = &[$($literal),+];
    }

    impl Selectable for $name {
      const ALL: &'static [Self] = &[$(Self::$variant),+];

      fn api_name(self) -> &'static str {
        match self {
          $(Self::$variant => $literal,)+
        }
      }

      fn from_api_name(name: &str) -> Option<Self> {
        match name {
          $($literal => Some(Self::$variant),)+
          _ => None,
        }
      }
    }

    impl Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.api_name()) }
    }

    const _: () = assert!(
      mirrors_schema(&$schema, $name::NAMES),
      concat!(stringify!($name), " is out of step with ", stringify!($schema))
    );
  };
}

selectable! {
  /// Fields of a [`Work`] that a request may exclude.
  pub enum WorkField for WORK {
    Doi => "doi",
    Title => "title",
    DisplayName => "display_name",
    Ids => "ids",
    Language => "language",
    Type => "type",
    IndexedIn => "indexed_in",
    AbstractInvertedIndex => "abstract_inverted_index",
    Authorships => "authorships",
    ApcList => "apc_list",
    ApcPaid => "apc_paid",
    PrimaryLocation => "primary_location",
    BestOaLocation => "best_oa_location",
    Locations => "locations",
    OpenAccess => "open_access",
    PublicationDate => "publication_date",
    PublicationYear => "publication_year",
    Biblio => "biblio",
    Fwci => "fwci",
    CitationNormalizedPercentile => "citation_normalized_percentile",
    CitedByCount => "cited_by_count",
    CountsByYear => "counts_by_year",
    SustainableDevelopmentGoals => "sustainable_development_goals",
    HasFulltext => "has_fulltext",
    Concepts => "concepts",
    IsRetracted => "is_retracted",
    ReferencedWorksCount => "referenced_works_count",
    CreatedDate => "created_date",
    UpdatedDate => "updated_date",
  }
}

selectable! {
  /// Fields of an [`Author`] that a request may exclude.
  pub enum AuthorField for AUTHOR {
    Orcid => "orcid",
    DisplayName => "display_name",
    DisplayNameAlternatives => "display_name_alternatives",
    Ids => "ids",
    Affiliations => "affiliations",
    LastKnownInstitutions => "last_known_institutions",
    WorksCount => "works_count",
    CitedByCount => "cited_by_count",
    CountsByYear => "counts_by_year",
    SummaryStats => "summary_stats",
    WorksApiUrl => "works_api_url",
    CreatedDate => "created_date",
    UpdatedDate => "updated_date",
  }
}

/// Whether `names` are exactly the non-identifier fields of `schema`, in schema order.
const fn mirrors_schema(schema: &Schema, names: &[&str]) -> bool {
  if schema.fields.len() != names.len() + 1 || !str_eq(schema.fields[0].source, "id") {
    return false;
  }
  let mut i = 0;
  while i < names.len() {
    if !str_eq(schema.fields[i + 1].source, names[i]) {
      return false;
    }
    i += 1;
  }
  true
}

/// Every selectable API name of `F`: the identifier followed by [`Selectable::ALL`].
pub fn selectable_fields<F: Selectable>() -> Vec<&'static str> {
  std::iter::once(F::IDENTIFIER).chain(F::ALL.iter().map(|field| field.api_name())).collect()
}

/// A set of fields to leave out of a response.
///
/// Insertion order is irrelevant; output always follows canonical order. Serializes as a plain
/// list of API names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent, bound(deserialize = "F: Deserialize<'de> + Ord"))]
pub struct Exclusions<F: Ord>(BTreeSet<F>);

impl<F: Ord> Default for Exclusions<F> {
  fn default() -> Self { Self(BTreeSet::new()) }
}

impl<F: Selectable> Exclusions<F> {
  /// An empty set: every field is selected.
  pub fn new() -> Self { Self::default() }

  /// Adds a field, returning whether it was newly excluded.
  pub fn insert(&mut self, field: F) -> bool { self.0.insert(field) }

  /// Adds a field, builder style.
  pub fn with(mut self, field: F) -> Self {
    self.0.insert(field);
    self
  }

  /// Whether `field` is excluded.
  pub fn contains(&self, field: F) -> bool { self.0.contains(&field) }

  /// Excluded fields in canonical order.
  pub fn iter(&self) -> impl Iterator<Item = F> + '_ { self.0.iter().copied() }

  /// Number of excluded fields.
  pub fn len(&self) -> usize { self.0.len() }

  /// Whether nothing is excluded.
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// API names to request: the identifier, then every field not excluded, in canonical order.
  pub fn select_fields(&self) -> Vec<&'static str> {
    std::iter::once(F::IDENTIFIER)
      .chain(F::ALL.iter().filter(|field| !self.0.contains(field)).map(|field| field.api_name()))
      .collect()
  }

  /// The `select=` query fragment for [`Exclusions::select_fields`].
  pub fn select_query(&self) -> String {
    let fields = self.select_fields();
    trace!(selected = fields.len(), excluded = self.len(), "building select fragment");
    let encoded: Vec<_> = fields.into_iter().map(urlencoding::encode).collect();
    format!("select={}", encoded.join(","))
  }
}

impl<F: Ord> FromIterator<F> for Exclusions<F> {
  fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self { Self(iter.into_iter().collect()) }
}

impl<F: Ord> Extend<F> for Exclusions<F> {
  fn extend<I: IntoIterator<Item = F>>(&mut self, iter: I) { self.0.extend(iter) }
}
