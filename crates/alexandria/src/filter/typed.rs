//! Per-entity filter facades.
//!
//! A [`TypedFilter`] wraps a [`FilterBuilder`] and only accepts the filter names of one entity
//! kind, partitioned by the primitive kind of value each name takes. Passing a work filter to an
//! author facade, or a number to a boolean field, does not compile:
//!
//! ```compile_fail
//! use alexandria::filter::{AuthorFilter, WorkStringFilter};
//!
//! let filter = AuthorFilter::new().string(WorkStringFilter::AuthorId, "A1");
//! ```
//!
//! ```compile_fail
//! use alexandria::filter::{WorkBoolFilter, WorkFilter};
//!
//! let filter = WorkFilter::new().boolean(WorkBoolFilter::IsOa, 1);
//! ```
//!
//! Serialization is the wrapped builder's; a facade never changes the fragment.

use super::*;

/// A filter name usable with a [`TypedFilter`].
pub trait FilterField: Copy + fmt::Debug {
  /// Name used in the `filter=` grammar.
  fn name(self) -> &'static str;
}

/// The filter names of one entity kind, split by value kind.
///
/// The three sets are disjoint; a name accepts exactly one kind of value.
pub trait FilterCapabilities {
  /// Fields taking string values.
  type Str: FilterField;
  /// Fields taking numeric values.
  type Num: FilterField;
  /// Fields taking boolean values.
  type Bool: FilterField;
}

/// Values accepted by string-valued fields: one string or a list of strings.
pub trait StringArg: Into<FilterValue> {}

impl StringArg for &str {}
impl StringArg for String {}
impl StringArg for Vec<String> {}
impl StringArg for Vec<&str> {}
impl StringArg for &[&str] {}
impl<const N: usize> StringArg for [&str; N] {}

/// Values accepted by numeric fields: one number or a list of numbers.
pub trait NumberArg: Into<FilterValue> {}

macro_rules! number_arg {
  ($($source:ty),+) => {
    $(
      impl NumberArg for $source {}
      impl NumberArg for Vec<$source> {}
      impl<const N: usize> NumberArg for [$source; N] {}
    )+
  };
}

number_arg!(i64, i32, i16, i8, u64, u32, u16, u8, f64, Number);

/// Values accepted by boolean fields: one boolean or a list of booleans.
pub trait BoolArg: Into<FilterValue> {}

impl BoolArg for bool {}
impl BoolArg for Vec<bool> {}
impl<const N: usize> BoolArg for [bool; N] {}

/// Declares an enum of filter names.
macro_rules! filter_fields {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $($(#[$variant_meta:meta])* $variant:ident => $literal:literal),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum $name {
      $($(#[$variant_meta])* $variant,)+
    }

    impl $name {
      /// Every filter name of this set.
      pub const ALL: &'static [Self] = &[$(Self::$variant),+];
    }

    impl FilterField for $name {
      fn name(self) -> &'static str {
        match self {
          $(Self::$variant => $literal,)+
        }
      }
    }

    impl Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
    }
  };
}

filter_fields! {
  /// String-valued filters on works.
  pub enum WorkStringFilter {
    /// OpenAlex id of the work
    Id => "openalex",
    /// DOI
    Doi => "doi",
    /// OpenAlex id of any author
    AuthorId => "author.id",
    /// ORCID of any author
    AuthorOrcid => "author.orcid",
    /// OpenAlex id of any author's institution
    InstitutionId => "institutions.id",
    /// ROR of any author's institution
    InstitutionRor => "institutions.ror",
    /// Country code of any author's institution
    InstitutionCountryCode => "institutions.country_code",
    /// OpenAlex id of a tagged concept
    ConceptId => "concepts.id",
    /// Source of the primary location
    PrimaryLocationSourceId => "primary_location.source.id",
    /// Work type
    Type => "type",
    /// ISO 639-1 language code
    Language => "language",
    /// Open access status
    OaStatus => "oa_status",
    /// Exact publication day, `YYYY-MM-DD`
    PublicationDate => "publication_date",
    /// Published on or after, `YYYY-MM-DD`
    FromPublicationDate => "from_publication_date",
    /// Published on or before, `YYYY-MM-DD`
    ToPublicationDate => "to_publication_date",
    /// Works citing the given work
    Cites => "cites",
    /// Works cited by the given work
    CitedBy => "cited_by",
    /// Full-text search over the title
    TitleSearch => "title.search",
    /// Full-text search over the abstract
    AbstractSearch => "abstract.search",
  }
}

filter_fields! {
  /// Numeric filters on works.
  pub enum WorkNumberFilter {
    /// Year of publication
    PublicationYear => "publication_year",
    /// Number of citing works
    CitedByCount => "cited_by_count",
    /// Field-weighted citation impact
    Fwci => "fwci",
    /// Number of cited works
    ReferencedWorksCount => "referenced_works_count",
    /// Number of authors
    AuthorsCount => "authors_count",
    /// Number of concept tags
    ConceptsCount => "concepts_count",
  }
}

filter_fields! {
  /// Boolean filters on works.
  pub enum WorkBoolFilter {
    /// Free to read somewhere
    IsOa => "is_oa",
    /// Full text is searchable
    HasFulltext => "has_fulltext",
    /// Has a DOI
    HasDoi => "has_doi",
    /// Has an abstract
    HasAbstract => "has_abstract",
    /// Has at least one author with an ORCID
    HasOrcid => "has_orcid",
    /// Retracted
    IsRetracted => "is_retracted",
    /// Front matter, covers and similar
    IsParatext => "is_paratext",
  }
}

filter_fields! {
  /// String-valued filters on authors.
  pub enum AuthorStringFilter {
    /// OpenAlex id of the author
    Id => "openalex",
    /// ORCID
    Orcid => "orcid",
    /// Exact display name
    DisplayName => "display_name",
    /// Full-text search over names
    DisplayNameSearch => "display_name.search",
    /// Any institution in the author's history
    AffiliationInstitutionId => "affiliations.institution.id",
    /// Institution of the most recent work
    LastKnownInstitutionId => "last_known_institutions.id",
    /// Country of the most recent institution
    LastKnownInstitutionCountryCode => "last_known_institutions.country_code",
  }
}

filter_fields! {
  /// Numeric filters on authors.
  pub enum AuthorNumberFilter {
    /// Number of works
    WorksCount => "works_count",
    /// Number of citations
    CitedByCount => "cited_by_count",
    /// h-index
    HIndex => "summary_stats.h_index",
    /// i10-index
    I10Index => "summary_stats.i10_index",
    /// Two-year mean citedness
    TwoYrMeanCitedness => "summary_stats.2yr_mean_citedness",
  }
}

filter_fields! {
  /// Boolean filters on authors.
  pub enum AuthorBoolFilter {
    /// Has an ORCID
    HasOrcid => "has_orcid",
  }
}

/// Filter capabilities of [`Work`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkFilters;

impl FilterCapabilities for WorkFilters {
  type Bool = WorkBoolFilter;
  type Num = WorkNumberFilter;
  type Str = WorkStringFilter;
}

/// Filter capabilities of [`Author`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorFilters;

impl FilterCapabilities for AuthorFilters {
  type Bool = AuthorBoolFilter;
  type Num = AuthorNumberFilter;
  type Str = AuthorStringFilter;
}

/// Filters on works.
pub type WorkFilter = TypedFilter<WorkFilters>;

/// Filters on authors.
pub type AuthorFilter = TypedFilter<AuthorFilters>;

/// A [`FilterBuilder`] restricted to the capabilities `C`.
#[derive(Debug, Clone)]
pub struct TypedFilter<C> {
  inner:        FilterBuilder,
  capabilities: PhantomData<fn() -> C>,
}

impl<C> Default for TypedFilter<C> {
  fn default() -> Self { Self { inner: FilterBuilder::new(), capabilities: PhantomData } }
}

impl<C: FilterCapabilities> TypedFilter<C> {
  /// An empty filter.
  pub fn new() -> Self { Self::default() }

  fn with(self, field: &'static str, value: impl Into<FilterValue>, op: FilterOperator) -> Self {
    Self { inner: self.inner.add_with(field, value, op), capabilities: PhantomData }
  }

  /// Adds an equality condition on a string-valued field.
  pub fn string(self, field: C::Str, value: impl StringArg) -> Self {
    self.string_with(field, value, FilterOperator::Equal)
  }

  /// Adds a condition on a string-valued field.
  pub fn string_with(self, field: C::Str, value: impl StringArg, op: FilterOperator) -> Self {
    self.with(field.name(), value, op)
  }

  /// Adds an equality condition on a numeric field.
  pub fn number(self, field: C::Num, value: impl NumberArg) -> Self {
    self.number_with(field, value, FilterOperator::Equal)
  }

  /// Adds a condition on a numeric field.
  pub fn number_with(self, field: C::Num, value: impl NumberArg, op: FilterOperator) -> Self {
    self.with(field.name(), value, op)
  }

  /// Adds an equality condition on a boolean field.
  pub fn boolean(self, field: C::Bool, value: impl BoolArg) -> Self {
    self.boolean_with(field, value, FilterOperator::Equal)
  }

  /// Adds a condition on a boolean field.
  pub fn boolean_with(self, field: C::Bool, value: impl BoolArg, op: FilterOperator) -> Self {
    self.with(field.name(), value, op)
  }

  /// Conditions in the order they were added.
  pub fn conditions(&self) -> &[FilterCondition] { self.inner.conditions() }

  /// The `filter=` fragment; see [`FilterBuilder::to_query_fragment`].
  pub fn to_query_fragment(&self) -> String { self.inner.to_query_fragment() }

  /// The wrapped builder.
  pub fn as_builder(&self) -> &FilterBuilder { &self.inner }

  /// Unwraps the builder, e.g. to add a condition the facade does not know about.
  pub fn into_inner(self) -> FilterBuilder { self.inner }
}

impl<C> Display for TypedFilter<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { Display::fmt(&self.inner, f) }
}

impl<C> From<TypedFilter<C>> for FilterBuilder {
  fn from(filter: TypedFilter<C>) -> Self { filter.inner }
}
