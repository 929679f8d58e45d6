use super::*;

closed_enum! {
  /// Organization type of an institution, following the ROR vocabulary.
  pub enum InstitutionType {
    /// Universities and colleges
    Education => "education",
    /// Hospitals and medical centers
    Healthcare => "healthcare",
    /// Businesses
    Company => "company",
    /// Archives and libraries
    Archive => "archive",
    /// Non-profit organizations
    Nonprofit => "nonprofit",
    /// Government agencies
    Government => "government",
    /// Research facilities
    Facility => "facility",
    /// Anything else
    Other => "other",
    /// Funding bodies
    Funder => "funder",
  }
}

closed_enum! {
  /// What kind of venue a source is.
  pub enum SourceType {
    /// A journal
    Journal => "journal",
    /// A preprint server or institutional repository
    Repository => "repository",
    /// A conference
    Conference => "conference",
    /// An ebook platform
    EbookPlatform => "ebook platform",
    /// A book series
    BookSeries => "book series",
    /// A metadata-only aggregator
    Metadata => "metadata",
    /// A catalog of IGSN sample identifiers
    IgsnCatalog => "igsnCatalog",
    /// Anything else
    Other => "other",
  }
}

/// An institution as embedded in other records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedInstitution {
  /// Canonical OpenAlex id
  pub id:               String,
  /// Human-readable name
  pub display_name:     String,
  /// ISO 3166-1 alpha-2 country code
  #[serde(skip_serializing_if = "Option::is_none")]
  pub country_code:     Option<String>,
  /// This institution and its parents, most specific first; never empty
  pub lineage:          Vec<String>,
  /// ROR identifier
  pub ror:              String,
  /// Organization type
  #[serde(rename = "type")]
  pub institution_type: InstitutionType,
}

impl Entity for DehydratedInstitution {
  const SCHEMA: &'static Schema = &DEHYDRATED_INSTITUTION;
}

impl DehydratedInstitution {
  /// Whether this institution has no parent institutions.
  pub fn is_top_level(&self) -> bool { self.lineage.len() <= 1 }
}

/// A source as embedded in a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedSource {
  /// Canonical OpenAlex id
  pub id:                     String,
  /// Human-readable name
  pub display_name:           String,
  /// OpenAlex id of the publisher or institution hosting this source
  #[serde(skip_serializing_if = "Option::is_none")]
  pub host_organization:      Option<String>,
  /// Name of the host organization
  #[serde(skip_serializing_if = "Option::is_none")]
  pub host_organization_name: Option<String>,
  /// Whether the source is in the CWTS core set
  pub is_core:                bool,
  /// Whether the source is listed in the Directory of Open Access Journals
  pub is_in_doaj:             bool,
  /// Whether the source is fully open access
  pub is_oa:                  bool,
  /// Every ISSN of the source
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issn:                   Option<Vec<String>>,
  /// The linking ISSN
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issn_l:                 Option<String>,
  /// Venue type
  #[serde(rename = "type")]
  pub source_type:            SourceType,
}

impl Entity for DehydratedSource {
  const SCHEMA: &'static Schema = &DEHYDRATED_SOURCE;
}

/// An author as embedded in an authorship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedAuthor {
  /// Canonical OpenAlex id
  pub id:           String,
  /// Human-readable name
  pub display_name: String,
  /// ORCID, as a full URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub orcid:        Option<String>,
}

impl Entity for DehydratedAuthor {
  const SCHEMA: &'static Schema = &DEHYDRATED_AUTHOR;
}

/// A concept tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DehydratedConcept {
  /// Human-readable name
  pub display_name: String,
  /// Canonical OpenAlex id
  pub id:           String,
  /// Depth in the concept tree, 0 through 5
  pub level:        u8,
  /// Wikidata entity URL
  pub wiki_data_id: String,
}

impl Entity for DehydratedConcept {
  const SCHEMA: &'static Schema = &DEHYDRATED_CONCEPT;
}

/// A concept attached to a work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkConcept {
  /// The concept itself
  #[serde(flatten)]
  pub concept: DehydratedConcept,
  /// How strongly the work relates to the concept, from 0 to 1
  pub score:   f64,
}

impl Entity for WorkConcept {
  const SCHEMA: &'static Schema = &WORK_CONCEPT;
}
