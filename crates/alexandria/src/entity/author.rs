use super::*;

/// External identifiers of an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorIds {
  /// OpenAlex id; always present
  pub openalex:  String,
  /// ORCID, as a full URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub orcid:     Option<String>,
  /// Wikipedia page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wikipedia: Option<String>,
  /// Scopus author profile
  #[serde(skip_serializing_if = "Option::is_none")]
  pub scopus:    Option<String>,
  /// Twitter profile
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter:   Option<String>,
}

/// A person credited on scholarly works.
///
/// Produced by [`Mapper::validate`] from a raw `/authors` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
  /// Canonical OpenAlex id
  pub id: String,
  /// ORCID, as a full URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub orcid: Option<String>,
  /// Preferred name
  pub display_name: String,
  /// Other spellings of the name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display_name_alternatives: Option<Vec<String>>,
  /// External identifiers
  pub ids: AuthorIds,
  /// Every known affiliation with its years
  #[serde(skip_serializing_if = "Option::is_none")]
  pub affiliations: Option<Vec<AuthorAffiliation>>,
  /// Institutions of the most recent work
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_known_institutions: Option<Vec<DehydratedInstitution>>,
  /// Number of works
  pub works_count: u64,
  /// Number of citations across all works
  pub cited_by_count: u64,
  /// Works and citations per year, most recent first
  pub counts_by_year: Vec<AuthorCountsByYear>,
  /// Summary citation metrics
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary_stats: Option<SummaryStats>,
  /// URL listing this author's works
  #[serde(skip_serializing_if = "Option::is_none")]
  pub works_api_url: Option<String>,
  /// Day the record was created
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_date: Option<NaiveDate>,
  /// Day the record was last updated
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_date: Option<NaiveDate>,
}

impl Entity for Author {
  const SCHEMA: &'static Schema = &AUTHOR;
}

impl RootEntity for Author {
  type Field = AuthorField;

  const KIND: EntityKind = EntityKind::Author;
}

impl Author {
  /// The h-index, if summary statistics were returned.
  pub fn h_index(&self) -> Option<u64> { self.summary_stats.map(|stats| stats.h_index) }

  /// Years in which the author was affiliated with the given institution, ascending.
  pub fn years_at(&self, institution_id: &str) -> Vec<i64> {
    let mut years: Vec<i64> = self
      .affiliations
      .iter()
      .flatten()
      .filter(|affiliation| affiliation.institution.id == institution_id)
      .flat_map(|affiliation| affiliation.years.iter().copied())
      .collect();
    years.sort_unstable();
    years.dedup();
    years
  }
}
