use super::*;

closed_enum! {
  /// Upstream indexes a work is listed in.
  pub enum IndexSource {
    /// arXiv
    Arxiv => "arxiv",
    /// Crossref
    Crossref => "crossref",
    /// Directory of Open Access Journals
    Doaj => "doaj",
    /// PubMed
    Pubmed => "pubmed",
  }
}

/// External identifiers of a work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkIds {
  /// OpenAlex id; always present
  pub openalex: String,
  /// DOI, as a full URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub doi:      Option<String>,
  /// PubMed id
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pmid:     Option<String>,
  /// PubMed Central id
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pmcid:    Option<String>,
  /// Microsoft Academic Graph id
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mag:      Option<String>,
}

/// A scholarly work.
///
/// Produced by [`Mapper::validate`] from a raw `/works` response. The abstract is reconstructed
/// from the API's inverted index and dates are calendar days with no time-zone component.
///
/// # Examples
///
/// ```
/// use alexandria::{entity::Work, prelude::*};
/// use chrono::Datelike;
/// use serde_json::json;
///
/// let raw = json!({
///   "id": "https://openalex.org/W2741809807",
///   "title": "The state of OA",
///   "ids": { "openalex": "https://openalex.org/W2741809807" },
///   "indexed_in": ["crossref", "pubmed"],
///   "publication_date": "2018-02-13",
///   "publication_year": 2018,
///   "cited_by_count": 1024,
///   "has_fulltext": false
/// });
///
/// let work: Work = Mapper::new().validate(Some(&raw)).unwrap();
/// assert_eq!(work.publication_date.year(), 2018);
/// assert_eq!(work.publication_date.month0(), 1);
/// assert_eq!(work.publication_date.day(), 13);
/// assert!(work.abstract_text.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
  /// Canonical OpenAlex id
  pub id: String,
  /// DOI, as a full URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub doi: Option<String>,
  /// Title
  pub title: String,
  /// Display title; usually identical to `title`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
  /// External identifiers
  pub ids: WorkIds,
  /// ISO 639-1 language code
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,
  /// Work type, e.g. `article` or `book-chapter`
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub work_type: Option<String>,
  /// Upstream indexes listing this work
  pub indexed_in: Vec<IndexSource>,
  /// Abstract, reconstructed from the inverted index
  #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
  pub abstract_text: Option<String>,
  /// Authors in printed order
  #[serde(skip_serializing_if = "Option::is_none")]
  pub authorships: Option<Vec<Authorship>>,
  /// Listed article processing charge
  #[serde(skip_serializing_if = "Option::is_none")]
  pub apc_list: Option<Apc>,
  /// Article processing charge actually paid
  #[serde(skip_serializing_if = "Option::is_none")]
  pub apc_paid: Option<Apc>,
  /// Where the version of record lives
  #[serde(skip_serializing_if = "Option::is_none")]
  pub primary_location: Option<Location>,
  /// Best open access copy
  #[serde(skip_serializing_if = "Option::is_none")]
  pub best_oa_location: Option<Location>,
  /// Every known location
  #[serde(skip_serializing_if = "Option::is_none")]
  pub locations: Option<Vec<Location>>,
  /// Open access status
  #[serde(skip_serializing_if = "Option::is_none")]
  pub open_access: Option<OpenAccess>,
  /// Day of publication
  pub publication_date: NaiveDate,
  /// Year of publication
  pub publication_year: i64,
  /// Volume, issue and pages
  #[serde(skip_serializing_if = "Option::is_none")]
  pub biblio: Option<Biblio>,
  /// Field-weighted citation impact
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fwci: Option<f64>,
  /// Citation percentile among comparable works
  #[serde(skip_serializing_if = "Option::is_none")]
  pub citation_normalized_percentile: Option<CitationPercentile>,
  /// Number of works citing this one
  pub citation_count: u64,
  /// Citations per year, most recent first
  #[serde(skip_serializing_if = "Option::is_none")]
  pub counts_by_year: Option<Vec<WorkCountsByYear>>,
  /// Sustainable development goal tags
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sustainable_development_goals: Option<Vec<SustainableDevelopmentGoal>>,
  /// Whether the full text is searchable
  pub full_text_searchable: bool,
  /// Concept tags with relevance scores
  #[serde(skip_serializing_if = "Option::is_none")]
  pub concepts: Option<Vec<WorkConcept>>,
  /// Whether the work has been retracted
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_retracted: Option<bool>,
  /// Number of works this one cites
  #[serde(skip_serializing_if = "Option::is_none")]
  pub referenced_works_count: Option<u64>,
  /// Day the record was created
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_date: Option<NaiveDate>,
  /// Day the record was last updated
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_date: Option<NaiveDate>,
}

impl Entity for Work {
  const SCHEMA: &'static Schema = &WORK;
}

impl RootEntity for Work {
  type Field = WorkField;

  const KIND: EntityKind = EntityKind::Work;
}

impl Work {
  /// Start of the publication day in UTC.
  pub fn published_at(&self) -> DateTime<Utc> { derive::utc_midnight(self.publication_date) }

  /// Display names of the authors, in printed order.
  pub fn author_names(&self) -> Vec<&str> {
    self
      .authorships
      .iter()
      .flatten()
      .map(|authorship| authorship.author.display_name.as_str())
      .collect()
  }

  /// Whether the work is free to read somewhere.
  pub fn is_open_access(&self) -> bool {
    self.open_access.as_ref().is_some_and(|open_access| open_access.is_oa)
  }

  /// Direct PDF link from the best open access location, falling back to the primary location.
  pub fn pdf_url(&self) -> Option<&str> {
    [&self.best_oa_location, &self.primary_location]
      .into_iter()
      .flatten()
      .find_map(|location| location.pdf_url.as_deref())
  }
}
