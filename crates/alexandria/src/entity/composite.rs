use super::*;

closed_enum! {
  /// Where an author appears in a work's author list.
  pub enum AuthorPosition {
    /// First author
    First => "first",
    /// Any author between the first and the last
    Middle => "middle",
    /// Last author
    Last => "last",
  }
}

closed_enum! {
  /// Which version of a work a location hosts.
  pub enum LocationVersion {
    /// The version of record
    Published => "publishedVersion",
    /// The accepted manuscript
    Accepted => "acceptedVersion",
    /// The submitted manuscript (preprint)
    Submitted => "submittedVersion",
  }
}

closed_enum! {
  /// Open access status of a work.
  pub enum OaStatus {
    /// Free to read and publish, hosted by the publisher
    Diamond => "diamond",
    /// Published in a fully open access venue
    Gold => "gold",
    /// Free to read in a repository
    Green => "green",
    /// Openly licensed in a subscription venue
    Hybrid => "hybrid",
    /// Free to read at the publisher without an open license
    Bronze => "bronze",
    /// Not free to read anywhere
    Closed => "closed",
  }
}

/// One raw affiliation string and the institutions it was resolved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorshipAffiliation {
  /// The affiliation exactly as printed on the work
  pub raw_affiliation_string: String,
  /// OpenAlex ids of the matched institutions
  pub institution_ids:        Vec<String>,
}

/// An author's credit on a work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorship {
  /// Affiliation strings with their resolved institutions, in printed order
  pub affiliations:            Vec<AuthorshipAffiliation>,
  /// The author
  pub author:                  DehydratedAuthor,
  /// Position in the author list
  pub author_position:         AuthorPosition,
  /// Institutions the author was affiliated with for this work
  pub institutions:            Vec<DehydratedInstitution>,
  /// The author's name exactly as printed on the work
  pub raw_author_name:         String,
  /// Whether this is a corresponding author
  pub is_corresponding:        bool,
  /// Country codes of the affiliated institutions
  #[serde(skip_serializing_if = "Option::is_none")]
  pub countries:               Option<Vec<String>>,
  /// Raw affiliation strings without their resolutions
  #[serde(skip_serializing_if = "Option::is_none")]
  pub raw_affiliation_strings: Option<Vec<String>>,
}

impl Entity for Authorship {
  const SCHEMA: &'static Schema = &AUTHORSHIP;
}

/// A place a work can be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
  /// Whether the work is free to read here
  pub is_oa:            bool,
  /// Whether the hosted version is at least the accepted manuscript
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_accepted:      Option<bool>,
  /// Whether the hosted version is the version of record
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_published:     Option<bool>,
  /// Landing page URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub landing_page_url: Option<String>,
  /// Direct PDF URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pdf_url:          Option<String>,
  /// License identifier, e.g. `cc-by`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub license:          Option<String>,
  /// Hosted version
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version:          Option<LocationVersion>,
  /// The hosting source
  #[serde(skip_serializing_if = "Option::is_none")]
  pub source:           Option<DehydratedSource>,
}

impl Entity for Location {
  const SCHEMA: &'static Schema = &LOCATION;
}

/// Open access information for a work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAccess {
  /// Whether the work is free to read somewhere
  pub is_oa:                       bool,
  /// Open access status
  pub oa_status:                   OaStatus,
  /// Best open access URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub oa_url:                      Option<String>,
  /// Whether any repository hosts the full text
  pub any_repository_has_fulltext: bool,
}

impl Entity for OpenAccess {
  const SCHEMA: &'static Schema = &OPEN_ACCESS;
}

/// An article processing charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apc {
  /// Amount in `currency`
  pub value:      i64,
  /// ISO 4217 currency code
  pub currency:   String,
  /// Amount converted to US dollars
  #[serde(skip_serializing_if = "Option::is_none")]
  pub value_usd:  Option<i64>,
  /// Where the figure comes from
  #[serde(skip_serializing_if = "Option::is_none")]
  pub provenance: Option<String>,
}

/// Volume, issue and pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biblio {
  /// Volume
  #[serde(skip_serializing_if = "Option::is_none")]
  pub volume:     Option<String>,
  /// Issue
  #[serde(skip_serializing_if = "Option::is_none")]
  pub issue:      Option<String>,
  /// First page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub first_page: Option<String>,
  /// Last page
  #[serde(skip_serializing_if = "Option::is_none")]
  pub last_page:  Option<String>,
}

/// Citation percentile relative to works of the same type, year and subfield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationPercentile {
  /// Percentile as a fraction between 0 and 1
  pub value:                f64,
  /// Whether the work is in the top 1%
  pub is_in_top_1_percent:  bool,
  /// Whether the work is in the top 10%
  pub is_in_top_10_percent: bool,
}

/// A sustainable development goal tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainableDevelopmentGoal {
  /// Canonical id of the goal
  pub id:           String,
  /// Name of the goal
  pub display_name: String,
  /// Classifier confidence
  pub score:        f64,
}

/// Citations a work received in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCountsByYear {
  /// Calendar year
  pub year:           i64,
  /// Citations received that year
  pub cited_by_count: u64,
}

/// Output and citations of an author in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCountsByYear {
  /// Calendar year
  pub year:           i64,
  /// Works published that year
  pub works_count:    u64,
  /// Citations received that year
  pub cited_by_count: u64,
}

/// An institution an author was affiliated with, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorAffiliation {
  /// The institution
  pub institution: DehydratedInstitution,
  /// Years of the affiliation, as reported
  pub years:       Vec<i64>,
}

/// Summary citation metrics of an author.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
  /// Mean citations per work over the last two years
  pub two_yr_mean_citedness: f64,
  /// h-index
  pub h_index:               u64,
  /// Number of works with at least ten citations
  pub i10_index:             u64,
}
