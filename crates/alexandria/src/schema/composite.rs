//! Composite entities and the small nested structures shared by works and authors.

use super::*;

/// One raw affiliation string of an authorship, resolved to institution ids.
pub const AUTHORSHIP_AFFILIATION: Schema = Schema {
  name:   "affiliation",
  fields: &[
    field!("raw_affiliation_string" => "rawAffiliationString", Shape::String),
    field!("institution_ids" => "institutionIds", Shape::ArrayOf(&Shape::Identifier)),
  ],
};

/// An author's position on a work together with their affiliations at the time.
pub const AUTHORSHIP: Schema = Schema {
  name:   "authorship",
  fields: &[
    field!(
      "affiliations" => "affiliations",
      Shape::ArrayOf(&Shape::Object(&AUTHORSHIP_AFFILIATION))
    ),
    field!("author" => "author", Shape::Object(&DEHYDRATED_AUTHOR)),
    field!("author_position" => "authorPosition", Shape::Enum(AuthorPosition::NAMES)),
    field!(
      "institutions" => "institutions",
      Shape::ArrayOf(&Shape::Object(&DEHYDRATED_INSTITUTION))
    ),
    field!("raw_author_name" => "rawAuthorName", Shape::String),
    field!("is_corresponding" => "isCorresponding", Shape::Boolean),
    field!("countries" => "countries", Shape::ArrayOf(&Shape::String), optional),
    field!(
      "raw_affiliation_strings" => "rawAffiliationStrings",
      Shape::ArrayOf(&Shape::String),
      optional
    ),
  ],
};

/// A place where a work is hosted.
pub const LOCATION: Schema = Schema {
  name:   "location",
  fields: &[
    field!("is_oa" => "isOa", Shape::Boolean),
    field!("is_accepted" => "isAccepted", Shape::Boolean, optional),
    field!("is_published" => "isPublished", Shape::Boolean, optional),
    field!("landing_page_url" => "landingPageUrl", Shape::String, optional),
    field!("pdf_url" => "pdfUrl", Shape::String, optional),
    field!("license" => "license", Shape::String, optional),
    field!("version" => "version", Shape::Enum(LocationVersion::NAMES), optional),
    field!("source" => "source", Shape::Object(&DEHYDRATED_SOURCE), optional),
  ],
};

/// Open access status of a work.
pub const OPEN_ACCESS: Schema = Schema {
  name:   "open access",
  fields: &[
    field!("is_oa" => "isOa", Shape::Boolean),
    field!("oa_status" => "oaStatus", Shape::Enum(OaStatus::NAMES)),
    field!("oa_url" => "oaUrl", Shape::String, optional),
    field!("any_repository_has_fulltext" => "anyRepositoryHasFulltext", Shape::Boolean),
  ],
};

/// An article processing charge, as listed or as paid.
pub const APC: Schema = Schema {
  name:   "apc",
  fields: &[
    field!("value" => "value", Shape::Integer),
    field!("currency" => "currency", Shape::String),
    field!("value_usd" => "valueUsd", Shape::Integer, optional),
    field!("provenance" => "provenance", Shape::String, optional),
  ],
};

/// Volume, issue and page range of a work.
pub const BIBLIO: Schema = Schema {
  name:   "biblio",
  fields: &[
    field!("volume" => "volume", Shape::String, optional),
    field!("issue" => "issue", Shape::String, optional),
    field!("first_page" => "firstPage", Shape::String, optional),
    field!("last_page" => "lastPage", Shape::String, optional),
  ],
};

/// Where a work's citation count falls relative to comparable works.
pub const CITATION_PERCENTILE: Schema = Schema {
  name:   "citation percentile",
  fields: &[
    field!("value" => "value", Shape::Float),
    field!("is_in_top_1_percent" => "isInTop1Percent", Shape::Boolean),
    field!("is_in_top_10_percent" => "isInTop10Percent", Shape::Boolean),
  ],
};

/// A sustainable development goal attached to a work.
pub const SUSTAINABLE_DEVELOPMENT_GOAL: Schema = Schema {
  name:   "sustainable development goal",
  fields: &[
    field!("id" => "id", Shape::Identifier),
    field!("display_name" => "displayName", Shape::String),
    field!("score" => "score", Shape::Float),
  ],
};

/// Citations received by a work in one year.
pub const WORK_COUNTS_BY_YEAR: Schema = Schema {
  name:   "yearly count",
  fields: &[
    field!("year" => "year", Shape::Integer),
    field!("cited_by_count" => "citedByCount", Shape::Count),
  ],
};

/// Works published and citations received by an author in one year.
pub const AUTHOR_COUNTS_BY_YEAR: Schema = Schema {
  name:   "yearly count",
  fields: &[
    field!("year" => "year", Shape::Integer),
    field!("works_count" => "worksCount", Shape::Count),
    field!("cited_by_count" => "citedByCount", Shape::Count),
  ],
};

/// An institution an author has been affiliated with, and the years of that affiliation.
pub const AUTHOR_AFFILIATION: Schema = Schema {
  name:   "affiliation",
  fields: &[
    field!("institution" => "institution", Shape::Object(&DEHYDRATED_INSTITUTION)),
    field!("years" => "years", Shape::ArrayOf(&Shape::Integer)),
  ],
};

/// Citation metrics summarizing an author's output.
pub const SUMMARY_STATS: Schema = Schema {
  name:   "summary stats",
  fields: &[
    field!("2yr_mean_citedness" => "twoYrMeanCitedness", Shape::Float),
    field!("h_index" => "hIndex", Shape::Count),
    field!("i10_index" => "i10Index", Shape::Count),
  ],
};
