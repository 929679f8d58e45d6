use super::*;

/// External identifiers of a work.
pub const WORK_IDS: Schema = Schema {
  name:   "work ids",
  fields: &[
    field!("openalex" => "openalex", Shape::Identifier),
    field!("doi" => "doi", Shape::String, optional),
    field!("pmid" => "pmid", Shape::String, optional),
    field!("pmcid" => "pmcid", Shape::String, optional),
    field!("mag" => "mag", Shape::String, optional),
  ],
};

/// A scholarly work: article, book, dataset, thesis, ...
///
/// Field order here is the canonical order of [`WorkField`].
pub const WORK: Schema = Schema {
  name:   "work",
  fields: &[
    field!("id" => "id", Shape::Identifier),
    field!("doi" => "doi", Shape::String, optional),
    field!("title" => "title", Shape::String),
    field!("display_name" => "displayName", Shape::String, optional),
    field!("ids" => "ids", Shape::Object(&WORK_IDS)),
    field!("language" => "language", Shape::String, optional),
    field!("type" => "type", Shape::String, optional),
    field!("indexed_in" => "indexedIn", Shape::ArrayOf(&Shape::Enum(IndexSource::NAMES))),
    field!("abstract_inverted_index" => "abstract", Shape::InvertedIndex, optional),
    field!("authorships" => "authorships", Shape::ArrayOf(&Shape::Object(&AUTHORSHIP)), optional),
    field!("apc_list" => "apcList", Shape::Object(&APC), optional),
    field!("apc_paid" => "apcPaid", Shape::Object(&APC), optional),
    field!("primary_location" => "primaryLocation", Shape::Object(&LOCATION), optional),
    field!("best_oa_location" => "bestOaLocation", Shape::Object(&LOCATION), optional),
    field!("locations" => "locations", Shape::ArrayOf(&Shape::Object(&LOCATION)), optional),
    field!("open_access" => "openAccess", Shape::Object(&OPEN_ACCESS), optional),
    field!("publication_date" => "publicationDate", Shape::Date),
    field!("publication_year" => "publicationYear", Shape::Integer),
    field!("biblio" => "biblio", Shape::Object(&BIBLIO), optional),
    field!("fwci" => "fwci", Shape::Float, optional),
    field!(
      "citation_normalized_percentile" => "citationNormalizedPercentile",
      Shape::Object(&CITATION_PERCENTILE),
      optional
    ),
    field!("cited_by_count" => "citationCount", Shape::Count),
    field!(
      "counts_by_year" => "countsByYear",
      Shape::ArrayOf(&Shape::Object(&WORK_COUNTS_BY_YEAR)),
      optional
    ),
    field!(
      "sustainable_development_goals" => "sustainableDevelopmentGoals",
      Shape::ArrayOf(&Shape::Object(&SUSTAINABLE_DEVELOPMENT_GOAL)),
      optional
    ),
    field!("has_fulltext" => "fullTextSearchable", Shape::Boolean),
    field!("concepts" => "concepts", Shape::ArrayOf(&Shape::Object(&WORK_CONCEPT)), optional),
    field!("is_retracted" => "isRetracted", Shape::Boolean, optional),
    field!("referenced_works_count" => "referencedWorksCount", Shape::Count, optional),
    field!("created_date" => "createdDate", Shape::Date, optional),
    field!("updated_date" => "updatedDate", Shape::Date, optional),
  ],
};
