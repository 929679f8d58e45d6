use super::*;

/// External identifiers of an author.
pub const AUTHOR_IDS: Schema = Schema {
  name:   "author ids",
  fields: &[
    field!("openalex" => "openalex", Shape::Identifier),
    field!("orcid" => "orcid", Shape::String, optional),
    field!("wikipedia" => "wikipedia", Shape::String, optional),
    field!("scopus" => "scopus", Shape::String, optional),
    field!("twitter" => "twitter", Shape::String, optional),
  ],
};

/// A person credited on works, with their affiliations and citation record.
///
/// Field order here is the canonical order of [`AuthorField`].
pub const AUTHOR: Schema = Schema {
  name:   "author",
  fields: &[
    field!("id" => "id", Shape::Identifier),
    field!("orcid" => "orcid", Shape::String, optional),
    field!("display_name" => "displayName", Shape::String),
    field!(
      "display_name_alternatives" => "displayNameAlternatives",
      Shape::ArrayOf(&Shape::String),
      optional
    ),
    field!("ids" => "ids", Shape::Object(&AUTHOR_IDS)),
    field!(
      "affiliations" => "affiliations",
      Shape::ArrayOf(&Shape::Object(&AUTHOR_AFFILIATION)),
      optional
    ),
    field!(
      "last_known_institutions" => "lastKnownInstitutions",
      Shape::ArrayOf(&Shape::Object(&DEHYDRATED_INSTITUTION)),
      optional
    ),
    field!("works_count" => "worksCount", Shape::Count),
    field!("cited_by_count" => "citedByCount", Shape::Count),
    field!(
      "counts_by_year" => "countsByYear",
      Shape::ArrayOf(&Shape::Object(&AUTHOR_COUNTS_BY_YEAR))
    ),
    field!("summary_stats" => "summaryStats", Shape::Object(&SUMMARY_STATS), optional),
    field!("works_api_url" => "worksApiUrl", Shape::String, optional),
    field!("created_date" => "createdDate", Shape::Date, optional),
    field!("updated_date" => "updatedDate", Shape::Date, optional),
  ],
};
