//! Dehydrated entities: minimal projections embedded inside works and authors.

use super::*;

/// An institution as referenced from an authorship or an author's affiliations.
pub const DEHYDRATED_INSTITUTION: Schema = Schema {
  name:   "institution",
  fields: &[
    field!("id" => "id", Shape::Identifier),
    field!("display_name" => "displayName", Shape::String),
    field!("country_code" => "countryCode", Shape::String, optional),
    field!("lineage" => "lineage", Shape::Lineage, optional),
    field!("ror" => "ror", Shape::String),
    field!("type" => "type", Shape::Enum(InstitutionType::NAMES)),
  ],
};

/// A source (journal, repository, ...) as referenced from a location.
pub const DEHYDRATED_SOURCE: Schema = Schema {
  name:   "source",
  fields: &[
    field!("id" => "id", Shape::Identifier),
    field!("display_name" => "displayName", Shape::String),
    field!("host_organization" => "hostOrganization", Shape::String, optional),
    field!("host_organization_name" => "hostOrganizationName", Shape::String, optional),
    field!("is_core" => "isCore", Shape::Boolean),
    field!("is_in_doaj" => "isInDoaj", Shape::Boolean),
    field!("is_oa" => "isOa", Shape::Boolean),
    field!("issn" => "issn", Shape::ArrayOf(&Shape::String), optional),
    field!("issn_l" => "issnL", Shape::String, optional),
    field!("type" => "type", Shape::Enum(SourceType::NAMES)),
  ],
};

/// An author as referenced from an authorship.
pub const DEHYDRATED_AUTHOR: Schema = Schema {
  name:   "author",
  fields: &[
    field!("id" => "id", Shape::Identifier),
    field!("display_name" => "displayName", Shape::String),
    field!("orcid" => "orcid", Shape::String, optional),
  ],
};

/// A concept tag. Levels run from 0 (root) to 5 (most specific).
pub const DEHYDRATED_CONCEPT: Schema = Schema {
  name:   "concept",
  fields: &[
    field!("display_name" => "displayName", Shape::String),
    field!("id" => "id", Shape::Identifier),
    field!("level" => "level", Shape::BoundedInteger { min: 0, max: 5 }),
    field!("wikidata" => "wikiDataId", Shape::String),
  ],
};

/// A concept attached to a work, carrying the work's relevance score for it.
pub const WORK_CONCEPT: Schema = Schema {
  name:   "concept",
  fields: &[
    field!("display_name" => "displayName", Shape::String),
    field!("id" => "id", Shape::Identifier),
    field!("level" => "level", Shape::BoundedInteger { min: 0, max: 5 }),
    field!("wikidata" => "wikiDataId", Shape::String),
    field!("score" => "score", Shape::Float),
  ],
};
