use alexandria::{
  filter::{
    AuthorFilter, AuthorNumberFilter, AuthorStringFilter, FilterBuilder, FilterOperator,
    WorkBoolFilter, WorkFilter, WorkNumberFilter, WorkStringFilter,
  },
  profile::QueryProfile,
};

use super::*;

#[test]
fn test_generic_builder_grammar() {
  let filter = FilterBuilder::new()
    .add("author.id", "A5023888391")
    .add_with("type", "article", FilterOperator::Not);
  assert_eq!(filter.to_query_fragment(), "filter=author.id:A5023888391,type:!article");

  assert_eq!(FilterBuilder::new().add("id", ["A1", "A2"]).to_query_fragment(), "filter=id:A1|A2");
}

#[test]
fn test_generic_builder_accepts_any_field() {
  let filter = FilterBuilder::new().add("not_a_real_field", "x");
  assert_eq!(filter.to_query_fragment(), "filter=not_a_real_field:x");
}

#[test]
fn test_typed_work_filter() {
  let filter = WorkFilter::new()
    .string(WorkStringFilter::InstitutionCountryCode, vec!["CA", "US"])
    .number_with(WorkNumberFilter::PublicationYear, 2015, FilterOperator::GreaterThan)
    .number_with(WorkNumberFilter::PublicationYear, 2020, FilterOperator::LessThan)
    .boolean_with(WorkBoolFilter::IsRetracted, true, FilterOperator::Not);

  assert_eq!(
    filter.to_query_fragment(),
    "filter=institutions.country_code:CA|US,publication_year:>2015,publication_year:<2020,\
     is_retracted:!true"
  );
}

#[test]
fn test_typed_author_filter_extends_generically() {
  let builder = AuthorFilter::new()
    .string(AuthorStringFilter::Orcid, "0000-0001-6187-6610")
    .number(AuthorNumberFilter::WorksCount, 53)
    .into_inner()
    .add("x_concepts.id", "C41008148");

  assert_eq!(
    builder.to_query_fragment(),
    "filter=orcid:0000-0001-6187-6610,works_count:53,x_concepts.id:C41008148"
  );
}

#[test]
fn test_profile_on_disk() -> TestResult<()> {
  let profile = QueryProfile::from_path(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../config/profiles/recent_open_access.toml"
  ))?;

  assert_eq!(profile.entity(), Work::KIND);
  let query = profile.to_query_string()?;
  assert!(query.starts_with("select=id,"));
  assert!(query.contains("&filter=from_publication_date:2020-01-01,is_oa:true"));
  Ok(())
}
