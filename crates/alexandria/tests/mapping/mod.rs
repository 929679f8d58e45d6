use alexandria::{
  entity::{AuthorPosition, InstitutionType, LocationVersion, OaStatus, SourceType},
  mapper::Record,
};
use chrono::{Datelike, NaiveDate};

use super::*;

mod errors;

#[traced_test]
#[test]
fn test_full_work() -> TestResult<()> {
  let work: Work = Mapper::new().validate(Some(&work_fixture()))?;

  assert_eq!(work.id, "https://openalex.org/W2741809807");
  assert_eq!(work.ids.mag.as_deref(), Some("2741809807"));
  assert!(work.ids.pmcid.is_none());
  assert_eq!(work.work_type.as_deref(), Some("article"));
  assert_eq!(work.citation_count, 1024);
  assert!(work.full_text_searchable);
  assert_eq!(work.indexed_in.len(), 3);
  assert_eq!(
    work.abstract_text.as_deref(),
    Some("Despite growing interest in Open Access (OA) in scholarly literature,")
  );

  let authorships = work.authorships.as_ref().unwrap();
  assert_eq!(authorships.len(), 3);
  assert_eq!(authorships[0].author_position, AuthorPosition::First);
  assert_eq!(authorships[2].author_position, AuthorPosition::Last);
  assert!(authorships[1].author.orcid.is_none());
  assert!(authorships[2].countries.is_none());
  assert_eq!(work.author_names(), vec!["Heather Piwowar", "Jason Priem", "Stefanie Haustein"]);

  let primary = work.primary_location.as_ref().unwrap();
  assert_eq!(primary.version, Some(LocationVersion::Published));
  let source = primary.source.as_ref().unwrap();
  assert_eq!(source.source_type, SourceType::Journal);
  assert_eq!(source.issn_l.as_deref(), Some("2167-8359"));

  let locations = work.locations.as_ref().unwrap();
  assert!(locations[0].source.is_none());

  let open_access = work.open_access.as_ref().unwrap();
  assert_eq!(open_access.oa_status, OaStatus::Gold);
  assert!(work.is_open_access());
  assert_eq!(work.pdf_url(), Some("https://peerj.com/articles/4375.pdf"));

  assert!(work.apc_paid.is_none());
  assert_eq!(work.apc_list.as_ref().map(|apc| apc.value_usd), Some(Some(1395)));
  assert!(work.citation_normalized_percentile.as_ref().unwrap().is_in_top_1_percent);
  assert_eq!(work.biblio.as_ref().unwrap().issue, None);
  assert_eq!(work.concepts.as_ref().unwrap()[1].concept.level, 0);
  assert_eq!(work.referenced_works_count, Some(66));
  Ok(())
}

#[test]
fn test_dates_are_utc_calendar_days() -> TestResult<()> {
  let work: Work = Mapper::new().validate(Some(&work_fixture()))?;

  assert_eq!(work.publication_date.year(), 2018);
  assert_eq!(work.publication_date.month0(), 1);
  assert_eq!(work.publication_date.day(), 13);

  let published = work.published_at();
  assert_eq!((published.year(), published.month0(), published.day()), (2018, 1, 13));

  assert_eq!(work.updated_date, NaiveDate::from_ymd_opt(2024, 10, 10));
  assert_eq!(work.created_date, NaiveDate::from_ymd_opt(2016, 6, 24));
  Ok(())
}

#[test]
fn test_lineage_fallback_inside_work() -> TestResult<()> {
  let work: Work = Mapper::new().validate(Some(&work_fixture()))?;
  let institution = &work.authorships.as_ref().unwrap()[1].institutions[0];

  assert_eq!(institution.institution_type, InstitutionType::Nonprofit);
  assert_eq!(institution.lineage, vec![institution.id.clone()]);
  Ok(())
}

#[test]
fn test_full_author() -> TestResult<()> {
  let author: Author = Mapper::new().validate(Some(&author_fixture()))?;

  assert_eq!(author.display_name, "Jason Priem");
  assert_eq!(author.works_count, 53);
  assert_eq!(author.cited_by_count, 2811);
  assert!(author.ids.scopus.is_none());
  assert_eq!(author.h_index(), Some(15));
  assert_eq!(author.summary_stats.unwrap().two_yr_mean_citedness, 10.25);
  assert_eq!(author.years_at("https://openalex.org/I4200000001"), vec![2017, 2018, 2023]);
  assert!(author.years_at("https://openalex.org/I0").is_empty());
  assert_eq!(author.counts_by_year[0].cited_by_count, 275);
  assert_eq!(author.updated_date, NaiveDate::from_ymd_opt(2024, 10, 10));
  Ok(())
}

#[test]
fn test_validation_is_deterministic() -> TestResult<()> {
  let mapper = Mapper::new();
  let raw = work_fixture();

  let first: Work = mapper.validate(Some(&raw))?;
  let second: Work = mapper.validate(Some(&raw))?;
  assert_eq!(first, second);
  assert_eq!(serde_json::to_string(&first)?, serde_json::to_string(&second)?);
  Ok(())
}

#[test]
fn test_serialized_entities_use_renamed_fields() -> TestResult<()> {
  let work: Work = Mapper::new().validate(Some(&work_fixture()))?;
  let value = serde_json::to_value(&work)?;

  assert_eq!(value["citationCount"], json!(1024));
  assert_eq!(value["fullTextSearchable"], json!(true));
  assert_eq!(value["publicationDate"], json!("2018-02-13"));
  assert_eq!(value["citationNormalizedPercentile"]["isInTop1Percent"], json!(true));
  assert_eq!(value["concepts"][0]["wikiDataId"], json!("https://www.wikidata.org/wiki/Q1150264"));
  assert!(value.get("abstract_inverted_index").is_none());
  assert!(value.get("apcPaid").is_none());
  assert!(value["ids"].get("pmcid").is_none());
  Ok(())
}

#[test]
fn test_null_and_absent_optionals_agree() -> TestResult<()> {
  let mapper = Mapper::new();
  let mut raw = work_fixture();
  *at(&mut raw, "/fwci") = Value::Null;
  let with_null: Work = mapper.validate(Some(&raw))?;

  raw.as_object_mut().unwrap().remove("fwci");
  let without: Work = mapper.validate(Some(&raw))?;

  assert_eq!(with_null, without);
  assert!(with_null.fwci.is_none());
  Ok(())
}

#[test]
fn test_record_round_trips_into_entity() -> TestResult<()> {
  let mapper = Mapper::new();
  let record: Record = mapper.validate_kind(Work::KIND, Some(&work_fixture()))?;
  assert!(record.contains("abstract"));
  assert_eq!(record.get::<u64>("citationCount"), Some(1024));

  let work: Work = record.into_entity()?;
  assert_eq!(work, mapper.validate::<Work>(Some(&work_fixture()))?);
  Ok(())
}

#[test]
fn test_from_slice_parses_bytes() -> TestResult<()> {
  let bytes = include_bytes!("../fixtures/author.json");
  let author: Author = Mapper::new().from_slice(bytes)?;
  assert_eq!(author.id, "https://openalex.org/A5023888391");
  Ok(())
}
