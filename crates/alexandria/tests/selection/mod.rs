use std::collections::BTreeSet;

use alexandria::registry::{selectable_fields, AuthorField, Exclusions, WorkField};

use super::*;

#[test]
fn test_select_fragment_follows_canonical_order() {
  let exclusions = Exclusions::from_iter([WorkField::Locations, WorkField::Concepts]);
  let select = exclusions.select_query();

  assert!(select.starts_with("select=id,doi,title,display_name,ids,"));
  assert!(!select.contains("locations,"));
  assert!(select.contains("best_oa_location"));
  assert!(!select.contains("concepts"));
  assert!(select.ends_with(",is_retracted,referenced_works_count,created_date,updated_date"));
}

#[test]
fn test_selectable_fields_are_schema_keys() {
  for name in selectable_fields::<WorkField>() {
    assert!(Work::SCHEMA.has_source(name), "{name}");
  }
  for name in selectable_fields::<AuthorField>() {
    assert!(Author::SCHEMA.has_source(name), "{name}");
  }
}

#[test]
fn test_excluded_response_validates_as_record() -> TestResult<()> {
  let exclusions = Exclusions::from_iter([
    WorkField::Title,
    WorkField::AbstractInvertedIndex,
    WorkField::Authorships,
  ]);
  let mut raw = work_fixture();
  let object = raw.as_object_mut().unwrap();
  for field in exclusions.iter() {
    object.remove(field.api_name());
  }

  let mapper = Mapper::new();
  let record = mapper.validate_excluding::<Work>(Some(&raw), &exclusions)?;
  assert!(!record.contains("title"));
  assert!(!record.contains("abstract"));

  // Every member that was not excluded and carried a value survives under its record name.
  let expected: BTreeSet<&str> = Work::SCHEMA
    .fields
    .iter()
    .filter(|field| !exclusions.iter().any(|excluded| excluded.api_name() == field.source))
    .filter(|field| raw.get(field.source).is_some_and(|value| !value.is_null()))
    .map(|field| field.target)
    .collect();
  let kept: BTreeSet<&str> = record.keys().collect();
  assert_eq!(kept, expected);
  assert!(kept.contains("publicationDate") && kept.contains("citationCount"));
  assert_eq!(record.get::<String>("id").as_deref(), Some("https://openalex.org/W2741809807"));

  let err = record.into_entity::<Work>().unwrap_err();
  assert_eq!(error_path(&err), "title");

  // Without the exclusions the same body is rejected up front.
  assert!(mapper.validate::<Work>(Some(&raw)).is_err());
  Ok(())
}

#[test]
fn test_excluding_only_optional_fields_still_converts() -> TestResult<()> {
  let exclusions = Exclusions::from_iter([AuthorField::SummaryStats, AuthorField::Affiliations]);
  let mut raw = author_fixture();
  raw.as_object_mut().unwrap().remove("summary_stats");
  raw.as_object_mut().unwrap().remove("affiliations");

  let record = Mapper::new().validate_excluding::<Author>(Some(&raw), &exclusions)?;
  let author: Author = record.into_entity()?;
  assert!(author.h_index().is_none());
  Ok(())
}

#[test]
fn test_exclusions_only_relax_the_root() {
  let exclusions = Exclusions::from_iter([WorkField::Ids]);
  let mut raw = work_fixture();
  at(&mut raw, "/primary_location/source").as_object_mut().unwrap().remove("id");

  let err = Mapper::new().validate_excluding::<Work>(Some(&raw), &exclusions).unwrap_err();
  assert_eq!(error_path(&err), "primary_location.source.id");
}
