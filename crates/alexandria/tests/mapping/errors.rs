use alexandria::error::ValueKind;

use super::*;

#[test]
fn test_missing_id_yields_no_entity() {
  let mut raw = work_fixture();
  raw.as_object_mut().unwrap().remove("id");

  let result = Mapper::new().validate::<Work>(Some(&raw));
  match result {
    Err(MapperError::MissingRequiredField { path }) => assert_eq!(path.to_string(), "id"),
    other => panic!("expected a missing id, got {other:?}"),
  }
}

#[test]
fn test_null_required_field_is_missing() {
  let mut raw = author_fixture();
  *at(&mut raw, "/display_name") = Value::Null;

  let err = Mapper::new().validate::<Author>(Some(&raw)).unwrap_err();
  assert!(matches!(err, MapperError::MissingRequiredField { .. }));
  assert_eq!(error_path(&err), "display_name");
}

#[test]
fn test_nested_paths_name_the_failing_value() {
  let mut raw = work_fixture();
  *at(&mut raw, "/authorships/2/author/id") = json!(42);

  let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
  assert_eq!(error_path(&err), "authorships[2].author.id");
  match err {
    MapperError::ShapeMismatch { actual, .. } => assert_eq!(actual, ValueKind::Number),
    other => panic!("expected a shape mismatch, got {other:?}"),
  }
}

#[test]
fn test_ids_openalex_is_required() {
  let mut raw = work_fixture();
  at(&mut raw, "/ids").as_object_mut().unwrap().remove("openalex");

  let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
  assert_eq!(err.to_string(), "ids.openalex: missing required field");
}

#[test]
fn test_unknown_enum_values() {
  let mut raw = work_fixture();
  *at(&mut raw, "/open_access/oa_status") = json!("platinum");
  let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
  assert!(matches!(&err, MapperError::UnknownEnumValue { value, .. } if value == "platinum"));
  assert_eq!(error_path(&err), "open_access.oa_status");

  let mut raw = work_fixture();
  *at(&mut raw, "/indexed_in/1") = json!("scopus");
  let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
  assert_eq!(error_path(&err), "indexed_in[1]");

  let mut raw = author_fixture();
  *at(&mut raw, "/affiliations/1/institution/type") = json!("university");
  let err = Mapper::new().validate::<Author>(Some(&raw)).unwrap_err();
  assert_eq!(error_path(&err), "affiliations[1].institution.type");
}

#[test]
fn test_malformed_dates() {
  for date in ["13/02/2018", "2018-02-31", "2018"] {
    let mut raw = work_fixture();
    *at(&mut raw, "/publication_date") = json!(date);
    let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
    assert!(matches!(err, MapperError::ShapeMismatch { .. }), "{date}");
  }
}

#[test]
fn test_counts_must_be_non_negative_integers() {
  let mut raw = work_fixture();
  *at(&mut raw, "/cited_by_count") = json!(-1);
  let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
  assert_eq!(err.to_string(), "cited_by_count: expected non-negative integer, got number");

  let mut raw = work_fixture();
  *at(&mut raw, "/publication_year") = json!(2018.5);
  let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
  assert_eq!(error_path(&err), "publication_year");
}

#[test]
fn test_malformed_abstract_index() {
  let mut raw = work_fixture();
  *at(&mut raw, "/abstract_inverted_index/Despite") = json!("zero");
  let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
  assert_eq!(error_path(&err), "abstract_inverted_index.Despite");
}

#[test]
fn test_empty_abstract_index_has_no_abstract() -> TestResult<()> {
  let mut raw = work_fixture();
  *at(&mut raw, "/abstract_inverted_index") = json!({});
  let work: Work = Mapper::new().validate(Some(&raw))?;
  assert!(work.abstract_text.is_none());
  Ok(())
}

#[test]
fn test_first_failure_wins() {
  let mut raw = work_fixture();
  *at(&mut raw, "/title") = json!(1);
  *at(&mut raw, "/has_fulltext") = json!("yes");

  let err = Mapper::new().validate::<Work>(Some(&raw)).unwrap_err();
  assert_eq!(error_path(&err), "title");
}

#[test]
fn test_missing_input() {
  assert!(matches!(Mapper::new().validate::<Work>(None), Err(MapperError::EmptyOrMissingInput)));
  assert!(matches!(Mapper::new().from_slice::<Work>(b""), Err(MapperError::EmptyOrMissingInput)));
  assert!(matches!(Mapper::new().from_slice::<Work>(b"null"), Err(MapperError::EmptyOrMissingInput)));
}
