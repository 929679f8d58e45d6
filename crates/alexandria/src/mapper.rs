//! The validate-and-transform routine.
//!
//! [`Mapper`] interprets a [`Schema`] against a raw JSON value. Validation and transformation
//! happen in one walk over the table:
//!
//! 1. Required fields must be present, non-null and shape-conformant.
//! 2. Optional fields that are absent or `null` are left out of the output.
//! 3. Nested objects and arrays recurse; errors carry the full path (`authorships[2].author.id`).
//! 4. Keys are renamed from the API's snake_case to the record's camelCase and derived values
//!    (abstract text, calendar days, lineage) replace their raw forms.
//!
//! The first failure aborts the walk, so a caller receives either a complete [`Record`] or an
//! error, never a partial record.
//!
//! # Excluded fields
//!
//! The [`registry`](crate::registry) never touches schemas. A caller that sent a `select=` fragment
//! must validate the response with [`Mapper::validate_excluding`], passing the same
//! [`Exclusions`]. Excluded fields are then treated as optional even where the schema requires
//! them, and the result is a [`Record`] rather than a typed entity, since the typed entity may not
//! be constructible without them.
//!
//! # Examples
//!
//! ```
//! use alexandria::{
//!   entity::Author,
//!   prelude::*,
//!   registry::{AuthorField, Exclusions},
//! };
//! use serde_json::json;
//!
//! let raw = json!({
//!   "id": "https://openalex.org/A5023888391",
//!   "display_name": "Jason Priem",
//!   "ids": { "openalex": "https://openalex.org/A5023888391" },
//!   "works_count": 53,
//!   "cited_by_count": 2811
//! });
//!
//! // `counts_by_year` is required, so the full entity cannot be built...
//! assert!(Mapper::new().validate::<Author>(Some(&raw)).is_err());
//!
//! // ...but a response requested without it validates into a record.
//! let exclusions = Exclusions::from_iter([AuthorField::CountsByYear]);
//! let record = Mapper::new().validate_excluding::<Author>(Some(&raw), &exclusions).unwrap();
//! assert_eq!(record.get::<u64>("citedByCount"), Some(2811));
//! assert!(!record.contains("countsByYear"));
//! ```

use super::*;

/// A validated, renamed and enriched record.
///
/// Keys are the camelCase `target` names of the schema it was validated against; nested records
/// are JSON objects keyed the same way. Absent optional fields have no key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
  /// Reads a field as `T`, returning `None` if it is absent or not convertible.
  pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
    self.0.get(key).and_then(|value| serde_json::from_value(value.clone()).ok())
  }

  /// The raw JSON value of a field.
  pub fn get_value(&self, key: &str) -> Option<&Value> { self.0.get(key) }

  /// Whether the record carries the given field.
  pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

  /// Field names present in the record, in ascending order.
  pub fn keys(&self) -> impl Iterator<Item = &str> { self.0.keys().map(String::as_str) }

  /// Number of fields present.
  pub fn len(&self) -> usize { self.0.len() }

  /// Whether the record carries no fields.
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// The record as a JSON object.
  pub fn into_value(self) -> Value { Value::Object(self.0) }

  /// Converts the record into its typed entity.
  ///
  /// Fails with [`MapperError::MissingRequiredField`] if a field the schema requires is absent,
  /// which happens for records validated with exclusions.
  pub fn into_entity<E: Entity>(self) -> Result<E> {
    if let Some(missing) =
      E::SCHEMA.fields.iter().find(|field| field.is_required() && !self.0.contains_key(field.target))
    {
      return Err(MapperError::MissingRequiredField {
        path: PathNode::Root.key(missing.source).into(),
      });
    }
    serde_json::from_value(self.into_value()).map_err(MapperError::Decode)
  }
}

impl From<Record> for Value {
  fn from(record: Record) -> Self { record.into_value() }
}

/// Validates raw JSON values against schema tables.
///
/// The mapper holds no state; one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mapper;

impl Mapper {
  /// Creates a mapper.
  pub fn new() -> Self { Self }

  /// Validates `raw` and converts it into the typed entity `E`.
  ///
  /// `None` stands for a transport that produced no body; it is reported as
  /// [`MapperError::EmptyOrMissingInput`], as is a top-level JSON `null`.
  pub fn validate<E: Entity>(&self, raw: Option<&Value>) -> Result<E> {
    self.validate_record(E::SCHEMA, raw, &[])?.into_entity()
  }

  /// Validates a response that was requested with a `select=` fragment built from `exclusions`.
  ///
  /// Excluded fields are optional for this call only. The result is a [`Record`]; use
  /// [`Record::into_entity`] if every required field turns out to be present anyway.
  pub fn validate_excluding<E: RootEntity>(
    &self,
    raw: Option<&Value>,
    exclusions: &Exclusions<E::Field>,
  ) -> Result<Record> {
    let excluded: Vec<&'static str> = exclusions.iter().map(|field| field.api_name()).collect();
    self.validate_record(E::SCHEMA, raw, &excluded)
  }

  /// Validates `raw` against the schema of a kind chosen at runtime.
  pub fn validate_kind(&self, kind: EntityKind, raw: Option<&Value>) -> Result<Record> {
    self.validate_record(kind.schema(), raw, &[])
  }

  /// Validates `raw` against `schema`, treating the `excluded` API field names as optional.
  pub fn validate_record(
    &self,
    schema: &Schema,
    raw: Option<&Value>,
    excluded: &[&str],
  ) -> Result<Record> {
    let raw = match raw {
      None | Some(Value::Null) => return Err(MapperError::EmptyOrMissingInput),
      Some(raw) => raw,
    };
    let record = walk_object(schema, raw, &PathNode::Root, excluded)?;
    debug!(schema = schema.name, fields = record.len(), "validated record");
    Ok(Record(record))
  }

  /// Parses raw response bytes and validates them as `E`.
  ///
  /// An empty or whitespace-only body is [`MapperError::EmptyOrMissingInput`].
  pub fn from_slice<E: Entity>(&self, bytes: &[u8]) -> Result<E> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
      return Err(MapperError::EmptyOrMissingInput);
    }
    let value: Value = serde_json::from_slice(bytes).map_err(MapperError::Json)?;
    self.validate(Some(&value))
  }

  /// Parses a raw response body and validates it as `E`.
  pub fn from_str<E: Entity>(&self, text: &str) -> Result<E> { self.from_slice(text.as_bytes()) }
}

/// Validates one object against `schema`. `excluded` only applies at this level.
fn walk_object(
  schema: &Schema,
  value: &Value,
  path: &PathNode<'_>,
  excluded: &[&str],
) -> Result<Map<String, Value>> {
  let object = value
    .as_object()
    .ok_or_else(|| MapperError::shape(path, format!("{} object", schema.name), value))?;

  let mut output = Map::new();
  for field in schema.fields {
    let field_path = path.key(field.source);
    let raw = object.get(field.source).filter(|raw| !raw.is_null());

    let Some(raw) = raw else {
      if field.is_required() && !excluded.contains(&field.source) {
        return Err(MapperError::MissingRequiredField { path: field_path.into() });
      }
      continue;
    };

    if let Some(converted) = convert(&field.shape, raw, &field_path)? {
      output.insert(field.target.to_string(), converted);
    }
  }

  apply_lineage_fallback(schema, &mut output);
  Ok(output)
}

/// Converts a single present, non-null value. `Ok(None)` means "omit this field".
fn convert(shape: &Shape, raw: &Value, path: &PathNode<'_>) -> Result<Option<Value>> {
  let mismatch = || MapperError::shape(path, shape.describe(), raw);

  let converted = match shape {
    Shape::String => raw.as_str().map(Value::from).ok_or_else(mismatch)?,
    Shape::Identifier => match raw.as_str() {
      Some(id) if !id.is_empty() => Value::from(id),
      _ => return Err(mismatch()),
    },
    Shape::Integer => raw.as_i64().map(Value::from).ok_or_else(mismatch)?,
    Shape::Count => raw.as_u64().map(Value::from).ok_or_else(mismatch)?,
    Shape::BoundedInteger { min, max } => match raw.as_i64() {
      Some(n) if (*min..=*max).contains(&n) => Value::from(n),
      _ => return Err(mismatch()),
    },
    Shape::Float => match raw {
      Value::Number(_) => raw.clone(),
      _ => return Err(mismatch()),
    },
    Shape::Boolean => raw.as_bool().map(Value::from).ok_or_else(mismatch)?,
    Shape::Date => {
      let date = raw.as_str().and_then(derive::parse_date).ok_or_else(mismatch)?;
      Value::from(date.to_string())
    },
    Shape::Enum(names) => {
      let literal = raw.as_str().ok_or_else(mismatch)?;
      if !names.contains(&literal) {
        return Err(MapperError::UnknownEnumValue { path: path.into(), value: literal.to_string() });
      }
      Value::from(literal)
    },
    Shape::Object(schema) => {
      trace!(path = %FieldPath::from(path), schema = schema.name, "descending into object");
      Value::Object(walk_object(schema, raw, path, &[])?)
    },
    Shape::ArrayOf(inner) => {
      let items = raw.as_array().ok_or_else(mismatch)?;
      let mut converted = Vec::with_capacity(items.len());
      for (i, item) in items.iter().enumerate() {
        let item_path = path.index(i);
        match convert(inner, item, &item_path)? {
          Some(value) => converted.push(value),
          None => return Err(MapperError::shape(&item_path, inner.describe(), item)),
        }
      }
      Value::Array(converted)
    },
    Shape::InvertedIndex => return inverted_index(raw, path).map(|text| text.map(Value::from)),
    Shape::Lineage => {
      let ids = convert(&Shape::ArrayOf(&Shape::Identifier), raw, path)?;
      return Ok(ids.filter(|ids| ids.as_array().is_some_and(|ids| !ids.is_empty())));
    },
  };
  Ok(Some(converted))
}

/// Validates an inverted index and reconstructs its text.
fn inverted_index(raw: &Value, path: &PathNode<'_>) -> Result<Option<String>> {
  let object =
    raw.as_object().ok_or_else(|| MapperError::shape(path, Shape::InvertedIndex.describe(), raw))?;

  let mut entries = Vec::with_capacity(object.len());
  for (word, positions) in object {
    let word_path = path.key(word);
    let positions = positions
      .as_array()
      .ok_or_else(|| MapperError::shape(&word_path, "array of positions", positions))?;
    let mut parsed = Vec::with_capacity(positions.len());
    for (i, position) in positions.iter().enumerate() {
      let position = position
        .as_u64()
        .ok_or_else(|| MapperError::shape(word_path.index(i), "non-negative integer", position))?;
      parsed.push(position);
    }
    entries.push((word.as_str(), parsed));
  }

  Ok(derive::reconstruct_abstract(entries))
}

/// Makes every lineage contain the record's own id, filling an absent or empty one with it.
fn apply_lineage_fallback(schema: &Schema, output: &mut Map<String, Value>) {
  let Some(id) = output.get("id").cloned() else { return };
  for field in schema.fields.iter().filter(|field| matches!(field.shape, Shape::Lineage)) {
    match output.get_mut(field.target) {
      Some(Value::Array(lineage)) =>
        if derive::ensure_lineage_member(lineage, &id) {
          trace!(schema = schema.name, id = %id, "lineage omitted the record, appended it");
        },
      _ => {
        trace!(schema = schema.name, id = %id, "lineage defaults to the record itself");
        output.insert(field.target.to_string(), derive::lineage_fallback(&id));
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn institution() -> Value {
    json!({
      "id": "https://openalex.org/I136199984",
      "display_name": "Harvard University",
      "country_code": "US",
      "lineage": ["https://openalex.org/I136199984"],
      "ror": "https://ror.org/03vek6s52",
      "type": "education"
    })
  }

  #[traced_test]
  #[test]
  fn validates_dehydrated_institution() {
    let institution: DehydratedInstitution = Mapper::new().validate(Some(&institution())).unwrap();
    assert_eq!(institution.display_name, "Harvard University");
    assert_eq!(institution.institution_type, InstitutionType::Education);
    assert!(institution.is_top_level());
    assert!(logs_contain("validated record"));
  }

  #[test]
  fn null_and_absent_optionals_collapse() {
    let mut raw = institution();
    raw["country_code"] = Value::Null;
    let with_null = Mapper::new().validate_kind(EntityKind::Institution, Some(&raw)).unwrap();

    raw.as_object_mut().unwrap().remove("country_code");
    let without = Mapper::new().validate_kind(EntityKind::Institution, Some(&raw)).unwrap();

    assert_eq!(with_null, without);
    assert!(!with_null.contains("countryCode"));
  }

  #[test]
  fn missing_lineage_becomes_self() {
    let mut raw = institution();
    raw["lineage"] = json!([]);
    let institution: DehydratedInstitution = Mapper::new().validate(Some(&raw)).unwrap();
    assert_eq!(institution.lineage, vec!["https://openalex.org/I136199984".to_string()]);

    raw.as_object_mut().unwrap().remove("lineage");
    let institution: DehydratedInstitution = Mapper::new().validate(Some(&raw)).unwrap();
    assert_eq!(institution.lineage.len(), 1);
  }

  #[test]
  fn parent_lineage_is_preserved() {
    let mut raw = institution();
    raw["lineage"] = json!(["https://openalex.org/I136199984", "https://openalex.org/I2"]);
    let institution: DehydratedInstitution = Mapper::new().validate(Some(&raw)).unwrap();
    assert_eq!(institution.lineage, vec![
      "https://openalex.org/I136199984".to_string(),
      "https://openalex.org/I2".to_string(),
    ]);
    assert!(!institution.is_top_level());
  }

  #[test]
  fn lineage_always_contains_own_id() {
    let mut raw = institution();
    raw["lineage"] = json!(["https://openalex.org/I1", "https://openalex.org/I2"]);
    let institution: DehydratedInstitution = Mapper::new().validate(Some(&raw)).unwrap();
    assert_eq!(institution.lineage, vec![
      "https://openalex.org/I1".to_string(),
      "https://openalex.org/I2".to_string(),
      "https://openalex.org/I136199984".to_string(),
    ]);
    assert!(institution.lineage.contains(&institution.id));
  }

  #[test]
  fn unknown_enum_values_are_rejected() {
    let mut raw = institution();
    raw["type"] = json!("university");
    let err = Mapper::new().validate::<DehydratedInstitution>(Some(&raw)).unwrap_err();
    assert!(matches!(
      &err,
      MapperError::UnknownEnumValue { value, .. } if value == "university"
    ));
    assert_eq!(err.to_string(), "type: unknown value \"university\"");
  }

  #[test]
  fn empty_identifier_is_a_shape_mismatch() {
    let mut raw = institution();
    raw["id"] = json!("");
    let err = Mapper::new().validate::<DehydratedInstitution>(Some(&raw)).unwrap_err();
    assert!(matches!(err, MapperError::ShapeMismatch { .. }));
  }

  #[test]
  fn missing_input_is_reported() {
    let mapper = Mapper::new();
    assert!(matches!(
      mapper.validate::<DehydratedAuthor>(None),
      Err(MapperError::EmptyOrMissingInput)
    ));
    assert!(matches!(
      mapper.validate::<DehydratedAuthor>(Some(&Value::Null)),
      Err(MapperError::EmptyOrMissingInput)
    ));
    assert!(matches!(mapper.from_str::<DehydratedAuthor>("  "), Err(MapperError::EmptyOrMissingInput)));
    assert!(matches!(mapper.from_str::<DehydratedAuthor>("{"), Err(MapperError::Json(_))));
  }

  #[test]
  fn non_object_root_fails_at_root() {
    let err = Mapper::new().validate::<DehydratedAuthor>(Some(&json!([1, 2]))).unwrap_err();
    match err {
      MapperError::ShapeMismatch { path, expected, actual } => {
        assert!(path.is_root());
        assert_eq!(expected, "author object");
        assert_eq!(actual, ValueKind::Array);
      },
      other => panic!("unexpected error: {other:?}"),
    }
  }

  #[test]
  fn concept_levels_are_bounded() {
    let raw = json!({
      "display_name": "Computer science",
      "id": "https://openalex.org/C41008148",
      "level": 6,
      "wikidata": "https://www.wikidata.org/wiki/Q21198"
    });
    let err = Mapper::new().validate::<DehydratedConcept>(Some(&raw)).unwrap_err();
    assert_eq!(err.to_string(), "level: expected integer in 0..=5, got number");
  }

  #[test]
  fn inverted_index_positions_must_be_integers() {
    let path = PathNode::Root;
    let err = inverted_index(&json!({ "word": [0, "one"] }), &path.key("abstract_inverted_index"))
      .unwrap_err();
    assert_eq!(
      err.path().map(ToString::to_string).as_deref(),
      Some("abstract_inverted_index.word[1]")
    );
  }

  #[test]
  fn null_array_elements_are_rejected() {
    let raw = json!({
      "affiliations": [],
      "author": { "id": "https://openalex.org/A1", "display_name": "A. Author" },
      "author_position": "first",
      "institutions": [null],
      "raw_author_name": "A. Author",
      "is_corresponding": false
    });
    let err = Mapper::new().validate::<Authorship>(Some(&raw)).unwrap_err();
    assert_eq!(err.to_string(), "institutions[0]: expected institution object, got null");
  }

  #[test]
  fn records_missing_required_fields_do_not_convert() {
    let record = Mapper::new()
      .validate_record(&DEHYDRATED_AUTHOR, Some(&json!({ "id": "https://openalex.org/A1" })), &[
        "display_name",
      ])
      .unwrap();
    let err = record.into_entity::<DehydratedAuthor>().unwrap_err();
    assert_eq!(err.to_string(), "display_name: missing required field");
  }
}
