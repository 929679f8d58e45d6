//! TOML query profiles.
//!
//! A profile describes one request against a root entity once: which fields to leave out and
//! which filter conditions to apply. It yields both query fragments and validates the response
//! with the same exclusions it selected with.
//!
//! ```toml
//! entity  = "works"
//! name    = "recent open access"
//! exclude = ["abstract_inverted_index", "concepts"]
//!
//! [[filter]]
//! field    = "publication_year"
//! operator = ">"
//! value    = 2020
//!
//! [[filter]]
//! field = "is_oa"
//! value = true
//! ```
//!
//! `exclude` entries are checked against the entity's selectable fields when the profile is
//! loaded. Filter field names are passed through unchecked, as with
//! [`FilterBuilder`].
//!
//! # Examples
//!
//! ```
//! use alexandria::profile::QueryProfile;
//!
//! let profile = QueryProfile::from_toml_str(
//!   r#"
//!     entity = "authors"
//!     exclude = ["counts_by_year", "affiliations"]
//!
//!     [[filter]]
//!     field = "last_known_institutions.country_code"
//!     value = ["US", "CA"]
//!   "#,
//! )?;
//!
//! assert_eq!(
//!   profile.filter_query()?,
//!   "filter=last_known_institutions.country_code:US|CA"
//! );
//! assert!(profile.select_query().starts_with("select=id,orcid,display_name,"));
//! # Ok::<(), alexandria::error::ProfileError>(())
//! ```

use crate::filter::{FilterBuilder, FilterCondition, FilterOperator, FilterValue, Number, Scalar};

use super::*;

/// A request description for one root entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity")]
pub enum QueryProfile {
  /// A `/works` request
  #[serde(rename = "works")]
  Works(ProfileBody<WorkField>),
  /// An `/authors` request
  #[serde(rename = "authors")]
  Authors(ProfileBody<AuthorField>),
}

/// The entity-specific part of a [`QueryProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "F: Selectable"))]
pub struct ProfileBody<F: Ord> {
  /// Human-readable name
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name:    Option<String>,
  /// Fields to leave out of the response
  #[serde(default)]
  pub exclude: Exclusions<F>,
  /// Filter conditions, in order
  #[serde(default, rename = "filter")]
  pub filters: Vec<ProfileFilter>,
}

/// One `[[filter]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFilter {
  /// API filter name
  pub field:    String,
  /// Comparison; equality when omitted
  #[serde(default)]
  pub operator: FilterOperator,
  /// A string, number or boolean, or an array of one of those
  pub value:    toml::Value,
}

impl ProfileFilter {
  /// Converts this table into a filter condition.
  pub fn to_condition(&self) -> Result<FilterCondition, ProfileError> {
    Ok(FilterCondition {
      field:    self.field.clone(),
      value:    self.filter_value()?,
      operator: self.operator,
    })
  }

  fn filter_value(&self) -> Result<FilterValue, ProfileError> {
    let unsupported = |reason: &str| ProfileError::UnsupportedValue {
      field:  self.field.clone(),
      reason: reason.to_string(),
    };

    match &self.value {
      toml::Value::Array(items) => {
        let Some(first) = items.first() else {
          return Err(unsupported("empty list"));
        };
        let scalars = items
          .iter()
          .map(|item| scalar(item).ok_or_else(|| unsupported(kind_reason(item))))
          .collect::<Result<Vec<_>, _>>()?;

        let value = match first {
          toml::Value::String(_) => scalars
            .into_iter()
            .map(|s| if let Scalar::Str(s) = s { Some(s) } else { None })
            .collect::<Option<Vec<_>>>()
            .map(FilterValue::Strings),
          toml::Value::Boolean(_) => scalars
            .into_iter()
            .map(|s| if let Scalar::Bool(b) = s { Some(b) } else { None })
            .collect::<Option<Vec<_>>>()
            .map(FilterValue::Bools),
          _ => scalars
            .into_iter()
            .map(|s| if let Scalar::Num(n) = s { Some(n) } else { None })
            .collect::<Option<Vec<_>>>()
            .map(FilterValue::Numbers),
        };
        value.ok_or_else(|| unsupported("list mixes value kinds"))
      },
      value => scalar(value).map(FilterValue::Scalar).ok_or_else(|| unsupported(kind_reason(value))),
    }
  }
}

fn scalar(value: &toml::Value) -> Option<Scalar> {
  match value {
    toml::Value::String(s) => Some(Scalar::Str(s.clone())),
    toml::Value::Integer(n) => Some(Scalar::Num(Number::Int(*n))),
    toml::Value::Float(n) => Some(Scalar::Num(Number::Float(*n))),
    toml::Value::Boolean(b) => Some(Scalar::Bool(*b)),
    toml::Value::Datetime(_) | toml::Value::Array(_) | toml::Value::Table(_) => None,
  }
}

fn kind_reason(value: &toml::Value) -> &'static str {
  match value {
    toml::Value::Datetime(_) => "datetimes are not supported, quote the date instead",
    toml::Value::Array(_) => "nested lists are not supported",
    toml::Value::Table(_) => "tables are not supported",
    _ => "unsupported value",
  }
}

impl<F: Selectable> ProfileBody<F> {
  fn filter_builder(&self) -> Result<FilterBuilder, ProfileError> {
    let mut builder = FilterBuilder::new();
    for filter in &self.filters {
      builder.push(filter.to_condition()?);
    }
    Ok(builder)
  }
}

impl QueryProfile {
  /// Parses a profile from TOML text.
  pub fn from_toml_str(text: &str) -> Result<Self, ProfileError> {
    let profile: Self = toml::from_str(text)?;
    debug!(entity = %profile.entity(), filters = profile.filter_count(), "loaded query profile");
    Ok(profile)
  }

  /// Reads and parses a profile file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
    let path = path.as_ref();
    trace!(path = %path.display(), "reading query profile");
    let text = std::fs::read_to_string(path)?;
    Self::from_toml_str(&text)
  }

  /// The root entity this profile queries.
  pub fn entity(&self) -> EntityKind {
    match self {
      Self::Works(_) => EntityKind::Work,
      Self::Authors(_) => EntityKind::Author,
    }
  }

  /// The profile's name, if it has one.
  pub fn name(&self) -> Option<&str> {
    match self {
      Self::Works(body) => body.name.as_deref(),
      Self::Authors(body) => body.name.as_deref(),
    }
  }

  fn filter_count(&self) -> usize {
    match self {
      Self::Works(body) => body.filters.len(),
      Self::Authors(body) => body.filters.len(),
    }
  }

  /// API names of the excluded fields, in canonical order.
  pub fn excluded_fields(&self) -> Vec<&'static str> {
    match self {
      Self::Works(body) => body.exclude.iter().map(Selectable::api_name).collect(),
      Self::Authors(body) => body.exclude.iter().map(Selectable::api_name).collect(),
    }
  }

  /// The `select=` fragment.
  pub fn select_query(&self) -> String {
    match self {
      Self::Works(body) => body.exclude.select_query(),
      Self::Authors(body) => body.exclude.select_query(),
    }
  }

  /// The filter conditions as a builder.
  pub fn filter_builder(&self) -> Result<FilterBuilder, ProfileError> {
    match self {
      Self::Works(body) => body.filter_builder(),
      Self::Authors(body) => body.filter_builder(),
    }
  }

  /// The `filter=` fragment, empty if the profile has no filters.
  pub fn filter_query(&self) -> Result<String, ProfileError> {
    Ok(self.filter_builder()?.to_query_fragment())
  }

  /// Both fragments joined with `&`, skipping an empty filter.
  pub fn to_query_string(&self) -> Result<String, ProfileError> {
    let fragments = [self.select_query(), self.filter_query()?];
    Ok(fragments.into_iter().filter(|fragment| !fragment.is_empty()).collect::<Vec<_>>().join("&"))
  }

  /// Validates a response to this profile's request, treating excluded fields as optional.
  pub fn validate_response(&self, mapper: &Mapper, raw: Option<&Value>) -> Result<Record> {
    match self {
      Self::Works(body) => mapper.validate_excluding::<Work>(raw, &body.exclude),
      Self::Authors(body) => mapper.validate_excluding::<Author>(raw, &body.exclude),
    }
  }
}
