//! Filter conditions and the `filter=` query fragment.
//!
//! A [`FilterBuilder`] accumulates conditions in the order they are added and serializes them
//! into the API's filter grammar:
//!
//! ```text
//! filter=<condition>(,<condition>)*
//! <condition> = <field>:<op><value>
//!             | <field>:<op><v1>|<op><v2>|...
//! ```
//!
//! Conditions are ANDed; the values of a single list condition are ORed. Values are written with
//! their plain string form and are not escaped here, that is the transport's job.
//!
//! The builder accepts any field name. The facades in [`typed`] narrow field names and value kinds
//! per entity at compile time and delegate everything else to the builder.
//!
//! # Examples
//!
//! ```
//! use alexandria::filter::{FilterBuilder, FilterOperator};
//!
//! let filter = FilterBuilder::new()
//!   .add("author.id", "A5023888391")
//!   .add_with("type", "article", FilterOperator::Not);
//! assert_eq!(filter.to_query_fragment(), "filter=author.id:A5023888391,type:!article");
//!
//! let filter = FilterBuilder::new().add("id", ["A1", "A2"]);
//! assert_eq!(filter.to_query_fragment(), "filter=id:A1|A2");
//! ```

use super::*;

pub mod typed;

pub use typed::*;

/// How a condition compares a field with its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
  /// Equality (no prefix)
  #[default]
  #[serde(rename = "", alias = "=")]
  Equal,
  /// Negation (`!`)
  #[serde(rename = "!")]
  Not,
  /// Greater than (`>`)
  #[serde(rename = ">")]
  GreaterThan,
  /// Less than (`<`)
  #[serde(rename = "<")]
  LessThan,
}

impl FilterOperator {
  /// The prefix written before a value.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Equal => "",
      Self::Not => "!",
      Self::GreaterThan => ">",
      Self::LessThan => "<",
    }
  }
}

impl Display for FilterOperator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A numeric filter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
  /// An integer
  Int(i64),
  /// An unsigned integer beyond `i64::MAX`
  UInt(u64),
  /// A floating-point number
  Float(f64),
}

impl Display for Number {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Int(n) => write!(f, "{n}"),
      Self::UInt(n) => write!(f, "{n}"),
      Self::Float(n) => write!(f, "{n}"),
    }
  }
}

macro_rules! number_from {
  ($variant:ident as $target:ty: $($source:ty),+) => {
    $(
      impl From<$source> for Number {
        fn from(n: $source) -> Self { Self::$variant(<$target>::from(n)) }
      }
    )+
  };
}

number_from!(Int as i64: i64, i32, i16, i8, u32, u16, u8);
number_from!(Float as f64: f64);

impl From<u64> for Number {
  fn from(n: u64) -> Self { i64::try_from(n).map_or(Self::UInt(n), Self::Int) }
}

/// A single filter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
  /// Used verbatim
  Str(String),
  /// Written in its shortest decimal form
  Num(Number),
  /// `true` or `false`
  Bool(bool),
}

impl Display for Scalar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Str(s) => f.write_str(s),
      Self::Num(n) => Display::fmt(n, f),
      Self::Bool(b) => Display::fmt(b, f),
    }
  }
}

/// The value of a condition: one scalar, or a list of scalars of one primitive kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
  /// A single value
  Scalar(Scalar),
  /// Any of these strings
  Strings(Vec<String>),
  /// Any of these numbers
  Numbers(Vec<Number>),
  /// Any of these booleans
  Bools(Vec<bool>),
}

impl FilterValue {
  /// Whether the value is a list.
  pub fn is_list(&self) -> bool { !matches!(self, Self::Scalar(_)) }

  /// Whether the value is a list with no alternatives.
  pub fn is_empty(&self) -> bool {
    match self {
      Self::Scalar(_) => false,
      Self::Strings(values) => values.is_empty(),
      Self::Numbers(values) => values.is_empty(),
      Self::Bools(values) => values.is_empty(),
    }
  }

  /// Each alternative's string form, in order. A scalar yields one item.
  pub fn items(&self) -> Vec<String> {
    match self {
      Self::Scalar(scalar) => vec![scalar.to_string()],
      Self::Strings(values) => values.clone(),
      Self::Numbers(values) => values.iter().map(ToString::to_string).collect(),
      Self::Bools(values) => values.iter().map(ToString::to_string).collect(),
    }
  }
}

impl From<&str> for FilterValue {
  fn from(value: &str) -> Self { Self::Scalar(Scalar::Str(value.to_string())) }
}

impl From<String> for FilterValue {
  fn from(value: String) -> Self { Self::Scalar(Scalar::Str(value)) }
}

impl From<bool> for FilterValue {
  fn from(value: bool) -> Self { Self::Scalar(Scalar::Bool(value)) }
}

impl From<Scalar> for FilterValue {
  fn from(value: Scalar) -> Self { Self::Scalar(value) }
}

macro_rules! filter_value_from_number {
  ($($source:ty),+) => {
    $(
      impl From<$source> for FilterValue {
        fn from(value: $source) -> Self { Self::Scalar(Scalar::Num(value.into())) }
      }

      impl From<Vec<$source>> for FilterValue {
        fn from(values: Vec<$source>) -> Self {
          Self::Numbers(values.into_iter().map(Number::from).collect())
        }
      }

      impl<const N: usize> From<[$source; N]> for FilterValue {
        fn from(values: [$source; N]) -> Self {
          Self::Numbers(values.into_iter().map(Number::from).collect())
        }
      }
    )+
  };
}

filter_value_from_number!(i64, i32, i16, i8, u64, u32, u16, u8, f64, Number);

impl From<Vec<String>> for FilterValue {
  fn from(values: Vec<String>) -> Self { Self::Strings(values) }
}

impl From<Vec<&str>> for FilterValue {
  fn from(values: Vec<&str>) -> Self { Self::Strings(values.into_iter().map(String::from).collect()) }
}

impl<const N: usize> From<[&str; N]> for FilterValue {
  fn from(values: [&str; N]) -> Self { Self::Strings(values.into_iter().map(String::from).collect()) }
}

impl From<&[&str]> for FilterValue {
  fn from(values: &[&str]) -> Self { Self::Strings(values.iter().map(|v| v.to_string()).collect()) }
}

impl From<Vec<bool>> for FilterValue {
  fn from(values: Vec<bool>) -> Self { Self::Bools(values) }
}

impl<const N: usize> From<[bool; N]> for FilterValue {
  fn from(values: [bool; N]) -> Self { Self::Bools(values.to_vec()) }
}

/// One `field:op value` condition.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
  /// API filter name, e.g. `author.id`
  pub field:    String,
  /// Value or list of alternatives
  pub value:    FilterValue,
  /// Comparison, repeated before every alternative of a list
  pub operator: FilterOperator,
}

impl Display for FilterCondition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:", self.field)?;
    for (i, item) in self.value.items().iter().enumerate() {
      if i > 0 {
        f.write_str("|")?;
      }
      write!(f, "{}{item}", self.operator)?;
    }
    Ok(())
  }
}

/// Accumulates filter conditions for one request.
///
/// Adding is by value so calls chain; serializing never changes the builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterBuilder {
  conditions: Vec<FilterCondition>,
}

impl FilterBuilder {
  /// An empty builder.
  pub fn new() -> Self { Self::default() }

  /// Adds an equality condition.
  pub fn add(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
    self.add_with(field, value, FilterOperator::Equal)
  }

  /// Adds a condition with an explicit operator.
  pub fn add_with(
    mut self,
    field: impl Into<String>,
    value: impl Into<FilterValue>,
    operator: FilterOperator,
  ) -> Self {
    self.push(FilterCondition { field: field.into(), value: value.into(), operator });
    self
  }

  /// Appends an already-built condition.
  pub fn push(&mut self, condition: FilterCondition) {
    trace!(field = %condition.field, operator = %condition.operator, "adding filter condition");
    self.conditions.push(condition);
  }

  /// Conditions in the order they were added.
  pub fn conditions(&self) -> &[FilterCondition] { &self.conditions }

  /// Whether no condition has been added.
  pub fn is_empty(&self) -> bool { self.conditions.is_empty() }

  /// The `filter=` fragment, or the empty string if there are no conditions.
  ///
  /// Conditions whose value is an empty list are left out.
  pub fn to_query_fragment(&self) -> String {
    let conditions: Vec<String> = self
      .conditions
      .iter()
      .filter(|condition| !condition.value.is_empty())
      .map(ToString::to_string)
      .collect();
    if conditions.is_empty() {
      return String::new();
    }
    format!("filter={}", conditions.join(","))
  }
}

impl Display for FilterBuilder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_query_fragment()) }
}

impl Extend<FilterCondition> for FilterBuilder {
  fn extend<I: IntoIterator<Item = FilterCondition>>(&mut self, iter: I) {
    for condition in iter {
      self.push(condition);
    }
  }
}
