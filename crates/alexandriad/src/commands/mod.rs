use super::*;

pub mod query;
pub mod select;
pub mod validate;

pub use query::{query, QueryOptions};
pub use select::{select, SelectOptions};
pub use validate::{validate, ValidateOptions};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Validate a saved API response against its schema
  Validate(ValidateOptions),

  /// Print the select= fragment for a root entity
  Select(SelectOptions),

  /// Print the query string described by a profile
  Query(QueryOptions),
}

/// Root entities, as named by the API's endpoints.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RootKind {
  /// `/works`
  Works,
  /// `/authors`
  Authors,
}

impl From<RootKind> for EntityKind {
  fn from(kind: RootKind) -> Self {
    match kind {
      RootKind::Works => EntityKind::Work,
      RootKind::Authors => EntityKind::Author,
    }
  }
}

/// Parses `--exclude` names into an exclusion set for `F`.
fn parse_exclusions<F: Selectable>(entity: EntityKind, names: &[String]) -> Result<Exclusions<F>> {
  names
    .iter()
    .map(|name| {
      F::from_api_name(name)
        .ok_or_else(|| AlexandriaError::UnknownField { entity, field: name.clone() })
    })
    .collect()
}

/// Reads a JSON document from `path`, or from stdin when `path` is `-`.
///
/// An empty document yields `None` so the mapper can report it as missing input.
fn read_json(path: &Path) -> Result<Option<Value>> {
  let read_error = |source| AlexandriaError::Read { path: path.to_path_buf(), source };
  let text = if path == Path::new("-") {
    std::io::read_to_string(std::io::stdin()).map_err(read_error)?
  } else {
    std::fs::read_to_string(path).map_err(read_error)?
  };
  trace!(path = %path.display(), bytes = text.len(), "read input");

  if text.trim().is_empty() {
    return Ok(None);
  }
  serde_json::from_str(&text).map(Some).map_err(|e| MapperError::Json(e).into())
}

/// Prints the fields of a record as a tree.
fn print_fields(record: &Record) {
  let keys: Vec<&str> = record.keys().collect();
  for (i, key) in keys.iter().enumerate() {
    let branch = if i + 1 == keys.len() { TREE_LEAF } else { TREE_BRANCH };
    println!("   {} {}", style(branch).dim(), key);
  }
}
