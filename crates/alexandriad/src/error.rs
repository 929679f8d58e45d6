//! Error types for the alexandria command line tool.

use thiserror::Error;

use alexandria::error::ProfileError;

use super::*;

/// Error type alias used throughout the command line tool.
pub type Result<T> = core::result::Result<T, AlexandriaError>;

/// Errors that can end a command.
#[derive(Error, Debug)]
pub enum AlexandriaError {
  /// The input failed validation.
  #[error(transparent)]
  Mapper(#[from] MapperError),

  /// A query profile could not be loaded or converted.
  #[error(transparent)]
  Profile(#[from] ProfileError),

  /// An input file could not be read.
  #[error("failed to read {}: {source}", path.display())]
  Read {
    /// The file that was being read.
    path:   PathBuf,
    /// The underlying I/O error.
    #[source]
    source: std::io::Error,
  },

  /// Output could not be serialized.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// An `--exclude` name is not a selectable field of the entity.
  #[error("'{field}' is not a selectable {entity} field")]
  UnknownField {
    /// The entity kind the name was given for.
    entity: EntityKind,
    /// The rejected name.
    field:  String,
  },

  /// `--exclude` was given for an entity that cannot be requested with `select=`.
  #[error("{0} records are not served directly and cannot exclude fields")]
  NotSelectable(EntityKind),
}
