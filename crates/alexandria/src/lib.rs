//! Validated, strongly typed records and query fragments for the OpenAlex API.
//!
//! `alexandria` sits between an HTTP transport and the rest of an application. It provides:
//!
//! - Declarative schemas for works, authors and the dehydrated entities embedded in them
//! - A single generic mapper that validates decoded JSON against those schemas, renames fields and
//!   computes derived values (abstract text, calendar dates, institution lineage)
//! - A field registry that produces deterministic `select=` fragments from a closed set of
//!   excludable fields
//! - A filter builder producing `filter=` fragments, with typed facades per entity kind
//! - TOML query profiles that describe a request once and yield both fragments
//!
//! The crate never performs I/O on the network. Transports hand it one decoded JSON value at a time
//! and receive either a complete record or a [`MapperError`](error::MapperError) naming the exact
//! path that failed.
//!
//! # Getting Started
//!
//! ```
//! use alexandria::{
//!   entity::Work,
//!   filter::{FilterOperator, WorkFilter, WorkNumberFilter, WorkStringFilter},
//!   prelude::*,
//!   registry::{Exclusions, WorkField},
//! };
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Ask only for what we need
//! let exclusions = Exclusions::from_iter([WorkField::Concepts, WorkField::Locations]);
//! let select = exclusions.select_query();
//! assert!(select.starts_with("select=id,doi,title"));
//!
//! // Narrow the result set
//! let filter = WorkFilter::new()
//!   .string(WorkStringFilter::AuthorId, "A5023888391")
//!   .number_with(WorkNumberFilter::PublicationYear, 2020, FilterOperator::GreaterThan)
//!   .to_query_fragment();
//! assert_eq!(filter, "filter=author.id:A5023888391,publication_year:>2020");
//!
//! // Validate what came back
//! let raw = json!({
//!   "id": "https://openalex.org/W2741809807",
//!   "title": "The state of OA",
//!   "ids": { "openalex": "https://openalex.org/W2741809807" },
//!   "indexed_in": ["crossref"],
//!   "publication_date": "2018-02-13",
//!   "publication_year": 2018,
//!   "cited_by_count": 1024,
//!   "has_fulltext": true,
//!   "abstract_inverted_index": { "Despite": [0], "growing": [1], "interest": [2] }
//! });
//! let work: Work = Mapper::new().validate(Some(&raw))?;
//! assert_eq!(work.abstract_text.as_deref(), Some("Despite growing interest"));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`schema`]: Field-descriptor tables for every entity kind
//! - [`mapper`]: The validate-and-transform routine and the [`Record`](mapper::Record) it produces
//! - [`entity`]: Typed records produced from validated input
//! - [`derive`]: Derived-field algorithms (abstract reconstruction, dates, lineage)
//! - [`registry`]: Selectable fields and `select=` fragments
//! - [`filter`]: Filter conditions, the generic builder and typed facades
//! - [`profile`]: TOML query profiles
//! - [`error`]: Error types
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs)]

use std::{
  collections::BTreeSet,
  fmt::{self, Display},
  marker::PhantomData,
  path::Path,
};

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};
#[cfg(test)]
use {chrono::Datelike, serde_json::json, tracing_test::traced_test};

pub mod derive;
pub mod entity;
pub mod error;
pub mod filter;
pub mod mapper;
pub mod profile;
pub mod registry;
pub mod schema;

use crate::{entity::*, error::*, mapper::*, registry::*, schema::*};

/// Common traits and types for ergonomic imports.
///
/// ```
/// use alexandria::{entity::Author, prelude::*};
///
/// fn load(raw: &serde_json::Value) -> Result<Author, MapperError> { Mapper::new().validate(Some(raw)) }
/// ```
pub mod prelude {
  pub use crate::{
    entity::{Entity, RootEntity},
    error::MapperError,
    filter::{FilterBuilder, FilterCapabilities, FilterField},
    mapper::{Mapper, Record},
    registry::Selectable,
  };
}
