use std::error::Error;

use alexandria::{
  entity::{Author, Work},
  error::MapperError,
  prelude::*,
};
use serde_json::{json, Value};
use tracing_test::traced_test;

mod filtering;
mod mapping;
mod selection;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

pub fn work_fixture() -> Value {
  serde_json::from_str(include_str!("fixtures/work.json")).unwrap()
}

pub fn author_fixture() -> Value {
  serde_json::from_str(include_str!("fixtures/author.json")).unwrap()
}

/// Mutable access to a nested value by `/`-separated pointer, panicking if it is missing.
pub fn at<'a>(value: &'a mut Value, pointer: &str) -> &'a mut Value {
  value.pointer_mut(pointer).unwrap_or_else(|| panic!("fixture has no {pointer}"))
}

pub fn error_path(err: &MapperError) -> String { err.path().map(ToString::to_string).unwrap() }
