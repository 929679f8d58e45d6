//! Integration tests for the alexandria CLI commands.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

// Helper function to create a clean command instance
fn alexandria() -> Command { Command::cargo_bin("alexandria").unwrap() }

// Helper to locate files shared with the library's tests and the example profiles
fn workspace_file(relative: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").join(relative)
}

fn work_fixture() -> PathBuf { workspace_file("crates/alexandria/tests/fixtures/work.json") }

fn author_fixture() -> PathBuf { workspace_file("crates/alexandria/tests/fixtures/author.json") }

#[test]
fn test_validate_work() {
  alexandria()
    .arg("validate")
    .arg("work")
    .arg(work_fixture())
    .assert()
    .success()
    .stdout(predicate::str::contains("Valid work https://openalex.org/W2741809807"))
    .stdout(predicate::str::contains("Heather Piwowar, Jason Priem, Stefanie Haustein"))
    .stdout(predicate::str::contains("2018-02-13"))
    .stdout(predicate::str::contains("citationCount"));
}

#[test]
fn test_validate_author_as_json() -> anyhow::Result<()> {
  let output = alexandria().arg("validate").arg("authors").arg(author_fixture()).arg("--json").output()?;
  assert!(output.status.success());

  let record: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(record["displayName"], "Jason Priem");
  assert_eq!(record["summaryStats"]["hIndex"], 15);
  assert!(record.get("display_name").is_none());
  Ok(())
}

#[test]
fn test_validate_reports_the_failing_path() -> anyhow::Result<()> {
  let dir = tempdir()?;
  let path = dir.path().join("broken.json");
  let mut raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(work_fixture())?)?;
  raw["authorships"][1]["author"]["id"] = serde_json::json!("");
  std::fs::write(&path, serde_json::to_vec(&raw)?)?;

  alexandria()
    .arg("validate")
    .arg("work")
    .arg(&path)
    .assert()
    .failure()
    .stderr(predicate::str::contains("authorships[1].author.id"));
  Ok(())
}

#[test]
fn test_validate_with_exclusions() -> anyhow::Result<()> {
  let dir = tempdir()?;
  let path = dir.path().join("trimmed.json");
  let mut raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(work_fixture())?)?;
  raw.as_object_mut().unwrap().remove("title");
  std::fs::write(&path, serde_json::to_vec(&raw)?)?;

  alexandria().arg("validate").arg("work").arg(&path).assert().failure();

  alexandria()
    .args(["validate", "work"])
    .arg(&path)
    .args(["--exclude", "title,concepts"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Partial record: title: missing required field"));
  Ok(())
}

#[test]
fn test_validate_rejects_bad_input() {
  alexandria()
    .arg("validate")
    .arg("work")
    .arg("-")
    .write_stdin("")
    .assert()
    .failure()
    .stderr(predicate::str::contains("no input to validate"));

  alexandria()
    .arg("validate")
    .arg("institution")
    .arg(work_fixture())
    .args(["--exclude", "ror"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot exclude fields"));

  alexandria()
    .arg("validate")
    .arg("funder")
    .arg(work_fixture())
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown entity kind"));
}

#[test]
fn test_select_fragment() {
  alexandria()
    .args(["select", "authors", "--exclude", "counts_by_year", "-e", "affiliations"])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("select=id,orcid,display_name,display_name_alternatives,ids,last_known_institutions"));

  alexandria()
    .args(["select", "works", "--exclude", "id"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("'id' is not a selectable work field"));
}

#[test]
fn test_select_list() {
  alexandria()
    .args(["select", "works", "--list"])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("id\ndoi\ntitle\n"))
    .stdout(predicate::str::contains("abstract_inverted_index"));
}

#[test]
fn test_query_from_profile() {
  alexandria()
    .arg("query")
    .arg(workspace_file("config/profiles/prolific_authors.toml"))
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "&filter=last_known_institutions.country_code:US|CA,summary_stats.h_index:>20,has_orcid:true",
    ));
}

#[test]
fn test_query_checks_a_response() {
  alexandria()
    .arg("query")
    .arg(workspace_file("config/profiles/recent_open_access.toml"))
    .arg("--check")
    .arg(work_fixture())
    .assert()
    .success()
    .stdout(predicate::str::contains("filter=from_publication_date:2020-01-01"))
    .stderr(predicate::str::contains("recent open access"));
}
