//! Module for the "query" command: turns a profile into a query string.

use super::*;

/// Options for [`Commands::Query`].
#[derive(Args, Clone)]
pub struct QueryOptions {
  /// Path to a TOML query profile
  pub profile: PathBuf,

  /// Validate a saved response to this query, honoring the profile's exclusions
  #[arg(long, value_name = "FILE")]
  pub check: Option<PathBuf>,
}

/// Function for the [`Commands::Query`] in the CLI.
pub fn query(options: QueryOptions) -> Result<()> {
  let QueryOptions { profile, check } = options;
  let profile = QueryProfile::from_path(&profile)?;
  debug!(entity = %profile.entity(), name = ?profile.name(), "loaded profile");

  println!("{}", profile.to_query_string()?);

  if let Some(path) = check {
    let raw = read_json(&path)?;
    let record = profile.validate_response(&Mapper::new(), raw.as_ref())?;
    eprintln!(
      "{}{} matches the {} profile ({} fields)",
      style(SUCCESS_PREFIX).green(),
      path.display(),
      style(profile.name().unwrap_or("unnamed")).cyan(),
      record.len()
    );
  }
  Ok(())
}
