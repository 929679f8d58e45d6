//! Module for the "select" command.

use super::*;

/// Options for [`Commands::Select`].
#[derive(Args, Clone)]
pub struct SelectOptions {
  /// Root entity to request
  #[arg(value_enum)]
  pub entity: RootKind,

  /// Fields to leave out (comma separated or repeated)
  #[arg(long, short, value_delimiter = ',')]
  pub exclude: Vec<String>,

  /// List every selectable field instead of printing a fragment
  #[arg(long, conflicts_with = "exclude")]
  pub list: bool,
}

/// Function for the [`Commands::Select`] in the CLI.
pub fn select(options: SelectOptions) -> Result<()> {
  let SelectOptions { entity, exclude, list } = options;
  let kind = EntityKind::from(entity);

  if list {
    let fields = match entity {
      RootKind::Works => selectable_fields::<WorkField>(),
      RootKind::Authors => selectable_fields::<AuthorField>(),
    };
    for field in fields {
      println!("{field}");
    }
    return Ok(());
  }

  let fragment = match entity {
    RootKind::Works => parse_exclusions::<WorkField>(kind, &exclude)?.select_query(),
    RootKind::Authors => parse_exclusions::<AuthorField>(kind, &exclude)?.select_query(),
  };
  println!("{fragment}");
  Ok(())
}
