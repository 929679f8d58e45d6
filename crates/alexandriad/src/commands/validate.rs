//! Module for the "validate" command: checks a saved response against its schema.

use super::*;

/// Options for [`Commands::Validate`].
#[derive(Args, Clone)]
pub struct ValidateOptions {
  /// Entity kind of the response (work, author, institution, source, concept, ...)
  #[arg(value_parser = parse_kind)]
  pub kind: EntityKind,

  /// JSON file holding one response body, or `-` for stdin
  pub file: PathBuf,

  /// Fields the response was requested without (comma separated or repeated)
  #[arg(long, short, value_delimiter = ',')]
  pub exclude: Vec<String>,

  /// Print the validated record as JSON instead of a summary
  #[arg(long)]
  pub json: bool,
}

/// Parses an entity kind name for clap.
fn parse_kind(name: &str) -> std::result::Result<EntityKind, String> {
  EntityKind::from_name(name).ok_or_else(|| {
    let known: Vec<&str> = EntityKind::ALL.iter().map(|kind| kind.name()).collect();
    format!("unknown entity kind '{name}' (expected one of: {})", known.join(", "))
  })
}

/// Function for the [`Commands::Validate`] in the CLI.
pub fn validate(options: ValidateOptions) -> Result<()> {
  let ValidateOptions { kind, file, exclude, json } = options;
  let raw = read_json(&file)?;
  let mapper = Mapper::new();
  debug!(%kind, excluded = exclude.len(), "validating {}", file.display());

  let record = match kind {
    EntityKind::Work => {
      let exclusions = parse_exclusions::<WorkField>(kind, &exclude)?;
      mapper.validate_excluding::<Work>(raw.as_ref(), &exclusions)?
    },
    EntityKind::Author => {
      let exclusions = parse_exclusions::<AuthorField>(kind, &exclude)?;
      mapper.validate_excluding::<Author>(raw.as_ref(), &exclusions)?
    },
    _ if !exclude.is_empty() => return Err(AlexandriaError::NotSelectable(kind)),
    _ => mapper.validate_kind(kind, raw.as_ref())?,
  };

  if json {
    println!("{}", serde_json::to_string_pretty(&record)?);
    return Ok(());
  }

  let id = record.get::<String>("id");
  println!(
    "{}Valid {} {}",
    style(SUCCESS_PREFIX).green(),
    style(kind).cyan(),
    style(id.as_deref().unwrap_or("(no id)")).yellow()
  );

  // Summaries need the typed entity, which only exists if nothing required was excluded.
  match kind {
    EntityKind::Work => match record.clone().into_entity::<Work>() {
      Ok(work) => summarize_work(&work),
      Err(e) => println!("{}Partial record: {e}", style(INFO_PREFIX).cyan()),
    },
    EntityKind::Author => match record.clone().into_entity::<Author>() {
      Ok(author) => summarize_author(&author),
      Err(e) => println!("{}Partial record: {e}", style(INFO_PREFIX).cyan()),
    },
    _ => {},
  }

  println!("\n{} {} fields:", style(INFO_PREFIX).cyan(), record.len());
  print_fields(&record);
  Ok(())
}

/// Prints the headline facts of a work.
fn summarize_work(work: &Work) {
  println!("   {} {}", style("Title:").green().bold(), work.title);
  let authors = work.author_names();
  if !authors.is_empty() {
    println!("   {} {}", style("Authors:").green().bold(), authors.join(", "));
  }
  println!("   {} {}", style("Published:").green().bold(), work.published_at().format("%Y-%m-%d"));
  println!("   {} {}", style("Citations:").green().bold(), work.citation_count);
  println!(
    "   {} {}",
    style("Open access:").green().bold(),
    if work.is_open_access() { "yes" } else { "no" }
  );
  if let Some(url) = work.pdf_url() {
    println!("   {} {}", style("PDF URL:").green().bold(), style(url).blue().underlined());
  }
}

/// Prints the headline facts of an author.
fn summarize_author(author: &Author) {
  println!("   {} {}", style("Name:").green().bold(), author.display_name);
  println!("   {} {}", style("Works:").green().bold(), author.works_count);
  println!("   {} {}", style("Citations:").green().bold(), author.cited_by_count);
  if let Some(h_index) = author.h_index() {
    println!("   {} {}", style("h-index:").green().bold(), h_index);
  }
}
