pub mod config;
pub mod init;
pub mod interactive;
pub mod loader;
pub mod merge;
pub mod model;
pub mod template;
pub mod writer;

use anyhow::{anyhow, Result};
use chrono::Local;
use loader::Template;
use model::ParsedTemplate;
use owo_colors::OwoColorize;

/// Compose a new note from the selected templates.
///
/// Templates named with `--template` are merged in the order given on the
/// command line. With no explicit selection, an interactive multi-select is
/// offered when running in a terminal; otherwise the selection is empty and
/// the note starts blank.
pub fn cmd_new(name: Option<&str>, template_names: &[String], stdout: bool) -> Result<()> {
    let base_dir = std::env::current_dir()?;
    let settings = config::load_settings(&base_dir)?;

    let template_dir = base_dir.join(&settings.template_folder);
    let available = if template_dir.exists() {
        loader::discover_templates(&template_dir)?
    } else {
        Vec::new()
    };

    let selected = select_templates(&available, template_names)?;

    let parsed: Vec<ParsedTemplate> = selected.iter().map(|t| t.parsed.clone()).collect();
    let merged = merge::merge_templates(&parsed);
    let content = writer::render_document(&merged)?;

    if stdout {
        print!("{}", content);
        return Ok(());
    }

    let filename = writer::note_filename(&Local::now(), &settings.prefix_format, name);
    let note_dir = if settings.note_location.is_empty() {
        base_dir
    } else {
        base_dir.join(&settings.note_location)
    };

    let path = writer::write_note(&note_dir, &filename, &content)?;
    interactive::print_success(&format!("Created {}", path.display()));

    Ok(())
}

/// Resolve the template selection against the discovered set.
fn select_templates<'a>(
    available: &'a [Template],
    template_names: &[String],
) -> Result<Vec<&'a Template>> {
    if !template_names.is_empty() {
        return template_names
            .iter()
            .map(|name| {
                available.iter().find(|t| t.name == *name).ok_or_else(|| {
                    anyhow!(
                        "Unknown template '{}'. Available: {}",
                        name,
                        if available.is_empty() {
                            "(none)".to_string()
                        } else {
                            available
                                .iter()
                                .map(|t| t.name.as_str())
                                .collect::<Vec<_>>()
                                .join(", ")
                        }
                    )
                })
            })
            .collect();
    }

    if interactive::is_interactive() && !available.is_empty() {
        let names: Vec<&str> = available.iter().map(|t| t.name.as_str()).collect();
        let picked = interactive::prompt_templates(&names)?;
        // keep discovery order, not click order
        return Ok(available
            .iter()
            .filter(|t| picked.contains(&t.name))
            .collect());
    }

    Ok(Vec::new())
}

/// List the templates in the template folder.
pub fn cmd_list() -> Result<()> {
    let base_dir = std::env::current_dir()?;
    let settings = config::load_settings(&base_dir)?;
    let template_dir = base_dir.join(&settings.template_folder);

    if !template_dir.exists() {
        interactive::print_warning(&format!(
            "Template folder does not exist: {} (run 'noteweave init' to scaffold one)",
            template_dir.display()
        ));
        return Ok(());
    }

    let templates = loader::discover_templates(&template_dir)?;
    if templates.is_empty() {
        interactive::print_warning(&format!(
            "No templates found in {}",
            template_dir.display()
        ));
        return Ok(());
    }

    interactive::print_info(&format!(
        "{} template(s) in {}",
        templates.len(),
        settings.template_folder
    ));
    for template in &templates {
        interactive::print_item(&describe(template));
    }

    Ok(())
}

fn describe(template: &Template) -> String {
    if let Some(description) = template
        .parsed
        .frontmatter
        .get("description")
        .and_then(|v| v.as_str())
    {
        format!("{} - {}", template.name.bold(), description)
    } else {
        format!("{}", template.name.bold())
    }
}

/// Scaffold noteweave.toml and starter templates in the working directory.
pub fn cmd_init(force: bool) -> Result<()> {
    let base_dir = std::env::current_dir()?;
    let created = init::init_project(&base_dir, force)?;

    interactive::print_success("Initialized noteweave");
    for path in &created {
        let shown = path
            .strip_prefix(&base_dir)
            .unwrap_or(path)
            .display()
            .to_string();
        interactive::print_file("+", &shown);
    }

    Ok(())
}
