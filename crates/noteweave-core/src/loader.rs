// discover template files in the template folder and parse them

use crate::model::ParsedTemplate;
use crate::template::parse_template;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A template file with its parsed content and source path.
#[derive(Debug, Clone)]
pub struct Template {
    pub name: String,
    pub parsed: ParsedTemplate,
    pub path: PathBuf,
}

/// Discover all `.md` templates in the template folder, sorted by name so
/// the selection order is stable regardless of directory listing order.
pub fn discover_templates(template_dir: &Path) -> Result<Vec<Template>> {
    if !template_dir.exists() {
        anyhow::bail!(
            "Template folder does not exist: {}",
            template_dir.display()
        );
    }

    let mut templates = Vec::new();

    for entry in fs::read_dir(template_dir)
        .with_context(|| format!("Failed to read template folder: {}", template_dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("md") {
            templates.push(load_template(&path)?);
        }
    }

    templates.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(templates)
}

/// Read and parse a single template file. Parsing itself cannot fail; only
/// the read can.
pub fn load_template(path: &Path) -> Result<Template> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template: {}", path.display()))?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    Ok(Template {
        name,
        parsed: parse_template(&content),
        path: path.to_path_buf(),
    })
}
