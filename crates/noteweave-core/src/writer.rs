// render a merged template back into a Markdown document and write it out

use crate::model::ParsedTemplate;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Render a merged template as a full document: frontmatter block first,
/// then the body. An empty frontmatter map produces no block at all, and an
/// empty merge produces an empty document.
pub fn render_document(merged: &ParsedTemplate) -> Result<String> {
    let mut out = String::new();

    if !merged.frontmatter.is_empty() {
        let yaml = serde_yaml::to_string(&merged.frontmatter)
            .context("Failed to serialize frontmatter")?;
        // serde_yaml output already ends with a newline
        out.push_str("---\n");
        out.push_str(&yaml);
        out.push_str("---\n");
    }

    if !merged.body.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&merged.body);
        out.push('\n');
    }

    Ok(out)
}

/// Build the note filename: timestamp prefix, optional name, `.md`.
/// The timestamp is passed in so composition stays free of ambient state.
pub fn note_filename(now: &DateTime<Local>, prefix_format: &str, name: Option<&str>) -> String {
    let prefix = now.format(prefix_format).to_string();
    match name {
        Some(n) if !n.is_empty() => format!("{} {}.md", prefix, n),
        _ => format!("{}.md", prefix),
    }
}

/// Write the composed note, creating the note folder if needed. Never
/// overwrites: an existing file at the target path is an error.
pub fn write_note(note_dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(note_dir)
        .with_context(|| format!("Failed to create note folder: {}", note_dir.display()))?;

    let path = note_dir.join(filename);
    if path.exists() {
        anyhow::bail!("Note already exists: {}", path.display());
    }

    fs::write(&path, content)
        .with_context(|| format!("Failed to write note: {}", path.display()))?;

    Ok(path)
}
