// scaffold config + starter templates

use crate::config::PROJECT_CONFIG;
use crate::model::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TEMPLATE: &str = r#"# noteweave configuration
# All fields are optional; unset fields use the built-in defaults.

# Folder where new notes are created. Empty means the working directory.
note_location = ""

# Folder containing template files.
template_folder = "Templates"

# strftime format string for the filename prefix.
prefix_format = "%Y%m%d%H%M"
"#;

const MEETING_TEMPLATE: &str = r#"---
tags:
  - meeting
status: draft
---
## Agenda

-

## Notes

-
"#;

const JOURNAL_TEMPLATE: &str = r#"---
tags:
  - journal
mood:
---
## Today

"#;

/// Create `noteweave.toml` and a template folder with two starter
/// templates. Returns the created paths. Refuses to run twice unless
/// `force` is set; `force` never deletes existing templates, it only
/// rewrites the scaffolded files.
pub fn init_project(base_dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let config_path = base_dir.join(PROJECT_CONFIG);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists.\n\nUse --force to overwrite the scaffolded files.",
            PROJECT_CONFIG
        );
    }

    let mut created = Vec::new();

    fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    created.push(config_path);

    let template_dir = base_dir.join(&Settings::default().template_folder);
    fs::create_dir_all(&template_dir).with_context(|| {
        format!("Failed to create template folder: {}", template_dir.display())
    })?;

    for (filename, content) in [
        ("meeting.md", MEETING_TEMPLATE),
        ("journal.md", JOURNAL_TEMPLATE),
    ] {
        let path = template_dir.join(filename);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write template: {}", path.display()))?;
        created.push(path);
    }

    Ok(created)
}
