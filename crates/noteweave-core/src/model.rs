use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Frontmatter keys map to arbitrary YAML values (scalar, sequence, mapping, null).
/// BTreeMap keeps iteration deterministic, which keeps merge output and
/// serialization stable across runs.
pub type Frontmatter = BTreeMap<String, serde_yaml::Value>;

/// A template split into its frontmatter mapping and trimmed body.
/// Also the shape of a merge result. Pure value object; no identity
/// beyond structural equality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedTemplate {
    pub frontmatter: Frontmatter,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Folder where new notes are created. Empty means the working directory.
    pub note_location: String,
    /// Folder containing template files.
    pub template_folder: String,
    /// strftime format string for the filename prefix.
    pub prefix_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            note_location: String::new(),
            template_folder: "Templates".to_string(),
            prefix_format: "%Y%m%d%H%M".to_string(),
        }
    }
}

/// A config file may set any subset of fields; unset fields fall through
/// to the previous layer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub note_location: Option<String>,
    pub template_folder: Option<String>,
    pub prefix_format: Option<String>,
}
