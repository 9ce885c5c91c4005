use crate::model::{PartialSettings, Settings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const PROJECT_CONFIG: &str = "noteweave.toml";

/// Load settings with precedence:
/// 1. Built-in defaults - lowest priority
/// 2. User config (~/.noteweave/config.toml)
/// 3. Project config (noteweave.toml in the working directory) - highest
///
/// Each layer is a partial file; set fields override, unset fields fall
/// through. Both files are optional.
pub fn load_settings(base_dir: &Path) -> Result<Settings> {
    let mut settings = Settings::default();

    if let Some(home_dir) = dirs::home_dir() {
        let user_config = home_dir.join(".noteweave/config.toml");
        if user_config.exists() {
            match load_partial(&user_config) {
                Ok(partial) => apply(&mut settings, partial),
                Err(e) => eprintln!("Warning: Failed to load user config: {}", e),
            }
        }
    }

    let project_config = base_dir.join(PROJECT_CONFIG);
    if project_config.exists() {
        apply(&mut settings, load_partial(&project_config)?);
    }

    Ok(settings)
}

fn load_partial(path: &Path) -> Result<PartialSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let partial: PartialSettings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(partial)
}

fn apply(settings: &mut Settings, partial: PartialSettings) {
    if let Some(note_location) = partial.note_location {
        settings.note_location = note_location;
    }
    if let Some(template_folder) = partial.template_folder {
        settings.template_folder = template_folder;
    }
    if let Some(prefix_format) = partial.prefix_format {
        settings.prefix_format = prefix_format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    // Tests calling load_settings point HOME at an empty temp dir so a
    // developer's real user config cannot leak in.
    fn isolated_home() -> TempDir {
        let home = TempDir::new().unwrap();
        std::env::set_var("HOME", home.path());
        home
    }

    #[test]
    #[serial]
    fn test_defaults_when_no_config_present() {
        let _home = isolated_home();
        let temp = TempDir::new().unwrap();
        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings.template_folder, "Templates");
        assert_eq!(settings.prefix_format, "%Y%m%d%H%M");
        assert_eq!(settings.note_location, "");
    }

    #[test]
    #[serial]
    fn test_project_config_overrides_defaults_field_by_field() {
        let _home = isolated_home();
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(PROJECT_CONFIG),
            "template_folder = \"My Templates\"\n",
        )
        .unwrap();

        let settings = load_settings(temp.path()).unwrap();
        assert_eq!(settings.template_folder, "My Templates");
        // untouched fields keep their defaults
        assert_eq!(settings.prefix_format, "%Y%m%d%H%M");
    }

    #[test]
    #[serial]
    fn test_invalid_project_config_is_an_error() {
        let _home = isolated_home();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG), "not_a_field = 1\n").unwrap();

        assert!(load_settings(temp.path()).is_err());
    }

    #[test]
    fn test_apply_skips_unset_fields() {
        let mut settings = Settings::default();
        apply(
            &mut settings,
            PartialSettings {
                note_location: Some("Notes/Inbox".to_string()),
                template_folder: None,
                prefix_format: None,
            },
        );
        assert_eq!(settings.note_location, "Notes/Inbox");
        assert_eq!(settings.template_folder, "Templates");
    }
}
