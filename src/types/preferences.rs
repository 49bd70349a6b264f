use std::path::PathBuf;

use super::app_state::AppearanceMode;
use super::export::ExportFormat;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub appearance_mode: AppearanceMode,
    pub show_original_image: bool,
    pub selected_export_format: ExportFormat,
    pub last_directory: Option<PathBuf>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            appearance_mode: AppearanceMode::default(),
            show_original_image: false,
            selected_export_format: ExportFormat::default(),
            last_directory: None,
        }
    }
}

impl UserPreferences {
    pub fn config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("ColorChanger").join("preferences.json")
        } else {
            PathBuf::from("preferences.json")
        }
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        if let Ok(content) = std::fs::read_to_string(path)
            && let Ok(prefs) = serde_json::from_str(&content)
        {
            return prefs;
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = UserPreferences {
            appearance_mode: AppearanceMode::Dark,
            show_original_image: true,
            selected_export_format: ExportFormat::Jpeg,
            last_directory: Some(PathBuf::from("/tmp/pictures")),
        };

        prefs.save_to(&path).unwrap();
        assert_eq!(UserPreferences::load_from(&path), prefs);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{ "show_original_image": true }"#).unwrap();

        let prefs = UserPreferences::load_from(&path);
        assert!(prefs.show_original_image);
        assert_eq!(prefs.selected_export_format, ExportFormat::Png);
    }

    #[test]
    fn test_unreadable_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(UserPreferences::load_from(&path), UserPreferences::default());
    }
}
