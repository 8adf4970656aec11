use std::fs;
use std::path::Path;

use crate::game::BlastSettings;

/// Loads session settings from a YAML file. A missing file is not an
/// error: the defaults apply, matching a fresh install with no config
/// written yet. A present-but-invalid file is rejected.
pub fn load_settings(path: &str) -> Result<BlastSettings, String> {
    if !Path::new(path).exists() {
        return Ok(BlastSettings::default());
    }

    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read config {}: {}", path, e))?;
    settings_from_yaml(&content)
}

pub fn save_settings(path: &str, settings: &BlastSettings) -> Result<(), String> {
    let content = settings_to_yaml(settings)?;
    fs::write(path, content).map_err(|e| format!("Failed to write config {}: {}", path, e))
}

pub fn settings_from_yaml(content: &str) -> Result<BlastSettings, String> {
    let settings: BlastSettings = serde_yaml_ng::from_str(content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    settings
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(settings)
}

pub fn settings_to_yaml(settings: &BlastSettings) -> Result<String, String> {
    settings
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    serde_yaml_ng::to_string(settings).map_err(|e| format!("Failed to serialize config: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = load_settings("/nonexistent/blast.yaml").unwrap();
        assert_eq!(settings.height, BlastSettings::default().height);
        assert_eq!(settings.score_goal, BlastSettings::default().score_goal);
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_absent_fields() {
        let settings = settings_from_yaml("height: 6\nwidth: 6\n").unwrap();
        assert_eq!(settings.height, 6);
        assert_eq!(settings.width, 6);
        assert_eq!(settings.colors_count, BlastSettings::default().colors_count);
    }

    #[test]
    fn invalid_settings_in_yaml_are_rejected() {
        assert!(settings_from_yaml("height: 0\n").is_err());
        assert!(settings_from_yaml("min_combination_count: 0\n").is_err());
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(settings_from_yaml(": not yaml : [").is_err());
    }

    #[test]
    fn settings_round_trip_through_yaml() {
        let settings = BlastSettings {
            height: 12,
            super_tile_radius: 4,
            ..BlastSettings::default()
        };

        let yaml = settings_to_yaml(&settings).unwrap();
        let restored = settings_from_yaml(&yaml).unwrap();
        assert_eq!(restored.height, 12);
        assert_eq!(restored.super_tile_radius, 4);
        assert_eq!(restored.moves_count, settings.moves_count);
    }
}
