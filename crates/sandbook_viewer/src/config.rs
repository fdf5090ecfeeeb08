use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persisted viewer settings.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub theme: Option<String>,
    pub last_tutorial: Option<PathBuf>,
    pub window_width: Option<f64>,
    pub window_height: Option<f64>,
}

impl ViewerConfig {
    /// Returns the user config file path, if a config directory is available.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sandbook").join("config.toml"))
    }

    /// Loads config from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&contents).unwrap_or_default()
    }

    /// Writes config to disk, ignoring filesystem/serialization errors.
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(s) = toml::to_string_pretty(self) {
            let _ = std::fs::write(&path, s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_files_parse() {
        let config: ViewerConfig = toml::from_str("theme = \"dracula\"").unwrap();
        assert_eq!(config.theme.as_deref(), Some("dracula"));
        assert_eq!(config.last_tutorial, None);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config: ViewerConfig =
            toml::from_str("window_width = 900.0\nfuture_option = true").unwrap();
        assert_eq!(config.window_width, Some(900.0));
    }
}
