use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_GRID_COLUMNS: usize = 8;
pub const DEFAULT_MAX_RECENT: usize = 24;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub grid_columns: Option<usize>,
    #[serde(default)]
    pub max_recent: Option<usize>,
    #[serde(default)]
    pub nickname: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/mojipad/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("mojipad/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("mojipad\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    /// Picker grid width in cells. Zero in the file is treated as unset.
    pub fn effective_grid_columns(&self) -> usize {
        match self.grid_columns {
            Some(n) if n > 0 => n,
            _ => DEFAULT_GRID_COLUMNS,
        }
    }

    pub fn effective_max_recent(&self) -> usize {
        match self.max_recent {
            Some(n) if n > 0 => n,
            _ => DEFAULT_MAX_RECENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::default();
        assert_eq!(config.effective_grid_columns(), DEFAULT_GRID_COLUMNS);
        assert_eq!(config.effective_max_recent(), DEFAULT_MAX_RECENT);
        assert!(config.nickname.is_none());
    }

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        let config = AppConfig {
            grid_columns: Some(0),
            max_recent: Some(0),
            nickname: None,
        };
        assert_eq!(config.effective_grid_columns(), DEFAULT_GRID_COLUMNS);
        assert_eq!(config.effective_max_recent(), DEFAULT_MAX_RECENT);
    }

    #[test]
    fn test_explicit_values_win() {
        let config: AppConfig = toml::from_str("grid_columns = 10\nmax_recent = 5").unwrap();
        assert_eq!(config.effective_grid_columns(), 10);
        assert_eq!(config.effective_max_recent(), 5);
    }

    #[test]
    fn test_unknown_and_missing_fields_tolerated() {
        let config: AppConfig = toml::from_str("nickname = \"mochi\"").unwrap();
        assert_eq!(config.nickname.as_deref(), Some("mochi"));
        assert_eq!(config.effective_grid_columns(), DEFAULT_GRID_COLUMNS);
    }
}
