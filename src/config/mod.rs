//! Game-mode switches and paths, read once at startup from `cozy_acres.ron`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "cozy_acres.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rain every day.
    #[serde(default)]
    pub rain_mode: bool,
    /// Growing plants block movement as soon as they sprout.
    #[serde(default)]
    pub rigid_plants: bool,
    #[serde(default)]
    pub super_speed: bool,
    /// Start a new game with a random stack of every item.
    #[serde(default)]
    pub start_items: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default = "default_master_volume")]
    pub master_volume: f32,
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
    /// Optional RON map; the built-in farm is used when absent.
    #[serde(default)]
    pub map_path: Option<PathBuf>,
}

fn default_master_volume() -> f32 {
    0.5
}
fn default_save_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rain_mode: false,
            rigid_plants: false,
            super_speed: false,
            start_items: false,
            analytics: false,
            master_volume: default_master_volume(),
            save_dir: default_save_dir(),
            map_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content, path)
    }

    pub fn from_ron_str(content: &str, source_path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(content).map_err(|source| ConfigError::Parse {
            path: source_path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(ConfigError::Invalid(format!(
                "master_volume must be within 0..=1, got {}",
                self.master_volume
            )));
        }
        if self.save_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("save_dir must not be empty".into()));
        }
        Ok(())
    }

    /// Read `path` if it exists. A missing file is silent; a broken one is
    /// logged. Either way the game starts with usable settings.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("[Config] {} not found, using defaults", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                info!("[Config] Loaded {}", path.display());
                config
            }
            Err(e) => {
                warn!("[Config] {}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn player_speed(&self) -> f32 {
        if self.super_speed {
            crate::shared::PLAYER_SUPER_SPEED
        } else {
            crate::shared::PLAYER_SPEED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_struct_gives_defaults() {
        let config = GameConfig::from_ron_str("()", Path::new("test.ron")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = GameConfig::from_ron_str(
            "(rain_mode: true, super_speed: true, map_path: Some(\"farm.ron\"))",
            Path::new("test.ron"),
        )
        .unwrap();
        assert!(config.rain_mode);
        assert!(!config.rigid_plants);
        assert_eq!(config.player_speed(), crate::shared::PLAYER_SUPER_SPEED);
        assert_eq!(config.map_path, Some(PathBuf::from("farm.ron")));
    }

    #[test]
    fn volume_out_of_range_is_rejected() {
        let err = GameConfig::from_ron_str("(master_volume: 1.5)", Path::new("test.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "(rain_mode: ").unwrap();
        let err = GameConfig::from_file(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "(master_volume: 7.0)").unwrap();
        assert_eq!(GameConfig::load_or_default(tmp.path()), GameConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default(Path::new("/nonexistent/cozy_acres.ron"));
        assert_eq!(config, GameConfig::default());
    }
}
