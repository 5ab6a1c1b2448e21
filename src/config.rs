use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::DEFAULT_SIZE;

/// Which opponent plays Light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Mirror,
    Random,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_SIZE,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub kind: OpponentKind,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig {
            kind: OpponentKind::Mirror,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    pub path: PathBuf,
    pub autosave: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        SaveConfig {
            path: PathBuf::from("game_state.json"),
            autosave: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub opponent: OpponentConfig,
    pub save: SaveConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.board_size < 2 {
            return Err(ConfigError::Validation(
                "game.board_size must be at least 2".into(),
            ));
        }
        if self.game.board_size % 2 != 0 {
            return Err(ConfigError::Validation(
                "game.board_size must be even".into(),
            ));
        }
        if self.save.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("save.path must not be empty".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.board_size, 8);
        assert_eq!(config.opponent.kind, OpponentKind::Mirror);
        assert!(config.save.autosave);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[opponent]
kind = "random"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.opponent.kind, OpponentKind::Random);
        assert_eq!(config.game.board_size, 8);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.game.board_size, 8);
        assert_eq!(config.save.path, PathBuf::from("game_state.json"));
    }

    #[test]
    fn test_validation_rejects_odd_board_size() {
        let mut config = AppConfig::default();
        config.game.board_size = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_tiny_board_size() {
        let mut config = AppConfig::default();
        config.game.board_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.board_size, 8);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
board_size = 6
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.board_size, 6);
        assert_eq!(config.opponent.kind, OpponentKind::Mirror);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[game]\nboard_size = 7\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }
}
