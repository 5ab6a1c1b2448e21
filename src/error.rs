use std::path::PathBuf;

/// Errors that can occur when constructing or deserializing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be even, got {0}")]
    OddSize(usize),

    #[error("board size must be at least 2, got {0}")]
    SizeTooSmall(usize),

    #[error("serialized board has {0} cells, which is not an even-sized square")]
    NotSquare(usize),
}

/// Errors that can occur while saving or loading a game.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to read save file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse save file {path}: {source}")]
    FileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
