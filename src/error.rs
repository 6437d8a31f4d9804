use std::path::PathBuf;

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimension must be >= 1, got {0}")]
    InvalidDimension(usize),
}

/// Errors that can occur when restoring a board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid snapshot dimension {0}")]
    InvalidDimension(usize),

    #[error("snapshot has {found} {what}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) has an owner but is not enclosed")]
    OwnerWithoutEnclosure { row: usize, col: usize },

    #[error("cell ({row}, {col}) is enclosed but has no owner")]
    EnclosureWithoutOwner { row: usize, col: usize },

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimension(0);
        assert_eq!(err.to_string(), "board dimension must be >= 1, got 0");
    }

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::DimensionMismatch {
            what: "edges",
            expected: 12,
            found: 11,
        };
        assert_eq!(err.to_string(), "snapshot has 11 edges, expected 12");

        let err = SnapshotError::OwnerWithoutEnclosure { row: 1, col: 2 };
        assert_eq!(
            err.to_string(),
            "cell (1, 2) has an owner but is not enclosed"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.dimension must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.dimension must be >= 1"
        );
    }
}
