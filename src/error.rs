use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum ListerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot read directory '{path}': {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ListerError {
    /// Map an IO error on `path` to the most specific variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ListerError::PathNotFound(path),
            std::io::ErrorKind::PermissionDenied => ListerError::PermissionDenied(path),
            _ => ListerError::Io { path, source },
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Clipboard sink errors. None of these leave a partial payload behind.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool available (tried {tried})")]
    NoBackend { tried: String },

    #[error("Failed to start '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to send data to '{tool}': {source}")]
    Write {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{tool}' rejected the clipboard data ({status})")]
    Failed { tool: String, status: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ListerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("unknown clipboard backend".into());
        assert!(err.to_string().contains("clipboard backend"));
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let lister_err: ListerError = config_err.into();
        assert!(matches!(lister_err, ListerError::Config(_)));

        let clip_err = ClipboardError::NoBackend {
            tried: "xclip".into(),
        };
        let lister_err: ListerError = clip_err.into();
        assert!(matches!(lister_err, ListerError::Clipboard(_)));
    }

    #[test]
    fn from_io_picks_specific_variant() {
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(
            ListerError::from_io("/x", not_found),
            ListerError::PathNotFound(_)
        ));

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            ListerError::from_io("/x", denied),
            ListerError::PermissionDenied(_)
        ));

        let other = std::io::Error::other("boom");
        assert!(matches!(
            ListerError::from_io("/x", other),
            ListerError::Io { .. }
        ));
    }
}
