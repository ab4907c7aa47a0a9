use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::clipboard::ClipboardBackend;
use crate::error::ConfigError;
use crate::lister::{ListOptions, SubdirErrorPolicy};
use crate::rtf::RenderOptions;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listing: ListingConfig,
    pub rtf: RtfConfig,
    pub clipboard: ClipboardConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// List files as well as folders
    pub include_files: bool,
    /// Follow symbolic links to directories
    pub follow_symlinks: bool,
    /// Don't cross filesystem boundaries
    pub one_file_system: bool,
    /// Deepest indentation level listed (unset = unlimited)
    pub max_depth: Option<usize>,
    /// What to do with unreadable subdirectories: skip, abort
    pub on_subdir_error: SubdirErrorPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RtfConfig {
    /// Escape backslashes and braces in names
    pub escape_control_chars: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Clipboard tool: auto, wl-copy, xclip, pbcopy
    pub backend: ClipboardBackend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Color of folder rows
    pub folder_color: String,
    /// Color of file rows
    pub file_color: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        let defaults = ListOptions::default();
        Self {
            include_files: defaults.include_files,
            follow_symlinks: defaults.follow_symlinks,
            one_file_system: defaults.one_file_system,
            max_depth: defaults.max_depth,
            on_subdir_error: defaults.on_subdir_error,
        }
    }
}

impl Default for RtfConfig {
    fn default() -> Self {
        Self {
            escape_control_chars: RenderOptions::default().escape_control_chars,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            folder_color: "blue".to_string(),
            file_color: "gray".to_string(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/dirlist/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirlist").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("tui.folder_color", &self.tui.folder_color),
            ("tui.file_color", &self.tui.file_color),
        ] {
            if value.parse::<ratatui::style::Color>().is_err() {
                return Err(ConfigError::Invalid(format!(
                    "{} '{}' is not a color",
                    key, value
                )));
            }
        }
        Ok(())
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions::new()
            .with_files(self.listing.include_files)
            .with_follow_symlinks(self.listing.follow_symlinks)
            .with_one_file_system(self.listing.one_file_system)
            .with_max_depth(self.listing.max_depth)
            .with_error_policy(self.listing.on_subdir_error)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new().with_escaping(self.rtf.escape_control_chars)
    }
}
