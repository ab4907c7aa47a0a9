use serde::{Deserialize, Serialize};

/// What to do when a directory below the root cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubdirErrorPolicy {
    /// Keep the folder line, omit its contents and record a warning.
    #[default]
    Skip,
    /// Fail the whole listing.
    Abort,
}

impl std::str::FromStr for SubdirErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(SubdirErrorPolicy::Skip),
            "abort" => Ok(SubdirErrorPolicy::Abort),
            other => Err(format!("unknown error policy '{}'", other)),
        }
    }
}

/// Configuration options for listing a directory tree.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Emit lines for non-directory entries
    pub include_files: bool,

    /// Follow symbolic links when testing for and descending into directories
    pub follow_symlinks: bool,

    /// Stay on the same filesystem (don't cross mount points)
    pub one_file_system: bool,

    /// Deepest indentation depth still listed (None = unlimited)
    pub max_depth: Option<usize>,

    /// Handling of unreadable subdirectories
    pub on_subdir_error: SubdirErrorPolicy,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            include_files: false,
            follow_symlinks: true,
            one_file_system: false,
            max_depth: None,
            on_subdir_error: SubdirErrorPolicy::Skip,
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(mut self, include: bool) -> Self {
        self.include_files = include;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_one_file_system(mut self, enabled: bool) -> Self {
        self.one_file_system = enabled;
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_error_policy(mut self, policy: SubdirErrorPolicy) -> Self {
        self.on_subdir_error = policy;
        self
    }
}
