//! Launch path roles and the filesystem kind each one must have

use std::fmt;
use std::path::Path;

/// Filesystem kind a launch path must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

impl PathKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathKind::File => "file",
            PathKind::Directory => "directory",
        }
    }

    /// Whether `path` currently exists with this kind.
    ///
    /// Symlinks are followed, so a link to a regular file counts as a file.
    pub fn is_satisfied_by(&self, path: &Path) -> bool {
        match self {
            PathKind::File => path.is_file(),
            PathKind::Directory => path.is_dir(),
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three positional paths a launch is driven by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    /// Shared JSON protocol configuration
    Config,
    /// Worker executable
    Executable,
    /// Directory holding one input subdirectory per worker
    Input,
}

impl PathRole {
    /// Roles in validation order
    pub const ALL: [PathRole; 3] = [PathRole::Config, PathRole::Executable, PathRole::Input];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathRole::Config => "config",
            PathRole::Executable => "bin",
            PathRole::Input => "input",
        }
    }

    pub fn expected_kind(&self) -> PathKind {
        match self {
            PathRole::Config | PathRole::Executable => PathKind::File,
            PathRole::Input => PathKind::Directory,
        }
    }
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
