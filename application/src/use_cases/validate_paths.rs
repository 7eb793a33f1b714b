//! Launch path validation
//!
//! Checks the three positional paths before anything else happens.

use launcher_domain::{PathKind, PathRole};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// A launch path that does not exist with the expected kind
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("File not found: {role} '{}' is not an existing {expected}", .path.display())]
pub struct InvalidPathError {
    pub role: PathRole,
    pub path: PathBuf,
    pub expected: PathKind,
}

/// The validated config file, worker executable and input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPaths {
    config: PathBuf,
    executable: PathBuf,
    input_dir: PathBuf,
}

impl LaunchPaths {
    /// Validate the paths in order: config, executable, input.
    ///
    /// Stops at the first path that is missing or has the wrong kind.
    /// A bare executable name is anchored to the working directory, so the
    /// file that was checked is the one that runs instead of a `PATH` lookup.
    pub fn validate(
        config: impl Into<PathBuf>,
        executable: impl Into<PathBuf>,
        input_dir: impl Into<PathBuf>,
    ) -> Result<Self, InvalidPathError> {
        let paths = Self {
            config: config.into(),
            executable: anchor_bare_name(executable.into()),
            input_dir: input_dir.into(),
        };

        for role in PathRole::ALL {
            let path = paths.get(role);
            let expected = role.expected_kind();
            if !expected.is_satisfied_by(path) {
                return Err(InvalidPathError {
                    role,
                    path: path.to_path_buf(),
                    expected,
                });
            }
            debug!("{} path '{}' is a {}", role, path.display(), expected);
        }

        Ok(paths)
    }

    pub fn get(&self, role: PathRole) -> &Path {
        match role {
            PathRole::Config => &self.config,
            PathRole::Executable => &self.executable,
            PathRole::Input => &self.input_dir,
        }
    }

    pub fn config(&self) -> &Path {
        &self.config
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }
}

/// `client` -> `./client`; paths with a directory part are kept as given
fn anchor_bare_name(path: PathBuf) -> PathBuf {
    let mut components = path.components();
    let bare = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if bare { Path::new(".").join(path) } else { path }
}
