//! Fixed launch configuration
//!
//! Everything the launcher needs to know is decided at compile time except
//! the project root, which is resolved once at process start and stays
//! immutable for the process lifetime.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};

/// Tag of the prebuilt execution image, shared by probe and builder.
pub const IMAGE_TAG: &str = "jarlang-runner:latest";

/// Where the project root is bind-mounted inside the container.
pub const CONTAINER_MOUNT: &str = "/jarlang";

/// Subdirectory of the mount holding the interpreter artifact.
pub const RUNNER_DIR: &str = "JarlangRunner";

/// The interpreter jar, invoked as `java -jar`.
pub const JAR_FILE: &str = "jarlang.jar";

/// Immutable launch configuration, constructed once and passed explicitly
/// to each component.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Tag naming the execution image in the host's docker image store
    pub image_tag: String,
    /// Absolute path of the launcher's own location on the host
    pub project_root: PathBuf,
}

impl LaunchConfig {
    /// Resolve the configuration from the running executable's location.
    pub fn resolve() -> Result<Self> {
        let exe = env::current_exe()?;
        let root = exe
            .parent()
            .ok_or_else(|| {
                LauncherError::ProjectRoot(format!("{} has no parent directory", exe.display()))
            })?
            .to_path_buf();
        Ok(Self::with_project_root(root))
    }

    /// Build a configuration rooted at an explicit directory.
    pub fn with_project_root(project_root: impl Into<PathBuf>) -> Self {
        Self {
            image_tag: IMAGE_TAG.to_string(),
            project_root: project_root.into(),
        }
    }

    /// The docker build context: the project root itself, where the
    /// build description lives.
    pub fn build_context(&self) -> &Path {
        &self.project_root
    }

    /// In-container working directory holding the interpreter artifact.
    pub fn runner_workdir(&self) -> String {
        format!("{}/{}", CONTAINER_MOUNT, RUNNER_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_project_root() {
        let config = LaunchConfig::with_project_root("/opt/jarlang");
        assert_eq!(config.image_tag, "jarlang-runner:latest");
        assert_eq!(config.project_root, PathBuf::from("/opt/jarlang"));
    }

    #[test]
    fn test_runner_workdir() {
        let config = LaunchConfig::with_project_root("/opt/jarlang");
        assert_eq!(config.runner_workdir(), "/jarlang/JarlangRunner");
    }

    #[test]
    fn test_resolve_uses_executable_directory() {
        let config = LaunchConfig::resolve().unwrap();
        assert!(config.project_root.is_absolute());
        assert_eq!(config.image_tag, IMAGE_TAG);
    }
}
