//! Error types for the Jarlang launcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Could not locate the launcher's project root: {0}")]
    ProjectRoot(String),

    #[error("Image probe failed (docker exited with code {code}): {stderr}")]
    ProbeFailed { code: i32, stderr: String },

    #[error("Image build failed with exit code {0}")]
    BuildFailed(i32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LauncherError {
    /// Process exit code the launcher should terminate with for this error.
    ///
    /// Build and probe failures carry the underlying docker exit code
    /// through unchanged; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::ProbeFailed { code, .. } => *code,
            LauncherError::BuildFailed(code) => *code,
            LauncherError::ProjectRoot(_) | LauncherError::IoError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
