//! Runtime trait and typed run-request construction

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::error::Result;

/// A single host-directory-to-container-path bind mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindMount {
    pub host: PathBuf,
    pub container: String,
}

impl BindMount {
    pub fn new(host: impl Into<PathBuf>, container: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            container: container.into(),
        }
    }

    /// The `host:container` argument form docker expects.
    pub fn spec(&self) -> OsString {
        let mut spec = OsString::from(self.host.as_os_str());
        spec.push(":");
        spec.push(&self.container);
        spec
    }
}

/// One container run, expressed as an explicit argument list rather than
/// an interpolated shell string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Tag of the execution image to run
    pub image: String,
    /// Project root mounted into the container
    pub bind: BindMount,
    /// Working directory inside the container
    pub workdir: String,
    /// Attach the host terminal interactively
    pub interactive: bool,
    /// Command executed inside the container, argv-style
    pub command: Vec<OsString>,
}

/// Exit status of a completed session, as observed by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    code: Option<i32>,
}

impl SessionStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Code the launcher should exit with. A session killed by a signal
    /// has no code and maps to 1.
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }
}

impl From<ExitStatus> for SessionStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Host container runtime operations used by the launcher.
///
/// Every call blocks until the underlying child process exits; the
/// launcher never runs two of these concurrently.
pub trait ContainerRuntime {
    /// Report whether an image with the given tag is present.
    ///
    /// A failing query command is an error, never "absent": silently
    /// rebuilding on a transient runtime failure would mask real host
    /// misconfiguration.
    fn image_exists(&self, tag: &str) -> Result<bool>;

    /// Build the image from the build description in `context`, tagging
    /// it with `tag`. A non-zero build exit is fatal.
    fn build_image(&self, context: &Path, tag: &str) -> Result<()>;

    /// Run a terminal-attached session. Returns the session's exit status
    /// once the container exits; `Err` only when the runtime process
    /// itself could not be spawned.
    fn run_session(&self, request: &RunRequest) -> Result<SessionStatus>;
}
