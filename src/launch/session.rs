//! Session construction for the two run modes

use std::ffi::OsString;
use std::path::Path;

use crate::config::{LaunchConfig, CONTAINER_MOUNT, JAR_FILE};
use crate::docker::{BindMount, RunRequest};

/// Interactive shell session: the interpreter is started with no
/// arguments and enters its own read loop.
pub fn shell_session(config: &LaunchConfig) -> RunRequest {
    RunRequest {
        image: config.image_tag.clone(),
        bind: BindMount::new(config.project_root.clone(), CONTAINER_MOUNT),
        workdir: config.runner_workdir(),
        interactive: true,
        command: interpreter_command(),
    }
}

/// File-run session: identical wiring to the shell session, with the
/// script path handed to the interpreter as a direct execution argument.
///
/// The path is carried byte-for-byte; whether it exists or parses is the
/// interpreter's concern, not the launcher's.
pub fn script_session(config: &LaunchConfig, script: &Path) -> RunRequest {
    let mut request = shell_session(config);
    request.command.push(script.as_os_str().to_os_string());
    request
}

fn interpreter_command() -> Vec<OsString> {
    vec!["java".into(), "-jar".into(), JAR_FILE.into()]
}
