//! Docker CLI implementation of the container runtime

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use super::runtime::{ContainerRuntime, RunRequest, SessionStatus};
use crate::error::{LauncherError, Result};

/// Container runtime backed by the `docker` command-line client.
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: OsString,
}

impl DockerCli {
    pub fn new() -> Self {
        Self::with_program("docker")
    }

    /// Use a different client binary. Tests point this at stub programs.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, args: Vec<OsString>) -> Command {
        tracing::debug!(
            "spawning {} {}",
            self.program.to_string_lossy(),
            args.iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        );
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerRuntime for DockerCli {
    fn image_exists(&self, tag: &str) -> Result<bool> {
        let output = self.command(probe_args(tag)).output()?;
        if !output.status.success() {
            return Err(LauncherError::ProbeFailed {
                code: output.status.code().unwrap_or(1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let present = !output.stdout.iter().all(u8::is_ascii_whitespace);
        tracing::debug!("image {} {}", tag, if present { "present" } else { "absent" });
        Ok(present)
    }

    fn build_image(&self, context: &Path, tag: &str) -> Result<()> {
        // Inherited stdio: the user sees docker's own build output and
        // diagnostics directly.
        let status = self.command(build_args(context, tag)).status()?;
        if !status.success() {
            return Err(LauncherError::BuildFailed(status.code().unwrap_or(1)));
        }
        Ok(())
    }

    fn run_session(&self, request: &RunRequest) -> Result<SessionStatus> {
        let status = self.command(run_args(request)).status()?;
        Ok(SessionStatus::from(status))
    }
}

fn probe_args(tag: &str) -> Vec<OsString> {
    vec!["images".into(), "-q".into(), tag.into()]
}

fn build_args(context: &Path, tag: &str) -> Vec<OsString> {
    vec![
        "build".into(),
        "-t".into(),
        tag.into(),
        context.as_os_str().to_os_string(),
    ]
}

fn run_args(request: &RunRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["run".into()];
    if request.interactive {
        args.push("-it".into());
    }
    args.push("-v".into());
    args.push(request.bind.spec());
    args.push("--workdir".into());
    args.push(request.workdir.clone().into());
    args.push(request.image.clone().into());
    args.extend(request.command.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::BindMount;

    fn sample_request() -> RunRequest {
        RunRequest {
            image: "jarlang-runner:latest".to_string(),
            bind: BindMount::new("/opt/jarlang", "/jarlang"),
            workdir: "/jarlang/JarlangRunner".to_string(),
            interactive: true,
            command: vec!["java".into(), "-jar".into(), "jarlang.jar".into()],
        }
    }

    #[test]
    fn test_probe_args() {
        assert_eq!(
            probe_args("jarlang-runner:latest"),
            vec![
                OsString::from("images"),
                OsString::from("-q"),
                OsString::from("jarlang-runner:latest"),
            ]
        );
    }

    #[test]
    fn test_build_args_carry_context_and_tag() {
        let args = build_args(Path::new("/opt/jarlang"), "jarlang-runner:latest");
        assert_eq!(args[0], "build");
        assert_eq!(args[1], "-t");
        assert_eq!(args[2], "jarlang-runner:latest");
        assert_eq!(args[3], "/opt/jarlang");
    }

    #[test]
    fn test_run_args_order() {
        let args = run_args(&sample_request());
        assert_eq!(
            args,
            vec![
                OsString::from("run"),
                OsString::from("-it"),
                OsString::from("-v"),
                OsString::from("/opt/jarlang:/jarlang"),
                OsString::from("--workdir"),
                OsString::from("/jarlang/JarlangRunner"),
                OsString::from("jarlang-runner:latest"),
                OsString::from("java"),
                OsString::from("-jar"),
                OsString::from("jarlang.jar"),
            ]
        );
    }

    #[test]
    fn test_run_args_without_terminal_attachment() {
        let mut request = sample_request();
        request.interactive = false;
        let args = run_args(&request);
        assert!(!args.contains(&OsString::from("-it")));
    }

    #[cfg(unix)]
    mod stub_runtime {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn write_stub(dir: &TempDir, body: &str) -> std::path::PathBuf {
            let path = dir.path().join("docker-stub");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_probe_reports_present_for_nonempty_output() {
            let dir = TempDir::new().unwrap();
            let stub = write_stub(&dir, "echo 4f1b2c3d4e5f");
            let docker = DockerCli::with_program(stub);
            assert!(docker.image_exists("jarlang-runner:latest").unwrap());
        }

        #[test]
        fn test_probe_reports_absent_for_empty_output() {
            let dir = TempDir::new().unwrap();
            let stub = write_stub(&dir, "exit 0");
            let docker = DockerCli::with_program(stub);
            assert!(!docker.image_exists("jarlang-runner:latest").unwrap());
        }

        #[test]
        fn test_probe_failure_is_not_absent() {
            let dir = TempDir::new().unwrap();
            let stub = write_stub(&dir, "echo 'daemon unreachable' >&2; exit 125");
            let docker = DockerCli::with_program(stub);
            match docker.image_exists("jarlang-runner:latest") {
                Err(LauncherError::ProbeFailed { code, stderr }) => {
                    assert_eq!(code, 125);
                    assert_eq!(stderr, "daemon unreachable");
                }
                other => panic!("expected ProbeFailed, got {:?}", other),
            }
        }

        #[test]
        fn test_build_failure_carries_exit_code() {
            let dir = TempDir::new().unwrap();
            let stub = write_stub(&dir, "exit 3");
            let docker = DockerCli::with_program(stub);
            match docker.build_image(Path::new("/opt/jarlang"), "jarlang-runner:latest") {
                Err(LauncherError::BuildFailed(code)) => assert_eq!(code, 3),
                other => panic!("expected BuildFailed, got {:?}", other),
            }
        }

        #[test]
        fn test_run_session_returns_child_status() {
            let dir = TempDir::new().unwrap();
            let stub = write_stub(&dir, "exit 7");
            let docker = DockerCli::with_program(stub);
            let status = docker.run_session(&sample_request()).unwrap();
            assert!(!status.success());
            assert_eq!(status.exit_code(), 7);
        }

        #[test]
        fn test_missing_runtime_binary_is_an_error() {
            let docker = DockerCli::with_program("/nonexistent/docker");
            assert!(matches!(
                docker.image_exists("jarlang-runner:latest"),
                Err(LauncherError::IoError(_))
            ));
        }
    }
}
