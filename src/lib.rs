//! Jarlang launcher - boot the containerized Jarlang runtime
//!
//! The launcher decides whether the prebuilt execution image exists,
//! builds it if absent, and then starts either an interactive Jarlang
//! shell or a single-file script run inside the container. The Jarlang
//! interpreter itself is an opaque artifact invoked as `java -jar`.
//!
//! # Example
//!
//! ```no_run
//! use jarlang_launcher::{DockerCli, LaunchConfig, LaunchMode, Launcher};
//!
//! let config = LaunchConfig::resolve().unwrap();
//! let launcher = Launcher::new(config, DockerCli::new());
//! let status = launcher.launch(&LaunchMode::Shell).unwrap();
//! std::process::exit(status.exit_code());
//! ```

pub mod banner;
pub mod cli;
pub mod config;
pub mod docker;
pub mod error;
pub mod launch;

pub use config::LaunchConfig;
pub use docker::{BindMount, ContainerRuntime, DockerCli, RunRequest, SessionStatus};
pub use error::{LauncherError, Result};
pub use launch::{LaunchMode, Launcher};
