//! Mode dispatch and the probe/build gate

use std::path::PathBuf;

use super::session::{script_session, shell_session};
use crate::banner;
use crate::config::LaunchConfig;
use crate::docker::{ContainerRuntime, SessionStatus};
use crate::error::Result;

/// The two mutually exclusive run modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    /// Interactive shell inside the execution image
    Shell,
    /// Run a single script file, then exit
    Script(PathBuf),
}

/// Orchestrates one launch: probe, build if absent, banner, dispatch.
#[derive(Debug)]
pub struct Launcher<R: ContainerRuntime> {
    config: LaunchConfig,
    runtime: R,
}

impl<R: ContainerRuntime> Launcher<R> {
    pub fn new(config: LaunchConfig, runtime: R) -> Self {
        Self { config, runtime }
    }

    /// Run the launch sequence to completion and return the session's
    /// exit status. Blocks until the session ends.
    pub fn launch(&self, mode: &LaunchMode) -> Result<SessionStatus> {
        self.ensure_image()?;
        banner::print();

        let request = match mode {
            LaunchMode::Shell => {
                println!("Summoning the Jarlang shell in Docker...");
                shell_session(&self.config)
            }
            LaunchMode::Script(path) => {
                println!("Running {} in Jarlang Docker...", path.display());
                script_session(&self.config, path)
            }
        };
        self.runtime.run_session(&request)
    }

    /// Probe once; build only when the image is absent.
    ///
    /// The image store is not locked: two simultaneous launcher
    /// invocations can both observe a missing image and rebuild the same
    /// tag.
    fn ensure_image(&self) -> Result<()> {
        if self.runtime.image_exists(&self.config.image_tag)? {
            tracing::debug!("execution image {} already present", self.config.image_tag);
            return Ok(());
        }
        println!("Summoning the Docker cauldron for Jarlang...");
        self.runtime
            .build_image(self.config.build_context(), &self.config.image_tag)
    }
}
