//! Container runtime boundary
//!
//! The launcher talks to the host container runtime through three
//! operations: an image-existence query, an image build, and a
//! terminal-attached container run. `ContainerRuntime` is the seam;
//! `DockerCli` is the production implementation that shells out to
//! `docker`.

mod cli;
mod runtime;

pub use cli::DockerCli;
pub use runtime::{BindMount, ContainerRuntime, RunRequest, SessionStatus};
