//! Jarlang launcher CLI - summon the Jarlang shell or run a script

use clap::Parser;
use jarlang_launcher::cli::Args;
use jarlang_launcher::{DockerCli, LaunchConfig, LaunchMode, Launcher, SessionStatus};
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(args: Args) -> jarlang_launcher::Result<SessionStatus> {
    let config = LaunchConfig::resolve()?;
    let mode = match args.script {
        Some(path) => LaunchMode::Script(path),
        None => LaunchMode::Shell,
    };
    Launcher::new(config, DockerCli::new()).launch(&mode)
}
