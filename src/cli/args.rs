//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jarlang")]
#[command(author, version, about = "Launch the Jarlang shell or run a script in its Docker runtime", long_about = None)]
pub struct Args {
    /// Jarlang script to run (e.g. quest.vase); omit to enter the interactive shell
    #[arg(value_name = "FILE")]
    pub script: Option<PathBuf>,
}
