use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hashira")]
#[command(about = "Recover a Shamir secret from base-encoded shares using exact Lagrange interpolation")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Test case files (JSON, one case per file)
    #[arg(value_name = "FILE", required_unless_present = "samples")]
    pub files: Vec<PathBuf>,

    /// Also solve the built-in sample cases
    #[arg(long)]
    pub samples: bool,

    /// Require every window of k consecutive shares to give the same secret
    #[arg(long)]
    pub cross_validate: bool,

    /// Suppress per-case progress on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,
}
