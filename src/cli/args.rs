//! CLI argument definitions using clap.
//!
//! The tool takes no subcommand: a run scans the source root and reports
//! every watched callsite.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory to scan for source files (overrides config file, default: macfuseGui)
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
