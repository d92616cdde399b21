use std::process::ExitCode;

use callaudit::cli::{Arguments, ExitStatus};
use clap::Parser;
use colored::Colorize;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match callaudit::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
