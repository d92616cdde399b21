use std::env;

use anyhow::{Context, Result};

use super::{ExitStatus, args::Arguments, report};
use crate::core::{AuditContext, run_audit};

/// Run one audit from parsed CLI arguments.
///
/// Configuration is looked up from the current directory. Callsite results
/// are printed before the exit status is returned.
///
/// # Returns
/// - `Ok(ExitStatus::Success)` if no callsite is missing the marker
/// - `Ok(ExitStatus::Failure)` if at least one callsite is missing it
/// - `Err` if the config is invalid, the root does not exist, or a file
///   cannot be read
pub fn run(Arguments { root, verbose }: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let ctx = AuditContext::new(&cwd, root, verbose)?;

    let result = run_audit(&ctx)?;
    report::report(&result, &ctx.config);

    Ok(ExitStatus::from(&result))
}
