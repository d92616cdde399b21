//! Report formatting and printing utilities.
//!
//! One status line per callsite goes to stdout, followed by a blank line and
//! a summary. A passing summary is printed to stdout, a failing one to stderr.
//! Separate from core logic to allow callaudit to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::config::Config;
use crate::core::{AuditResult, Callsite};

/// Print the audit report to stdout and stderr.
pub fn report(result: &AuditResult, config: &Config) {
    report_to(
        result,
        config,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print the audit report to custom writers.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write, E: Write>(
    result: &AuditResult,
    config: &Config,
    out: &mut W,
    err: &mut E,
) {
    if result.is_empty() {
        let _ = writeln!(out, "No {} callsites found.", config.receiver);
        return;
    }

    let label = config.marker_label();
    for callsite in &result.callsites {
        print_callsite(callsite, label, out);
    }

    let missing = result.non_compliant_count();
    if missing > 0 {
        let _ = writeln!(
            err,
            "\n{} {} callsite(s) missing explicit {} forwarding.",
            "FAIL:".bold().red(),
            missing,
            label
        );
    } else {
        let _ = writeln!(
            out,
            "\n{} {} callsite(s) include explicit {}.",
            "PASS:".bold().green(),
            result.callsites.len(),
            label
        );
    }
}

fn print_callsite<W: Write>(callsite: &Callsite, label: &str, writer: &mut W) {
    let status = if callsite.compliant {
        "OK".green()
    } else {
        format!("MISSING {}", label).as_str().red()
    };

    let _ = writeln!(
        writer,
        "{}: {}:{} {} {}",
        status,
        callsite.file_path().display(),
        callsite.line,
        callsite.method,
        callsite.preview()
    );
}
