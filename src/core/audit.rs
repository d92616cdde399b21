use std::fs;

use colored::Colorize;

use crate::core::{
    collect::collect_callsites, context::AuditContext, data::Callsite, error::ScanError,
    file_scanner::scan_files,
};

/// Outcome of a complete audit run.
///
/// Callsites are ordered per file in discovery order, then by position
/// within the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditResult {
    pub callsites: Vec<Callsite>,
    /// Number of source files that were read and scanned.
    pub files_checked: usize,
}

impl AuditResult {
    pub fn is_empty(&self) -> bool {
        self.callsites.is_empty()
    }

    /// Callsites that do not forward the required marker.
    pub fn non_compliant(&self) -> impl Iterator<Item = &Callsite> {
        self.callsites.iter().filter(|c| !c.compliant)
    }

    pub fn non_compliant_count(&self) -> usize {
        self.non_compliant().count()
    }

    /// True when no callsite is missing the marker (including no callsites).
    pub fn passed(&self) -> bool {
        self.non_compliant_count() == 0
    }
}

/// Discover, read and scan every source file under the context root.
///
/// Files are processed one at a time in discovery order. Any file that
/// cannot be read stops the run; non-compliant callsites never do.
pub fn run_audit(ctx: &AuditContext) -> Result<AuditResult, ScanError> {
    let files = scan_files(
        &ctx.root,
        &ctx.config.extensions,
        &ctx.config.ignores,
        ctx.verbose,
    )?;

    let mut result = AuditResult::default();
    for path in &files {
        let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
            path: path.clone(),
            source,
        })?;
        result
            .callsites
            .extend(collect_callsites(path, &text, &ctx.locator, &ctx.rule));
        result.files_checked += 1;
    }

    if ctx.verbose {
        eprintln!(
            "{} Scanned {} {} under {}",
            "note:".bold().cyan(),
            result.files_checked,
            if result.files_checked == 1 {
                "file"
            } else {
                "files"
            },
            ctx.root.display()
        );
    }

    Ok(result)
}
