//! Call-site collection for a single source file.
//!
//! The locator finds `<receiver>.<method>(` occurrences, the extractor cuts out
//! each argument list, and the compliance rule decides whether the required
//! marker was forwarded. The result is one `Callsite` per occurrence, in
//! order of appearance.

pub mod locator;

use std::path::Path;

pub use locator::{CallLocator, CallMatch, CallMatches, line_number};

use crate::core::data::Callsite;
use crate::core::extract::extract_call_text;
use crate::rules::RequiredMarker;

/// Collect every watched callsite in `text`.
///
/// `path` is only recorded on the resulting callsites; nothing is read here.
pub fn collect_callsites(
    path: &Path,
    text: &str,
    locator: &CallLocator,
    rule: &RequiredMarker,
) -> Vec<Callsite> {
    locator
        .find_calls(text)
        .map(|found| {
            let call_text = extract_call_text(text, found.open_paren);
            Callsite {
                file: path.to_path_buf(),
                method: found.method.to_string(),
                line: line_number(text, found.start),
                call_text: call_text.to_string(),
                compliant: rule.is_compliant(call_text),
            }
        })
        .collect()
}
