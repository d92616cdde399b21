use std::path::{Path, PathBuf};

/// One located invocation of a watched method on the watched receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callsite {
    /// File that owns the call, as produced by file discovery.
    pub file: PathBuf,
    /// Watched method name that was invoked.
    pub method: String,
    /// 1-based line of the receiver/method token.
    pub line: usize,
    /// Full argument list text, from `(` to its matching `)` inclusive.
    pub call_text: String,
    /// Whether `call_text` contains the required marker.
    pub compliant: bool,
}

impl Callsite {
    pub fn file_path(&self) -> &Path {
        &self.file
    }

    /// First line of the call text with surrounding whitespace trimmed.
    ///
    /// Any line terminator counts, including a bare `\r`, form feed and the
    /// Unicode line and paragraph separators.
    pub fn preview(&self) -> &str {
        self.call_text
            .split(is_line_break)
            .next()
            .unwrap_or_default()
            .trim()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
