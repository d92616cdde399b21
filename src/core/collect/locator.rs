use regex::{CaptureMatches, Regex};

use anyhow::{Context, Result};

/// A `<receiver>.<method>(` occurrence found in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallMatch<'t> {
    /// The watched method name that matched.
    pub method: &'t str,
    /// Byte offset of the receiver token, where the match begins.
    pub start: usize,
    /// Byte offset of the opening parenthesis of the argument list.
    pub open_paren: usize,
}

/// Locates calls to a fixed set of methods on a fixed receiver.
///
/// The pattern is compiled once from configuration and reused for every file.
/// Both names are escaped, so configuration values are always matched
/// literally. A word boundary before the receiver keeps `xmountManager.connect(`
/// out of the results, and since the method name must be followed by optional
/// whitespace (including newlines) and `(`, so does `mountManager.connectAll(`.
#[derive(Debug, Clone)]
pub struct CallLocator {
    pattern: Regex,
}

impl CallLocator {
    pub fn new<S: AsRef<str>>(receiver: &str, methods: &[S]) -> Result<Self> {
        let alternatives = methods
            .iter()
            .map(|m| regex::escape(m.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let boundary = if receiver.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
            r"\b"
        } else {
            ""
        };
        let source = format!(
            r"{}{}\.(?P<method>{})\s*\(",
            boundary,
            regex::escape(receiver),
            alternatives
        );
        let pattern = Regex::new(&source)
            .with_context(|| format!("Failed to build call pattern for '{}'", receiver))?;
        Ok(Self { pattern })
    }

    /// Iterate over matches in `text`, in order of occurrence.
    pub fn find_calls<'l, 't>(&'l self, text: &'t str) -> CallMatches<'l, 't> {
        CallMatches {
            inner: self.pattern.captures_iter(text),
        }
    }
}

/// Lazy iterator returned by [`CallLocator::find_calls`].
pub struct CallMatches<'l, 't> {
    inner: CaptureMatches<'l, 't>,
}

impl<'t> Iterator for CallMatches<'_, 't> {
    type Item = CallMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.inner.next()?;
        let whole = caps.get(0)?;
        let method = caps.name("method")?.as_str();
        Some(CallMatch {
            method,
            start: whole.start(),
            // The pattern always ends with a one-byte `(`.
            open_paren: whole.end() - 1,
        })
    }
}

/// 1-based line number of a byte offset.
pub fn line_number(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
