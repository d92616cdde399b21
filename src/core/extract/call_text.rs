/// Extract the argument list of a call starting at `open_paren`.
///
/// Returns the text from `open_paren` up to and including the parenthesis
/// that brings the nesting depth back to zero. Parentheses inside string
/// literals or comments are counted like any other, so a call such as
/// `f(")")` is cut short.
///
/// When the parentheses never balance, everything up to the end of `text`
/// is returned. An offset past the end (or inside a UTF-8 sequence) yields an
/// empty string.
pub fn extract_call_text(text: &str, open_paren: usize) -> &str {
    let Some(rest) = text.get(open_paren..) else {
        return "";
    };

    let mut depth = 0usize;
    for (i, b) in rest.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return &rest[..=i];
                }
            }
            _ => {}
        }
    }

    rest
}
