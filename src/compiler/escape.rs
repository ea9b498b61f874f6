//! HTML escaping for fragment text content.
//!
//! The compiler emits literal HTML, so every piece of text lifted out of
//! a source file — titles, questions, answers — passes through here
//! before it reaches markup. Source files are editable by content staff
//! and must never be able to smuggle tags into a page.

/// Escape text for safe interpolation into HTML element content or
/// double-quoted attribute values.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. `&` is
/// replaced first so entities in the input are not double-mangled into
/// broken sequences, just neutralized.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether a declared category id is safe to use as a DOM id and as the
/// stem of an output file name.
///
/// Accepts `[A-Za-z][A-Za-z0-9_-]*`. This is deliberately stricter than
/// HTML5's id grammar: the id doubles as a file name, so path separators,
/// dots and whitespace are all rejected rather than sanitized.
#[must_use]
pub fn is_valid_category_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
