//! HTML escaping for literal message text.

/// Opens a placeholder for markup emitted by a reference rule.
pub(super) const PLACEHOLDER_OPEN: char = '\u{E000}';
/// Closes a placeholder for markup emitted by a reference rule.
pub(super) const PLACEHOLDER_CLOSE: char = '\u{E001}';

/// Escapes text for an HTML text or attribute context.
///
/// The placeholder sentinels are replaced with U+FFFD so user input can never
/// forge a reference to markup produced by an earlier rule.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            PLACEHOLDER_OPEN | PLACEHOLDER_CLOSE => escaped.push('\u{FFFD}'),
            c => escaped.push(c),
        }
    }

    escaped
}
