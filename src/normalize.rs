//! Whitespace and entity cleanup applied to every extracted fragment.

use crate::utils::unescape_html_entities;

/// Normalize a raw text fragment.
///
/// Entities are decoded to their literal characters until none remain, line
/// breaks and tabs become plain spaces, space runs collapse to one and the result
/// is trimmed. The function is idempotent.
///
/// ```rust
/// use elibraryrs::normalize;
///
/// assert_eq!(normalize("  Иванов А.А.,\n\tПетров&nbsp;Б.В.  "), "Иванов А.А., Петров\u{a0}Б.В.");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // Each decoding pass that changes the text shortens it, so this terminates.
    let mut text = raw.to_string();
    loop {
        let decoded = unescape_html_entities(&text);
        if decoded == text {
            break;
        }
        text = decoded;
    }

    let mut text: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect();

    while text.contains("  ") {
        text = text.replace("  ", " ");
    }

    text.trim().to_string()
}
