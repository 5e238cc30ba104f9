//! Small string helpers used across the crate.

use crate::constants::REGEXPS;
use regex::Captures;

/// Decode one pass of HTML character references.
///
/// Handles decimal (`&#1040;`), hex (`&#x410;`) and the named entities that show up
/// in eLIBRARY markup. Unknown names and invalid code points are left untouched.
pub fn unescape_html_entities(text: &str) -> String {
    REGEXPS
        .html_entity
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            decode_entity(body).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(body: &str) -> Option<String> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match body {
        "nbsp" => "\u{a0}",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "laquo" => "«",
        "raquo" => "»",
        "bdquo" => "„",
        "ldquo" => "“",
        "rdquo" => "”",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ndash" => "–",
        "mdash" => "—",
        "hellip" => "…",
        "numero" => "№",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        "shy" => "\u{ad}",
        "thinsp" => "\u{2009}",
        _ => return None,
    };
    Some(decoded.to_string())
}

/// Cut `text` to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Check whether a string parses as an absolute http(s) URL
#[cfg(feature = "fetch")]
pub fn is_url(text: &str) -> bool {
    url::Url::parse(text)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
