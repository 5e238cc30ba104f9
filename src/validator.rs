//! Decides whether a text fragment reads like an author list.

use crate::constants::{AUTHOR_DENYLIST, REGEXPS};

/// Returns `true` when `text` plausibly is a list of authors.
///
/// A candidate needs at least five characters, a comma or a period, at least one
/// Cyrillic initial (`А.` or `А.Б.`), and none of the journal or boilerplate
/// markers that tend to sit next to author names in eLIBRARY markup.
///
/// ```rust
/// use elibraryrs::looks_like_author_list;
///
/// assert!(looks_like_author_list("А.Б. Иванов, В.Г. Петров"));
/// assert!(!looks_like_author_list("Известия ISSN 1234-5678"));
/// ```
pub fn looks_like_author_list(text: &str) -> bool {
    if text.is_empty() || text.chars().count() < 5 {
        return false;
    }

    let has_separator = text.contains(',') || text.contains('.');
    let has_initials = REGEXPS.initials.is_match(text);
    let has_denied_term = AUTHOR_DENYLIST.iter().any(|term| text.contains(term));

    has_separator && has_initials && !has_denied_term
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_initials_with_separators() {
        assert!(looks_like_author_list("А.Б. Иванов, В.Г. Петров"));
        assert!(looks_like_author_list("Смирнов П., Козлова Е."));
        assert!(looks_like_author_list("Ёлкин Ё.Ё."));
    }

    #[test]
    fn rejects_short_text() {
        assert!(!looks_like_author_list("ok"));
        assert!(!looks_like_author_list("А.Б."));
        assert!(!looks_like_author_list(""));
    }

    #[test]
    fn rejects_denylisted_terms() {
        assert!(!looks_like_author_list("Известия ISSN 1234-5678"));
        assert!(!looks_like_author_list("Иванов А.А., научный журнал"));
        assert!(!looks_like_author_list("БИБЛИОГРАФИЧЕСКАЯ ИНФОРМАЦИЯ А.Б."));
        assert!(!looks_like_author_list("ПУБЛИКАЦИИ: Иванов А.А."));
    }

    #[test]
    fn denylist_is_case_sensitive() {
        assert!(looks_like_author_list("Иванов А.А., issn"));
    }

    #[test]
    fn requires_cyrillic_initials() {
        assert!(!looks_like_author_list("J. Smith, K. Jones"));
        assert!(!looks_like_author_list("Иванов, Петров, Сидоров."));
        assert!(!looks_like_author_list("а.б. иванов, в.г. петров"));
    }
}
