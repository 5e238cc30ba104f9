//! Fixed strings and compiled patterns shared by the resolvers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when neither `<title>` nor `<h1>` yields text.
pub const TITLE_NOT_FOUND: &str = "title not found";

/// Authors value when every strategy came up empty.
pub const AUTHORS_NOT_FOUND: &str = "authors not found";

/// Authors value when the author chain hit a fault.
pub const AUTHORS_LOOKUP_ERROR: &str = "error during author lookup";

/// Appended to titles cut at the length limit.
pub const TRUNCATION_MARKER: &str = "...";

/// Journal name that follows the author list in eLIBRARY meta descriptions.
pub const JOURNAL_MARKER: &str = "Известия";

/// Label of the table cell holding the author list.
pub const AUTHORS_LABEL: &str = "Авторы:";

/// Substrings that disqualify a candidate author list.
pub const AUTHOR_DENYLIST: [&str; 5] = ["ISSN", JOURNAL_MARKER, "журнал", "ИНФОРМАЦИЯ", "ПУБЛИКАЦИИ"];

pub const DEFAULT_MAX_TITLE_CHARS: usize = 200;
pub const DEFAULT_MIN_EMPHASIS_CHARS: usize = 10;
pub const DEFAULT_LABELLED_AUTHOR_SELECTOR: &str = "font[color]";
pub const DEFAULT_EMPHASIS_SELECTOR: &str = "font[color='#00008f'], b, strong";

pub struct Regexps {
    /// Publication year in the 2000s, used to cut the meta description.
    pub year: Regex,
    /// Russian initials such as `А.` or `А.Б.`.
    pub initials: Regex,
    /// Named, decimal and hex character references.
    pub html_entity: Regex,
}

pub static REGEXPS: Lazy<Regexps> = Lazy::new(|| Regexps {
    year: Regex::new(r"\b20\d{2}\b").unwrap(),
    initials: Regex::new(r"[А-ЯЁ]\.(?:[А-ЯЁ]\.)?").unwrap(),
    html_entity: Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .unwrap(),
});
