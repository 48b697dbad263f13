//! Text-to-signal analysis: keyword extraction, sentiment, similarity,
//! and sensationalism heuristics.
//!
//! Everything in this module is a pure function of its input text plus
//! fixed `'static` word tables, so a single [`TextAnalyzer`] can be shared
//! freely across concurrent requests.

pub mod sentiment;
pub mod similarity;
mod stopwords;


pub use similarity::{MAX_VOCABULARY_TERMS, cosine_similarity, pairwise_similarity};
pub use stopwords::is_stopword;

/// Default number of keywords returned by [`TextAnalyzer::extract_keywords`].
pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Keyword tokens must be strictly longer than this many characters.
const MIN_KEYWORD_LEN: usize = 3;

/// Fixed phrase list for the sensationalism heuristic (all lowercase).
const SENSATIONAL_PHRASES: &[&str] = &[
    "shocking",
    "amazing",
    "incredible",
    "unbelievable",
    "must see",
    "you won't believe",
    "doctors hate",
    "celebrity",
    "scandal",
    "expos\u{e9}",
    "viral",
];

/// Sentence and word counts for a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TextStats {
    pub sentences: usize,
    pub words: usize,
}

/// Stateless text analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer;

impl TextAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Extracts up to `top_n` keywords from `text`.
    ///
    /// Tokens are lowercased, must be purely alphabetic, longer than three
    /// characters and not stopwords. Duplicates are removed preserving
    /// first-occurrence order. Empty input yields an empty vec.
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();

        for token in tokenize(text) {
            if token.chars().count() <= MIN_KEYWORD_LEN {
                continue;
            }
            if !token.chars().all(|c| c.is_alphabetic()) {
                continue;
            }
            if is_stopword(&token) {
                continue;
            }
            if keywords.iter().any(|k| k == &token) {
                continue;
            }

            keywords.push(token);
            if keywords.len() == top_n {
                break;
            }
        }

        keywords
    }

    /// Lexicon-based polarity score in `[-1.0, 1.0]`; `0.0` for empty or
    /// fully neutral input.
    pub fn analyze_sentiment(&self, text: &str) -> f32 {
        sentiment::compound_score(text)
    }

    /// Pairwise TF-IDF cosine similarity in `[0.0, 1.0]`.
    ///
    /// The vector space is rebuilt from the two inputs alone, so scores are
    /// only meaningful for that pair; see [`pairwise_similarity`].
    pub fn calculate_similarity(&self, a: &str, b: &str) -> f32 {
        pairwise_similarity(a, b)
    }

    /// Fraction of the fixed sensational-phrase list that appears in `text`
    /// (case-insensitive substring match), capped at `1.0`.
    pub fn detect_sensationalism(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let lower = text.to_lowercase();
        let hits = SENSATIONAL_PHRASES
            .iter()
            .filter(|phrase| lower.contains(*phrase))
            .count();

        (hits as f32 / SENSATIONAL_PHRASES.len() as f32).min(1.0)
    }

    /// Sentence and word counts.
    pub fn text_stats(&self, text: &str) -> TextStats {
        let sentences = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();
        let words = text.split_whitespace().count();

        TextStats { sentences, words }
    }
}

/// Lowercased word tokens, split on any non-alphanumeric character.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}
