//! Pairwise TF-IDF cosine similarity.
//!
//! The vector space is rebuilt for every call from the two input texts as
//! the ENTIRE corpus (smooth IDF over two documents, vocabulary capped at
//! the 100 most frequent terms). That makes the score a pair-local metric:
//! it is meaningful for consistency between the two given texts, but not
//! comparable across different pairs. Callers that need a corpus-wide
//! metric must not reuse this function.

use std::collections::HashMap;

use super::{is_stopword, tokenize};

/// Vocabulary cap: only the most frequent terms across the pair are kept.
pub const MAX_VOCABULARY_TERMS: usize = 100;

/// Terms shorter than this are ignored by the vectorizer.
const MIN_TERM_LEN: usize = 2;

/// Cosine similarity between two equal-length vectors.
///
/// Returns `0.0` for mismatched lengths, empty input, or zero-norm vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

/// TF-IDF cosine similarity between `a` and `b`, in `[0.0, 1.0]`.
///
/// Returns `0.0` if either text is empty (or contains no usable terms);
/// identical texts score `1.0`.
pub fn pairwise_similarity(a: &str, b: &str) -> f32 {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);

    if counts_a.is_empty() || counts_b.is_empty() {
        return 0.0;
    }

    let vocabulary = build_vocabulary(&counts_a, &counts_b);

    let vec_a = tfidf_vector(&counts_a, &counts_b, &vocabulary);
    let vec_b = tfidf_vector(&counts_b, &counts_a, &vocabulary);

    cosine_similarity(&vec_a, &vec_b).clamp(0.0, 1.0)
}

/// Raw term frequencies for one document.
fn term_counts(text: &str) -> HashMap<String, f32> {
    let mut counts = HashMap::new();
    for token in tokenize(text) {
        if token.chars().count() < MIN_TERM_LEN {
            continue;
        }
        if !token.chars().all(|c| c.is_alphabetic()) {
            continue;
        }
        if is_stopword(&token) {
            continue;
        }
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

/// The pair's vocabulary: top [`MAX_VOCABULARY_TERMS`] by combined
/// frequency, ties broken lexicographically so the result is deterministic.
fn build_vocabulary(counts_a: &HashMap<String, f32>, counts_b: &HashMap<String, f32>) -> Vec<String> {
    let mut combined: HashMap<&str, f32> = HashMap::new();
    for (term, count) in counts_a.iter().chain(counts_b.iter()) {
        *combined.entry(term.as_str()).or_insert(0.0) += *count;
    }

    let mut terms: Vec<(&str, f32)> = combined.into_iter().collect();
    terms.sort_by(|(term_a, count_a), (term_b, count_b)| {
        count_b
            .partial_cmp(count_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| term_a.cmp(term_b))
    });
    terms.truncate(MAX_VOCABULARY_TERMS);

    terms.into_iter().map(|(term, _)| term.to_string()).collect()
}

/// TF-IDF vector for the document with counts `own`, with smooth IDF over
/// the two-document corpus: `idf = ln((1 + 2) / (1 + df)) + 1`.
fn tfidf_vector(
    own: &HashMap<String, f32>,
    other: &HashMap<String, f32>,
    vocabulary: &[String],
) -> Vec<f32> {
    vocabulary
        .iter()
        .map(|term| {
            let tf = own.get(term).copied().unwrap_or(0.0);
            if tf == 0.0 {
                return 0.0;
            }
            let df: f32 = 1.0 + if other.contains_key(term) { 1.0 } else { 0.0 };
            let idf = ((1.0 + 2.0) / (1.0 + df)).ln() + 1.0;
            tf * idf
        })
        .collect()
}
