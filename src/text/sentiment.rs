//! Lexicon-based sentiment scoring.
//!
//! A deliberately small valence lexicon with negation flipping and
//! intensity boosters, normalized into a compound score in `[-1.0, 1.0]`
//! the same way VADER normalizes its summed valences. Deterministic: the
//! score depends only on the input text and the fixed tables below.

use super::tokenize;

/// Normalization constant: `compound = sum / sqrt(sum^2 + ALPHA)`.
const NORMALIZATION_ALPHA: f32 = 15.0;

/// Negation within this many preceding tokens flips a valence.
const NEGATION_WINDOW: usize = 3;

/// Factor applied to a valence when negated.
const NEGATION_DAMPING: f32 = -0.74;

/// Valence lexicon (lowercase token, raw valence roughly in `[-4, 4]`).
const LEXICON: &[(&str, f32)] = &[
    ("abandoned", -1.8),
    ("abuse", -3.2),
    ("accomplish", 1.8),
    ("achievement", 2.1),
    ("alarming", -1.9),
    ("attack", -2.1),
    ("awful", -2.8),
    ("bad", -2.5),
    ("benefit", 1.8),
    ("best", 3.2),
    ("breakthrough", 2.4),
    ("brilliant", 2.8),
    ("catastrophe", -3.4),
    ("celebrate", 2.4),
    ("chaos", -2.6),
    ("collapse", -2.4),
    ("corrupt", -3.0),
    ("crash", -2.2),
    ("crisis", -2.5),
    ("danger", -2.4),
    ("dead", -3.0),
    ("deadly", -2.9),
    ("destroy", -2.7),
    ("disaster", -3.1),
    ("dreadful", -2.7),
    ("excellent", 3.0),
    ("fail", -2.3),
    ("failure", -2.4),
    ("fake", -2.1),
    ("fear", -2.2),
    ("fraud", -3.0),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("hate", -2.7),
    ("hero", 2.6),
    ("hope", 1.9),
    ("horrible", -2.8),
    ("improve", 1.9),
    ("kill", -3.2),
    ("lie", -2.4),
    ("love", 3.2),
    ("murder", -3.4),
    ("outrage", -2.5),
    ("panic", -2.4),
    ("peace", 2.5),
    ("positive", 2.2),
    ("progress", 1.9),
    ("recover", 1.8),
    ("rescue", 2.0),
    ("safe", 1.9),
    ("scandal", -2.5),
    ("success", 2.7),
    ("terrible", -2.9),
    ("threat", -2.3),
    ("tragedy", -3.1),
    ("trust", 2.1),
    ("victory", 2.8),
    ("violence", -3.0),
    ("win", 2.8),
    ("wonderful", 2.9),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Negation tokens (contraction stems included: the tokenizer splits
/// "didn't" into "didn" and "t").
const NEGATIONS: &[&str] = &[
    "aren", "couldn", "didn", "doesn", "don", "hadn", "hasn", "haven", "isn", "neither", "never",
    "no", "nobody", "none", "nor", "not", "nothing", "shouldn", "wasn", "without", "wouldn",
];

/// Boosters add (positive entries) or remove (negative entries) intensity
/// in the direction of the valence they precede.
const BOOSTERS: &[(&str, f32)] = &[
    ("absolutely", 0.293),
    ("barely", -0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("hardly", -0.293),
    ("highly", 0.293),
    ("incredibly", 0.293),
    ("really", 0.193),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("totally", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
];

fn lexicon_valence(token: &str) -> Option<f32> {
    LEXICON
        .binary_search_by_key(&token, |(word, _)| *word)
        .ok()
        .map(|i| LEXICON[i].1)
}

fn booster_value(token: &str) -> Option<f32> {
    BOOSTERS
        .binary_search_by_key(&token, |(word, _)| *word)
        .ok()
        .map(|i| BOOSTERS[i].1)
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.binary_search(&token).is_ok()
}

/// Compound polarity score for `text` in `[-1.0, 1.0]`.
///
/// Empty or valence-free input returns `0.0`.
pub fn compound_score(text: &str) -> f32 {
    let tokens: Vec<String> = tokenize(text).collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let mut sum = 0.0f32;

    for (i, token) in tokens.iter().enumerate() {
        let Some(valence) = lexicon_valence(token) else {
            continue;
        };

        let mut adjusted = valence;

        // Boosters in the two preceding tokens, weaker with distance.
        for (offset, weight) in [(1usize, 1.0f32), (2, 0.95)] {
            if let Some(prev) = i.checked_sub(offset).map(|j| tokens[j].as_str()) {
                if let Some(boost) = booster_value(prev) {
                    adjusted += adjusted.signum() * boost * weight;
                }
            }
        }

        let negated = (1..=NEGATION_WINDOW)
            .filter_map(|offset| i.checked_sub(offset))
            .any(|j| is_negation(&tokens[j]));
        if negated {
            adjusted *= NEGATION_DAMPING;
        }

        sum += adjusted;
    }

    if sum == 0.0 {
        return 0.0;
    }

    let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    compound.clamp(-1.0, 1.0)
}
