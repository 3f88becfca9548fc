//! Lexicon polarity scorer for customer review text.

use crate::tokens::words;

/// Review-domain word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("excellent", 1.0),
    ("awesome", 1.0),
    ("best", 1.0),
    ("perfect", 1.0),
    ("wonderful", 1.0),
    ("delicious", 1.0),
    ("great", 0.8),
    ("happy", 0.8),
    ("pleasant", 0.7),
    ("good", 0.7),
    ("loved", 0.7),
    ("amazing", 0.6),
    ("nice", 0.6),
    ("beautiful", 0.85),
    ("love", 0.5),
    ("lovely", 0.5),
    ("okay", 0.5),
    ("ok", 0.5),
    ("outstanding", 0.5),
    ("satisfied", 0.5),
    ("fantastic", 0.4),
    ("recommend", 0.4),
    ("welcoming", 0.4),
    ("attentive", 0.4),
    ("fine", 0.4),
    ("friendly", 0.375),
    ("clean", 0.37),
    ("special", 0.36),
    ("quick", 0.33),
    ("helpful", 0.3),
    ("polite", 0.3),
    ("fresh", 0.3),
    ("fast", 0.2),
    ("reasonable", 0.2),
    ("efficient", 0.2),
    ("professional", 0.1),
    // Negative signals
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("disgusting", -1.0),
    ("annoying", -0.8),
    ("hate", -0.8),
    ("disappointed", -0.75),
    ("bad", -0.7),
    ("disappointing", -0.6),
    ("dirty", -0.6),
    ("cold", -0.6),
    ("unhelpful", -0.5),
    ("unprofessional", -0.5),
    ("mediocre", -0.5),
    ("expensive", -0.5),
    ("overpriced", -0.5),
    ("wrong", -0.5),
    ("angry", -0.5),
    ("poor", -0.4),
    ("broken", -0.4),
    ("rude", -0.3),
    ("slow", -0.3),
    ("uninterested", -0.3),
    ("crowded", -0.3),
    ("noisy", -0.3),
    ("late", -0.3),
    ("messy", -0.2),
    ("average", -0.15),
    ("long", -0.05),
];

/// Words that scale the polarity of the next scored word.
const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("highly", 1.3),
    ("super", 1.3),
    ("so", 1.2),
    ("truly", 1.2),
    ("absolutely", 1.4),
    ("extremely", 1.5),
    ("incredibly", 1.5),
];

/// Words that flip (and dampen) the polarity of the next scored word.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "none", "neither", "nor", "hardly", "isn't", "wasn't",
    "aren't", "weren't", "don't", "doesn't", "didn't", "won't", "can't", "cannot", "couldn't",
    "wouldn't", "shouldn't",
];

const NEGATION_FACTOR: f32 = -0.5;

fn lexicon_weight(word: &str) -> Option<f32> {
    LEXICON
        .iter()
        .find(|&&(lex_word, _)| lex_word == word)
        .map(|&(_, weight)| weight)
}

fn intensifier(word: &str) -> Option<f32> {
    INTENSIFIERS
        .iter()
        .find(|&&(w, _)| w == word)
        .map(|&(_, factor)| factor)
}

/// Score review text as a polarity in `[-1.0, 1.0]`.
///
/// Every lexicon word contributes its weight; a directly preceding
/// intensifier scales it and a preceding negator flips it with factor
/// `-0.5`. The result is the mean of the contributions, or `0.0` when the
/// text has no lexicon words (including empty text).
#[must_use]
pub fn polarity(text: &str) -> f32 {
    let mut hits: Vec<f32> = Vec::new();
    let mut modifier = 1.0_f32;

    for word in words(text) {
        if NEGATORS.contains(&word.as_str()) {
            modifier *= NEGATION_FACTOR;
            continue;
        }
        if let Some(factor) = intensifier(&word) {
            modifier *= factor;
            continue;
        }
        if let Some(weight) = lexicon_weight(&word) {
            hits.push((weight * modifier).clamp(-1.0, 1.0));
        }
        modifier = 1.0;
    }

    if hits.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = hits.iter().sum::<f32>() / hits.len() as f32;
    mean.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(polarity(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(polarity("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(polarity("the brown fox jumps over"), 0.0);
    }

    #[test]
    fn quick_is_a_positive_lexicon_word() {
        assert!(approx(polarity("quick"), 0.33));
        assert!(approx(polarity("the quick brown fox"), 0.33));
    }

    #[test]
    fn repeated_positive_word_averages_to_its_weight() {
        let score = polarity("Excellent service, excellent staff");
        assert!(approx(score, 1.0), "got {score}");
    }

    #[test]
    fn negative_words_average() {
        // terrible (-1.0) and rude (-0.3)
        let score = polarity("Terrible rude staff");
        assert!(approx(score, -0.65), "got {score}");
    }

    #[test]
    fn negation_flips_and_dampens() {
        let score = polarity("not good");
        assert!(approx(score, -0.35), "got {score}");
    }

    #[test]
    fn intensifier_scales_next_word() {
        let score = polarity("very helpful");
        assert!(approx(score, 0.39), "got {score}");
    }

    #[test]
    fn intensified_weight_is_clamped() {
        assert!(approx(polarity("extremely excellent"), 1.0));
    }

    #[test]
    fn modifier_does_not_skip_over_plain_words() {
        // "not" applies to "the", so "good" keeps its full weight.
        let score = polarity("not the good one");
        assert!(approx(score, 0.7), "got {score}");
    }

    #[test]
    fn score_stays_in_range() {
        for text in [
            "best best best awesome perfect",
            "worst awful terrible horrible",
            "not not not very very terrible",
        ] {
            let score = polarity(text);
            assert!((-1.0..=1.0).contains(&score), "{text}: {score}");
        }
    }

    #[test]
    fn punctuation_stripped_from_words() {
        assert!(polarity("great!") > 0.0);
    }
}
