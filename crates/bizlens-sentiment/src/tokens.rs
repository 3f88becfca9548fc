//! Word tokenization shared by the scorer and keyword ranking.

use std::sync::LazyLock;

use regex::Regex;

/// Letters/digits, optionally followed by one apostrophe suffix (`won't`, `i've`).
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)?").expect("valid word regex"));

/// Split `text` into case-folded word tokens, punctuation dropped.
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().replace('’', "'"))
        .collect()
}

/// Clitic suffixes split off for keyword ranking.
const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Like [`words`], but contractions are split into stem and clitic
/// (`didn't` -> `did`, `n't`; `we'll` -> `we`, `'ll`).
///
/// The scorer keeps whole contractions so negators like `didn't` still match.
#[must_use]
pub fn keyword_words(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for word in words(text) {
        match CLITICS
            .iter()
            .find(|c| word.len() > c.len() && word.ends_with(*c))
        {
            Some(clitic) => {
                let stem = &word[..word.len() - clitic.len()];
                out.push(stem.to_string());
                out.push((*clitic).to_string());
            }
            None => out.push(word),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(
            words("Excellent service, excellent staff!"),
            vec!["excellent", "service", "excellent", "staff"]
        );
    }

    #[test]
    fn keeps_contractions_together() {
        assert_eq!(words("Won't be back"), vec!["won't", "be", "back"]);
        assert_eq!(words("I’ve seen better"), vec!["i've", "seen", "better"]);
    }

    #[test]
    fn keyword_words_split_clitics() {
        assert_eq!(
            keyword_words("Didn't like it. Won't return"),
            vec!["did", "n't", "like", "it", "wo", "n't", "return"]
        );
        assert_eq!(keyword_words("We'll be back"), vec!["we", "'ll", "be", "back"]);
    }

    #[test]
    fn keyword_words_leave_plain_apostrophes_alone() {
        assert_eq!(keyword_words("o'clock"), vec!["o'clock"]);
    }

    #[test]
    fn empty_and_symbol_only_text_has_no_words() {
        assert!(words("").is_empty());
        assert!(words("!!! ... ???").is_empty());
    }

    #[test]
    fn digits_count_as_words() {
        assert_eq!(words("open 24 hours"), vec!["open", "24", "hours"]);
    }
}
