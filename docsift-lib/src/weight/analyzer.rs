use crate::weight::stop_words::is_stop_word;

/// Turns text into the terms a vocabulary is built from.
///
/// Text is lower-cased and split on every non-alphanumeric character.
/// Tokens shorter than two characters are discarded, then stop words (if
/// enabled). N-grams are formed over the surviving tokens and joined with a
/// single space, so `"cloud infrastructure"` is a bigram term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analyzer {
    pub remove_stop_words: bool,
    /// Inclusive `(min, max)` n-gram lengths
    pub ngram_range: (usize, usize),
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            remove_stop_words: true,
            ngram_range: (1, 2),
        }
    }
}

impl Analyzer {
    /// Lower-cased word tokens, in order.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= 2)
            .filter(|t| !(self.remove_stop_words && is_stop_word(t)))
            .map(str::to_owned)
            .collect()
    }

    /// All terms of `text`, unigrams first then longer n-grams, repeats kept.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let tokens = self.tokens(text);
        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();

        for n in min_n.max(1)..=max_n {
            if n == 1 {
                terms.extend(tokens.iter().cloned());
            } else {
                terms.extend(tokens.windows(n).map(|w| w.join(" ")));
            }
        }
        terms
    }
}
