use std::collections::HashSet;
use std::sync::LazyLock;

use crate::segment::heuristic::push_trimmed;
use crate::segment::{is_terminal, Segmenter};

static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "gen", "gov", "sen", "rep",
        "inc", "ltd", "co", "corp", "dept", "univ", "assn", "bros", "vs", "etc", "approx",
        "e.g", "i.e", "cf", "al", "fig", "no", "vol", "pp", "ed", "est", "jan", "feb", "mar",
        "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "a.m",
        "p.m",
    ]
    .into_iter()
    .collect()
});

/// Abbreviation-aware segmenter.
///
/// Shares the boundary rule of [`HeuristicSegmenter`](super::HeuristicSegmenter)
/// and then vetoes boundaries that are unlikely to end a sentence:
/// - a period after a known abbreviation (`Dr.`, `e.g.`, `Inc.`)
/// - a period after a single-letter initial (`J. Smith`)
/// - any boundary followed by a lower-case letter
///
/// Closing quotes and brackets directly after the punctuation stay with the
/// sentence they close.
#[derive(Debug, Clone, Default)]
pub struct LinguisticSegmenter {
    extra_abbreviations: HashSet<String>,
}

impl LinguisticSegmenter {
    /// Add domain-specific abbreviations (case-insensitive, without the
    /// trailing period).
    #[must_use]
    pub fn with_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_abbreviations
            .extend(abbreviations.into_iter().map(|a| a.as_ref().to_lowercase()));
        self
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let lower = word.to_lowercase();
        ABBREVIATIONS.contains(lower.as_str()) || self.extra_abbreviations.contains(&lower)
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

impl Segmenter for LinguisticSegmenter {
    fn name(&self) -> &str {
        "linguistic"
    }

    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let text = text.trim();
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;

        let mut i = 0;
        while i < chars.len() {
            let (pos, c) = chars[i];
            if !is_terminal(c) {
                i += 1;
                continue;
            }

            // absorb runs like "?!" and closing quotes
            let mut end = i + 1;
            while end < chars.len() && (is_terminal(chars[end].1) || is_closer(chars[end].1)) {
                end += 1;
            }
            let Some(&(boundary, next)) = chars.get(end) else {
                break;
            };
            if !next.is_whitespace() {
                i = end;
                continue;
            }

            // whitespace may be multi-byte (U+00A0, U+3000)
            let word_start = text[start..pos]
                .char_indices()
                .rev()
                .find(|&(_, c)| c.is_whitespace())
                .map_or(start, |(ws, c)| start + ws + c.len_utf8());
            let word = &text[word_start..pos];

            let vetoed = (c == '.'
                && (self.is_abbreviation(word)
                    || (word.chars().count() == 1 && word.chars().all(char::is_alphabetic))))
                || text[boundary..]
                    .trim_start()
                    .chars()
                    .next()
                    .is_some_and(char::is_lowercase);

            if !vetoed {
                push_trimmed(&mut sentences, &text[start..boundary]);
                start = boundary;
            }
            i = end;
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }
}
