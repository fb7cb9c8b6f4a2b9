use crate::segment::{is_terminal, Segmenter};

/// Punctuation-boundary segmenter.
///
/// A sentence ends at `.`, `!` or `?` immediately followed by whitespace.
/// No abbreviation handling: `"Dr. Smith"` yields two sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSegmenter;

impl Segmenter for HeuristicSegmenter {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let text = text.trim();
        let mut sentences = Vec::new();
        let mut start = 0;

        let mut chars = text.char_indices().peekable();
        while let Some((_, c)) = chars.next() {
            if !is_terminal(c) {
                continue;
            }
            if let Some(&(next, ws)) = chars.peek()
                && ws.is_whitespace()
            {
                push_trimmed(&mut sentences, &text[start..next]);
                start = next;
            }
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }
}

pub(crate) fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment);
    }
}
