//! Sentence segmentation
//!
//! A [`Segmenter`] turns a document's raw text into an ordered list of
//! sentences. Two strategies are provided:
//! - [`HeuristicSegmenter`]: splits after `.`, `!` or `?` followed by
//!   whitespace. Always available, no tables.
//! - [`LinguisticSegmenter`]: same boundaries, but aware of abbreviations,
//!   initials and closing quotes.
//!
//! The strategy is chosen once through [`SegmenterKind`] when the engine is
//! built and used for every document.

use std::str::FromStr;

use serde::de::IntoDeserializer;
use serde::de::value::Error as ValueError;
use serde::{Deserialize, Serialize};

/// Trait for sentence segmentation strategies
pub trait Segmenter: Send + Sync {
    /// Split text into sentences.
    ///
    /// Leading/trailing whitespace is removed from the input and from every
    /// sentence; empty fragments are dropped. Sentences borrow from `text`.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Returns the name of this segmentation strategy
    fn name(&self) -> &str;
}

/// Selects a [`Segmenter`] implementation from configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    #[default]
    Heuristic,
    Linguistic,
}

impl SegmenterKind {
    /// Instantiate the segmenter this kind names.
    ///
    /// `abbreviations` extends the built-in table of the linguistic
    /// segmenter; the heuristic one ignores it.
    #[must_use]
    pub fn build(self, abbreviations: &[String]) -> Box<dyn Segmenter> {
        match self {
            Self::Heuristic => Box::new(HeuristicSegmenter),
            Self::Linguistic => {
                Box::new(LinguisticSegmenter::default().with_abbreviations(abbreviations))
            }
        }
    }
}

/// Parses the same lower-case names the serde representation uses.
impl FromStr for SegmenterKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}

/// Sentence-terminal punctuation shared by both strategies.
pub(crate) fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

mod heuristic;
mod linguistic;

pub use heuristic::*;
pub use linguistic::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_serde_names() {
        assert_eq!("heuristic".parse::<SegmenterKind>().unwrap(), SegmenterKind::Heuristic);
        assert_eq!("linguistic".parse::<SegmenterKind>().unwrap(), SegmenterKind::Linguistic);

        let err = "fancy".parse::<SegmenterKind>().unwrap_err();
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn test_kind_parse_agrees_with_serialization() {
        for kind in [SegmenterKind::Heuristic, SegmenterKind::Linguistic] {
            let name = serde_json::to_value(kind).unwrap();
            let parsed: SegmenterKind = name.as_str().unwrap().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_build_passes_abbreviations() {
        let text = "See Ref. Seven. Done.";
        let extra = vec!["ref".to_owned()];

        let linguistic = SegmenterKind::Linguistic.build(&extra);
        assert_eq!(linguistic.segment(text), vec!["See Ref. Seven.", "Done."]);

        let heuristic = SegmenterKind::Heuristic.build(&extra);
        assert_eq!(heuristic.segment(text).len(), 3);
    }
}
