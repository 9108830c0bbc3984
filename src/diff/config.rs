use serde::{Deserialize, Serialize};

/// Options that decide what counts as a meaningful difference.
///
/// The three flags are independent; each one is consumed by a single stage
/// of the pipeline (`break_sentences` and `ignore_whitespace` by the
/// normalizer, `ignore_punctuation` by the post-processor).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffConfig {
    /// Collapse whitespace runs to a single space and trim both ends
    #[serde(default)]
    pub ignore_whitespace: bool,

    /// Treat changes made only of punctuation/whitespace as unchanged
    #[serde(default)]
    pub ignore_punctuation: bool,

    /// Put every sentence on its own line before diffing
    #[serde(default)]
    pub break_sentences: bool,
}

/// Names one field of `DiffConfig`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOption {
    IgnoreWhitespace,
    IgnorePunctuation,
    BreakSentences,
}

impl DiffConfig {
    pub fn with_ignore_whitespace(mut self, value: bool) -> Self {
        self.ignore_whitespace = value;
        self
    }

    pub fn with_ignore_punctuation(mut self, value: bool) -> Self {
        self.ignore_punctuation = value;
        self
    }

    pub fn with_break_sentences(mut self, value: bool) -> Self {
        self.break_sentences = value;
        self
    }

    /// Current value of a single option
    pub fn get(&self, option: DiffOption) -> bool {
        match option {
            DiffOption::IgnoreWhitespace => self.ignore_whitespace,
            DiffOption::IgnorePunctuation => self.ignore_punctuation,
            DiffOption::BreakSentences => self.break_sentences,
        }
    }

    pub fn set(&mut self, option: DiffOption, value: bool) {
        match option {
            DiffOption::IgnoreWhitespace => self.ignore_whitespace = value,
            DiffOption::IgnorePunctuation => self.ignore_punctuation = value,
            DiffOption::BreakSentences => self.break_sentences = value,
        }
    }

    /// Flip one option, leaving the others untouched
    pub fn toggle(&mut self, option: DiffOption) {
        self.set(option, !self.get(option));
    }
}

impl std::fmt::Display for DiffOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::IgnoreWhitespace => "ignore whitespace",
            Self::IgnorePunctuation => "ignore punctuation",
            Self::BreakSentences => "break sentences",
        };
        write!(f, "{}", name)
    }
}
