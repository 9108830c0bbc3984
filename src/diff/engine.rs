/*!
 * Diff engine adapter.
 *
 * Wraps the `similar` crate's text diff at character, word or line
 * granularity and turns its operations into an ordered list of segments.
 * Segments are emitted in the order the primitive reports them; merging
 * is left to the post-processor.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use similar::TextDiff;

use super::config::DiffConfig;
use super::segment::{ChangeKind, Segment};

// Word run, whitespace run, or a single other character
static WORD_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}_]+|\s+|[^\p{L}\p{M}\p{N}_\s]").expect("Invalid word token regex")
});

/// Token unit used by the diff primitive
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GranularityMode {
    /// One token per character
    Character,
    /// Words, whitespace runs and punctuation are separate tokens
    #[default]
    Word,
    /// One token per line, line break included
    Line,
}

impl GranularityMode {
    /// Line mode once sentences are broken onto their own lines, word mode otherwise
    pub fn for_config(config: &DiffConfig) -> Self {
        if config.break_sentences {
            Self::Line
        } else {
            Self::Word
        }
    }
}

impl std::fmt::Display for GranularityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Character => "char",
            Self::Word => "word",
            Self::Line => "line",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for GranularityMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "char" | "chars" | "character" => Ok(Self::Character),
            "word" | "words" => Ok(Self::Word),
            "line" | "lines" => Ok(Self::Line),
            _ => Err(anyhow::anyhow!("Invalid granularity mode: {}", s)),
        }
    }
}

/// Split text into word, whitespace and single punctuation tokens.
///
/// Apostrophes and hyphens inside words are tokens of their own, so
/// `we're` is `we` + `'` + `re`. The tokens concatenate back to `text`.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    WORD_TOKEN_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Diff two strings at the given granularity.
///
/// Concatenating the unchanged and removed segments yields `old_text`;
/// concatenating the unchanged and added segments yields `new_text`.
pub fn compute_diff(old_text: &str, new_text: &str, mode: GranularityMode) -> Vec<Segment> {
    let old_tokens;
    let new_tokens;
    let diff = match mode {
        GranularityMode::Character => TextDiff::from_chars(old_text, new_text),
        GranularityMode::Word => {
            old_tokens = tokenize_words(old_text);
            new_tokens = tokenize_words(new_text);
            TextDiff::from_slices(old_tokens.as_slice(), new_tokens.as_slice())
        }
        GranularityMode::Line => TextDiff::from_lines(old_text, new_text),
    };

    let mut segments: Vec<Segment> = Vec::new();
    for op in diff.ops() {
        // Tokens of one op with the same tag form one segment; ops are never joined.
        let op_start = segments.len();
        for change in diff.iter_changes(op) {
            let kind = ChangeKind::from(change.tag());
            let extends_last = segments.len() > op_start
                && segments.last().is_some_and(|last| last.kind == kind);
            match segments.last_mut() {
                Some(last) if extends_last => last.content.push_str(change.value()),
                _ => segments.push(Segment::new(change.value(), kind)),
            }
        }
    }

    debug!(
        "Computed {} diff segments in {} mode ({} -> {} chars)",
        segments.len(),
        mode,
        old_text.chars().count(),
        new_text.chars().count()
    );

    segments
}
