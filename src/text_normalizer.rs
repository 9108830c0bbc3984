/*!
 * Text normalization applied to each side before diffing.
 *
 * Passes run in a fixed order, each on the previous pass's output:
 * 1. sentence breaking (`break_sentences`)
 * 2. whitespace collapsing (`ignore_whitespace`)
 *
 * Typographic punctuation canonicalization lives here as well but is not
 * part of `normalize`: rewriting punctuation before the diff shifts token
 * boundaries, so it is only consulted when the post-processor classifies
 * segments.
 */

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diff::DiffConfig;

// Sentence terminator followed by a whitespace run
static SENTENCE_END_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.!?])\s+").expect("Invalid sentence end regex")
});

static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

/// Typographic punctuation and the ASCII form it is compared as
pub const PUNCTUATION_CANONICAL_FORMS: &[(char, &str)] = &[
    // Dashes and hyphens
    ('\u{2014}', "-"), // em dash
    ('\u{2013}', "-"), // en dash
    ('\u{2212}', "-"), // minus sign
    ('\u{2012}', "-"), // figure dash
    ('\u{2015}', "-"), // horizontal bar
    // Double quotes
    ('\u{201C}', "\""),
    ('\u{201D}', "\""),
    ('\u{201E}', "\""),
    ('\u{00AB}', "\""),
    ('\u{00BB}', "\""),
    // Single quotes
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201A}', "'"),
    ('\u{2039}', "'"),
    ('\u{203A}', "'"),
    // Ellipsis
    ('\u{2026}', "..."),
];

/// Normalize text according to the enabled options.
///
/// With every option disabled the input is returned unchanged.
pub fn normalize(text: &str, config: &DiffConfig) -> String {
    let mut processed = text.to_string();

    if config.break_sentences {
        processed = break_sentences(&processed);
    }

    if config.ignore_whitespace {
        processed = collapse_whitespace(&processed);
    }

    processed
}

/// Replace the whitespace after every `.`, `!` or `?` with a single line break
pub fn break_sentences(text: &str) -> String {
    SENTENCE_END_REGEX.replace_all(text, "$1\n").into_owned()
}

/// Collapse every whitespace run to one space and trim the result
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN_REGEX.replace_all(text, " ").trim().to_string()
}

/// Map typographic dashes, quotes and ellipses to their ASCII forms
pub fn canonicalize_punctuation(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| canonical_form(c).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut canonical = String::with_capacity(text.len());
    for c in text.chars() {
        match canonical_form(c) {
            Some(replacement) => canonical.push_str(replacement),
            None => canonical.push(c),
        }
    }
    Cow::Owned(canonical)
}

fn canonical_form(c: char) -> Option<&'static str> {
    PUNCTUATION_CANONICAL_FORMS
        .iter()
        .find(|(variant, _)| *variant == c)
        .map(|(_, replacement)| *replacement)
}
