use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;

// @module: On-demand cleanup of caption and transcript text

// @const: SRT timestamp range regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3} --> [0-9]{2}:[0-9]{2}:[0-9]{2},[0-9]{3}")
        .expect("Invalid timestamp regex")
});

// @const: Line holding only a sequence number
static INDEX_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[0-9]+$").expect("Invalid index line regex")
});

// @const: Two or more line breaks, whitespace allowed in between
static BLANK_LINES_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").expect("Invalid blank lines regex")
});

static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n").expect("Invalid line break regex")
});

static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

static SENTENCE_END_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.!?])\s+").expect("Invalid sentence end regex")
});

/// Remove SRT sequence numbers and timestamp lines, keeping only caption text.
///
/// Repeats until nothing changes, so applying it twice is the same as once.
pub fn strip_srt(text: &str) -> String {
    let mut current = text.replace("\r\n", "\n");
    let mut passes = 0;

    loop {
        let next = strip_srt_pass(&current);
        passes += 1;
        if next == current {
            break;
        }
        current = next;
    }

    debug!("Stripped SRT markup in {} pass(es): {} -> {} chars", passes, text.len(), current.len());
    current
}

// Every rewrite only removes text, so the fixpoint loop terminates.
fn strip_srt_pass(text: &str) -> String {
    let cleaned = TIMESTAMP_REGEX.replace_all(text, "");
    let cleaned = INDEX_LINE_REGEX.replace_all(&cleaned, "");
    let cleaned = BLANK_LINES_REGEX.replace_all(&cleaned, "\n");
    cleaned.trim().to_string()
}

/// Flatten text into one stream and put every sentence in its own paragraph
pub fn reformat(text: &str) -> String {
    let processed = LINE_BREAK_REGEX.replace_all(text, " ");
    let processed = WHITESPACE_RUN_REGEX.replace_all(&processed, " ");
    let processed = SENTENCE_END_REGEX.replace_all(&processed, "$1\n\n");
    processed.trim().to_string()
}
