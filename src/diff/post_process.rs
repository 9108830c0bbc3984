/*!
 * Diff post-processing.
 *
 * When punctuation is ignored, added/removed segments that contain only
 * punctuation and whitespace are reclassified as unchanged, then every run
 * of adjacent unchanged segments is merged into one segment.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::config::DiffConfig;
use super::segment::{ChangeKind, Segment};
use crate::text_normalizer::canonicalize_punctuation;

// Whole content made of whitespace and the ignorable punctuation set
static PURE_PUNCTUATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[\s.,/#!$%^&*;:{}=\-_`~()'"?]+$"#).expect("Invalid punctuation regex")
});

/// Apply the configured post-processing to a raw segment list.
///
/// Returns the input untouched when `ignore_punctuation` is off.
pub fn post_process(segments: Vec<Segment>, config: &DiffConfig) -> Vec<Segment> {
    if !config.ignore_punctuation {
        return segments;
    }

    let mut reclassified = 0usize;
    let segments: Vec<Segment> = segments
        .into_iter()
        .map(|mut segment| {
            if segment.kind.is_change() && is_pure_punctuation(&segment.content) {
                segment.kind = ChangeKind::Unchanged;
                reclassified += 1;
            }
            segment
        })
        .collect();

    let merged = merge_unchanged(segments);
    debug!(
        "Post-processing reclassified {} punctuation segment(s), {} segment(s) remain",
        reclassified,
        merged.len()
    );
    merged
}

/// Whether every character of `content` is whitespace or ignorable punctuation
pub fn is_pure_punctuation(content: &str) -> bool {
    PURE_PUNCTUATION_REGEX.is_match(&canonicalize_punctuation(content))
}

/// Merge each maximal run of consecutive unchanged segments into one
pub fn merge_unchanged(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.is_unchanged() && segment.is_unchanged() => {
                last.content.push_str(&segment.content);
            }
            _ => merged.push(segment),
        }
    }

    merged
}
