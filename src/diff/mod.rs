/*!
 * Diffing of two normalized texts.
 *
 * This module provides:
 * - `config`: the options deciding what counts as a difference
 * - `engine`: the adapter over the `similar` diff primitive
 * - `post_process`: punctuation reclassification and segment merging
 * - `summary`: the list of changes shown next to the result
 * - `view`: unified and split layouts of a segment list
 *
 * `compare` chains normalization, diffing and post-processing.
 */

pub mod config;
pub mod engine;
pub mod post_process;
pub mod segment;
pub mod summary;
pub mod view;

use log::debug;

use crate::text_normalizer::normalize;

// Re-export main types
pub use config::{DiffConfig, DiffOption};
pub use engine::{GranularityMode, compute_diff};
pub use post_process::{is_pure_punctuation, merge_unchanged, post_process};
pub use segment::{ChangeKind, Segment, reconstruct_modified, reconstruct_original};
pub use summary::{DiffSummary, SummaryItem, TextStats};
pub use view::ViewMode;

/// Run the full pipeline with the granularity derived from `config`
pub fn compare(left: &str, right: &str, config: &DiffConfig) -> Vec<Segment> {
    compare_with_mode(left, right, config, GranularityMode::for_config(config))
}

/// Run the full pipeline with an explicit granularity
pub fn compare_with_mode(
    left: &str,
    right: &str,
    config: &DiffConfig,
    mode: GranularityMode,
) -> Vec<Segment> {
    let normalized_left = normalize(left, config);
    let normalized_right = normalize(right, config);
    debug!(
        "Normalized inputs: {} -> {} chars (left), {} -> {} chars (right)",
        left.len(),
        normalized_left.len(),
        right.len(),
        normalized_right.len()
    );

    let raw = compute_diff(&normalized_left, &normalized_right, mode);
    post_process(raw, config)
}
