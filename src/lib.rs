/*!
 * # TCDC - Transcript Caption Diff Checker
 *
 * A Rust library for comparing two versions of a transcript or caption text.
 *
 * ## Features
 *
 * - Light normalization before diffing:
 *   - One sentence per line
 *   - Whitespace collapsing
 * - Word, line or character level diffs
 * - Optional suppression of punctuation-only changes (including typographic
 *   dashes, quotes and ellipses)
 * - Diff summary with unified and split views
 * - SRT index/timestamp stripping and sentence reformatting utilities
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `text_normalizer`: Rewrites applied to each side before diffing
 * - `diff`: Diff pipeline:
 *   - `diff::engine`: Adapter over the `similar` diff primitive
 *   - `diff::post_process`: Punctuation reclassification and merging
 *   - `diff::summary`: List of changes
 *   - `diff::view`: Unified and split layouts
 * - `subtitle_processor`: SRT stripping and reformatting
 * - `session`: Texts and options of one comparison, recomputed on demand
 * - `render`: Terminal output of results
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod diff;
pub mod errors;
pub mod file_utils;
pub mod render;
pub mod session;
pub mod subtitle_processor;
pub mod text_normalizer;

// Re-export main types for easier usage
pub use app_config::Config;
pub use diff::{ChangeKind, DiffConfig, DiffOption, DiffSummary, GranularityMode, Segment, ViewMode};
pub use diff::{compare, compute_diff, post_process};
pub use errors::{AppError, ConfigError};
pub use session::{DiffSession, Side};
pub use subtitle_processor::{reformat, strip_srt};
pub use text_normalizer::normalize;
