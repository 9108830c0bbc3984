/*!
 * Comparison session.
 *
 * Holds the two texts being compared and the active options. Results are
 * derived state: every call to `segments` reruns the whole pipeline from
 * the current inputs, so there is nothing to invalidate after an edit.
 */

use log::debug;

use crate::diff::{self, DiffConfig, DiffOption, DiffSummary, GranularityMode, Segment};
use crate::subtitle_processor;

/// Which of the two texts an operation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Original text
    Left,
    /// Modified text
    Right,
}

/// Texts and options for one comparison
#[derive(Debug, Clone, Default)]
pub struct DiffSession {
    left_text: String,
    right_text: String,
    config: DiffConfig,
    granularity_override: Option<GranularityMode>,
}

impl DiffSession {
    pub fn new(config: DiffConfig) -> Self {
        DiffSession {
            config,
            ..Default::default()
        }
    }

    /// Create a session with both texts already filled in
    pub fn with_texts(left: impl Into<String>, right: impl Into<String>, config: DiffConfig) -> Self {
        DiffSession {
            left_text: left.into(),
            right_text: right.into(),
            config,
            granularity_override: None,
        }
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_text,
            Side::Right => &self.right_text,
        }
    }

    pub fn set_text(&mut self, side: Side, text: impl Into<String>) {
        *self.text_mut(side) = text.into();
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    pub fn toggle(&mut self, option: DiffOption) {
        self.config.toggle(option);
        debug!("Toggled {} -> {}", option, self.config.get(option));
    }

    /// Force a granularity instead of deriving it from `break_sentences`
    pub fn set_granularity_override(&mut self, mode: Option<GranularityMode>) {
        self.granularity_override = mode;
    }

    pub fn granularity(&self) -> GranularityMode {
        self.granularity_override
            .unwrap_or_else(|| GranularityMode::for_config(&self.config))
    }

    /// Replace one side with its SRT-stripped form
    pub fn strip_srt(&mut self, side: Side) {
        let stripped = subtitle_processor::strip_srt(self.text(side));
        self.set_text(side, stripped);
    }

    /// Replace one side with its one-sentence-per-paragraph form
    pub fn reformat(&mut self, side: Side) {
        let reformatted = subtitle_processor::reformat(self.text(side));
        self.set_text(side, reformatted);
    }

    /// Compute the diff for the current texts and options
    pub fn segments(&self) -> Vec<Segment> {
        diff::compare_with_mode(&self.left_text, &self.right_text, &self.config, self.granularity())
    }

    pub fn summary(&self) -> DiffSummary {
        DiffSummary::from_segments(&self.segments())
    }

    fn text_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::Left => &mut self.left_text,
            Side::Right => &mut self.right_text,
        }
    }
}
