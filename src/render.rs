use crate::diff::view::{left_pane, right_pane, unified};
use crate::diff::{ChangeKind, DiffSummary, Segment, TextStats, ViewMode};

// @module: Terminal rendering of diff results

const ANSI_RESET: &str = "\x1B[0m";
const ANSI_ADDED: &str = "\x1B[32m";
const ANSI_REMOVED: &str = "\x1B[31;9m";
const ANSI_UNCHANGED: &str = "\x1B[2m";
const ANSI_HEADER: &str = "\x1B[1m";

pub const NO_DIFFERENCES_MESSAGE: &str = "No differences found.";

/// Renders segments either with ANSI colors or with plain `[-removed-]`/`{+added+}` markers
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Renderer { color }
    }

    pub fn render(&self, segments: &[Segment], view: ViewMode) -> String {
        match view {
            ViewMode::Unified => self.render_unified(segments),
            ViewMode::Split => self.render_split(segments),
        }
    }

    pub fn render_unified(&self, segments: &[Segment]) -> String {
        self.render_segments(unified(segments))
    }

    /// Original pane followed by the modified pane
    pub fn render_split(&self, segments: &[Segment]) -> String {
        let mut output = String::new();
        output.push_str(&self.header("--- Original"));
        output.push_str(&self.render_segments(left_pane(segments)));
        output.push('\n');
        output.push_str(&self.header("+++ Modified"));
        output.push_str(&self.render_segments(right_pane(segments)));
        output
    }

    pub fn render_summary(&self, summary: &DiffSummary) -> String {
        if !summary.has_differences() {
            return format!("{}\n", NO_DIFFERENCES_MESSAGE);
        }

        let mut output = self.header(&format!(
            "Diff Summary ({} added, {} removed)",
            summary.added_count, summary.removed_count
        ));
        for item in &summary.items {
            let (sign, style) = match item.kind {
                ChangeKind::Added => ('+', ANSI_ADDED),
                _ => ('-', ANSI_REMOVED),
            };
            if self.color {
                output.push_str(&format!("{}{} {}{}\n", style, sign, item.text, ANSI_RESET));
            } else {
                output.push_str(&format!("{} {}\n", sign, item.text));
            }
        }
        output
    }

    /// Character and line counts of both inputs
    pub fn render_input_stats(&self, left: &TextStats, right: &TextStats) -> String {
        format!(
            "Original: {} chars, {} lines\nModified: {} chars, {} lines\n",
            left.chars, left.lines, right.chars, right.lines
        )
    }

    fn render_segments<'a>(&self, segments: impl Iterator<Item = &'a Segment>) -> String {
        let mut output = String::new();
        for segment in segments {
            self.push_segment(&mut output, segment);
        }
        output
    }

    fn push_segment(&self, output: &mut String, segment: &Segment) {
        if self.color {
            let style = match segment.kind {
                ChangeKind::Added => ANSI_ADDED,
                ChangeKind::Removed => ANSI_REMOVED,
                ChangeKind::Unchanged => ANSI_UNCHANGED,
            };
            output.push_str(style);
            output.push_str(&segment.content);
            output.push_str(ANSI_RESET);
            return;
        }

        match segment.kind {
            ChangeKind::Added => {
                output.push_str("{+");
                output.push_str(&segment.content);
                output.push_str("+}");
            }
            ChangeKind::Removed => {
                output.push_str("[-");
                output.push_str(&segment.content);
                output.push_str("-]");
            }
            ChangeKind::Unchanged => output.push_str(&segment.content),
        }
    }

    fn header(&self, title: &str) -> String {
        if self.color {
            format!("{}{}{}\n", ANSI_HEADER, title, ANSI_RESET)
        } else {
            format!("{}\n", title)
        }
    }
}
