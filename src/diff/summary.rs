use serde::{Deserialize, Serialize};

use super::segment::{ChangeKind, Segment};

/// Label shown for a change that is nothing but whitespace
pub const WHITESPACE_PLACEHOLDER: &str = "[Whitespace/Newline]";

/// One added or removed segment as listed in the summary
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub kind: ChangeKind,
    /// Trimmed segment text, or the whitespace placeholder
    pub text: String,
}

/// Overview of the changes in a segment list
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub items: Vec<SummaryItem>,
    pub added_count: usize,
    pub removed_count: usize,
    pub unchanged_count: usize,
}

impl DiffSummary {
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut summary = DiffSummary::default();

        for segment in segments {
            match segment.kind {
                ChangeKind::Added => summary.added_count += 1,
                ChangeKind::Removed => summary.removed_count += 1,
                ChangeKind::Unchanged => {
                    summary.unchanged_count += 1;
                    continue;
                }
            }

            let trimmed = segment.content.trim();
            let text = if trimmed.is_empty() {
                WHITESPACE_PLACEHOLDER.to_string()
            } else {
                trimmed.to_string()
            };
            summary.items.push(SummaryItem { kind: segment.kind, text });
        }

        summary
    }

    pub fn has_differences(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Size of one input as shown next to the comparison
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub chars: usize,
    /// Line-break count plus one, so empty text has one line
    pub lines: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        TextStats {
            chars: text.chars().count(),
            lines: text.split('\n').count(),
        }
    }
}
