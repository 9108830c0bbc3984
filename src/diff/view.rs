use serde::{Deserialize, Serialize};

use super::segment::Segment;

/// How a segment list is laid out for display
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Every segment in order, styled by classification
    #[default]
    Unified,
    /// Original and modified text in separate panes
    Split,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unified => write!(f, "unified"),
            Self::Split => write!(f, "split"),
        }
    }
}

pub fn unified(segments: &[Segment]) -> impl Iterator<Item = &Segment> {
    segments.iter()
}

/// Segments shown in the original pane (added ones are hidden)
pub fn left_pane(segments: &[Segment]) -> impl Iterator<Item = &Segment> {
    segments.iter().filter(|s| !s.is_added())
}

/// Segments shown in the modified pane (removed ones are hidden)
pub fn right_pane(segments: &[Segment]) -> impl Iterator<Item = &Segment> {
    segments.iter().filter(|s| !s.is_removed())
}
