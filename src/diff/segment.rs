use serde::{Deserialize, Serialize};
use similar::ChangeTag;

/// Classification of a diff segment
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Present only in the modified text
    Added,
    /// Present only in the original text
    Removed,
    /// Present in both texts
    Unchanged,
}

impl ChangeKind {
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

impl From<ChangeTag> for ChangeKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => Self::Unchanged,
            ChangeTag::Delete => Self::Removed,
            ChangeTag::Insert => Self::Added,
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Unchanged => "unchanged",
        };
        write!(f, "{}", name)
    }
}

/// One contiguous run of text tagged with a classification
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub kind: ChangeKind,
}

impl Segment {
    pub fn new(content: impl Into<String>, kind: ChangeKind) -> Self {
        Segment {
            content: content.into(),
            kind,
        }
    }

    pub fn added(content: impl Into<String>) -> Self {
        Self::new(content, ChangeKind::Added)
    }

    pub fn removed(content: impl Into<String>) -> Self {
        Self::new(content, ChangeKind::Removed)
    }

    pub fn unchanged(content: impl Into<String>) -> Self {
        Self::new(content, ChangeKind::Unchanged)
    }

    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }

    pub fn is_removed(&self) -> bool {
        self.kind == ChangeKind::Removed
    }

    pub fn is_unchanged(&self) -> bool {
        self.kind == ChangeKind::Unchanged
    }
}

/// Rebuild the original (left) text from unchanged and removed segments
pub fn reconstruct_original(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_added())
        .map(|s| s.content.as_str())
        .collect()
}

/// Rebuild the modified (right) text from unchanged and added segments
pub fn reconstruct_modified(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_removed())
        .map(|s| s.content.as_str())
        .collect()
}
