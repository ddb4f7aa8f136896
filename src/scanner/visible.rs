//! Viewport contract supplied by the host surface
//!
//! The host extracts visible text and hands it over together with its
//! document offset. The extracted span may exceed the literally on-screen
//! region (scroll prefetch buffer), so the truly visible subset is described
//! separately as a list of document ranges.

use serde::{Deserialize, Serialize};

/// Half-open document range `[from, to)` considered on-screen
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRange {
    pub from: usize,
    pub to: usize,
}

impl VisibleRange {
    pub fn contains(&self, index: usize) -> bool {
        index >= self.from && index < self.to
    }
}

/// Text block extracted from the viewport
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VisibleContent {
    /// Document offset of the first character of `text`
    pub start_index: usize,
    pub text: String,
    /// Truly visible subranges, in document coordinates
    #[serde(default)]
    pub visible_ranges: Vec<VisibleRange>,
}

impl VisibleContent {
    /// Single-range content treating the whole text as visible
    pub fn spanning(start_index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let range = VisibleRange {
            from: start_index,
            to: start_index + text.len(),
        };
        Self {
            start_index,
            text,
            visible_ranges: vec![range],
        }
    }
}

/// Collaborator that reads the viewport at call time (an editor surface, a
/// test fixture). Each call may return a different span as the user scrolls.
pub trait VisibleContentSource {
    fn visible_content(&self) -> VisibleContent;
}
