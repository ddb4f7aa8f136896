//! Shared result types for the scanning cortexes

use serde::{Deserialize, Serialize};

// ==================== TYPE DEFINITIONS ====================

/// Kind of navigation target a scanner detected
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    /// Wiki link or relative markdown link
    Internal,
    /// Scheme-qualified link or bare URL
    External,
    /// User-pattern match
    Regex,
    /// Flash incremental-search match
    Flash,
}

impl HintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HintKind::Internal => "internal",
            HintKind::External => "external",
            HintKind::Regex => "regex",
            HintKind::Flash => "flash",
        }
    }
}

/// A detected target without a hint label
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DetectedLink {
    /// Offset into the scanned document
    pub index: usize,
    pub kind: HintKind,
    /// The matched or captured substring
    pub text: String,
}

/// A detected target with its assigned hint label
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SourceHint {
    /// Label the user types to select this target; never empty
    pub letter: String,
    pub index: usize,
    pub kind: HintKind,
    pub text: String,
}

impl SourceHint {
    pub fn new(letter: String, link: DetectedLink) -> Self {
        Self {
            letter,
            index: link.index,
            kind: link.kind,
            text: link.text,
        }
    }
}

/// A flash-search match with its assigned hint label
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FlashMatch {
    /// Label the user types to jump here; never empty
    pub letter: String,
    /// Offset into the document (viewport start index already applied)
    pub index: usize,
    /// Byte length of the matched text in the document
    pub match_length: usize,
    pub kind: HintKind,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        let hint = SourceHint {
            letter: "s".to_string(),
            index: 4,
            kind: HintKind::Internal,
            text: "Note".to_string(),
        };
        let json = serde_json::to_string(&hint).unwrap();
        assert!(json.contains(r#""kind":"internal""#));
        assert_eq!(HintKind::Flash.as_str(), "flash");
    }
}
