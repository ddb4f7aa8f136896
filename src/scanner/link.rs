//! LinkCortex - Markdown link detection via Regex
//!
//! Detects four link syntaxes in a visible text block:
//! - Wiki links: [[Target]] or [[Target|Title]]
//! - External inline links: [Title](scheme://rest)
//! - Internal markdown links: [Title](../relative/path.md)
//! - Bare URLs: http:// or https:// tokens
//!
//! Detectors run in a fixed precedence order and feed one dedup-by-index
//! reducer: the first detector to claim a start position wins, so an inline
//! link with a scheme stays external instead of being re-detected as a bare
//! URL or a relative path.

use std::collections::HashSet;

use regex::Regex;

use crate::hints::generate_hint_labels;

use super::types::{DetectedLink, HintKind, SourceHint};

// ==================== MAIN IMPLEMENTATION ====================

/// LinkCortex - link syntax detector
///
/// All patterns are compiled once at construction and are read-only during
/// scans; a cortex can be reused across any number of scans.
pub struct LinkCortex {
    wiki_re: Regex,
    external_re: Regex,
    md_internal_re: Regex,
    url_re: Regex,
}

impl LinkCortex {
    pub fn new() -> Self {
        // [[Target]] or [[Target|Title]]
        // Group 1: target, Group 2: optional |Title tail
        let wiki_re = Regex::new(r"\[\[(.+?)(\|.+?)?\]\]").unwrap();

        // [Title](scheme://rest) - a scheme separator inside the parens
        // Group 1: full target including scheme
        let external_re = Regex::new(r"\[[^\[\]]+?\]\((.+?://.+?)\)").unwrap();

        // [Title](path) where path starts with .., a word char or a digit
        // Group 1: the path
        let md_internal_re = Regex::new(r"\[[^\[\]]+?\]\(((\.\.|\w|\d).+?)\)").unwrap();

        // Bare http(s) URL after start-of-text, a space or a newline
        // Group 2: the URL itself
        let url_re = Regex::new(r"( |\n|^)(https?://[^ \n]+)").unwrap();

        Self {
            wiki_re,
            external_re,
            md_internal_re,
            url_re,
        }
    }

    /// Detect all links in `text`, deduplicated by start position and sorted
    /// ascending. `offset` is added to every index so results land in
    /// document coordinates.
    pub fn detect(&self, text: &str, offset: usize) -> Vec<DetectedLink> {
        let mut candidates: Vec<DetectedLink> = Vec::new();

        // Pass 1: wiki links
        for cap in self.wiki_re.captures_iter(text) {
            let whole = cap.get(0).unwrap();
            let target = cap.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
            candidates.push(DetectedLink {
                index: whole.start() + offset,
                kind: HintKind::Internal,
                text: target.to_string(),
            });
        }

        // Pass 2: external inline links, before internal markdown so a
        // scheme-qualified target keeps the external kind
        for cap in self.external_re.captures_iter(text) {
            let whole = cap.get(0).unwrap();
            candidates.push(DetectedLink {
                index: whole.start() + offset,
                kind: HintKind::External,
                text: cap.get(1).unwrap().as_str().to_string(),
            });
        }

        // Pass 3: internal markdown links
        for cap in self.md_internal_re.captures_iter(text) {
            let whole = cap.get(0).unwrap();
            candidates.push(DetectedLink {
                index: whole.start() + offset,
                kind: HintKind::Internal,
                text: cap.get(1).unwrap().as_str().to_string(),
            });
        }

        // Pass 4: bare URLs. The index points at the URL itself, not the
        // delimiter the pattern consumed before it.
        for cap in self.url_re.captures_iter(text) {
            let url = cap.get(2).unwrap();
            candidates.push(DetectedLink {
                index: url.start() + offset,
                kind: HintKind::External,
                text: url.as_str().to_string(),
            });
        }

        // First pass to claim an index wins
        let mut taken: HashSet<usize> = HashSet::new();
        let mut links: Vec<DetectedLink> = candidates
            .into_iter()
            .filter(|link| taken.insert(link.index))
            .collect();

        links.sort_by_key(|link| link.index);
        links
    }

    /// Detect links and assign hint labels in position order. Links the
    /// allocator cannot label are dropped.
    pub fn detect_with_labels(&self, text: &str, offset: usize, alphabet: &str) -> Vec<SourceHint> {
        let links = self.detect(text, offset);
        let labels = generate_hint_labels(alphabet, links.len(), None);

        links
            .into_iter()
            .zip(labels)
            .map(|(link, letter)| SourceHint::new(letter, link))
            .collect()
    }
}

impl Default for LinkCortex {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== TESTS ====================
