//! FlashCortex - incremental literal search over the visible viewport
//!
//! Called anew on every keystroke of a live search string. The search string
//! is matched literally (escaped before compilation). Labels are allocated
//! with the "next character" exclusion set applied: any non-whitespace
//! character that immediately follows a match could be the user's next
//! search keystroke, so no hint label may start with it. The exclusion set
//! is computed over every match found, including matches the visibility
//! filter later discards, since an off-screen match can still be extended by
//! typing even though the user never saw a label for it.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::HopSettings;
use crate::diagnostics::{ConsoleSink, DiagnosticsSink};
use crate::hints::generate_hint_labels;

use super::pattern::{advance_one, compile_with_fallback};
use super::types::{FlashMatch, HintKind};
use super::visible::{VisibleContent, VisibleContentSource};

// ==================== MAIN IMPLEMENTATION ====================

/// FlashCortex - incremental match finder bound to a viewport source
pub struct FlashCortex<S: VisibleContentSource> {
    source: S,
    settings: HopSettings,
    diagnostics: Box<dyn DiagnosticsSink>,
}

impl<S: VisibleContentSource> FlashCortex<S> {
    pub fn new(source: S, settings: HopSettings) -> Self {
        Self {
            source,
            settings,
            diagnostics: Box::new(ConsoleSink),
        }
    }

    pub fn with_sink(source: S, settings: HopSettings, diagnostics: Box<dyn DiagnosticsSink>) -> Self {
        Self {
            source,
            settings,
            diagnostics,
        }
    }

    /// Find all labelled matches for the current search string against the
    /// viewport as it is right now.
    pub fn find_matches(&self, search_string: &str) -> Vec<FlashMatch> {
        let visible = self.source.visible_content();
        find_flash_matches(
            search_string,
            &visible,
            &self.settings.letters,
            self.settings.flash_case_sensitive,
            self.diagnostics.as_ref(),
        )
    }
}

/// Core flash matching over an already-extracted viewport.
pub fn find_flash_matches(
    search_string: &str,
    visible: &VisibleContent,
    letters: &str,
    case_sensitive: bool,
    diagnostics: &dyn DiagnosticsSink,
) -> Vec<FlashMatch> {
    if search_string.is_empty() || visible.text.is_empty() {
        return Vec::new();
    }

    // Literal search: escape before compiling
    let escaped = regex::escape(search_string);
    let regex = match compile_with_fallback(&escaped, case_sensitive, diagnostics) {
        Some(regex) => regex,
        None => return Vec::new(),
    };

    let text = visible.text.as_str();
    // (document index, byte length, matched text)
    let mut found: Vec<(usize, usize, String)> = Vec::new();
    let mut next_chars: HashSet<char> = HashSet::new();
    let mut pos = 0usize;
    let mut prev_end: Option<usize> = None;

    while pos <= text.len() {
        let m = match regex.find_at(text, pos) {
            Some(m) => m,
            None => break,
        };

        // Same forced-advance guard as the pattern scanner
        if prev_end == Some(m.end()) {
            pos = advance_one(text, m.end());
            continue;
        }
        prev_end = Some(m.end());
        pos = m.end();

        found.push((
            m.start() + visible.start_index,
            m.end() - m.start(),
            m.as_str().to_string(),
        ));

        // The grapheme right after the match feeds the exclusion set;
        // whitespace never excludes anything.
        if let Some(grapheme) = text[m.end()..].graphemes(true).next() {
            let lowered = grapheme.to_lowercase();
            if !lowered.trim().is_empty() {
                next_chars.extend(lowered.chars());
            }
        }
    }

    // The viewport may extend past the literally visible region. Labels only
    // go to matches inside a visible range, but the exclusion set above was
    // built from every match found.
    let visible_matches: Vec<(usize, usize, String)> = found
        .into_iter()
        .filter(|(index, _, _)| visible.visible_ranges.iter().any(|r| r.contains(*index)))
        .collect();

    let labels = generate_hint_labels(letters, visible_matches.len(), Some(&next_chars));

    visible_matches
        .into_iter()
        .zip(labels)
        .map(|((index, match_length, text), letter)| FlashMatch {
            letter,
            index,
            match_length,
            kind: HintKind::Flash,
            text,
        })
        .collect()
}

// ==================== TESTS ====================
