//! RegexCortex - user-pattern scanning with safety rails
//!
//! Runs a single user-supplied pattern over a visible text block. Every
//! failure mode degrades instead of aborting: an invalid pattern yields no
//! results, a unicode compile failure falls back to ASCII mode, and a
//! pathological pattern is cut off at the match ceiling. Matchers are built
//! fresh per scan, so no cursor state survives between calls.

use regex::{Regex, RegexBuilder};

use crate::diagnostics::{ConsoleSink, DiagnosticsSink};
use crate::hints::generate_hint_labels;

use super::types::{HintKind, SourceHint};

/// Hard ceiling on accepted matches per scan
pub const MAX_MATCHES: usize = 10_000;

/// Compiled-program size limit for user-supplied patterns, in bytes. The
/// regex engine is linear-time, so program size is the resource that a
/// hostile pattern can actually inflate.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Longest accepted pattern source, in characters
const PATTERN_LENGTH_LIMIT: usize = 1_000;

// ==================== COLLABORATORS ====================

/// Pre-flight check for user-supplied patterns.
pub trait PatternValidator {
    /// Returns a human-readable problem description, or None when the
    /// pattern is safe to compile and run.
    fn validate(&self, pattern: &str) -> Option<String>;
}

/// Default validator: rejects empty, oversized and resource-hungry patterns.
#[derive(Debug, Default, Clone, Copy)]
pub struct SafePatternValidator;

impl PatternValidator for SafePatternValidator {
    fn validate(&self, pattern: &str) -> Option<String> {
        if pattern.trim().is_empty() {
            return Some("pattern is empty".to_string());
        }
        if pattern.chars().count() > PATTERN_LENGTH_LIMIT {
            return Some(format!("pattern longer than {} characters", PATTERN_LENGTH_LIMIT));
        }
        if let Err(e) = RegexBuilder::new(pattern)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
        {
            return Some(e.to_string());
        }
        None
    }
}

/// Maps a raw match index to the position an end user perceives once inline
/// formatting is rendered. Hosts with formatting-aware rendering supply
/// their own implementation.
pub trait IndexAdjuster {
    fn adjust(&self, text: &str, raw_index: usize, matched_text: &str) -> usize;
}

/// Identity adjuster for plain-text hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityAdjuster;

impl IndexAdjuster for IdentityAdjuster {
    fn adjust(&self, _text: &str, raw_index: usize, _matched_text: &str) -> usize {
        raw_index
    }
}

// ==================== MAIN IMPLEMENTATION ====================

/// RegexCortex - pattern match scanner
pub struct RegexCortex {
    validator: Box<dyn PatternValidator>,
    adjuster: Box<dyn IndexAdjuster>,
    diagnostics: Box<dyn DiagnosticsSink>,
}

impl RegexCortex {
    pub fn new() -> Self {
        Self {
            validator: Box::new(SafePatternValidator),
            adjuster: Box::new(IdentityAdjuster),
            diagnostics: Box::new(ConsoleSink),
        }
    }

    pub fn with_collaborators(
        validator: Box<dyn PatternValidator>,
        adjuster: Box<dyn IndexAdjuster>,
        diagnostics: Box<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            validator,
            adjuster,
            diagnostics,
        }
    }

    /// Find all matches of `pattern` in `text` and assign hint labels in
    /// position order.
    ///
    /// The captured text is the first capture group when it participates,
    /// otherwise the whole match. Raw indexes pass through the index
    /// adjuster before `offset` is added. Never panics and never returns an
    /// error: invalid input produces an empty result plus a diagnostic.
    pub fn find_matches(
        &self,
        text: &str,
        offset: usize,
        pattern: &str,
        alphabet: &str,
        case_sensitive: bool,
    ) -> Vec<SourceHint> {
        if let Some(problem) = self.validator.validate(pattern) {
            self.diagnostics
                .warn(&format!("Pattern validation failed: {}", problem));
            return Vec::new();
        }

        let regex = match compile_with_fallback(pattern, case_sensitive, self.diagnostics.as_ref())
        {
            Some(regex) => regex,
            None => return Vec::new(),
        };

        let mut matches: Vec<(usize, String)> = Vec::new();
        let mut pos = 0usize;
        let mut prev_end: Option<usize> = None;

        while pos <= text.len() {
            let caps = match regex.captures_at(text, pos) {
                Some(caps) => caps,
                None => break,
            };
            let whole = caps.get(0).unwrap();

            // A match that leaves the cursor where it already was would scan
            // forever; drop it and force one character of progress.
            if prev_end == Some(whole.end()) {
                pos = advance_one(text, whole.end());
                continue;
            }
            prev_end = Some(whole.end());
            pos = whole.end();

            if matches.len() == MAX_MATCHES {
                self.diagnostics.warn(&format!(
                    "Pattern matched more than {} times, stopping early",
                    MAX_MATCHES
                ));
                break;
            }

            let captured = caps.get(1).unwrap_or(whole);
            let adjusted = self.adjuster.adjust(text, whole.start(), captured.as_str());
            matches.push((adjusted + offset, captured.as_str().to_string()));
        }

        matches.sort_by_key(|(index, _)| *index);
        let labels = generate_hint_labels(alphabet, matches.len(), None);

        matches
            .into_iter()
            .zip(labels)
            .map(|((index, text), letter)| SourceHint {
                letter,
                index,
                kind: HintKind::Regex,
                text,
            })
            .collect()
    }
}

impl Default for RegexCortex {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== SHARED HELPERS ====================

/// Compile unicode-aware, falling back to an ASCII-mode program when the
/// pattern only compiles without unicode support. Both failures warn; a
/// double failure returns None.
pub(crate) fn compile_with_fallback(
    pattern: &str,
    case_sensitive: bool,
    diagnostics: &dyn DiagnosticsSink,
) -> Option<Regex> {
    let unicode = RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .unicode(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build();

    match unicode {
        Ok(regex) => Some(regex),
        Err(e) => {
            diagnostics.warn(&format!(
                "Unicode pattern compilation failed, falling back to ASCII mode: {}",
                e
            ));
            match RegexBuilder::new(pattern)
                .case_insensitive(!case_sensitive)
                .unicode(false)
                .size_limit(PATTERN_SIZE_LIMIT)
                .build()
            {
                Ok(regex) => Some(regex),
                Err(e) => {
                    diagnostics.warn(&format!("Pattern compilation failed: {}", e));
                    None
                }
            }
        }
    }
}

/// Next scan position one character past `index`, on a char boundary.
pub(crate) fn advance_one(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(index + 1, |c| index + c.len_utf8())
}

// ==================== TESTS ====================
