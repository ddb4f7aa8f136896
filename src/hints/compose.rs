//! Shared label space across two candidate sources
//!
//! Live-preview surfaces detect rendered links host-side (out of reach of
//! the text scanners) and combine them with source-text candidates. Both
//! lists draw from a single allocator call so no label repeats across the
//! two sources and the shortest labels land on the preview targets, which
//! come first on screen.

use crate::scanner::types::{DetectedLink, SourceHint};

use super::labels::generate_hint_labels;

/// Assign one shared label sequence across `preview` and `source`
/// candidates, in that order. Candidates beyond the label space are dropped
/// from the tail of the combined list.
pub fn assign_shared_labels(
    preview: &[DetectedLink],
    source: &[DetectedLink],
    alphabet: &str,
) -> (Vec<SourceHint>, Vec<SourceHint>) {
    let labels = generate_hint_labels(alphabet, preview.len() + source.len(), None);

    let preview_hints = preview
        .iter()
        .zip(labels.iter())
        .map(|(link, letter)| SourceHint::new(letter.clone(), link.clone()))
        .collect();

    let source_hints = source
        .iter()
        .zip(labels.iter().skip(preview.len()))
        .map(|(link, letter)| SourceHint::new(letter.clone(), link.clone()))
        .collect();

    (preview_hints, source_hints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::types::HintKind;
    use std::collections::HashSet;

    fn link(index: usize) -> DetectedLink {
        DetectedLink {
            index,
            kind: HintKind::Internal,
            text: format!("target-{index}"),
        }
    }

    #[test]
    fn test_labels_continue_across_sources() {
        let preview = vec![link(0), link(5)];
        let source = vec![link(10), link(20)];
        let (p, s) = assign_shared_labels(&preview, &source, "sadf");

        assert_eq!(p.iter().map(|h| h.letter.as_str()).collect::<Vec<_>>(), ["s", "a"]);
        assert_eq!(s.iter().map(|h| h.letter.as_str()).collect::<Vec<_>>(), ["d", "f"]);
    }

    #[test]
    fn test_no_label_repeats_across_sources() {
        let preview: Vec<_> = (0..10).map(link).collect();
        let source: Vec<_> = (10..25).map(link).collect();
        let (p, s) = assign_shared_labels(&preview, &source, "sadfjkle");

        let mut seen = HashSet::new();
        for hint in p.iter().chain(s.iter()) {
            assert!(seen.insert(hint.letter.clone()), "duplicate label {}", hint.letter);
        }
    }

    #[test]
    fn test_overflow_drops_from_source_tail() {
        // "ab" caps at 4 labels; 2 preview + 4 source leaves 2 source hints
        let preview = vec![link(0), link(1)];
        let source: Vec<_> = (2..6).map(link).collect();
        let (p, s) = assign_shared_labels(&preview, &source, "ab");

        assert_eq!(p.len(), 2);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].index, 2);
        assert_eq!(s[1].index, 3);
    }

    #[test]
    fn test_empty_preview_matches_plain_allocation() {
        let source = vec![link(3), link(7)];
        let (p, s) = assign_shared_labels(&[], &source, "sadf");
        assert!(p.is_empty());
        assert_eq!(s.iter().map(|h| h.letter.as_str()).collect::<Vec<_>>(), ["s", "a"]);
    }
}
