//! Hint label allocation
//!
//! Turns (alphabet, count, exclusions) into an ordered list of unique short
//! labels: single letters first, then two-letter sequences built from
//! reserved prefix letters. Downstream callers zip the returned labels
//! against candidates sorted by on-screen position, so the ordering here is
//! load-bearing: earliest candidates get the shortest, earliest labels.

use std::collections::HashSet;

/// Generate hint labels from an alphabet.
///
/// The alphabet is lowercased before use; its order decides which letters
/// are preferred for single-letter labels and which get reserved as
/// two-letter prefixes once `count` outgrows the alphabet. A letter reserved
/// as a prefix never stands alone, since it always needs a second character
/// to stay unambiguous.
///
/// `excluded` removes characters from the alphabet (e.g. characters that
/// would extend a flash search) on a best-effort basis: if exclusion would
/// empty the alphabet, the exclusion set is ignored entirely.
///
/// Returns up to `count` labels; fewer when the label space runs out.
/// Callers must drop the candidates left without a label.
pub fn generate_hint_labels(
    alphabet: &str,
    count: usize,
    excluded: Option<&HashSet<char>>,
) -> Vec<String> {
    let lowered: Vec<char> = alphabet.to_lowercase().chars().collect();

    let mut letters: Vec<char> = match excluded {
        Some(set) if !set.is_empty() => {
            lowered.iter().copied().filter(|c| !set.contains(c)).collect()
        }
        _ => lowered.clone(),
    };

    // All letters excluded: exclusion is best-effort, fall back to the full
    // alphabet rather than allocating nothing.
    if letters.is_empty() {
        letters = lowered;
    }

    let n = letters.len();
    if n == 0 {
        return Vec::new();
    }

    // How many letters must serve as two-letter prefixes to reach `count`.
    // A one-letter alphabet has no free letters once a prefix is needed, so
    // its capacity caps at a single label.
    let needed_prefixes = if count <= n {
        0
    } else if n == 1 {
        1
    } else {
        ((count - n) + (n - 2)) / (n - 1)
    };
    let prefix_count = needed_prefixes.min(n);

    let prefixes = &letters[..prefix_count];

    let mut labels: Vec<String> = Vec::with_capacity(count.min(label_capacity(n)));
    'tiers: for tier in 0..=prefix_count {
        for &letter in &letters {
            if labels.len() >= count {
                break 'tiers;
            }
            if tier == 0 {
                // Bare letters, skipping any letter reserved as a prefix
                if !prefixes.contains(&letter) {
                    labels.push(letter.to_string());
                }
            } else {
                let mut label = String::with_capacity(2);
                label.push(prefixes[tier - 1]);
                label.push(letter);
                labels.push(label);
            }
        }
    }

    labels
}

/// Largest number of labels any call can produce for an alphabet of the
/// given length: every letter reserved as a prefix yields `A` two-letter
/// labels, so capacity is `A * A` (1 for the degenerate one-letter alphabet).
pub fn label_capacity(alphabet_len: usize) -> usize {
    match alphabet_len {
        0 => 0,
        1 => 1,
        n => n * n,
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "sadfjklewcmpgh";

    #[test]
    fn test_zero_count() {
        assert!(generate_hint_labels(ALPHABET, 0, None).is_empty());
    }

    #[test]
    fn test_single_letters_in_alphabet_order() {
        let labels = generate_hint_labels(ALPHABET, 4, None);
        assert_eq!(labels, vec!["s", "a", "d", "f"]);
    }

    #[test]
    fn test_count_equal_to_alphabet_uses_no_prefixes() {
        let labels = generate_hint_labels(ALPHABET, 14, None);
        assert_eq!(labels.len(), 14);
        assert!(labels.iter().all(|l| l.len() == 1));
    }

    #[test]
    fn test_prefix_letters_never_stand_alone() {
        // 20 labels over 14 letters needs one prefix letter ('s')
        let labels = generate_hint_labels(ALPHABET, 20, None);
        assert_eq!(labels.len(), 20);
        assert!(!labels.contains(&"s".to_string()));
        // 13 bare letters, then s-prefixed pairs in alphabet order
        assert_eq!(labels[0], "a");
        assert_eq!(labels[12], "h");
        assert_eq!(labels[13], "ss");
        assert_eq!(labels[14], "sa");
    }

    #[test]
    fn test_singles_precede_doubles() {
        let labels = generate_hint_labels(ALPHABET, 40, None);
        let first_double = labels.iter().position(|l| l.len() == 2).unwrap();
        assert!(labels[..first_double].iter().all(|l| l.len() == 1));
        assert!(labels[first_double..].iter().all(|l| l.len() == 2));
    }

    #[test]
    fn test_labels_are_pairwise_distinct() {
        let labels = generate_hint_labels(ALPHABET, 180, None);
        let unique: HashSet<&String> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn test_capacity_exhaustion_returns_fewer() {
        // "ab" caps at 4 labels: aa, ab, ba, bb
        let labels = generate_hint_labels("ab", 10, None);
        assert_eq!(labels, vec!["aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_exact_capacity_for_large_counts() {
        for len in 2..6 {
            let alphabet: String = "sadfjk".chars().take(len).collect();
            let labels = generate_hint_labels(&alphabet, 10_000, None);
            assert_eq!(labels.len(), label_capacity(len));
        }
    }

    #[test]
    fn test_alphabet_is_lowercased() {
        let labels = generate_hint_labels("SAD", 3, None);
        assert_eq!(labels, vec!["s", "a", "d"]);
    }

    #[test]
    fn test_exclusion_removes_letters() {
        let excluded: HashSet<char> = ['s', 'a'].into_iter().collect();
        let labels = generate_hint_labels(ALPHABET, 3, Some(&excluded));
        assert_eq!(labels, vec!["d", "f", "j"]);
    }

    #[test]
    fn test_full_exclusion_falls_back_to_original_alphabet() {
        let excluded: HashSet<char> = "sad".chars().collect();
        let with = generate_hint_labels("sad", 5, Some(&excluded));
        let without = generate_hint_labels("sad", 5, None);
        assert_eq!(with, without);
    }

    #[test]
    fn test_empty_exclusion_set_is_ignored() {
        let excluded = HashSet::new();
        assert_eq!(
            generate_hint_labels(ALPHABET, 5, Some(&excluded)),
            generate_hint_labels(ALPHABET, 5, None)
        );
    }

    #[test]
    fn test_degenerate_single_letter_alphabet() {
        assert_eq!(generate_hint_labels("x", 1, None), vec!["x"]);
        // Once a prefix is needed, the only letter stops standing alone and
        // the whole space collapses to one two-letter label.
        assert_eq!(generate_hint_labels("x", 2, None), vec!["xx"]);
        assert_eq!(generate_hint_labels("x", 100, None), vec!["xx"]);
    }

    #[test]
    fn test_empty_alphabet() {
        assert!(generate_hint_labels("", 5, None).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let a = generate_hint_labels(ALPHABET, 50, None);
        let b = generate_hint_labels(ALPHABET, 50, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_capacity_values() {
        assert_eq!(label_capacity(0), 0);
        assert_eq!(label_capacity(1), 1);
        assert_eq!(label_capacity(2), 4);
        assert_eq!(label_capacity(14), 196);
    }
}
