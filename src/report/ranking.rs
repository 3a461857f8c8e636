//! Deterministic ranking of a frequency map.

use crate::pipeline::artifacts::{FrequencyMap, RankedEntry};

/// Order every word of `freq` by count descending, then word ascending.
pub fn rank(freq: &FrequencyMap) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = freq
        .iter()
        .map(|(word, count)| RankedEntry::new(word, count))
        .collect();
    entries.sort_unstable();
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, u64)]) -> FrequencyMap {
        let mut freq = FrequencyMap::new();
        for (w, c) in pairs {
            assert!(freq.insert_count(w, *c));
        }
        freq
    }

    #[test]
    fn test_ties_broken_alphabetically() {
        let ranked = rank(&map(&[("sat", 1), ("cat", 1), ("mat", 1)]));
        let words: Vec<_> = ranked.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "mat", "sat"]);
    }

    #[test]
    fn test_count_descending() {
        let ranked = rank(&map(&[("c", 1), ("a", 3), ("b", 2)]));
        assert_eq!(
            ranked,
            vec![
                RankedEntry::new("a", 3),
                RankedEntry::new("b", 2),
                RankedEntry::new("c", 1),
            ]
        );
    }

    #[test]
    fn test_strict_total_order() {
        let ranked = rank(&map(&[
            ("zeta", 2),
            ("alpha", 2),
            ("beta", 7),
            ("gamma", 1),
            ("delta", 7),
        ]));
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.count > b.count || (a.count == b.count && a.word < b.word));
        }
    }

    #[test]
    fn test_empty_map() {
        assert!(rank(&FrequencyMap::new()).is_empty());
    }
}
