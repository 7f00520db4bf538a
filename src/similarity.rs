/// Fuzzy match score between two strings, from 0 (nothing in common) to 100 (identical).
///
/// The ratio is `2 * M / T` where `M` is the length of the longest common
/// subsequence and `T` the combined length, i.e. the normalized indel distance.
/// Comparison is per `char` and case-sensitive. Equal strings (both empty
/// included) score 100; otherwise an empty side scores 0. Halves round to even.
pub fn score(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = a.len() + b.len();
    let matches = lcs_len(&a, &b);
    let ratio = (2 * matches) as f64 / total as f64;

    (ratio * 100.0).round_ties_even() as u8
}

/// Length of the longest common subsequence, two-row dynamic programming
fn lcs_len(a: &[char], b: &[char]) -> usize {
    // Keep the shorter slice as the row to bound memory
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for lc in long {
        for (j, sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{PAGE_DESCRIPTION_ERROR, SERP_NOT_INDEXED};

    #[test]
    fn test_identical_strings() {
        for s in ["a", "Shoes", "Shoes | Store", "Ünïcödé ✓"] {
            assert_eq!(score(s, s), 100, "score({s:?}, {s:?})");
        }
    }

    #[test]
    fn test_nothing_in_common() {
        assert_eq!(score("abc", "xyz"), 0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(score("", ""), 100);
        assert_eq!(score("", "Shoes"), 0);
        assert_eq!(score("Shoes", ""), 0);
    }

    #[test]
    fn test_known_ratios() {
        // LCS "hllo" = 4, total 10
        assert_eq!(score("hello", "hallo"), 80);
        // LCS "Shoes" = 5, total 5 + 13
        assert_eq!(score("Shoes", "Shoes | Store"), 56);
        // LCS "ac" = 2, total 8
        assert_eq!(score("abc", "aXcYZ"), 50);
        // LCS "ittn" = 4, total 13 -> 61.5
        assert_eq!(score("kitten", "sitting"), 62);
    }

    #[test]
    fn test_halves_round_to_even() {
        // LCS 1, total 16 -> 12.5
        assert_eq!(score("a", "axxxxxxxxxxxxxx"), 12);
        // LCS 3, total 16 -> 37.5
        assert_eq!(score("abc", "abcxxxxxxxxxx"), 38);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(score("SHOES", "shoes"), 0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("Shoes | Store", "Buy shoes online"),
            ("kitten", "sitting"),
            ("", "x"),
            ("Running shoes for men", "Men's running shoes - Store"),
        ];
        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a), "score({a:?}, {b:?})");
        }
    }

    #[test]
    fn test_sentinel_against_content_is_low() {
        assert!(score(SERP_NOT_INDEXED, "Buy shoes") < 60);
        assert!(score(PAGE_DESCRIPTION_ERROR, "Buy shoes") < 60);
    }
}
