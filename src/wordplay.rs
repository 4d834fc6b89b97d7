//! Derived orthographic keys: anagram, rhyme, letter count.
//!
//! All three key off [`crate::grapheme::canonical`], so diacritic markers
//! and punctuation never influence sorting or reversal.

use crate::grapheme::canonical;

/// Canonical anagram key: the word's canonical letters in sorted order.
/// Two words are anagrams exactly when their keys are equal.
pub fn anagram_key(s: &str) -> String {
    let mut letters: Vec<char> = canonical(s).chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Rhyme key: the canonical form read right to left, for rhyme-dictionary
/// ordering.
pub fn rhyme_key(s: &str) -> String {
    canonical(s).chars().rev().collect()
}

/// Number of letters in the canonical form.
pub fn letter_count(s: &str) -> usize {
    canonical(s).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anagram_key() {
        assert_eq!(anagram_key("listen"), "eilnst");
        assert_eq!(anagram_key("silent"), "eilnst");
        assert_eq!(anagram_key("enlist"), anagram_key("Listen"));
    }

    #[test]
    fn test_anagram_key_ignores_non_letters() {
        assert_eq!(anagram_key("ad-lib"), anagram_key("bilda"));
    }

    #[test]
    fn test_rhyme_key() {
        assert_eq!(rhyme_key("abandon"), "nodnaba");
        assert_eq!(rhyme_key("Ban-dit"), "tidnab");
    }

    #[test]
    fn test_letter_count() {
        assert_eq!(letter_count("abandon"), 7);
        assert_eq!(letter_count("ad hoc"), 5);
        assert_eq!(letter_count(""), 0);
    }
}
