//! Frequency normalization helpers.

/// Zipf scale of a token frequency against a corpus size:
/// `log10(count) - log10(total) + 9`, or 0 for unattested tokens.
///
/// The `+ 9` adjustment matches the published SUBTLEX-UK reference values
/// (the paper states `+ 3`, which does not reproduce its own table).
pub fn zipf_scale(count: u64, total: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (count as f64).log10() - (total as f64).log10() + 9.0
}

/// Occurrences per million tokens, rounded to two decimals.
pub fn per_million(count: u64, total: u64) -> f64 {
    (count as f64 * 1_000_000.0 / total as f64 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zipf_scale_unattested() {
        assert_eq!(zipf_scale(0, 1_000_000), 0.0);
    }

    #[test]
    fn test_zipf_scale_once_per_million() {
        // One occurrence per million tokens sits at Zipf 3.
        assert!((zipf_scale(1, 1_000_000) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zipf_scale_monotone() {
        assert!(zipf_scale(100, 1_000_000) > zipf_scale(10, 1_000_000));
    }

    #[test]
    fn test_per_million() {
        assert_eq!(per_million(5, 1_000_000), 5.0);
        assert_eq!(per_million(1, 3_000_000), 0.33);
    }
}
