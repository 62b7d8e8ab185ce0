/// Count non-overlapping occurrences of `needle` in `haystack`, scanning left
/// to right. Each match consumes its length before the next search starts, so
/// `"AA"` occurs twice in `"AAAA"`, not three times.
///
/// Returns 0 when `needle` is empty or longer than `haystack`.
///
/// # Examples
///
/// ```
/// use dna_profiler::matching::occurrences::count_occurrences;
///
/// assert_eq!(count_occurrences("AAAA", "AA"), 2);
/// assert_eq!(count_occurrences("GGATAC", "TAC"), 1);
/// assert_eq!(count_occurrences("AC", "ACGT"), 0);
/// ```
#[must_use]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }

    let mut count = 0;
    let mut start = 0;
    while let Some(offset) = haystack[start..].find(needle) {
        count += 1;
        start += offset + needle.len();
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_overlapping() {
        assert_eq!(count_occurrences("AAAA", "AA"), 2);
        assert_eq!(count_occurrences("AAAAA", "AA"), 2);
        assert_eq!(count_occurrences("ATATAT", "ATA"), 1);
    }

    #[test]
    fn test_simple_counts() {
        assert_eq!(count_occurrences("AGGTCCTACTG", "GG"), 1);
        assert_eq!(count_occurrences("AGGTCCTACTG", "CT"), 2);
        assert_eq!(count_occurrences("GGATAC", "GG"), 1);
        assert_eq!(count_occurrences("GGATAC", "CC"), 0);
    }

    #[test]
    fn test_match_at_end() {
        assert_eq!(count_occurrences("CCAGAT", "AGAT"), 1);
        assert_eq!(count_occurrences("AGAT", "AGAT"), 1);
    }

    #[test]
    fn test_degenerate_needles() {
        assert_eq!(count_occurrences("ACGT", ""), 0);
        assert_eq!(count_occurrences("", "A"), 0);
        assert_eq!(count_occurrences("AC", "ACG"), 0);
    }
}
