//! Centralized validation and helper functions.

/// Maximum number of profiles allowed in a single database (DOS protection)
pub const MAX_PROFILES: usize = 1_000_000;

/// Maximum number of STRs allowed for a single profile
pub const MAX_STRS_PER_PROFILE: usize = 10_000;

/// Maximum height of the profile tree.
///
/// Insert, remove and drop recurse along a single root-to-leaf path, so this
/// bounds their stack use. Names arriving in sorted order produce a chain and
/// reach the limit first.
pub const MAX_TREE_HEIGHT: usize = 4_096;

/// Check whether a sequence only uses nucleotide codes (`A`, `C`, `G`, `T`, `N`).
///
/// Comparison is case-sensitive because substring counting is.
///
/// # Examples
///
/// ```
/// use dna_profiler::utils::validation::is_valid_dna;
///
/// assert!(is_valid_dna("AGGTCCTACTG"));
/// assert!(!is_valid_dna("AGGT CC"));
/// assert!(!is_valid_dna("aggt"));
/// ```
#[must_use]
pub fn is_valid_dna(s: &str) -> bool {
    s.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T' | b'N'))
}

/// Check if adding another profile would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new profile.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_profile_limit(count: usize) -> Option<String> {
    if count >= MAX_PROFILES {
        Some(format!(
            "Too many profiles: adding another would exceed maximum of {MAX_PROFILES}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_dna() {
        assert!(is_valid_dna(""));
        assert!(is_valid_dna("ACGTN"));
        assert!(!is_valid_dna("ACGU"));
    }

    #[test]
    fn test_check_profile_limit() {
        assert!(check_profile_limit(0).is_none());
        assert!(check_profile_limit(MAX_PROFILES - 1).is_none());
        let message = check_profile_limit(MAX_PROFILES).unwrap();
        assert!(message.contains(&MAX_PROFILES.to_string()));
    }
}
