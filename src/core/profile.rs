use serde::{Deserialize, Serialize};

use crate::core::str_record::StrRecord;

/// A genetic profile: the STRs recorded for one person and whether the
/// matching engine has marked them as a profile of interest.
///
/// The STR list keeps the order it was loaded in and is never modified after
/// construction. The flag is the only mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    strs: Vec<StrRecord>,

    #[serde(default)]
    of_interest: bool,
}

impl Profile {
    pub fn new(strs: Vec<StrRecord>) -> Self {
        Self {
            strs,
            of_interest: false,
        }
    }

    pub fn strs(&self) -> &[StrRecord] {
        &self.strs
    }

    pub fn is_of_interest(&self) -> bool {
        self.of_interest
    }

    /// Mark this profile as of interest. There is no way to clear the flag.
    pub fn mark_of_interest(&mut self) {
        self.of_interest = true;
    }

    #[cfg(test)]
    pub fn flagged(mut self) -> Self {
        self.of_interest = true;
        self
    }
}

impl FromIterator<StrRecord> for Profile {
    fn from_iter<I: IntoIterator<Item = StrRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_not_of_interest() {
        let profile = Profile::new(vec![StrRecord::new("GG", 1)]);
        assert!(!profile.is_of_interest());
        assert_eq!(profile.strs().len(), 1);
    }

    #[test]
    fn test_mark_of_interest() {
        let mut profile = Profile::new(Vec::new());
        profile.mark_of_interest();
        assert!(profile.is_of_interest());

        // Marking twice is harmless
        profile.mark_of_interest();
        assert!(profile.is_of_interest());
    }

    #[test]
    fn test_str_order_is_preserved() {
        let profile: Profile = [("TAC", 2), ("GG", 1), ("CC", 1)]
            .into_iter()
            .map(|(unit, n)| StrRecord::new(unit, n))
            .collect();

        let units: Vec<_> = profile.strs().iter().map(StrRecord::unit).collect();
        assert_eq!(units, vec!["TAC", "GG", "CC"]);
    }

    #[test]
    fn test_missing_flag_defaults_to_false() {
        let profile: Profile =
            serde_json::from_str(r#"{"strs":[{"unit":"GG","occurrences":1}]}"#).unwrap();
        assert!(!profile.is_of_interest());
    }
}
