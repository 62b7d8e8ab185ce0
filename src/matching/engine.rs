use serde::Serialize;

use crate::catalog::store::UnknownSequences;
use crate::core::profile::Profile;
use crate::core::str_record::StrRecord;
use crate::matching::occurrences::count_occurrences;

/// How one STR compared against the unknown sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrMatch {
    pub unit: String,
    /// Occurrences recorded in the profile
    pub expected: u32,
    /// Occurrences found in the first unknown sequence
    pub first: usize,
    /// Occurrences found in the second unknown sequence
    pub second: usize,
}

impl StrMatch {
    /// Combined count across both sequences
    pub fn observed(&self) -> usize {
        self.first + self.second
    }

    pub fn corroborates(&self) -> bool {
        usize::try_from(self.expected).is_ok_and(|expected| expected == self.observed())
    }
}

/// Result of evaluating a profile against the unknown sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileEvaluation {
    /// STRs whose combined count matched the recorded occurrences
    pub corroborated: usize,

    /// Corroborating STRs needed: half the total, rounded up
    pub required: usize,

    /// Total STRs in the profile
    pub total: usize,

    /// Per-STR detail, in profile order
    pub strs: Vec<StrMatch>,
}

impl ProfileEvaluation {
    pub fn is_of_interest(&self) -> bool {
        self.corroborated >= self.required
    }
}

/// Number of corroborating STRs a profile with `total` STRs needs
#[must_use]
pub fn required_matches(total: usize) -> usize {
    total.div_ceil(2)
}

/// Applies the corroboration rule against a fixed pair of unknown sequences
pub struct MatchingEngine<'a> {
    unknowns: &'a UnknownSequences,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(unknowns: &'a UnknownSequences) -> Self {
        Self { unknowns }
    }

    /// Compare a single STR against both sequences
    pub fn match_str(&self, record: &StrRecord) -> StrMatch {
        StrMatch {
            unit: record.unit().to_string(),
            expected: record.occurrences(),
            first: count_occurrences(self.unknowns.first(), record.unit()),
            second: count_occurrences(self.unknowns.second(), record.unit()),
        }
    }

    /// Evaluate a profile without modifying it
    pub fn evaluate(&self, profile: &Profile) -> ProfileEvaluation {
        let strs: Vec<StrMatch> = profile.strs().iter().map(|s| self.match_str(s)).collect();
        let corroborated = strs.iter().filter(|m| m.corroborates()).count();
        let total = strs.len();

        ProfileEvaluation {
            corroborated,
            required: required_matches(total),
            total,
            strs,
        }
    }

    /// Whether a profile satisfies the corroboration rule
    pub fn is_of_interest(&self, profile: &Profile) -> bool {
        let corroborated = profile
            .strs()
            .iter()
            .filter(|s| self.match_str(s).corroborates())
            .count();
        corroborated >= required_matches(profile.strs().len())
    }

    /// Flag `profile` if it satisfies the rule. Never clears an existing flag.
    ///
    /// Returns true if this call changed the flag.
    pub fn flag(&self, profile: &mut Profile) -> bool {
        if profile.is_of_interest() || !self.is_of_interest(profile) {
            return false;
        }
        profile.mark_of_interest();
        true
    }
}
