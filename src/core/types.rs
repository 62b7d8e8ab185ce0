use serde::{Deserialize, Serialize};

/// Interest status used to select profiles in queries and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestStatus {
    /// Flagged by the matching engine
    OfInterest,
    /// Not (yet) flagged
    Unmarked,
}

impl InterestStatus {
    #[must_use]
    pub fn from_flag(of_interest: bool) -> Self {
        if of_interest {
            Self::OfInterest
        } else {
            Self::Unmarked
        }
    }
}

impl std::fmt::Display for InterestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OfInterest => write!(f, "of interest"),
            Self::Unmarked => write!(f, "unmarked"),
        }
    }
}

/// Order in which to walk the profile tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TraversalOrder {
    /// Breadth-first: root, then each level left to right
    #[default]
    Level,
    /// Sorted by name
    In,
}

/// Build the store key for a person: `"Last, First"`.
#[must_use]
pub fn full_name(first: &str, last: &str) -> String {
    format!("{last}, {first}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(full_name("John", "Doe"), "Doe, John");
    }

    #[test]
    fn test_interest_status_round_trip_flag() {
        assert_eq!(InterestStatus::from_flag(true), InterestStatus::OfInterest);
        assert_eq!(InterestStatus::from_flag(false), InterestStatus::Unmarked);
        assert_eq!(InterestStatus::Unmarked.to_string(), "unmarked");
    }
}
