use serde::{Deserialize, Serialize};

/// A short tandem repeat: the repeat unit and how many times it was observed
/// for a profile.
///
/// Records are immutable once built. The fields are private so a profile's
/// STR list cannot drift after it has been inserted into a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrRecord {
    unit: String,
    occurrences: u32,
}

impl StrRecord {
    pub fn new(unit: impl Into<String>, occurrences: u32) -> Self {
        Self {
            unit: unit.into(),
            occurrences,
        }
    }

    /// The repeat unit, e.g. `"AGAT"`
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Recorded number of occurrences across both unknown sequences
    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }
}

impl std::fmt::Display for StrRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.unit, self.occurrences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let record = StrRecord::new("AGAT", 3);
        assert_eq!(record.unit(), "AGAT");
        assert_eq!(record.occurrences(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(StrRecord::new("GG", 1).to_string(), "GGx1");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&StrRecord::new("TAC", 2)).unwrap();
        assert_eq!(json, r#"{"unit":"TAC","occurrences":2}"#);
    }
}
