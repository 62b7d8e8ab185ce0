//! STR matching against the two unknown sequences.
//!
//! This module provides the matching functionality:
//!
//! - [`count_occurrences`]: Non-overlapping substring counting
//! - [`MatchingEngine`]: Applies the corroboration rule to profiles
//! - [`ProfileEvaluation`]: Per-profile breakdown of which STRs corroborate
//!
//! ## Corroboration Rule
//!
//! For each STR of a profile, the repeat unit is counted in both unknown
//! sequences. The STR corroborates the profile when the combined count equals
//! the recorded occurrences. A profile is of interest when at least
//! `ceil(total / 2)` of its STRs corroborate; with zero STRs that threshold is
//! zero, so such a profile is always of interest.
//!
//! [`count_occurrences`]: occurrences::count_occurrences
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`ProfileEvaluation`]: engine::ProfileEvaluation

pub mod engine;
pub mod occurrences;

pub use engine::{MatchingEngine, ProfileEvaluation};
