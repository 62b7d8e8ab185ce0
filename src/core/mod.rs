//! Core data types for STR profile matching.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`StrRecord`]: A short tandem repeat unit with its observed occurrence count
//! - [`Profile`]: A person's ordered STR records plus the "of interest" flag
//! - [`InterestStatus`], [`TraversalOrder`]: Query and reporting helpers
//!
//! ## Naming
//!
//! Profiles are keyed by full name in `"Last, First"` form. Keys are compared
//! byte-wise, so `"Doe, Jane"` sorts before `"Doe, John"` and upper-case
//! letters sort before lower-case ones.
//!
//! [`StrRecord`]: str_record::StrRecord
//! [`Profile`]: profile::Profile
//! [`InterestStatus`]: types::InterestStatus
//! [`TraversalOrder`]: types::TraversalOrder

pub mod profile;
pub mod str_record;
pub mod types;
