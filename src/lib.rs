//! # dna-profiler
//!
//! A library for matching STR (short tandem repeat) profiles against two
//! unknown DNA sequences.
//!
//! Profiles are stored in a binary search tree keyed by `"Last, First"` name.
//! Each profile records how many times a set of repeat units should occur. The
//! matching engine counts every unit in both unknown sequences and flags the
//! profile as "of interest" when enough of its STRs agree with the sequences.
//! Profiles that are not flagged can then be pruned from the tree.
//!
//! ## Features
//!
//! - **Name-ordered store**: Insert, delete (with in-order successor splicing),
//!   level-order and in-order traversal
//! - **Corroboration rule**: At least half of a profile's STRs, rounded up,
//!   must match
//! - **Non-overlapping counting**: `"AA"` occurs twice in `"AAAA"`
//! - **Snapshots**: JSON export and import that preserve tree shape and flags
//!
//! ## Example
//!
//! ```rust
//! use dna_profiler::parsing::database::parse_database_text;
//!
//! let text = "AGGTCCTACTG\nGGATAC\n2\nJohn Doe 3 GG 1 TAC 2 CC 1\nWei Zhang 1 AC 4\n";
//! let mut store = parse_database_text(text).unwrap();
//!
//! store.flag_profiles_of_interest();
//! assert_eq!(store.names_by_interest(true), vec!["Doe, John".to_string()]);
//!
//! let removed = store.cleanup_tree();
//! assert_eq!(removed, vec!["Zhang, Wei".to_string()]);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The profile tree and its operations
//! - [`core`]: STR records, profiles, and shared types
//! - [`matching`]: Occurrence counting and the matching engine
//! - [`parsing`]: Profile database loader
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{ProfileStore, UnknownSequences};
pub use core::profile::Profile;
pub use core::str_record::StrRecord;
pub use matching::engine::{MatchingEngine, ProfileEvaluation};
