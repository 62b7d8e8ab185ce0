//! Profile storage: a binary search tree keyed by full name.
//!
//! The store owns every profile through a tree of [`TreeNode`]s. Each node owns
//! its children exclusively, so there is no sharing and no parent pointer;
//! inserts and deletes rebuild links on the way back up the recursion.
//!
//! ## Example
//!
//! ```rust
//! use dna_profiler::catalog::store::{ProfileStore, UnknownSequences};
//! use dna_profiler::core::profile::Profile;
//! use dna_profiler::core::str_record::StrRecord;
//!
//! let mut store = ProfileStore::new(UnknownSequences::new("AGGTCCTACTG", "GGATAC"));
//! store
//!     .insert("Doe, John", Profile::new(vec![StrRecord::new("TAC", 2)]))
//!     .unwrap();
//!
//! assert_eq!(store.flag_profiles_of_interest(), 1);
//! assert_eq!(store.names_by_interest(true), vec!["Doe, John".to_string()]);
//! ```
//!
//! ## Snapshots
//!
//! A store can be exported to JSON and loaded back. Profiles are written in
//! level order, which makes the reloaded tree the same shape as the original.
//!
//! [`TreeNode`]: node::TreeNode

pub mod node;
pub mod store;
