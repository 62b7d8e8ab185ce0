//! Parsers for profile databases.
//!
//! The text database format is line-oriented for its header and
//! whitespace-tokenised for the profile records that follow:
//!
//! ```text
//! AGGTCCTACTG          <- first unknown sequence
//! GGATAC               <- second unknown sequence
//! 2                    <- number of people
//! John Doe 3 GG 1 TAC 2 CC 1
//! Kim Lee 2
//! AG 1
//! GT 1
//! ```
//!
//! Each record is a first name, a last name, the number of STRs, and that many
//! `(unit, occurrences)` pairs. The profile is stored under `"Last, First"`.
//!
//! ## Example
//!
//! ```rust
//! use dna_profiler::parsing::database::parse_database_text;
//!
//! let store = parse_database_text("AGG\nGGA\n1\nJohn Doe 1 GG 2\n").unwrap();
//! assert!(store.contains("Doe, John"));
//! ```

pub mod database;

pub use database::ParseError;
