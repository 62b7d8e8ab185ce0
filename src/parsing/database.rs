use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::store::{CatalogError, ProfileStore, UnknownSequences};
use crate::core::profile::Profile;
use crate::core::str_record::StrRecord;
use crate::core::types::full_name;
use crate::utils::validation::{check_profile_limit, is_valid_dna, MAX_STRS_PER_PROFILE};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile database: {0}")]
    InvalidFormat(String),

    #[error("{0}")]
    TooManyProfiles(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse a profile database file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_database_file(path: &Path) -> Result<ProfileStore, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let store = parse_database_text(&content)?;
    info!("Loaded {} profiles from {}", store.len(), path.display());
    Ok(store)
}

/// Parse a profile database from text and build the store
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a header line is missing, a count is
/// not a number, a record is truncated, or tokens remain after the declared
/// number of people; `ParseError::TooManyProfiles` if the limit is exceeded;
/// or `ParseError::Catalog` if a name appears twice.
pub fn parse_database_text(text: &str) -> Result<ProfileStore, ParseError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    let (_, first) = header_line(&mut lines, "first unknown sequence")?;
    let (_, second) = header_line(&mut lines, "second unknown sequence")?;
    let (count_line, count) = header_line(&mut lines, "number of people")?;
    let people: usize = parse_number(count_line, count, "number of people")?;

    for (label, sequence) in [("First", first), ("Second", second)] {
        if !is_valid_dna(sequence) {
            warn!("{label} unknown sequence contains characters other than A, C, G, T, N");
        }
    }

    let mut store = ProfileStore::new(UnknownSequences::new(first, second));
    let mut tokens = lines.flat_map(|(n, line)| line.split_whitespace().map(move |t| (n, t)));

    for _ in 0..people {
        // Check profile limit for DOS protection
        if let Some(message) = check_profile_limit(store.len()) {
            return Err(ParseError::TooManyProfiles(message));
        }

        let (name, profile) = parse_record(&mut tokens)?;
        store.insert(name, profile)?;
    }

    if let Some((line_num, token)) = tokens.next() {
        return Err(ParseError::InvalidFormat(format!(
            "Unexpected '{token}' on line {line_num} after {people} profiles"
        )));
    }

    Ok(store)
}

/// Read one `first last count (unit occurrences)*` record
fn parse_record<'a, I>(tokens: &mut I) -> Result<(String, Profile), ParseError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let (_, first) = next_token(tokens, "first name")?;
    let (_, last) = next_token(tokens, "last name")?;
    let name = full_name(first, last);

    let (line_num, count) = next_token(tokens, "STR count")?;
    let str_count: usize = parse_number(line_num, count, "STR count")?;
    if str_count > MAX_STRS_PER_PROFILE {
        return Err(ParseError::InvalidFormat(format!(
            "{name} declares {str_count} STRs on line {line_num}, maximum is {MAX_STRS_PER_PROFILE}"
        )));
    }

    let mut strs = Vec::with_capacity(str_count);
    for _ in 0..str_count {
        let (_, unit) = next_token(tokens, "STR unit")?;
        let (line_num, occurrences) = next_token(tokens, "STR occurrences")?;
        let occurrences: u32 = parse_number(line_num, occurrences, "STR occurrences")?;

        if !is_valid_dna(unit) {
            warn!("STR '{unit}' for {name} on line {line_num} is not a DNA sequence");
        }
        strs.push(StrRecord::new(unit, occurrences));
    }

    Ok((name, Profile::new(strs)))
}

fn header_line<'a, I>(lines: &mut I, what: &str) -> Result<(usize, &'a str), ParseError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    lines
        .next()
        .ok_or_else(|| ParseError::InvalidFormat(format!("Missing {what} line")))
}

fn next_token<'a, I>(tokens: &mut I, what: &str) -> Result<(usize, &'a str), ParseError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    tokens.next().ok_or_else(|| {
        ParseError::InvalidFormat(format!("Unexpected end of input, expected {what}"))
    })
}

fn parse_number<T: std::str::FromStr>(
    line_num: usize,
    text: &str,
    what: &str,
) -> Result<T, ParseError> {
    text.parse().map_err(|_| {
        ParseError::InvalidFormat(format!("Invalid {what} on line {line_num}: '{text}'"))
    })
}
