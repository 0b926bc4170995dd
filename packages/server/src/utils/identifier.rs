use std::fmt;

use thiserror::Error;

/// Highest national dex number currently known.
pub const MAX_POKEMON_ID: u32 = 1025;

/// Width the numeric part of a lookup key is zero-padded to.
const KEY_WIDTH: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("identifier '{0}' contains a non-digit character")]
    NotNumeric(String),
    #[error("identifier '{0}' is outside 0..=1025")]
    OutOfRange(String),
}

/// Canonical storage key for a dex number, e.g. `#0025`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey(String);

impl LookupKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates the raw `pokemon_id` parameter.
///
/// * parameter absent or blank => `Ok(None)` (show the search form)
/// * any non-digit character  => `Err(NotNumeric)`
/// * value above the known range => `Err(OutOfRange)`
/// * otherwise => `Ok(Some(key))`
///
/// Digit strings already four or more characters long are used as-is.
pub fn parse_identifier(raw: Option<&str>) -> Result<Option<LookupKey>, IdentifierError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdentifierError::NotNumeric(raw.to_string()));
    }

    // Every byte is a digit, so parsing can only fail on overflow.
    let value: u32 = raw
        .parse()
        .map_err(|_| IdentifierError::OutOfRange(raw.to_string()))?;
    if value > MAX_POKEMON_ID {
        return Err(IdentifierError::OutOfRange(raw.to_string()));
    }

    Ok(Some(LookupKey(format!("#{raw:0>KEY_WIDTH$}"))))
}
