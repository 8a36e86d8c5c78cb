//! Validation of user-entered track fields.

use std::fmt;

use thiserror::Error;

use crate::config::LimitSettings;

/// Which text field of a new entry is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Artist,
    Genre,
}

impl Field {
    fn max_len(self, limits: &LimitSettings) -> usize {
        match self {
            Field::Title => limits.max_title_len,
            Field::Artist => limits.max_artist_len,
            Field::Genre => limits.max_genre_len,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "Title",
            Field::Artist => "Artist name",
            Field::Genre => "Genre",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("{field} cannot be empty. Please enter a valid value.")]
    Empty { field: Field },

    #[error("{field} cannot be longer than {max} characters.")]
    TooLong { field: Field, max: usize },

    #[error("Year should be a positive number. Please enter a valid year.")]
    InvalidYear { input: String },

    #[error("Year should be {min} or later.")]
    YearTooEarly { min: u32 },
}

/// Check a text field against the configured limits. Lengths count characters.
pub fn check_field(field: Field, value: &str, limits: &LimitSettings) -> Result<(), EntryError> {
    if value.is_empty() {
        return Err(EntryError::Empty { field });
    }
    let max = field.max_len(limits);
    if value.chars().count() > max {
        return Err(EntryError::TooLong { field, max });
    }
    Ok(())
}

/// Parse a release year, rejecting anything that is not a positive integer
/// at or after `limits.min_year`.
pub fn parse_year(input: &str, limits: &LimitSettings) -> Result<u32, EntryError> {
    let invalid = || EntryError::InvalidYear {
        input: input.to_string(),
    };
    let year: u32 = input.trim().parse().map_err(|_| invalid())?;
    if year == 0 {
        return Err(invalid());
    }
    if year < limits.min_year {
        return Err(EntryError::YearTooEarly {
            min: limits.min_year,
        });
    }
    Ok(year)
}

/// Parse a menu choice; anything unparsable is `None`.
pub fn parse_choice(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}
