//! Parsing of the integer sequence supplied on the command line.
use thiserror::Error;

/// Sample sequence used when no values are given.
pub const DEFAULT_VALUES: [i64; 3] = [1, 2, 3];

/// Largest sequence accepted; the listing holds `2^n` lines.
pub const MAX_ELEMENTS: usize = 20;

/// Input rejected before generation begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid integer: {token:?}")]
    InvalidInteger { token: String },

    #[error("too many elements: {count} > {max}")]
    TooManyElements { count: usize, max: usize },
}

/// Parse raw arguments into an integer sequence.
///
/// Each argument may hold one integer or several separated by commas and/or
/// whitespace, so `["1", "2,3"]` and `["1 2 3"]` both give `[1, 2, 3]`. Empty
/// tokens are skipped.
///
/// # Errors
/// `InvalidInteger` for the first token that is not an `i64`, and
/// `TooManyElements` when more than [`MAX_ELEMENTS`] values remain.
pub fn parse_values(raw: &[String]) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::new();
    for arg in raw {
        for token in arg
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let v = token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                token: token.to_string(),
            })?;
            values.push(v);
        }
    }

    if values.len() > MAX_ELEMENTS {
        return Err(InputError::TooManyElements {
            count: values.len(),
            max: MAX_ELEMENTS,
        });
    }
    Ok(values)
}
