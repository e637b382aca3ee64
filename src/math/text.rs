//! Permissive numeric tokenizer shared by the text decoders.
//!
//! Any character other than an ASCII digit, `.` or `-` separates tokens, so
//! `"((1, 2), (3.5, -4))"` yields `["1", "2", "3.5", "-4"]`.

use crate::error::{ParseError, Result};

/// Splits `text` into numeric tokens.
#[must_use]
pub fn number_tokens(text: &str) -> Vec<&str> {
    text.split(|ch: char| !(ch.is_ascii_digit() || ch == '.' || ch == '-'))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parses a single token as `f64`.
///
/// # Errors
///
/// Returns `ParseError::InvalidNumber` if the token is not a valid float.
pub fn parse_number(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|source| {
        ParseError::InvalidNumber {
            token: token.to_owned(),
            source,
        }
        .into()
    })
}

/// Tokenizes `text` and parses exactly `N` leading numbers.
///
/// # Errors
///
/// Returns `ParseError::MissingComponent` if fewer than `N` tokens are present,
/// or `ParseError::InvalidNumber` if a token fails to parse.
pub fn parse_numbers<const N: usize>(text: &str) -> Result<[f64; N]> {
    let tokens = number_tokens(text);
    take_numbers(&tokens)
}

/// Parses the first `N` entries of `tokens`.
///
/// # Errors
///
/// Same as [`parse_numbers`].
pub fn take_numbers<const N: usize>(tokens: &[&str]) -> Result<[f64; N]> {
    if tokens.len() < N {
        return Err(ParseError::MissingComponent {
            expected: N,
            found: tokens.len(),
        }
        .into());
    }
    let mut values = [0.0; N];
    for (value, token) in values.iter_mut().zip(tokens) {
        *value = parse_number(token)?;
    }
    Ok(values)
}
