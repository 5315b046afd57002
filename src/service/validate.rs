//! Input rules applied before anything reaches the store.

use thiserror::Error;

use crate::types::QuoteId;

/// Longest accepted quote text, in characters.
pub const MAX_QUOTE_CHARS: usize = 500;
/// Shortest accepted author name, in characters.
pub const MIN_AUTHOR_CHARS: usize = 2;
/// Longest accepted author name, in characters.
pub const MAX_AUTHOR_CHARS: usize = 100;

/// Rejected caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Quote text is blank.
    #[error("quote text cannot be empty")]
    EmptyText,
    /// Quote text exceeds [`MAX_QUOTE_CHARS`].
    #[error("quote text is too long (maximum {} characters)", MAX_QUOTE_CHARS)]
    TextTooLong,
    /// Author name is blank.
    #[error("author name cannot be empty")]
    EmptyAuthor,
    /// Author name is shorter than [`MIN_AUTHOR_CHARS`].
    #[error("author name is too short (minimum {} characters)", MIN_AUTHOR_CHARS)]
    AuthorTooShort,
    /// Author name exceeds [`MAX_AUTHOR_CHARS`].
    #[error("author name is too long (maximum {} characters)", MAX_AUTHOR_CHARS)]
    AuthorTooLong,
    /// Author name starts or ends with a hyphen.
    #[error("author name cannot start or end with a hyphen")]
    AuthorHyphenEdge,
    /// Author name contains something other than letters, whitespace or `-`.
    #[error("author name `{name}` contains an invalid character '{ch}'")]
    AuthorInvalidChar {
        /// Offending (trimmed) name.
        name: String,
        /// First rejected character.
        ch: char,
    },
    /// Quote id is missing, zero or not a number.
    #[error("invalid quote id `{0}`")]
    InvalidQuoteId(String),
}

/// Validates a quote submission and returns the trimmed `(author, text)`.
pub fn validate_quote<'a>(
    author_name: &'a str,
    text: &'a str,
) -> Result<(&'a str, &'a str), ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if text.chars().count() > MAX_QUOTE_CHARS {
        return Err(ValidationError::TextTooLong);
    }
    let author_name = validate_author(author_name)?;
    Ok((author_name, text))
}

/// Validates an author name and returns it trimmed.
pub fn validate_author(author_name: &str) -> Result<&str, ValidationError> {
    let name = author_name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthor);
    }

    let len = name.chars().count();
    if len < MIN_AUTHOR_CHARS {
        return Err(ValidationError::AuthorTooShort);
    }
    if len > MAX_AUTHOR_CHARS {
        return Err(ValidationError::AuthorTooLong);
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(ValidationError::AuthorHyphenEdge);
    }

    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_alphabetic() || c.is_whitespace() || *c == '-'))
    {
        return Err(ValidationError::AuthorInvalidChar {
            name: name.to_string(),
            ch,
        });
    }

    Ok(name)
}

/// Parses a positive quote id from a path segment.
pub fn parse_quote_id(raw: &str) -> Result<QuoteId, ValidationError> {
    match raw.trim().parse::<QuoteId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidQuoteId(raw.to_string())),
    }
}
