//! Boundary validation for form submissions.
//!
//! These checks run in the application layer before an action is dispatched.
//! The store never calls them.

use crate::domain::error::{ListkeeperError, Result};
use crate::domain::item::ItemId;

/// Trims `raw` and rejects it if nothing is left.
///
/// # Errors
///
/// Returns [`ListkeeperError::Validation`] for empty or whitespace-only input.
///
/// # Examples
///
/// ```
/// use listkeeper::domain::validation::validate_name;
///
/// assert_eq!(validate_name("  Apple ").unwrap(), "Apple");
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ListkeeperError::Validation("name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Parses a decimal item id, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`ListkeeperError::Validation`] if the text is not an integer.
pub fn parse_id(raw: &str) -> Result<ItemId> {
    let trimmed = raw.trim();
    trimmed
        .parse::<ItemId>()
        .map_err(|e| ListkeeperError::Validation(format!("invalid id {trimmed:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        assert_eq!(validate_name("\tPear\n").unwrap(), "Pear");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(validate_name(""), Err(ListkeeperError::Validation(_))));
        assert!(matches!(validate_name("  "), Err(ListkeeperError::Validation(_))));
    }

    #[test]
    fn ids_parse_with_whitespace_and_sign() {
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert_eq!(parse_id("-3").unwrap(), -3);
    }

    #[test]
    fn garbage_ids_are_rejected() {
        assert!(matches!(parse_id("abc"), Err(ListkeeperError::Validation(_))));
        assert!(matches!(parse_id(""), Err(ListkeeperError::Validation(_))));
        assert!(matches!(parse_id("1.5"), Err(ListkeeperError::Validation(_))));
    }
}
