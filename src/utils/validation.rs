//! Input validation for user-submitted fields

use crate::utils::error::{PortalError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// Absolute http(s) URL or a site-relative path
static LINK_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^(https?://[^\s/]+\S*|/\S*)$").ok());

/// Field validators shared by the mutation services
pub struct InputValidator;

impl InputValidator {
    /// Require a non-blank field and return it trimmed
    pub fn required(value: &str, field: &str) -> Result<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PortalError::validation(format!("{} is required", field)));
        }
        Ok(trimmed.to_string())
    }

    /// Like [`InputValidator::required`] with an upper bound on length (in chars)
    pub fn bounded(value: &str, field: &str, max_len: usize) -> Result<String> {
        let trimmed = Self::required(value, field)?;
        if trimmed.chars().count() > max_len {
            return Err(PortalError::validation(format!(
                "{} cannot exceed {} characters",
                field, max_len
            )));
        }
        Ok(trimmed)
    }

    /// Trim an optional field, mapping blank input to `None`
    pub fn optional(value: Option<&str>) -> Option<String> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Validate an email address
    pub fn email(email: &str) -> Result<String> {
        let email = Self::required(email, "Email")?;
        let regex = EMAIL_REGEX
            .as_ref()
            .ok_or_else(|| PortalError::internal("Email pattern failed to compile"))?;

        if !regex.is_match(&email) {
            return Err(PortalError::validation("Invalid email format"));
        }
        Ok(email.to_lowercase())
    }

    /// Validate a link to a hosted file or page
    pub fn link(value: &str, field: &str) -> Result<String> {
        let link = Self::bounded(value, field, 2048)?;
        let regex = LINK_REGEX
            .as_ref()
            .ok_or_else(|| PortalError::internal("Link pattern failed to compile"))?;

        if !regex.is_match(&link) {
            return Err(PortalError::validation(format!("{} must be an http(s) URL or a path", field)));
        }
        Ok(link)
    }

    /// Validate a password against the configured minimum length
    pub fn password(password: &str, min_length: usize) -> Result<()> {
        if password.chars().count() < min_length {
            return Err(PortalError::validation(format!(
                "Password must be at least {} characters",
                min_length
            )));
        }

        if password.chars().count() > 128 {
            return Err(PortalError::validation(
                "Password cannot exceed 128 characters",
            ));
        }

        Ok(())
    }
}
