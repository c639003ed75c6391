// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bounded-string validation for ticket input fields.

use crate::error::DomainError;

/// Maximum length of a ticket subject.
pub const MAX_SUBJECT_LENGTH: usize = 255;

/// Maximum length of a reply or initial message.
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Maximum length of search input before truncation.
pub const MAX_SEARCH_LENGTH: usize = 255;

/// Validates a ticket subject.
///
/// The subject must be non-empty after trimming and at most
/// `MAX_SUBJECT_LENGTH` characters.
///
/// # Errors
///
/// Returns `DomainError::InvalidSubject` if the subject is empty or too long.
pub fn validate_subject(subject: &str) -> Result<(), DomainError> {
    let trimmed = subject.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidSubject(String::from(
            "subject must not be empty",
        )));
    }
    if subject.chars().count() > MAX_SUBJECT_LENGTH {
        return Err(DomainError::InvalidSubject(format!(
            "subject must be at most {MAX_SUBJECT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validates a reply or initial message.
///
/// The message must be non-empty after trimming and at most
/// `MAX_MESSAGE_LENGTH` characters.
///
/// # Errors
///
/// Returns `DomainError::InvalidMessage` if the message is empty or too long.
pub fn validate_message(message: &str) -> Result<(), DomainError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidMessage(String::from(
            "message must not be empty",
        )));
    }
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(DomainError::InvalidMessage(format!(
            "message must be at most {MAX_MESSAGE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Bounds raw search input.
///
/// Trims surrounding whitespace and truncates to `MAX_SEARCH_LENGTH`
/// characters. Over-long input is truncated rather than rejected so a sloppy
/// paste still searches on its leading characters.
#[must_use]
pub fn bound_search_input(raw: &str) -> String {
    raw.trim().chars().take(MAX_SEARCH_LENGTH).collect()
}
