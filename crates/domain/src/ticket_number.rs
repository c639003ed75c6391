// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validated ticket number newtype.
//!
//! Ticket numbers have the form `TKT-YYYYMMDD-XXXX` where `YYYYMMDD` is the
//! creation date and `XXXX` is four uppercase hexadecimal digits. Numbers are
//! unique for all time and are never reused, even after ticket deletion.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed prefix of every ticket number.
pub const TICKET_NUMBER_PREFIX: &str = "TKT-";

/// Total length of a well-formed ticket number.
const TICKET_NUMBER_LENGTH: usize = 17;

/// A validated ticket number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber(String);

impl TicketNumber {
    /// Wraps a string as a ticket number after validating its shape.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketNumber` if the string does not
    /// match `TKT-YYYYMMDD-XXXX`.
    pub fn new(value: String) -> Result<Self, DomainError> {
        if Self::is_well_formed(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidTicketNumber(value))
        }
    }

    /// Returns the ticket number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ticket number and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn is_well_formed(value: &str) -> bool {
        if value.len() != TICKET_NUMBER_LENGTH {
            return false;
        }
        let Some(rest) = value.strip_prefix(TICKET_NUMBER_PREFIX) else {
            return false;
        };
        let Some((date_part, suffix)) = rest.split_once('-') else {
            return false;
        };
        date_part.len() == 8
            && date_part.bytes().all(|b| b.is_ascii_digit())
            && suffix.len() == 4
            && suffix
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    }
}

impl FromStr for TicketNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl std::fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
