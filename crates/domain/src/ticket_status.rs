// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket status states.
//!
//! Any status may be set from any other status; there is no enforced
//! transition graph. The two system-applied rules (staff replies force
//! `Pending`, entering `Closed` stamps the closure timestamp) live in the
//! lifecycle crate.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ticket status states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Newly created, awaiting a first staff response
    Open,
    /// A staff member has responded; awaiting customer action
    Pending,
    /// The issue is considered addressed but the ticket is not closed
    Resolved,
    /// The ticket is closed
    Closed,
}

impl TicketStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "open" => Ok(Self::Open),
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidTicketStatus(s.to_string())),
        }
    }

    /// Returns all statuses in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Open, Self::Pending, Self::Resolved, Self::Closed]
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
