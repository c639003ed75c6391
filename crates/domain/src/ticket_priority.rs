// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket priorities and their sort ranking.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ticket priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    /// No urgency
    Low,
    /// Default priority
    Normal,
    /// Needs prompt attention
    High,
    /// Needs immediate attention
    Urgent,
}

impl TicketPriority {
    /// Returns the string representation of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Returns the sort rank of the priority.
    ///
    /// Ranks ascend from most to least urgent: urgent=1, high=2, normal=3,
    /// low=4. Staff-facing listings sort by this rank ascending so urgent
    /// tickets appear first.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Urgent => 1,
            Self::High => 2,
            Self::Normal => 3,
            Self::Low => 4,
        }
    }

    /// Parses a priority from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketPriority` if the string is not a valid priority.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(DomainError::InvalidTicketPriority(s.to_string())),
        }
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        Self::Normal
    }
}

impl FromStr for TicketPriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_string_round_trip() {
        let priorities = vec![
            TicketPriority::Low,
            TicketPriority::Normal,
            TicketPriority::High,
            TicketPriority::Urgent,
        ];

        for priority in priorities {
            let s = priority.as_str();
            match TicketPriority::parse_str(s) {
                Ok(parsed) => assert_eq!(priority, parsed),
                Err(e) => panic!("Failed to parse priority string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_rank_ordering() {
        assert_eq!(TicketPriority::Urgent.rank(), 1);
        assert_eq!(TicketPriority::High.rank(), 2);
        assert_eq!(TicketPriority::Normal.rank(), 3);
        assert_eq!(TicketPriority::Low.rank(), 4);
    }

    #[test]
    fn test_invalid_priority_string() {
        assert!(TicketPriority::parse_str("critical").is_err());
        assert!(TicketPriority::parse_str("").is_err());
    }

    #[test]
    fn test_default_priority_is_normal() {
        assert_eq!(TicketPriority::default(), TicketPriority::Normal);
    }
}
