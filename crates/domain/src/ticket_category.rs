// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket categories.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ticket categories for routing and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    /// General inquiry
    General,
    /// Related to an existing vehicle order
    Order,
    /// Payment or deposit issue
    Payment,
    /// Shipping or delivery issue
    Shipping,
    /// Technical support
    Technical,
    /// Anything else
    Other,
}

impl TicketCategory {
    /// Returns the string representation of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Order => "order",
            Self::Payment => "payment",
            Self::Shipping => "shipping",
            Self::Technical => "technical",
            Self::Other => "other",
        }
    }

    /// Parses a category from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketCategory` if the string is not a valid category.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "general" => Ok(Self::General),
            "order" => Ok(Self::Order),
            "payment" => Ok(Self::Payment),
            "shipping" => Ok(Self::Shipping),
            "technical" => Ok(Self::Technical),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidTicketCategory(s.to_string())),
        }
    }
}

impl Default for TicketCategory {
    fn default() -> Self {
        Self::General
    }
}

impl FromStr for TicketCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
