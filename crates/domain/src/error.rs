// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Ticket status string is not a valid status.
    InvalidTicketStatus(String),
    /// Ticket category string is not a valid category.
    InvalidTicketCategory(String),
    /// Ticket priority string is not a valid priority.
    InvalidTicketPriority(String),
    /// Ticket number does not match the `TKT-YYYYMMDD-XXXX` format.
    InvalidTicketNumber(String),
    /// Ticket subject is empty or invalid.
    InvalidSubject(String),
    /// Reply or initial message is empty or invalid.
    InvalidMessage(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTicketStatus(status) => {
                write!(f, "Invalid ticket status: '{status}'")
            }
            Self::InvalidTicketCategory(category) => {
                write!(f, "Invalid ticket category: '{category}'")
            }
            Self::InvalidTicketPriority(priority) => {
                write!(f, "Invalid ticket priority: '{priority}'")
            }
            Self::InvalidTicketNumber(number) => {
                write!(f, "Invalid ticket number: '{number}'")
            }
            Self::InvalidSubject(msg) => write!(f, "Invalid subject: {msg}"),
            Self::InvalidMessage(msg) => write!(f, "Invalid message: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
