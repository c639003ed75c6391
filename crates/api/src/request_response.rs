// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Category and priority arrive as raw strings and fall back to their
//! defaults when unrecognized; a misspelled priority opens the ticket at
//! `normal` rather than rejecting the request. Status strings never fall
//! back, an unrecognized status is an input error.

use vio_support_domain::{TicketCategory, TicketPriority};

/// API request to open a new support ticket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTicketRequest {
    /// The customer opening the ticket.
    pub customer_id: i64,
    /// The related order, if any.
    pub order_id: Option<i64>,
    /// The ticket subject line.
    pub subject: String,
    /// The ticket category (defaults to `general` when unrecognized).
    pub category: String,
    /// The ticket priority (defaults to `normal` when unrecognized).
    pub priority: String,
    /// The opening message.
    pub message: String,
}

impl CreateTicketRequest {
    /// Resolves the category string, falling back to the default.
    #[must_use]
    pub fn resolved_category(&self) -> TicketCategory {
        self.category.parse().unwrap_or_default()
    }

    /// Resolves the priority string, falling back to the default.
    #[must_use]
    pub fn resolved_priority(&self) -> TicketPriority {
        self.priority.parse().unwrap_or_default()
    }
}

/// API response for a successfully opened ticket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTicketResponse {
    /// The database row ID.
    pub ticket_id: i64,
    /// The public ticket number.
    pub ticket_number: String,
    /// A success message.
    pub message: String,
}

/// API request to reply to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddReplyRequest {
    /// The ticket being replied to.
    pub ticket_id: i64,
    /// The reply body.
    pub message: String,
    /// An optional stored-attachment reference.
    pub attachment_path: Option<String>,
}

/// API request to change a ticket's status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateStatusRequest {
    /// The ticket to update.
    pub ticket_id: i64,
    /// The status to set (`open`, `pending`, `resolved`, or `closed`).
    pub status: String,
}

/// API request to assign or unassign a ticket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignTicketRequest {
    /// The ticket to update.
    pub ticket_id: i64,
    /// The staff member to assign; `None` or `0` unassigns.
    pub staff_user_id: Option<i64>,
}
