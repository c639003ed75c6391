// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Activity-log event types.
//!
//! Every successful ticket lifecycle mutation produces exactly one activity
//! event attributed to the acting user. Events are immutable once created
//! and are persisted in the same transaction as the mutation they describe.

use serde::{Deserialize, Serialize};

/// The kind of activity that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A ticket was created.
    TicketCreated,
    /// A ticket's status was changed.
    TicketUpdated,
    /// A ticket was assigned to (or unassigned from) a staff member.
    TicketAssigned,
    /// A ticket was deleted.
    TicketDeleted,
}

impl ActivityKind {
    /// Returns the string representation of the kind.
    ///
    /// This is the value stored in the `event_type` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TicketCreated => "ticket_created",
            Self::TicketUpdated => "ticket_updated",
            Self::TicketAssigned => "ticket_assigned",
            Self::TicketDeleted => "ticket_deleted",
        }
    }
}

/// Structured details attached to an activity event.
///
/// Serialized to JSON for the `details_json` column. All fields are optional
/// so each event kind records only what applies to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityDetails {
    /// The ticket number involved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    /// The status before the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<String>,
    /// The status after the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status: Option<String>,
    /// The staff user the ticket was assigned to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
}

/// An immutable activity event describing one lifecycle mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    /// The user who performed the action.
    pub user_id: i64,
    /// What kind of action was performed.
    pub kind: ActivityKind,
    /// A human-readable description of the action.
    pub description: String,
    /// Structured details about the action.
    pub details: ActivityDetails,
}

impl ActivityEvent {
    /// Creates a new `ActivityEvent`.
    ///
    /// Once created, an activity event is immutable.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user who performed the action
    /// * `kind` - What kind of action was performed
    /// * `description` - A human-readable description
    /// * `details` - Structured details about the action
    #[must_use]
    pub const fn new(
        user_id: i64,
        kind: ActivityKind,
        description: String,
        details: ActivityDetails,
    ) -> Self {
        Self {
            user_id,
            kind,
            description,
            details,
        }
    }

    /// Serializes the structured details to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn details_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.details)
    }
}
