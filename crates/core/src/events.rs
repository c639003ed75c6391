// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity-event constructors for lifecycle mutations.
//!
//! Every lifecycle mutation emits exactly one event. The constructors here
//! keep descriptions and structured details consistent across call sites.

use vio_support_audit::{ActivityDetails, ActivityEvent, ActivityKind};
use vio_support_domain::{TicketNumber, TicketStatus};

/// Builds the event for a ticket creation.
#[must_use]
pub fn created_event(user_id: i64, ticket_number: &TicketNumber) -> ActivityEvent {
    ActivityEvent::new(
        user_id,
        ActivityKind::TicketCreated,
        format!("Created support ticket {ticket_number}"),
        ActivityDetails {
            ticket_number: Some(ticket_number.as_str().to_string()),
            ..ActivityDetails::default()
        },
    )
}

/// Builds the event for a status change.
#[must_use]
pub fn status_changed_event(
    user_id: i64,
    ticket_number: &TicketNumber,
    previous: TicketStatus,
    new: TicketStatus,
) -> ActivityEvent {
    ActivityEvent::new(
        user_id,
        ActivityKind::TicketUpdated,
        format!("Changed status of ticket {ticket_number} from {previous} to {new}"),
        ActivityDetails {
            ticket_number: Some(ticket_number.as_str().to_string()),
            previous_status: Some(previous.as_str().to_string()),
            new_status: Some(new.as_str().to_string()),
            assigned_to: None,
        },
    )
}

/// Builds the event for an assignment change.
///
/// `assigned_to` is `None` when the ticket was unassigned.
#[must_use]
pub fn assigned_event(
    user_id: i64,
    ticket_number: &TicketNumber,
    assigned_to: Option<i64>,
) -> ActivityEvent {
    let description = match assigned_to {
        Some(staff_id) => format!("Assigned ticket {ticket_number} to user {staff_id}"),
        None => format!("Unassigned ticket {ticket_number}"),
    };
    ActivityEvent::new(
        user_id,
        ActivityKind::TicketAssigned,
        description,
        ActivityDetails {
            ticket_number: Some(ticket_number.as_str().to_string()),
            assigned_to,
            ..ActivityDetails::default()
        },
    )
}

/// Builds the event for a ticket deletion.
#[must_use]
pub fn deleted_event(user_id: i64, ticket_number: &TicketNumber) -> ActivityEvent {
    ActivityEvent::new(
        user_id,
        ActivityKind::TicketDeleted,
        format!("Deleted support ticket {ticket_number}"),
        ActivityDetails {
            ticket_number: Some(ticket_number.as_str().to_string()),
            ..ActivityDetails::default()
        },
    )
}
