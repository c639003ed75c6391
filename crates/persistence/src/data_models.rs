// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public data types returned by (or passed to) the persistence adapter.

use serde::Serialize;
use vio_support_domain::{TicketCategory, TicketNumber, TicketPriority, TicketStatus};

/// Input for creating a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    /// The customer opening the ticket.
    pub customer_id: i64,
    /// The related order, if any.
    pub order_id: Option<i64>,
    /// The ticket subject line.
    pub subject: String,
    /// The ticket category.
    pub category: TicketCategory,
    /// The ticket priority.
    pub priority: TicketPriority,
}

/// The identifiers of a freshly created ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTicket {
    /// The database row ID.
    pub ticket_id: i64,
    /// The generated ticket number.
    pub ticket_number: TicketNumber,
}

/// Customer contact details attached to a ticket projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerInfo {
    /// The customer's account user ID.
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Order details attached to a ticket projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderInfo {
    pub order_number: String,
}

/// Assignee details attached to a ticket projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffInfo {
    pub first_name: String,
    pub last_name: String,
}

/// A full ticket projection for detail views.
///
/// The `customer`, `order`, and `assignee` links are fail-soft: a dangling
/// or absent reference yields `None` rather than an error, so a ticket whose
/// customer account was removed still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketDetail {
    pub ticket_id: i64,
    pub ticket_number: String,
    pub customer_id: i64,
    pub order_id: Option<i64>,
    pub subject: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    /// Timestamp of the most recent closure. Never cleared on reopen.
    pub closed_at: Option<String>,
    pub customer: Option<CustomerInfo>,
    pub order: Option<OrderInfo>,
    pub assignee: Option<StaffInfo>,
}

/// A decorated ticket row for listings and search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketSummary {
    pub ticket_id: i64,
    pub ticket_number: String,
    pub customer_id: i64,
    pub subject: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    /// Number of replies on the ticket.
    pub reply_count: i64,
    /// The customer's display name, when the account link resolves.
    pub customer_name: Option<String>,
    /// The related order number, when an order is linked.
    pub order_number: Option<String>,
}

/// A reply decorated with author information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyDetail {
    pub reply_id: i64,
    pub ticket_id: i64,
    pub user_id: i64,
    pub message: String,
    pub is_staff_reply: bool,
    pub attachment_path: Option<String>,
    pub created_at: String,
    /// The author's display name, when the account link resolves.
    pub author_name: Option<String>,
    /// The author's account role, when the account link resolves.
    pub author_role: Option<String>,
}

/// Aggregate ticket counts for dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TicketStats {
    /// Total number of tickets.
    pub total: i64,
    /// Tickets with status `open`.
    pub open: i64,
    /// Tickets with status `pending`.
    pub pending: i64,
    /// Tickets with status `resolved`.
    pub resolved: i64,
    /// Tickets with status `closed`.
    pub closed: i64,
    /// Urgent-priority tickets that are still open or pending.
    pub urgent: i64,
}

impl TicketStats {
    /// Returns all-zero statistics.
    ///
    /// Display surfaces fall back to this when the aggregate query fails;
    /// callers must treat zeroed statistics as "unknown", not "empty".
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            total: 0,
            open: 0,
            pending: 0,
            resolved: 0,
            closed: 0,
            urgent: 0,
        }
    }
}

/// An activity-log row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub activity_id: i64,
    pub user_id: i64,
    pub event_type: String,
    pub description: String,
    pub details_json: String,
    pub created_at: String,
}
