// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket lifecycle mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use tracing::{debug, info};
use vio_support::{
    StatusChange, assigned_event, created_event, deleted_event, generate_ticket_number,
    staff_reply_override, status_changed_event,
};
use vio_support_domain::{TicketNumber, TicketStatus};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::clock;
use crate::data_models::{CreatedTicket, NewTicket};
use crate::diesel_schema::{support_tickets, ticket_replies};
use crate::error::PersistenceError;
use crate::mutations::activity::record_activity;

/// How many candidate ticket numbers creation tries before giving up.
///
/// The 16-bit suffix space makes collisions rare at realistic volumes; a
/// handful of retries covers same-day bursts.
pub const MAX_NUMBER_ATTEMPTS: u32 = 5;

/// Creates a ticket, an optional initial customer reply, and the
/// `ticket_created` activity event in one transaction.
///
/// The ticket number is generated here; on a unique-constraint collision a
/// fresh number is generated and the insert retried.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket` - The ticket fields
/// * `author_user_id` - The user opening the ticket (attributed in the
///   activity log and as the initial reply author)
/// * `initial_message` - An optional first message, stored as a non-staff reply
///
/// # Errors
///
/// Returns `TicketNumberExhausted` if every candidate number collided, or a
/// database error if any insert fails.
pub fn create_ticket(
    conn: &mut SqliteConnection,
    ticket: &NewTicket,
    author_user_id: i64,
    initial_message: Option<&str>,
) -> Result<CreatedTicket, PersistenceError> {
    conn.transaction(|conn| {
        let today = clock::today();

        for attempt in 1..=MAX_NUMBER_ATTEMPTS {
            let number: TicketNumber = generate_ticket_number(today)?;

            let Some(ticket_id) = try_insert_ticket(conn, ticket, &number)? else {
                debug!(
                    attempt,
                    ticket_number = number.as_str(),
                    "Ticket number collision, regenerating"
                );
                continue;
            };

            if let Some(message) = initial_message {
                diesel::insert_into(ticket_replies::table)
                    .values((
                        ticket_replies::ticket_id.eq(ticket_id),
                        ticket_replies::user_id.eq(author_user_id),
                        ticket_replies::message.eq(message),
                        ticket_replies::is_staff_reply.eq(0),
                    ))
                    .execute(conn)?;
            }

            record_activity(conn, &created_event(author_user_id, &number))?;

            info!(ticket_id, ticket_number = number.as_str(), "Ticket created");
            return Ok(CreatedTicket {
                ticket_id,
                ticket_number: number,
            });
        }

        Err(PersistenceError::TicketNumberExhausted {
            attempts: MAX_NUMBER_ATTEMPTS,
        })
    })
}

/// Inserts a ticket row under the given number.
///
/// Returns `Ok(None)` when the number is already taken, which feeds the
/// retry loop in [`create_ticket`].
pub(crate) fn try_insert_ticket(
    conn: &mut SqliteConnection,
    ticket: &NewTicket,
    number: &TicketNumber,
) -> Result<Option<i64>, PersistenceError> {
    let inserted = diesel::insert_into(support_tickets::table)
        .values((
            support_tickets::ticket_number.eq(number.as_str()),
            support_tickets::customer_id.eq(ticket.customer_id),
            support_tickets::order_id.eq(ticket.order_id),
            support_tickets::subject.eq(&ticket.subject),
            support_tickets::category.eq(ticket.category.as_str()),
            support_tickets::priority.eq(ticket.priority.as_str()),
            support_tickets::status.eq(TicketStatus::Open.as_str()),
        ))
        .execute(conn);

    match inserted {
        Ok(_) => Ok(Some(get_last_insert_rowid(conn)?)),
        Err(diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Ok(None)
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Adds a reply to a ticket.
///
/// A staff reply force-transitions the ticket to `pending` whatever its
/// current status; this is the reopen path for closed tickets. Any reply
/// refreshes `updated_at`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket being replied to
/// * `user_id` - The reply author
/// * `message` - The reply body
/// * `is_staff_reply` - Whether the author replied in a staff capacity
/// * `attachment_path` - An optional stored-attachment reference
///
/// # Errors
///
/// Returns `TicketNotFound` if the ticket does not exist, or a database
/// error if the writes fail.
pub fn add_reply(
    conn: &mut SqliteConnection,
    ticket_id: i64,
    user_id: i64,
    message: &str,
    is_staff_reply: bool,
    attachment_path: Option<&str>,
) -> Result<i64, PersistenceError> {
    conn.transaction(|conn| {
        let exists: Option<i64> = support_tickets::table
            .filter(support_tickets::ticket_id.eq(ticket_id))
            .select(support_tickets::ticket_id)
            .first(conn)
            .optional()?;
        if exists.is_none() {
            return Err(PersistenceError::TicketNotFound(ticket_id));
        }

        diesel::insert_into(ticket_replies::table)
            .values((
                ticket_replies::ticket_id.eq(ticket_id),
                ticket_replies::user_id.eq(user_id),
                ticket_replies::message.eq(message),
                ticket_replies::is_staff_reply.eq(i32::from(is_staff_reply)),
                ticket_replies::attachment_path.eq(attachment_path),
            ))
            .execute(conn)?;

        let reply_id: i64 = get_last_insert_rowid(conn)?;

        let now: String = clock::now_timestamp()?;
        if let Some(forced) = staff_reply_override(is_staff_reply) {
            diesel::update(support_tickets::table)
                .filter(support_tickets::ticket_id.eq(ticket_id))
                .set((
                    support_tickets::status.eq(forced.as_str()),
                    support_tickets::updated_at.eq(&now),
                ))
                .execute(conn)?;
        } else {
            diesel::update(support_tickets::table)
                .filter(support_tickets::ticket_id.eq(ticket_id))
                .set(support_tickets::updated_at.eq(&now))
                .execute(conn)?;
        }

        debug!(reply_id, ticket_id, is_staff_reply, "Reply added");
        Ok(reply_id)
    })
}

/// Sets a ticket's status and records the `ticket_updated` activity event.
///
/// Entering `closed` stamps `closed_at`. Leaving `closed` does not clear the
/// stamp; a reopened ticket keeps the timestamp of its most recent closure.
/// Any status write refreshes `updated_at`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket to update
/// * `new_status` - The status to set
/// * `actor_user_id` - The user making the change
///
/// # Errors
///
/// Returns `TicketNotFound` if the ticket does not exist, or a database
/// error if the writes fail.
pub fn update_status(
    conn: &mut SqliteConnection,
    ticket_id: i64,
    new_status: TicketStatus,
    actor_user_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        let row: Option<(String, String)> = support_tickets::table
            .filter(support_tickets::ticket_id.eq(ticket_id))
            .select((support_tickets::ticket_number, support_tickets::status))
            .first(conn)
            .optional()?;
        let Some((number_raw, status_raw)) = row else {
            return Err(PersistenceError::TicketNotFound(ticket_id));
        };
        let number = TicketNumber::new(number_raw)?;
        let previous: TicketStatus = status_raw.parse()?;

        let now: String = clock::now_timestamp()?;
        let change = StatusChange::plan(new_status, &now);

        if let Some(closed_at) = &change.closed_at {
            diesel::update(support_tickets::table)
                .filter(support_tickets::ticket_id.eq(ticket_id))
                .set((
                    support_tickets::status.eq(change.new_status.as_str()),
                    support_tickets::closed_at.eq(closed_at),
                    support_tickets::updated_at.eq(&now),
                ))
                .execute(conn)?;
        } else {
            diesel::update(support_tickets::table)
                .filter(support_tickets::ticket_id.eq(ticket_id))
                .set((
                    support_tickets::status.eq(change.new_status.as_str()),
                    support_tickets::updated_at.eq(&now),
                ))
                .execute(conn)?;
        }

        record_activity(
            conn,
            &status_changed_event(actor_user_id, &number, previous, change.new_status),
        )?;

        info!(
            ticket_id,
            from = previous.as_str(),
            to = change.new_status.as_str(),
            "Ticket status updated"
        );
        Ok(())
    })
}

/// Sets or clears a ticket's assignee and records the `ticket_assigned`
/// activity event.
///
/// Assignment never changes status. The write refreshes `updated_at` like
/// every other ticket mutation.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket to update
/// * `staff_user_id` - The staff member to assign, or `None` to unassign
/// * `actor_user_id` - The user making the change
///
/// # Errors
///
/// Returns `TicketNotFound` if the ticket does not exist, or a database
/// error if the writes fail.
pub fn assign_ticket(
    conn: &mut SqliteConnection,
    ticket_id: i64,
    staff_user_id: Option<i64>,
    actor_user_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        let number_raw: Option<String> = support_tickets::table
            .filter(support_tickets::ticket_id.eq(ticket_id))
            .select(support_tickets::ticket_number)
            .first(conn)
            .optional()?;
        let Some(number_raw) = number_raw else {
            return Err(PersistenceError::TicketNotFound(ticket_id));
        };
        let number = TicketNumber::new(number_raw)?;

        let now: String = clock::now_timestamp()?;
        diesel::update(support_tickets::table)
            .filter(support_tickets::ticket_id.eq(ticket_id))
            .set((
                support_tickets::assigned_to.eq(staff_user_id),
                support_tickets::updated_at.eq(&now),
            ))
            .execute(conn)?;

        record_activity(conn, &assigned_event(actor_user_id, &number, staff_user_id))?;

        info!(ticket_id, ?staff_user_id, "Ticket assignment updated");
        Ok(())
    })
}

/// Deletes a ticket and records the `ticket_deleted` activity event.
///
/// Replies are removed by the foreign-key cascade.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket to delete
/// * `actor_user_id` - The user making the change
///
/// # Errors
///
/// Returns `TicketNotFound` if the ticket does not exist, or a database
/// error if the delete fails.
pub fn delete_ticket(
    conn: &mut SqliteConnection,
    ticket_id: i64,
    actor_user_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        let number_raw: Option<String> = support_tickets::table
            .filter(support_tickets::ticket_id.eq(ticket_id))
            .select(support_tickets::ticket_number)
            .first(conn)
            .optional()?;
        let Some(number_raw) = number_raw else {
            return Err(PersistenceError::TicketNotFound(ticket_id));
        };
        let number = TicketNumber::new(number_raw)?;

        diesel::delete(support_tickets::table)
            .filter(support_tickets::ticket_id.eq(ticket_id))
            .execute(conn)?;

        record_activity(conn, &deleted_event(actor_user_id, &number))?;

        info!(ticket_id, ticket_number = number.as_str(), "Ticket deleted");
        Ok(())
    })
}
