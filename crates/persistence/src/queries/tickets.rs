// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket projections and listings.
//!
//! Detail and summary projections decorate the ticket row with collaborator
//! data (customer, order, assignee, reply counts). All collaborator links
//! are fail-soft: a missing link produces `None`, never an error.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use vio_support_domain::{TicketCategory, TicketNumber, TicketPriority, TicketStatus};

use crate::data_models::{
    CustomerInfo, OrderInfo, ReplyDetail, StaffInfo, TicketDetail, TicketSummary,
};
use crate::diesel_schema::{customers, orders, support_tickets, ticket_replies, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for ticket rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = support_tickets)]
pub(crate) struct TicketRow {
    pub ticket_id: i64,
    pub ticket_number: String,
    pub customer_id: i64,
    pub order_id: Option<i64>,
    pub subject: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub assigned_to: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
}

/// Priority rank expression: urgent=1, high=2, normal=3, low=4.
///
/// NOTE: CASE ranking is raw SQL (justified - Diesel has no CASE DSL).
/// Must match `TicketPriority::rank`.
pub(crate) const PRIORITY_RANK_SQL: &str =
    "CASE priority WHEN 'urgent' THEN 1 WHEN 'high' THEN 2 WHEN 'normal' THEN 3 ELSE 4 END";

/// Retrieves a full ticket projection by row ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket row ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the ticket is not found.
pub fn find_ticket(
    conn: &mut SqliteConnection,
    ticket_id: i64,
) -> Result<Option<TicketDetail>, PersistenceError> {
    let row: Option<TicketRow> = support_tickets::table
        .filter(support_tickets::ticket_id.eq(ticket_id))
        .select(TicketRow::as_select())
        .first(conn)
        .optional()?;

    match row {
        Some(row) => Ok(Some(build_detail(conn, row)?)),
        None => Ok(None),
    }
}

/// Retrieves a full ticket projection by ticket number.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_number` - The ticket number
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the ticket is not found.
pub fn find_ticket_by_number(
    conn: &mut SqliteConnection,
    ticket_number: &TicketNumber,
) -> Result<Option<TicketDetail>, PersistenceError> {
    let row: Option<TicketRow> = support_tickets::table
        .filter(support_tickets::ticket_number.eq(ticket_number.as_str()))
        .select(TicketRow::as_select())
        .first(conn)
        .optional()?;

    match row {
        Some(row) => Ok(Some(build_detail(conn, row)?)),
        None => Ok(None),
    }
}

/// Lists tickets for one customer, newest first.
///
/// Never returns another customer's tickets.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `customer_id` - The owning customer
/// * `status` - Optional status filter
/// * `limit` - Maximum number of rows
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn tickets_for_customer(
    conn: &mut SqliteConnection,
    customer_id: i64,
    status: Option<TicketStatus>,
    limit: i64,
) -> Result<Vec<TicketSummary>, PersistenceError> {
    let mut query = support_tickets::table
        .filter(support_tickets::customer_id.eq(customer_id))
        .into_boxed();
    if let Some(status) = status {
        query = query.filter(support_tickets::status.eq(status.as_str()));
    }

    let rows: Vec<TicketRow> = query
        .order((
            support_tickets::created_at.desc(),
            support_tickets::ticket_id.desc(),
        ))
        .limit(limit)
        .select(TicketRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| build_summary(conn, row)).collect()
}

/// Lists all tickets for staff, most urgent first.
///
/// Ordering is priority rank ascending (urgent=1 through low=4), then
/// `created_at` descending, then `ticket_id` descending as a deterministic
/// tiebreak within equal timestamps.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `status` - Optional status filter
/// * `limit` - Maximum number of rows
/// * `offset` - Number of rows to skip
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tickets(
    conn: &mut SqliteConnection,
    status: Option<TicketStatus>,
    limit: i64,
    offset: i64,
) -> Result<Vec<TicketSummary>, PersistenceError> {
    let mut query = support_tickets::table.into_boxed();
    if let Some(status) = status {
        query = query.filter(support_tickets::status.eq(status.as_str()));
    }

    let rows: Vec<TicketRow> = query
        .order((
            sql::<Integer>(PRIORITY_RANK_SQL).asc(),
            support_tickets::created_at.desc(),
            support_tickets::ticket_id.desc(),
        ))
        .limit(limit)
        .offset(offset)
        .select(TicketRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| build_summary(conn, row)).collect()
}

/// Diesel Queryable struct for reply rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = ticket_replies)]
struct ReplyRow {
    reply_id: i64,
    ticket_id: i64,
    user_id: i64,
    message: String,
    is_staff_reply: i32,
    attachment_path: Option<String>,
    created_at: String,
}

/// Lists a ticket's replies oldest first, decorated with author information.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_id` - The ticket whose replies to list
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_replies(
    conn: &mut SqliteConnection,
    ticket_id: i64,
) -> Result<Vec<ReplyDetail>, PersistenceError> {
    let rows: Vec<ReplyRow> = ticket_replies::table
        .filter(ticket_replies::ticket_id.eq(ticket_id))
        .order((
            ticket_replies::created_at.asc(),
            ticket_replies::reply_id.asc(),
        ))
        .select(ReplyRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let author: Option<(String, String, String)> = users::table
                .filter(users::user_id.eq(row.user_id))
                .select((users::first_name, users::last_name, users::role))
                .first(conn)
                .optional()?;

            Ok(ReplyDetail {
                reply_id: row.reply_id,
                ticket_id: row.ticket_id,
                user_id: row.user_id,
                message: row.message,
                is_staff_reply: row.is_staff_reply != 0,
                attachment_path: row.attachment_path,
                created_at: row.created_at,
                author_name: author
                    .as_ref()
                    .map(|(first, last, _)| format!("{first} {last}")),
                author_role: author.map(|(_, _, role)| role),
            })
        })
        .collect()
}

/// Builds a detail projection from a ticket row.
pub(crate) fn build_detail(
    conn: &mut SqliteConnection,
    row: TicketRow,
) -> Result<TicketDetail, PersistenceError> {
    let customer: Option<(i64, String, String, String)> = customers::table
        .inner_join(users::table)
        .filter(customers::customer_id.eq(row.customer_id))
        .select((
            users::user_id,
            users::first_name,
            users::last_name,
            users::email,
        ))
        .first(conn)
        .optional()?;

    let order: Option<String> = match row.order_id {
        Some(order_id) => orders::table
            .filter(orders::order_id.eq(order_id))
            .select(orders::order_number)
            .first(conn)
            .optional()?,
        None => None,
    };

    let assignee: Option<(String, String)> = match row.assigned_to {
        Some(staff_id) => users::table
            .filter(users::user_id.eq(staff_id))
            .select((users::first_name, users::last_name))
            .first(conn)
            .optional()?,
        None => None,
    };

    let category: TicketCategory = row.category.parse()?;
    let priority: TicketPriority = row.priority.parse()?;
    let status: TicketStatus = row.status.parse()?;

    Ok(TicketDetail {
        ticket_id: row.ticket_id,
        ticket_number: row.ticket_number,
        customer_id: row.customer_id,
        order_id: row.order_id,
        subject: row.subject,
        category,
        priority,
        status,
        assigned_to: row.assigned_to,
        created_at: row.created_at,
        updated_at: row.updated_at,
        closed_at: row.closed_at,
        customer: customer.map(|(user_id, first_name, last_name, email)| CustomerInfo {
            user_id,
            first_name,
            last_name,
            email,
        }),
        order: order.map(|order_number| OrderInfo { order_number }),
        assignee: assignee.map(|(first_name, last_name)| StaffInfo {
            first_name,
            last_name,
        }),
    })
}

/// Builds a summary projection from a ticket row.
pub(crate) fn build_summary(
    conn: &mut SqliteConnection,
    row: TicketRow,
) -> Result<TicketSummary, PersistenceError> {
    let reply_count: i64 = ticket_replies::table
        .filter(ticket_replies::ticket_id.eq(row.ticket_id))
        .count()
        .get_result(conn)?;

    let customer_name: Option<(String, String)> = customers::table
        .inner_join(users::table)
        .filter(customers::customer_id.eq(row.customer_id))
        .select((users::first_name, users::last_name))
        .first(conn)
        .optional()?;

    let order_number: Option<String> = match row.order_id {
        Some(order_id) => orders::table
            .filter(orders::order_id.eq(order_id))
            .select(orders::order_number)
            .first(conn)
            .optional()?,
        None => None,
    };

    let category: TicketCategory = row.category.parse()?;
    let priority: TicketPriority = row.priority.parse()?;
    let status: TicketStatus = row.status.parse()?;

    Ok(TicketSummary {
        ticket_id: row.ticket_id,
        ticket_number: row.ticket_number,
        customer_id: row.customer_id,
        subject: row.subject,
        category,
        priority,
        status,
        assigned_to: row.assigned_to,
        created_at: row.created_at,
        updated_at: row.updated_at,
        reply_count,
        customer_name: customer_name.map(|(first, last)| format!("{first} {last}")),
        order_number,
    })
}
