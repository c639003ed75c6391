// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket search.
//!
//! Case-insensitive substring match over ticket number, subject, customer
//! first and last name, customer email, and order number. SQLite's `LIKE`
//! is case-insensitive for ASCII, which matches the collation the reference
//! data uses.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use vio_support_domain::bound_search_input;

use crate::data_models::TicketSummary;
use crate::diesel_schema::{customers, orders, support_tickets, users};
use crate::error::PersistenceError;
use crate::queries::tickets::{TicketRow, build_summary};

/// Maximum number of search results returned.
pub const SEARCH_RESULT_CAP: i64 = 100;

/// Escapes `LIKE` wildcards so the query matches them literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Searches tickets by free-text query, newest first.
///
/// Input is trimmed and truncated to the search bound before matching, and
/// `LIKE` wildcards in the query are treated literally. An empty (or
/// all-whitespace) query returns no rows. At most `SEARCH_RESULT_CAP` rows
/// are returned.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `query` - The raw search input
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_tickets(
    conn: &mut SqliteConnection,
    query: &str,
) -> Result<Vec<TicketSummary>, PersistenceError> {
    let bounded: String = bound_search_input(query);
    if bounded.is_empty() {
        return Ok(Vec::new());
    }
    let pattern: String = format!("%{}%", escape_like(&bounded));

    debug!(query = bounded.as_str(), "Searching tickets");

    // Collaborator matches are resolved to IDs first; the ticket filter then
    // combines them with the ticket's own columns in a single OR chain.
    let customer_ids: Vec<i64> = customers::table
        .inner_join(users::table)
        .filter(
            users::first_name
                .like(&pattern)
                .escape('\\')
                .or(users::last_name.like(&pattern).escape('\\'))
                .or(users::email.like(&pattern).escape('\\')),
        )
        .select(customers::customer_id)
        .load(conn)?;

    let order_ids: Vec<Option<i64>> = orders::table
        .filter(orders::order_number.like(&pattern).escape('\\'))
        .select(orders::order_id)
        .load::<i64>(conn)?
        .into_iter()
        .map(Some)
        .collect();

    let rows: Vec<TicketRow> = support_tickets::table
        .filter(
            support_tickets::ticket_number
                .like(&pattern)
                .escape('\\')
                .or(support_tickets::subject.like(&pattern).escape('\\'))
                .or(support_tickets::customer_id.eq_any(customer_ids))
                .or(support_tickets::order_id.eq_any(order_ids)),
        )
        .order((
            support_tickets::created_at.desc(),
            support_tickets::ticket_id.desc(),
        ))
        .limit(SEARCH_RESULT_CAP)
        .select(TicketRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| build_summary(conn, row)).collect()
}
