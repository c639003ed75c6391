// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregate ticket statistics.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::sql_types::BigInt;

use crate::data_models::TicketStats;
use crate::error::PersistenceError;

/// Row struct for the aggregate query.
#[derive(QueryableByName)]
struct StatsRow {
    #[diesel(sql_type = BigInt)]
    total: i64,
    #[diesel(sql_type = BigInt)]
    open_count: i64,
    #[diesel(sql_type = BigInt)]
    pending_count: i64,
    #[diesel(sql_type = BigInt)]
    resolved_count: i64,
    #[diesel(sql_type = BigInt)]
    closed_count: i64,
    #[diesel(sql_type = BigInt)]
    urgent_count: i64,
}

/// Computes all ticket statistics in a single aggregate query.
///
/// `urgent_count` counts urgent-priority tickets that are still actionable,
/// meaning status `open` or `pending`; urgent tickets that were resolved or
/// closed do not count.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn ticket_stats(conn: &mut SqliteConnection) -> Result<TicketStats, PersistenceError> {
    // NOTE: single-pass conditional aggregation is raw SQL (justified -
    // Diesel has no CASE DSL). COALESCE covers the empty-table case where
    // SUM yields NULL.
    let row: StatsRow = diesel::sql_query(
        "SELECT COUNT(*) AS total, \
         COALESCE(SUM(CASE WHEN status = 'open' THEN 1 ELSE 0 END), 0) AS open_count, \
         COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) AS pending_count, \
         COALESCE(SUM(CASE WHEN status = 'resolved' THEN 1 ELSE 0 END), 0) AS resolved_count, \
         COALESCE(SUM(CASE WHEN status = 'closed' THEN 1 ELSE 0 END), 0) AS closed_count, \
         COALESCE(SUM(CASE WHEN priority = 'urgent' AND status IN ('open', 'pending') \
         THEN 1 ELSE 0 END), 0) AS urgent_count \
         FROM support_tickets",
    )
    .get_result(conn)?;

    Ok(TicketStats {
        total: row.total,
        open: row.open_count,
        pending: row.pending_count,
        resolved: row.resolved_count,
        closed: row.closed_count,
        urgent: row.urgent_count,
    })
}
