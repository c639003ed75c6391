// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity-log mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use vio_support_audit::ActivityEvent;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::activity_log;
use crate::error::PersistenceError;

/// Records an activity event.
///
/// Callers invoke this inside the transaction of the mutation that produced
/// the event so the event and the mutation commit atomically.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `event` - The event to record
///
/// # Errors
///
/// Returns an error if the details cannot be serialized or the insert fails.
pub fn record_activity(
    conn: &mut SqliteConnection,
    event: &ActivityEvent,
) -> Result<i64, PersistenceError> {
    let details_json: String = event.details_json()?;

    diesel::insert_into(activity_log::table)
        .values((
            activity_log::user_id.eq(event.user_id),
            activity_log::event_type.eq(event.kind.as_str()),
            activity_log::description.eq(&event.description),
            activity_log::details_json.eq(&details_json),
        ))
        .execute(conn)?;

    let activity_id: i64 = get_last_insert_rowid(conn)?;

    debug!(
        activity_id,
        event_type = event.kind.as_str(),
        "Recorded activity event"
    );
    Ok(activity_id)
}
