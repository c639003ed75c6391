// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read access to the activity log.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::data_models::ActivityRecord;
use crate::diesel_schema::activity_log;
use crate::error::PersistenceError;

/// Returns the most recent activity log entries, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `limit` - The maximum number of entries to return
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recent_activity(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<ActivityRecord>, PersistenceError> {
    let rows: Vec<(i64, i64, String, String, String, String)> = activity_log::table
        .select((
            activity_log::activity_id,
            activity_log::user_id,
            activity_log::event_type,
            activity_log::description,
            activity_log::details_json,
            activity_log::created_at,
        ))
        .order(activity_log::activity_id.desc())
        .limit(limit)
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(activity_id, user_id, event_type, description, details_json, created_at)| {
                ActivityRecord {
                    activity_id,
                    user_id,
                    event_type,
                    description,
                    details_json,
                    created_at,
                }
            },
        )
        .collect())
}
