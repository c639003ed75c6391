// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! UTC timestamp helpers.
//!
//! Timestamps are stored as `YYYY-MM-DD HH:MM:SS` text, the same shape
//! `CURRENT_TIMESTAMP` produces, so column values sort lexicographically
//! regardless of which side wrote them.

use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::error::PersistenceError;

/// Returns the current UTC timestamp as stored-column text.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn now_timestamp() -> Result<String, PersistenceError> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}

/// Returns today's UTC date.
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
