// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket number generation.

use time::Date;
use vio_support_domain::TicketNumber;

use crate::error::CoreError;

/// Generates a candidate ticket number for the given creation date.
///
/// Numbers have the form `TKT-YYYYMMDD-XXXX` where the suffix is four
/// uppercase hexadecimal digits drawn from a random 16-bit value. The suffix
/// space is small, so callers inserting under a unique constraint must be
/// prepared to regenerate and retry on collision.
///
/// # Arguments
///
/// * `date` - The creation date embedded in the number
///
/// # Errors
///
/// Returns an error if the formatted candidate does not validate, which can
/// only happen for dates outside the four-digit-year range.
pub fn generate_ticket_number(date: Date) -> Result<TicketNumber, CoreError> {
    let suffix: u16 = rand::random();
    let candidate = format!(
        "TKT-{:04}{:02}{:02}-{suffix:04X}",
        date.year(),
        u8::from(date.month()),
        date.day()
    );
    TicketNumber::new(candidate).map_err(CoreError::from)
}
