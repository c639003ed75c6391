// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status-transition planning.
//!
//! There is no enforced status graph: any status may be requested from any
//! other. The rules applied here are about side effects of a transition,
//! not its legality.

use vio_support_domain::TicketStatus;

/// The planned outcome of a status change.
///
/// Carries the new status plus the closure stamp to apply, if any. The
/// `closed_at` column is write-once per closure: it is stamped whenever a
/// ticket enters `Closed` and is never cleared on reopen, so a reopened
/// ticket retains the timestamp of its most recent closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// The status to persist.
    pub new_status: TicketStatus,
    /// The `closed_at` value to stamp, or `None` to leave the column alone.
    pub closed_at: Option<String>,
}

impl StatusChange {
    /// Plans a status change.
    ///
    /// # Arguments
    ///
    /// * `requested` - The status being set
    /// * `now` - The current timestamp, stamped into `closed_at` when the
    ///   requested status is `Closed`
    #[must_use]
    pub fn plan(requested: TicketStatus, now: &str) -> Self {
        let closed_at = if requested == TicketStatus::Closed {
            Some(now.to_string())
        } else {
            None
        };
        Self {
            new_status: requested,
            closed_at,
        }
    }
}

/// Returns the status forced by a reply, if any.
///
/// A staff reply always moves the ticket to `Pending`, regardless of its
/// current status. This is how a staff reply to a closed ticket reopens it.
/// Customer replies never change status.
#[must_use]
pub const fn staff_reply_override(is_staff_reply: bool) -> Option<TicketStatus> {
    if is_staff_reply {
        Some(TicketStatus::Pending)
    } else {
        None
    }
}
