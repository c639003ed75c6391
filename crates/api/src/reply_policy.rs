// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reply policy enforcement.
//!
//! Staff may reply to a ticket in any status, which is also how a resolved
//! or closed ticket gets reopened. Customers may not reply once a ticket is
//! closed; they must open a new one.

use thiserror::Error;
use vio_support_domain::TicketStatus;

use crate::auth::Role;

/// Reply policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplyPolicyError {
    /// A customer tried to reply to a closed ticket.
    #[error("Ticket is closed; please open a new ticket instead of replying")]
    TicketClosed,
}

/// Checks whether an account with the given role may reply to a ticket in
/// the given status.
///
/// # Arguments
///
/// * `role` - The replying account's role
/// * `status` - The ticket's current status
///
/// # Errors
///
/// Returns a `ReplyPolicyError` if the reply is not allowed.
pub const fn enforce_reply_policy(role: Role, status: TicketStatus) -> Result<(), ReplyPolicyError> {
    match (role, status) {
        (Role::Customer, TicketStatus::Closed) => Err(ReplyPolicyError::TicketClosed),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_cannot_reply_to_closed_ticket() {
        assert_eq!(
            enforce_reply_policy(Role::Customer, TicketStatus::Closed),
            Err(ReplyPolicyError::TicketClosed)
        );
    }

    #[test]
    fn test_customer_may_reply_to_resolved_ticket() {
        assert!(enforce_reply_policy(Role::Customer, TicketStatus::Resolved).is_ok());
    }

    #[test]
    fn test_staff_may_reply_to_closed_ticket() {
        assert!(enforce_reply_policy(Role::Staff, TicketStatus::Closed).is_ok());
        assert!(enforce_reply_policy(Role::Admin, TicketStatus::Closed).is_ok());
    }
}
