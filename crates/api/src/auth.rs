// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use crate::error::AuthError;

/// Account roles for authorization.
///
/// Roles determine which ticket operations an authenticated account may
/// perform. Data-level ownership checks (a customer seeing only their own
/// tickets) are separate from these role checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Customer role: account holders who open tickets about their own orders.
    ///
    /// Customers may:
    /// - open tickets and reply to their own open tickets
    /// - view their own tickets and replies
    Customer,
    /// Staff role: support agents working the ticket queue.
    ///
    /// Staff may additionally:
    /// - view, search, and reply to any ticket
    /// - change ticket status
    /// - view aggregate statistics
    Staff,
    /// Admin role: operators with structural and corrective authority.
    ///
    /// Admins may additionally:
    /// - assign and unassign tickets
    /// - delete tickets
    Admin,
}

impl Role {
    /// Whether this role replies to tickets in a staff capacity.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Staff | Self::Admin)
    }
}

/// An authenticated account with an associated role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The account's user ID.
    pub user_id: i64,
    /// The role assigned to this account.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The account's user ID
    /// * `role` - The role assigned to this account
    #[must_use]
    pub const fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// This service determines whether an authenticated actor has permission
/// to perform a specific ticket operation based on their role.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to view the full ticket queue.
    ///
    /// Staff and Admin actors may view all tickets.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have at least the Staff role.
    pub fn authorize_view_all_tickets(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "view_all_tickets")
    }

    /// Checks if an actor is authorized to search tickets.
    ///
    /// Staff and Admin actors may search across all tickets.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have at least the Staff role.
    pub fn authorize_search(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "search_tickets")
    }

    /// Checks if an actor is authorized to view aggregate statistics.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have at least the Staff role.
    pub fn authorize_view_stats(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "view_ticket_stats")
    }

    /// Checks if an actor is authorized to change a ticket's status.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have at least the Staff role.
    pub fn authorize_change_status(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_staff(actor, "change_ticket_status")
    }

    /// Checks if an actor is authorized to assign a ticket.
    ///
    /// Only Admin actors may assign or unassign tickets.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_assign_ticket(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "assign_ticket")
    }

    /// Checks if an actor is authorized to delete a ticket.
    ///
    /// Only Admin actors may delete tickets.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_delete_ticket(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "delete_ticket")
    }

    fn require_staff(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        if actor.role.is_staff() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Staff"),
            })
        }
    }

    fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Customer | Role::Staff => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }
}
