// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for ticket operations.
//!
//! Handlers enforce authorization and input validation, then delegate to the
//! persistence adapter. The persistence layer itself performs no privilege
//! checks; every role decision lives here.

use tracing::error;
use vio_support_domain::{TicketNumber, TicketStatus, validate_message, validate_subject};
use vio_support_persistence::{
    NewTicket, Persistence, ReplyDetail, TicketDetail, TicketStats, TicketSummary,
};

use crate::auth::{AuthenticatedActor, AuthorizationService, Role};
use crate::error::{ApiError, translate_domain_error};
use crate::reply_policy::enforce_reply_policy;
use crate::request_response::{
    AddReplyRequest, AssignTicketRequest, CreateTicketRequest, CreateTicketResponse,
    UpdateStatusRequest,
};

/// Opens a new support ticket.
///
/// The subject and opening message are validated before any write. Category
/// and priority fall back to their defaults when unrecognized.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The ticket fields
/// * `actor` - The authenticated account opening the ticket
///
/// # Errors
///
/// Returns `InvalidInput` for a blank or oversized subject or message, or
/// `Internal` if persistence fails.
pub fn create_ticket(
    persistence: &mut Persistence,
    request: &CreateTicketRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateTicketResponse, ApiError> {
    validate_subject(&request.subject).map_err(translate_domain_error)?;
    validate_message(&request.message).map_err(translate_domain_error)?;

    let ticket = NewTicket {
        customer_id: request.customer_id,
        order_id: request.order_id,
        subject: request.subject.clone(),
        category: request.resolved_category(),
        priority: request.resolved_priority(),
    };

    let created = persistence.create_ticket(&ticket, actor.user_id, Some(&request.message))?;

    Ok(CreateTicketResponse {
        ticket_id: created.ticket_id,
        ticket_number: created.ticket_number.as_str().to_string(),
        message: format!("Support ticket {} created", created.ticket_number),
    })
}

/// Appends a reply to a ticket.
///
/// Customers may not reply to closed tickets. A reply from a Staff or Admin
/// account counts as a staff reply and forces the ticket to `pending`.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The reply fields
/// * `actor` - The authenticated reply author
///
/// # Returns
///
/// The `reply_id` assigned to the new reply.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the ticket does not exist,
/// `DomainRuleViolation` if the reply policy forbids the reply, or
/// `InvalidInput` for a blank or oversized message.
pub fn add_reply(
    persistence: &mut Persistence,
    request: &AddReplyRequest,
    actor: &AuthenticatedActor,
) -> Result<i64, ApiError> {
    validate_message(&request.message).map_err(translate_domain_error)?;

    let ticket = fetch_ticket(persistence, request.ticket_id, actor)?;
    enforce_reply_policy(actor.role, ticket.status)?;

    let reply_id = persistence.add_reply(
        request.ticket_id,
        actor.user_id,
        &request.message,
        actor.role.is_staff(),
        request.attachment_path.as_deref(),
    )?;
    Ok(reply_id)
}

/// Changes a ticket's status.
///
/// Any status may follow any other.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The ticket and target status
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `Unauthorized` below the Staff role, `InvalidInput` for an
/// unrecognized status string, or `ResourceNotFound` for a missing ticket.
pub fn update_ticket_status(
    persistence: &mut Persistence,
    request: &UpdateStatusRequest,
    actor: &AuthenticatedActor,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_change_status(actor)?;

    let status: TicketStatus = request.status.parse().map_err(translate_domain_error)?;

    persistence.update_status(request.ticket_id, status, actor.user_id)?;
    Ok(())
}

/// Assigns a ticket to a staff member, or unassigns it.
///
/// A `staff_user_id` of `None` or `0` clears the assignment; `0` is the
/// legacy empty-select form value.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The ticket and assignee
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `Unauthorized` below the Admin role, or `ResourceNotFound` for a
/// missing ticket.
pub fn assign_ticket(
    persistence: &mut Persistence,
    request: &AssignTicketRequest,
    actor: &AuthenticatedActor,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_assign_ticket(actor)?;

    let staff_user_id = request.staff_user_id.filter(|id| *id != 0);
    persistence.assign_ticket(request.ticket_id, staff_user_id, actor.user_id)?;
    Ok(())
}

/// Deletes a ticket and all of its replies.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ticket_id` - The ticket to delete
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `Unauthorized` below the Admin role, or `ResourceNotFound` for a
/// missing ticket.
pub fn delete_ticket(
    persistence: &mut Persistence,
    ticket_id: i64,
    actor: &AuthenticatedActor,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_delete_ticket(actor)?;

    persistence.delete_ticket(ticket_id, actor.user_id)?;
    Ok(())
}

/// Fetches a single ticket with customer, order, and assignee context.
///
/// Customers can only see their own tickets; a foreign ticket reads as not
/// found rather than forbidden, so ticket IDs are not probeable.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ticket_id` - The ticket to fetch
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `ResourceNotFound` if the ticket does not exist or the actor may
/// not see it.
pub fn get_ticket(
    persistence: &mut Persistence,
    ticket_id: i64,
    actor: &AuthenticatedActor,
) -> Result<TicketDetail, ApiError> {
    fetch_ticket(persistence, ticket_id, actor)
}

/// Fetches a single ticket by its public ticket number.
///
/// The same visibility rule as [`get_ticket`] applies.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ticket_number` - The ticket number to look up
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed ticket number, or
/// `ResourceNotFound` if the ticket does not exist or the actor may not
/// see it.
pub fn get_ticket_by_number(
    persistence: &mut Persistence,
    ticket_number: &str,
    actor: &AuthenticatedActor,
) -> Result<TicketDetail, ApiError> {
    let number: TicketNumber = ticket_number.parse().map_err(translate_domain_error)?;

    let detail =
        persistence
            .find_ticket_by_number(&number)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Ticket"),
                message: format!("Ticket {number} does not exist"),
            })?;
    check_visibility(&detail, actor)?;
    Ok(detail)
}

/// Lists a ticket's replies oldest first, with author context.
///
/// The same visibility rule as [`get_ticket`] applies.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ticket_id` - The ticket whose replies to list
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `ResourceNotFound` if the ticket does not exist or the actor may
/// not see it.
pub fn list_ticket_replies(
    persistence: &mut Persistence,
    ticket_id: i64,
    actor: &AuthenticatedActor,
) -> Result<Vec<ReplyDetail>, ApiError> {
    fetch_ticket(persistence, ticket_id, actor)?;
    let replies = persistence.list_replies(ticket_id)?;
    Ok(replies)
}

/// Lists a customer's tickets, newest first.
///
/// The caller resolves the session to its `customer_id` before calling; this
/// handler does not re-check ownership of the customer record.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `customer_id` - The owning customer
/// * `status` - Optional status filter
/// * `limit` - Maximum number of rows
///
/// # Errors
///
/// Returns `Internal` if persistence fails.
pub fn my_tickets(
    persistence: &mut Persistence,
    customer_id: i64,
    status: Option<TicketStatus>,
    limit: i64,
) -> Result<Vec<TicketSummary>, ApiError> {
    let tickets = persistence.tickets_for_customer(customer_id, status, limit)?;
    Ok(tickets)
}

/// Lists all tickets for the staff queue, most urgent first.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `status` - Optional status filter
/// * `limit` - Maximum number of rows
/// * `offset` - Number of rows to skip
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `Unauthorized` below the Staff role, or `Internal` if
/// persistence fails.
pub fn all_tickets(
    persistence: &mut Persistence,
    status: Option<TicketStatus>,
    limit: i64,
    offset: i64,
    actor: &AuthenticatedActor,
) -> Result<Vec<TicketSummary>, ApiError> {
    AuthorizationService::authorize_view_all_tickets(actor)?;
    let tickets = persistence.list_tickets(status, limit, offset)?;
    Ok(tickets)
}

/// Searches tickets by case-insensitive substring, newest first.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `query` - The raw search input
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `Unauthorized` below the Staff role, or `Internal` if
/// persistence fails.
pub fn search_tickets(
    persistence: &mut Persistence,
    query: &str,
    actor: &AuthenticatedActor,
) -> Result<Vec<TicketSummary>, ApiError> {
    AuthorizationService::authorize_search(actor)?;
    let results = persistence.search_tickets(query)?;
    Ok(results)
}

/// Computes aggregate ticket statistics.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `Unauthorized` below the Staff role, or `Internal` if
/// persistence fails.
pub fn ticket_stats(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<TicketStats, ApiError> {
    AuthorizationService::authorize_view_stats(actor)?;
    let stats = persistence.ticket_stats()?;
    Ok(stats)
}

/// Computes aggregate ticket statistics, degrading to zeros on failure.
///
/// Dashboard surfaces call this instead of [`ticket_stats`] so a storage
/// failure renders an empty dashboard instead of an error page. The failure
/// is logged; zeroed statistics mean "unknown", not "no tickets".
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns `Unauthorized` below the Staff role. Persistence failures do not
/// surface as errors.
pub fn ticket_stats_or_zeroed(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<TicketStats, ApiError> {
    AuthorizationService::authorize_view_stats(actor)?;
    match persistence.ticket_stats() {
        Ok(stats) => Ok(stats),
        Err(err) => {
            error!("Ticket statistics query failed, serving zeroed stats: {err}");
            Ok(TicketStats::zeroed())
        }
    }
}

/// Fetches a ticket and applies the customer visibility rule.
fn fetch_ticket(
    persistence: &mut Persistence,
    ticket_id: i64,
    actor: &AuthenticatedActor,
) -> Result<TicketDetail, ApiError> {
    let detail = persistence
        .find_ticket(ticket_id)?
        .ok_or_else(|| not_found(ticket_id))?;
    check_visibility(&detail, actor)?;
    Ok(detail)
}

/// A customer may only see tickets whose customer account is their own.
fn check_visibility(detail: &TicketDetail, actor: &AuthenticatedActor) -> Result<(), ApiError> {
    if actor.role == Role::Customer {
        let owner_user_id = detail.customer.as_ref().map(|c| c.user_id);
        if owner_user_id != Some(actor.user_id) {
            return Err(not_found(detail.ticket_id));
        }
    }
    Ok(())
}

fn not_found(ticket_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Ticket"),
        message: format!("Ticket {ticket_id} does not exist"),
    }
}
