// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end ticket lifecycle tests through the API layer.

use super::helpers::{admin_actor, create_request, customer_actor, setup, staff_actor};
use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{AddReplyRequest, AssignTicketRequest, UpdateStatusRequest};
use vio_support_domain::TicketStatus;

#[test]
fn test_full_ticket_lifecycle() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff = staff_actor(&mut persistence, "sam@example.com");

    // Customer opens a ticket.
    let created = handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Engine noise"),
        &customer,
    )
    .unwrap();
    assert!(created.ticket_number.starts_with("TKT-"));

    // Staff replies; the ticket moves to pending.
    handlers::add_reply(
        &mut persistence,
        &AddReplyRequest {
            ticket_id: created.ticket_id,
            message: String::from("Can you describe the noise?"),
            attachment_path: None,
        },
        &staff,
    )
    .unwrap();
    let detail = handlers::get_ticket(&mut persistence, created.ticket_id, &staff).unwrap();
    assert_eq!(detail.status, TicketStatus::Pending);

    // Staff resolves, then closes.
    handlers::update_ticket_status(
        &mut persistence,
        &UpdateStatusRequest {
            ticket_id: created.ticket_id,
            status: String::from("resolved"),
        },
        &staff,
    )
    .unwrap();
    handlers::update_ticket_status(
        &mut persistence,
        &UpdateStatusRequest {
            ticket_id: created.ticket_id,
            status: String::from("closed"),
        },
        &staff,
    )
    .unwrap();

    let detail = handlers::get_ticket(&mut persistence, created.ticket_id, &staff).unwrap();
    assert_eq!(detail.status, TicketStatus::Closed);
    assert!(detail.closed_at.is_some());

    // A later staff reply reopens the ticket without clearing closed_at.
    handlers::add_reply(
        &mut persistence,
        &AddReplyRequest {
            ticket_id: created.ticket_id,
            message: String::from("Reopening after a new report."),
            attachment_path: None,
        },
        &staff,
    )
    .unwrap();
    let detail = handlers::get_ticket(&mut persistence, created.ticket_id, &staff).unwrap();
    assert_eq!(detail.status, TicketStatus::Pending);
    assert!(detail.closed_at.is_some());
}

#[test]
fn test_create_ticket_stores_opening_message() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let created = handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Engine noise"),
        &customer,
    )
    .unwrap();

    let replies =
        handlers::list_ticket_replies(&mut persistence, created.ticket_id, &customer).unwrap();
    assert_eq!(replies.len(), 1);
    assert!(!replies[0].is_staff_reply);
}

#[test]
fn test_get_ticket_by_number() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let created = handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Engine noise"),
        &customer,
    )
    .unwrap();

    let detail =
        handlers::get_ticket_by_number(&mut persistence, &created.ticket_number, &customer)
            .unwrap();
    assert_eq!(detail.ticket_id, created.ticket_id);
}

#[test]
fn test_get_ticket_by_malformed_number_is_invalid_input() {
    let mut persistence = setup();
    let staff = staff_actor(&mut persistence, "sam@example.com");

    let result = handlers::get_ticket_by_number(&mut persistence, "not-a-number", &staff);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_customer_cannot_see_foreign_ticket() {
    let mut persistence = setup();
    let (ada, ada_customer) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let (bob, _bob_customer) = customer_actor(&mut persistence, "Bob", "Martin", "bob@example.com");

    let created = handlers::create_ticket(
        &mut persistence,
        &create_request(ada_customer, "Ada's issue"),
        &ada,
    )
    .unwrap();

    // Foreign tickets read as not found, never as forbidden.
    let result = handlers::get_ticket(&mut persistence, created.ticket_id, &bob);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));

    // The owner still sees it.
    assert!(handlers::get_ticket(&mut persistence, created.ticket_id, &ada).is_ok());
}

#[test]
fn test_my_tickets_lists_only_that_customer() {
    let mut persistence = setup();
    let (ada, ada_customer) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let (bob, bob_customer) = customer_actor(&mut persistence, "Bob", "Martin", "bob@example.com");

    handlers::create_ticket(
        &mut persistence,
        &create_request(ada_customer, "Ada's issue"),
        &ada,
    )
    .unwrap();
    handlers::create_ticket(
        &mut persistence,
        &create_request(bob_customer, "Bob's issue"),
        &bob,
    )
    .unwrap();

    let ada_tickets = handlers::my_tickets(&mut persistence, ada_customer, None, 50).unwrap();
    assert_eq!(ada_tickets.len(), 1);
    assert_eq!(ada_tickets[0].subject, "Ada's issue");
}

#[test]
fn test_admin_assigns_and_deletes() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff = staff_actor(&mut persistence, "sam@example.com");
    let admin = admin_actor(&mut persistence, "alex@example.com");

    let created = handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Engine noise"),
        &customer,
    )
    .unwrap();

    handlers::assign_ticket(
        &mut persistence,
        &AssignTicketRequest {
            ticket_id: created.ticket_id,
            staff_user_id: Some(staff.user_id),
        },
        &admin,
    )
    .unwrap();
    let detail = handlers::get_ticket(&mut persistence, created.ticket_id, &admin).unwrap();
    assert_eq!(detail.assigned_to, Some(staff.user_id));

    handlers::delete_ticket(&mut persistence, created.ticket_id, &admin).unwrap();
    let result = handlers::get_ticket(&mut persistence, created.ticket_id, &admin);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_stats_flow_through_api() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff = staff_actor(&mut persistence, "sam@example.com");

    handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Engine noise"),
        &customer,
    )
    .unwrap();

    let stats = handlers::ticket_stats(&mut persistence, &staff).unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.open, 1);

    let degraded = handlers::ticket_stats_or_zeroed(&mut persistence, &staff).unwrap();
    assert_eq!(degraded, stats);
}

#[test]
fn test_search_through_api() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff = staff_actor(&mut persistence, "sam@example.com");

    handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Gearbox whine"),
        &customer,
    )
    .unwrap();

    let results = handlers::search_tickets(&mut persistence, "GEARBOX", &staff).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].subject, "Gearbox whine");
}
