// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input validation and reply policy tests.

use super::helpers::{create_request, customer_actor, setup, staff_actor};
use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{AddReplyRequest, CreateTicketRequest, UpdateStatusRequest};

#[test]
fn test_blank_subject_is_rejected() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let mut request = create_request(customer_id, "   ");
    request.subject = String::from("   ");
    let result = handlers::create_ticket(&mut persistence, &request, &customer);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "subject"
    ));
}

#[test]
fn test_oversized_subject_is_rejected() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let request = create_request(customer_id, &"x".repeat(256));
    let result = handlers::create_ticket(&mut persistence, &request, &customer);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "subject"
    ));
}

#[test]
fn test_blank_message_is_rejected() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let request = CreateTicketRequest {
        message: String::new(),
        ..create_request(customer_id, "Engine noise")
    };
    let result = handlers::create_ticket(&mut persistence, &request, &customer);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "message"
    ));
}

#[test]
fn test_unrecognized_status_is_rejected() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff = staff_actor(&mut persistence, "sam@example.com");

    let created = handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Engine noise"),
        &customer,
    )
    .unwrap();

    let result = handlers::update_ticket_status(
        &mut persistence,
        &UpdateStatusRequest {
            ticket_id: created.ticket_id,
            status: String::from("archived"),
        },
        &staff,
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "status"
    ));
}

#[test]
fn test_customer_cannot_reply_to_closed_ticket() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff = staff_actor(&mut persistence, "sam@example.com");

    let created = handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Engine noise"),
        &customer,
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

    let result = handlers::add_reply(
        &mut persistence,
        &AddReplyRequest {
            ticket_id: created.ticket_id,
            message: String::from("One more thing."),
            attachment_path: None,
        },
        &customer,
    );
    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_staff_may_reply_to_closed_ticket() {
    let mut persistence = setup();
    let (customer, customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff = staff_actor(&mut persistence, "sam@example.com");

    let created = handlers::create_ticket(
        &mut persistence,
        &create_request(customer_id, "Engine noise"),
        &customer,
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

    let result = handlers::add_reply(
        &mut persistence,
        &AddReplyRequest {
            ticket_id: created.ticket_id,
            message: String::from("Following up."),
            attachment_path: None,
        },
        &staff,
    );
    assert!(result.is_ok());
}

#[test]
fn test_reply_to_missing_ticket_is_not_found() {
    let mut persistence = setup();
    let (customer, _customer_id) =
        customer_actor(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let result = handlers::add_reply(
        &mut persistence,
        &AddReplyRequest {
            ticket_id: 9999,
            message: String::from("Hello?"),
            attachment_path: None,
        },
        &customer,
    );
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
