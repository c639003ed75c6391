// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for ticket replies and the staff-reply status override.

use super::{
    BACKDATED_TIMESTAMP, backdate_updated_at, create_customer, create_staff, new_ticket, setup,
};
use crate::PersistenceError;
use vio_support_domain::TicketStatus;

#[test]
fn test_customer_reply_leaves_status_unchanged() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let created = persistence
        .create_ticket(&new_ticket(customer_id, "Engine noise"), user_id, None)
        .unwrap();

    persistence
        .add_reply(created.ticket_id, user_id, "Still rattling.", false, None)
        .unwrap();

    let ticket = persistence.find_ticket(created.ticket_id).unwrap().unwrap();
    assert_eq!(ticket.status, TicketStatus::Open);
}

#[test]
fn test_staff_reply_forces_pending_from_every_status() {
    for initial in [
        TicketStatus::Open,
        TicketStatus::Pending,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ] {
        let mut persistence = setup();
        let (user_id, customer_id) =
            create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
        let staff_id = create_staff(&mut persistence, "Grace", "Hopper", "grace@example.com");
        let created = persistence
            .create_ticket(&new_ticket(customer_id, "Engine noise"), user_id, None)
            .unwrap();

        persistence
            .update_status(created.ticket_id, initial, staff_id)
            .unwrap();

        persistence
            .add_reply(created.ticket_id, staff_id, "Looking into it.", true, None)
            .unwrap();

        let ticket = persistence.find_ticket(created.ticket_id).unwrap().unwrap();
        assert_eq!(
            ticket.status,
            TicketStatus::Pending,
            "staff reply on a {initial} ticket must land it in pending"
        );
    }
}

#[test]
fn test_staff_reply_reopens_closed_ticket_without_clearing_closed_at() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff_id = create_staff(&mut persistence, "Grace", "Hopper", "grace@example.com");
    let created = persistence
        .create_ticket(&new_ticket(customer_id, "Engine noise"), user_id, None)
        .unwrap();

    persistence
        .update_status(created.ticket_id, TicketStatus::Closed, staff_id)
        .unwrap();
    let closed = persistence.find_ticket(created.ticket_id).unwrap().unwrap();
    let closed_at = closed.closed_at.clone().unwrap();

    persistence
        .add_reply(created.ticket_id, staff_id, "Reopening this.", true, None)
        .unwrap();

    let reopened = persistence.find_ticket(created.ticket_id).unwrap().unwrap();
    assert_eq!(reopened.status, TicketStatus::Pending);
    assert_eq!(reopened.closed_at, Some(closed_at));
}

#[test]
fn test_replies_are_listed_oldest_first_with_authors() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff_id = create_staff(&mut persistence, "Grace", "Hopper", "grace@example.com");
    let created = persistence
        .create_ticket(
            &new_ticket(customer_id, "Engine noise"),
            user_id,
            Some("It rattles."),
        )
        .unwrap();

    persistence
        .add_reply(created.ticket_id, staff_id, "Can you record it?", true, None)
        .unwrap();
    persistence
        .add_reply(created.ticket_id, user_id, "Recording attached.", false, None)
        .unwrap();

    let replies = persistence.list_replies(created.ticket_id).unwrap();
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0].message, "It rattles.");
    assert_eq!(replies[1].message, "Can you record it?");
    assert!(replies[1].is_staff_reply);
    assert_eq!(replies[1].author_name.as_deref(), Some("Grace Hopper"));
    assert_eq!(replies[1].author_role.as_deref(), Some("staff"));
    assert_eq!(replies[2].author_name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(replies[2].author_role.as_deref(), Some("customer"));
}

#[test]
fn test_reply_stores_attachment_path() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let created = persistence
        .create_ticket(&new_ticket(customer_id, "Engine noise"), user_id, None)
        .unwrap();

    persistence
        .add_reply(
            created.ticket_id,
            user_id,
            "Recording attached.",
            false,
            Some("uploads/rattle.ogg"),
        )
        .unwrap();

    let replies = persistence.list_replies(created.ticket_id).unwrap();
    assert_eq!(
        replies[0].attachment_path.as_deref(),
        Some("uploads/rattle.ogg")
    );
}

#[test]
fn test_reply_to_missing_ticket_fails() {
    let mut persistence = setup();
    let (user_id, _customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let result = persistence.add_reply(9999, user_id, "Hello?", false, None);
    assert!(matches!(result, Err(PersistenceError::TicketNotFound(9999))));
}

#[test]
fn test_customer_reply_refreshes_updated_at() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let created = persistence
        .create_ticket(&new_ticket(customer_id, "Engine noise"), user_id, None)
        .unwrap();
    backdate_updated_at(&mut persistence, created.ticket_id);

    persistence
        .add_reply(created.ticket_id, user_id, "Still rattling.", false, None)
        .unwrap();

    let ticket = persistence.find_ticket(created.ticket_id).unwrap().unwrap();
    assert_ne!(ticket.updated_at, BACKDATED_TIMESTAMP);
}

#[test]
fn test_staff_reply_refreshes_updated_at() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff_id = create_staff(&mut persistence, "Grace", "Hopper", "grace@example.com");
    let created = persistence
        .create_ticket(&new_ticket(customer_id, "Engine noise"), user_id, None)
        .unwrap();
    backdate_updated_at(&mut persistence, created.ticket_id);

    persistence
        .add_reply(created.ticket_id, staff_id, "Looking into it.", true, None)
        .unwrap();

    let ticket = persistence.find_ticket(created.ticket_id).unwrap().unwrap();
    assert_ne!(ticket.updated_at, BACKDATED_TIMESTAMP);
}
