// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the customer and staff ticket listings.

use super::{create_customer, create_staff, new_ticket, new_ticket_with_priority, setup};
use vio_support_domain::{TicketPriority, TicketStatus};

#[test]
fn test_list_tickets_orders_by_priority_rank_first() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    // Insert in an order unrelated to rank to prove the sort does the work.
    for (subject, priority) in [
        ("Low one", TicketPriority::Low),
        ("Urgent one", TicketPriority::Urgent),
        ("High one", TicketPriority::High),
        ("Normal one", TicketPriority::Normal),
    ] {
        persistence
            .create_ticket(
                &new_ticket_with_priority(customer_id, subject, priority),
                user_id,
                None,
            )
            .unwrap();
    }

    let listed = persistence.list_tickets(None, 50, 0).unwrap();
    let subjects: Vec<&str> = listed.iter().map(|t| t.subject.as_str()).collect();
    assert_eq!(
        subjects,
        vec!["Urgent one", "High one", "Normal one", "Low one"]
    );
}

#[test]
fn test_list_tickets_filters_by_status() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff_id = create_staff(&mut persistence, "Grace", "Hopper", "grace@example.com");

    let first = persistence
        .create_ticket(&new_ticket(customer_id, "Stays open"), user_id, None)
        .unwrap();
    let second = persistence
        .create_ticket(&new_ticket(customer_id, "Gets resolved"), user_id, None)
        .unwrap();
    persistence
        .update_status(second.ticket_id, TicketStatus::Resolved, staff_id)
        .unwrap();

    let open_only = persistence
        .list_tickets(Some(TicketStatus::Open), 50, 0)
        .unwrap();
    assert_eq!(open_only.len(), 1);
    assert_eq!(open_only[0].ticket_id, first.ticket_id);

    let resolved_only = persistence
        .list_tickets(Some(TicketStatus::Resolved), 50, 0)
        .unwrap();
    assert_eq!(resolved_only.len(), 1);
    assert_eq!(resolved_only[0].ticket_id, second.ticket_id);
}

#[test]
fn test_list_tickets_respects_limit_and_offset() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    for i in 0..5 {
        persistence
            .create_ticket(&new_ticket(customer_id, &format!("Ticket {i}")), user_id, None)
            .unwrap();
    }

    let first_page = persistence.list_tickets(None, 2, 0).unwrap();
    let second_page = persistence.list_tickets(None, 2, 2).unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 2);
    assert_ne!(first_page[0].ticket_id, second_page[0].ticket_id);
    assert_ne!(first_page[1].ticket_id, second_page[1].ticket_id);
}

#[test]
fn test_listing_carries_reply_count_and_customer_name() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let created = persistence
        .create_ticket(
            &new_ticket(customer_id, "Engine noise"),
            user_id,
            Some("It rattles."),
        )
        .unwrap();
    persistence
        .add_reply(created.ticket_id, user_id, "Still rattling.", false, None)
        .unwrap();

    let listed = persistence.list_tickets(None, 50, 0).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].reply_count, 2);
    assert_eq!(listed[0].customer_name.as_deref(), Some("Ada Lovelace"));
}

#[test]
fn test_tickets_for_customer_isolates_customers() {
    let mut persistence = setup();
    let (ada_user, ada_customer) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let (bob_user, bob_customer) =
        create_customer(&mut persistence, "Bob", "Martin", "bob@example.com");

    persistence
        .create_ticket(&new_ticket(ada_customer, "Ada's issue"), ada_user, None)
        .unwrap();
    persistence
        .create_ticket(&new_ticket(bob_customer, "Bob's issue"), bob_user, None)
        .unwrap();

    let ada_tickets = persistence
        .tickets_for_customer(ada_customer, None, 50)
        .unwrap();
    assert_eq!(ada_tickets.len(), 1);
    assert_eq!(ada_tickets[0].subject, "Ada's issue");

    let bob_tickets = persistence
        .tickets_for_customer(bob_customer, None, 50)
        .unwrap();
    assert_eq!(bob_tickets.len(), 1);
    assert_eq!(bob_tickets[0].subject, "Bob's issue");
}

#[test]
fn test_tickets_for_customer_filters_by_status() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");
    let staff_id = create_staff(&mut persistence, "Grace", "Hopper", "grace@example.com");

    persistence
        .create_ticket(&new_ticket(customer_id, "Stays open"), user_id, None)
        .unwrap();
    let closed = persistence
        .create_ticket(&new_ticket(customer_id, "Gets closed"), user_id, None)
        .unwrap();
    persistence
        .update_status(closed.ticket_id, TicketStatus::Closed, staff_id)
        .unwrap();

    let closed_only = persistence
        .tickets_for_customer(customer_id, Some(TicketStatus::Closed), 50)
        .unwrap();
    assert_eq!(closed_only.len(), 1);
    assert_eq!(closed_only[0].subject, "Gets closed");
}

#[test]
fn test_tickets_for_customer_newest_first() {
    let mut persistence = setup();
    let (user_id, customer_id) =
        create_customer(&mut persistence, "Ada", "Lovelace", "ada@example.com");

    let first = persistence
        .create_ticket(&new_ticket(customer_id, "First"), user_id, None)
        .unwrap();
    let second = persistence
        .create_ticket(&new_ticket(customer_id, "Second"), user_id, None)
        .unwrap();

    let listed = persistence
        .tickets_for_customer(customer_id, None, 50)
        .unwrap();
    assert_eq!(listed[0].ticket_id, second.ticket_id);
    assert_eq!(listed[1].ticket_id, first.ticket_id);
}
