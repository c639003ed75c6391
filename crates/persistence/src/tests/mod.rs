// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod listing_tests;
mod reply_tests;

use crate::{NewTicket, Persistence};
use vio_support_domain::{TicketCategory, TicketPriority};

pub fn setup() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Creates a customer account plus its customer record.
///
/// Returns `(user_id, customer_id)`.
pub fn create_customer(
    persistence: &mut Persistence,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> (i64, i64) {
    let user_id = persistence
        .create_user_account(first_name, last_name, email, "customer")
        .unwrap();
    let customer_id = persistence.create_customer(user_id).unwrap();
    (user_id, customer_id)
}

pub fn create_staff(
    persistence: &mut Persistence,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> i64 {
    persistence
        .create_user_account(first_name, last_name, email, "staff")
        .unwrap()
}

pub fn new_ticket(customer_id: i64, subject: &str) -> NewTicket {
    NewTicket {
        customer_id,
        order_id: None,
        subject: subject.to_string(),
        category: TicketCategory::General,
        priority: TicketPriority::Normal,
    }
}

/// Backdates a ticket's `updated_at` so a later refresh is observable
/// within the one-second timestamp resolution.
pub fn backdate_updated_at(persistence: &mut Persistence, ticket_id: i64) {
    use crate::diesel_schema::support_tickets;
    use diesel::prelude::*;

    diesel::update(support_tickets::table)
        .filter(support_tickets::ticket_id.eq(ticket_id))
        .set(support_tickets::updated_at.eq(BACKDATED_TIMESTAMP))
        .execute(&mut persistence.conn)
        .unwrap();
}

pub const BACKDATED_TIMESTAMP: &str = "2020-01-01 00:00:00";

pub fn new_ticket_with_priority(
    customer_id: i64,
    subject: &str,
    priority: TicketPriority,
) -> NewTicket {
    NewTicket {
        customer_id,
        order_id: None,
        subject: subject.to_string(),
        category: TicketCategory::General,
        priority,
    }
}
