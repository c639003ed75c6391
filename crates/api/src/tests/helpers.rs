// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for API tests.

use vio_support_persistence::Persistence;

use crate::auth::{AuthenticatedActor, Role};
use crate::request_response::CreateTicketRequest;

pub fn setup() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

/// Creates a customer account and record.
///
/// Returns the actor plus the `customer_id`.
pub fn customer_actor(
    persistence: &mut Persistence,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> (AuthenticatedActor, i64) {
    let user_id = persistence
        .create_user_account(first_name, last_name, email, "customer")
        .unwrap();
    let customer_id = persistence.create_customer(user_id).unwrap();
    (AuthenticatedActor::new(user_id, Role::Customer), customer_id)
}

pub fn staff_actor(persistence: &mut Persistence, email: &str) -> AuthenticatedActor {
    let user_id = persistence
        .create_user_account("Sam", "Support", email, "staff")
        .unwrap();
    AuthenticatedActor::new(user_id, Role::Staff)
}

pub fn admin_actor(persistence: &mut Persistence, email: &str) -> AuthenticatedActor {
    let user_id = persistence
        .create_user_account("Alex", "Admin", email, "admin")
        .unwrap();
    AuthenticatedActor::new(user_id, Role::Admin)
}

pub fn create_request(customer_id: i64, subject: &str) -> CreateTicketRequest {
    CreateTicketRequest {
        customer_id,
        order_id: None,
        subject: subject.to_string(),
        category: String::from("general"),
        priority: String::from("normal"),
        message: String::from("Something is wrong with my import."),
    }
}
