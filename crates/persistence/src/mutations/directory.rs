// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory mutations: user accounts, customers, and orders.
//!
//! The ticket core treats these tables as read-only collaborator data owned
//! by the account and order subsystems. The creators here exist for seeding
//! by calling surfaces and tests.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{customers, orders, users};
use crate::error::PersistenceError;

/// Creates a user account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `first_name` - The user's first name
/// * `last_name` - The user's last name
/// * `email` - The user's email address (unique)
/// * `role` - The account role (`customer`, `staff`, or `admin`)
///
/// # Errors
///
/// Returns an error if the insert fails, including on duplicate email.
pub fn create_user_account(
    conn: &mut SqliteConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
    role: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating user account for email: {}, role: {}", email, role);

    diesel::insert_into(users::table)
        .values((
            users::first_name.eq(first_name),
            users::last_name.eq(last_name),
            users::email.eq(email),
            users::role.eq(role),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;

    info!(user_id, "User account created");
    Ok(user_id)
}

/// Creates a customer record linked to a user account.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The account user ID
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_customer(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(customers::table)
        .values(customers::user_id.eq(user_id))
        .execute(conn)?;

    let customer_id: i64 = get_last_insert_rowid(conn)?;

    info!(customer_id, user_id, "Customer created");
    Ok(customer_id)
}

/// Creates an order for a customer.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `customer_id` - The owning customer
/// * `order_number` - The unique order number
///
/// # Errors
///
/// Returns an error if the insert fails, including on duplicate order number.
pub fn create_order(
    conn: &mut SqliteConnection,
    customer_id: i64,
    order_number: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(orders::table)
        .values((
            orders::customer_id.eq(customer_id),
            orders::order_number.eq(order_number),
        ))
        .execute(conn)?;

    let order_id: i64 = get_last_insert_rowid(conn)?;

    info!(order_id, customer_id, "Order created");
    Ok(order_id)
}
