// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the VIO support-ticket subsystem.
//!
//! This crate provides database persistence for support tickets, ticket
//! replies, and the activity log, along with the minimal directory tables
//! (users, customers, orders) the ticket tables reference. It is built on
//! Diesel over `SQLite`.
//!
//! ## Database Backend
//!
//! `SQLite` is the sole backend:
//! - In-memory databases for unit and integration tests
//! - File-backed databases (with WAL mode) for deployments
//!
//! Foreign key enforcement is switched on per connection and verified at
//! startup; ticket deletion relies on the `ticket_replies` cascade.
//!
//! ## Transactional Discipline
//!
//! Every mutation that touches more than one table runs inside a single
//! Diesel transaction, so a ticket insert and its activity-log entry either
//! both land or neither does.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against in-memory `SQLite`
//! - Each test receives its own database via an atomic counter, so tests
//!   are isolated without time-based collisions

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use vio_support_audit::ActivityEvent;
use vio_support_domain::{TicketNumber, TicketStatus};

pub mod backend;
mod clock;
pub mod data_models;
mod diesel_schema;
pub mod error;
pub mod mutations;
pub mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    ActivityRecord, CreatedTicket, CustomerInfo, NewTicket, OrderInfo, ReplyDetail, StaffInfo,
    TicketDetail, TicketStats, TicketSummary,
};
pub use error::PersistenceError;
pub use mutations::MAX_NUMBER_ATTEMPTS;
pub use queries::SEARCH_RESULT_CAP;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The persistence adapter.
///
/// Owns a single `SQLite` connection and exposes one method per ticket
/// operation. All authorization decisions happen in the caller; this layer
/// enforces only data integrity.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Uses a shared in-memory database via `Diesel`.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        // Use atomic counter instead of timestamp to eliminate race conditions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        // Initialize database with Diesel migrations
        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        // Verify foreign key enforcement is active
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        // Initialize database with Diesel migrations
        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        // Verify foreign key enforcement is active
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure
    /// referential integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Directory
    // ========================================================================

    /// Creates a user account.
    ///
    /// # Arguments
    ///
    /// * `first_name` - The user's first name
    /// * `last_name` - The user's last name
    /// * `email` - The user's email address (unique)
    /// * `role` - The account role (`customer`, `staff`, or `admin`)
    ///
    /// # Returns
    ///
    /// The `user_id` assigned to the new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including on duplicate email.
    pub fn create_user_account(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        role: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::directory::create_user_account(&mut self.conn, first_name, last_name, email, role)
    }

    /// Creates a customer record linked to a user account.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The owning user account
    ///
    /// # Returns
    ///
    /// The `customer_id` assigned to the new customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_customer(&mut self, user_id: i64) -> Result<i64, PersistenceError> {
        mutations::directory::create_customer(&mut self.conn, user_id)
    }

    /// Creates an order for a customer.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The owning customer
    /// * `order_number` - The unique order number
    ///
    /// # Returns
    ///
    /// The `order_id` assigned to the new order.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including on duplicate order number.
    pub fn create_order(
        &mut self,
        customer_id: i64,
        order_number: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::directory::create_order(&mut self.conn, customer_id, order_number)
    }

    // ========================================================================
    // Ticket Mutations
    // ========================================================================

    /// Creates a support ticket with a freshly generated ticket number.
    ///
    /// The ticket number is regenerated on collision with an existing one,
    /// up to [`MAX_NUMBER_ATTEMPTS`] attempts. The insert, the optional
    /// initial reply, and the activity-log entry share one transaction.
    ///
    /// # Arguments
    ///
    /// * `ticket` - The ticket fields
    /// * `author_user_id` - The user opening the ticket
    /// * `initial_message` - An optional first message, stored as a non-staff reply
    ///
    /// # Errors
    ///
    /// Returns `TicketNumberExhausted` if every candidate number collided,
    /// or a database error if any insert fails.
    pub fn create_ticket(
        &mut self,
        ticket: &NewTicket,
        author_user_id: i64,
        initial_message: Option<&str>,
    ) -> Result<CreatedTicket, PersistenceError> {
        mutations::tickets::create_ticket(&mut self.conn, ticket, author_user_id, initial_message)
    }

    /// Appends a reply to a ticket.
    ///
    /// A staff reply forces the ticket status to `pending` regardless of the
    /// current status, which is also the reopen path for resolved and closed
    /// tickets. Any reply refreshes the ticket's `updated_at`.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - The ticket being replied to
    /// * `user_id` - The reply author
    /// * `message` - The reply body
    /// * `is_staff_reply` - Whether the author replied in a staff capacity
    /// * `attachment_path` - An optional stored-attachment reference
    ///
    /// # Returns
    ///
    /// The `reply_id` assigned to the new reply.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ticket does not exist, or a database
    /// error if the writes fail.
    pub fn add_reply(
        &mut self,
        ticket_id: i64,
        user_id: i64,
        message: &str,
        is_staff_reply: bool,
        attachment_path: Option<&str>,
    ) -> Result<i64, PersistenceError> {
        mutations::tickets::add_reply(
            &mut self.conn,
            ticket_id,
            user_id,
            message,
            is_staff_reply,
            attachment_path,
        )
    }

    /// Sets a ticket's status.
    ///
    /// Any status may follow any other. Transitioning to `closed` stamps
    /// `closed_at`; no other transition touches it, so a reopened ticket
    /// keeps the timestamp of its most recent closure.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - The ticket to update
    /// * `new_status` - The status to set
    /// * `actor_user_id` - The user making the change
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ticket does not exist, or a database
    /// error if the writes fail.
    pub fn update_status(
        &mut self,
        ticket_id: i64,
        new_status: TicketStatus,
        actor_user_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::tickets::update_status(&mut self.conn, ticket_id, new_status, actor_user_id)
    }

    /// Assigns a ticket to a staff member, or unassigns it.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - The ticket to update
    /// * `staff_user_id` - The staff member to assign, or `None` to unassign
    /// * `actor_user_id` - The user making the change
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ticket does not exist, or a database
    /// error if the writes fail.
    pub fn assign_ticket(
        &mut self,
        ticket_id: i64,
        staff_user_id: Option<i64>,
        actor_user_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::tickets::assign_ticket(&mut self.conn, ticket_id, staff_user_id, actor_user_id)
    }

    /// Deletes a ticket and, via cascade, all of its replies.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - The ticket to delete
    /// * `actor_user_id` - The user making the change
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if the ticket does not exist, or a database
    /// error if the delete fails.
    pub fn delete_ticket(
        &mut self,
        ticket_id: i64,
        actor_user_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::tickets::delete_ticket(&mut self.conn, ticket_id, actor_user_id)
    }

    /// Records an activity-log event outside any ticket mutation.
    ///
    /// Ticket mutations record their own events; this is for callers with
    /// events of their own to log.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to record
    ///
    /// # Returns
    ///
    /// The `activity_id` assigned to the new entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the details cannot be serialized or the insert fails.
    pub fn record_activity(&mut self, event: &ActivityEvent) -> Result<i64, PersistenceError> {
        mutations::activity::record_activity(&mut self.conn, event)
    }

    // ========================================================================
    // Ticket Queries
    // ========================================================================

    /// Fetches a single ticket with customer, order, and assignee context.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - The ticket to fetch
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    /// Returns `Ok(None)` if the ticket is not found.
    pub fn find_ticket(&mut self, ticket_id: i64) -> Result<Option<TicketDetail>, PersistenceError> {
        queries::tickets::find_ticket(&mut self.conn, ticket_id)
    }

    /// Fetches a single ticket by its public ticket number.
    ///
    /// # Arguments
    ///
    /// * `ticket_number` - The ticket number to look up
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    /// Returns `Ok(None)` if the ticket is not found.
    pub fn find_ticket_by_number(
        &mut self,
        ticket_number: &TicketNumber,
    ) -> Result<Option<TicketDetail>, PersistenceError> {
        queries::tickets::find_ticket_by_number(&mut self.conn, ticket_number)
    }

    /// Lists a ticket's replies oldest first, with author context.
    ///
    /// # Arguments
    ///
    /// * `ticket_id` - The ticket whose replies to list
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_replies(&mut self, ticket_id: i64) -> Result<Vec<ReplyDetail>, PersistenceError> {
        queries::tickets::list_replies(&mut self.conn, ticket_id)
    }

    /// Lists a customer's tickets, newest first.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The owning customer
    /// * `status` - Optional status filter
    /// * `limit` - Maximum number of rows
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn tickets_for_customer(
        &mut self,
        customer_id: i64,
        status: Option<TicketStatus>,
        limit: i64,
    ) -> Result<Vec<TicketSummary>, PersistenceError> {
        queries::tickets::tickets_for_customer(&mut self.conn, customer_id, status, limit)
    }

    /// Lists all tickets for staff, most urgent first.
    ///
    /// Ordering is priority rank ascending (urgent=1 through low=4), then
    /// `created_at` descending.
    ///
    /// # Arguments
    ///
    /// * `status` - Optional status filter
    /// * `limit` - Maximum number of rows
    /// * `offset` - Number of rows to skip
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_tickets(
        &mut self,
        status: Option<TicketStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TicketSummary>, PersistenceError> {
        queries::tickets::list_tickets(&mut self.conn, status, limit, offset)
    }

    /// Searches tickets by case-insensitive substring, newest first.
    ///
    /// Matches ticket number, subject, customer first name, last name, email,
    /// and order number. Input is bounded to 255 characters and results are
    /// capped at [`SEARCH_RESULT_CAP`].
    ///
    /// # Arguments
    ///
    /// * `query` - The raw search input
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn search_tickets(&mut self, query: &str) -> Result<Vec<TicketSummary>, PersistenceError> {
        queries::search::search_tickets(&mut self.conn, query)
    }

    /// Computes aggregate ticket statistics in a single query.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn ticket_stats(&mut self) -> Result<TicketStats, PersistenceError> {
        queries::stats::ticket_stats(&mut self.conn)
    }

    /// Returns the most recent activity-log entries, newest first.
    ///
    /// # Arguments
    ///
    /// * `limit` - The maximum number of entries to return
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn recent_activity(&mut self, limit: i64) -> Result<Vec<ActivityRecord>, PersistenceError> {
        queries::activity::recent_activity(&mut self.conn, limit)
    }
}
