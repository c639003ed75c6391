// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure ticket lifecycle rules.
//!
//! This crate contains the decision logic applied to ticket mutations:
//! status-transition planning, the staff-reply override, ticket-number
//! generation, and activity-event construction. It performs no I/O; the
//! persistence crate applies the decisions made here inside transactions.

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

mod error;
mod events;
mod lifecycle;
mod number;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use events::{assigned_event, created_event, deleted_event, status_changed_event};
pub use lifecycle::{StatusChange, staff_reply_override};
pub use number::generate_ticket_number;
