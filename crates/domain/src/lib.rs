// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
mod ticket_category;
mod ticket_number;
mod ticket_priority;
mod ticket_status;
mod validation;

pub use error::DomainError;
pub use ticket_category::TicketCategory;
pub use ticket_number::TicketNumber;
pub use ticket_priority::TicketPriority;
pub use ticket_status::TicketStatus;
pub use validation::{
    MAX_MESSAGE_LENGTH, MAX_SEARCH_LENGTH, MAX_SUBJECT_LENGTH, bound_search_input,
    validate_message, validate_subject,
};
