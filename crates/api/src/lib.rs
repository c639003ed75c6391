// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the VIO support-ticket subsystem.
//!
//! This crate sits between an outer transport (web handlers, a CLI, tests)
//! and the persistence layer. It owns:
//!
//! - role-based authorization for every ticket operation
//! - input validation and default fallback for category and priority
//! - the reply policy (customers cannot reply to closed tickets)
//! - translation of domain and persistence errors into the API contract
//!
//! The persistence layer performs no privilege checks of its own; callers
//! that bypass this crate bypass authorization entirely.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

pub mod auth;
pub mod error;
pub mod handlers;
pub mod reply_policy;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use reply_policy::{ReplyPolicyError, enforce_reply_policy};
pub use request_response::{
    AddReplyRequest, AssignTicketRequest, CreateTicketRequest, CreateTicketResponse,
    UpdateStatusRequest,
};
