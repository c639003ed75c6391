// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::reply_policy::ReplyPolicyError;
use tracing::error;
use vio_support_domain::DomainError;
use vio_support_persistence::PersistenceError;

/// Authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract. Internal failure details are logged, not surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A lifecycle rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<ReplyPolicyError> for ApiError {
    fn from(err: ReplyPolicyError) -> Self {
        Self::DomainRuleViolation {
            rule: String::from("reply_policy"),
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::TicketNotFound(ticket_id) => Self::ResourceNotFound {
                resource_type: String::from("Ticket"),
                message: format!("Ticket {ticket_id} does not exist"),
            },
            other => {
                error!("Persistence failure: {other}");
                Self::Internal {
                    message: String::from("A storage error occurred"),
                }
            }
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTicketStatus(status) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a valid ticket status"),
        },
        DomainError::InvalidTicketCategory(category) => ApiError::InvalidInput {
            field: String::from("category"),
            message: format!("'{category}' is not a valid ticket category"),
        },
        DomainError::InvalidTicketPriority(priority) => ApiError::InvalidInput {
            field: String::from("priority"),
            message: format!("'{priority}' is not a valid ticket priority"),
        },
        DomainError::InvalidTicketNumber(number) => ApiError::InvalidInput {
            field: String::from("ticket_number"),
            message: format!("'{number}' is not a valid ticket number"),
        },
        DomainError::InvalidSubject(msg) => ApiError::InvalidInput {
            field: String::from("subject"),
            message: msg,
        },
        DomainError::InvalidMessage(msg) => ApiError::InvalidInput {
            field: String::from("message"),
            message: msg,
        },
    }
}
