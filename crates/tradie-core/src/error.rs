// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Tradie Scheduler.

use std::fmt;

use thiserror::Error;

/// The backend call an error came from.
///
/// Carried on [`TradieError::Status`] so the UI can pick a sensible default
/// message when the server sends no detail text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateOrganization,
    CreateService,
    ListAppointments,
    ConfirmAppointment,
    LoadBookingPage,
    LoadSlots,
    Book,
}

impl Operation {
    /// Method and path template, used in log lines and error text.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::CreateOrganization => "POST /dashboard/org",
            Self::CreateService => "POST /dashboard/service",
            Self::ListAppointments => "GET /dashboard/appointments",
            Self::ConfirmAppointment => "POST /dashboard/confirm",
            Self::LoadBookingPage => "GET /public/{slug}",
            Self::LoadSlots => "GET /public/slots",
            Self::Book => "POST /public/book",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Top-level error type for all Tradie Scheduler operations.
#[derive(Debug, Error)]
pub enum TradieError {
    // -- Backend errors --
    #[error("{operation}: request failed: {message}")]
    Transport { operation: Operation, message: String },

    #[error("{operation}: server returned {status}{}", detail_suffix(.detail))]
    Status {
        operation: Operation,
        status: u16,
        detail: Option<String>,
    },

    #[error("{operation}: unexpected response body: {message}")]
    Decode { operation: Operation, message: String },

    // -- Form errors --
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("no {0} selected")]
    NotSelected(&'static str),

    #[error("create an organization first")]
    NoOrganization,

    // -- Configuration --
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TradieError {
    /// The server-provided detail text, if this is a status error that had one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The backend call this error came from, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Transport { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TradieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_detail() {
        let err = TradieError::Status {
            operation: Operation::Book,
            status: 409,
            detail: Some("Slot already taken".into()),
        };
        assert_eq!(
            err.to_string(),
            "POST /public/book: server returned 409 (Slot already taken)"
        );
        assert_eq!(err.detail(), Some("Slot already taken"));
    }

    #[test]
    fn status_display_without_detail() {
        let err = TradieError::Status {
            operation: Operation::ListAppointments,
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), "GET /dashboard/appointments: server returned 500");
        assert_eq!(err.operation(), Some(Operation::ListAppointments));
    }

    #[test]
    fn form_errors_have_no_operation() {
        assert_eq!(TradieError::MissingField("customer name").operation(), None);
        assert_eq!(TradieError::NoOrganization.detail(), None);
    }
}
