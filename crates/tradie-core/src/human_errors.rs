// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for owners and customers.
//
// Every failure is mapped to plain English with a clear suggestion. Nothing
// fails silently: the views store the HumanError and render it. Server
// `detail` text wins over our defaults because the backend knows why a
// booking or profile was rejected.

use crate::error::{Operation, TradieError};

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip or server hiccup. Trying again may work.
    Transient,
    /// User must change something (fill a field, pick another slot).
    ActionRequired,
    /// Cannot be fixed from the browser, e.g. a misconfigured or broken backend.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether offering a "Try again" button makes sense.
    pub retriable: bool,
    /// Severity level (drives colour in the UI).
    pub severity: Severity,
}

impl HumanError {
    fn new(message: impl Into<String>, suggestion: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            suggestion: suggestion.into(),
            retriable: severity == Severity::Transient,
            severity,
        }
    }
}

/// Convert a `TradieError` into a `HumanError` a customer can act on.
pub fn humanize_error(err: &TradieError) -> HumanError {
    match err {
        // -- Backend errors --
        TradieError::Transport { operation, .. } => HumanError::new(
            default_message(*operation),
            "We couldn't reach the booking server. Check your internet connection, then try again.",
            Severity::Transient,
        ),

        TradieError::Status {
            operation,
            status,
            detail,
        } => humanize_status(*operation, *status, detail.as_deref()),

        TradieError::Decode { operation, .. } => HumanError::new(
            default_message(*operation),
            "The booking server sent a reply we didn't understand. Please try again in a moment.",
            Severity::Transient,
        ),

        // -- Form errors --
        TradieError::MissingField(field) => HumanError::new(
            format!("Please enter your {field}."),
            format!("The {field} is required before we can continue."),
            Severity::ActionRequired,
        ),

        TradieError::InvalidField { field, reason } => HumanError::new(
            format!("Please check the {field}."),
            format!("The {field} {reason}."),
            Severity::ActionRequired,
        ),

        TradieError::NotSelected(what) => HumanError::new(
            format!("Please choose a {what}."),
            format!("Pick a {what} from the list, then try again."),
            Severity::ActionRequired,
        ),

        TradieError::NoOrganization => HumanError::new(
            "Create your business profile first.",
            "Services and appointments belong to a business. Fill in the profile form above.",
            Severity::ActionRequired,
        ),

        // -- Configuration --
        TradieError::InvalidUrl { url, .. } => HumanError::new(
            "The booking server address doesn't look right.",
            format!("Check TRADIE_BACKEND_URL. It should look like https://api.example.com (got '{url}')."),
            Severity::Permanent,
        ),

        TradieError::Config(detail) => HumanError::new(
            "The app isn't configured correctly.",
            format!("Check the configuration and restart. ({detail})"),
            Severity::Permanent,
        ),

        TradieError::Io(_) => HumanError::new(
            "The configuration file couldn't be read.",
            "Check the path in TRADIE_CONFIG and that the file exists.",
            Severity::Permanent,
        ),

        TradieError::Serialization(_) => HumanError::new(
            "The app had an internal data problem.",
            "Try again. If this keeps happening, please report it.",
            Severity::Transient,
        ),
    }
}

/// What the user was trying to do, phrased as a failure headline.
fn default_message(operation: Operation) -> &'static str {
    match operation {
        Operation::CreateOrganization => "Couldn't create your business profile.",
        Operation::CreateService => "Couldn't add that service.",
        Operation::ListAppointments => "Couldn't load appointments.",
        Operation::ConfirmAppointment => "Couldn't confirm that appointment.",
        Operation::LoadBookingPage => "We couldn't find this booking page.",
        Operation::LoadSlots => "Couldn't load available times.",
        Operation::Book => "Unable to book this slot",
    }
}

fn humanize_status(operation: Operation, status: u16, detail: Option<&str>) -> HumanError {
    let detail = detail.map(str::trim).filter(|d| !d.is_empty());

    let (severity, suggestion) = match (operation, status) {
        (Operation::LoadBookingPage, 404) => (
            Severity::Permanent,
            "Check the link you were given. The business may have changed its booking address.",
        ),
        (Operation::Book, 409) => (
            Severity::ActionRequired,
            "Someone may have just taken this time. Please pick another slot.",
        ),
        (Operation::CreateOrganization, 409) => (
            Severity::ActionRequired,
            "That public slug is already taken. Try a different one.",
        ),
        (_, 400 | 409 | 422) => (
            Severity::ActionRequired,
            "Check the details you entered, then try again.",
        ),
        (_, 401 | 403) => (
            Severity::Permanent,
            "You don't have access to this. Contact the business directly.",
        ),
        (_, 404) => (
            Severity::Permanent,
            "It may have been removed. Refresh the page and try again.",
        ),
        (_, 429) => (
            Severity::Transient,
            "Too many requests right now. Wait a few seconds, then try again.",
        ),
        (_, s) if s >= 500 => (
            Severity::Transient,
            "The booking server had a problem. Please try again in a moment.",
        ),
        _ => (
            Severity::Transient,
            "Something went wrong. Please try again.",
        ),
    };

    HumanError::new(
        detail.unwrap_or(default_message(operation)),
        suggestion,
        severity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(operation: Operation, status: u16, detail: Option<&str>) -> TradieError {
        TradieError::Status {
            operation,
            status,
            detail: detail.map(String::from),
        }
    }

    #[test]
    fn booking_rejection_shows_server_detail() {
        let human = humanize_error(&status(Operation::Book, 400, Some("Slot no longer available")));
        assert_eq!(human.message, "Slot no longer available");
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.retriable);
    }

    #[test]
    fn booking_rejection_without_detail_uses_default() {
        let human = humanize_error(&status(Operation::Book, 422, None));
        assert_eq!(human.message, "Unable to book this slot");

        let blank = humanize_error(&status(Operation::Book, 400, Some("   ")));
        assert_eq!(blank.message, "Unable to book this slot");
    }

    #[test]
    fn server_errors_are_transient() {
        let human = humanize_error(&status(Operation::ListAppointments, 503, None));
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.retriable);
        assert_eq!(human.message, "Couldn't load appointments.");
    }

    #[test]
    fn unknown_booking_page_is_permanent() {
        let human = humanize_error(&status(Operation::LoadBookingPage, 404, None));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(human.suggestion.contains("link"));
    }

    #[test]
    fn taken_slug_suggests_another() {
        let human = humanize_error(&status(Operation::CreateOrganization, 409, None));
        assert!(human.suggestion.contains("slug"));
    }

    #[test]
    fn transport_failure_is_transient() {
        let err = TradieError::Transport {
            operation: Operation::LoadSlots,
            message: "connection refused".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert_eq!(human.message, "Couldn't load available times.");
    }

    #[test]
    fn missing_field_is_action_required() {
        let human = humanize_error(&TradieError::MissingField("name"));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert_eq!(human.message, "Please enter your name.");
    }
}
