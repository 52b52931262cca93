// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core records exchanged with the scheduling backend.
//
// These are pass-through shapes: the backend owns validation and lifecycle
// transitions, the client only renders them and posts drafts back.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

use crate::slots::parse_timestamp;

/// Fixed availability window requested from the backend, in days.
pub const SLOT_HORIZON_DAYS: u32 = 7;

/// Opaque backend identifier.
///
/// The backend may hand out numeric or string ids; both are kept as text and
/// always sent back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Unsigned(n) => Self(n.to_string()),
        })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Organization
// ---------------------------------------------------------------------------

/// A tradie's business account, identified publicly by its slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

/// Fields posted to create an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationDraft {
    pub name: String,
    pub email: String,
    pub slug: String,
}

impl OrganizationDraft {
    /// Attach the id the backend assigned.
    pub fn into_organization(self, id: RecordId) -> Organization {
        Organization {
            id,
            name: self.name,
            email: self.email,
            slug: self.slug,
        }
    }
}

/// Public booking link for an organization: `{origin}/b/{slug}`.
pub fn public_booking_url(origin: &str, slug: &str) -> String {
    format!("{}/b/{}", origin.trim_end_matches('/'), slug)
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// A bookable offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_minutes: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_quote_only: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires_deposit: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deposit_amount: f64,
}

impl Service {
    /// `"Gutter clean - $120.00"`, or just the name when there is no price.
    pub fn option_label(&self) -> String {
        if self.price > 0.0 {
            format!("{} - {}", self.name, format_price(self.price))
        } else {
            self.name.clone()
        }
    }

    /// `"60m · $120.00"`
    pub fn summary(&self) -> String {
        format!("{}m · {}", self.duration_minutes, format_price(self.price))
    }
}

/// Fields posted to create a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub is_quote_only: bool,
    pub requires_deposit: bool,
    pub deposit_amount: f64,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration_minutes: 60,
            price: 0.0,
            is_quote_only: false,
            requires_deposit: false,
            deposit_amount: 0.0,
        }
    }
}

impl ServiceDraft {
    /// Attach the id the backend assigned.
    pub fn into_service(self, id: RecordId) -> Service {
        Service {
            id,
            name: self.name,
            duration_minutes: self.duration_minutes,
            price: self.price,
            is_quote_only: self.is_quote_only,
            requires_deposit: self.requires_deposit,
            deposit_amount: self.deposit_amount,
        }
    }
}

pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

// ---------------------------------------------------------------------------
// Appointment
// ---------------------------------------------------------------------------

/// Lifecycle states of an appointment. Transitions happen server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Tentative,
    Confirmed,
    DepositPaid,
    Paid,
    Cancelled,
    Missed,
    /// A status this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    /// Statuses offered by the dashboard filter, in display order.
    pub const FILTERABLE: [AppointmentStatus; 6] = [
        Self::Tentative,
        Self::Confirmed,
        Self::DepositPaid,
        Self::Paid,
        Self::Cancelled,
        Self::Missed,
    ];

    /// Wire value, also used as the `status` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tentative => "tentative",
            Self::Confirmed => "confirmed",
            Self::DepositPaid => "deposit_paid",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
            Self::Missed => "missed",
            Self::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tentative => "Tentative",
            Self::Confirmed => "Confirmed",
            Self::DepositPaid => "Deposit Paid",
            Self::Paid => "Paid",
            Self::Cancelled => "Cancelled",
            Self::Missed => "Missed",
            Self::Unknown => "Unknown",
        }
    }

    /// Only tentative bookings can be confirmed by the owner.
    pub fn can_confirm(&self) -> bool {
        matches!(self, Self::Tentative)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::FILTERABLE
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown appointment status '{s}'"))
    }
}

/// A scheduled booking instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// `"2025-03-04 09:00 - 10:30"` in the given timezone.
    ///
    /// Falls back to the raw timestamps when the backend sent something
    /// unparseable.
    pub fn time_range_label<Tz: TimeZone>(&self, tz: &Tz) -> String {
        match (
            parse_timestamp(&self.start_time, tz),
            parse_timestamp(&self.end_time, tz),
        ) {
            (Some(start), Some(end)) => format!(
                "{} - {}",
                start.format("%Y-%m-%d %H:%M"),
                end.format("%H:%M")
            ),
            _ => format!("{} - {}", self.start_time, self.end_time),
        }
    }
}

// ---------------------------------------------------------------------------
// Public booking
// ---------------------------------------------------------------------------

/// A candidate start time surfaced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: String,
}

impl Slot {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
        }
    }

    /// Calendar day of this slot in `tz`, if the timestamp parses.
    pub fn day<Tz: TimeZone>(&self, tz: &Tz) -> Option<NaiveDate> {
        parse_timestamp(&self.start, tz).map(|dt| dt.date())
    }

    /// `"09:30"`, or the raw timestamp when unparseable.
    pub fn time_label<Tz: TimeZone>(&self, tz: &Tz) -> String {
        parse_timestamp(&self.start, tz)
            .map(|dt| dt.format("%H:%M").to_string())
            .unwrap_or_else(|| self.start.clone())
    }
}

/// Availability window for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotQuery {
    pub organization_id: RecordId,
    pub service_id: RecordId,
    pub start_date: NaiveDate,
    pub days: u32,
}

impl SlotQuery {
    /// Query covering the fixed booking horizon from `start_date`.
    pub fn horizon(organization_id: RecordId, service_id: RecordId, start_date: NaiveDate) -> Self {
        Self {
            organization_id,
            service_id,
            start_date,
            days: SLOT_HORIZON_DAYS,
        }
    }

    /// `date_str` query value, `YYYY-MM-DD`.
    pub fn date_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }
}

/// Organization plus its service catalog, as served to customers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPage {
    pub organization: Organization,
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
}

/// Contact details a customer enters on the booking page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Body of `POST /public/book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub organization_id: RecordId,
    pub service_id: RecordId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub start_time: String,
}

/// Successful booking response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub public_code: String,
}
