// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The seam between the views and the scheduling backend.
//
// `tradie-api` implements this over HTTP; the view tests implement it in
// memory. Every call is a single request: no retries, no caching.

use crate::error::Result;
use crate::types::{
    Appointment, AppointmentStatus, BookingConfirmation, BookingPage, BookingRequest,
    OrganizationDraft, RecordId, ServiceDraft, Slot, SlotQuery,
};

/// Operations the dashboard and booking widget need from the backend.
///
/// Futures are not required to be `Send`: the UI runs them on its own
/// single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait SchedulerApi {
    /// `POST /dashboard/org`, returning the new organization id.
    async fn create_organization(&self, draft: &OrganizationDraft) -> Result<RecordId>;

    /// `POST /dashboard/service`, returning the new service id.
    async fn create_service(
        &self,
        organization_id: &RecordId,
        draft: &ServiceDraft,
    ) -> Result<RecordId>;

    /// `GET /dashboard/appointments`. `None` lists every status.
    async fn list_appointments(
        &self,
        organization_id: &RecordId,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>>;

    /// `POST /dashboard/confirm`.
    async fn confirm_appointment(&self, appointment_id: &RecordId) -> Result<()>;

    /// `GET /public/{slug}`.
    async fn booking_page(&self, slug: &str) -> Result<BookingPage>;

    /// `GET /public/slots`.
    async fn available_slots(&self, query: &SlotQuery) -> Result<Vec<Slot>>;

    /// `POST /public/book`.
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation>;
}
