// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory scheduler backend that records every call.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use tradie_core::SchedulerApi;
use tradie_core::error::{Operation, Result, TradieError};
use tradie_core::types::{
    Appointment, AppointmentStatus, BookingConfirmation, BookingPage, BookingRequest,
    Organization, OrganizationDraft, RecordId, ServiceDraft, Slot, SlotQuery,
};

/// One backend call, with the arguments it was made with.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateOrganization(OrganizationDraft),
    CreateService(RecordId, ServiceDraft),
    ListAppointments(RecordId, Option<AppointmentStatus>),
    ConfirmAppointment(RecordId),
    BookingPage(String),
    AvailableSlots(SlotQuery),
    Book(BookingRequest),
}

#[derive(Default)]
pub struct RecordingApi {
    calls: RefCell<Vec<Call>>,
    failures: RefCell<HashMap<Operation, (u16, Option<String>)>>,
    pub appointments: Vec<Appointment>,
    pub page: Option<BookingPage>,
    pub slots: Vec<Slot>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call to `operation` answer with `status`.
    pub fn fail(&self, operation: Operation, status: u16, detail: Option<&str>) {
        self.failures
            .borrow_mut()
            .insert(operation, (status, detail.map(String::from)));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matches(c)).count()
    }

    pub fn list_calls(&self) -> usize {
        self.count(|c| matches!(c, Call::ListAppointments(..)))
    }

    fn record(&self, operation: Operation, call: Call) -> Result<()> {
        self.calls.borrow_mut().push(call);
        match self.failures.borrow().get(&operation) {
            Some((status, detail)) => Err(TradieError::Status {
                operation,
                status: *status,
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl SchedulerApi for RecordingApi {
    async fn create_organization(&self, draft: &OrganizationDraft) -> Result<RecordId> {
        self.record(
            Operation::CreateOrganization,
            Call::CreateOrganization(draft.clone()),
        )?;
        Ok(RecordId::from("org-1"))
    }

    async fn create_service(
        &self,
        organization_id: &RecordId,
        draft: &ServiceDraft,
    ) -> Result<RecordId> {
        self.record(
            Operation::CreateService,
            Call::CreateService(organization_id.clone(), draft.clone()),
        )?;
        Ok(RecordId::from("svc-1"))
    }

    async fn list_appointments(
        &self,
        organization_id: &RecordId,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>> {
        self.record(
            Operation::ListAppointments,
            Call::ListAppointments(organization_id.clone(), status),
        )?;
        Ok(self
            .appointments
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect())
    }

    async fn confirm_appointment(&self, appointment_id: &RecordId) -> Result<()> {
        self.record(
            Operation::ConfirmAppointment,
            Call::ConfirmAppointment(appointment_id.clone()),
        )
    }

    async fn booking_page(&self, slug: &str) -> Result<BookingPage> {
        self.record(Operation::LoadBookingPage, Call::BookingPage(slug.to_string()))?;
        self.page.clone().ok_or(TradieError::Status {
            operation: Operation::LoadBookingPage,
            status: 404,
            detail: Some("Organization not found".into()),
        })
    }

    async fn available_slots(&self, query: &SlotQuery) -> Result<Vec<Slot>> {
        self.record(Operation::LoadSlots, Call::AvailableSlots(query.clone()))?;
        Ok(self.slots.clone())
    }

    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation> {
        self.record(Operation::Book, Call::Book(request.clone()))?;
        Ok(BookingConfirmation {
            public_code: "TB-4821".into(),
        })
    }
}

pub fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.into(),
        customer_name: "Ana".into(),
        customer_email: Some("ana@example.com".into()),
        customer_phone: None,
        start_time: "2025-03-03T09:00:00".into(),
        end_time: "2025-03-03T10:00:00".into(),
        status,
    }
}

pub fn acme_page() -> BookingPage {
    BookingPage {
        organization: Organization {
            id: "org-1".into(),
            name: "Acme Plumbing".into(),
            email: "owner@acme.test".into(),
            slug: "acme".into(),
        },
        services: vec![
            ServiceDraft {
                name: "Blocked drain".into(),
                price: 120.0,
                ..Default::default()
            }
            .into_service("svc-1".into()),
        ],
    }
}
