// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request and response envelopes that only exist on the wire.

use serde::{Deserialize, Serialize};

use tradie_core::types::{Appointment, RecordId, ServiceDraft, Slot};

#[derive(Debug, Serialize)]
pub(crate) struct NewService<'a> {
    #[serde(flatten)]
    pub draft: &'a ServiceDraft,
    pub organization_id: &'a RecordId,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConfirmBody<'a> {
    pub appointment_id: &'a RecordId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrganizationCreated {
    pub organization_id: RecordId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceCreated {
    pub service_id: RecordId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppointmentList {
    #[serde(default)]
    pub items: Option<Vec<Appointment>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SlotList {
    #[serde(default)]
    pub slots: Option<Vec<Slot>>,
}
