// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Owner dashboard: business profile, services and appointments.
//
// The organization lives only in this state: there is no login, so a reload
// starts from the profile form again.

use tracing::{debug, warn};

use tradie_core::error::TradieError;
use tradie_core::human_errors::{HumanError, humanize_error};
use tradie_core::types::{
    Appointment, AppointmentStatus, Organization, OrganizationDraft, RecordId, Service,
    ServiceDraft, public_booking_url,
};
use tradie_core::SchedulerApi;

use crate::view::View;

/// Editable fields of the business profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizationField {
    Name,
    Email,
    Slug,
}

/// One edit to the service form.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEdit {
    Name(String),
    DurationMinutes(u32),
    Price(f64),
    QuoteOnly(bool),
    RequiresDeposit(bool),
    DepositAmount(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    OrganizationFieldEdited(OrganizationField, String),
    CreateOrganization,
    OrganizationCreated {
        id: RecordId,
        draft: OrganizationDraft,
    },
    ServiceFieldEdited(ServiceEdit),
    CreateService,
    ServiceCreated {
        id: RecordId,
        draft: ServiceDraft,
    },
    StatusFilterChanged(Option<AppointmentStatus>),
    Refresh,
    AppointmentsLoaded {
        status: Option<AppointmentStatus>,
        items: Vec<Appointment>,
    },
    ConfirmAppointment(RecordId),
    AppointmentConfirmed(RecordId),
    OrganizationFailed(HumanError),
    ServiceFailed(HumanError),
    /// A list load failed; `status` is the filter it was loading.
    AppointmentsFailed {
        status: Option<AppointmentStatus>,
        error: HumanError,
    },
    ConfirmFailed {
        id: RecordId,
        error: HumanError,
    },
    NoticeDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    CreateOrganization(OrganizationDraft),
    CreateService {
        organization_id: RecordId,
        draft: ServiceDraft,
    },
    LoadAppointments {
        organization_id: RecordId,
        status: Option<AppointmentStatus>,
    },
    ConfirmAppointment(RecordId),
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub organization: Option<Organization>,
    pub organization_form: OrganizationDraft,
    pub service_form: ServiceDraft,
    /// Services created during this session.
    pub services: Vec<Service>,
    pub appointments: Vec<Appointment>,
    /// `None` shows every status.
    pub status_filter: Option<AppointmentStatus>,
    pub loading_appointments: bool,
    /// A profile or service submission is in flight.
    pub saving: bool,
    /// Appointment whose confirmation is in flight.
    pub confirming: Option<RecordId>,
    pub notice: Option<HumanError>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            organization: None,
            organization_form: OrganizationDraft::default(),
            service_form: ServiceDraft::default(),
            services: Vec::new(),
            appointments: Vec::new(),
            status_filter: None,
            loading_appointments: false,
            saving: false,
            confirming: None,
            notice: None,
        }
    }

    /// Public booking link for the current organization.
    pub fn public_url(&self, origin: &str) -> Option<String> {
        self.organization
            .as_ref()
            .map(|org| public_booking_url(origin, &org.slug))
    }

    fn reject(&mut self, err: TradieError) -> Option<DashboardCommand> {
        self.notice = Some(humanize_error(&err));
        None
    }

    fn load_appointments(&mut self) -> Option<DashboardCommand> {
        let organization_id = self.organization.as_ref()?.id.clone();
        self.loading_appointments = true;
        Some(DashboardCommand::LoadAppointments {
            organization_id,
            status: self.status_filter,
        })
    }

    fn submit_organization(&mut self) -> Option<DashboardCommand> {
        if self.saving {
            return None;
        }
        match validate_organization(&self.organization_form) {
            Ok(draft) => {
                self.saving = true;
                self.notice = None;
                Some(DashboardCommand::CreateOrganization(draft))
            }
            Err(err) => self.reject(err),
        }
    }

    fn submit_service(&mut self) -> Option<DashboardCommand> {
        if self.saving {
            return None;
        }
        let Some(organization_id) = self.organization.as_ref().map(|org| org.id.clone()) else {
            return self.reject(TradieError::NoOrganization);
        };
        match validate_service(&self.service_form) {
            Ok(draft) => {
                self.saving = true;
                self.notice = None;
                Some(DashboardCommand::CreateService {
                    organization_id,
                    draft,
                })
            }
            Err(err) => self.reject(err),
        }
    }
}

impl View for DashboardState {
    type Event = DashboardEvent;
    type Command = DashboardCommand;

    fn apply(&mut self, event: DashboardEvent) -> Option<DashboardCommand> {
        debug!(?event, "dashboard event");
        match event {
            DashboardEvent::OrganizationFieldEdited(field, value) => {
                let form = &mut self.organization_form;
                match field {
                    OrganizationField::Name => form.name = value,
                    OrganizationField::Email => form.email = value,
                    OrganizationField::Slug => form.slug = value,
                }
                None
            }
            DashboardEvent::CreateOrganization => self.submit_organization(),
            DashboardEvent::OrganizationCreated { id, draft } => {
                self.saving = false;
                self.organization = Some(draft.into_organization(id));
                self.organization_form = OrganizationDraft::default();
                self.load_appointments()
            }
            DashboardEvent::ServiceFieldEdited(edit) => {
                let form = &mut self.service_form;
                match edit {
                    ServiceEdit::Name(name) => form.name = name,
                    ServiceEdit::DurationMinutes(minutes) => form.duration_minutes = minutes,
                    ServiceEdit::Price(price) => form.price = price,
                    ServiceEdit::QuoteOnly(on) => form.is_quote_only = on,
                    ServiceEdit::RequiresDeposit(on) => form.requires_deposit = on,
                    ServiceEdit::DepositAmount(amount) => form.deposit_amount = amount,
                }
                None
            }
            DashboardEvent::CreateService => self.submit_service(),
            DashboardEvent::ServiceCreated { id, draft } => {
                self.saving = false;
                self.services.push(draft.into_service(id));
                self.service_form = ServiceDraft::default();
                None
            }
            DashboardEvent::StatusFilterChanged(filter) => {
                if filter == self.status_filter {
                    return None;
                }
                self.status_filter = filter;
                self.load_appointments()
            }
            DashboardEvent::Refresh => self.load_appointments(),
            DashboardEvent::AppointmentsLoaded { status, items } => {
                // An older load for a filter the owner has since changed.
                if status != self.status_filter {
                    return None;
                }
                self.loading_appointments = false;
                self.appointments = items;
                None
            }
            DashboardEvent::ConfirmAppointment(id) => {
                if self.organization.is_none() {
                    return self.reject(TradieError::NoOrganization);
                }
                if self.confirming.is_some() {
                    return None;
                }
                self.confirming = Some(id.clone());
                Some(DashboardCommand::ConfirmAppointment(id))
            }
            DashboardEvent::AppointmentConfirmed(_) => {
                self.confirming = None;
                self.load_appointments()
            }
            DashboardEvent::OrganizationFailed(error) | DashboardEvent::ServiceFailed(error) => {
                self.saving = false;
                self.notice = Some(error);
                None
            }
            DashboardEvent::AppointmentsFailed { status, error } => {
                // The newer load for the current filter is still in flight.
                if status != self.status_filter {
                    return None;
                }
                self.loading_appointments = false;
                self.notice = Some(error);
                None
            }
            DashboardEvent::ConfirmFailed { id, error } => {
                debug!(%id, "confirmation failed, refreshing");
                self.confirming = None;
                self.notice = Some(error);
                // The server may have applied it anyway; show what it has.
                self.load_appointments()
            }
            DashboardEvent::NoticeDismissed => {
                self.notice = None;
                None
            }
        }
    }

    async fn execute<A: SchedulerApi>(api: &A, command: DashboardCommand) -> DashboardEvent {
        match command {
            DashboardCommand::CreateOrganization(draft) => {
                match api.create_organization(&draft).await {
                    Ok(id) => DashboardEvent::OrganizationCreated { id, draft },
                    Err(err) => DashboardEvent::OrganizationFailed(humanized(&err)),
                }
            }
            DashboardCommand::CreateService {
                organization_id,
                draft,
            } => match api.create_service(&organization_id, &draft).await {
                Ok(id) => DashboardEvent::ServiceCreated { id, draft },
                Err(err) => DashboardEvent::ServiceFailed(humanized(&err)),
            },
            DashboardCommand::LoadAppointments {
                organization_id,
                status,
            } => match api.list_appointments(&organization_id, status).await {
                Ok(items) => DashboardEvent::AppointmentsLoaded { status, items },
                Err(err) => DashboardEvent::AppointmentsFailed {
                    status,
                    error: humanized(&err),
                },
            },
            DashboardCommand::ConfirmAppointment(id) => {
                match api.confirm_appointment(&id).await {
                    Ok(()) => DashboardEvent::AppointmentConfirmed(id),
                    Err(err) => {
                        let error = humanized(&err);
                        DashboardEvent::ConfirmFailed { id, error }
                    }
                }
            }
        }
    }
}

fn humanized(err: &TradieError) -> HumanError {
    warn!(error = %err, "dashboard request failed");
    humanize_error(err)
}

/// Trimmed copy of the profile form, or the first problem with it.
pub fn validate_organization(form: &OrganizationDraft) -> Result<OrganizationDraft, TradieError> {
    let draft = OrganizationDraft {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        slug: form.slug.trim().to_string(),
    };
    if draft.name.is_empty() {
        return Err(TradieError::MissingField("business name"));
    }
    if draft.email.is_empty() {
        return Err(TradieError::MissingField("contact email"));
    }
    if !draft.email.contains('@') {
        return Err(TradieError::InvalidField {
            field: "contact email",
            reason: "needs an @, like owner@example.com",
        });
    }
    if draft.slug.is_empty() {
        return Err(TradieError::MissingField("public slug"));
    }
    Ok(draft)
}

/// Trimmed copy of the service form, or the first problem with it.
pub fn validate_service(form: &ServiceDraft) -> Result<ServiceDraft, TradieError> {
    let mut draft = form.clone();
    draft.name = form.name.trim().to_string();
    if draft.name.is_empty() {
        return Err(TradieError::MissingField("service name"));
    }
    if draft.duration_minutes == 0 {
        return Err(TradieError::InvalidField {
            field: "duration",
            reason: "must be at least 1 minute",
        });
    }
    if !draft.price.is_finite() || draft.price < 0.0 {
        return Err(TradieError::InvalidField {
            field: "price",
            reason: "can't be negative",
        });
    }
    if !draft.requires_deposit {
        draft.deposit_amount = 0.0;
    } else if !draft.deposit_amount.is_finite() || draft.deposit_amount < 0.0 {
        return Err(TradieError::InvalidField {
            field: "deposit amount",
            reason: "can't be negative",
        });
    }
    Ok(draft)
}
