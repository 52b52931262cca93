// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async HTTP client for the scheduling backend.
//
// One method per REST endpoint:
//   - POST /dashboard/org
//   - POST /dashboard/service
//   - GET  /dashboard/appointments
//   - POST /dashboard/confirm
//   - GET  /public/{slug}
//   - GET  /public/slots
//   - POST /public/book
//
// Every non-2xx answer becomes `TradieError::Status` carrying the server's
// `detail` text, so the views can always tell the user what went wrong.

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use tradie_core::SchedulerApi;
use tradie_core::config::AppConfig;
use tradie_core::error::{Operation, Result, TradieError};
use tradie_core::types::{
    Appointment, AppointmentStatus, BookingConfirmation, BookingPage, BookingRequest,
    OrganizationDraft, RecordId, ServiceDraft, Slot, SlotQuery,
};

use crate::detail::extract_detail;
use crate::wire::{
    AppointmentList, ConfirmBody, NewService, OrganizationCreated, ServiceCreated, SlotList,
};

/// `SchedulerApi` over HTTP.
///
/// Cheap to clone: `reqwest::Client` is reference-counted internally, so the
/// UI can hand a copy to every spawned task.
#[derive(Debug, Clone)]
pub struct HttpSchedulerApi {
    client: Client,
    base_url: Url,
}

impl HttpSchedulerApi {
    /// Create a client for the backend at `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client from application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder =
            builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
        let client = builder
            .build()
            .map_err(|e| TradieError::Config(format!("cannot build HTTP client: {e}")))?;
        Self::with_client(client, config.backend_base())
    }

    /// Use a pre-built `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| TradieError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TradieError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base URL".into(),
            });
        }
        info!(base = %base_url, "scheduler API client ready");
        Ok(Self { client, base_url })
    }

    /// The backend base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `with_client`: http(s) base URLs always have segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response> {
        debug!(%operation, "sending request");
        let response = request.send().await.map_err(|e| {
            warn!(%operation, error = %e, "request failed");
            TradieError::Transport {
                operation,
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        warn!(%operation, status = status.as_u16(), detail = ?detail, "backend rejected request");
        Err(TradieError::Status {
            operation,
            status: status.as_u16(),
            detail,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(operation, request).await?;
        response.json::<T>().await.map_err(|e| {
            warn!(%operation, error = %e, "undecodable response body");
            TradieError::Decode {
                operation,
                message: e.to_string(),
            }
        })
    }
}

impl SchedulerApi for HttpSchedulerApi {
    #[instrument(skip(self, draft), fields(slug = %draft.slug))]
    async fn create_organization(&self, draft: &OrganizationDraft) -> Result<RecordId> {
        let url = self.endpoint(&["dashboard", "org"]);
        let created: OrganizationCreated = self
            .fetch(Operation::CreateOrganization, self.client.post(url).json(draft))
            .await?;
        info!(organization_id = %created.organization_id, "organization created");
        Ok(created.organization_id)
    }

    #[instrument(skip(self, draft), fields(organization_id = %organization_id, name = %draft.name))]
    async fn create_service(
        &self,
        organization_id: &RecordId,
        draft: &ServiceDraft,
    ) -> Result<RecordId> {
        let url = self.endpoint(&["dashboard", "service"]);
        let body = NewService {
            draft,
            organization_id,
        };
        let created: ServiceCreated = self
            .fetch(Operation::CreateService, self.client.post(url).json(&body))
            .await?;
        info!(service_id = %created.service_id, "service created");
        Ok(created.service_id)
    }

    #[instrument(skip(self), fields(organization_id = %organization_id))]
    async fn list_appointments(
        &self,
        organization_id: &RecordId,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>> {
        let url = self.endpoint(&["dashboard", "appointments"]);
        let mut request = self
            .client
            .get(url)
            .query(&[("organization_id", organization_id.as_str())]);
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        let list: AppointmentList = self.fetch(Operation::ListAppointments, request).await?;
        let items = list.items.unwrap_or_default();
        debug!(count = items.len(), "appointments loaded");
        Ok(items)
    }

    #[instrument(skip(self), fields(appointment_id = %appointment_id))]
    async fn confirm_appointment(&self, appointment_id: &RecordId) -> Result<()> {
        let url = self.endpoint(&["dashboard", "confirm"]);
        let body = ConfirmBody { appointment_id };
        self.send(Operation::ConfirmAppointment, self.client.post(url).json(&body))
            .await?;
        info!("appointment confirmed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn booking_page(&self, slug: &str) -> Result<BookingPage> {
        let url = self.endpoint(&["public", slug]);
        let page: BookingPage = self
            .fetch(Operation::LoadBookingPage, self.client.get(url))
            .await?;
        debug!(services = page.services.len(), "booking page loaded");
        Ok(page)
    }

    #[instrument(skip(self, query), fields(service_id = %query.service_id, from = %query.start_date))]
    async fn available_slots(&self, query: &SlotQuery) -> Result<Vec<Slot>> {
        let url = self.endpoint(&["public", "slots"]);
        let date_str = query.date_str();
        let days = query.days.to_string();
        let request = self.client.get(url).query(&[
            ("organization_id", query.organization_id.as_str()),
            ("service_id", query.service_id.as_str()),
            ("date_str", date_str.as_str()),
            ("days", days.as_str()),
        ]);
        let list: SlotList = self.fetch(Operation::LoadSlots, request).await?;
        let slots = list.slots.unwrap_or_default();
        debug!(count = slots.len(), "slots loaded");
        Ok(slots)
    }

    #[instrument(skip(self, request), fields(service_id = %request.service_id, start = %request.start_time))]
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation> {
        let url = self.endpoint(&["public", "book"]);
        let confirmation: BookingConfirmation = self
            .fetch(Operation::Book, self.client.post(url).json(request))
            .await?;
        info!("tentative booking created");
        Ok(confirmation)
    }
}
