// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Public booking page for one organization, addressed by slug.
//
// Flow: load the page, pick a service and a start date, fetch a week of
// slots, enter contact details, tap a slot to book it.

use chrono::{NaiveDate, TimeZone};
use tracing::{debug, warn};

use tradie_core::error::TradieError;
use tradie_core::human_errors::{HumanError, humanize_error};
use tradie_core::slots::{DayGroup, group_by_day};
use tradie_core::types::{
    BookingConfirmation, BookingPage, BookingRequest, CustomerDetails, Organization, RecordId,
    Service, Slot, SlotQuery,
};
use tradie_core::SchedulerApi;

use crate::view::View;

/// Whether the page has something to show yet.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingPhase {
    Loading,
    Ready,
    /// The page could not be loaded; shown instead of the booking form.
    Unavailable(HumanError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingEvent {
    Opened,
    PageLoaded(BookingPage),
    ServiceSelected(Option<RecordId>),
    DateSelected(Option<NaiveDate>),
    FindSlots,
    SlotsLoaded {
        query: SlotQuery,
        slots: Vec<Slot>,
    },
    CustomerEdited(CustomerField, String),
    SlotChosen(String),
    Booked(BookingConfirmation),
    PageFailed(HumanError),
    /// A slot lookup failed; `query` is the selection it was made for.
    SlotsFailed {
        query: SlotQuery,
        error: HumanError,
    },
    BookingFailed(HumanError),
    NoticeDismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingCommand {
    LoadPage(String),
    LoadSlots(SlotQuery),
    Book(BookingRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub slug: String,
    pub phase: BookingPhase,
    pub organization: Option<Organization>,
    pub services: Vec<Service>,
    pub selected_service: Option<RecordId>,
    pub start_date: Option<NaiveDate>,
    pub slots: Vec<Slot>,
    pub loading_slots: bool,
    pub customer: CustomerDetails,
    pub booking: bool,
    pub confirmation: Option<BookingConfirmation>,
    pub notice: Option<HumanError>,
}

impl BookingState {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            phase: BookingPhase::Loading,
            organization: None,
            services: Vec::new(),
            selected_service: None,
            start_date: None,
            slots: Vec::new(),
            loading_slots: false,
            customer: CustomerDetails::default(),
            booking: false,
            confirmation: None,
            notice: None,
        }
    }

    /// Loaded slots grouped by calendar day in `tz`.
    pub fn slot_groups<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DayGroup> {
        group_by_day(&self.slots, tz)
    }

    /// The "Find slots" button is enabled.
    pub fn can_find_slots(&self) -> bool {
        self.organization.is_some()
            && self.selected_service.is_some()
            && self.start_date.is_some()
            && !self.loading_slots
    }

    fn current_query(&self) -> Option<SlotQuery> {
        Some(SlotQuery::horizon(
            self.organization.as_ref()?.id.clone(),
            self.selected_service.clone()?,
            self.start_date?,
        ))
    }

    fn reject(&mut self, err: TradieError) -> Option<BookingCommand> {
        debug!(error = %err, "booking input rejected");
        self.notice = Some(humanize_error(&err));
        None
    }

    fn booking_request(&self, start_time: String) -> Result<BookingRequest, TradieError> {
        let organization = self
            .organization
            .as_ref()
            .ok_or(TradieError::NotSelected("business"))?;
        let service_id = self
            .selected_service
            .clone()
            .ok_or(TradieError::NotSelected("service"))?;
        if start_time.trim().is_empty() {
            return Err(TradieError::NotSelected("time"));
        }
        let customer_name = self.customer.name.trim();
        if customer_name.is_empty() {
            return Err(TradieError::MissingField("name"));
        }
        Ok(BookingRequest {
            organization_id: organization.id.clone(),
            service_id,
            customer_name: customer_name.to_string(),
            customer_email: self.customer.email.trim().to_string(),
            customer_phone: self.customer.phone.trim().to_string(),
            start_time,
        })
    }
}

impl View for BookingState {
    type Event = BookingEvent;
    type Command = BookingCommand;

    fn apply(&mut self, event: BookingEvent) -> Option<BookingCommand> {
        debug!(?event, "booking event");
        match event {
            BookingEvent::Opened => {
                self.phase = BookingPhase::Loading;
                Some(BookingCommand::LoadPage(self.slug.clone()))
            }
            BookingEvent::PageLoaded(page) => {
                self.organization = Some(page.organization);
                self.services = page.services;
                self.phase = BookingPhase::Ready;
                None
            }
            BookingEvent::ServiceSelected(service) => {
                self.selected_service = service;
                self.slots.clear();
                None
            }
            BookingEvent::DateSelected(date) => {
                self.start_date = date;
                self.slots.clear();
                None
            }
            BookingEvent::FindSlots => {
                if self.loading_slots {
                    return None;
                }
                let query = self.current_query()?;
                self.loading_slots = true;
                Some(BookingCommand::LoadSlots(query))
            }
            BookingEvent::SlotsLoaded { query, slots } => {
                // Selection changed while the request was out.
                if self.current_query().as_ref() != Some(&query) {
                    self.loading_slots = false;
                    return None;
                }
                self.loading_slots = false;
                self.slots = slots;
                None
            }
            BookingEvent::CustomerEdited(field, value) => {
                match field {
                    CustomerField::Name => self.customer.name = value,
                    CustomerField::Email => self.customer.email = value,
                    CustomerField::Phone => self.customer.phone = value,
                }
                None
            }
            BookingEvent::SlotChosen(start_time) => {
                if self.booking || self.confirmation.is_some() {
                    return None;
                }
                match self.booking_request(start_time) {
                    Ok(request) => {
                        self.booking = true;
                        self.notice = None;
                        Some(BookingCommand::Book(request))
                    }
                    Err(err) => self.reject(err),
                }
            }
            BookingEvent::Booked(confirmation) => {
                self.booking = false;
                self.confirmation = Some(confirmation);
                None
            }
            BookingEvent::PageFailed(error) => {
                self.phase = BookingPhase::Unavailable(error);
                None
            }
            BookingEvent::SlotsFailed { query, error } => {
                self.loading_slots = false;
                if self.current_query().as_ref() == Some(&query) {
                    self.notice = Some(error);
                }
                None
            }
            BookingEvent::BookingFailed(error) => {
                self.booking = false;
                self.notice = Some(error);
                None
            }
            BookingEvent::NoticeDismissed => {
                self.notice = None;
                None
            }
        }
    }

    async fn execute<A: SchedulerApi>(api: &A, command: BookingCommand) -> BookingEvent {
        match command {
            BookingCommand::LoadPage(slug) => match api.booking_page(&slug).await {
                Ok(page) => BookingEvent::PageLoaded(page),
                Err(err) => BookingEvent::PageFailed(humanized(&err)),
            },
            BookingCommand::LoadSlots(query) => match api.available_slots(&query).await {
                Ok(slots) => BookingEvent::SlotsLoaded { query, slots },
                Err(err) => BookingEvent::SlotsFailed {
                    query,
                    error: humanized(&err),
                },
            },
            BookingCommand::Book(request) => match api.book(&request).await {
                Ok(confirmation) => BookingEvent::Booked(confirmation),
                Err(err) => BookingEvent::BookingFailed(humanized(&err)),
            },
        }
    }
}

fn humanized(err: &TradieError) -> HumanError {
    warn!(error = %err, "booking request failed");
    humanize_error(err)
}

/// Value of an `<input type="date">`: `YYYY-MM-DD`, empty when cleared.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
