// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end view flows against an in-memory backend.

mod common;

use chrono::NaiveDate;

use common::{Call, RecordingApi, acme_page, appointment};
use tradie_core::error::Operation;
use tradie_core::types::{AppointmentStatus, BookingRequest, RecordId, SlotQuery};
use tradie_views::booking::CustomerField;
use tradie_views::dashboard::{OrganizationField, ServiceEdit};
use tradie_views::{
    BookingEvent, BookingPhase, BookingState, DashboardEvent, DashboardState, View, run,
};

async fn create_organization(api: &RecordingApi, state: &mut DashboardState) {
    for (field, value) in [
        (OrganizationField::Name, "Acme Plumbing"),
        (OrganizationField::Email, "owner@acme.test"),
        (OrganizationField::Slug, "acme"),
    ] {
        state
            .dispatch(api, DashboardEvent::OrganizationFieldEdited(field, value.into()))
            .await;
    }
    state.dispatch(api, DashboardEvent::CreateOrganization).await;
}

#[tokio::test]
async fn creating_an_organization_publishes_its_link() {
    let api = RecordingApi::new();
    let mut state = DashboardState::new();
    assert_eq!(state.public_url("https://book.example.com"), None);

    create_organization(&api, &mut state).await;

    assert_eq!(
        state.organization.as_ref().map(|o| o.id.as_str()),
        Some("org-1")
    );
    assert_eq!(
        state.public_url("https://book.example.com/").as_deref(),
        Some("https://book.example.com/b/acme")
    );
    assert_eq!(
        api.calls(),
        vec![
            Call::CreateOrganization(tradie_core::OrganizationDraft {
                name: "Acme Plumbing".into(),
                email: "owner@acme.test".into(),
                slug: "acme".into(),
            }),
            Call::ListAppointments(RecordId::from("org-1"), None),
        ]
    );
}

#[tokio::test]
async fn appointments_refetch_only_when_org_or_filter_changes() {
    let mut api = RecordingApi::new();
    api.appointments = vec![
        appointment("a1", AppointmentStatus::Tentative),
        appointment("a2", AppointmentStatus::Paid),
    ];
    let mut state = DashboardState::new();
    create_organization(&api, &mut state).await;
    assert_eq!(api.list_calls(), 1);
    assert_eq!(state.appointments.len(), 2);

    state
        .dispatch(&api, DashboardEvent::ServiceFieldEdited(ServiceEdit::Name("Drain".into())))
        .await;
    state
        .dispatch(
            &api,
            DashboardEvent::OrganizationFieldEdited(OrganizationField::Name, "x".into()),
        )
        .await;
    state.dispatch(&api, DashboardEvent::StatusFilterChanged(None)).await;
    assert_eq!(api.list_calls(), 1);

    state
        .dispatch(
            &api,
            DashboardEvent::StatusFilterChanged(Some(AppointmentStatus::Paid)),
        )
        .await;
    assert_eq!(api.list_calls(), 2);
    assert_eq!(state.appointments.len(), 1);
    assert_eq!(state.appointments[0].id, RecordId::from("a2"));

    state.dispatch(&api, DashboardEvent::Refresh).await;
    assert_eq!(api.list_calls(), 3);
}

#[tokio::test]
async fn confirm_sends_one_confirm_then_one_refresh() {
    let mut api = RecordingApi::new();
    api.appointments = vec![appointment("a1", AppointmentStatus::Tentative)];
    let mut state = DashboardState::new();
    create_organization(&api, &mut state).await;
    let before = api.calls().len();

    state
        .dispatch(&api, DashboardEvent::ConfirmAppointment("a1".into()))
        .await;

    assert_eq!(
        api.calls()[before..],
        [
            Call::ConfirmAppointment(RecordId::from("a1")),
            Call::ListAppointments(RecordId::from("org-1"), None),
        ]
    );
    assert_eq!(state.confirming, None);
}

#[tokio::test]
async fn failed_confirm_still_refreshes_once_and_reports() {
    let api = RecordingApi::new();
    let mut state = DashboardState::new();
    create_organization(&api, &mut state).await;
    api.fail(Operation::ConfirmAppointment, 400, Some("Already confirmed"));
    let before = api.list_calls();

    state
        .dispatch(&api, DashboardEvent::ConfirmAppointment("a1".into()))
        .await;

    assert_eq!(api.list_calls(), before + 1);
    assert_eq!(
        state.notice.as_ref().map(|n| n.message.as_str()),
        Some("Already confirmed")
    );
}

#[tokio::test]
async fn service_is_listed_only_after_the_backend_accepts_it() {
    let api = RecordingApi::new();
    let mut state = DashboardState::new();
    create_organization(&api, &mut state).await;

    state
        .dispatch(&api, DashboardEvent::ServiceFieldEdited(ServiceEdit::Name("Drain".into())))
        .await;
    api.fail(Operation::CreateService, 500, None);
    state.dispatch(&api, DashboardEvent::CreateService).await;
    assert!(state.services.is_empty());
    assert!(state.notice.as_ref().is_some_and(|n| n.retriable));

    let api = RecordingApi::new();
    state.dispatch(&api, DashboardEvent::CreateService).await;
    assert_eq!(state.services.len(), 1);
    assert_eq!(state.services[0].id, RecordId::from("svc-1"));
    assert_eq!(state.services[0].duration_minutes, 60);
}

#[tokio::test]
async fn run_lets_the_caller_own_the_state() {
    let api = RecordingApi::new();
    let state = std::cell::RefCell::new(DashboardState::new());
    state.borrow_mut().organization_form = tradie_core::OrganizationDraft {
        name: "Acme".into(),
        email: "owner@acme.test".into(),
        slug: "acme".into(),
    };

    run::<_, DashboardState>(
        &api,
        |e| state.borrow_mut().apply(e),
        DashboardEvent::CreateOrganization,
    )
    .await;

    assert!(state.borrow().organization.is_some());
    assert!(!state.borrow().saving);
}

// ---------------------------------------------------------------------------
// Public booking
// ---------------------------------------------------------------------------

async fn opened(api: &RecordingApi) -> BookingState {
    let mut state = BookingState::new("acme");
    state.dispatch(api, BookingEvent::Opened).await;
    state
}

#[tokio::test]
async fn unknown_slug_shows_an_error_instead_of_loading() {
    let api = RecordingApi::new();
    let state = opened(&api).await;

    match &state.phase {
        BookingPhase::Unavailable(error) => assert_eq!(error.message, "Organization not found"),
        other => panic!("expected unavailable page, got {other:?}"),
    }
    assert_eq!(api.calls(), vec![Call::BookingPage("acme".into())]);
}

#[tokio::test]
async fn slots_are_fetched_for_a_week_from_the_chosen_date() {
    let mut api = RecordingApi::new();
    api.page = Some(acme_page());
    api.slots = vec![
        tradie_core::Slot::new("2025-03-03T09:00:00"),
        tradie_core::Slot::new("2025-03-04T09:00:00"),
    ];
    let mut state = opened(&api).await;
    assert_eq!(state.phase, BookingPhase::Ready);
    assert_eq!(state.services.len(), 1);

    let start = NaiveDate::from_ymd_opt(2025, 3, 3);
    state
        .dispatch(&api, BookingEvent::ServiceSelected(Some("svc-1".into())))
        .await;
    state.dispatch(&api, BookingEvent::DateSelected(start)).await;
    state.dispatch(&api, BookingEvent::FindSlots).await;

    assert_eq!(state.slots.len(), 2);
    assert!(!state.loading_slots);
    assert_eq!(
        api.calls().last(),
        Some(&Call::AvailableSlots(SlotQuery {
            organization_id: "org-1".into(),
            service_id: "svc-1".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            days: 7,
        }))
    );
}

#[tokio::test]
async fn booking_without_a_name_makes_no_request() {
    let mut api = RecordingApi::new();
    api.page = Some(acme_page());
    let mut state = opened(&api).await;
    state
        .dispatch(&api, BookingEvent::ServiceSelected(Some("svc-1".into())))
        .await;

    state
        .dispatch(&api, BookingEvent::SlotChosen("2025-03-03T09:00:00".into()))
        .await;

    assert_eq!(api.count(|c| matches!(c, Call::Book(_))), 0);
    assert!(state.notice.is_some());
    assert!(state.confirmation.is_none());
}

#[tokio::test]
async fn successful_booking_returns_public_code() {
    let mut api = RecordingApi::new();
    api.page = Some(acme_page());
    let mut state = opened(&api).await;
    state
        .dispatch(&api, BookingEvent::ServiceSelected(Some("svc-1".into())))
        .await;
    state
        .dispatch(&api, BookingEvent::CustomerEdited(CustomerField::Name, "Ana".into()))
        .await;
    state
        .dispatch(
            &api,
            BookingEvent::CustomerEdited(CustomerField::Email, "ana@example.com".into()),
        )
        .await;

    state
        .dispatch(&api, BookingEvent::SlotChosen("2025-03-03T09:00:00".into()))
        .await;

    assert_eq!(
        state.confirmation.as_ref().map(|c| c.public_code.as_str()),
        Some("TB-4821")
    );
    assert_eq!(
        api.calls().last(),
        Some(&Call::Book(BookingRequest {
            organization_id: "org-1".into(),
            service_id: "svc-1".into(),
            customer_name: "Ana".into(),
            customer_email: "ana@example.com".into(),
            customer_phone: String::new(),
            start_time: "2025-03-03T09:00:00".into(),
        }))
    );
}

#[tokio::test]
async fn rejected_booking_shows_server_detail_or_default() {
    let mut api = RecordingApi::new();
    api.page = Some(acme_page());
    let mut state = opened(&api).await;
    state
        .dispatch(&api, BookingEvent::ServiceSelected(Some("svc-1".into())))
        .await;
    state
        .dispatch(&api, BookingEvent::CustomerEdited(CustomerField::Name, "Ana".into()))
        .await;

    api.fail(Operation::Book, 409, Some("Slot already taken"));
    state
        .dispatch(&api, BookingEvent::SlotChosen("2025-03-03T09:00:00".into()))
        .await;
    assert_eq!(
        state.notice.as_ref().map(|n| n.message.as_str()),
        Some("Slot already taken")
    );

    api.fail(Operation::Book, 422, None);
    state
        .dispatch(&api, BookingEvent::SlotChosen("2025-03-03T10:00:00".into()))
        .await;
    assert_eq!(
        state.notice.as_ref().map(|n| n.message.as_str()),
        Some("Unable to book this slot")
    );
    assert!(state.confirmation.is_none());
    assert_eq!(api.count(|c| matches!(c, Call::Book(_))), 2);
}
