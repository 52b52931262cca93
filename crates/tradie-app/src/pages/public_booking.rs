// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Public booking page: customers pick a service, a week of slots, and book.

use chrono::Local;
use dioxus::prelude::*;

use tradie_core::types::RecordId;
use tradie_views::booking::{CustomerField, parse_date_input};
use tradie_views::{BookingEvent, BookingPhase, BookingState};

use crate::pages::widgets::{Card, DismissibleNotice, INPUT_STYLE, LABEL_STYLE, Notice, PRIMARY_BUTTON};
use crate::services::app_services::AppServices;
use crate::state::dispatch;

/// Route target for `/b/:slug`.
#[component]
pub fn PublicBooking(slug: String) -> Element {
    // Keyed so that following a link to another business starts afresh.
    rsx! {
        BookingForm { key: "{slug}", slug: slug.clone() }
    }
}

#[component]
fn BookingForm(slug: String) -> Element {
    let svc = use_context::<AppServices>();
    let booking = use_signal(|| BookingState::new(slug.clone()));
    let send = use_callback(move |event: BookingEvent| dispatch(svc.api(), booking, event));
    use_hook(move || spawn(async move { send.call(BookingEvent::Opened) }));

    let state = booking.read();

    let body = match (&state.phase, &state.organization) {
        (BookingPhase::Unavailable(error), _) => rsx! {
            div { style: "max-width: 448px; margin: 48px auto;",
                Notice { error: error.clone() }
            }
        },
        (BookingPhase::Ready, Some(org)) => rsx! {
            div { style: "max-width: 448px; margin: 0 auto; padding: 16px;",
                h1 { style: "font-size: 20px; font-weight: 600; text-align: center;", "Book with {org.name}" }

                if let Some(confirmation) = &state.confirmation {
                    Card {
                        div { style: "text-align: center;",
                            div { style: "font-weight: 600;", "Thanks! Your booking is tentative." }
                            div { style: "font-size: 14px; margin-top: 8px;", "Save this code to modify your booking:" }
                            div { style: "font-family: monospace; font-size: 18px; margin-top: 8px;", "{confirmation.public_code}" }
                        }
                    }
                } else {
                    BookingControls { state: (*state).clone(), on_event: send }
                }
            }
        },
        _ => rsx! {
            div { style: "padding: 16px; text-align: center; color: #e2e8f0;", "Loading…" }
        },
    };

    rsx! {
        div { style: "min-height: 100vh; background: #0f172a; color: #f1f5f9; font-family: system-ui, -apple-system, sans-serif;",
            {body}
        }
    }
}

#[component]
fn BookingControls(state: BookingState, on_event: Callback<BookingEvent>) -> Element {
    let selected = state
        .selected_service
        .as_ref()
        .map(RecordId::as_str)
        .unwrap_or("")
        .to_string();
    let date = state
        .start_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let groups = state.slot_groups(&Local);

    rsx! {
        Card {
            div { style: "display: grid; gap: 16px;",
                div {
                    label { style: LABEL_STYLE, "Service" }
                    select {
                        style: INPUT_STYLE,
                        value: "{selected}",
                        onchange: move |evt| {
                            let value = evt.value();
                            let service = (!value.is_empty()).then(|| RecordId::new(value));
                            on_event.call(BookingEvent::ServiceSelected(service));
                        },
                        option { value: "", disabled: true, "Select a service" }
                        for service in state.services.iter() {
                            option { key: "{service.id}", value: "{service.id}", "{service.option_label()}" }
                        }
                    }
                }

                div {
                    label { style: LABEL_STYLE, "Start from date" }
                    div { style: "display: flex; gap: 8px;",
                        input {
                            style: INPUT_STYLE,
                            r#type: "date",
                            value: "{date}",
                            onchange: move |evt| on_event.call(BookingEvent::DateSelected(parse_date_input(&evt.value()))),
                        }
                        button {
                            style: PRIMARY_BUTTON,
                            disabled: !state.can_find_slots(),
                            onclick: move |_| on_event.call(BookingEvent::FindSlots),
                            if state.loading_slots { "Loading…" } else { "Find slots" }
                        }
                    }
                }

                div {
                    label { style: LABEL_STYLE, "Your details" }
                    input {
                        style: "{INPUT_STYLE} margin-top: 4px;",
                        placeholder: "Your name",
                        value: "{state.customer.name}",
                        oninput: move |evt| on_event.call(BookingEvent::CustomerEdited(CustomerField::Name, evt.value())),
                    }
                    div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; margin-top: 8px;",
                        input {
                            style: INPUT_STYLE,
                            r#type: "email",
                            placeholder: "Email",
                            value: "{state.customer.email}",
                            oninput: move |evt| on_event.call(BookingEvent::CustomerEdited(CustomerField::Email, evt.value())),
                        }
                        input {
                            style: INPUT_STYLE,
                            placeholder: "Phone",
                            value: "{state.customer.phone}",
                            oninput: move |evt| on_event.call(BookingEvent::CustomerEdited(CustomerField::Phone, evt.value())),
                        }
                    }
                }

                if let Some(error) = state.notice.clone() {
                    DismissibleNotice {
                        error,
                        on_dismiss: move |_| on_event.call(BookingEvent::NoticeDismissed),
                    }
                }

                div {
                    div { style: "{LABEL_STYLE} margin-bottom: 8px;", "Available slots (next 7 days)" }
                    if groups.is_empty() {
                        div { style: "color: #94a3b8; font-size: 14px;",
                            "No slots loaded. Choose service and date, then tap Find slots."
                        }
                    }
                    for group in groups.iter() {
                        div { key: "{group.label()}",
                            style: "background: rgba(15, 23, 42, 0.6); padding: 8px; border-radius: 6px; margin-bottom: 12px;",
                            div { style: "font-size: 14px; margin-bottom: 4px;", "{group.label()}" }
                            div { style: "display: flex; flex-wrap: wrap; gap: 8px;",
                                for slot in group.slots.iter() {
                                    {
                                        let start = slot.start.clone();
                                        rsx! {
                                            button {
                                                key: "{slot.start}",
                                                style: "padding: 4px 8px; border-radius: 4px; border: none; background: #047857; color: white; font-size: 12px; cursor: pointer;",
                                                disabled: state.booking,
                                                onclick: move |_| on_event.call(BookingEvent::SlotChosen(start.clone())),
                                                "{slot.time_label(&Local)}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
