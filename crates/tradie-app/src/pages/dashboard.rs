// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dashboard page: business profile, services, and appointments.

use chrono::Local;
use dioxus::prelude::*;

use tradie_core::types::AppointmentStatus;
use tradie_views::DashboardEvent;
use tradie_views::dashboard::{OrganizationField, ServiceEdit};

use crate::pages::widgets::{Card, DismissibleNotice, INPUT_STYLE, LABEL_STYLE, PRIMARY_BUTTON};
use crate::services::app_services::AppServices;
use crate::state::{AppState, dispatch};

#[component]
pub fn Dashboard() -> Element {
    let dashboard = use_context::<AppState>().dashboard;
    let svc = use_context::<AppServices>();
    let origin = svc.config().public_origin.clone();
    let send = use_callback(move |event: DashboardEvent| dispatch(svc.api(), dashboard, event));

    let state = dashboard.read();
    let public_url = state.public_url(&origin);

    rsx! {
        div { style: "max-width: 768px; margin: 0 auto; padding: 16px;",
            h1 { style: "font-size: 20px; font-weight: 600;", "Tradie Dashboard" }

            if let Some(error) = state.notice.clone() {
                DismissibleNotice {
                    error,
                    on_dismiss: move |_| send.call(DashboardEvent::NoticeDismissed),
                }
            }

            match (&state.organization, public_url) {
                (None, _) => rsx! {
                    Card {
                        h2 { style: "font-size: 16px; margin: 0 0 8px 0;", "Create your business profile" }
                        div { style: "display: grid; gap: 12px;",
                            input {
                                style: INPUT_STYLE,
                                placeholder: "Business Name",
                                value: "{state.organization_form.name}",
                                oninput: move |evt| send.call(DashboardEvent::OrganizationFieldEdited(OrganizationField::Name, evt.value())),
                            }
                            input {
                                style: INPUT_STYLE,
                                r#type: "email",
                                placeholder: "Contact Email",
                                value: "{state.organization_form.email}",
                                oninput: move |evt| send.call(DashboardEvent::OrganizationFieldEdited(OrganizationField::Email, evt.value())),
                            }
                            input {
                                style: INPUT_STYLE,
                                placeholder: "Public slug (e.g. acme-plumbing)",
                                value: "{state.organization_form.slug}",
                                oninput: move |evt| send.call(DashboardEvent::OrganizationFieldEdited(OrganizationField::Slug, evt.value())),
                            }
                            button {
                                style: PRIMARY_BUTTON,
                                disabled: state.saving,
                                onclick: move |_| send.call(DashboardEvent::CreateOrganization),
                                if state.saving { "Creating…" } else { "Create" }
                            }
                        }
                    }
                },
                (Some(org), url) => rsx! {
                    Card {
                        div { style: "display: flex; justify-content: space-between; gap: 12px; align-items: center;",
                            div {
                                div { style: "font-weight: 600;", "{org.name}" }
                                if let Some(url) = url {
                                    div { style: "{LABEL_STYLE} word-break: break-all;",
                                        "Public booking link: "
                                        a { href: "{url}", target: "_blank", rel: "noreferrer", style: "color: #60a5fa;", "{url}" }
                                    }
                                }
                            }
                            span { style: "font-size: 12px; color: #94a3b8;", "Slug: {org.slug}" }
                        }
                    }

                    ServicesCard { on_event: send }
                    AppointmentsCard { on_event: send }
                },
            }
        }
    }
}

#[component]
fn ServicesCard(on_event: Callback<DashboardEvent>) -> Element {
    let dashboard = use_context::<AppState>().dashboard;
    let state = dashboard.read();
    let form = &state.service_form;

    rsx! {
        Card {
            h3 { style: "font-size: 16px; margin: 0 0 8px 0;", "Services" }
            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px; font-size: 14px;",
                div { style: "grid-column: span 2;",
                    input {
                        style: INPUT_STYLE,
                        placeholder: "Name",
                        value: "{form.name}",
                        oninput: move |evt| on_event.call(DashboardEvent::ServiceFieldEdited(ServiceEdit::Name(evt.value()))),
                    }
                }
                input {
                    style: INPUT_STYLE,
                    r#type: "number",
                    min: "1",
                    placeholder: "Duration (min)",
                    value: "{form.duration_minutes}",
                    oninput: move |evt| {
                        let minutes = evt.value().trim().parse().unwrap_or(0);
                        on_event.call(DashboardEvent::ServiceFieldEdited(ServiceEdit::DurationMinutes(minutes)));
                    },
                }
                input {
                    style: INPUT_STYLE,
                    r#type: "number",
                    step: "0.01",
                    placeholder: "Price",
                    value: "{form.price}",
                    oninput: move |evt| {
                        let price = evt.value().trim().parse().unwrap_or(0.0);
                        on_event.call(DashboardEvent::ServiceFieldEdited(ServiceEdit::Price(price)));
                    },
                }
                label { style: "{LABEL_STYLE} display: flex; align-items: center; gap: 8px;",
                    input {
                        r#type: "checkbox",
                        checked: form.is_quote_only,
                        onchange: move |evt| on_event.call(DashboardEvent::ServiceFieldEdited(ServiceEdit::QuoteOnly(evt.checked()))),
                    }
                    "Quote only"
                }
                label { style: "{LABEL_STYLE} display: flex; align-items: center; gap: 8px;",
                    input {
                        r#type: "checkbox",
                        checked: form.requires_deposit,
                        onchange: move |evt| on_event.call(DashboardEvent::ServiceFieldEdited(ServiceEdit::RequiresDeposit(evt.checked()))),
                    }
                    "Requires deposit"
                }
                if form.requires_deposit {
                    input {
                        style: INPUT_STYLE,
                        r#type: "number",
                        step: "0.01",
                        placeholder: "Deposit Amount",
                        value: "{form.deposit_amount}",
                        oninput: move |evt| {
                            let amount = evt.value().trim().parse().unwrap_or(0.0);
                            on_event.call(DashboardEvent::ServiceFieldEdited(ServiceEdit::DepositAmount(amount)));
                        },
                    }
                }
                div { style: "grid-column: span 2; margin-top: 8px;",
                    button {
                        style: "{PRIMARY_BUTTON} width: 100%;",
                        disabled: state.saving,
                        onclick: move |_| on_event.call(DashboardEvent::CreateService),
                        "Add Service"
                    }
                }
            }

            ul { style: "list-style: none; padding: 0; margin: 12px 0 0 0;",
                for service in state.services.iter() {
                    li { key: "{service.id}",
                        style: "display: flex; justify-content: space-between; padding: 8px; margin: 6px 0; border-radius: 6px; background: rgba(15, 23, 42, 0.6); font-size: 14px;",
                        span { "{service.name}" }
                        span { style: "color: #94a3b8;", "{service.summary()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn AppointmentsCard(on_event: Callback<DashboardEvent>) -> Element {
    let dashboard = use_context::<AppState>().dashboard;
    let state = dashboard.read();
    let filter_value = state.status_filter.map(|s| s.as_str()).unwrap_or("");

    rsx! {
        Card {
            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h3 { style: "font-size: 16px; margin: 0;", "Appointments" }
                select {
                    style: "padding: 6px; border-radius: 6px; background: #0f172a; color: #f8fafc; font-size: 13px;",
                    value: filter_value,
                    onchange: move |evt| {
                        let filter = evt.value().parse::<AppointmentStatus>().ok();
                        on_event.call(DashboardEvent::StatusFilterChanged(filter));
                    },
                    option { value: "", "All" }
                    for status in AppointmentStatus::FILTERABLE {
                        option { value: status.as_str(), "{status.label()}" }
                    }
                }
            }
            button {
                style: "border: none; background: transparent; color: #60a5fa; text-decoration: underline; font-size: 12px; cursor: pointer; padding: 0;",
                onclick: move |_| on_event.call(DashboardEvent::Refresh),
                if state.loading_appointments { "Refreshing…" } else { "Refresh" }
            }

            if state.appointments.is_empty() && !state.loading_appointments {
                p { style: "color: #94a3b8; font-size: 14px; margin: 16px 0;", "No appointments yet." }
            }

            ul { style: "list-style: none; padding: 0; margin: 12px 0 0 0;",
                for appt in state.appointments.iter() {
                    {
                        let id = appt.id.clone();
                        let confirming = state.confirming.as_ref() == Some(&appt.id);
                        let when = appt.time_range_label(&Local);
                        rsx! {
                            li { key: "{appt.id}",
                                style: "padding: 12px; margin: 8px 0; border-radius: 6px; background: rgba(15, 23, 42, 0.6); font-size: 14px;",
                                div { style: "display: flex; justify-content: space-between; align-items: center;",
                                    span { style: "font-weight: 600;", "{appt.customer_name}" }
                                    span { style: "font-size: 12px; padding: 2px 8px; border-radius: 4px; background: {status_bg(appt.status)};",
                                        "{appt.status.label()}"
                                    }
                                }
                                div { style: "color: #94a3b8; font-size: 12px; margin-top: 4px;", "{when}" }
                                if appt.status.can_confirm() {
                                    button {
                                        style: "margin-top: 8px; padding: 4px 12px; border-radius: 4px; border: none; background: #059669; color: white; font-size: 12px; cursor: pointer;",
                                        disabled: state.confirming.is_some(),
                                        onclick: move |_| on_event.call(DashboardEvent::ConfirmAppointment(id.clone())),
                                        if confirming { "Confirming…" } else { "Confirm" }
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

fn status_bg(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Tentative => "#92400e",
        AppointmentStatus::Confirmed => "#1e40af",
        AppointmentStatus::DepositPaid | AppointmentStatus::Paid => "#065f46",
        AppointmentStatus::Cancelled | AppointmentStatus::Missed => "#7f1d1d",
        AppointmentStatus::Unknown => "#334155",
    }
}
