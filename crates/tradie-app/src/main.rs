// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tradie Scheduler
//
// Entry point. Initialises logging, loads configuration, and launches the
// Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use tradie_core::human_errors::{HumanError, humanize_error};

use pages::dashboard::Dashboard;
use pages::not_found::NotFound;
use pages::public_booking::PublicBooking;
use pages::status::BackendStatus;
use pages::widgets::Notice;

use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Tradie Scheduler starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(HeaderLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/status")]
        BackendStatus {},
    #[end_layout]
    #[route("/b/:slug")]
    PublicBooking { slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root component.
fn app() -> Element {
    let services = use_hook(|| match AppServices::init() {
        Ok(svc) => {
            tracing::info!(backend = %svc.api().base_url(), "app services initialised");
            Ok(svc)
        }
        Err(e) => {
            tracing::error!(error = %e, "configuration rejected");
            Err(humanize_error(&e))
        }
    });

    match services {
        Ok(services) => rsx! { Shell { services } },
        Err(error) => rsx! { StartupError { error } },
    }
}

/// Provides services and state as context for all pages.
#[component]
fn Shell(services: AppServices) -> Element {
    use_context_provider(|| services.clone());
    use_context_provider(state::AppState::new);

    rsx! {
        Router::<Route> {}
    }
}

/// Shown instead of the router when the configuration is unusable.
#[component]
fn StartupError(error: HumanError) -> Element {
    rsx! {
        div { style: "max-width: 480px; margin: 48px auto; font-family: system-ui, -apple-system, sans-serif;",
            h1 { style: "font-size: 22px;", "Tradie Scheduler can't start" }
            Notice { error }
        }
    }
}

/// Sticky header around the owner pages.
#[component]
fn HeaderLayout() -> Element {
    rsx! {
        div { class: "app-container",
            style: "min-height: 100vh; background: #0f172a; color: #f1f5f9; font-family: system-ui, -apple-system, sans-serif;",

            header {
                style: "position: sticky; top: 0; z-index: 10; background: rgba(15, 23, 42, 0.85); border-bottom: 1px solid #1e293b;",
                div { style: "max-width: 960px; margin: 0 auto; padding: 0 16px; height: 56px; display: flex; align-items: center; justify-content: space-between;",
                    Link { to: Route::Dashboard {},
                        style: "font-weight: 600; color: #f1f5f9; text-decoration: none;",
                        "Tradie Scheduler"
                    }
                    nav { style: "display: flex; gap: 16px; font-size: 14px;",
                        Link { to: Route::Dashboard {}, style: "color: #cbd5e1;", "Dashboard" }
                        Link { to: Route::BackendStatus {}, style: "color: #cbd5e1;", "Status" }
                    }
                }
            }

            main {
                Outlet::<Route> {}
            }
        }
    }
}
