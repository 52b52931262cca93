// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend status page: where requests go and how to point them elsewhere.

use dioxus::prelude::*;

use tradie_core::config::{ENV_BACKEND_URL, ENV_CONFIG_PATH, ENV_PUBLIC_ORIGIN};

use crate::pages::widgets::{Card, LABEL_STYLE};
use crate::services::app_services::AppServices;

#[component]
pub fn BackendStatus() -> Element {
    let svc = use_context::<AppServices>();
    let config = svc.config();
    let backend = if config.backend_url.is_empty() {
        format!("{} (same origin)", config.backend_base())
    } else {
        svc.api().base_url().to_string()
    };

    rsx! {
        div { style: "max-width: 768px; margin: 0 auto; padding: 16px;",
            h1 { style: "font-size: 20px; font-weight: 600;", "Backend" }
            Card {
                StatusRow { label: "Backend URL", value: backend }
                StatusRow { label: "Public origin", value: config.public_origin.clone() }
                StatusRow { label: "Request timeout", value: format!("{} s", config.request_timeout_secs) }
            }
            p { style: "{LABEL_STYLE} line-height: 1.6;",
                "Set {ENV_BACKEND_URL} to point the app at a backend, and {ENV_PUBLIC_ORIGIN} to the address customers use for booking links. "
                "Both can also be given in a JSON file named by {ENV_CONFIG_PATH}, or baked in at build time."
            }
        }
    }
}

#[component]
fn StatusRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; gap: 12px; padding: 8px 0; border-bottom: 1px solid #334155; font-size: 14px;",
            span { style: "color: #94a3b8;", "{label}" }
            span { style: "word-break: break-all; text-align: right;", "{value}" }
        }
    }
}
