// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!(%path, "no route");

    rsx! {
        div { style: "max-width: 448px; margin: 64px auto; text-align: center; font-family: system-ui, -apple-system, sans-serif;",
            h1 { style: "font-size: 22px;", "Page not found" }
            p { style: "color: #666;", "There is nothing at /{path}." }
            Link { to: Route::Dashboard {}, style: "color: #2563eb;", "Go to the dashboard" }
        }
    }
}
