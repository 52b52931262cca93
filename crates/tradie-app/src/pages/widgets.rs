// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Small building blocks shared by the pages.

use dioxus::prelude::*;

use tradie_core::human_errors::{HumanError, Severity};

pub const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 8px; border-radius: 6px; border: 1px solid #334155; background: #0f172a; color: #f8fafc; font-size: 14px;";
pub const PRIMARY_BUTTON: &str = "padding: 8px 16px; border-radius: 6px; border: none; background: #2563eb; color: white; font-size: 14px; cursor: pointer;";
pub const LABEL_STYLE: &str = "color: #cbd5e1; font-size: 13px;";

/// Rounded panel used for every section.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! {
        div { style: "background: rgba(30, 41, 59, 0.6); border: 1px solid #334155; border-radius: 12px; padding: 16px; margin: 16px 0;",
            {children}
        }
    }
}

/// A humanized error: headline plus what to try next.
#[component]
pub fn Notice(error: HumanError) -> Element {
    let (bg, fg) = severity_colours(error.severity);
    rsx! {
        div { style: "padding: 12px 16px; border-radius: 8px; background: {bg}; color: {fg};",
            strong { style: "display: block; font-size: 15px;", "{error.message}" }
            p { style: "margin: 4px 0 0 0; font-size: 13px;", "{error.suggestion}" }
        }
    }
}

/// Notice with a dismiss button.
#[component]
pub fn DismissibleNotice(error: HumanError, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { style: "position: relative; margin: 12px 0;",
            Notice { error }
            button {
                style: "position: absolute; top: 8px; right: 8px; border: none; background: transparent; font-size: 16px; cursor: pointer;",
                onclick: move |_| on_dismiss.call(()),
                "\u{00D7}"
            }
        }
    }
}

fn severity_colours(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Transient => ("#fff3cd", "#856404"),
        Severity::ActionRequired => ("#dbeafe", "#1e3a8a"),
        Severity::Permanent => ("#f8d7da", "#721c24"),
    }
}
