// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state: reactive signals for the Dioxus UI.

use dioxus::prelude::*;

use tradie_api::HttpSchedulerApi;
use tradie_views::{DashboardState, View, run};

/// Shared state accessible to all pages via `use_context`.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Owner dashboard. Lives here so it survives a visit to the status page.
    pub dashboard: Signal<DashboardState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(DashboardState::new()),
        }
    }
}

/// Apply a user action to `view`, then finish any backend work on the UI
/// executor.
///
/// Field edits never produce a command, so typing updates the signal in
/// place. The signal is never held across a request.
pub fn dispatch<V>(api: &HttpSchedulerApi, mut view: Signal<V>, event: V::Event)
where
    V: View + 'static,
    V::Event: 'static,
    V::Command: 'static,
{
    let Some(command) = view.write().apply(event) else {
        return;
    };
    let api = api.clone();
    spawn(async move {
        let outcome = V::execute(&api, command).await;
        run::<_, V>(&api, |e| view.write().apply(e), outcome).await;
    });
}
