// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tradie Scheduler: view state for the owner dashboard and public booking page.
//
// Each view is a plain record changed only by discrete events (field edits,
// submissions, backend results). Applying an event may yield one command; a
// command is one backend call whose outcome comes back as the next event.

pub mod booking;
pub mod dashboard;
pub mod view;

pub use booking::{BookingCommand, BookingEvent, BookingPhase, BookingState};
pub use dashboard::{DashboardCommand, DashboardEvent, DashboardState};
pub use view::{View, run};
