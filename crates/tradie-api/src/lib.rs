// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tradie Scheduler: HTTP implementation of the scheduling API.

pub mod client;
pub mod detail;
mod wire;

pub use client::HttpSchedulerApi;
