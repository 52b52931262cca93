// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tradie Scheduler: core records, errors and the API seam shared across all crates.

pub mod api;
pub mod config;
pub mod error;
pub mod human_errors;
pub mod slots;
pub mod types;

pub use api::SchedulerApi;
pub use config::AppConfig;
pub use error::TradieError;
pub use types::*;
