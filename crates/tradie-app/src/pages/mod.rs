// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod dashboard;
pub mod not_found;
pub mod public_booking;
pub mod status;
pub mod widgets;
