// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: loads configuration once at startup and hands the
// HTTP client to every page.

use tracing::info;

use tradie_api::HttpSchedulerApi;
use tradie_core::AppConfig;
use tradie_core::error::Result;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Cheap to clone: the HTTP client is reference-counted.
#[derive(Debug, Clone)]
pub struct AppServices {
    api: HttpSchedulerApi,
    config: AppConfig,
}

impl AppServices {
    /// Load configuration and build the HTTP client. Call once at app startup.
    pub fn init() -> Result<Self> {
        let config = AppConfig::load()?;
        let api = HttpSchedulerApi::from_config(&config)?;
        info!(
            origin = %config.public_origin,
            timeout_secs = config.request_timeout_secs,
            "scheduler services ready"
        );
        Ok(Self { api, config })
    }

    pub fn api(&self) -> &HttpSchedulerApi {
        &self.api
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

// Component props must be comparable. The client has no identity of its own,
// so two service sets are equal when they talk to the same backend.
impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && self.api.base_url() == other.api.base_url()
    }
}
