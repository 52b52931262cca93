// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.
//
// Sources, lowest precedence first: built-in defaults, an optional JSON file
// named by TRADIE_CONFIG, values baked in at build time, and the runtime
// environment. Browser builds only ever see the first and third.
//
// When no source names a public origin, the page's own origin is used in the
// browser and http://localhost:8080 elsewhere.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{Result, TradieError};

pub const ENV_CONFIG_PATH: &str = "TRADIE_CONFIG";
pub const ENV_BACKEND_URL: &str = "TRADIE_BACKEND_URL";
pub const ENV_PUBLIC_ORIGIN: &str = "TRADIE_PUBLIC_ORIGIN";
pub const ENV_REQUEST_TIMEOUT: &str = "TRADIE_REQUEST_TIMEOUT_SECS";

/// Public origin outside the browser when nothing else names one.
pub const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Runtime settings for the dashboard and booking widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the scheduling REST API. Empty means "same origin".
    pub backend_url: String,
    /// Origin the app is served from; public booking links are built on it.
    /// Empty means "wherever the page was loaded from".
    pub public_origin: String,
    /// Per-request timeout, in seconds (native builds only).
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            public_origin: String::new(),
            request_timeout_secs: 15,
        }
    }
}

impl AppConfig {
    /// Load from every source available on this platform.
    pub fn load() -> Result<Self> {
        let file = std::env::var(ENV_CONFIG_PATH).ok();
        let page = page_origin();
        Self::from_sources(
            file.as_deref().map(Path::new),
            build_time,
            |key| std::env::var(key).ok(),
            page.as_deref(),
        )
    }

    /// Layer the given sources over the defaults, then validate.
    ///
    /// `baked` and `runtime` are looked up by environment variable name.
    /// `page` is the origin the app was loaded from, if it runs in a browser.
    pub fn from_sources(
        file: Option<&Path>,
        baked: impl Fn(&str) -> Option<String>,
        runtime: impl Fn(&str) -> Option<String>,
        page: Option<&str>,
    ) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(baked)?;
        config.apply_overrides(runtime)?;
        if config.public_origin.trim().is_empty() {
            config.public_origin = page
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .unwrap_or(FALLBACK_ORIGIN)
                .to_string();
        }
        config.validate()?;
        debug!(
            backend = %config.backend_base(),
            origin = %config.public_origin,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        debug!(path = %path.display(), "read config file");
        Ok(config)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let present = |key: &str| lookup(key).map(|v| v.trim().to_string());

        if let Some(url) = present(ENV_BACKEND_URL) {
            self.backend_url = url;
        }
        if let Some(origin) = present(ENV_PUBLIC_ORIGIN).filter(|o| !o.is_empty()) {
            self.public_origin = origin;
        }
        if let Some(raw) = present(ENV_REQUEST_TIMEOUT).filter(|t| !t.is_empty()) {
            self.request_timeout_secs = raw.parse().map_err(|_| {
                TradieError::Config(format!("{ENV_REQUEST_TIMEOUT} must be a whole number, got '{raw}'"))
            })?;
        }
        Ok(())
    }

    /// Reject URLs we could never send a request to.
    pub fn validate(&self) -> Result<()> {
        check_url(&self.public_origin)?;
        if !self.backend_url.is_empty() {
            check_url(&self.backend_url)?;
        }
        if self.request_timeout_secs == 0 {
            return Err(TradieError::Config("request timeout must be at least 1 second".into()));
        }
        Ok(())
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn backend_base(&self) -> &str {
        let base = if self.backend_url.is_empty() {
            &self.public_origin
        } else {
            &self.backend_url
        };
        base.trim_end_matches('/')
    }
}

fn check_url(raw: &str) -> Result<()> {
    let invalid = |reason: String| TradieError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("must start with http:// or https://".into()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".into()));
    }
    Ok(())
}

/// `window.location.origin` of the page running the app.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

/// Values compiled in with `TRADIE_*=... cargo build` (or `dx build`).
fn build_time(key: &str) -> Option<String> {
    let value = match key {
        ENV_BACKEND_URL => option_env!("TRADIE_BACKEND_URL"),
        ENV_PUBLIC_ORIGIN => option_env!("TRADIE_PUBLIC_ORIGIN"),
        ENV_REQUEST_TIMEOUT => option_env!("TRADIE_REQUEST_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(String::from)
}
