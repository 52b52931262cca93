// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Extract the human-facing `detail` from an error response body.
//
// The backend answers failures with `{"detail": "..."}`. Request validation
// failures carry a list instead: `{"detail": [{"msg": "...", ...}, ...]}`.

use serde_json::Value;

/// Pull the `detail` text out of an error body, if there is one.
///
/// Bodies that are not JSON, or JSON without a usable `detail`, yield `None`
/// so the caller falls back to its own default message.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let text = detail_text(value.get("detail")?)?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(detail_text).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(fields) => fields.get("msg").and_then(detail_text),
        _ => None,
    }
}
