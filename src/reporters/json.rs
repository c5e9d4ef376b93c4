//! JSON reporter
//!
//! Outputs any result record as pretty-printed JSON. Useful for machine
//! consumption, piping to jq, or further processing. Result types carry
//! only primitive fields, so the JSON shape matches the wire contract
//! downstream services expect.

use anyhow::Result;
use serde::Serialize;

/// Render a result as pretty-printed JSON
pub fn render<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a result as compact JSON (single line)
pub fn render_compact<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
