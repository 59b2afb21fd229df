// brewnix-core/src/decode/mod.rs
//! Cask Schema & Decoder: validates raw Cask JSON and decodes it into a typed [`Cask`].
//!
//! The schema lives on the model's `Deserialize` impls; this module runs them
//! with path tracking so every failure names its location.

use brewnix_common::error::{DecodeError, Result};
use brewnix_common::model::cask::Cask;
use serde_json::Value;
use tracing::debug;

/// Validates `raw` against the Cask schema and decodes it. Fails on the first
/// violation; no partial Cask is ever returned.
pub fn decode_cask(raw: &Value) -> std::result::Result<Cask, DecodeError> {
    let cask: Cask = serde_path_to_error::deserialize(raw)?;
    debug!(
        "Decoded cask '{}' with {} artifacts",
        cask.token,
        cask.artifacts.len()
    );
    Ok(cask)
}

/// Parses `json` and decodes it as a Cask.
pub fn decode_cask_str(json: &str) -> Result<Cask> {
    let raw: Value = serde_json::from_str(json)?;
    Ok(decode_cask(&raw)?)
}
