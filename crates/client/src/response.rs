//! Relay response validation

use tracing::warn;

use relaymesh_core::{RelayMeshError, RelayResponse, Result};

/// Inspect a raw node response and surface any node-reported failure.
///
/// A response carrying an `error` member becomes a typed
/// [`RelayMeshError::Relay`] with the node's code and message; anything else
/// is deserialized into the normalized [`RelayResponse`].
pub fn validate_response(raw: serde_json::Value) -> Result<RelayResponse> {
    if let Some(error) = raw.get("error") {
        let (code, message) = match error {
            serde_json::Value::String(message) => (0, message.clone()),
            _ => (
                error.get("code").and_then(|c| c.as_i64()).unwrap_or(0),
                error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string(),
            ),
        };
        warn!(code, %message, "node reported relay failure");
        return Err(RelayMeshError::Relay { code, message });
    }

    Ok(serde_json::from_value(raw)?)
}
