//! Configuration types

use serde::{Deserialize, Serialize};

/// Options forwarded to the transport collaborator with each relay.
///
/// The relay pipeline itself performs exactly one send per call; retry and
/// timeout enforcement belong to the transport implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Retry budget the transport may spend on a failed send
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u8,

    /// Reject self-signed TLS certificates when sending
    #[serde(default)]
    pub reject_self_signed_certificates: bool,

    /// Per-send timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_retry_attempts() -> u8 {
    3
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            retry_attempts: default_retry_attempts(),
            reject_self_signed_certificates: false,
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();
        assert_eq!(config.retry_attempts, 3);
        assert!(!config.reject_self_signed_certificates);
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: RelayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = RelayConfig {
            retry_attempts: 5,
            reject_self_signed_certificates: true,
            timeout_ms: 10_000,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RelayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
