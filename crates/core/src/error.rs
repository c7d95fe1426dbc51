use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayMeshError {
    #[error("No signer configured: relay requests must be signed")]
    MissingSigner,

    #[error("Session has no service nodes available")]
    NoServiceNode,

    #[error("Node {0} is not a member of the current session")]
    NodeNotInSession(String),

    #[error("Session node list is empty")]
    EmptySession,

    #[error("Relay rejected by node ({code}): {message}")]
    Relay { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RelayMeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_signer() {
        let err = RelayMeshError::MissingSigner;
        assert_eq!(
            err.to_string(),
            "No signer configured: relay requests must be signed"
        );
    }

    #[test]
    fn test_error_display_no_service_node() {
        let err = RelayMeshError::NoServiceNode;
        assert_eq!(err.to_string(), "Session has no service nodes available");
    }

    #[test]
    fn test_error_display_node_not_in_session() {
        let err = RelayMeshError::NodeNotInSession("ab12cd".to_string());
        assert_eq!(
            err.to_string(),
            "Node ab12cd is not a member of the current session"
        );
    }

    #[test]
    fn test_error_display_empty_session() {
        let err = RelayMeshError::EmptySession;
        assert_eq!(err.to_string(), "Session node list is empty");
    }

    #[test]
    fn test_error_display_relay() {
        let err = RelayMeshError::Relay {
            code: 90,
            message: "unsupported blockchain".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Relay rejected by node (90): unsupported blockchain"
        );
    }

    #[test]
    fn test_error_display_transport() {
        let err = RelayMeshError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_error_display_signing() {
        let err = RelayMeshError::Signing("bad key length".to_string());
        assert_eq!(err.to_string(), "Signing failed: bad key length");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: RelayMeshError = json_err.into();
        assert!(matches!(err, RelayMeshError::Serialization(_)));
    }

    #[test]
    fn test_result_type_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(RelayMeshError::MissingSigner);
        assert!(result.is_err());
    }
}
