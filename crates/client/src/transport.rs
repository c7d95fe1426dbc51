//! Transport collaborator contract
//!
//! The relay pipeline never talks to the network directly. Session dispatch
//! and relay delivery go through this trait, which a concrete HTTP (or test)
//! transport implements. Retry and timeout policy live behind this seam; the
//! pipeline performs exactly one `send` per relay and forwards the
//! [`RelayConfig`] untouched.

use async_trait::async_trait;

use relaymesh_core::{RelayConfig, RelayRequest, Result, Session, SessionRequest};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Obtain a session from the network for the given application and chain
    async fn dispatch(&self, request: &SessionRequest) -> Result<Session>;

    /// Deliver a relay request to a service node and return its raw response
    async fn send(
        &self,
        request: &RelayRequest,
        service_url: &str,
        config: &RelayConfig,
    ) -> Result<serde_json::Value>;
}
