//! RelayMesh Client
//!
//! Builds provable, signed relay requests for a decentralized RPC relay
//! network and validates service-node responses. Session dispatch and delivery
//! go through the [`Transport`] collaborator; signing goes through the
//! [`Signer`](relaymesh_crypto::Signer) collaborator.

pub mod proof;
mod relay;
mod response;
pub mod session;
mod transport;

pub use relay::{send_relay, RelayClient};
pub use response::validate_response;
pub use transport::Transport;

pub use relaymesh_core::{
    Aat, Node, RelayConfig, RelayMeshError, RelayMeta, RelayPayload, RelayProof, RelayRequest,
    RelayResponse, Result, Session, SessionHeader, SessionRequest,
};
