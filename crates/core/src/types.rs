use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header identifying the (application, chain, height) tuple a session was
/// granted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHeader {
    pub app_public_key: String,
    pub chain: String,
    pub session_block_height: u64,
}

/// A service node descriptor. Identity is the public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub public_key: String,
    pub service_url: String,
    /// Chain identifiers this node is staked to serve
    #[serde(default)]
    pub chains: Vec<String>,
}

impl Node {
    pub fn new(public_key: impl Into<String>, service_url: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            service_url: service_url.into(),
            chains: Vec::new(),
        }
    }

    /// Whether this node is staked for the given chain
    pub fn supports_chain(&self, chain: &str) -> bool {
        self.chains.iter().any(|c| c == chain)
    }
}

/// A block-bounded grant of service nodes for relays under one application
/// and chain. Created by the network dispatcher; read-only to this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub header: SessionHeader,
    /// Opaque session key assigned by the network
    pub key: String,
    pub nodes: Vec<Node>,
}

/// Application Authentication Token: proves an application authorized a
/// client key to relay on its behalf. Field names follow the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aat {
    pub version: String,
    pub app_pub_key: String,
    pub client_pub_key: String,
    pub signature: String,
}

/// Application-level request carried inside a relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub data: String,
    pub method: String,
    pub path: String,
    /// BTreeMap keeps header order stable under serialization
    pub headers: Option<BTreeMap<String, String>>,
}

/// Block height at which a relay is valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMeta {
    pub block_height: u64,
}

/// Signed proof authorizing one relay to one servicer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayProof {
    pub entropy: u64,
    pub session_block_height: u64,
    pub servicer_pub_key: String,
    pub blockchain: String,
    pub aat: Aat,
    pub signature: String,
    pub request_hash: String,
}

/// Wire-level unit sent to a service node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub payload: RelayPayload,
    pub meta: RelayMeta,
    pub proof: RelayProof,
}

/// Normalized response from a service node. The payload is opaque to this
/// client; interpretation belongs to the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub signature: String,
    pub payload: String,
    /// Proof echoed back by the servicer, when present
    #[serde(default)]
    pub proof: Option<RelayProof>,
}

/// Arguments for requesting a new session from the network dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    pub app_public_key: String,
    pub chain: String,
    pub session_block_height: u64,
}
