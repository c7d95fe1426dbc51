//! Relay orchestration
//!
//! One relay call: resolve a target node, build and sign the proof, send the
//! assembled request through the transport, validate the node's answer. The
//! whole pipeline is a single pure operation over injected collaborators;
//! [`RelayClient`] is a thin wrapper that supplies its stored signer,
//! transport, and config.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use relaymesh_core::{
    Aat, Node, RelayConfig, RelayMeshError, RelayMeta, RelayPayload, RelayProof, RelayRequest,
    RelayResponse, Result, Session, SessionRequest,
};
use relaymesh_crypto::Signer;

use crate::proof::{generate_entropy, hash_request, proof_bytes};
use crate::response::validate_response;
use crate::session::{is_member, select_random};
use crate::transport::Transport;

/// Build, sign, and send one relay.
///
/// Exactly one outbound send per call; no retries happen here. A supplied
/// `node` must belong to the session, otherwise nothing is sent.
#[allow(clippy::too_many_arguments)]
pub async fn send_relay<R: Rng + Send>(
    signer: &dyn Signer,
    transport: &dyn Transport,
    session: &Session,
    blockchain: &str,
    data: &str,
    method: &str,
    path: &str,
    headers: Option<BTreeMap<String, String>>,
    node: Option<&Node>,
    aat: &Aat,
    config: &RelayConfig,
    rng: &mut R,
) -> Result<RelayResponse> {
    let target = match node {
        Some(n) => {
            if !is_member(session, n) {
                return Err(RelayMeshError::NodeNotInSession(n.public_key.clone()));
            }
            n
        }
        None => {
            if session.nodes.is_empty() {
                return Err(RelayMeshError::NoServiceNode);
            }
            select_random(session, rng)?
        }
    };

    let payload = RelayPayload {
        data: data.to_string(),
        method: method.to_string(),
        path: path.to_string(),
        headers,
    };
    let meta = RelayMeta {
        block_height: session.header.session_block_height,
    };

    // The request hash is computed once and reused: it goes into the signed
    // proof digest and into the assembled proof verbatim.
    let entropy = generate_entropy(rng);
    let request_hash = hash_request(&payload, &meta)?;
    let digest = proof_bytes(
        entropy,
        session.header.session_block_height,
        &target.public_key,
        blockchain,
        aat,
        &request_hash,
    )?;

    let digest_bytes = hex::decode(&digest)
        .map_err(|e| RelayMeshError::Signing(format!("proof digest is not hex: {e}")))?;
    let signature = signer.sign(&digest_bytes)?;

    let proof = RelayProof {
        entropy,
        session_block_height: session.header.session_block_height,
        servicer_pub_key: target.public_key.clone(),
        blockchain: blockchain.to_string(),
        aat: aat.clone(),
        signature,
        request_hash,
    };
    let request = RelayRequest {
        payload,
        meta,
        proof,
    };

    debug!(
        servicer = %target.public_key,
        service_url = %target.service_url,
        blockchain,
        entropy,
        "sending relay"
    );
    let raw = transport.send(&request, &target.service_url, config).await?;

    validate_response(raw)
}

/// Client handle bundling the collaborators a relay needs.
///
/// Stateless between calls: the session is passed into each relay, and every
/// invocation is a self-contained computation. Safe to share across tasks.
pub struct RelayClient {
    signer: Option<Box<dyn Signer>>,
    transport: Box<dyn Transport>,
    config: RelayConfig,
}

impl RelayClient {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            signer: None,
            transport,
            config: RelayConfig::default(),
        }
    }

    pub fn with_signer(mut self, signer: Box<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn with_config(mut self, config: RelayConfig) -> Self {
        self.config = config;
        self
    }

    /// Request a fresh session from the network dispatcher
    pub async fn dispatch(&self, request: &SessionRequest) -> Result<Session> {
        self.transport.dispatch(request).await
    }

    /// Send one relay within `session`, selecting a node at random unless one
    /// is supplied. Fails with `MissingSigner` before any hashing or dispatch
    /// if no signer is configured.
    #[allow(clippy::too_many_arguments)]
    pub async fn relay(
        &self,
        session: &Session,
        blockchain: &str,
        data: &str,
        method: &str,
        path: &str,
        headers: Option<BTreeMap<String, String>>,
        node: Option<&Node>,
        aat: &Aat,
    ) -> Result<RelayResponse> {
        let signer = self.signer.as_deref().ok_or(RelayMeshError::MissingSigner)?;
        let mut rng = StdRng::from_entropy();
        send_relay(
            signer,
            self.transport.as_ref(),
            session,
            blockchain,
            data,
            method,
            path,
            headers,
            node,
            aat,
            &self.config,
            &mut rng,
        )
        .await
    }
}
